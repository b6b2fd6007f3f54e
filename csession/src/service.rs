//! Tutoring session orchestration over a completion client.
//!
//! The service sequences the dependent request pipeline: the explanation
//! call resolves first because its text is embedded in the example and
//! practice prompts, which then run concurrently. Example payloads are
//! cached per difficulty so re-selecting a level never repeats a call.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use ccommon::{ChatMessage, Difficulty, Language, RequestKind, SourceKind};
use cparse::{AnalysisResult, ExamplePayload, PracticePayload, ResponsePayload, SolutionReview};
use cprompt::{
    PromptSpec, classify_source, example_prompt, explanation_prompt, follow_up_prompt,
    more_instructions_prompt, practice_prompt, solution_check_prompt,
};
use cprovider::{
    ClientOperationHooks, CompletionClient, CompletionRequest, DEFAULT_MODEL, NoopClientHooks,
    execute_observed,
};
use futures_util::future::try_join;

use crate::{
    InMemoryTranscriptStore, NoopSessionHooks, SessionError, SessionHooks, SessionPhase,
    SessionSnapshot, SubmissionId, TranscriptStore,
};

pub struct TutorService {
    client: Arc<dyn CompletionClient>,
    transcripts: Arc<dyn TranscriptStore>,
    session_hooks: Arc<dyn SessionHooks>,
    client_hooks: Arc<dyn ClientOperationHooks>,
    model: String,
    initial_difficulty: Difficulty,
    slot: Mutex<SessionSlot>,
    next_id: AtomicU64,
}

impl TutorService {
    pub fn builder(client: Arc<dyn CompletionClient>) -> TutorServiceBuilder {
        TutorServiceBuilder::new(client)
    }

    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self::builder(client).build()
    }

    /// Analyzes a fresh submission: explanation first, then the initial
    /// example and practice payloads concurrently. Replaces any prior
    /// session; a failure of any of the three calls aborts the whole
    /// submission and leaves no partial result behind.
    pub async fn submit(
        &self,
        source_text: &str,
        language: Language,
    ) -> Result<AnalysisResult, SessionError> {
        if language.is_unknown() {
            return Err(SessionError::invalid_language(language));
        }

        if source_text.trim().is_empty() {
            return Err(SessionError::invalid_request("source text must not be blank"));
        }

        let id = self.allocate_submission();
        let source_kind = classify_source(source_text);
        let previous_id = {
            let mut slot = self.lock_slot()?;
            let previous_id = slot.id;
            *slot = SessionSlot::submitting(
                id,
                source_text.to_string(),
                language,
                source_kind,
                self.initial_difficulty,
            );
            previous_id
        };
        self.transcripts.clear(previous_id).await?;

        self.session_hooks.on_phase_start(SessionPhase::Submitting, id);
        let started = Instant::now();
        let outcome = self.run_submission(id, source_text, language).await;

        if outcome.is_err()
            && let Ok(mut slot) = self.slot.lock()
            && slot.id == id
        {
            *slot = SessionSlot::empty(id);
        }

        self.report_outcome(SessionPhase::Submitting, id, started, &outcome);
        outcome
    }

    /// Returns the example payload for a difficulty level, from cache when
    /// available (no client call), fetching and caching it otherwise. A
    /// failed fetch leaves the previously displayed difficulty untouched.
    pub async fn change_difficulty(
        &self,
        level: Difficulty,
    ) -> Result<ExamplePayload, SessionError> {
        let (id, language, explanation) = {
            let mut slot = self.lock_slot()?;
            let Some(result) = slot.result.as_ref() else {
                return Err(SessionError::invalid_request(
                    "no completed analysis to adjust",
                ));
            };

            if let Some(payload) = slot.examples.get(&level) {
                let payload = payload.clone();
                slot.selected = level;
                return Ok(payload);
            }

            let explanation = result.topic_explanation.clone();
            slot.phase = SessionPhase::ChangingDifficulty;
            (slot.id, slot.language, explanation)
        };

        self.session_hooks
            .on_phase_start(SessionPhase::ChangingDifficulty, id);
        let started = Instant::now();

        let fetched = match example_prompt(&explanation, language, level) {
            Ok(spec) => self.generate_payload::<ExamplePayload>(RequestKind::Example, spec).await,
            Err(error) => Err(error.into()),
        };

        let outcome = {
            let mut slot = self.lock_slot()?;
            let current = slot.id == id;
            if current {
                slot.phase = SessionPhase::Ready;
            }

            match fetched {
                Ok(payload) if current => {
                    slot.examples.insert(level, payload.clone());
                    slot.selected = level;
                    Ok(payload)
                }
                Ok(_) => Err(SessionError::superseded(id)),
                Err(error) if current => Err(error),
                Err(_) => Err(SessionError::superseded(id)),
            }
        };

        self.report_outcome(SessionPhase::ChangingDifficulty, id, started, &outcome);
        outcome
    }

    /// Grades a solution attempt against the current practice question.
    /// Always a fresh call; never cached.
    pub async fn check_solution(&self, user_code: &str) -> Result<SolutionReview, SessionError> {
        if user_code.trim().is_empty() {
            return Err(SessionError::invalid_request(
                "solution code must not be blank",
            ));
        }

        let (id, language, explanation, question) = {
            let mut slot = self.lock_slot()?;
            let Some(result) = slot.result.as_ref() else {
                return Err(SessionError::invalid_request(
                    "no practice question to grade against",
                ));
            };

            let explanation = result.topic_explanation.clone();
            let question = result.practice_question.clone();
            slot.phase = SessionPhase::CheckingSolution;
            (slot.id, slot.language, explanation, question)
        };

        self.session_hooks
            .on_phase_start(SessionPhase::CheckingSolution, id);
        let started = Instant::now();

        let fetched = match solution_check_prompt(&question, &explanation, language, user_code) {
            Ok(spec) => {
                self.generate_payload::<SolutionReview>(RequestKind::SolutionCheck, spec)
                    .await
            }
            Err(error) => Err(error.into()),
        };

        let outcome = match self.restore_ready(id)? {
            true => fetched,
            false => Err(SessionError::superseded(id)),
        };

        self.report_outcome(SessionPhase::CheckingSolution, id, started, &outcome);
        outcome
    }

    /// Answers a freeform follow-up question, re-contextualized with the
    /// original submission and the conversation so far. The turn pair is
    /// appended to the session transcript on success.
    pub async fn ask_follow_up(&self, question: &str) -> Result<String, SessionError> {
        if question.trim().is_empty() {
            return Err(SessionError::invalid_request(
                "follow-up question must not be blank",
            ));
        }

        let (id, source_text, source_kind, explanation) = {
            let mut slot = self.lock_slot()?;
            let Some(result) = slot.result.as_ref() else {
                return Err(SessionError::invalid_request(
                    "no completed analysis to ask about",
                ));
            };

            let explanation = result.topic_explanation.clone();
            slot.phase = SessionPhase::AskingFollowUp;
            (
                slot.id,
                slot.source_text.clone(),
                slot.source_kind,
                explanation,
            )
        };

        self.session_hooks
            .on_phase_start(SessionPhase::AskingFollowUp, id);
        let started = Instant::now();

        let fetched = async {
            let history = self.transcripts.load(id).await?;
            let spec =
                follow_up_prompt(question, &source_text, source_kind, &explanation, &history)?;
            self.generate_text(RequestKind::FollowUp, spec).await
        }
        .await;

        let current = self.restore_ready(id)?;
        let outcome = match fetched {
            Ok(answer) if current => {
                self.transcripts
                    .append(
                        id,
                        vec![ChatMessage::user(question), ChatMessage::assistant(&answer)],
                    )
                    .await?;
                Ok(answer)
            }
            Ok(_) => Err(SessionError::superseded(id)),
            Err(error) if current => Err(error),
            Err(_) => Err(SessionError::superseded(id)),
        };

        self.report_outcome(SessionPhase::AskingFollowUp, id, started, &outcome);
        outcome
    }

    /// Fetches additional attempt guidance for the current practice
    /// question. Plain text, never cached, no session state touched.
    pub async fn more_instructions(&self) -> Result<String, SessionError> {
        let (id, language, explanation, question) = {
            let slot = self.lock_slot()?;
            let Some(result) = slot.result.as_ref() else {
                return Err(SessionError::invalid_request(
                    "no practice question to expand on",
                ));
            };

            (
                slot.id,
                slot.language,
                result.topic_explanation.clone(),
                result.practice_question.clone(),
            )
        };

        let spec = more_instructions_prompt(&explanation, &question, language)?;
        let text = self
            .generate_text(RequestKind::MoreInstructions, spec)
            .await?;

        if self.lock_slot()?.id != id {
            return Err(SessionError::superseded(id));
        }

        Ok(text)
    }

    pub fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        let slot = self.lock_slot()?;
        let active = !slot.language.is_unknown();
        let cached_difficulties = Difficulty::ALL
            .into_iter()
            .filter(|level| slot.examples.contains_key(level))
            .collect();

        Ok(SessionSnapshot {
            id: slot.id,
            phase: slot.phase,
            language: active.then_some(slot.language),
            source_kind: active.then_some(slot.source_kind),
            selected_difficulty: slot.selected,
            cached_difficulties,
            result: slot.result.clone(),
        })
    }

    pub async fn transcript(&self) -> Result<Vec<ChatMessage>, SessionError> {
        let id = self.lock_slot()?.id;
        self.transcripts.load(id).await
    }

    async fn run_submission(
        &self,
        id: SubmissionId,
        source_text: &str,
        language: Language,
    ) -> Result<AnalysisResult, SessionError> {
        let spec = explanation_prompt(source_text, language)?;
        let explanation = self.generate_text(RequestKind::Explanation, spec).await?;

        let example_spec = example_prompt(&explanation, language, self.initial_difficulty)?;
        let practice_spec = practice_prompt(&explanation, language, self.initial_difficulty)?;

        let (example, practice) = try_join(
            self.generate_payload::<ExamplePayload>(RequestKind::Example, example_spec),
            self.generate_payload::<PracticePayload>(RequestKind::Practice, practice_spec),
        )
        .await?;

        let result = AnalysisResult {
            topic_explanation: explanation,
            example_code: example.example_code.clone(),
            example_code_output: example.example_code_output.clone(),
            practice_question: practice.practice_question,
            instructions: practice.instructions,
        };

        let mut slot = self.lock_slot()?;
        if slot.id != id {
            return Err(SessionError::superseded(id));
        }

        slot.phase = SessionPhase::Ready;
        slot.result = Some(result.clone());
        slot.examples.insert(self.initial_difficulty, example);
        slot.selected = self.initial_difficulty;
        Ok(result)
    }

    async fn generate_text(
        &self,
        kind: RequestKind,
        spec: PromptSpec,
    ) -> Result<String, SessionError> {
        let completion = self.generate(kind, spec).await?;
        cparse::require_text(&completion.text).map_err(|error| SessionError::malformed(kind, error))
    }

    async fn generate_payload<T: ResponsePayload>(
        &self,
        kind: RequestKind,
        spec: PromptSpec,
    ) -> Result<T, SessionError> {
        let completion = self.generate(kind, spec).await?;
        cparse::parse_payload::<T>(&completion.text)
            .map_err(|error| SessionError::malformed(kind, error))
    }

    async fn generate(
        &self,
        kind: RequestKind,
        spec: PromptSpec,
    ) -> Result<cprovider::Completion, SessionError> {
        let request =
            CompletionRequest::new(self.model.clone(), spec.text).with_options(spec.options);

        let completion = execute_observed(
            kind.as_str(),
            &self.model,
            self.client_hooks.as_ref(),
            self.client.generate(request),
        )
        .await?;

        Ok(completion)
    }

    fn allocate_submission(&self) -> SubmissionId {
        SubmissionId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn lock_slot(&self) -> Result<MutexGuard<'_, SessionSlot>, SessionError> {
        self.slot
            .lock()
            .map_err(|_| SessionError::store("session slot lock poisoned"))
    }

    /// Returns whether `id` still owns the slot, restoring `Ready` when it
    /// does.
    fn restore_ready(&self, id: SubmissionId) -> Result<bool, SessionError> {
        let mut slot = self.lock_slot()?;
        let current = slot.id == id;
        if current {
            slot.phase = SessionPhase::Ready;
        }

        Ok(current)
    }

    fn report_outcome<T>(
        &self,
        phase: SessionPhase,
        id: SubmissionId,
        started: Instant,
        outcome: &Result<T, SessionError>,
    ) {
        match outcome {
            Ok(_) => self
                .session_hooks
                .on_phase_success(phase, id, started.elapsed()),
            Err(error) => {
                self.session_hooks
                    .on_phase_failure(phase, id, error, started.elapsed())
            }
        }
    }
}

pub struct TutorServiceBuilder {
    client: Arc<dyn CompletionClient>,
    transcripts: Option<Arc<dyn TranscriptStore>>,
    session_hooks: Option<Arc<dyn SessionHooks>>,
    client_hooks: Option<Arc<dyn ClientOperationHooks>>,
    model: String,
    initial_difficulty: Difficulty,
}

impl TutorServiceBuilder {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            transcripts: None,
            session_hooks: None,
            client_hooks: None,
            model: DEFAULT_MODEL.to_string(),
            initial_difficulty: Difficulty::default(),
        }
    }

    pub fn transcripts(mut self, transcripts: Arc<dyn TranscriptStore>) -> Self {
        self.transcripts = Some(transcripts);
        self
    }

    pub fn session_hooks(mut self, hooks: Arc<dyn SessionHooks>) -> Self {
        self.session_hooks = Some(hooks);
        self
    }

    pub fn client_hooks(mut self, hooks: Arc<dyn ClientOperationHooks>) -> Self {
        self.client_hooks = Some(hooks);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn initial_difficulty(mut self, initial_difficulty: Difficulty) -> Self {
        self.initial_difficulty = initial_difficulty;
        self
    }

    pub fn build(self) -> TutorService {
        TutorService {
            client: self.client,
            transcripts: self
                .transcripts
                .unwrap_or_else(|| Arc::new(InMemoryTranscriptStore::new())),
            session_hooks: self
                .session_hooks
                .unwrap_or_else(|| Arc::new(NoopSessionHooks)),
            client_hooks: self
                .client_hooks
                .unwrap_or_else(|| Arc::new(NoopClientHooks)),
            model: self.model,
            initial_difficulty: self.initial_difficulty,
            slot: Mutex::new(SessionSlot::empty(SubmissionId(0))),
            next_id: AtomicU64::new(0),
        }
    }
}

#[derive(Debug)]
struct SessionSlot {
    id: SubmissionId,
    phase: SessionPhase,
    language: Language,
    source_kind: SourceKind,
    source_text: String,
    selected: Difficulty,
    result: Option<AnalysisResult>,
    examples: HashMap<Difficulty, ExamplePayload>,
}

impl SessionSlot {
    fn empty(id: SubmissionId) -> Self {
        Self {
            id,
            phase: SessionPhase::Empty,
            language: Language::Unknown,
            source_kind: SourceKind::Code,
            source_text: String::new(),
            selected: Difficulty::default(),
            result: None,
            examples: HashMap::new(),
        }
    }

    fn submitting(
        id: SubmissionId,
        source_text: String,
        language: Language,
        source_kind: SourceKind,
        selected: Difficulty,
    ) -> Self {
        Self {
            id,
            phase: SessionPhase::Submitting,
            language,
            source_kind,
            source_text,
            selected,
            result: None,
            examples: HashMap::new(),
        }
    }
}
