//! One builder per request kind, mapping typed context to a prompt plus
//! the generation settings that request expects.

use std::fmt::Write as _;

use ccommon::{ChatMessage, ChatRole, Difficulty, GenerationOptions, Language, SourceKind};

use crate::PromptError;

/// Temperature for calls that must return a strict JSON payload.
const STRUCTURED_TEMPERATURE: f32 = 0.2;
/// Temperature for conversational, plain-text calls.
const CONVERSATIONAL_TEMPERATURE: f32 = 0.7;

/// A rendered prompt and the model configuration it should be sent with.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub text: String,
    pub options: GenerationOptions,
}

impl PromptSpec {
    fn plain(text: String) -> Self {
        Self {
            text,
            options: GenerationOptions::default().with_temperature(CONVERSATIONAL_TEMPERATURE),
        }
    }

    fn json(text: String) -> Self {
        Self {
            text,
            options: GenerationOptions::default()
                .with_temperature(STRUCTURED_TEMPERATURE)
                .expect_json(),
        }
    }
}

fn resolved(language: Language) -> Result<Language, PromptError> {
    if language.is_unknown() {
        return Err(PromptError::invalid_language(language));
    }

    Ok(language)
}

fn required(field: &str, value: &str) -> Result<(), PromptError> {
    if value.trim().is_empty() {
        return Err(PromptError::invalid_request(format!(
            "{field} must not be blank"
        )));
    }

    Ok(())
}

/// Plain-text topic explanation for a fresh submission.
pub fn explanation_prompt(source_text: &str, language: Language) -> Result<PromptSpec, PromptError> {
    let language = resolved(language)?;
    required("source text", source_text)?;

    let text = format!(
        "You are a patient programming tutor. A student is studying {language}.\n\
         Identify the main topic or concept the submission below demonstrates and \
         explain it to the student in clear, encouraging prose. Cover what the code \
         does, why it works, and the one idea the student should take away.\n\
         Respond with plain text only, no markdown fences.\n\n\
         Student submission:\n{source_text}"
    );

    Ok(PromptSpec::plain(text))
}

/// Runnable example scoped to a difficulty level. JSON response.
pub fn example_prompt(
    topic_explanation: &str,
    language: Language,
    difficulty: Difficulty,
) -> Result<PromptSpec, PromptError> {
    let language = resolved(language)?;
    required("topic explanation", topic_explanation)?;

    let text = format!(
        "Write a short, self-contained {language} example at {difficulty} difficulty \
         illustrating the topic explained below. The example must run as-is.\n\
         Respond as a JSON object with exactly two string fields: \"exampleCode\" \
         (the complete source) and \"exampleCodeOutput\" (the exact output running it \
         produces).\n\n\
         Topic explanation:\n{topic_explanation}"
    );

    Ok(PromptSpec::json(text))
}

/// Practice question plus attempt instructions at a difficulty level. JSON response.
pub fn practice_prompt(
    topic_explanation: &str,
    language: Language,
    difficulty: Difficulty,
) -> Result<PromptSpec, PromptError> {
    let language = resolved(language)?;
    required("topic explanation", topic_explanation)?;

    let text = format!(
        "Pose one {difficulty}-difficulty practice exercise in {language} that tests \
         the topic explained below. The student will write code to solve it.\n\
         Respond as a JSON object with exactly two string fields: \"practiceQuestion\" \
         (the exercise statement) and \"instructions\" (numbered steps guiding the \
         student through an attempt without giving the solution away).\n\n\
         Topic explanation:\n{topic_explanation}"
    );

    Ok(PromptSpec::json(text))
}

/// Grades a student's solution against the current practice question. JSON response.
pub fn solution_check_prompt(
    practice_question: &str,
    topic_explanation: &str,
    language: Language,
    user_code: &str,
) -> Result<PromptSpec, PromptError> {
    let language = resolved(language)?;
    required("practice question", practice_question)?;
    required("topic explanation", topic_explanation)?;
    required("solution code", user_code)?;

    let text = format!(
        "A student was given the following {language} practice exercise and submitted \
         the solution below. Evaluate the solution against the exercise.\n\
         Respond as a JSON object with string fields \"predictedOutput\" (what the \
         solution prints or evaluates to, or a description of the error it raises) and \
         \"feedback\" (specific, constructive review), plus an optional boolean field \
         \"isCorrect\".\n\n\
         Topic explanation:\n{topic_explanation}\n\n\
         Exercise:\n{practice_question}\n\n\
         Student solution:\n{user_code}"
    );

    Ok(PromptSpec::json(text))
}

/// Freeform follow-up question, re-contextualized with the original
/// submission and the conversation so far. Plain-text response.
pub fn follow_up_prompt(
    question: &str,
    source_text: &str,
    source_kind: SourceKind,
    topic_explanation: &str,
    history: &[ChatMessage],
) -> Result<PromptSpec, PromptError> {
    required("follow-up question", question)?;
    required("source text", source_text)?;
    required("topic explanation", topic_explanation)?;

    let submission = match source_kind {
        SourceKind::Code => "The student originally submitted this source code:",
        SourceKind::Concept => "The student originally asked about this concept:",
    };

    let mut text = format!(
        "You are a programming tutor continuing a conversation with a student.\n\
         {submission}\n{source_text}\n\n\
         You previously explained:\n{topic_explanation}\n"
    );

    if !history.is_empty() {
        text.push_str("\nConversation so far:\n");
        for message in history {
            let speaker = match message.role {
                ChatRole::User => "Student",
                ChatRole::Assistant => "Tutor",
            };
            let _ = writeln!(text, "{speaker}: {}", message.content);
        }
    }

    let _ = write!(
        text,
        "\nThe student now asks:\n{question}\n\n\
         Answer the question directly in plain text, staying grounded in the \
         original submission."
    );

    Ok(PromptSpec::plain(text))
}

/// Additional attempt guidance for the current practice question. Plain-text response.
pub fn more_instructions_prompt(
    topic_explanation: &str,
    practice_question: &str,
    language: Language,
) -> Result<PromptSpec, PromptError> {
    let language = resolved(language)?;
    required("topic explanation", topic_explanation)?;
    required("practice question", practice_question)?;

    let text = format!(
        "A student is stuck on the following {language} practice exercise. Give more \
         detailed step-by-step guidance than before, still without revealing a \
         complete solution. Respond with plain text only.\n\n\
         Topic explanation:\n{topic_explanation}\n\n\
         Exercise:\n{practice_question}"
    );

    Ok(PromptSpec::plain(text))
}
