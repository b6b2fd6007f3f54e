//! Session orchestration for analyzed submissions: the explanation-first
//! request pipeline, the per-difficulty example cache, solution grading,
//! and follow-up conversation, all behind one service the presentation
//! layer calls.

mod error;
mod hooks;
mod service;
mod transcript;
mod types;

pub use cparse::{AnalysisResult, ExamplePayload, PracticePayload, SolutionReview};
pub use error::{SessionError, SessionErrorKind};
pub use hooks::{NoopSessionHooks, SessionHooks};
pub use service::{TutorService, TutorServiceBuilder};
pub use transcript::{InMemoryTranscriptStore, TranscriptStore};
pub use types::{SessionPhase, SessionSnapshot, SubmissionId};
