//! Session identity, phase, and snapshot types.

use std::fmt::{Display, Formatter};

use ccommon::{Difficulty, Language, SourceKind};
use cparse::AnalysisResult;

/// Monotonically increasing identifier for one submission. Async completions
/// compare their id against the current one and are discarded when stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(pub u64);

impl Display for SubmissionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    Submitting,
    Ready,
    ChangingDifficulty,
    CheckingSolution,
    AskingFollowUp,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Submitting => "submitting",
            Self::Ready => "ready",
            Self::ChangingDifficulty => "changing-difficulty",
            Self::CheckingSolution => "checking-solution",
            Self::AskingFollowUp => "asking-follow-up",
        }
    }
}

impl Display for SessionPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of the current session for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub id: SubmissionId,
    pub phase: SessionPhase,
    pub language: Option<Language>,
    pub source_kind: Option<SourceKind>,
    pub selected_difficulty: Difficulty,
    pub cached_difficulties: Vec<Difficulty>,
    pub result: Option<AnalysisResult>,
}
