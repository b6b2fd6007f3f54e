//! Payload schemas for each structured response the model can return.
//!
//! Required string fields default to empty on deserialization so a missing
//! field is reported by name through [`ResponsePayload::validate`] rather
//! than as an opaque serde error.

use serde::Deserialize;

use crate::{ParseError, ResponsePayload};

fn require_field(field: &'static str, value: &str) -> Result<(), ParseError> {
    if value.trim().is_empty() {
        return Err(ParseError::missing_field(field));
    }

    Ok(())
}

/// The combined analysis bundle: everything a completed submission renders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub topic_explanation: String,
    #[serde(default)]
    pub example_code: String,
    #[serde(default)]
    pub example_code_output: String,
    #[serde(default)]
    pub practice_question: String,
    #[serde(default)]
    pub instructions: String,
}

impl ResponsePayload for AnalysisResult {
    fn validate(&self) -> Result<(), ParseError> {
        require_field("topicExplanation", &self.topic_explanation)?;
        require_field("exampleCode", &self.example_code)?;
        require_field("exampleCodeOutput", &self.example_code_output)?;
        require_field("practiceQuestion", &self.practice_question)?;
        require_field("instructions", &self.instructions)
    }
}

/// One worked example with the output it produces; the difficulty cache value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplePayload {
    #[serde(default)]
    pub example_code: String,
    #[serde(default)]
    pub example_code_output: String,
}

impl ResponsePayload for ExamplePayload {
    fn validate(&self) -> Result<(), ParseError> {
        require_field("exampleCode", &self.example_code)?;
        require_field("exampleCodeOutput", &self.example_code_output)
    }
}

/// A practice question plus the instructions for attempting it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticePayload {
    #[serde(default)]
    pub practice_question: String,
    #[serde(default)]
    pub instructions: String,
}

impl ResponsePayload for PracticePayload {
    fn validate(&self) -> Result<(), ParseError> {
        require_field("practiceQuestion", &self.practice_question)?;
        require_field("instructions", &self.instructions)
    }
}

/// Graded feedback on a user's practice solution. `is_correct` is advisory:
/// the model does not always commit to a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionReview {
    #[serde(default)]
    pub predicted_output: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub is_correct: Option<bool>,
}

impl ResponsePayload for SolutionReview {
    fn validate(&self) -> Result<(), ParseError> {
        require_field("predictedOutput", &self.predicted_output)?;
        require_field("feedback", &self.feedback)
    }
}
