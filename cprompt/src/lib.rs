//! Prompt construction for every tutoring request kind.
//!
//! ```rust
//! use ccommon::{Difficulty, Language};
//! use cprompt::example_prompt;
//!
//! let spec = example_prompt("Closures capture their environment.", Language::Rust, Difficulty::Easy)
//!     .expect("prompt should build");
//!
//! assert!(spec.options.json_response);
//! assert!(spec.text.contains("Rust"));
//! ```

mod builders;
mod classify;
mod error;

pub use builders::{
    PromptSpec, example_prompt, explanation_prompt, follow_up_prompt, more_instructions_prompt,
    practice_prompt, solution_check_prompt,
};
pub use classify::classify_source;
pub use error::{PromptError, PromptErrorKind};

#[cfg(test)]
mod tests {
    use ccommon::{ChatMessage, Difficulty, Language, SourceKind};

    use super::*;

    #[test]
    fn unknown_language_is_refused_by_every_language_scoped_builder() {
        let explanation = explanation_prompt("print(1)", Language::Unknown);
        let example = example_prompt("topic", Language::Unknown, Difficulty::Easy);
        let practice = practice_prompt("topic", Language::Unknown, Difficulty::Hard);
        let check = solution_check_prompt("q", "topic", Language::Unknown, "code");

        for result in [explanation, example, practice, check] {
            let error = result.expect_err("unknown language must be refused");
            assert_eq!(error.kind, PromptErrorKind::InvalidLanguage);
        }
    }

    #[test]
    fn blank_context_is_refused_before_any_rendering() {
        let error = explanation_prompt("   ", Language::Python).expect_err("blank source");
        assert_eq!(error.kind, PromptErrorKind::InvalidRequest);

        let error = example_prompt("", Language::Python, Difficulty::Easy)
            .expect_err("blank explanation");
        assert_eq!(error.kind, PromptErrorKind::InvalidRequest);

        let error = solution_check_prompt("q", "topic", Language::Python, " \n ")
            .expect_err("blank solution");
        assert_eq!(error.kind, PromptErrorKind::InvalidRequest);
    }

    #[test]
    fn structured_builders_request_json_and_name_their_fields() {
        let example = example_prompt("topic", Language::Go, Difficulty::Intermediate)
            .expect("prompt should build");
        assert!(example.options.json_response);
        assert!(example.text.contains("\"exampleCode\""));
        assert!(example.text.contains("\"exampleCodeOutput\""));
        assert!(example.text.contains("intermediate"));

        let practice =
            practice_prompt("topic", Language::Go, Difficulty::Hard).expect("prompt should build");
        assert!(practice.text.contains("\"practiceQuestion\""));
        assert!(practice.text.contains("\"instructions\""));

        let check = solution_check_prompt("q", "topic", Language::Go, "code")
            .expect("prompt should build");
        assert!(check.text.contains("\"predictedOutput\""));
        assert!(check.text.contains("\"isCorrect\""));
    }

    #[test]
    fn conversational_builders_stay_plain_text() {
        let explanation =
            explanation_prompt("print(1)", Language::Python).expect("prompt should build");
        assert!(!explanation.options.json_response);

        let more = more_instructions_prompt("topic", "q", Language::Python)
            .expect("prompt should build");
        assert!(!more.options.json_response);
    }

    #[test]
    fn follow_up_prompt_renders_history_and_classification() {
        let history = vec![
            ChatMessage::user("why is the loop infinite?"),
            ChatMessage::assistant("the counter is never incremented"),
        ];

        let spec = follow_up_prompt(
            "how do I fix it?",
            "while true: pass",
            SourceKind::Code,
            "This code demonstrates a while loop.",
            &history,
        )
        .expect("prompt should build");

        assert!(spec.text.contains("source code"));
        assert!(spec.text.contains("Student: why is the loop infinite?"));
        assert!(spec.text.contains("Tutor: the counter is never incremented"));
        assert!(spec.text.contains("how do I fix it?"));

        let concept = follow_up_prompt(
            "what about deques?",
            "difference between stacks and queues",
            SourceKind::Concept,
            "Stacks are LIFO, queues are FIFO.",
            &[],
        )
        .expect("prompt should build");
        assert!(concept.text.contains("concept"));
        assert!(!concept.text.contains("Conversation so far"));
    }

    #[test]
    fn blank_follow_up_question_is_refused() {
        let error = follow_up_prompt("  ", "src", SourceKind::Code, "topic", &[])
            .expect_err("blank question must be refused");
        assert_eq!(error.kind, PromptErrorKind::InvalidRequest);
    }
}
