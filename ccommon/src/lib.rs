//! Shared primitives for the chalkdust workspace crates.
//!
//! ```rust
//! use ccommon::{Difficulty, GenerationOptions, Language, RequestKind};
//!
//! let language = Language::from_name("TypeScript").expect("known language");
//! let options = GenerationOptions::default().with_temperature(0.2).expect_json();
//!
//! assert_eq!(language, Language::TypeScript);
//! assert_eq!(Difficulty::default(), Difficulty::Intermediate);
//! assert_eq!(RequestKind::SolutionCheck.to_string(), "solution-check");
//! assert!(options.json_response);
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use ccommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod lang {
    //! Tutoring languages and the unknown sentinel.
    //!
    //! ```rust
    //! use ccommon::Language;
    //!
    //! assert_eq!(Language::from_extension("rs"), Language::Rust);
    //! assert_eq!(Language::from_name("c++"), Some(Language::Cpp));
    //! assert!(Language::Unknown.is_unknown());
    //! ```

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Language {
        Python,
        JavaScript,
        TypeScript,
        Rust,
        Go,
        Java,
        CSharp,
        Cpp,
        Ruby,
        Php,
        Swift,
        Kotlin,
        Shell,
        Unknown,
    }

    impl Language {
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Python => "Python",
                Self::JavaScript => "JavaScript",
                Self::TypeScript => "TypeScript",
                Self::Rust => "Rust",
                Self::Go => "Go",
                Self::Java => "Java",
                Self::CSharp => "C#",
                Self::Cpp => "C++",
                Self::Ruby => "Ruby",
                Self::Php => "PHP",
                Self::Swift => "Swift",
                Self::Kotlin => "Kotlin",
                Self::Shell => "Shell",
                Self::Unknown => "unknown",
            }
        }

        pub fn is_unknown(&self) -> bool {
            matches!(self, Self::Unknown)
        }

        /// Case-insensitive lookup by display name or common alias.
        pub fn from_name(name: &str) -> Option<Self> {
            let language = match name.trim().to_ascii_lowercase().as_str() {
                "python" | "py" => Self::Python,
                "javascript" | "js" => Self::JavaScript,
                "typescript" | "ts" => Self::TypeScript,
                "rust" | "rs" => Self::Rust,
                "go" | "golang" => Self::Go,
                "java" => Self::Java,
                "c#" | "csharp" => Self::CSharp,
                "c++" | "cpp" => Self::Cpp,
                "ruby" | "rb" => Self::Ruby,
                "php" => Self::Php,
                "swift" => Self::Swift,
                "kotlin" | "kt" => Self::Kotlin,
                "shell" | "bash" | "sh" => Self::Shell,
                _ => return None,
            };

            Some(language)
        }

        /// Maps an uploaded file's extension to a language, `Unknown` when
        /// the extension is unrecognized.
        pub fn from_extension(extension: &str) -> Self {
            match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
                "py" => Self::Python,
                "js" | "mjs" | "cjs" | "jsx" => Self::JavaScript,
                "ts" | "tsx" => Self::TypeScript,
                "rs" => Self::Rust,
                "go" => Self::Go,
                "java" => Self::Java,
                "cs" => Self::CSharp,
                "cpp" | "cc" | "cxx" | "hpp" | "h" => Self::Cpp,
                "rb" => Self::Ruby,
                "php" => Self::Php,
                "swift" => Self::Swift,
                "kt" | "kts" => Self::Kotlin,
                "sh" | "bash" => Self::Shell,
                _ => Self::Unknown,
            }
        }
    }

    impl Display for Language {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum SourceKind {
        Code,
        Concept,
    }

    impl SourceKind {
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Code => "code",
                Self::Concept => "concept",
            }
        }
    }

    impl Display for SourceKind {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }
}

pub mod level {
    //! Difficulty levels scoping example and practice generation.

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Difficulty {
        Easy,
        Intermediate,
        Hard,
    }

    impl Difficulty {
        pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Intermediate, Self::Hard];

        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Easy => "easy",
                Self::Intermediate => "intermediate",
                Self::Hard => "hard",
            }
        }

        pub fn from_name(name: &str) -> Option<Self> {
            let level = match name.trim().to_ascii_lowercase().as_str() {
                "easy" => Self::Easy,
                "intermediate" | "medium" => Self::Intermediate,
                "hard" => Self::Hard,
                _ => return None,
            };

            Some(level)
        }
    }

    impl Default for Difficulty {
        fn default() -> Self {
            Self::Intermediate
        }
    }

    impl Display for Difficulty {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }
}

pub mod request {
    //! Request kinds, one per category of model call.
    //!
    //! ```rust
    //! use ccommon::RequestKind;
    //!
    //! assert_eq!(RequestKind::Explanation.to_string(), "explanation");
    //! assert_eq!(RequestKind::MoreInstructions.to_string(), "more-instructions");
    //! ```

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum RequestKind {
        Explanation,
        Example,
        Practice,
        SolutionCheck,
        FollowUp,
        MoreInstructions,
    }

    impl RequestKind {
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Explanation => "explanation",
                Self::Example => "example",
                Self::Practice => "practice",
                Self::SolutionCheck => "solution-check",
                Self::FollowUp => "follow-up",
                Self::MoreInstructions => "more-instructions",
            }
        }
    }

    impl Display for RequestKind {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }
}

pub mod chat {
    //! Follow-up conversation turn types.

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ChatRole {
        User,
        Assistant,
    }

    impl Display for ChatRole {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            let role = match self {
                Self::User => "user",
                Self::Assistant => "assistant",
            };

            f.write_str(role)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ChatMessage {
        pub role: ChatRole,
        pub content: String,
    }

    impl ChatMessage {
        pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
            Self {
                role,
                content: content.into(),
            }
        }

        pub fn user(content: impl Into<String>) -> Self {
            Self::new(ChatRole::User, content)
        }

        pub fn assistant(content: impl Into<String>) -> Self {
            Self::new(ChatRole::Assistant, content)
        }
    }
}

pub mod model {
    //! Shared generation settings used by request types.
    //!
    //! ```rust
    //! use ccommon::GenerationOptions;
    //!
    //! let options = GenerationOptions::default()
    //!     .with_temperature(0.2)
    //!     .with_max_output_tokens(1024)
    //!     .expect_json();
    //!
    //! assert_eq!(options.temperature, Some(0.2));
    //! assert!(options.json_response);
    //! ```

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct GenerationOptions {
        pub temperature: Option<f32>,
        pub max_output_tokens: Option<u32>,
        pub json_response: bool,
    }

    impl GenerationOptions {
        pub fn with_temperature(mut self, temperature: f32) -> Self {
            self.temperature = Some(temperature);
            self
        }

        pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
            self.max_output_tokens = Some(max_output_tokens);
            self
        }

        pub fn with_json_response(mut self, json_response: bool) -> Self {
            self.json_response = json_response;
            self
        }

        pub fn expect_json(self) -> Self {
            self.with_json_response(true)
        }
    }
}

pub use chat::{ChatMessage, ChatRole};
pub use future::BoxFuture;
pub use lang::{Language, SourceKind};
pub use level::Difficulty;
pub use model::GenerationOptions;
pub use request::RequestKind;

#[cfg(test)]
mod tests {
    use super::{ChatMessage, ChatRole, Difficulty, GenerationOptions, Language, RequestKind};

    #[test]
    fn language_lookup_accepts_aliases_and_rejects_noise() {
        assert_eq!(Language::from_name("JS"), Some(Language::JavaScript));
        assert_eq!(Language::from_name("golang"), Some(Language::Go));
        assert_eq!(Language::from_name("brainfuck"), None);
    }

    #[test]
    fn language_extension_mapping_falls_back_to_unknown() {
        assert_eq!(Language::from_extension(".py"), Language::Python);
        assert_eq!(Language::from_extension("tsx"), Language::TypeScript);
        assert_eq!(Language::from_extension("xyz"), Language::Unknown);
        assert!(Language::from_extension("xyz").is_unknown());
    }

    #[test]
    fn difficulty_defaults_to_intermediate_and_round_trips_names() {
        assert_eq!(Difficulty::default(), Difficulty::Intermediate);

        for level in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(level.as_str()), Some(level));
        }

        assert_eq!(Difficulty::from_name("medium"), Some(Difficulty::Intermediate));
        assert_eq!(Difficulty::from_name("impossible"), None);
    }

    #[test]
    fn request_kind_display_is_stable() {
        assert_eq!(RequestKind::Explanation.to_string(), "explanation");
        assert_eq!(RequestKind::Example.to_string(), "example");
        assert_eq!(RequestKind::Practice.to_string(), "practice");
        assert_eq!(RequestKind::SolutionCheck.to_string(), "solution-check");
        assert_eq!(RequestKind::FollowUp.to_string(), "follow-up");
        assert_eq!(RequestKind::MoreInstructions.to_string(), "more-instructions");
    }

    #[test]
    fn chat_message_helpers_assign_roles() {
        let question = ChatMessage::user("why does this borrow fail?");
        let answer = ChatMessage::assistant("the value is moved in the loop");

        assert_eq!(question.role, ChatRole::User);
        assert_eq!(answer.role, ChatRole::Assistant);
    }

    #[test]
    fn generation_options_builder_helpers_set_values() {
        let options = GenerationOptions::default()
            .with_temperature(0.3)
            .with_max_output_tokens(512)
            .expect_json();

        assert_eq!(options.temperature, Some(0.3));
        assert_eq!(options.max_output_tokens, Some(512));
        assert!(options.json_response);
    }
}
