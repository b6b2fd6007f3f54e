//! Extraction of typed payloads from raw model output.
//!
//! ```rust
//! use cparse::{ExamplePayload, parse_payload};
//!
//! let raw = "```json\n{\"exampleCode\":\"print(1)\",\"exampleCodeOutput\":\"1\"}\n```";
//! let payload: ExamplePayload = parse_payload(raw).expect("payload should parse");
//! assert_eq!(payload.example_code_output, "1");
//! ```

mod decode;
mod error;
mod payloads;

pub use decode::{ResponsePayload, parse_payload, require_text, response_excerpt, strip_code_fence};
pub use error::{ParseError, ParseErrorKind};
pub use payloads::{AnalysisResult, ExamplePayload, PracticePayload, SolutionReview};
