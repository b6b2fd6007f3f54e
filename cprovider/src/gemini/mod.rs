//! Gemini client, transport, and wire payload models.

mod client;
mod serde_api;
mod transport;

pub use client::{DEFAULT_MODEL, GeminiClient};
pub use transport::{GeminiHttpTransport, GeminiTransport};
