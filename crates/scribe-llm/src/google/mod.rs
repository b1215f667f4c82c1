//! Google/Gemini streaming provider.
//!
//! Composition: `provider` (entry point), `stream_handler` (SSE event JSON →
//! text chunks), `types` (config and wire types).

pub mod provider;
pub mod stream_handler;
pub mod types;

pub use provider::GoogleProvider;
pub use types::{GenerationConfig, GoogleConfig};
