//! # scribe-llm
//!
//! Generation backend abstraction and the streaming Gemini provider.
//!
//! - **Provider boundary**: [`provider::Provider`] trait,
//!   [`provider::GenerationRequest`], [`provider::ProviderError`] taxonomy,
//!   and the [`provider::ChunkStream`] type the engine consumes
//! - **Gemini**: [`google::GoogleProvider`] — `streamGenerateContent` over
//!   SSE, framed with `eventsource-stream` (which carries partial UTF-8
//!   sequences across network reads)
//!
//! ## Crate Position
//!
//! Backend boundary. Depends only on the HTTP/async stack; depended on by
//! scribe-engine.

#![deny(unsafe_code)]

pub mod google;
pub mod provider;

pub use google::{GenerationConfig, GoogleConfig, GoogleProvider};
pub use provider::{ChunkStream, GenerationRequest, Provider, ProviderError, ProviderResult};
