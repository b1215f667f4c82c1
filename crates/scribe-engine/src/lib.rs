//! # scribe-engine
//!
//! Streaming reconciliation between AI triggers in a Markdown document
//! and the generation backend.
//!
//! - **Driver**: [`Reconciler`] — resolves triggers against the live
//!   document, runs one streaming generation at a time, and splices
//!   coalesced output back through the host
//! - **Registry**: [`ProcessingRegistry`] — region keys currently being
//!   processed, for host-side decoration
//! - **Host seam**: [`DocumentHost`] and [`ContextProvider`] — the two
//!   traits an embedding editor implements
//! - **Errors**: [`EngineError`] with a single user-facing message per
//!   failure class
//!
//! ## Crate Position
//!
//! Top of the stack: composes scribe-core scanning and splicing with the
//! scribe-llm provider boundary and scribe-settings configuration.

#![deny(unsafe_code)]

mod backend;
mod driver;
mod errors;
mod host;
mod prompt;
mod registry;
mod session;

pub use backend::provider_from_settings;
pub use driver::{Flight, Reconciler};
pub use errors::{EngineError, EngineResult};
pub use host::{ContextProvider, DocumentHost};
pub use prompt::{build_request, CURRENT_FILE_DELIMITER};
pub use registry::ProcessingRegistry;
