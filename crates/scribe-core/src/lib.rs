//! # scribe-core
//!
//! Foundation types and pure document operations for the Scribe
//! reconciliation engine.
//!
//! - **Triggers**: [`trigger::Trigger`], [`trigger::TriggerKind`], and the
//!   registry identity [`trigger::RegionKey`]
//! - **Scanner**: [`scan::scan`] — fenced-block detection over plain text
//! - **Splice**: [`splice::splice_lines`] — inclusive line-range replacement
//! - **Text**: [`text::preview`] — log-safe string previews
//! - **Logging**: [`logging::init`] — tracing subscriber setup
//!
//! ## Crate Position
//!
//! Foundation crate. No I/O, no async. Depended on by all other scribe
//! crates.

#![deny(unsafe_code)]

pub mod logging;
pub mod scan;
pub mod splice;
pub mod text;
pub mod trigger;

pub use scan::scan;
pub use splice::{splice_lines, split_lines};
pub use trigger::{RegionKey, Trigger, TriggerKind, UpdateDirective};
