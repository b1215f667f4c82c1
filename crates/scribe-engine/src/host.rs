//! Seams to the engine's external collaborators.
//!
//! The editor and the context source live outside this workspace; the engine
//! only ever talks to them through these two traits. The document interface
//! is deliberately whole-document: the engine never addresses partial lines
//! or character ranges through it.

/// The document owner (the editor component).
pub trait DocumentHost: Send + Sync {
    /// The document text as the user currently sees it.
    fn current_text(&self) -> String;

    /// Replace the entire document with `text`.
    ///
    /// Called once per coalesced stream push and once at stream end. Calls
    /// from one session arrive strictly in order.
    fn replace_all(&self, text: String);
}

/// Supplier of the other in-scope content sources.
///
/// The engine treats the result as an opaque string prepended to the
/// prompt; the current document is appended separately with its own
/// delimiter because per-file context storage may be stale.
pub trait ContextProvider: Send + Sync {
    /// Concatenate all other context sources as plain text.
    fn gather(&self) -> String;
}
