//! Per-request streaming state.
//!
//! A session captures the document snapshot a trigger was resolved
//! against, then accumulates model output chunk by chunk. Rendering is
//! always snapshot plus full accumulated output, so re-applying a render
//! is idempotent and a dropped push is healed by the next one.

use scribe_core::{splice_lines, Trigger};

/// Push a render to the host every this many chunks (and once at the end).
pub(crate) const PUSH_EVERY: u32 = 3;

/// Streaming state for one in-flight generation.
pub(crate) struct Session {
    base: String,
    trigger: Trigger,
    accumulated: String,
    chunk_count: u32,
}

impl Session {
    pub(crate) fn new(trigger: Trigger, base: String) -> Self {
        Self {
            base,
            trigger,
            accumulated: String::new(),
            chunk_count: 0,
        }
    }

    /// Absorb one chunk. Returns whether a coalesced push is due.
    pub(crate) fn absorb(&mut self, chunk: &str) -> bool {
        self.accumulated.push_str(chunk);
        self.chunk_count += 1;
        self.chunk_count % PUSH_EVERY == 0
    }

    /// Splice the accumulated output over the trigger's block in the
    /// snapshot. Both fence lines are replaced along with the content.
    pub(crate) fn render(&self) -> String {
        splice_lines(
            &self.base,
            self.trigger.start_line,
            self.trigger.end_line,
            &self.accumulated,
        )
    }

    pub(crate) fn chunk_count(&self) -> u32 {
        self.chunk_count
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::TriggerKind;

    fn session() -> Session {
        let base = "# Doc\n```ai-write\nbears\n```\nAfter.".to_owned();
        let trigger = Trigger {
            kind: TriggerKind::Write,
            topic: "bears".into(),
            start_line: 1,
            end_line: 3,
        };
        Session::new(trigger, base)
    }

    #[test]
    fn push_due_on_every_third_chunk() {
        let mut s = session();
        let due: Vec<bool> = (0..7).map(|_| s.absorb("x")).collect();
        assert_eq!(due, vec![false, false, true, false, false, true, false]);
        assert_eq!(s.chunk_count(), 7);
    }

    #[test]
    fn render_replaces_whole_block() {
        let mut s = session();
        let _ = s.absorb("Bears roam ");
        let _ = s.absorb("free.");
        assert_eq!(s.render(), "# Doc\nBears roam free.\nAfter.");
    }

    #[test]
    fn successive_renders_are_idempotent_over_snapshot() {
        let mut s = session();
        let _ = s.absorb("Bears");
        let first = s.render();
        let _ = s.absorb(" roam free.");
        let second = s.render();
        // Each render starts from the same snapshot: the earlier render's
        // text is a prefix-consistent version of the later one.
        assert!(second.contains("Bears roam free."));
        assert!(first.contains("Bears"));
        assert!(!first.contains("roam"));
    }

    #[test]
    fn render_before_any_chunk_blanks_the_block() {
        let s = session();
        assert_eq!(s.render(), "# Doc\n\nAfter.");
    }
}
