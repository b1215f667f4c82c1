//! Fenced-block scanner: document text → ordered trigger list.
//!
//! Pure and total — any input yields a (possibly empty) trigger list,
//! never an error. Runs on every document change, so it stays a single
//! forward pass with no allocation beyond the captured inner lines.

use crate::trigger::{Trigger, TriggerKind};

/// Closing fence marker: a line whose trimmed content is exactly this.
pub const FENCE_CLOSE: &str = "```";

/// Match a line against the three opening markers.
fn opening_kind(line: &str) -> Option<TriggerKind> {
    match line.trim() {
        "```ai-template" => Some(TriggerKind::Template),
        "```ai-write" => Some(TriggerKind::Write),
        "```ai-update" => Some(TriggerKind::Update),
        _ => None,
    }
}

/// Scan a document for AI trigger blocks, in document order.
///
/// A block opens at a line whose trimmed content is exactly one of the
/// opening markers and closes at the next line whose trimmed content is
/// exactly ` ``` `. The emitted trigger spans both fence lines inclusive;
/// its topic is the inner lines joined by `\n` and outer-trimmed.
///
/// Two deliberate simplifications, relied on elsewhere:
///
/// - Nesting is not supported. An opening marker seen while already inside
///   a block is ordinary content and is captured into the topic.
/// - A block left unclosed at end of document emits nothing — incomplete
///   blocks are invisible, not an error.
#[must_use]
pub fn scan(text: &str) -> Vec<Trigger> {
    let mut triggers = Vec::new();
    let mut open: Option<(TriggerKind, usize)> = None;
    let mut inner: Vec<&str> = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        match open {
            None => {
                if let Some(kind) = opening_kind(line) {
                    open = Some((kind, index));
                    inner.clear();
                }
            }
            Some((kind, start_line)) => {
                if line.trim() == FENCE_CLOSE {
                    triggers.push(Trigger {
                        kind,
                        topic: inner.join("\n").trim().to_string(),
                        start_line,
                        end_line: index,
                    });
                    open = None;
                    inner.clear();
                } else {
                    inner.push(line);
                }
            }
        }
    }

    triggers
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Basic detection ──────────────────────────────────────────────────

    #[test]
    fn empty_document() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn no_triggers_in_plain_markdown() {
        assert!(scan("# Title\n\nSome prose.\n").is_empty());
    }

    #[test]
    fn single_write_block() {
        let doc = "# Trip\n```ai-write\nYellowstone wildlife\n```\nAfter.";
        let triggers = scan(doc);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].kind, TriggerKind::Write);
        assert_eq!(triggers[0].topic, "Yellowstone wildlife");
        assert_eq!(triggers[0].start_line, 1);
        assert_eq!(triggers[0].end_line, 3);
    }

    #[test]
    fn template_and_update_kinds() {
        let doc = "```ai-template\ntrip plan\n```\n```ai-update\nshorter\n\nold\n```";
        let triggers = scan(doc);
        assert_eq!(triggers.len(), 2);
        assert_eq!(triggers[0].kind, TriggerKind::Template);
        assert_eq!(triggers[1].kind, TriggerKind::Update);
        assert_eq!(triggers[1].topic, "shorter\n\nold");
    }

    #[test]
    fn markers_match_after_trimming_whitespace() {
        let doc = "  ```ai-write  \ntopic\n   ```\t";
        let triggers = scan(doc);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].start_line, 0);
        assert_eq!(triggers[0].end_line, 2);
    }

    #[test]
    fn marker_with_trailing_text_is_not_a_trigger() {
        // Trimmed content must be exactly the marker, not a prefix match.
        assert!(scan("```ai-write extra\ntopic\n```").is_empty());
        assert!(scan("```ai-writer\ntopic\n```").is_empty());
    }

    #[test]
    fn ordinary_code_fence_ignored() {
        assert!(scan("```rust\nfn main() {}\n```").is_empty());
    }

    #[test]
    fn multi_line_topic_outer_trimmed() {
        let doc = "```ai-write\n\n  Yellowstone\ngeysers\n\n```";
        let triggers = scan(doc);
        assert_eq!(triggers[0].topic, "Yellowstone\ngeysers");
    }

    #[test]
    fn empty_topic() {
        let triggers = scan("```ai-write\n```");
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].topic, "");
        assert_eq!(triggers[0].end_line, 1);
    }

    // ── Nesting and incomplete blocks ────────────────────────────────────

    #[test]
    fn nested_opener_is_ordinary_content() {
        let doc = "```ai-write\n```ai-write\ntopic\n```\n```";
        let triggers = scan(doc);
        // One trigger spanning the outer block; the inner opener, topic
        // line, and first close-candidate never start a second block.
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].start_line, 0);
        assert_eq!(triggers[0].end_line, 3);
        assert_eq!(triggers[0].topic, "```ai-write\ntopic");
    }

    #[test]
    fn unclosed_block_emits_nothing() {
        assert!(scan("```ai-write\nhello").is_empty());
    }

    #[test]
    fn unclosed_trailing_block_does_not_hide_earlier_ones() {
        let doc = "```ai-write\na\n```\n```ai-template\ndangling";
        let triggers = scan(doc);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].kind, TriggerKind::Write);
    }

    #[test]
    fn close_without_open_ignored() {
        assert!(scan("```\nhello\n```").is_empty());
    }

    // ── Ordering ─────────────────────────────────────────────────────────

    #[test]
    fn triggers_in_document_order() {
        let doc = "```ai-write\na\n```\nx\n```ai-write\nb\n```";
        let triggers = scan(doc);
        assert_eq!(triggers.len(), 2);
        assert!(triggers[0].end_line < triggers[1].start_line);
        assert_eq!(triggers[0].topic, "a");
        assert_eq!(triggers[1].topic, "b");
    }

    // ── Properties ───────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn scan_is_deterministic(text in ".{0,400}") {
            prop_assert_eq!(scan(&text), scan(&text));
        }

        #[test]
        fn triggers_are_ordered_and_in_bounds(
            parts in prop::collection::vec(
                prop_oneof![
                    Just("```ai-write".to_string()),
                    Just("```ai-template".to_string()),
                    Just("```".to_string()),
                    "[a-z ]{0,12}",
                ],
                0..40,
            )
        ) {
            let text = parts.join("\n");
            let line_count = text.split('\n').count();
            let triggers = scan(&text);
            let mut previous_end = None;
            for t in &triggers {
                prop_assert!(t.start_line < t.end_line);
                prop_assert!(t.end_line < line_count);
                if let Some(end) = previous_end {
                    prop_assert!(t.start_line > end);
                }
                previous_end = Some(t.end_line);
            }
        }
    }
}
