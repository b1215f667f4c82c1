//! Trigger model: fenced AI blocks found in a document.
//!
//! A trigger's line indices are 0-based positions into the exact document
//! snapshot it was scanned from. They are not stable identifiers — any edit
//! invalidates them, so callers must re-scan instead of caching triggers
//! across document changes.

use serde::{Deserialize, Serialize};

/// What kind of generation a fenced block requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerKind {
    /// Generate a sectioned writing plan for the topic.
    Template,
    /// Write prose for the topic.
    Write,
    /// Revise prior content according to a feedback instruction.
    Update,
}

impl TriggerKind {
    /// The fence marker that opens a block of this kind.
    #[must_use]
    pub fn opening_marker(self) -> &'static str {
        match self {
            Self::Template => "```ai-template",
            Self::Write => "```ai-write",
            Self::Update => "```ai-update",
        }
    }
}

/// A fenced AI block detected in a document snapshot.
///
/// `start_line` and `end_line` are inclusive and point at the opening and
/// closing fence lines. Created by a scan, consumed by one reconciliation
/// start, then discarded. Never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    /// Generation kind requested by the opening marker.
    pub kind: TriggerKind,
    /// Inner lines between the fences, joined by `\n` and outer-trimmed.
    pub topic: String,
    /// 0-based index of the opening fence line.
    pub start_line: usize,
    /// 0-based index of the closing fence line.
    pub end_line: usize,
}

impl Trigger {
    /// The registry identity for this trigger's region.
    #[must_use]
    pub fn region(&self) -> RegionKey {
        RegionKey {
            start_line: self.start_line,
            end_line: self.end_line,
        }
    }
}

/// Identity of an in-flight trigger region: its snapshot-relative line range.
///
/// Valid only against the snapshot the trigger was scanned from. Consumers
/// must re-scan the current document and intersect before trusting a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionKey {
    /// 0-based opening fence line.
    pub start_line: usize,
    /// 0-based closing fence line.
    pub end_line: usize,
}

/// An `Update` trigger's topic, decomposed at the first blank line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateDirective {
    /// Feedback instruction: the text before the first blank line.
    pub instruction: String,
    /// Content to revise: everything after the first blank line.
    pub prior_content: String,
}

impl UpdateDirective {
    /// Split an `Update` topic into instruction and prior content.
    ///
    /// The boundary is the first line whose trimmed content is empty. With
    /// no blank line, the whole topic is the instruction and the prior
    /// content is empty.
    #[must_use]
    pub fn parse(topic: &str) -> Self {
        let mut boundary = None;
        for (index, line) in topic.split('\n').enumerate() {
            if line.trim().is_empty() {
                boundary = Some(index);
                break;
            }
        }

        match boundary {
            Some(blank) => {
                let lines: Vec<&str> = topic.split('\n').collect();
                Self {
                    instruction: lines[..blank].join("\n").trim().to_string(),
                    prior_content: lines[blank + 1..].join("\n").trim().to_string(),
                }
            }
            None => Self {
                instruction: topic.trim().to_string(),
                prior_content: String::new(),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
