//! Log-safe text previews.
//!
//! Stream chunks and accumulated output get logged at debug level; these
//! helpers keep those log lines single-line and bounded without ever
//! splitting a multi-byte character.

/// A bounded, single-line preview of `s` for log output.
///
/// Takes at most `max_chars` characters, flattens line breaks to `⏎`, and
/// appends `…` when anything was dropped. Counts characters, not bytes, so
/// the cut never lands inside a multi-byte sequence.
#[must_use]
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(max_chars + 4);
    let mut taken = 0;
    for ch in s.chars() {
        if taken == max_chars {
            out.push('…');
            return out;
        }
        out.push(if ch == '\n' { '⏎' } else { ch });
        taken += 1;
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
