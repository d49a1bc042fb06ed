//! Format toggling: cursor-aware text mutation
//!
//! The toolbar actions. Bold and italic are symmetric toggles: if the
//! requested kind is active at the caret/selection, the nearest enclosing
//! marker pair is stripped in place; otherwise the selection is wrapped in a
//! fresh pair. List formats and paragraph breaks are insertion-only.
//!
//! Every operation is a pure function from `(text, selection, kind)` to
//! `(new text, new caret)`; the host owns the buffer and applies the result.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::format::detector::{enclosing_region, is_format_active};
use crate::format::scanner::scan;
use crate::string_utils::{ceil_char_boundary, floor_char_boundary, safe_slice};

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Formats a toolbar action can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    /// Bold span (`**text**`), toggleable
    Bold,
    /// Italic span (`*text*`), toggleable
    Italic,
    /// Bullet list line prefix (`- `), insertion-only
    BulletList,
    /// Numbered list line prefix (`1. `), insertion-only
    NumberedList,
    /// Blank-line paragraph separator (`\n\n`), insertion-only
    ParagraphBreak,
}

/// Result of applying a format action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResult {
    /// The new text after the mutation
    pub text: String,
    /// New caret start (byte offset into `text`)
    pub cursor_start: usize,
    /// New caret end; every current action collapses the selection, so this
    /// equals `cursor_start`
    pub cursor_end: usize,
    /// False when an existing marker pair was stripped (toggled off)
    pub applied: bool,
}

impl FormatResult {
    /// Result with a collapsed caret.
    fn collapsed(text: String, cursor: usize) -> Self {
        Self {
            text,
            cursor_start: cursor,
            cursor_end: cursor,
            applied: true,
        }
    }

    /// Mark that formatting was removed rather than applied.
    fn toggled_off(mut self) -> Self {
        self.applied = false;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Toggle Entry Point
// ─────────────────────────────────────────────────────────────────────────────

/// Apply `kind` to `text` at the given selection and return the new text and
/// caret.
///
/// Offsets are clamped to `[0, text.len()]` and to UTF-8 character
/// boundaries; a reversed pair is normalized by swapping. The function never
/// fails: malformed marker sequences are plain text per the scanner's
/// contract.
pub fn toggle(text: &str, sel_start: usize, sel_end: usize, kind: FormatKind) -> FormatResult {
    let start = floor_char_boundary(text, sel_start.min(text.len()));
    let end = ceil_char_boundary(text, sel_end.min(text.len()));
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    debug_assert!(start <= end && end <= text.len());

    match kind {
        FormatKind::Bold => toggle_inline(text, start, end, "**"),
        FormatKind::Italic => toggle_inline(text, start, end, "*"),
        FormatKind::BulletList => apply_list(text, start, end, false),
        FormatKind::NumberedList => apply_list(text, start, end, true),
        FormatKind::ParagraphBreak => apply_paragraph_break(text, start, end),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inline Formats (Bold / Italic)
// ─────────────────────────────────────────────────────────────────────────────

fn toggle_inline(text: &str, start: usize, end: usize, marker: &str) -> FormatResult {
    let width = marker.len();
    let regions = scan(text);
    let regions = if width == 2 {
        &regions.bold
    } else {
        &regions.italic
    };

    if is_format_active(regions, start, end) {
        if let Some(r) = enclosing_region(regions, start, end) {
            return strip_region(text, start, end, r.start, r.end, width);
        }
        // Detector said active but no concrete region encloses the
        // selection. Deliberate safety net: wrap instead of failing.
        debug!(
            "active {} format without an enclosing region at {}..{}; wrapping instead",
            marker, start, end
        );
    }

    wrap_selection(text, start, end, marker)
}

/// Delete the marker pair around content `[content_start, content_end)`
/// while keeping the content, and recompute the caret.
fn strip_region(
    text: &str,
    start: usize,
    end: usize,
    content_start: usize,
    content_end: usize,
    width: usize,
) -> FormatResult {
    // By construction the opening marker sits immediately before the content
    // and the closing marker immediately after it.
    let marker_open = content_start - width;

    let mut new_text = String::with_capacity(text.len() - 2 * width);
    new_text.push_str(&text[..marker_open]);
    new_text.push_str(&text[content_start..content_end]);
    new_text.push_str(&text[content_end + width..]);

    // Caret/selection entirely before the content keeps its position; past
    // the content start it shifts left by the opening marker width, and a
    // selection end past the region accounts for both markers.
    let mut cursor = if start > content_start {
        (start - width).max(marker_open)
    } else {
        start
    };
    if end > content_end {
        cursor = end.saturating_sub(2 * width);
    }
    let cursor = cursor.min(new_text.len());

    FormatResult::collapsed(new_text, cursor).toggled_off()
}

/// Wrap the selected text (possibly empty) in a marker pair. The caret lands
/// immediately after the inserted closing marker, collapsing any selection.
fn wrap_selection(text: &str, start: usize, end: usize, marker: &str) -> FormatResult {
    let selected = safe_slice(text, start, end);

    let mut new_text = String::with_capacity(text.len() + 2 * marker.len());
    new_text.push_str(&text[..start]);
    new_text.push_str(marker);
    new_text.push_str(selected);
    new_text.push_str(marker);
    new_text.push_str(&text[end..]);

    let cursor = start + 2 * marker.len() + selected.len();
    FormatResult::collapsed(new_text, cursor)
}

// ─────────────────────────────────────────────────────────────────────────────
// Line Formats (Bullet / Numbered Lists)
// ─────────────────────────────────────────────────────────────────────────────

/// Prefix the selection with list markers. Insertion-only: there is no
/// unwrap for list formats, matching the observed editor behavior.
fn apply_list(text: &str, start: usize, end: usize, numbered: bool) -> FormatResult {
    let selected = safe_slice(text, start, end);

    let inserted = if selected.contains('\n') {
        // Multi-line selection: every line gets a marker; numbering restarts
        // at 1 regardless of surrounding content.
        let lines: Vec<String> = selected
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                if numbered {
                    format!("{}. {}", i + 1, line)
                } else {
                    format!("- {}", line)
                }
            })
            .collect();
        lines.join("\n")
    } else if numbered {
        format!("\n1. {}", selected)
    } else {
        format!("\n- {}", selected)
    };

    let mut new_text = String::with_capacity(text.len() + inserted.len());
    new_text.push_str(&text[..start]);
    new_text.push_str(&inserted);
    new_text.push_str(&text[end..]);

    FormatResult::collapsed(new_text, start + inserted.len())
}

// ─────────────────────────────────────────────────────────────────────────────
// Paragraph Break
// ─────────────────────────────────────────────────────────────────────────────

/// Replace the selection with a blank-line paragraph separator.
fn apply_paragraph_break(text: &str, start: usize, end: usize) -> FormatResult {
    let mut new_text = String::with_capacity(text.len() + 2);
    new_text.push_str(&text[..start]);
    new_text.push_str("\n\n");
    new_text.push_str(&text[end..]);

    FormatResult::collapsed(new_text, start + 2)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Bold wrap
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_bold_wrap_selection() {
        let result = toggle("hello world", 0, 5, FormatKind::Bold);
        assert_eq!(result.text, "**hello** world");
        // Caret collapses to just after the closing markers.
        assert_eq!(result.cursor_start, 9);
        assert_eq!(result.cursor_end, 9);
        assert!(result.applied);
    }

    #[test]
    fn test_bold_wrap_empty_caret() {
        let result = toggle("hello", 5, 5, FormatKind::Bold);
        assert_eq!(result.text, "hello****");
        assert_eq!(result.cursor_start, 9);
    }

    #[test]
    fn test_bold_wrap_mid_text() {
        let result = toggle("say it loud", 4, 6, FormatKind::Bold);
        assert_eq!(result.text, "say **it** loud");
        assert_eq!(result.cursor_start, 10);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Bold strip
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_bold_strip_caret_inside() {
        let result = toggle("**hello** world", 4, 4, FormatKind::Bold);
        assert_eq!(result.text, "hello world");
        assert_eq!(result.cursor_start, 2);
        assert!(!result.applied);
    }

    #[test]
    fn test_bold_strip_caret_at_trailing_edge() {
        let result = toggle("**hello** world", 7, 7, FormatKind::Bold);
        assert_eq!(result.text, "hello world");
        assert_eq!(result.cursor_start, 5);
        assert!(!result.applied);
    }

    #[test]
    fn test_bold_caret_at_leading_edge_wraps() {
        // Caret exactly at the content start is "not yet inside": the click
        // wraps rather than strips.
        let result = toggle("**hello** world", 2, 2, FormatKind::Bold);
        assert!(result.applied);
        assert_eq!(result.text, "******hello** world");
        assert_eq!(result.cursor_start, 6);
    }

    #[test]
    fn test_bold_strip_selection_inside() {
        let result = toggle("a **big** cat", 5, 7, FormatKind::Bold);
        assert_eq!(result.text, "a big cat");
        assert_eq!(result.cursor_start, 3);
        assert!(!result.applied);
    }

    #[test]
    fn test_bold_strip_selection_extending_past_region() {
        //             0123456789012345
        let text = "**hello** world";
        // Selection from inside the bold content out into " world".
        let result = toggle(text, 4, 12, FormatKind::Bold);
        assert_eq!(result.text, "hello world");
        // End shifts left by both removed markers.
        assert_eq!(result.cursor_start, 8);
        assert!(!result.applied);
    }

    #[test]
    fn test_bold_strip_selection_containing_region() {
        let result = toggle("x **y** z", 0, 9, FormatKind::Bold);
        assert_eq!(result.text, "x y z");
        assert_eq!(result.cursor_start, 5);
        assert!(!result.applied);
    }

    #[test]
    fn test_bold_strip_picks_first_matching_region() {
        let text = "**a** mid **b**";
        let result = toggle(text, 13, 13, FormatKind::Bold);
        assert_eq!(result.text, "**a** mid b");
        assert!(!result.applied);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Italic
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_italic_wrap_selection() {
        let result = toggle("hello world", 6, 11, FormatKind::Italic);
        assert_eq!(result.text, "hello *world*");
        assert_eq!(result.cursor_start, 13);
    }

    #[test]
    fn test_italic_strip_caret_inside() {
        let result = toggle("an *odd* word", 5, 5, FormatKind::Italic);
        assert_eq!(result.text, "an odd word");
        assert_eq!(result.cursor_start, 4);
        assert!(!result.applied);
    }

    #[test]
    fn test_italic_strip_selection_extending_past_region() {
        let text = "*it* rains";
        let result = toggle(text, 2, 8, FormatKind::Italic);
        assert_eq!(result.text, "it rains");
        assert_eq!(result.cursor_start, 6);
    }

    #[test]
    fn test_italic_inside_bold_content() {
        // Toggling italic inside a bold span touches only the italic pair.
        let text = "**a *b* c**";
        let result = toggle(text, 6, 6, FormatKind::Italic);
        assert_eq!(result.text, "**a b c**");
        assert!(!result.applied);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lists
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_bullet_list_multi_line_selection() {
        let result = toggle("line1\nline2", 0, 11, FormatKind::BulletList);
        assert_eq!(result.text, "- line1\n- line2");
        assert_eq!(result.cursor_start, 15);
        assert!(result.applied);
    }

    #[test]
    fn test_bullet_list_single_line_inserts_newline_prefix() {
        let result = toggle("item", 0, 4, FormatKind::BulletList);
        assert_eq!(result.text, "\n- item");
        assert_eq!(result.cursor_start, 7);
    }

    #[test]
    fn test_bullet_list_bare_caret() {
        let result = toggle("note", 4, 4, FormatKind::BulletList);
        assert_eq!(result.text, "note\n- ");
        assert_eq!(result.cursor_start, 7);
    }

    #[test]
    fn test_numbered_list_multi_line_restarts_at_one() {
        let result = toggle("a\nb\nc", 0, 5, FormatKind::NumberedList);
        assert_eq!(result.text, "1. a\n2. b\n3. c");
        assert_eq!(result.cursor_start, 14);
    }

    #[test]
    fn test_numbered_list_single_line() {
        let result = toggle("task", 0, 4, FormatKind::NumberedList);
        assert_eq!(result.text, "\n1. task");
        assert_eq!(result.cursor_start, 8);
    }

    #[test]
    fn test_list_replaces_selection() {
        let result = toggle("keep DROP keep", 5, 9, FormatKind::BulletList);
        assert_eq!(result.text, "keep \n- DROP keep");
    }

    #[test]
    fn test_list_is_insertion_only() {
        // No unwrap for lists: toggling an existing bullet line adds another
        // marker rather than removing one.
        let result = toggle("- item", 6, 6, FormatKind::BulletList);
        assert_eq!(result.text, "- item\n- ");
        assert!(result.applied);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Paragraph break
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_paragraph_break_at_caret() {
        let result = toggle("ab", 1, 1, FormatKind::ParagraphBreak);
        assert_eq!(result.text, "a\n\nb");
        assert_eq!(result.cursor_start, 3);
    }

    #[test]
    fn test_paragraph_break_replaces_selection() {
        let result = toggle("a XX b", 2, 4, FormatKind::ParagraphBreak);
        assert_eq!(result.text, "a \n\n b");
        assert_eq!(result.cursor_start, 4);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Boundaries and clamping
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_text_never_errors() {
        for kind in [
            FormatKind::Bold,
            FormatKind::Italic,
            FormatKind::BulletList,
            FormatKind::NumberedList,
            FormatKind::ParagraphBreak,
        ] {
            let result = toggle("", 0, 0, kind);
            assert!(result.cursor_start <= result.text.len());
            assert_eq!(result.cursor_start, result.cursor_end);
        }
    }

    #[test]
    fn test_out_of_range_offsets_clamp() {
        let result = toggle("hi", 90, 120, FormatKind::Bold);
        assert_eq!(result.text, "hi****");
        assert_eq!(result.cursor_start, 6);
    }

    #[test]
    fn test_reversed_selection_normalizes() {
        let a = toggle("hello world", 5, 0, FormatKind::Bold);
        let b = toggle("hello world", 0, 5, FormatKind::Bold);
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_panic_on_any_byte_index() {
        let _ = env_logger::builder().is_test(true).try_init();
        let text = "Hei *på* **deg** 你好 🎉";
        for i in 0..=text.len() + 3 {
            for j in 0..=text.len() + 3 {
                for kind in [
                    FormatKind::Bold,
                    FormatKind::Italic,
                    FormatKind::BulletList,
                    FormatKind::NumberedList,
                    FormatKind::ParagraphBreak,
                ] {
                    let result = toggle(text, i, j, kind);
                    assert!(result.cursor_start <= result.text.len());
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Round-trip property
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_wrap_then_strip_restores_text() {
        let samples = [
            ("hello world", 0usize, 5usize),
            ("hello world", 6, 11),
            ("one two three", 4, 7),
            ("på tur i 世界", 0, 3),
        ];
        for (text, s, e) in samples {
            for kind in [FormatKind::Bold, FormatKind::Italic] {
                let width = if kind == FormatKind::Bold { 2 } else { 1 };
                let wrapped = toggle(text, s, e, kind);
                assert!(wrapped.applied, "wrap failed for {:?}", text);

                // Any caret that still targets the wrapped content (strictly
                // past its start, at most at its end) must strip back to the
                // original text.
                let content_len = e - s;
                for k in 1..=content_len {
                    let caret = s + width + k;
                    if !wrapped.text.is_char_boundary(caret) {
                        continue;
                    }
                    let stripped = toggle(&wrapped.text, caret, caret, kind);
                    assert!(!stripped.applied);
                    assert_eq!(
                        stripped.text, text,
                        "round trip failed for {:?} at caret {}",
                        text, caret
                    );
                    assert_eq!(stripped.cursor_start, s + k);
                }
            }
        }
    }

    #[test]
    fn test_wrap_then_strip_with_full_selection() {
        let wrapped = toggle("abc def", 0, 3, FormatKind::Bold);
        assert_eq!(wrapped.text, "**abc** def");
        // Re-select the wrapped content.
        let stripped = toggle(&wrapped.text, 2, 5, FormatKind::Bold);
        assert_eq!(stripped.text, "abc def");
        assert!(!stripped.applied);
    }
}
