//! Active-format detection
//!
//! Given the scanner's region lists and the host widget's caret or selection,
//! decide which formats are "active" at that position. The host calls this on
//! every selection change (click, keyup, drag) purely to highlight toolbar
//! buttons; the toggler reuses the same rules to pick wrap versus strip.
//!
//! Listener wiring is the host's concern — this module is just the function
//! it invokes from its selection-change callback.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::format::scanner::{scan, MarkedRegion};
use crate::string_utils::floor_char_boundary;

/// Line starts with a bullet item marker (`- ` after optional indentation).
static BULLET_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-\s").unwrap());

/// Line starts with a numbered item marker (`1. ` after optional indentation).
static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s").unwrap());

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Line-level formats at the caret's line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFormats {
    /// Line is a bullet list item
    pub bullet: bool,
    /// Line is a numbered list item
    pub numbered: bool,
}

/// Snapshot of every toolbar-relevant format at a caret/selection.
/// Recomputed from scratch on each selection event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFormats {
    /// Caret/selection touches a bold region
    pub bold: bool,
    /// Caret/selection touches an italic region
    pub italic: bool,
    /// Caret's line is a bullet list item
    pub bullet_list: bool,
    /// Caret's line is a numbered list item
    pub numbered_list: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Region Activity
// ─────────────────────────────────────────────────────────────────────────────

/// Whether a caret or selection makes one kind of region "active".
///
/// Call once with the bold regions and once with the italic regions.
///
/// A bare caret (`start == end`) is active iff it sits strictly past a
/// region's content start and at most at its content end: the trailing edge
/// counts as inside, the leading edge does not. A range selection is active
/// iff its start falls inside a region, its end falls inside a region, or it
/// fully contains a region.
///
/// The caret rule is deliberately asymmetric to the selection rule; it is
/// what decides whether clicking a toolbar button at a bare caret strips or
/// re-wraps, and it must not be "corrected" to a symmetric overlap test.
pub fn is_format_active(regions: &[MarkedRegion], start: usize, end: usize) -> bool {
    enclosing_region(regions, start, end).is_some()
}

/// The first region satisfying the activity rule of [`is_format_active`],
/// used by the toggler to locate the marker pair to strip.
pub(crate) fn enclosing_region(
    regions: &[MarkedRegion],
    start: usize,
    end: usize,
) -> Option<MarkedRegion> {
    if start == end {
        let caret = start;
        regions
            .iter()
            .copied()
            .find(|r| caret > r.start && caret <= r.end)
    } else {
        regions.iter().copied().find(|r| {
            (start >= r.start && start < r.end)
                || (end > r.start && end <= r.end)
                || (start <= r.start && end >= r.end)
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Line Formats
// ─────────────────────────────────────────────────────────────────────────────

/// Inspect only the caret's line (previous newline to next newline, or the
/// buffer edges) and report whether it is a bullet or numbered list item.
pub fn line_formats(text: &str, caret: usize) -> LineFormats {
    let caret = floor_char_boundary(text, caret.min(text.len()));

    let line_start = text[..caret].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = text[caret..]
        .find('\n')
        .map(|i| caret + i)
        .unwrap_or(text.len());
    let line = &text[line_start..line_end];

    LineFormats {
        bullet: BULLET_LINE.is_match(line),
        numbered: NUMBERED_LINE.is_match(line),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Aggregate Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Compute the full toolbar state for a caret/selection.
///
/// Offsets are clamped to the text and to character boundaries, and a
/// reversed pair is normalized. Line formats are taken at the selection
/// start.
pub fn active_formats(text: &str, sel_start: usize, sel_end: usize) -> ActiveFormats {
    let start = floor_char_boundary(text, sel_start.min(text.len()));
    let end = floor_char_boundary(text, sel_end.min(text.len()));
    let (start, end) = if start > end { (end, start) } else { (start, end) };

    let regions = scan(text);
    let line = line_formats(text, start);

    ActiveFormats {
        bold: is_format_active(&regions.bold, start, end),
        italic: is_format_active(&regions.italic, start, end),
        bullet_list: line.bullet,
        numbered_list: line.numbered,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
