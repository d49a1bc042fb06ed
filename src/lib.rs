//! notemark - Inline markdown formatting engine for note editors
//!
//! The editing core of a note-taking application, as a standalone library:
//! a bidirectional parser over a constrained markdown dialect (bold `**`,
//! italic `*`, bullet and numbered lists, paragraph breaks) that both
//! renders persisted text into styled display blocks and performs
//! cursor-aware toggling of bold/italic spans directly on the raw text.
//!
//! The host application owns the text buffer, the caret, and all I/O; every
//! operation here is a pure function of `(text, offsets)`:
//!
//! - [`scan`] finds the currently-marked bold/italic regions
//! - [`active_formats`] reports which formats a caret/selection touches
//!   (call it from your selection-change callback to light up the toolbar)
//! - [`toggle`] wraps or strips markers and returns the new text and caret
//! - [`render`] turns text into display blocks for read-only views
//!
//! Offsets are byte indices; arbitrary host-supplied offsets are clamped to
//! the buffer and to UTF-8 character boundaries, never rejected. Malformed
//! marker sequences degrade to plain text.
//!
//! # Example
//! ```
//! use notemark::{active_formats, toggle, FormatKind};
//!
//! // Wrap a selection.
//! let result = toggle("hello world", 0, 5, FormatKind::Bold);
//! assert_eq!(result.text, "**hello** world");
//!
//! // Strip it again from a caret inside the span.
//! let back = toggle(&result.text, 4, 4, FormatKind::Bold);
//! assert_eq!(back.text, "hello world");
//! assert!(!back.applied);
//!
//! // Toolbar state.
//! assert!(active_formats("**x** y", 3, 3).bold);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod string_utils;

pub use config::{load_styles, save_styles, StyleRegistry};
pub use error::{Error, Result};
pub use format::{
    active_formats, is_format_active, line_formats, render, render_paragraph, scan,
    split_segments, toggle, ActiveFormats, Block, FormatKind, FormatResult, FormatScan,
    LineFormats, MarkedRegion, TextSegment,
};
