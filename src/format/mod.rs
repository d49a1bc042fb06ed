//! Inline markdown formatting engine
//!
//! Four cooperating faces over one constrained dialect (bold `**`, italic
//! `*`, bullet/numbered lists, paragraph breaks):
//!
//! - [`scanner`] discovers the currently-marked bold/italic regions
//! - [`detector`] decides which formats are active at a caret/selection
//! - [`toggler`] mutates text in place, wrapping or stripping marker pairs
//! - [`renderer`] turns persisted text into styled display blocks
//!
//! All of it is pure and synchronous: text in, text (or blocks) out, nothing
//! retained between calls. Cost is linear in text length, cheap enough to
//! recompute on every caret movement.
//!
//! # Example
//! ```
//! use notemark::{toggle, active_formats, render, FormatKind};
//!
//! let result = toggle("hello world", 0, 5, FormatKind::Bold);
//! assert_eq!(result.text, "**hello** world");
//!
//! let state = active_formats(&result.text, 4, 4);
//! assert!(state.bold);
//!
//! let blocks = render(&result.text);
//! assert_eq!(blocks.len(), 1);
//! ```

pub mod detector;
pub mod renderer;
pub mod scanner;
pub mod toggler;

pub use detector::{active_formats, is_format_active, line_formats, ActiveFormats, LineFormats};
pub use renderer::{render, render_paragraph, split_segments, Block, TextSegment};
pub use scanner::{scan, FormatScan, MarkedRegion};
pub use toggler::{toggle, FormatKind, FormatResult};
