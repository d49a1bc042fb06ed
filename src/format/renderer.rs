//! Inline renderer: raw text to display blocks
//!
//! The read-only face of the engine. Selection-independent: a pure function
//! from persisted note text to a list of display blocks, each holding styled
//! text segments the host turns into its own widgets/elements. The host is
//! responsible for escaping; segments carry raw text.
//!
//! Inline segment splitting toggles the bold/italic flags exactly as the
//! scanner does, but accumulates characters into segments instead of
//! recording offset spans.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// A run of text with uniform styling. Marker characters are consumed during
/// splitting and never appear in segment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    /// The literal text of the run
    pub text: String,
    /// Render as strong
    pub bold: bool,
    /// Render as emphasized
    pub italic: bool,
}

impl TextSegment {
    fn new(text: String, bold: bool, italic: bool) -> Self {
        Self { text, bold, italic }
    }
}

/// A block-level display construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Block {
    /// A single-line paragraph of styled segments
    Paragraph(Vec<TextSegment>),
    /// A paragraph of several physical lines, rendered with explicit line
    /// breaks between them (only produced by [`render_paragraph`] for
    /// caller-pre-split input)
    MultiLine(Vec<Vec<TextSegment>>),
    /// Contiguous bullet items, one segment list per item
    BulletList(Vec<Vec<TextSegment>>),
    /// A blank line
    Break,
}

// ─────────────────────────────────────────────────────────────────────────────
// Inline Segment Splitting
// ─────────────────────────────────────────────────────────────────────────────

/// Split one line of text into styled segments.
///
/// Walks the bytes with the scanner's marker classification; each marker
/// flips a flag and flushes the accumulated run with its pre-flip flags.
/// Empty runs are dropped, so adjacent markers produce no phantom segments.
/// Text after an unmatched marker keeps the flipped flag, mirroring the
/// live-preview behavior of the editor.
pub fn split_segments(line: &str) -> Vec<TextSegment> {
    let bytes = line.as_bytes();
    let len = bytes.len();

    let mut segments = Vec::new();
    let mut run_start = 0;
    let mut bold = false;
    let mut italic = false;

    let mut flush = |segments: &mut Vec<TextSegment>, from: usize, to: usize, b: bool, i: bool| {
        if from < to {
            segments.push(TextSegment::new(line[from..to].to_string(), b, i));
        }
    };

    let mut i = 0;
    while i < len {
        if bytes[i] == b'*' && i + 1 < len && bytes[i + 1] == b'*' {
            flush(&mut segments, run_start, i, bold, italic);
            bold = !bold;
            i += 2;
            run_start = i;
            continue;
        }

        if bytes[i] == b'*'
            && (i == 0 || bytes[i - 1] != b'*')
            && (i + 1 >= len || bytes[i + 1] != b'*')
        {
            flush(&mut segments, run_start, i, bold, italic);
            italic = !italic;
            i += 1;
            run_start = i;
            continue;
        }

        i += 1;
    }

    flush(&mut segments, run_start, len, bold, italic);
    segments
}

// ─────────────────────────────────────────────────────────────────────────────
// Block Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Render raw note text into display blocks.
///
/// The text splits into physical lines; contiguous bullet lines collapse
/// into a single [`Block::BulletList`], blank lines become [`Block::Break`],
/// everything else a [`Block::Paragraph`]. Empty input renders to an empty
/// block list.
pub fn render(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if is_bullet_line(line) {
            let mut items = Vec::new();
            while i < lines.len() && is_bullet_line(lines[i]) {
                items.push(split_segments(bullet_content(lines[i])));
                i += 1;
            }
            blocks.push(Block::BulletList(items));
            continue;
        }

        if line.trim().is_empty() {
            blocks.push(Block::Break);
        } else {
            blocks.push(Block::Paragraph(split_segments(line)));
        }
        i += 1;
    }

    blocks
}

/// Render a single paragraph that the caller has already split out of a
/// larger document (e.g. at blank-line boundaries), so it may still contain
/// embedded newlines.
pub fn render_paragraph(paragraph: &str) -> Block {
    if paragraph.trim().is_empty() {
        return Block::Break;
    }

    if is_bullet_line(paragraph) {
        let items = paragraph
            .split('\n')
            .filter(|line| is_bullet_line(line))
            .map(|line| split_segments(bullet_content(line)))
            .collect();
        return Block::BulletList(items);
    }

    if paragraph.contains('\n') {
        let lines = paragraph.split('\n').map(split_segments).collect();
        return Block::MultiLine(lines);
    }

    Block::Paragraph(split_segments(paragraph))
}

fn is_bullet_line(line: &str) -> bool {
    line.trim_start().starts_with("- ")
}

/// Item text of a bullet line: everything after the `- ` marker, which sits
/// past any indentation.
fn bullet_content(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed.strip_prefix("- ").unwrap_or(trimmed)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
