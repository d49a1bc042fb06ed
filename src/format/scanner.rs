//! Format scanner: marker region discovery
//!
//! A single left-to-right pass over the raw text buffer that records which
//! byte spans are currently bold (`**…**`) and which are italic (`*…*`).
//! The dialect is flat: markers do not nest within the same kind, and an
//! opening marker with no closing partner is plain text, not an error.
//!
//! Everything downstream (toolbar state, toggling) is derived from the
//! region lists this scan produces.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Half-open byte span `[start, end)` of the *content* between a marker
/// pair, excluding the markers themselves.
///
/// For `"**hi**"` the bold region is `{2, 4}`. The opening marker always
/// occupies the bytes immediately before `start` and the closing marker the
/// bytes starting at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedRegion {
    /// First byte of the content
    pub start: usize,
    /// One past the last byte of the content
    pub end: usize,
}

/// Result of scanning a text buffer: all closed bold and italic regions, in
/// left-to-right discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatScan {
    /// Content spans between `**` pairs
    pub bold: Vec<MarkedRegion>,
    /// Content spans between single `*` pairs
    pub italic: Vec<MarkedRegion>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Scanning
// ─────────────────────────────────────────────────────────────────────────────

/// Scan `text` and return its bold and italic regions.
///
/// The pass keeps one open-marker slot per kind; closing a pair emits the
/// region and clears the slot. Marker consumption is mutually exclusive per
/// position: a `**` is consumed whole as a bold marker and never doubles as
/// two italic markers, and a `*` adjacent to another `*` is never an italic
/// marker.
///
/// The scan walks raw bytes. `*` is ASCII and UTF-8 continuation bytes are
/// all `>= 0x80`, so multi-byte characters can never produce a false marker
/// and all emitted offsets land on character boundaries.
pub fn scan(text: &str) -> FormatScan {
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut bold = Vec::new();
    let mut italic = Vec::new();
    let mut bold_open: Option<usize> = None;
    let mut italic_open: Option<usize> = None;

    let mut i = 0;
    while i < len {
        // Bold marker: current and next byte are both '*'.
        if bytes[i] == b'*' && i + 1 < len && bytes[i + 1] == b'*' {
            match bold_open.take() {
                None => bold_open = Some(i),
                Some(open) => bold.push(MarkedRegion {
                    start: open + 2,
                    end: i,
                }),
            }
            i += 2;
            continue;
        }

        // Italic marker: a lone '*' with no '*' neighbor on either side.
        if bytes[i] == b'*'
            && (i == 0 || bytes[i - 1] != b'*')
            && (i + 1 >= len || bytes[i + 1] != b'*')
        {
            match italic_open.take() {
                None => italic_open = Some(i),
                Some(open) => italic.push(MarkedRegion {
                    start: open + 1,
                    end: i,
                }),
            }
        }

        i += 1;
    }

    // Markers still open here have no partner and emit nothing.
    FormatScan { bold, italic }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
