//! UTF-8 safe string slicing helpers
//!
//! Hosts hand the engine raw byte offsets taken from a text widget, and those
//! offsets can land in the middle of a multi-byte character (`å`, `中`, `🎉`).
//! Slicing a `&str` at such an offset panics, so every public operation in
//! this crate first pushes its offsets onto a character boundary with these
//! helpers.

// ─────────────────────────────────────────────────────────────────────────────
// Character Boundary Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Largest index `<= index` that sits on a UTF-8 character boundary.
///
/// Indices past the end of the string clamp to `s.len()`.
#[inline]
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let bytes = s.as_bytes();
    let mut i = index;
    while i > 0 && !is_utf8_char_start(bytes[i]) {
        i -= 1;
    }
    i
}

/// Smallest index `>= index` that sits on a UTF-8 character boundary.
///
/// Indices past the end of the string clamp to `s.len()`.
#[inline]
pub fn ceil_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let bytes = s.as_bytes();
    let mut i = index;
    while i < bytes.len() && !is_utf8_char_start(bytes[i]) {
        i += 1;
    }
    i
}

/// True unless the byte is a UTF-8 continuation byte (10xxxxxx).
#[inline]
fn is_utf8_char_start(byte: u8) -> bool {
    (byte & 0b1100_0000) != 0b1000_0000
}

// ─────────────────────────────────────────────────────────────────────────────
// Safe Slicing
// ─────────────────────────────────────────────────────────────────────────────

/// Slice `s[start..end]` after adjusting both offsets to character
/// boundaries (`start` floors, `end` ceils). Returns `""` when the adjusted
/// range is empty or inverted.
#[inline]
pub fn safe_slice(s: &str, start: usize, end: usize) -> &str {
    let start = floor_char_boundary(s, start);
    let end = ceil_char_boundary(s, end);
    if start >= end {
        return "";
    }
    &s[start..end]
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_ascii_passthrough() {
        let s = "note text";
        assert_eq!(floor_char_boundary(s, 0), 0);
        assert_eq!(floor_char_boundary(s, 4), 4);
        assert_eq!(floor_char_boundary(s, s.len()), s.len());
        assert_eq!(floor_char_boundary(s, 99), s.len());
    }

    #[test]
    fn test_floor_inside_multibyte() {
        let s = "på"; // 'å' occupies bytes 1..3
        assert_eq!(floor_char_boundary(s, 2), 1);
        let s = "你好"; // 3 bytes each
        assert_eq!(floor_char_boundary(s, 1), 0);
        assert_eq!(floor_char_boundary(s, 4), 3);
    }

    #[test]
    fn test_ceil_inside_multibyte() {
        let s = "på";
        assert_eq!(ceil_char_boundary(s, 2), 3);
        let s = "a🎉b"; // emoji occupies bytes 1..5
        assert_eq!(ceil_char_boundary(s, 2), 5);
        assert_eq!(ceil_char_boundary(s, 3), 5);
        assert_eq!(ceil_char_boundary(s, 5), 5);
    }

    #[test]
    fn test_safe_slice_basic() {
        let s = "my **note**";
        assert_eq!(safe_slice(s, 3, 11), "**note**");
        assert_eq!(safe_slice(s, 0, 2), "my");
        assert_eq!(safe_slice(s, 0, 100), s);
    }

    #[test]
    fn test_safe_slice_degenerate() {
        let s = "abc";
        assert_eq!(safe_slice(s, 2, 2), "");
        assert_eq!(safe_slice(s, 3, 1), "");
        assert_eq!(safe_slice("", 0, 0), "");
    }

    #[test]
    fn test_safe_slice_mid_character() {
        let s = "née"; // 'é' is 2 bytes, at 1..3
        // Start floors and end ceils, so a range that begins inside a
        // character widens to cover the whole character.
        assert_eq!(safe_slice(s, 2, 2), "");
        assert_eq!(safe_slice(s, 1, 2), "é");
    }

    #[test]
    fn test_no_panic_on_any_offset() {
        let s = "Hei på deg 你好 🎉";
        for i in 0..=s.len() + 4 {
            for j in 0..=s.len() + 4 {
                let _ = safe_slice(s, i, j);
            }
            let _ = floor_char_boundary(s, i);
            let _ = ceil_char_boundary(s, i);
        }
    }
}
