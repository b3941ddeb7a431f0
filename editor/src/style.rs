//! Styling primitives for the editor's string-based render output.
//!
//! The editor renders to plain `String`s carrying ANSI SGR sequences; the
//! host owns the terminal and decides where the block is drawn. Everything
//! here is therefore expressed as string transforms: apply an attribute,
//! strip escapes, measure visible columns.

use crossterm::style::Attribute;
use unicode_width::UnicodeWidthStr;

/// Zero-width sentinel marking the cursor position inside a rendered line.
///
/// Hosts that position the hardware cursor themselves scan each frame for
/// this character and translate its cell position into a terminal cursor
/// move. It occupies no columns and appears at most once per frame.
pub const CURSOR_MARKER: char = '\u{200B}';

/// Corner glyphs for the editor's top and bottom ruled borders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    #[default]
    Rounded,
    Sharp,
    /// Plain `─` rules with no corner substitution.
    None,
}

impl BorderStyle {
    /// `(top-left, top-right)` corner glyphs, if this style has corners.
    pub(crate) fn top_corners(self) -> Option<(char, char)> {
        match self {
            BorderStyle::Rounded => Some(('╭', '╮')),
            BorderStyle::Sharp => Some(('┌', '┐')),
            BorderStyle::None => None,
        }
    }

    /// `(bottom-left, bottom-right)` corner glyphs, if this style has corners.
    pub(crate) fn bottom_corners(self) -> Option<(char, char)> {
        match self {
            BorderStyle::Rounded => Some(('╰', '╯')),
            BorderStyle::Sharp => Some(('└', '┘')),
            BorderStyle::None => None,
        }
    }
}

/// Wrap `text` in reverse-video SGR codes.
pub(crate) fn reverse_video(text: &str) -> String {
    format!("{}{text}{}", Attribute::Reverse, Attribute::NoReverse)
}

/// Wrap `text` in dim SGR codes.
pub(crate) fn dim(text: &str) -> String {
    format!("{}{text}{}", Attribute::Dim, Attribute::NormalIntensity)
}

/// Remove ANSI escape sequences, leaving only printable content.
///
/// Handles CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL`/`ESC \`), and
/// two-byte `ESC x` sequences. Unterminated sequences at end of input are
/// dropped.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\u{1b}' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('[') => {
                // CSI: parameter/intermediate bytes end at a final byte in
                // 0x40..=0x7e.
                for c in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&c) {
                        break;
                    }
                }
            }
            Some(']') => {
                // OSC: terminated by BEL or ST (ESC \).
                while let Some(c) = chars.next() {
                    if c == '\u{07}' {
                        break;
                    }
                    if c == '\u{1b}' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            // Two-byte escape (ESC x): swallow the second byte.
            Some(_) | None => {}
        }
    }
    out
}

/// Truncate `text` to at most `max` columns on a grapheme boundary; returns
/// the kept slice and its visible width.
pub(crate) fn truncate_to_width(text: &str, max: usize) -> (&str, usize) {
    use unicode_segmentation::UnicodeSegmentation;
    let mut used = 0usize;
    for (idx, g) in text.grapheme_indices(true) {
        let gw = UnicodeWidthStr::width(g);
        if used + gw > max {
            return (&text[..idx], used);
        }
        used += gw;
    }
    (text, used)
}

/// Columns `text` occupies in a terminal after escapes are stripped.
///
/// The cursor marker is explicitly excluded so rendered lines measure the
/// same with and without it.
pub fn visible_width(text: &str) -> usize {
    let stripped = strip_ansi(text);
    let without_marker: String = stripped.chars().filter(|c| *c != CURSOR_MARKER).collect();
    UnicodeWidthStr::width(without_marker.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strip_ansi_removes_sgr_sequences() {
        let styled = reverse_video("ab");
        assert_eq!(strip_ansi(&styled), "ab");
    }

    #[test]
    fn strip_ansi_keeps_plain_text() {
        assert_eq!(strip_ansi("plain ─ text"), "plain ─ text");
    }

    #[test]
    fn strip_ansi_drops_unterminated_csi() {
        assert_eq!(strip_ansi("ab\u{1b}[38;5"), "ab");
    }

    #[test]
    fn visible_width_ignores_marker_and_styles() {
        let line = format!("a{}{}", CURSOR_MARKER, reverse_video("б"));
        assert_eq!(visible_width(&line), 2);
    }

    #[test]
    fn visible_width_counts_wide_graphemes() {
        assert_eq!(visible_width("日本"), 4);
    }
}
