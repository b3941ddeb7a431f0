//! Word-aware wrapping and the visual line map.
//!
//! Each logical line is split into [`LineChunk`]s sized to the content
//! width. A chunk records three byte offsets into its logical line:
//!
//! - `start`: first displayed byte,
//! - `display_end`: one past the last displayed byte (trailing whitespace
//!   trimmed from the display text),
//! - `end`: the pre-trim endpoint — equal to the next chunk's `start`, so
//!   the chunks of a line tile `[0, len]` and every cursor column maps to
//!   exactly one chunk.
//!
//! Keeping the trimmed whitespace inside `[display_end, end)` is what makes
//! cursor mapping round-trip: a cursor sitting in that region clamps to the
//! chunk's displayed width instead of disappearing.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// One visual line: a slice of a logical line sized to the content width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LineChunk {
    /// Index of the logical line this chunk belongs to.
    pub(crate) line: usize,
    /// Byte offset of the first displayed byte.
    pub(crate) start: usize,
    /// Byte offset one past the last displayed byte.
    pub(crate) display_end: usize,
    /// Pre-trim endpoint; the next chunk of the same line starts here.
    pub(crate) end: usize,
}

impl LineChunk {
    pub(crate) fn display<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.display_end]
    }
}

#[derive(Clone, Copy, Debug)]
struct Token {
    start: usize,
    end: usize,
    width: usize,
    is_ws: bool,
}

/// Tokenize into alternating whitespace / non-whitespace runs.
///
/// Runs are built from segmenter word boundaries so the classification is
/// script-independent; adjacent segments of the same class coalesce.
fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut pos = 0usize;
    for seg in line.split_word_bounds() {
        let is_ws = seg.chars().all(char::is_whitespace);
        let width = UnicodeWidthStr::width(seg);
        let end = pos + seg.len();
        match tokens.last_mut() {
            Some(t) if t.is_ws == is_ws => {
                t.end = end;
                t.width += width;
            }
            _ => tokens.push(Token {
                start: pos,
                end,
                width,
                is_ws,
            }),
        }
        pos = end;
    }
    tokens
}

/// Wrap one logical line into chunks no wider than `width` columns.
///
/// An empty line yields a single empty chunk. `line_idx` is stamped into
/// every produced chunk.
pub(crate) fn wrap_line(line: &str, line_idx: usize, width: usize) -> Vec<LineChunk> {
    let width = width.max(1);
    if line.is_empty() {
        return vec![LineChunk {
            line: line_idx,
            start: 0,
            display_end: 0,
            end: 0,
        }];
    }

    // Accumulate (start, display_end) pairs; `end` is fixed up afterwards to
    // tile the line.
    let mut closed: Vec<(usize, usize)> = Vec::new();
    let mut chunk_start = 0usize;
    let mut display_end = 0usize;
    let mut used = 0usize;

    let close = |closed: &mut Vec<(usize, usize)>, chunk_start: usize, display_end: usize| {
        let trimmed = line[chunk_start..display_end].trim_end();
        closed.push((chunk_start, chunk_start + trimmed.len()));
    };

    let tokens = tokenize(line);
    let mut i = 0usize;
    while i < tokens.len() {
        let t = tokens[i];

        // A token that no longer fits closes the chunk; the token is then
        // re-examined at the start of the next one.
        if used > 0 && used + t.width > width {
            close(&mut closed, chunk_start, display_end);
            chunk_start = t.start;
            display_end = t.start;
            used = 0;
            continue;
        }

        // Wrapped chunks discard one leading whitespace run.
        if t.is_ws && used == 0 && !closed.is_empty() && display_end == chunk_start {
            chunk_start = t.end;
            display_end = t.end;
            i += 1;
            continue;
        }

        // Leading whitespace on the first chunk that is wider than the
        // content area: absorb it whole, it trims away at close anyway.
        if t.is_ws && used == 0 && t.width > width {
            display_end = t.end;
            i += 1;
            if i < tokens.len() {
                close(&mut closed, chunk_start, display_end);
                chunk_start = t.end;
                display_end = t.end;
            }
            continue;
        }

        // An overwide non-whitespace token breaks by grapheme into
        // width-sized pieces.
        if !t.is_ws && t.width > width {
            for (rel, g) in line[t.start..t.end].grapheme_indices(true) {
                let gw = UnicodeWidthStr::width(g);
                if used > 0 && used + gw > width {
                    let at = t.start + rel;
                    close(&mut closed, chunk_start, at);
                    chunk_start = at;
                    used = 0;
                }
                used += gw;
            }
            display_end = t.end;
            i += 1;
            continue;
        }

        used += t.width;
        display_end = t.end;
        i += 1;
    }

    // The final chunk keeps its trailing whitespace so the cursor can sit
    // after it at end-of-line.
    closed.push((chunk_start, line.len()));

    let mut chunks: Vec<LineChunk> = Vec::with_capacity(closed.len());
    for (idx, (start, display_end)) in closed.iter().enumerate() {
        let end = match closed.get(idx + 1) {
            Some((next_start, _)) => *next_start,
            None => line.len(),
        };
        chunks.push(LineChunk {
            line: line_idx,
            start: *start,
            display_end: *display_end,
            end,
        });
    }
    chunks
}

/// The concatenated chunks of every logical line, in order.
///
/// This is the coordinate system for vertical cursor motion, page scrolling,
/// and the render viewport.
pub(crate) struct VisualLayout {
    chunks: Vec<LineChunk>,
}

impl VisualLayout {
    pub(crate) fn build(lines: &[String], width: usize) -> Self {
        let mut chunks = Vec::with_capacity(lines.len());
        for (idx, line) in lines.iter().enumerate() {
            chunks.extend(wrap_line(line, idx, width));
        }
        Self { chunks }
    }

    pub(crate) fn chunks(&self) -> &[LineChunk] {
        &self.chunks
    }

    pub(crate) fn visual_line_count(&self) -> usize {
        self.chunks.len()
    }

    /// Index of the chunk holding the cursor `(line, col)`.
    ///
    /// Boundary columns belong to the later chunk; the last chunk of a line
    /// has an inclusive right endpoint so the cursor can sit at end-of-line.
    pub(crate) fn chunk_index(&self, line: usize, col: usize) -> usize {
        // Chunks are ordered by (line, start); the count of chunks at or
        // before the cursor minus one is the owning chunk.
        let idx = self
            .chunks
            .partition_point(|c| (c.line, c.start) <= (line, col));
        idx.saturating_sub(1)
    }

    /// Visual column of cursor byte offset `col` within chunk `idx`.
    ///
    /// Offsets inside a non-final chunk's trimmed whitespace clamp to the
    /// displayed width.
    pub(crate) fn visual_col(&self, lines: &[String], idx: usize, col: usize) -> usize {
        let chunk = self.chunks[idx];
        let line = &lines[chunk.line];
        let upto = col.clamp(chunk.start, chunk.display_end);
        UnicodeWidthStr::width(&line[chunk.start..upto])
    }

    /// Cursor position at visual column `target` on chunk `idx`.
    pub(crate) fn position_at(&self, lines: &[String], idx: usize, target: usize) -> (usize, usize) {
        let chunk = self.chunks[idx];
        let line = &lines[chunk.line];
        let display = chunk.display(line);
        let mut width_so_far = 0usize;
        for (rel, g) in display.grapheme_indices(true) {
            width_so_far += UnicodeWidthStr::width(g);
            if width_so_far > target {
                return (chunk.line, chunk.start + rel);
            }
        }
        (chunk.line, chunk.display_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(line: &str, width: usize) -> Vec<String> {
        wrap_line(line, 0, width)
            .iter()
            .map(|c| c.display(line).to_string())
            .collect()
    }

    #[test]
    fn short_line_is_one_chunk() {
        let chunks = wrap_line("hello", 0, 10);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].display("hello"), "hello");
        assert_eq!(chunks[0].end, 5);
    }

    #[test]
    fn empty_line_maps_to_single_empty_chunk() {
        let chunks = wrap_line("", 3, 10);
        assert_eq!(
            chunks,
            vec![LineChunk {
                line: 3,
                start: 0,
                display_end: 0,
                end: 0
            }]
        );
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(texts("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn wrapped_chunk_trims_trailing_whitespace_but_keeps_endpoint() {
        let line = "the quick brown fox";
        let chunks = wrap_line(line, 0, 10);
        assert_eq!(chunks[0].display_end, 9);
        // The trimmed space is still covered by the first chunk.
        assert_eq!(chunks[0].end, 10);
        assert_eq!(chunks[1].start, 10);
        assert_eq!(chunks[1].end, 19);
    }

    #[test]
    fn overwide_token_breaks_by_grapheme() {
        assert_eq!(texts("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn overwide_token_respects_wide_graphemes() {
        // Each ideograph is two columns; three fit in five columns leaves
        // one spare, so chunks carry two each.
        assert_eq!(texts("日本語表記", 4), vec!["日本", "語表", "記"]);
    }

    #[test]
    fn final_chunk_keeps_trailing_whitespace() {
        let chunks = wrap_line("abc  ", 0, 10);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].display("abc  "), "abc  ");
    }

    #[test]
    fn trailing_whitespace_past_width_becomes_empty_chunk() {
        let line = "abcdef    ";
        let chunks = wrap_line(line, 0, 6);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].display(line), "abcdef");
        assert_eq!(chunks[1].display(line), "");
        assert_eq!(chunks[1].start, line.len());
    }

    #[test]
    fn wrap_fidelity_restores_single_spaced_lines() {
        let line = "alpha beta gamma delta epsilon zeta";
        for width in 4..=20 {
            let chunks = wrap_line(line, 0, width);
            let mut rebuilt = String::new();
            for (i, chunk) in chunks.iter().enumerate() {
                if i > 0 {
                    let prev = &chunks[i - 1];
                    let trimmed_ws = prev.display_end < prev.end
                        && line[prev.display_end..]
                            .chars()
                            .next()
                            .is_some_and(char::is_whitespace);
                    if trimmed_ws {
                        rebuilt.push(' ');
                    }
                }
                rebuilt.push_str(chunk.display(line));
            }
            assert_eq!(rebuilt, line, "width {width}");
        }
    }

    #[test]
    fn cursor_maps_to_later_chunk_at_boundary() {
        let lines = vec!["the quick brown fox".to_string()];
        let layout = VisualLayout::build(&lines, 10);
        assert_eq!(layout.chunk_index(0, 10), 1);
        assert_eq!(layout.chunk_index(0, 9), 0);
        // End of line sits on the final chunk, inclusive.
        assert_eq!(layout.chunk_index(0, 19), 1);
        assert_eq!(layout.visual_col(&lines, 1, 19), 9);
    }

    #[test]
    fn cursor_in_trimmed_whitespace_clamps_to_display_width() {
        let lines = vec!["the quick brown fox".to_string()];
        let layout = VisualLayout::build(&lines, 10);
        let idx = layout.chunk_index(0, 9);
        assert_eq!(idx, 0);
        assert_eq!(layout.visual_col(&lines, idx, 9), 9);
    }

    #[test]
    fn position_at_walks_graphemes() {
        let lines = vec!["naïve text".to_string()];
        let layout = VisualLayout::build(&lines, 20);
        let (line, col) = layout.position_at(&lines, 0, 3);
        assert_eq!(line, 0);
        assert_eq!(&lines[0][..col], "naï");
    }

    #[test]
    fn position_past_chunk_width_lands_at_display_end() {
        let lines = vec!["ab".to_string(), "wxyz".to_string()];
        let layout = VisualLayout::build(&lines, 10);
        let (line, col) = layout.position_at(&lines, 0, 9);
        assert_eq!((line, col), (0, 2));
    }

    #[test]
    fn layout_spans_logical_lines() {
        let lines = vec!["one two three".to_string(), "".to_string(), "four".to_string()];
        let layout = VisualLayout::build(&lines, 8);
        let rows: Vec<(usize, String)> = layout
            .chunks()
            .iter()
            .map(|c| (c.line, c.display(&lines[c.line]).to_string()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (0, "one two".to_string()),
                (0, "three".to_string()),
                (1, String::new()),
                (2, "four".to_string()),
            ]
        );
    }
}
