//! The logical text buffer and cursor.
//!
//! The buffer is an ordered list of logical lines (no embedded newlines,
//! never empty — the empty buffer is one empty line). The cursor is a
//! `(line, col)` pair where `col` is a byte offset that always sits on a
//! grapheme-cluster boundary; deletion and horizontal motion operate on
//! whole grapheme clusters.

use unicode_segmentation::GraphemeCursor;
use unicode_segmentation::UnicodeSegmentation;

use crate::layout::VisualLayout;

/// Character class used for word motion and word deletion.
///
/// Classified per grapheme cluster so combining marks travel with their
/// base character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunClass {
    Whitespace,
    Word,
    Punctuation,
}

fn class_of(grapheme: &str) -> RunClass {
    match grapheme.chars().next() {
        Some(c) if c.is_whitespace() => RunClass::Whitespace,
        Some(c) if c.is_alphanumeric() => RunClass::Word,
        Some(_) => RunClass::Punctuation,
        None => RunClass::Whitespace,
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[derive(Debug)]
pub(crate) struct TextArea {
    lines: Vec<String>,
    cursor_line: usize,
    cursor_col: usize,
    /// Visual column vertical motion tries to return to; cleared by any
    /// horizontal motion or edit.
    preferred_col: Option<usize>,
}

impl TextArea {
    pub(crate) fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_line: 0,
            cursor_col: 0,
            preferred_col: None,
        }
    }

    pub(crate) fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub(crate) fn cursor(&self) -> (usize, usize) {
        (self.cursor_line, self.cursor_col)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn current_line(&self) -> &str {
        &self.lines[self.cursor_line]
    }

    /// Replace the whole buffer; cursor moves to the end.
    pub(crate) fn set_text(&mut self, text: &str) {
        let normalized = normalize_newlines(text);
        self.lines = normalized.split('\n').map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.cursor_line = self.lines.len() - 1;
        self.cursor_col = self.lines[self.cursor_line].len();
        self.preferred_col = None;
    }

    /// Replace the buffer with externally produced lines (e.g. an applied
    /// completion), clamping the cursor onto a valid grapheme boundary.
    pub(crate) fn set_lines(&mut self, lines: Vec<String>, cursor_line: usize, cursor_col: usize) {
        let mut flat: Vec<String> = Vec::new();
        for line in lines {
            flat.extend(normalize_newlines(&line).split('\n').map(str::to_string));
        }
        if flat.is_empty() {
            flat.push(String::new());
        }
        self.lines = flat;
        self.cursor_line = cursor_line.min(self.lines.len() - 1);
        let line = &self.lines[self.cursor_line];
        let col = cursor_col.min(line.len());
        self.cursor_col = if col == line.len() {
            col
        } else {
            let mut boundary = 0usize;
            for (idx, _) in line.grapheme_indices(true) {
                if idx <= col {
                    boundary = idx;
                } else {
                    break;
                }
            }
            boundary
        };
        self.preferred_col = None;
    }

    /// Reset to a single empty line with the cursor at the origin.
    pub(crate) fn reset(&mut self) {
        self.lines = vec![String::new()];
        self.cursor_line = 0;
        self.cursor_col = 0;
        self.preferred_col = None;
    }

    /// Splice `text` (possibly multi-line) at the cursor.
    pub(crate) fn insert_str(&mut self, text: &str) {
        let normalized = normalize_newlines(text);
        let tail = self.lines[self.cursor_line].split_off(self.cursor_col);
        let mut segments = normalized.split('\n');
        if let Some(first) = segments.next() {
            self.lines[self.cursor_line].push_str(first);
            self.cursor_col += first.len();
        }
        for segment in segments {
            self.cursor_line += 1;
            self.lines.insert(self.cursor_line, segment.to_string());
            self.cursor_col = segment.len();
        }
        self.lines[self.cursor_line].push_str(&tail);
        self.preferred_col = None;
    }

    /// Split the current line at the cursor; the cursor moves to column 0 of
    /// the new line.
    pub(crate) fn insert_newline(&mut self) {
        let tail = self.lines[self.cursor_line].split_off(self.cursor_col);
        self.lines.insert(self.cursor_line + 1, tail);
        self.cursor_line += 1;
        self.cursor_col = 0;
        self.preferred_col = None;
    }

    fn prev_boundary(&self, col: usize) -> usize {
        let line = self.current_line();
        if col == 0 {
            return 0;
        }
        let mut gc = GraphemeCursor::new(col, line.len(), true);
        match gc.prev_boundary(line, 0) {
            Ok(Some(b)) => b,
            Ok(None) => 0,
            Err(_) => col.saturating_sub(1),
        }
    }

    fn next_boundary(&self, col: usize) -> usize {
        let line = self.current_line();
        if col >= line.len() {
            return line.len();
        }
        let mut gc = GraphemeCursor::new(col, line.len(), true);
        match gc.next_boundary(line, 0) {
            Ok(Some(b)) => b,
            Ok(None) => line.len(),
            Err(_) => line.len().min(col + 1),
        }
    }

    /// Delete the grapheme cluster before the cursor, or join with the
    /// previous line at column 0. Returns false when there was nothing to
    /// delete.
    ///
    /// Joining deliberately keeps the previous line's trailing whitespace
    /// intact, so a join can produce a double space.
    pub(crate) fn delete_backward(&mut self) -> bool {
        self.preferred_col = None;
        if self.cursor_col > 0 {
            let start = self.prev_boundary(self.cursor_col);
            self.lines[self.cursor_line].replace_range(start..self.cursor_col, "");
            self.cursor_col = start;
            true
        } else if self.cursor_line > 0 {
            let tail = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_col = self.lines[self.cursor_line].len();
            self.lines[self.cursor_line].push_str(&tail);
            true
        } else {
            false
        }
    }

    /// Delete the grapheme cluster after the cursor, or join with the next
    /// line at end-of-line.
    pub(crate) fn delete_forward(&mut self) -> bool {
        self.preferred_col = None;
        let line_len = self.current_line().len();
        if self.cursor_col < line_len {
            let end = self.next_boundary(self.cursor_col);
            self.lines[self.cursor_line].replace_range(self.cursor_col..end, "");
            true
        } else if self.cursor_line + 1 < self.lines.len() {
            let tail = self.lines.remove(self.cursor_line + 1);
            self.lines[self.cursor_line].push_str(&tail);
            true
        } else {
            false
        }
    }

    /// Start of the word left of `col`: skip whitespace, then one
    /// punctuation run or one word run.
    fn word_start_left(&self, col: usize) -> usize {
        let line = self.current_line();
        let mut graphemes: Vec<(usize, &str)> = line[..col].grapheme_indices(true).collect();
        while let Some(&(_, g)) = graphemes.last() {
            if class_of(g) == RunClass::Whitespace {
                graphemes.pop();
            } else {
                break;
            }
        }
        let Some(&(_, last)) = graphemes.last() else {
            return 0;
        };
        let run_class = class_of(last);
        let mut start = col;
        while let Some(&(idx, g)) = graphemes.last() {
            if class_of(g) == run_class {
                start = idx;
                graphemes.pop();
            } else {
                break;
            }
        }
        start.min(col)
    }

    /// End of the word right of `col`: skip whitespace, then one
    /// punctuation run or one word run.
    fn word_end_right(&self, col: usize) -> usize {
        let line = self.current_line();
        let mut iter = line[col..].grapheme_indices(true).peekable();
        let mut end = col;
        while let Some(&(idx, g)) = iter.peek() {
            if class_of(g) == RunClass::Whitespace {
                end = col + idx + g.len();
                iter.next();
            } else {
                break;
            }
        }
        let Some(&(_, g)) = iter.peek() else {
            return line.len();
        };
        let run_class = class_of(g);
        for (idx, g) in iter {
            if class_of(g) == run_class {
                end = col + idx + g.len();
            } else {
                break;
            }
        }
        end
    }

    /// Delete back to the start of the previous word; behaves as backspace
    /// when already at column 0. Returns false when nothing changed.
    pub(crate) fn delete_word_backward(&mut self) -> bool {
        if self.cursor_col == 0 {
            return self.delete_backward();
        }
        self.preferred_col = None;
        let start = self.word_start_left(self.cursor_col);
        self.lines[self.cursor_line].replace_range(start..self.cursor_col, "");
        self.cursor_col = start;
        true
    }

    /// Delete to column 0; at column 0, join with the previous line.
    pub(crate) fn delete_to_line_start(&mut self) -> bool {
        if self.cursor_col == 0 {
            return self.delete_backward();
        }
        self.preferred_col = None;
        self.lines[self.cursor_line].replace_range(..self.cursor_col, "");
        self.cursor_col = 0;
        true
    }

    /// Delete to end-of-line; at end-of-line, join with the next line.
    pub(crate) fn delete_to_line_end(&mut self) -> bool {
        let line_len = self.current_line().len();
        if self.cursor_col == line_len {
            return self.delete_forward();
        }
        self.preferred_col = None;
        self.lines[self.cursor_line].truncate(self.cursor_col);
        true
    }

    pub(crate) fn move_left(&mut self) {
        self.preferred_col = None;
        if self.cursor_col > 0 {
            self.cursor_col = self.prev_boundary(self.cursor_col);
        } else if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.lines[self.cursor_line].len();
        }
    }

    pub(crate) fn move_right(&mut self) {
        self.preferred_col = None;
        if self.cursor_col < self.current_line().len() {
            self.cursor_col = self.next_boundary(self.cursor_col);
        } else if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = 0;
        }
    }

    pub(crate) fn move_word_left(&mut self) {
        self.preferred_col = None;
        if self.cursor_col == 0 {
            if self.cursor_line > 0 {
                self.cursor_line -= 1;
                self.cursor_col = self.lines[self.cursor_line].len();
            }
            return;
        }
        self.cursor_col = self.word_start_left(self.cursor_col);
    }

    pub(crate) fn move_word_right(&mut self) {
        self.preferred_col = None;
        if self.cursor_col == self.current_line().len() {
            if self.cursor_line + 1 < self.lines.len() {
                self.cursor_line += 1;
                self.cursor_col = 0;
            }
            return;
        }
        self.cursor_col = self.word_end_right(self.cursor_col);
    }

    pub(crate) fn move_line_start(&mut self) {
        self.preferred_col = None;
        self.cursor_col = 0;
    }

    pub(crate) fn move_line_end(&mut self) {
        self.preferred_col = None;
        self.cursor_col = self.current_line().len();
    }

    /// Move one visual line up. On the first visual line the cursor jumps to
    /// the start of the buffer.
    pub(crate) fn move_up(&mut self, layout: &VisualLayout) {
        let idx = layout.chunk_index(self.cursor_line, self.cursor_col);
        if idx == 0 {
            self.cursor_line = 0;
            self.cursor_col = 0;
            self.preferred_col = None;
            return;
        }
        self.move_to_visual(layout, idx, idx - 1);
    }

    /// Move one visual line down. On the last visual line the cursor jumps
    /// to the end of the buffer.
    pub(crate) fn move_down(&mut self, layout: &VisualLayout) {
        let idx = layout.chunk_index(self.cursor_line, self.cursor_col);
        if idx + 1 >= layout.visual_line_count() {
            self.cursor_line = self.lines.len() - 1;
            self.cursor_col = self.lines[self.cursor_line].len();
            self.preferred_col = None;
            return;
        }
        self.move_to_visual(layout, idx, idx + 1);
    }

    /// Move `delta` visual lines, clamped to the map, preserving the visual
    /// column. Used for page motion.
    pub(crate) fn move_page(&mut self, layout: &VisualLayout, delta: isize) {
        let count = layout.visual_line_count();
        if count == 0 {
            return;
        }
        let idx = layout.chunk_index(self.cursor_line, self.cursor_col);
        let target = (idx as isize + delta).clamp(0, count as isize - 1) as usize;
        if target != idx {
            self.move_to_visual(layout, idx, target);
        }
    }

    fn move_to_visual(&mut self, layout: &VisualLayout, from: usize, to: usize) {
        let target_col = self
            .preferred_col
            .unwrap_or_else(|| layout.visual_col(&self.lines, from, self.cursor_col));
        self.preferred_col = Some(target_col);
        let (line, col) = layout.position_at(&self.lines, to, target_col);
        self.cursor_line = line;
        self.cursor_col = col;
    }

    /// True when the cursor sits on the first visual line of the buffer.
    pub(crate) fn on_first_visual_line(&self, layout: &VisualLayout) -> bool {
        layout.chunk_index(self.cursor_line, self.cursor_col) == 0
    }

    /// True when the cursor sits on the last visual line of the buffer.
    pub(crate) fn on_last_visual_line(&self, layout: &VisualLayout) -> bool {
        layout.chunk_index(self.cursor_line, self.cursor_col) + 1 >= layout.visual_line_count()
    }
}
