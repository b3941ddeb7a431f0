//! The multi-line prompt editor widget.
//!
//! [`Editor`] is the input state machine for an interactive prompt: it
//! consumes raw terminal bytes, maintains the logical buffer, routes keys to
//! the autocomplete overlay when one is visible, and renders itself as a
//! block of ANSI-styled strings of an exact width.
//!
//! # Input routing
//!
//! Every decoded event passes through [`Editor::handle_event`]. Routing is
//! layered, in order: bracketed-paste state (inside the decoder), the
//! pending-backslash compatibility hold, the `copy` passthrough, overlay
//! keys while the overlay is visible, the shared keybinding table, and
//! finally the printable-text fallback.
//!
//! # Mutation policy
//!
//! Every buffer mutation exits history browsing, fires the change sink,
//! and then either refreshes the active overlay or — for insertions of
//! trigger characters — attempts a fresh activation. The overlay is never
//! visible in a context the buffer does not justify.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use unicode_segmentation::UnicodeSegmentation;

use crate::autocomplete::AutocompleteOverlay;
use crate::autocomplete::AutocompleteProvider;
use crate::autocomplete::SuggestionContext;
use crate::autocomplete::TriggerKind;
use crate::autocomplete::at_prefix;
use crate::autocomplete::forced_prefix;
use crate::autocomplete::is_word_like;
use crate::autocomplete::slash_prefix;
use crate::history::HistoryStep;
use crate::history::PromptHistory;
use crate::input::InputDecoder;
use crate::input::InputEvent;
use crate::keymap::EditorCommand;
use crate::keymap::Keymap;
use crate::keymap::OverlayCommand;
use crate::layout::LineChunk;
use crate::layout::VisualLayout;
use crate::pastes;
use crate::pastes::PasteTable;
use crate::selection_list::SelectionList;
use crate::style;
use crate::style::BorderStyle;
use crate::style::CURSOR_MARKER;
use crate::style::truncate_to_width;
use crate::textarea::TextArea;

/// Construction options. Runtime setters mirror every field.
#[derive(Clone, Copy, Debug)]
pub struct EditorConfig {
    /// Horizontal padding between the render edge and the content, clamped
    /// at render time so at least one content column survives.
    pub padding_x: usize,
    pub border_style: BorderStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            padding_x: 1,
            border_style: BorderStyle::default(),
        }
    }
}

type Callback = Box<dyn FnMut(&str)>;

pub struct Editor {
    textarea: TextArea,
    decoder: InputDecoder,
    keymap: Keymap,
    history: PromptHistory,
    pastes: PasteTable,
    provider: Option<Box<dyn AutocompleteProvider>>,
    overlay: Option<AutocompleteOverlay>,
    /// A lone `\` held back: followed by Enter it becomes a newline,
    /// otherwise it is inserted verbatim.
    pending_backslash: bool,
    on_submit: Option<Callback>,
    on_change: Option<Callback>,
    disable_submit: bool,
    has_focus: bool,
    padding_x: usize,
    border_style: BorderStyle,
    terminal_rows: usize,
    scroll_offset: usize,
    /// Content width of the last render; vertical navigation between frames
    /// wraps against this.
    last_content_width: usize,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            textarea: TextArea::new(),
            decoder: InputDecoder::new(),
            keymap: Keymap::default(),
            history: PromptHistory::new(),
            pastes: PasteTable::new(),
            provider: None,
            overlay: None,
            pending_backslash: false,
            on_submit: None,
            on_change: None,
            disable_submit: false,
            has_focus: true,
            padding_x: config.padding_x,
            border_style: config.border_style,
            terminal_rows: 24,
            scroll_offset: 0,
            last_content_width: 80,
        }
    }

    // ------------------------------------------------------------------
    // Host-facing configuration
    // ------------------------------------------------------------------

    pub fn on_submit(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_submit = Some(Box::new(callback));
    }

    pub fn on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn set_autocomplete_provider(&mut self, provider: impl AutocompleteProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    pub fn set_focus(&mut self, has_focus: bool) {
        self.has_focus = has_focus;
    }

    pub fn set_disable_submit(&mut self, disable: bool) {
        self.disable_submit = disable;
    }

    pub fn set_padding_x(&mut self, padding_x: usize) {
        self.padding_x = padding_x;
    }

    pub fn set_border_style(&mut self, border_style: BorderStyle) {
        self.border_style = border_style;
    }

    /// The host pushes its terminal row count here; it feeds the visible
    /// window size and the page-motion distance.
    pub fn set_terminal_rows(&mut self, rows: usize) {
        self.terminal_rows = rows;
    }

    /// The shared keybinding table, editable by the host.
    pub fn keymap_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    // ------------------------------------------------------------------
    // Buffer access
    // ------------------------------------------------------------------

    pub fn text(&self) -> String {
        self.textarea.text()
    }

    /// Buffer text with paste markers replaced by their stored payloads.
    pub fn expanded_text(&self) -> String {
        self.pastes.expand(&self.textarea.text())
    }

    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    /// `(line, col)`; `col` is a byte offset on a grapheme boundary.
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.is_empty()
    }

    pub fn is_showing_autocomplete(&self) -> bool {
        self.overlay.is_some()
    }

    /// Replace the buffer. Exits history browsing and fires the change sink.
    pub fn set_text(&mut self, text: &str) {
        self.textarea.set_text(text);
        self.after_mutation();
    }

    /// Splice text at the cursor as if it had been typed.
    pub fn insert_text_at_cursor(&mut self, text: &str) {
        self.insert_text(text);
    }

    /// Record a submitted prompt for Up/Down recall.
    pub fn add_to_history(&mut self, text: &str) {
        self.history.push(text);
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Feed one chunk of raw terminal input.
    pub fn handle_input(&mut self, bytes: &[u8]) {
        for event in self.decoder.decode(bytes) {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Paste(text) => {
                self.flush_pending_backslash();
                self.ingest_paste(&text);
            }
            InputEvent::Text(text) => {
                self.flush_pending_backslash();
                if text == "\\" {
                    self.pending_backslash = true;
                    return;
                }
                self.insert_text(&text);
            }
            InputEvent::Key(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.pending_backslash {
            self.pending_backslash = false;
            if key.code == KeyCode::Enter && key.modifiers == KeyModifiers::NONE {
                self.textarea.insert_newline();
                self.after_mutation();
                return;
            }
            self.insert_text("\\");
        }

        // `copy` passes through untouched; the host decides what it means.
        if self.keymap.command(key) == Some(EditorCommand::Copy) {
            return;
        }

        if self.overlay.is_some() {
            if let Some(command) = self.keymap.overlay_command(key) {
                self.handle_overlay_command(command);
                return;
            }
        }

        if let Some(command) = self.keymap.command(key) {
            self.handle_command(command);
            return;
        }

        #[cfg(feature = "debug-logs")]
        tracing::debug!("unhandled key event: {key:?}");
    }

    fn flush_pending_backslash(&mut self) {
        if self.pending_backslash {
            self.pending_backslash = false;
            self.insert_text("\\");
        }
    }

    fn handle_command(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::Submit => self.submit(),
            EditorCommand::InsertNewline => {
                self.textarea.insert_newline();
                self.after_mutation();
            }
            EditorCommand::CursorUp => self.cursor_up(),
            EditorCommand::CursorDown => self.cursor_down(),
            EditorCommand::CursorLeft => self.motion(TextArea::move_left),
            EditorCommand::CursorRight => self.motion(TextArea::move_right),
            EditorCommand::CursorLineStart => self.motion(TextArea::move_line_start),
            EditorCommand::CursorLineEnd => self.motion(TextArea::move_line_end),
            EditorCommand::CursorWordLeft => self.motion(TextArea::move_word_left),
            EditorCommand::CursorWordRight => self.motion(TextArea::move_word_right),
            EditorCommand::DeleteBackward => self.mutate(TextArea::delete_backward),
            EditorCommand::DeleteForward => self.mutate(TextArea::delete_forward),
            EditorCommand::DeleteWordBackward => self.mutate(TextArea::delete_word_backward),
            EditorCommand::DeleteToLineStart => self.mutate(TextArea::delete_to_line_start),
            EditorCommand::DeleteToLineEnd => self.mutate(TextArea::delete_to_line_end),
            EditorCommand::PageUp => self.page_motion(-1),
            EditorCommand::PageDown => self.page_motion(1),
            EditorCommand::Tab => self.handle_tab(),
            EditorCommand::Copy => {}
        }
    }

    fn motion(&mut self, op: impl FnOnce(&mut TextArea)) {
        op(&mut self.textarea);
        self.refresh_overlay();
    }

    fn mutate(&mut self, op: impl FnOnce(&mut TextArea) -> bool) {
        if op(&mut self.textarea) {
            self.after_mutation();
        }
    }

    fn page_motion(&mut self, direction: isize) {
        let layout = self.layout();
        let page = self.page_size() as isize;
        self.textarea.move_page(&layout, direction * page);
        self.refresh_overlay();
    }

    fn page_size(&self) -> usize {
        (self.terminal_rows * 3 / 10).max(5)
    }

    fn max_visible_rows(&self) -> usize {
        (self.terminal_rows * 3 / 10).max(5)
    }

    fn layout(&self) -> VisualLayout {
        VisualLayout::build(self.textarea.lines(), self.last_content_width.max(1))
    }

    // ------------------------------------------------------------------
    // History navigation
    // ------------------------------------------------------------------

    fn cursor_up(&mut self) {
        let layout = self.layout();
        let browse = if self.history.is_browsing() {
            self.textarea.on_first_visual_line(&layout)
        } else {
            self.textarea.is_empty()
        };
        if browse {
            if let Some(entry) = self.history.navigate_up().map(str::to_string) {
                self.recall_history_entry(&entry);
            }
            return;
        }
        self.textarea.move_up(&layout);
        self.refresh_overlay();
    }

    fn cursor_down(&mut self) {
        let layout = self.layout();
        if self.history.is_browsing() && self.textarea.on_last_visual_line(&layout) {
            enum Step {
                Entry(String),
                Cleared,
            }
            let step = match self.history.navigate_down() {
                Some(HistoryStep::Entry(entry)) => Some(Step::Entry(entry.to_string())),
                Some(HistoryStep::Cleared) => Some(Step::Cleared),
                None => None,
            };
            match step {
                Some(Step::Entry(entry)) => self.recall_history_entry(&entry),
                Some(Step::Cleared) => {
                    self.textarea.reset();
                    self.overlay = None;
                    self.emit_change();
                }
                None => {}
            }
            return;
        }
        self.textarea.move_down(&layout);
        self.refresh_overlay();
    }

    /// Load a history entry without leaving browsing mode. Popup state is
    /// dropped so nothing steals focus from continued navigation.
    fn recall_history_entry(&mut self, entry: &str) {
        self.textarea.set_text(entry);
        self.overlay = None;
        self.emit_change();
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.textarea.insert_str(text);
        self.after_mutation();
        if self.overlay.is_none() {
            let activates = text
                .chars()
                .next_back()
                .is_some_and(|c| c == '/' || c == '@' || is_word_like(c));
            if activates {
                self.detect_and_activate();
            }
        }
    }

    /// Common policy for every buffer mutation: exit history browsing, fire
    /// the change sink, keep the overlay honest.
    fn after_mutation(&mut self) {
        self.history.reset_navigation();
        self.emit_change();
        self.refresh_overlay();
    }

    fn emit_change(&mut self) {
        let text = self.textarea.text();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&text);
        }
    }

    // ------------------------------------------------------------------
    // Paste ingestion
    // ------------------------------------------------------------------

    fn ingest_paste(&mut self, pasted: &str) {
        let mut text = pastes::normalize(pasted);
        if text.is_empty() {
            return;
        }

        // Pasting a bare path right after a word would glue them together;
        // give it one separating space.
        if text
            .chars()
            .next()
            .is_some_and(|c| matches!(c, '/' | '~' | '.'))
        {
            let (line_idx, col) = self.textarea.cursor();
            let before = &self.textarea.lines()[line_idx][..col];
            if before.chars().next_back().is_some_and(is_word_like) {
                text.insert(0, ' ');
            }
        }

        if pastes::is_large(&text) {
            let marker = self.pastes.store(text);
            self.insert_text(&marker);
        } else {
            self.insert_text(&text);
        }
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    fn submit(&mut self) {
        if self.disable_submit {
            return;
        }
        let joined = self.textarea.text();
        let expanded = self.pastes.expand(&joined);
        let message = expanded.trim().to_string();

        self.textarea.reset();
        self.pastes.clear();
        self.history.reset_navigation();
        self.scroll_offset = 0;
        self.overlay = None;
        self.pending_backslash = false;

        self.emit_change();
        if let Some(callback) = self.on_submit.as_mut() {
            callback(&message);
        }
    }

    // ------------------------------------------------------------------
    // Autocomplete
    // ------------------------------------------------------------------

    fn handle_tab(&mut self) {
        let (line_idx, col) = self.textarea.cursor();
        let line = &self.textarea.lines()[line_idx];
        if line_idx == 0 && slash_prefix(line, col).is_some() {
            // Inside a slash token the overlay path owns Tab completion.
            return;
        }
        let prefix = forced_prefix(line, col).to_string();
        let hinted = match self.provider.as_mut() {
            Some(provider) => {
                provider.should_trigger_file_completion(self.textarea.lines(), (line_idx, col))
            }
            None => return,
        };
        if hinted || !prefix.is_empty() {
            self.try_activate(TriggerKind::ForcedFile, prefix);
        }
    }

    /// Context detection for fresh activation, evaluated against the text
    /// before the cursor. `@`-references win over slash commands so a file
    /// path can be completed inside a command's arguments.
    fn detect_and_activate(&mut self) {
        if self.overlay.is_some() || self.provider.is_none() {
            return;
        }
        let (line_idx, col) = self.textarea.cursor();
        let line = &self.textarea.lines()[line_idx];
        let candidate = at_prefix(line, col)
            .map(|p| (TriggerKind::FileReference, p.to_string()))
            .or_else(|| {
                if line_idx == 0 {
                    slash_prefix(line, col).map(|p| (TriggerKind::SlashCommand, p.to_string()))
                } else {
                    None
                }
            });
        if let Some((kind, prefix)) = candidate {
            self.try_activate(kind, prefix);
        }
    }

    fn try_activate(&mut self, kind: TriggerKind, prefix: String) {
        let Some(provider) = self.provider.as_mut() else {
            return;
        };
        let (cursor_line, cursor_col) = self.textarea.cursor();
        let context = SuggestionContext {
            lines: self.textarea.lines(),
            cursor_line,
            cursor_col,
            kind,
            prefix: &prefix,
        };
        match provider.suggestions(&context) {
            Ok(items) if !items.is_empty() => {
                self.overlay = Some(AutocompleteOverlay {
                    kind,
                    prefix,
                    list: SelectionList::new(items),
                });
            }
            Ok(_) => {}
            Err(err) => {
                tracing::debug!("autocomplete provider error during activation: {err}");
            }
        }
    }

    /// Re-derive the active overlay's context and re-query the provider;
    /// a vanished context, an empty result, or a provider error all
    /// deactivate it.
    fn refresh_overlay(&mut self) {
        let Some(mut overlay) = self.overlay.take() else {
            return;
        };
        let (cursor_line, cursor_col) = self.textarea.cursor();
        let line = &self.textarea.lines()[cursor_line];
        let prefix = match overlay.kind {
            TriggerKind::SlashCommand => {
                if cursor_line == 0 {
                    slash_prefix(line, cursor_col).map(str::to_string)
                } else {
                    None
                }
            }
            TriggerKind::FileReference => at_prefix(line, cursor_col).map(str::to_string),
            TriggerKind::ForcedFile => Some(forced_prefix(line, cursor_col).to_string()),
        };
        let Some(prefix) = prefix else {
            return;
        };
        let Some(provider) = self.provider.as_mut() else {
            return;
        };
        let context = SuggestionContext {
            lines: self.textarea.lines(),
            cursor_line,
            cursor_col,
            kind: overlay.kind,
            prefix: &prefix,
        };
        match provider.suggestions(&context) {
            Ok(items) if !items.is_empty() => {
                overlay.prefix = prefix;
                overlay.list.set_items(items);
                self.overlay = Some(overlay);
            }
            Ok(_) => {}
            Err(err) => {
                tracing::debug!("autocomplete provider error during refresh: {err}");
            }
        }
    }

    fn handle_overlay_command(&mut self, command: OverlayCommand) {
        match command {
            OverlayCommand::SelectUp => {
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.list.move_up();
                }
            }
            OverlayCommand::SelectDown => {
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.list.move_down();
                }
            }
            OverlayCommand::SelectCancel => {
                self.overlay = None;
            }
            OverlayCommand::SelectConfirm => {
                let has_selection = self
                    .overlay
                    .as_ref()
                    .is_some_and(|o| o.list.selected().is_some());
                if !has_selection {
                    // Nothing highlighted: Enter means the typed text.
                    self.overlay = None;
                    self.submit();
                    return;
                }
                let kind = self.overlay.as_ref().map(|o| o.kind);
                if self.apply_selected_completion() {
                    if kind == Some(TriggerKind::SlashCommand) {
                        self.submit();
                    } else {
                        // Keep editing; reopen only if the buffer still
                        // justifies a context.
                        self.detect_and_activate();
                    }
                }
            }
            OverlayCommand::Tab => {
                // Tab completes even before the list has been entered: an
                // unselected list takes its first row.
                if let Some(overlay) = self.overlay.as_mut() {
                    if overlay.list.selected().is_none() {
                        overlay.list.move_down();
                    }
                }
                let _ = self.apply_selected_completion();
            }
        }
    }

    /// Apply the selected completion through the provider. The overlay is
    /// consumed either way; errors are swallowed.
    fn apply_selected_completion(&mut self) -> bool {
        let Some(overlay) = self.overlay.take() else {
            return false;
        };
        let Some(choice) = overlay.list.selected().cloned() else {
            return false;
        };
        let Some(provider) = self.provider.as_mut() else {
            return false;
        };
        let (cursor_line, cursor_col) = self.textarea.cursor();
        let context = SuggestionContext {
            lines: self.textarea.lines(),
            cursor_line,
            cursor_col,
            kind: overlay.kind,
            prefix: &overlay.prefix,
        };
        match provider.apply(&context, &choice) {
            Ok(edit) => {
                self.textarea
                    .set_lines(edit.lines, edit.cursor_line, edit.cursor_col);
                self.history.reset_navigation();
                self.emit_change();
                true
            }
            Err(err) => {
                tracing::debug!("autocomplete provider error during apply: {err}");
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Rows the next `render(width)` call will produce.
    pub fn desired_height(&self, width: usize) -> usize {
        let width = width.max(1);
        let padding = self.padding_x.min(width.saturating_sub(1) / 2);
        let content_width = (width - 2 * padding).max(1);
        let layout = VisualLayout::build(self.textarea.lines(), content_width);
        let content_rows = layout.visual_line_count().min(self.max_visible_rows());
        let overlay_rows = self
            .overlay
            .as_ref()
            .map(|o| o.list.render(content_width).len())
            .unwrap_or(0);
        2 + content_rows + overlay_rows
    }

    /// Render the editor as fully-styled lines of visible width exactly
    /// `width`: top border, visible content rows, bottom border, then the
    /// overlay's rows while it is active.
    pub fn render(&mut self, width: usize) -> Vec<String> {
        let width = width.max(1);
        let padding = self.padding_x.min(width.saturating_sub(1) / 2);
        let content_width = (width - 2 * padding).max(1);
        self.last_content_width = content_width;

        let layout = VisualLayout::build(self.textarea.lines(), content_width);
        let total = layout.visual_line_count();
        let max_visible = self.max_visible_rows();
        let (cursor_line, cursor_col) = self.textarea.cursor();
        let cursor_idx = layout.chunk_index(cursor_line, cursor_col);

        // Keep the cursor's visual line inside the viewport.
        let max_scroll = total.saturating_sub(max_visible);
        let mut scroll = self.scroll_offset.min(max_scroll);
        if cursor_idx < scroll {
            scroll = cursor_idx;
        } else if cursor_idx >= scroll + max_visible {
            scroll = cursor_idx + 1 - max_visible;
        }
        self.scroll_offset = scroll;

        let end = (scroll + max_visible).min(total);
        let mut out = Vec::with_capacity(2 + end - scroll);
        out.push(self.border_line(width, scroll, '↑', self.border_style.top_corners()));
        for idx in scroll..end {
            let chunk = layout.chunks()[idx];
            out.push(self.content_row(chunk, idx == cursor_idx, padding, content_width));
        }
        out.push(self.border_line(width, total - end, '↓', self.border_style.bottom_corners()));

        if let Some(overlay) = &self.overlay {
            let pad = " ".repeat(padding);
            for row in overlay.list.render(content_width) {
                out.push(format!("{pad}{row}{pad}"));
            }
        }
        out
    }

    /// A `─` rule of exactly `width` cells, with a scroll indicator spliced
    /// into the leading cells and corner substitution at both ends.
    fn border_line(
        &self,
        width: usize,
        more: usize,
        arrow: char,
        corners: Option<(char, char)>,
    ) -> String {
        let mut cells: Vec<char> = vec!['─'; width];
        if more > 0 {
            let indicator = format!("─── {arrow} {more} more ");
            for (i, ch) in indicator.chars().take(width).enumerate() {
                cells[i] = ch;
            }
        }
        if width >= 2 {
            if let Some((left, right)) = corners {
                cells[0] = left;
                cells[width - 1] = right;
            }
        }
        cells.into_iter().collect()
    }

    fn content_row(
        &self,
        chunk: LineChunk,
        has_cursor: bool,
        padding: usize,
        content_width: usize,
    ) -> String {
        let line = &self.textarea.lines()[chunk.line];
        let (display, display_width) = truncate_to_width(chunk.display(line), content_width);

        let show_cursor = has_cursor && self.has_focus && self.overlay.is_none();
        let (body, body_width) = if show_cursor {
            let col = self.textarea.cursor().1;
            let offset = col
                .clamp(chunk.start, chunk.display_end)
                .saturating_sub(chunk.start)
                .min(display.len());
            match display[offset..].graphemes(true).next() {
                Some(grapheme) => {
                    let rest = &display[offset + grapheme.len()..];
                    (
                        format!(
                            "{}{CURSOR_MARKER}{}{rest}",
                            &display[..offset],
                            style::reverse_video(grapheme)
                        ),
                        display_width,
                    )
                }
                None if display_width >= content_width => {
                    // No room to append a cursor cell: highlight the last
                    // grapheme instead.
                    let last_start = display
                        .grapheme_indices(true)
                        .last()
                        .map(|(idx, _)| idx)
                        .unwrap_or(0);
                    (
                        format!(
                            "{}{}{CURSOR_MARKER}",
                            &display[..last_start],
                            style::reverse_video(&display[last_start..])
                        ),
                        display_width,
                    )
                }
                None => (
                    format!("{display}{CURSOR_MARKER}{}", style::reverse_video(" ")),
                    display_width + 1,
                ),
            }
        } else {
            (display.to_string(), display_width)
        };

        let pad = " ".repeat(padding);
        let fill = " ".repeat(content_width.saturating_sub(body_width));
        format!("{pad}{body}{fill}{pad}")
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
