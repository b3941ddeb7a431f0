//! End-to-end tests driving the editor with raw terminal bytes.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use prompt_editor::AutocompleteError;
use prompt_editor::AutocompleteProvider;
use prompt_editor::BorderStyle;
use prompt_editor::CURSOR_MARKER;
use prompt_editor::CompletionEdit;
use prompt_editor::Editor;
use prompt_editor::EditorConfig;
use prompt_editor::Suggestion;
use prompt_editor::SuggestionContext;
use prompt_editor::strip_ansi;
use prompt_editor::visible_width;

fn plain(row: &str) -> String {
    strip_ansi(row).chars().filter(|c| *c != CURSOR_MARKER).collect()
}

fn bare_editor() -> Editor {
    Editor::with_config(EditorConfig {
        padding_x: 0,
        border_style: BorderStyle::None,
    })
}

#[test]
fn basic_wrap_at_width_ten() {
    let mut editor = bare_editor();
    editor.handle_input(b"the quick brown fox");
    assert_eq!(editor.lines(), ["the quick brown fox".to_string()]);

    let rows = editor.render(10);
    assert_eq!(plain(&rows[1]), "the quick ");
    assert_eq!(plain(&rows[2]), "brown fox ");

    // The cursor sits on the second chunk at visual column 9.
    let stripped = strip_ansi(&rows[2]);
    let marker_col = stripped.chars().position(|c| c == CURSOR_MARKER);
    assert_eq!(marker_col, Some(9));
}

#[test]
fn grapheme_backspace_removes_the_family_emoji() {
    let mut editor = Editor::new();
    editor.handle_input("👨‍👩‍👧".as_bytes());
    assert_eq!(editor.cursor(), (0, "👨‍👩‍👧".len()));
    editor.handle_input(b"\x7f");
    assert!(editor.is_empty());
    assert_eq!(editor.cursor(), (0, 0));
}

#[test]
fn large_paste_collapses_to_a_marker_and_submits_the_original() {
    let submitted: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut editor = Editor::new();
    let sink = submitted.clone();
    editor.on_submit(move |text| sink.borrow_mut().push(text.to_string()));

    let original: Vec<String> = (1..=12).map(|i| format!("row number {i}")).collect();
    let payload = original.join("\n");
    let mut bytes = b"\x1b[200~".to_vec();
    bytes.extend_from_slice(payload.as_bytes());
    bytes.extend_from_slice(b"\x1b[201~");
    editor.handle_input(&bytes);

    assert_eq!(editor.text(), "[paste #1 +12 lines]");
    editor.handle_input(b"\r");
    assert_eq!(*submitted.borrow(), vec![payload]);
    assert!(editor.is_empty());
}

struct CommandProvider {
    commands: Vec<&'static str>,
}

impl AutocompleteProvider for CommandProvider {
    fn suggestions(
        &mut self,
        context: &SuggestionContext<'_>,
    ) -> Result<Vec<Suggestion>, AutocompleteError> {
        Ok(self
            .commands
            .iter()
            .filter(|c| c.starts_with(context.prefix))
            .map(|c| Suggestion::new(*c))
            .collect())
    }

    fn apply(
        &mut self,
        context: &SuggestionContext<'_>,
        choice: &Suggestion,
    ) -> Result<CompletionEdit, AutocompleteError> {
        let mut lines: Vec<String> = context.lines.to_vec();
        let line = &mut lines[context.cursor_line];
        let start = context.cursor_col - context.prefix.len();
        line.replace_range(start..context.cursor_col, &choice.value);
        Ok(CompletionEdit {
            cursor_col: start + choice.value.len(),
            cursor_line: context.cursor_line,
            lines,
        })
    }
}

#[test]
fn slash_command_completion_applies_then_submits() {
    let submitted: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut editor = Editor::new();
    let sink = submitted.clone();
    editor.on_submit(move |text| sink.borrow_mut().push(text.to_string()));
    editor.set_autocomplete_provider(CommandProvider {
        commands: vec!["/help", "/hello"],
    });

    editor.handle_input(b"/he");
    assert!(editor.is_showing_autocomplete());

    // Down enters the list on its first row; Enter applies and submits.
    editor.handle_input(b"\x1b[B");
    editor.handle_input(b"\r");
    assert_eq!(*submitted.borrow(), vec!["/help".to_string()]);
    assert!(!editor.is_showing_autocomplete());
    assert!(editor.is_empty());
}

#[test]
fn csi_u_shifted_codepoint_inserts_uppercase() {
    let mut editor = Editor::new();
    editor.handle_input(b"\x1b[97:65;2u");
    assert_eq!(editor.text(), "A");
}

#[test]
fn history_recall_steps_through_submissions() {
    let mut editor = Editor::new();
    editor.handle_input(b"first\r");
    editor.add_to_history("first");
    editor.handle_input(b"second\r");
    editor.add_to_history("second");
    assert!(editor.is_empty());

    editor.handle_input(b"\x1b[A");
    assert_eq!(editor.text(), "second");
    editor.handle_input(b"\x1b[A");
    assert_eq!(editor.text(), "first");
    editor.handle_input(b"\x1b[B");
    assert_eq!(editor.text(), "second");
    editor.handle_input(b"\x1b[B");
    assert!(editor.is_empty());
}

#[test]
fn every_render_row_is_exactly_the_requested_width() {
    let mut editor = Editor::new();
    editor.handle_input("mixed width 内容 with emoji 🦀 and a veryveryverylongtoken".as_bytes());
    for width in 1..=40 {
        for row in editor.render(width) {
            assert_eq!(visible_width(&row), width, "row {row:?} at width {width}");
        }
    }
}

#[test]
fn set_text_round_trips_with_normalized_newlines() {
    let mut editor = Editor::new();
    editor.set_text("one\r\ntwo\rthree");
    assert_eq!(editor.text(), "one\ntwo\nthree");
}

#[test]
fn paste_ingestion_then_submit_is_the_trimmed_normalized_text() {
    let submitted: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut editor = Editor::new();
    let sink = submitted.clone();
    editor.on_submit(move |text| sink.borrow_mut().push(text.to_string()));

    editor.handle_input(b"\x1b[200~  padded\ttext \x1b[201~");
    editor.handle_input(b"\r");
    assert_eq!(*submitted.borrow(), vec!["padded    text".to_string()]);
}

#[test]
fn change_sink_fires_once_per_mutating_event_in_order() {
    let changes: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut editor = Editor::new();
    let sink = changes.clone();
    editor.on_change(move |text| sink.borrow_mut().push(text.to_string()));

    editor.handle_input(b"a");
    editor.handle_input(b"\x1b[D");
    editor.handle_input(b"b");
    editor.handle_input(b"\x7f");
    assert_eq!(
        *changes.borrow(),
        vec!["a".to_string(), "ba".to_string(), "a".to_string()]
    );
}

#[test]
fn cursor_marker_appears_at_most_once_per_frame() {
    let mut editor = Editor::new();
    editor.handle_input(b"some\x1b[13;2ulines\x1b[13;2uhere");
    for width in [5usize, 12, 30] {
        let rows = editor.render(width);
        let markers: usize = rows
            .iter()
            .map(|r| r.chars().filter(|c| *c == CURSOR_MARKER).count())
            .sum();
        assert_eq!(markers, 1, "width {width}");
    }

    editor.set_focus(false);
    let rows = editor.render(20);
    let markers: usize = rows
        .iter()
        .map(|r| r.chars().filter(|c| *c == CURSOR_MARKER).count())
        .sum();
    assert_eq!(markers, 0);
}

#[test]
fn unknown_escape_sequences_are_ignored_silently() {
    let mut editor = Editor::new();
    editor.handle_input(b"\x1b[999Z\x1b]0;title\x07ok");
    assert_eq!(editor.text(), "ok");
}
