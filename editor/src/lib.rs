//! A multi-line text editor widget for terminal prompts.
//!
//! This crate implements the interactive input line of a terminal UI: a
//! Unicode-correct, word-wrapping, history-aware editor that consumes raw
//! terminal bytes and renders itself as a block of ANSI-styled strings of an
//! exact width. It has no opinion about what surrounds it — the host owns
//! the terminal, pumps input chunks into [`Editor::handle_input`], calls
//! [`Editor::render`] each frame, and receives the finished prompt through
//! the submit sink.
//!
//! Everything is synchronous: one decode call per key event, one render call
//! per frame, no timers, no tasks. The only cancellable interaction is the
//! autocomplete overlay.
//!
//! ```no_run
//! use prompt_editor::Editor;
//!
//! let mut editor = Editor::new();
//! editor.on_submit(|text| println!("submitted: {text}"));
//! editor.handle_input(b"hello");
//! for line in editor.render(80) {
//!     println!("{line}");
//! }
//! ```

mod autocomplete;
mod editor;
mod history;
mod input;
mod keymap;
mod layout;
mod pastes;
mod selection_list;
mod style;
mod textarea;

pub use autocomplete::AutocompleteError;
pub use autocomplete::AutocompleteProvider;
pub use autocomplete::CompletionEdit;
pub use autocomplete::Suggestion;
pub use autocomplete::SuggestionContext;
pub use autocomplete::TriggerKind;
pub use editor::Editor;
pub use editor::EditorConfig;
pub use keymap::EditorCommand;
pub use keymap::Keymap;
pub use keymap::OverlayCommand;
pub use style::BorderStyle;
pub use style::CURSOR_MARKER;
pub use style::strip_ansi;
pub use style::visible_width;
