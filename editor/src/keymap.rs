//! Named editor commands and the shared keybinding table.
//!
//! Decoded keys resolve through a [`Keymap`] rather than hard-coded match
//! arms so hosts can rebind chords. The table has two layers: the editing
//! layer, and an overlay layer consulted first while the autocomplete
//! overlay is visible.

use std::collections::HashMap;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

/// Editing-layer commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    Submit,
    InsertNewline,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorLineStart,
    CursorLineEnd,
    CursorWordLeft,
    CursorWordRight,
    DeleteBackward,
    DeleteForward,
    DeleteWordBackward,
    DeleteToLineStart,
    DeleteToLineEnd,
    PageUp,
    PageDown,
    Tab,
    /// Recognized and deliberately left to the host; the editor does not
    /// consume any state on it.
    Copy,
}

/// Overlay-layer commands, captured while the suggestion list is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayCommand {
    SelectUp,
    SelectDown,
    SelectConfirm,
    SelectCancel,
    /// Apply the current selection and dismiss the overlay.
    Tab,
}

type KeyPattern = (KeyCode, KeyModifiers);

pub struct Keymap {
    editing: HashMap<KeyPattern, EditorCommand>,
    overlay: HashMap<KeyPattern, OverlayCommand>,
}

impl Default for Keymap {
    fn default() -> Self {
        use EditorCommand::*;
        use KeyCode::*;
        use KeyModifiers as M;

        let mut map = Self {
            editing: HashMap::new(),
            overlay: HashMap::new(),
        };

        let editing: &[(KeyCode, KeyModifiers, EditorCommand)] = &[
            (Enter, M::NONE, Submit),
            (Enter, M::SHIFT, InsertNewline),
            (Enter, M::ALT, InsertNewline),
            (Char('j'), M::CONTROL, InsertNewline),
            (Up, M::NONE, CursorUp),
            (Char('p'), M::CONTROL, CursorUp),
            (Down, M::NONE, CursorDown),
            (Char('n'), M::CONTROL, CursorDown),
            (Left, M::NONE, CursorLeft),
            (Char('b'), M::CONTROL, CursorLeft),
            (Right, M::NONE, CursorRight),
            (Char('f'), M::CONTROL, CursorRight),
            (Home, M::NONE, CursorLineStart),
            (Char('a'), M::CONTROL, CursorLineStart),
            (End, M::NONE, CursorLineEnd),
            (Char('e'), M::CONTROL, CursorLineEnd),
            (Left, M::ALT, CursorWordLeft),
            (Left, M::CONTROL, CursorWordLeft),
            (Char('b'), M::ALT, CursorWordLeft),
            (Right, M::ALT, CursorWordRight),
            (Right, M::CONTROL, CursorWordRight),
            (Char('f'), M::ALT, CursorWordRight),
            (Backspace, M::NONE, DeleteBackward),
            (Char('h'), M::CONTROL, DeleteBackward),
            (Delete, M::NONE, DeleteForward),
            (Char('d'), M::CONTROL, DeleteForward),
            (Backspace, M::ALT, DeleteWordBackward),
            (Char('w'), M::CONTROL, DeleteWordBackward),
            (Char('u'), M::CONTROL, DeleteToLineStart),
            (Char('k'), M::CONTROL, DeleteToLineEnd),
            (KeyCode::PageUp, M::NONE, EditorCommand::PageUp),
            (KeyCode::PageDown, M::NONE, EditorCommand::PageDown),
            (KeyCode::Tab, M::NONE, EditorCommand::Tab),
            (Char('c'), M::CONTROL, Copy),
        ];
        for (code, modifiers, command) in editing {
            map.bind(*code, *modifiers, *command);
        }

        let overlay: &[(KeyCode, KeyModifiers, OverlayCommand)] = &[
            (Up, M::NONE, OverlayCommand::SelectUp),
            (Char('p'), M::CONTROL, OverlayCommand::SelectUp),
            (Down, M::NONE, OverlayCommand::SelectDown),
            (Char('n'), M::CONTROL, OverlayCommand::SelectDown),
            (Enter, M::NONE, OverlayCommand::SelectConfirm),
            (Esc, M::NONE, OverlayCommand::SelectCancel),
            (KeyCode::Tab, M::NONE, OverlayCommand::Tab),
        ];
        for (code, modifiers, command) in overlay {
            map.bind_overlay(*code, *modifiers, *command);
        }

        map
    }
}

impl Keymap {
    /// Bind an editing-layer chord, replacing any existing binding.
    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, command: EditorCommand) {
        self.editing.insert((code, modifiers), command);
    }

    /// Bind an overlay-layer chord, replacing any existing binding.
    pub fn bind_overlay(&mut self, code: KeyCode, modifiers: KeyModifiers, command: OverlayCommand) {
        self.overlay.insert((code, modifiers), command);
    }

    pub(crate) fn command(&self, event: KeyEvent) -> Option<EditorCommand> {
        self.editing.get(&(event.code, event.modifiers)).copied()
    }

    pub(crate) fn overlay_command(&self, event: KeyEvent) -> Option<OverlayCommand> {
        self.overlay.get(&(event.code, event.modifiers)).copied()
    }
}
