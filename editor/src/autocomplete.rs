//! Autocomplete provider contract and trigger-context detection.
//!
//! Whether the overlay may be visible is strictly a function of the buffer
//! content around the cursor. The editor re-derives the context after every
//! change; providers are pure lookups plus an `apply` that returns the new
//! buffer outright.

use thiserror::Error;

use crate::selection_list::SelectionList;

/// What put the overlay on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerKind {
    /// Leading `/` on the first line, cursor inside the command token.
    SlashCommand,
    /// An `@token` under the cursor.
    FileReference,
    /// Tab pressed outside a slash context.
    ForcedFile,
}

/// One completion candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// Text the completion stands for; what `apply` typically inserts.
    pub value: String,
    /// Optional short description rendered dimmed after the value.
    pub description: Option<String>,
}

impl Suggestion {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }
}

/// Snapshot handed to the provider on every query.
#[derive(Debug)]
pub struct SuggestionContext<'a> {
    pub lines: &'a [String],
    pub cursor_line: usize,
    pub cursor_col: usize,
    pub kind: TriggerKind,
    /// The captured trigger text, e.g. `/he`, `@src/ma`, or the word before
    /// the cursor for forced completion.
    pub prefix: &'a str,
}

/// Replacement buffer produced by applying a completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionEdit {
    pub lines: Vec<String>,
    pub cursor_line: usize,
    pub cursor_col: usize,
}

/// Provider failures are swallowed by the editor and deactivate the overlay.
#[derive(Debug, Error)]
#[error("autocomplete provider failed: {0}")]
pub struct AutocompleteError(pub String);

pub trait AutocompleteProvider {
    /// Candidates for the given context. An empty vec means "nothing to
    /// show" and deactivates the overlay.
    fn suggestions(
        &mut self,
        context: &SuggestionContext<'_>,
    ) -> Result<Vec<Suggestion>, AutocompleteError>;

    /// Apply `choice`, returning the replacement buffer and cursor.
    fn apply(
        &mut self,
        context: &SuggestionContext<'_>,
        choice: &Suggestion,
    ) -> Result<CompletionEdit, AutocompleteError>;

    /// Optional hint that Tab should open file completion even without a
    /// word before the cursor.
    fn should_trigger_file_completion(&mut self, _lines: &[String], _cursor: (usize, usize)) -> bool {
        false
    }
}

/// Live overlay state: the captured context plus the selection list.
pub(crate) struct AutocompleteOverlay {
    pub(crate) kind: TriggerKind,
    pub(crate) prefix: String,
    pub(crate) list: SelectionList,
}

/// Characters that extend a slash-command or `@`-reference token.
pub(crate) fn is_word_like(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Slash-command prefix ending at `col`, if the cursor sits inside the
/// command token. The token is the leading `/name` of the line; once a space
/// has been typed the context is over (a lone `/` still counts).
pub(crate) fn slash_prefix(line: &str, col: usize) -> Option<&str> {
    let indent = line.len() - line.trim_start().len();
    let after_indent = &line[indent..];
    if !after_indent.starts_with('/') {
        return None;
    }
    if col <= indent {
        return None;
    }
    let token_end = after_indent
        .find(char::is_whitespace)
        .map(|idx| indent + idx)
        .unwrap_or(line.len());
    if col > token_end {
        return None;
    }
    Some(&line[indent..col])
}

/// `@`-reference prefix ending at `col`, if any.
///
/// Two deliberate branches, kept separate: an `@` at the very start of the
/// line is accepted by position alone; an `@` further in requires the
/// character before it to be whitespace. In both cases no whitespace may sit
/// between the `@` and the cursor.
pub(crate) fn at_prefix(line: &str, col: usize) -> Option<&str> {
    let before = &line[..col];
    let at = before.rfind('@')?;
    if before[at + 1..].contains(char::is_whitespace) {
        return None;
    }
    if at == 0 {
        return Some(&before[at..]);
    }
    let prev = line[..at].chars().next_back()?;
    if prev.is_whitespace() {
        Some(&before[at..])
    } else {
        None
    }
}

/// The non-whitespace run immediately before `col`; the query for forced
/// file completion.
pub(crate) fn forced_prefix(line: &str, col: usize) -> &str {
    let before = &line[..col];
    let start = before
        .char_indices()
        .rfind(|(_, c)| c.is_whitespace())
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0);
    &before[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slash_prefix_tracks_the_command_token() {
        assert_eq!(slash_prefix("/", 1), Some("/"));
        assert_eq!(slash_prefix("/he", 3), Some("/he"));
        assert_eq!(slash_prefix("/help now", 3), Some("/he"));
        // Past the token (a space has been typed) the context is over.
        assert_eq!(slash_prefix("/help now", 6), None);
        assert_eq!(slash_prefix("hi /he", 6), None);
        assert_eq!(slash_prefix("/he", 0), None);
    }

    #[test]
    fn at_prefix_line_start_branch() {
        assert_eq!(at_prefix("@src", 4), Some("@src"));
        assert_eq!(at_prefix("@", 1), Some("@"));
    }

    #[test]
    fn at_prefix_requires_whitespace_before_mid_line_at() {
        assert_eq!(at_prefix("see @src/m", 10), Some("@src/m"));
        assert_eq!(at_prefix("user@host", 9), None);
    }

    #[test]
    fn at_prefix_ends_at_whitespace() {
        assert_eq!(at_prefix("@src done", 9), None);
    }

    #[test]
    fn forced_prefix_is_the_word_before_the_cursor() {
        assert_eq!(forced_prefix("open src/ma", 11), "src/ma");
        assert_eq!(forced_prefix("open ", 5), "");
        assert_eq!(forced_prefix("", 0), "");
    }
}
