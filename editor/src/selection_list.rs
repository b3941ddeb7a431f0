//! Generic selection list used by the autocomplete overlay.
//!
//! The list is a peer sub-widget with a minimal contract: move the
//! selection, report it, render to fixed-width rows. Selection wraps at both
//! ends and the viewport follows it.

use crate::autocomplete::Suggestion;
use crate::style;
use crate::style::truncate_to_width;

/// Upper bound on visible suggestion rows.
pub(crate) const MAX_POPUP_ROWS: usize = 8;

/// Selection cursor plus scroll window, kept separate from the row data so
/// the same state logic serves any list shape.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ScrollState {
    pub(crate) selected_idx: Option<usize>,
    pub(crate) scroll_top: usize,
}

impl ScrollState {
    /// Keep the selection valid for a list of `len` rows. `None` stays
    /// `None`: the list opens unselected and the first Down enters it.
    pub(crate) fn clamp_selection(&mut self, len: usize) {
        self.selected_idx = match self.selected_idx {
            Some(_) if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }

    pub(crate) fn move_up_wrap(&mut self, len: usize) {
        if len == 0 {
            self.selected_idx = None;
            return;
        }
        self.selected_idx = Some(match self.selected_idx {
            Some(0) | None => len - 1,
            Some(idx) => idx - 1,
        });
    }

    pub(crate) fn move_down_wrap(&mut self, len: usize) {
        if len == 0 {
            self.selected_idx = None;
            return;
        }
        self.selected_idx = Some(match self.selected_idx {
            None => 0,
            Some(idx) if idx + 1 >= len => 0,
            Some(idx) => idx + 1,
        });
    }

    pub(crate) fn ensure_visible(&mut self, len: usize, visible: usize) {
        if len == 0 || visible == 0 {
            self.scroll_top = 0;
            return;
        }
        let max_top = len.saturating_sub(visible);
        self.scroll_top = self.scroll_top.min(max_top);
        if let Some(selected) = self.selected_idx {
            if selected < self.scroll_top {
                self.scroll_top = selected;
            } else if selected >= self.scroll_top + visible {
                self.scroll_top = selected + 1 - visible;
            }
        }
    }
}

pub(crate) struct SelectionList {
    items: Vec<Suggestion>,
    state: ScrollState,
}

impl SelectionList {
    pub(crate) fn new(items: Vec<Suggestion>) -> Self {
        Self {
            items,
            state: ScrollState::default(),
        }
    }

    pub(crate) fn set_items(&mut self, items: Vec<Suggestion>) {
        self.items = items;
        self.state.clamp_selection(self.items.len());
        self.state
            .ensure_visible(self.items.len(), MAX_POPUP_ROWS.min(self.items.len()));
    }

    pub(crate) fn move_up(&mut self) {
        let len = self.items.len();
        self.state.move_up_wrap(len);
        self.state.ensure_visible(len, MAX_POPUP_ROWS.min(len));
    }

    pub(crate) fn move_down(&mut self) {
        let len = self.items.len();
        self.state.move_down_wrap(len);
        self.state.ensure_visible(len, MAX_POPUP_ROWS.min(len));
    }

    pub(crate) fn selected(&self) -> Option<&Suggestion> {
        self.state.selected_idx.and_then(|idx| self.items.get(idx))
    }

    /// Render the visible window as rows exactly `width` columns wide.
    pub(crate) fn render(&self, width: usize) -> Vec<String> {
        let visible = MAX_POPUP_ROWS.min(self.items.len());
        let start = self.state.scroll_top.min(self.items.len().saturating_sub(visible));
        let mut rows = Vec::with_capacity(visible);
        for (offset, item) in self.items.iter().skip(start).take(visible).enumerate() {
            let idx = start + offset;
            let is_selected = self.state.selected_idx == Some(idx);
            let prefix = if is_selected { "› " } else { "  " };

            let label = format!("{prefix}{}", item.value);
            let (label, mut used) = truncate_to_width(&label, width);
            let mut row = String::from(label);
            if let Some(description) = &item.description {
                if used + 2 < width {
                    let (shown, desc_width) = truncate_to_width(description, width - used - 2);
                    if desc_width > 0 {
                        row.push_str("  ");
                        row.push_str(&style::dim(shown));
                        used += 2 + desc_width;
                    }
                }
            }
            row.push_str(&" ".repeat(width - used));
            if is_selected {
                row = style::reverse_video(&row);
            }
            rows.push(row);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn items(names: &[&str]) -> Vec<Suggestion> {
        names
            .iter()
            .map(|n| Suggestion {
                value: (*n).to_string(),
                description: None,
            })
            .collect()
    }

    #[test]
    fn list_opens_unselected_and_down_enters_at_the_top() {
        let mut list = SelectionList::new(items(&["a", "b", "c"]));
        assert!(list.selected().is_none());
        list.move_down();
        assert_eq!(list.selected().map(|s| s.value.as_str()), Some("a"));
        list.move_up();
        assert_eq!(list.selected().map(|s| s.value.as_str()), Some("c"));
        list.move_down();
        assert_eq!(list.selected().map(|s| s.value.as_str()), Some("a"));
    }

    #[test]
    fn viewport_follows_the_selection() {
        let names: Vec<String> = (0..12).map(|i| format!("item{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut list = SelectionList::new(items(&refs));
        for _ in 0..10 {
            list.move_down();
        }
        let rows = list.render(20);
        assert_eq!(rows.len(), MAX_POPUP_ROWS);
        assert!(rows.iter().any(|r| style::strip_ansi(r).contains("item9")));
        assert!(!rows.iter().any(|r| style::strip_ansi(r).contains("item0 ")));
    }

    #[test]
    fn rows_are_exactly_the_requested_width() {
        let mut list = SelectionList::new(items(&["short", "a-much-longer-entry-name"]));
        list.set_items(vec![
            Suggestion {
                value: "short".to_string(),
                description: Some("with a description".to_string()),
            },
            Suggestion {
                value: "a-much-longer-entry-name".to_string(),
                description: None,
            },
        ]);
        for row in list.render(14) {
            assert_eq!(style::visible_width(&row), 14, "row: {row:?}");
        }
    }

    #[test]
    fn empty_list_has_no_selection_and_no_rows() {
        let list = SelectionList::new(Vec::new());
        assert!(list.selected().is_none());
        assert!(list.render(10).is_empty());
    }
}
