//! Large-paste bookkeeping.
//!
//! Pastes above either threshold are kept out of line: the buffer gets a
//! literal marker (`[paste #3 +12 lines]` / `[paste #3 450 chars]`) and the
//! normalized payload is stored here until the next submit or reset. On
//! submit the buffer text is scanned for markers and each one is replaced by
//! its stored payload; markers whose id is unknown stay literal.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex_lite::Regex;

/// Pastes with more lines than this are replaced by a marker.
const LARGE_PASTE_LINE_THRESHOLD: usize = 10;
/// Pastes with more bytes than this are replaced by a marker.
const LARGE_PASTE_BYTE_THRESHOLD: usize = 1000;

lazy_static! {
    static ref PASTE_MARKER_REGEX: Regex =
        Regex::new(r"\[paste #(\d+) (?:\+\d+ lines|\d+ chars)\]")
            .unwrap_or_else(|_| std::process::abort());
}

/// Normalize pasted text: line endings to `\n`, tabs to four spaces, and
/// every other non-printable character dropped.
pub(crate) fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', "    ")
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// True when `text` should be stored out of line behind a marker.
pub(crate) fn is_large(text: &str) -> bool {
    line_count(text) > LARGE_PASTE_LINE_THRESHOLD || text.len() > LARGE_PASTE_BYTE_THRESHOLD
}

#[derive(Debug, Default)]
pub(crate) struct PasteTable {
    entries: HashMap<usize, String>,
    next_id: usize,
}

impl PasteTable {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 1,
        }
    }

    /// Store `text` and return the marker to splice into the buffer.
    ///
    /// The marker names lines when the line threshold fired, chars
    /// otherwise; which one fired is user-visible and deliberate.
    pub(crate) fn store(&mut self, text: String) -> String {
        let id = self.next_id;
        self.next_id += 1;
        let marker = if line_count(&text) > LARGE_PASTE_LINE_THRESHOLD {
            format!("[paste #{id} +{} lines]", line_count(&text))
        } else {
            format!("[paste #{id} {} chars]", text.chars().count())
        };
        self.entries.insert(id, text);
        marker
    }

    /// Replace every known marker in `text` with its stored payload.
    /// Best-effort: markers with unknown ids are left in place.
    pub(crate) fn expand(&self, text: &str) -> String {
        PASTE_MARKER_REGEX
            .replace_all(text, |caps: &regex_lite::Captures<'_>| {
                caps.get(1)
                    .and_then(|m| m.as_str().parse::<usize>().ok())
                    .and_then(|id| self.entries.get(&id))
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Drop all payloads and restart the id counter.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.next_id = 1;
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
