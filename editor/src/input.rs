//! Raw terminal input decoding.
//!
//! Each call to [`InputDecoder::decode`] consumes one opaque chunk of bytes
//! from the terminal and yields zero or more [`InputEvent`]s. Malformed
//! input is data, not an error: invalid UTF-8, stray `ESC`, incomplete CSI
//! and unknown sequences are consumed silently, and decoding resumes at the
//! next recognizable byte.
//!
//! Bracketed-paste state survives across chunks: a paste started in one
//! chunk keeps accumulating until the end marker arrives, and any bytes
//! after the end marker in the same chunk are re-decoded normally.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

/// One decoded unit of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputEvent {
    /// A named key, possibly with modifiers; resolved through the keymap.
    Key(KeyEvent),
    /// Printable text to insert verbatim.
    Text(String),
    /// A completed bracketed paste.
    Paste(String),
}

const PASTE_BEGIN: &str = "\u{1b}[200~";
const PASTE_END: &str = "\u{1b}[201~";

#[derive(Debug, Default)]
pub(crate) struct InputDecoder {
    /// Accumulates paste content between the bracketed-paste markers.
    paste_buffer: Option<String>,
}

impl InputDecoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn decode(&mut self, bytes: &[u8]) -> Vec<InputEvent> {
        let chunk = sanitize_utf8(bytes);
        let mut events = Vec::new();
        let mut rest = chunk.as_str();

        while !rest.is_empty() || self.paste_buffer.is_some() {
            if let Some(buffer) = &mut self.paste_buffer {
                match rest.find(PASTE_END) {
                    Some(pos) => {
                        buffer.push_str(&rest[..pos]);
                        if let Some(done) = self.paste_buffer.take() {
                            events.push(InputEvent::Paste(done));
                        }
                        rest = &rest[pos + PASTE_END.len()..];
                    }
                    None => {
                        buffer.push_str(rest);
                        return events;
                    }
                }
                continue;
            }
            let Some(first) = rest.chars().next() else {
                break;
            };
            match first {
                '\u{1b}' => {
                    if let Some(after) = rest.strip_prefix(PASTE_BEGIN) {
                        self.paste_buffer = Some(String::new());
                        rest = after;
                        continue;
                    }
                    let (event, consumed) = decode_escape(rest);
                    if let Some(event) = event {
                        events.push(event);
                    }
                    rest = &rest[consumed..];
                }
                '\r' | '\n' => {
                    events.push(key(KeyCode::Enter, KeyModifiers::NONE));
                    rest = &rest[1..];
                }
                '\t' => {
                    events.push(key(KeyCode::Tab, KeyModifiers::NONE));
                    rest = &rest[1..];
                }
                '\u{7f}' | '\u{08}' => {
                    events.push(key(KeyCode::Backspace, KeyModifiers::NONE));
                    rest = &rest[1..];
                }
                c if (c as u32) < 0x20 => {
                    // C0 control chars arrive for Ctrl chords (^A = 0x01 ...).
                    if ('\u{01}'..='\u{1a}').contains(&c) {
                        let letter = char::from(b'a' + (c as u8) - 1);
                        events.push(key(KeyCode::Char(letter), KeyModifiers::CONTROL));
                    } else {
                        tracing::trace!("ignoring control byte {:#x}", c as u32);
                    }
                    rest = &rest[c.len_utf8()..];
                }
                _ => {
                    // Printable fallback: take the maximal printable run.
                    let end = rest
                        .char_indices()
                        .find(|(_, c)| (*c as u32) < 0x20 || *c == '\u{7f}')
                        .map(|(i, _)| i)
                        .unwrap_or(rest.len());
                    events.push(InputEvent::Text(rest[..end].to_string()));
                    rest = &rest[end..];
                }
            }
        }
        events
    }
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, modifiers))
}

/// Decode one escape sequence at the start of `input` (which begins with
/// `ESC`). Returns the event (if the sequence maps to one) and the number of
/// bytes consumed. Unknown sequences are consumed without producing events.
fn decode_escape(input: &str) -> (Option<InputEvent>, usize) {
    let mut chars = input.char_indices().skip(1);
    let Some((second_idx, second)) = chars.next() else {
        // Lone ESC at end of chunk.
        return (Some(key(KeyCode::Esc, KeyModifiers::NONE)), input.len());
    };
    match second {
        '[' => {
            // CSI: parameter bytes up to a final byte in 0x40..=0x7e.
            for (idx, c) in chars {
                if ('\u{40}'..='\u{7e}').contains(&c) {
                    let params = &input[second_idx + 1..idx];
                    let consumed = idx + c.len_utf8();
                    return (decode_csi(params, c), consumed);
                }
            }
            // Incomplete CSI at end of chunk: swallow it.
            tracing::trace!("incomplete CSI sequence dropped: {input:?}");
            (None, input.len())
        }
        ']' | 'P' | 'X' | '^' | '_' => {
            // String sequence (OSC, DCS, ...): terminated by BEL or ST
            // (ESC \). An unterminated one swallows the rest of the chunk.
            let mut prev_was_esc = false;
            for (idx, c) in chars {
                if c == '\u{07}' && second == ']' {
                    return (None, idx + 1);
                }
                if prev_was_esc && c == '\\' {
                    return (None, idx + 1);
                }
                prev_was_esc = c == '\u{1b}';
            }
            (None, input.len())
        }
        'O' => match chars.next() {
            Some((idx, c @ ('A' | 'B' | 'C' | 'D' | 'H' | 'F'))) => {
                (decode_csi("", c), idx + c.len_utf8())
            }
            Some((idx, c)) => (None, idx + c.len_utf8()),
            None => (None, input.len()),
        },
        '\r' => (
            Some(key(KeyCode::Enter, KeyModifiers::ALT)),
            second_idx + 1,
        ),
        '\u{7f}' => (
            Some(key(KeyCode::Backspace, KeyModifiers::ALT)),
            second_idx + 1,
        ),
        '\u{1b}' => {
            // ESC ESC: report the first, leave the second for re-decoding.
            (Some(key(KeyCode::Esc, KeyModifiers::NONE)), second_idx)
        }
        c if (c as u32) >= 0x20 => (
            Some(key(KeyCode::Char(c), KeyModifiers::ALT)),
            second_idx + c.len_utf8(),
        ),
        c => {
            tracing::trace!("ignoring escape sequence ESC {:#x}", c as u32);
            (None, second_idx + c.len_utf8())
        }
    }
}

fn decode_csi(params: &str, final_byte: char) -> Option<InputEvent> {
    match final_byte {
        'A' | 'B' | 'C' | 'D' | 'H' | 'F' => {
            let modifiers = params
                .split(';')
                .nth(1)
                .map(modifiers_from_param)
                .unwrap_or(KeyModifiers::NONE);
            let code = match final_byte {
                'A' => KeyCode::Up,
                'B' => KeyCode::Down,
                'C' => KeyCode::Right,
                'D' => KeyCode::Left,
                'H' => KeyCode::Home,
                _ => KeyCode::End,
            };
            Some(key(code, modifiers))
        }
        'Z' => Some(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
        '~' => {
            let mut fields = params.split(';');
            let number = fields.next().unwrap_or("");
            let modifiers = fields
                .next()
                .map(modifiers_from_param)
                .unwrap_or(KeyModifiers::NONE);
            let code = match number {
                "1" | "7" => KeyCode::Home,
                "4" | "8" => KeyCode::End,
                "3" => KeyCode::Delete,
                "5" => KeyCode::PageUp,
                "6" => KeyCode::PageDown,
                _ => return None,
            };
            Some(key(code, modifiers))
        }
        'u' => decode_csi_u(params),
        _ => {
            tracing::trace!("ignoring CSI sequence with final byte {final_byte:?}");
            None
        }
    }
}

/// Kitty keyboard protocol: `cp (: shifted)? (: base)? (; mod)? (: event)? u`.
///
/// Named control codepoints (Enter/Tab/Esc/Backspace) become key events so
/// the keybinding table can resolve chords like Shift+Enter. For printables,
/// Alt/Ctrl chords are dropped (the host handles shortcuts), a shifted
/// codepoint wins when Shift is down, and codepoints below 32 are dropped.
fn decode_csi_u(params: &str) -> Option<InputEvent> {
    let mut fields = params.split(';');
    let mut key_parts = fields.next()?.split(':');
    let cp: u32 = key_parts.next()?.parse().ok()?;
    let shifted: Option<u32> = key_parts.next().and_then(|s| s.parse().ok());

    let modifiers = fields
        .next()
        .map(modifiers_from_param)
        .unwrap_or(KeyModifiers::NONE);

    let named = match cp {
        13 => Some(KeyCode::Enter),
        9 => Some(KeyCode::Tab),
        27 => Some(KeyCode::Esc),
        127 => Some(KeyCode::Backspace),
        _ => None,
    };
    if let Some(code) = named {
        return Some(key(code, modifiers));
    }

    if modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
        return None;
    }
    let chosen = if modifiers.contains(KeyModifiers::SHIFT) {
        shifted.unwrap_or(cp)
    } else {
        cp
    };
    if chosen < 0x20 {
        return None;
    }
    char::from_u32(chosen).map(|c| InputEvent::Text(c.to_string()))
}

/// CSI modifier parameter: value minus one is a bitfield of
/// shift (1), alt (2), ctrl (4).
fn modifiers_from_param(param: &str) -> KeyModifiers {
    let value: u32 = param
        .split(':')
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    let bits = value.saturating_sub(1);
    let mut modifiers = KeyModifiers::NONE;
    if bits & 1 != 0 {
        modifiers |= KeyModifiers::SHIFT;
    }
    if bits & 2 != 0 {
        modifiers |= KeyModifiers::ALT;
    }
    if bits & 4 != 0 {
        modifiers |= KeyModifiers::CONTROL;
    }
    modifiers
}

/// Decode raw bytes, silently skipping invalid UTF-8 sequences.
fn sanitize_utf8(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(s) => {
                out.push_str(s);
                break;
            }
            Err(err) => {
                let valid = err.valid_up_to();
                if let Ok(prefix) = std::str::from_utf8(&rest[..valid]) {
                    out.push_str(prefix);
                }
                let skip = err.error_len().unwrap_or(rest.len() - valid);
                rest = &rest[valid + skip..];
            }
        }
    }
    out
}
