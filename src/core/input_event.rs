//! Structured input events delivered to dialog elements.

use crate::core::input::{parse_key, parse_key_event_type, parse_text, KeyEventType};

/// Input event delivered to a focusable dialog element.
///
/// Notes:
/// - `raw` is the exact byte sequence received from the terminal (UTF-8 decoded) when applicable.
/// - `key_id` is a normalized identifier for matching keybindings.
/// - Text and paste events carry decoded text so field handlers don't have to parse escape sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key {
        raw: String,
        key_id: String,
        event_type: KeyEventType,
    },
    Text {
        raw: String,
        text: String,
        event_type: KeyEventType,
    },
    Paste {
        raw: String,
        text: String,
    },
    Resize {
        columns: u16,
        rows: u16,
    },
    UnknownRaw {
        raw: String,
    },
}

impl InputEvent {
    /// A key press that did not come from raw terminal bytes (host adapters, tests).
    pub fn key(key_id: impl Into<String>) -> Self {
        InputEvent::Key {
            raw: String::new(),
            key_id: key_id.into(),
            event_type: KeyEventType::Press,
        }
    }

    /// Typed text that did not come from raw terminal bytes.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        InputEvent::Text {
            raw: text.clone(),
            text,
            event_type: KeyEventType::Press,
        }
    }

    pub fn key_id(&self) -> Option<&str> {
        match self {
            InputEvent::Key { key_id, .. } => Some(key_id),
            _ => None,
        }
    }

    pub fn is_release(&self) -> bool {
        matches!(
            self,
            InputEvent::Key {
                event_type: KeyEventType::Release,
                ..
            } | InputEvent::Text {
                event_type: KeyEventType::Release,
                ..
            }
        )
    }
}

pub fn parse_input_events(data: &str) -> Vec<InputEvent> {
    if data.is_empty() {
        return Vec::new();
    }

    const PASTE_START: &str = "\x1b[200~";
    const PASTE_END: &str = "\x1b[201~";

    fn parse_non_paste(data: &str) -> Vec<InputEvent> {
        if data.is_empty() {
            return Vec::new();
        }

        let event_type = parse_key_event_type(data);

        if let Some(text) = parse_text(data) {
            if event_type == KeyEventType::Release {
                return Vec::new();
            }
            return vec![InputEvent::Text {
                raw: data.to_string(),
                text,
                event_type,
            }];
        }

        if let Some(key_id) = parse_key(data) {
            return vec![InputEvent::Key {
                raw: data.to_string(),
                key_id,
                event_type,
            }];
        }

        vec![InputEvent::UnknownRaw {
            raw: data.to_string(),
        }]
    }

    let mut events = Vec::new();
    let mut remaining = data;
    loop {
        let Some(start) = remaining.find(PASTE_START) else {
            events.extend(parse_non_paste(remaining));
            break;
        };

        events.extend(parse_non_paste(&remaining[..start]));

        let after_start = &remaining[start + PASTE_START.len()..];
        let Some(end_rel) = after_start.find(PASTE_END) else {
            events.push(InputEvent::UnknownRaw {
                raw: remaining.to_string(),
            });
            break;
        };

        let raw_end = start + PASTE_START.len() + end_rel + PASTE_END.len();
        events.push(InputEvent::Paste {
            raw: remaining[start..raw_end].to_string(),
            text: after_start[..end_rel].to_string(),
        });

        remaining = &after_start[end_rel + PASTE_END.len()..];
        if remaining.is_empty() {
            break;
        }
    }

    events
}
