//! Key parsing for the keys a dialog reacts to.
//!
//! Raw terminal input is normalized into key ids such as `"tab"`, `"shift+tab"`, `"escape"`,
//! `"ctrl+c"` or `"alt+left"`. Modifiers are emitted in `shift`, `ctrl`, `alt` order. Both legacy
//! xterm sequences and kitty CSI-u sequences are understood.

pub type KeyId = String;

const MOD_SHIFT: u8 = 1;
const MOD_ALT: u8 = 2;
const MOD_CTRL: u8 = 4;
const LOCK_MASK: u8 = 64 + 128;

const CODEPOINT_TAB: u32 = 9;
const CODEPOINT_ENTER: u32 = 13;
const CODEPOINT_ESCAPE: u32 = 27;
const CODEPOINT_SPACE: u32 = 32;
const CODEPOINT_BACKSPACE: u32 = 127;
const CODEPOINT_KP_ENTER: u32 = 57414;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventType {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Named keys reachable through kitty `CSI <n> ~` and `CSI 1;<mod> <final>` forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Named {
    Codepoint(u32),
    Up,
    Down,
    Right,
    Left,
    Home,
    End,
    Insert,
    Delete,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy)]
struct CsiKey {
    key: Named,
    base_layout_key: Option<u32>,
    modifier: u8,
    event_type: KeyEventType,
}

/// Returns the normalized key id for one raw key sequence.
pub fn parse_key(data: &str) -> Option<KeyId> {
    if let Some(csi) = parse_csi_key(data) {
        return csi_key_id(&csi);
    }

    if let Some(key_id) = legacy_key_id(data) {
        return Some(key_id.to_string());
    }

    let bytes = data.as_bytes();
    match bytes {
        [code @ 1..=26] => Some(format!("ctrl+{}", (code + 96) as char)),
        [0x1b, code @ 1..=26] => Some(format!("ctrl+alt+{}", (code + 96) as char)),
        [0x1b, code @ b'a'..=b'z'] => Some(format!("alt+{}", *code as char)),
        [code @ 33..=126] => Some((*code as char).to_string()),
        _ => None,
    }
}

/// Key event type encoded in a kitty sequence; legacy input is always a press.
pub fn parse_key_event_type(data: &str) -> KeyEventType {
    parse_csi_key(data)
        .map(|csi| csi.event_type)
        .unwrap_or_default()
}

/// Decodes printable text, including kitty-encoded characters without ctrl/alt.
pub fn parse_text(data: &str) -> Option<String> {
    if data.is_empty() {
        return None;
    }

    if let Some(csi) = parse_csi_key(data) {
        let modifier = csi.modifier & !LOCK_MASK;
        if modifier & (MOD_CTRL | MOD_ALT) != 0 {
            return None;
        }
        let Named::Codepoint(codepoint) = csi.key else {
            return None;
        };
        if codepoint < CODEPOINT_SPACE || codepoint == CODEPOINT_BACKSPACE {
            return None;
        }
        let ch = char::from_u32(codepoint)?;
        let ch = if modifier & MOD_SHIFT != 0 {
            ch.to_uppercase().next().unwrap_or(ch)
        } else {
            ch
        };
        return Some(ch.to_string());
    }

    if data.chars().any(|ch| ch.is_control()) {
        return None;
    }
    Some(data.to_string())
}

/// Compares two key ids ignoring case, modifier order and `esc`/`return` aliases.
pub fn key_ids_equal(left: &str, right: &str) -> bool {
    match (canonical_key_id(left), canonical_key_id(right)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

fn canonical_key_id(key_id: &str) -> Option<(u8, String)> {
    let lowered = key_id.to_lowercase();
    // A trailing "+" is the plus key itself, as in "ctrl++".
    let (mods, key) = match lowered.strip_suffix("++") {
        Some(rest) => (rest, "+"),
        None => match lowered.rsplit_once('+') {
            Some((mods, key)) => (mods, key),
            None => ("", lowered.as_str()),
        },
    };
    if key.is_empty() {
        return None;
    }

    let mut modifier = 0;
    for part in mods.split('+').filter(|part| !part.is_empty()) {
        modifier |= match part {
            "shift" => MOD_SHIFT,
            "alt" | "meta" | "option" => MOD_ALT,
            "ctrl" | "control" => MOD_CTRL,
            _ => return None,
        };
    }

    let key = match key {
        "esc" => "escape",
        "return" => "enter",
        other => other,
    };
    Some((modifier, key.to_string()))
}

fn csi_key_id(csi: &CsiKey) -> Option<KeyId> {
    let key_name = match csi.key {
        Named::Up => "up".to_string(),
        Named::Down => "down".to_string(),
        Named::Right => "right".to_string(),
        Named::Left => "left".to_string(),
        Named::Home => "home".to_string(),
        Named::End => "end".to_string(),
        Named::Insert => "insert".to_string(),
        Named::Delete => "delete".to_string(),
        Named::PageUp => "pageUp".to_string(),
        Named::PageDown => "pageDown".to_string(),
        Named::Codepoint(codepoint) => codepoint_key_name(effective_codepoint(csi, codepoint))?,
    };

    let modifier = csi.modifier & !LOCK_MASK;
    let mut parts: Vec<&str> = Vec::new();
    if modifier & MOD_SHIFT != 0 {
        parts.push("shift");
    }
    if modifier & MOD_CTRL != 0 {
        parts.push("ctrl");
    }
    if modifier & MOD_ALT != 0 {
        parts.push("alt");
    }
    parts.push(&key_name);
    Some(parts.join("+"))
}

// Non-latin layouts report the pressed key through the base layout field.
fn effective_codepoint(csi: &CsiKey, codepoint: u32) -> u32 {
    let ascii_key = codepoint <= 127
        && char::from_u32(codepoint).is_some_and(|ch| ch.is_ascii_lowercase() || is_symbol_key(ch));
    if ascii_key {
        codepoint
    } else {
        csi.base_layout_key.unwrap_or(codepoint)
    }
}

fn codepoint_key_name(codepoint: u32) -> Option<String> {
    let name = match codepoint {
        CODEPOINT_ESCAPE => "escape".to_string(),
        CODEPOINT_TAB => "tab".to_string(),
        CODEPOINT_ENTER | CODEPOINT_KP_ENTER => "enter".to_string(),
        CODEPOINT_SPACE => "space".to_string(),
        CODEPOINT_BACKSPACE => "backspace".to_string(),
        cp => {
            let ch = char::from_u32(cp)?;
            if ch.is_ascii_lowercase() || is_symbol_key(ch) {
                ch.to_string()
            } else {
                return None;
            }
        }
    };
    Some(name)
}

fn is_symbol_key(ch: char) -> bool {
    matches!(
        ch,
        '`' | '-' | '=' | '[' | ']' | '\\' | ';' | '\'' | ',' | '.' | '/' | '!' | '@' | '#'
            | '$' | '%' | '^' | '&' | '*' | '(' | ')' | '_' | '+' | '|' | '~' | '{' | '}'
            | ':' | '<' | '>' | '?'
    )
}

fn parse_event_type(event_type: Option<&str>) -> KeyEventType {
    match event_type.and_then(|value| value.parse::<u8>().ok()) {
        Some(2) => KeyEventType::Repeat,
        Some(3) => KeyEventType::Release,
        _ => KeyEventType::Press,
    }
}

// "<mod>[:<event>]" with the wire modifier offset by one.
fn parse_modifier_part(mod_part: Option<&str>) -> (u8, KeyEventType) {
    let Some(mod_part) = mod_part else {
        return (0, KeyEventType::Press);
    };
    let (mod_value, event_value) = match mod_part.split_once(':') {
        Some((left, right)) => (left, Some(right)),
        None => (mod_part, None),
    };
    let mod_value = mod_value.parse::<u8>().unwrap_or(1);
    (mod_value.saturating_sub(1), parse_event_type(event_value))
}

fn parse_csi_key(data: &str) -> Option<CsiKey> {
    let body = data.strip_prefix("\x1b[")?;

    if let Some(body) = body.strip_suffix('u') {
        let (code_part, mod_part) = match body.split_once(';') {
            Some((left, right)) => (left, Some(right)),
            None => (body, None),
        };
        let mut codes = code_part.split(':');
        let codepoint = codes.next()?.parse::<u32>().ok()?;
        let _shifted = codes.next();
        let base_layout_key = codes.next().and_then(|value| value.parse().ok());
        if codes.next().is_some() {
            return None;
        }
        let (modifier, event_type) = parse_modifier_part(mod_part);
        return Some(CsiKey {
            key: Named::Codepoint(codepoint),
            base_layout_key,
            modifier,
            event_type,
        });
    }

    if let Some(body) = body.strip_suffix('~') {
        let (num_part, mod_part) = match body.split_once(';') {
            Some((left, right)) => (left, Some(right)),
            None => (body, None),
        };
        // Plain "CSI n ~" forms are resolved by the legacy table.
        mod_part?;
        let key = match num_part.parse::<u32>().ok()? {
            2 => Named::Insert,
            3 => Named::Delete,
            5 => Named::PageUp,
            6 => Named::PageDown,
            7 => Named::Home,
            8 => Named::End,
            _ => return None,
        };
        let (modifier, event_type) = parse_modifier_part(mod_part);
        return Some(CsiKey {
            key,
            base_layout_key: None,
            modifier,
            event_type,
        });
    }

    let rest = body.strip_prefix("1;")?;
    let final_char = rest.chars().last()?;
    let key = match final_char {
        'A' => Named::Up,
        'B' => Named::Down,
        'C' => Named::Right,
        'D' => Named::Left,
        'H' => Named::Home,
        'F' => Named::End,
        _ => return None,
    };
    let mod_part = &rest[..rest.len() - 1];
    if mod_part.is_empty() {
        return None;
    }
    let (modifier, event_type) = parse_modifier_part(Some(mod_part));
    Some(CsiKey {
        key,
        base_layout_key: None,
        modifier,
        event_type,
    })
}

fn legacy_key_id(data: &str) -> Option<&'static str> {
    let key_id = match data {
        "\x1b" => "escape",
        "\t" => "tab",
        "\x1b[Z" => "shift+tab",
        "\r" | "\n" | "\x1bOM" => "enter",
        "\x1b\r" => "alt+enter",
        " " => "space",
        "\x00" => "ctrl+space",
        "\x1b " => "alt+space",
        "\x7f" | "\x08" => "backspace",
        "\x1b\x7f" | "\x1b\x08" => "alt+backspace",
        "\x1b[A" | "\x1bOA" => "up",
        "\x1b[B" | "\x1bOB" => "down",
        "\x1b[C" | "\x1bOC" => "right",
        "\x1b[D" | "\x1bOD" => "left",
        "\x1b[H" | "\x1bOH" | "\x1b[1~" | "\x1b[7~" => "home",
        "\x1b[F" | "\x1bOF" | "\x1b[4~" | "\x1b[8~" => "end",
        "\x1b[2~" => "insert",
        "\x1b[3~" => "delete",
        "\x1b[5~" | "\x1b[[5~" => "pageUp",
        "\x1b[6~" | "\x1b[[6~" => "pageDown",
        "\x1b[a" => "shift+up",
        "\x1b[b" => "shift+down",
        "\x1b[c" => "shift+right",
        "\x1b[d" => "shift+left",
        "\x1bOa" => "ctrl+up",
        "\x1bOb" => "ctrl+down",
        "\x1bOc" => "ctrl+right",
        "\x1bOd" => "ctrl+left",
        "\x1bb" | "\x1bB" => "alt+left",
        "\x1bf" | "\x1bF" => "alt+right",
        "\x1c" => "ctrl+\\",
        "\x1d" => "ctrl+]",
        "\x1f" => "ctrl+-",
        "\x1bOP" | "\x1b[11~" => "f1",
        "\x1bOQ" | "\x1b[12~" => "f2",
        "\x1bOR" | "\x1b[13~" => "f3",
        "\x1bOS" | "\x1b[14~" => "f4",
        _ => return None,
    };
    Some(key_id)
}
