//! ANSI escape recognition for measuring and stripping formatted dialog text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiCodeKind {
    Csi,
    Osc,
    Apc,
    Dcs,
    Ss3,
}

/// A recognized escape sequence starting at some byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiCode {
    pub length: usize,
    pub kind: AnsiCodeKind,
}

/// Recognizes the escape sequence starting at byte `pos`, if any.
///
/// Unterminated sequences are not recognized; their bytes are treated as text.
pub fn extract_ansi_code(input: &str, pos: usize) -> Option<AnsiCode> {
    let bytes = input.as_bytes();
    if bytes.get(pos) != Some(&0x1b) {
        return None;
    }

    let kind = match bytes.get(pos + 1)? {
        b'[' => AnsiCodeKind::Csi,
        b']' => AnsiCodeKind::Osc,
        b'_' => AnsiCodeKind::Apc,
        b'P' => AnsiCodeKind::Dcs,
        b'O' => AnsiCodeKind::Ss3,
        _ => return None,
    };

    let end = match kind {
        AnsiCodeKind::Csi => csi_end(bytes, pos + 2)?,
        AnsiCodeKind::Ss3 => {
            if pos + 2 >= bytes.len() {
                return None;
            }
            pos + 3
        }
        AnsiCodeKind::Osc | AnsiCodeKind::Apc | AnsiCodeKind::Dcs => {
            string_terminator_end(bytes, pos + 2)?
        }
    };

    // SS3 may swallow a multi-byte char; never split one.
    if !input.is_char_boundary(end) {
        return None;
    }

    Some(AnsiCode {
        length: end - pos,
        kind,
    })
}

fn csi_end(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|b| (0x40..=0x7e).contains(b))
        .map(|offset| from + offset + 1)
}

fn string_terminator_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut idx = from;
    while idx < bytes.len() {
        match bytes[idx] {
            0x07 => return Some(idx + 1),
            0x1b if bytes.get(idx + 1) == Some(&b'\\') => return Some(idx + 2),
            _ => idx += 1,
        }
    }
    None
}

/// Removes every recognized escape sequence, leaving only the visible text.
pub fn strip_ansi(input: &str) -> String {
    if !input.contains('\x1b') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut idx = 0;
    while idx < input.len() {
        if let Some(code) = extract_ansi_code(input, idx) {
            idx += code.length;
            continue;
        }
        let Some(ch) = input[idx..].chars().next() else {
            break;
        };
        out.push(ch);
        idx += ch.len_utf8();
    }
    out
}
