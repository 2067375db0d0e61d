#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use message_view::{DialogLayout, FocusTarget, ModalHost};

pub fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read fixture {name}: {err}"))
}

/// Tab-separated rows of `name`, skipping blanks and `#` comments, with their 1-based line numbers.
pub fn fixture_rows(name: &str) -> Vec<(usize, Vec<String>)> {
    read_fixture(name)
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            Some((idx + 1, line.split('\t').map(unescape).collect()))
        })
        .collect()
}

/// Expands `\n`, `\r`, `\t`, `\\` and `\xHH` escapes.
pub fn unescape(input: &str) -> String {
    let mut out = String::new();
    let mut iter = input.chars();

    while let Some(ch) = iter.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match iter.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('x') => {
                let hex: String = iter.by_ref().take(2).collect();
                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => out.push(byte as char),
                    Err(_) => {
                        out.push_str("\\x");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

/// Parses `f0`/`b1` style focus target names used by fixtures.
pub fn parse_target(name: &str) -> FocusTarget {
    let (kind, index) = name.split_at(1);
    let index: usize = index
        .parse()
        .unwrap_or_else(|err| panic!("bad target {name}: {err}"));
    match kind {
        "f" => FocusTarget::Field(index),
        "b" => FocusTarget::Button(index),
        other => panic!("bad target kind {other} in {name}"),
    }
}

/// Host call recorded by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Show {
        region: String,
        width: usize,
        height: usize,
        take_focus: bool,
    },
    Hide {
        region: String,
        restore_focus: bool,
    },
    Resize {
        region: String,
        width: usize,
        height: usize,
    },
    Focus(FocusTarget),
}

/// Modal host that records every call and tracks the focused element.
#[derive(Debug)]
pub struct RecordingHost {
    pub screen_width: usize,
    pub calls: Vec<HostCall>,
    pub focused: Option<FocusTarget>,
    pub last_layout: Option<DialogLayout>,
}

impl RecordingHost {
    pub fn new(screen_width: usize) -> Self {
        Self {
            screen_width,
            calls: Vec::new(),
            focused: None,
            last_layout: None,
        }
    }

    pub fn focus_calls(&self) -> Vec<FocusTarget> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Focus(target) => Some(*target),
                _ => None,
            })
            .collect()
    }

    pub fn resize_calls(&self) -> Vec<(usize, usize)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Resize { width, height, .. } => Some((*width, *height)),
                _ => None,
            })
            .collect()
    }
}

impl ModalHost for RecordingHost {
    fn screen_width(&self) -> usize {
        self.screen_width
    }

    fn show_modal(&mut self, layout: &DialogLayout, take_focus: bool) {
        self.calls.push(HostCall::Show {
            region: layout.region.clone(),
            width: layout.width,
            height: layout.height,
            take_focus,
        });
        self.last_layout = Some(layout.clone());
    }

    fn hide_modal(&mut self, region: &str, restore_focus: bool) {
        self.calls.push(HostCall::Hide {
            region: region.to_string(),
            restore_focus,
        });
    }

    fn resize_modal(&mut self, region: &str, width: usize, height: usize) {
        self.calls.push(HostCall::Resize {
            region: region.to_string(),
            width,
            height,
        });
    }

    fn set_focus(&mut self, target: FocusTarget) {
        self.calls.push(HostCall::Focus(target));
        self.focused = Some(target);
    }
}
