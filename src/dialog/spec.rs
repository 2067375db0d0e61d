//! Dialog description supplied by the caller.

use crate::core::keybindings::FocusKeybindings;

/// Horizontal alignment of the body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Background colour hint passed through to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Indexed(u8),
    Rgb(u8, u8, u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSpec {
    /// Shown on its own row above the field; empty means no label row.
    pub label: String,
    pub is_password: bool,
}

impl FieldSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_password: false,
        }
    }

    pub fn password(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_password: true,
        }
    }
}

/// Everything needed to build a [`MessageView`](crate::MessageView).
#[derive(Debug, Clone, Default)]
pub struct DialogSpec {
    /// Distinguishes this dialog's modal region from other dialogs shown at the same time.
    pub message_id: String,
    pub title: String,
    pub message: String,
    pub fields: Vec<FieldSpec>,
    pub buttons: Vec<String>,
    pub align: Align,
    /// 0 means "compute from the message".
    pub width: usize,
    /// 0 means "compute from the message".
    pub height: usize,
    pub background: Option<Color>,
    /// Leave focus where it is when the dialog is shown or hidden.
    pub no_focus: bool,
    pub focus_keys: FocusKeybindings,
}

impl DialogSpec {
    pub fn new(message_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn buttons<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buttons.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn no_focus(mut self, no_focus: bool) -> Self {
        self.no_focus = no_focus;
        self
    }

    pub fn focus_keys(mut self, focus_keys: FocusKeybindings) -> Self {
        self.focus_keys = focus_keys;
        self
    }
}
