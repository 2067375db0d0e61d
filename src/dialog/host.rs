//! Seams to the host UI runtime: the modal container it owns and the caller's handlers.

use crate::core::input_event::InputEvent;
use crate::dialog::focus::FocusTarget;
use crate::dialog::layout::DialogLayout;

/// Display container and focus owner provided by the host runtime.
///
/// The host pulls [`MessageView::layout`](crate::MessageView::layout) whenever it repaints; the
/// dialog only calls back for region lifecycle and focus changes.
pub trait ModalHost {
    /// Current screen width in columns.
    fn screen_width(&self) -> usize;

    /// Displays `layout.region` at `layout.width` x `layout.height`.
    fn show_modal(&mut self, layout: &DialogLayout, take_focus: bool);

    fn hide_modal(&mut self, region: &str, restore_focus: bool);

    fn resize_modal(&mut self, region: &str, width: usize, height: usize);

    fn set_focus(&mut self, target: FocusTarget);
}

/// Receives every key on an input field except focus keys: `(label, index, value, event)`.
///
/// Returning `Some` lets the host's default field handling run with that (possibly rewritten)
/// event; `None` consumes it.
pub type FieldKeyHandler = Box<dyn FnMut(&str, usize, &str, InputEvent) -> Option<InputEvent>>;

/// Called when a button is activated: `(label, index)`, with the label the button was built with.
pub type ButtonHandler = Box<dyn FnMut(&str, usize)>;

pub type EscapeHandler = Box<dyn FnMut()>;

#[derive(Default)]
pub struct DialogCallbacks {
    pub(crate) on_escape: Option<EscapeHandler>,
    pub(crate) on_field_key: Option<FieldKeyHandler>,
    pub(crate) on_button_pressed: Option<ButtonHandler>,
}

impl DialogCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_escape(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_escape = Some(Box::new(handler));
        self
    }

    pub fn on_field_key(
        mut self,
        handler: impl FnMut(&str, usize, &str, InputEvent) -> Option<InputEvent> + 'static,
    ) -> Self {
        self.on_field_key = Some(Box::new(handler));
        self
    }

    pub fn on_button_pressed(mut self, handler: impl FnMut(&str, usize) + 'static) -> Self {
        self.on_button_pressed = Some(Box::new(handler));
        self
    }
}

impl std::fmt::Debug for DialogCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogCallbacks")
            .field("on_escape", &self.on_escape.is_some())
            .field("on_field_key", &self.on_field_key.is_some())
            .field("on_button_pressed", &self.on_button_pressed.is_some())
            .finish()
    }
}
