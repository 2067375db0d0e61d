//! Modal message box controller for terminal UIs.
//!
//! Invariant: the dialog never draws. It decides size, focus order and transient label state, and
//! tells a [`ModalHost`] what to show, resize, hide and focus.
//!
//! # Public API Overview
//! - Describe a dialog with [`DialogSpec`] and build it with [`MessageView::create`].
//! - Route host key, blur and press events through [`MessageView::handle_event`].
//! - Render from the data-only [`DialogLayout`] returned by [`MessageView::layout`].
//! - Size dialogs ahead of time with [`optimal_size`] and the text metrics helpers.

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod dialog;

/// Dialog model, controller and host seam.
pub use crate::dialog::{
    field_block_height, optimal_size, Align, ButtonCell, ButtonHandler, ChromeBudget, Color,
    Decision, DialogCallbacks, DialogEvent, DialogLayout, DialogSpec, EscapeHandler,
    FieldKeyHandler, FieldSpec, FocusRing, FocusTarget, LabelRestore, LayoutRow, MessageView,
    ModalHost, Padding, RevertState, SetButtonLabelOpts, REGION_PREFIX,
};

/// Errors reported by dialog operations.
pub use crate::error::DialogError;

/// Environment configuration and the optional debug log sink.
pub use crate::config::EnvConfig;
pub use crate::logging::DebugLogger;

/// Keyboard input parsing and focus keybindings.
pub use crate::core::input::{key_ids_equal, parse_key, KeyEventType, KeyId};
pub use crate::core::input_event::{parse_input_events, InputEvent};
pub use crate::core::keybindings::{FocusAction, FocusKeybindings, KeyBinding};

/// Text measurement helpers.
pub use crate::core::text::ansi::strip_ansi;
pub use crate::core::text::metrics::{estimated_line_count, line_length, max_line_length};
pub use crate::core::text::width::visible_width;
