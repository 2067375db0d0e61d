//! Dialog errors.

use thiserror::Error;

use crate::dialog::focus::FocusTarget;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    /// A button index past the end of the button list.
    #[error("button index {index} out of range (dialog has {len} buttons)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Input fields were declared without a field key handler to receive their keystrokes.
    #[error("dialog has input fields but no field key handler")]
    MissingFieldCallback,

    /// An event or query named an element the dialog doesn't have.
    #[error("dialog has no {0}")]
    UnknownTarget(FocusTarget),
}
