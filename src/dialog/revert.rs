//! Pending "restore this button's label on blur" request.
//!
//! Used for labels like "Copy" that briefly read "Copied" until the user moves on. At most one
//! request is pending; arming a new one drops the previous one without applying it, and a blur on
//! any button applies the stored request to the button it was armed for.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RevertState {
    #[default]
    Idle,
    PendingRevert {
        button: usize,
        previous_label: String,
    },
}

/// Label write produced by a blur transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRestore {
    pub button: usize,
    pub label: String,
}

impl RevertState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RevertState::PendingRevert { .. })
    }

    /// State after relabelling `button` whose label was `current_label`.
    ///
    /// Without `revert_on_blur` the state is unchanged, even if it refers to the same button.
    pub fn on_set_label(self, button: usize, current_label: &str, revert_on_blur: bool) -> Self {
        if revert_on_blur {
            RevertState::PendingRevert {
                button,
                previous_label: current_label.to_string(),
            }
        } else {
            self
        }
    }

    /// State after a button lost focus, plus the label to restore if a revert was pending.
    ///
    /// The restore targets the button the revert was armed for, whichever button blurred.
    pub fn on_blur(self, _blurred: usize) -> (Self, Option<LabelRestore>) {
        match self {
            RevertState::Idle => (RevertState::Idle, None),
            RevertState::PendingRevert {
                button,
                previous_label,
            } => (
                RevertState::Idle,
                Some(LabelRestore {
                    button,
                    label: previous_label,
                }),
            ),
        }
    }
}
