//! Message box: sizing, focus traversal, label reverts and the controller tying them together.

pub mod controller;
pub mod focus;
pub mod host;
pub mod layout;
pub mod revert;
pub mod size;
pub mod spec;

pub use controller::{Decision, DialogEvent, MessageView, SetButtonLabelOpts, REGION_PREFIX};
pub use focus::{FocusRing, FocusTarget};
pub use host::{ButtonHandler, DialogCallbacks, EscapeHandler, FieldKeyHandler, ModalHost};
pub use layout::{ButtonCell, DialogLayout, LayoutRow, Padding};
pub use revert::{LabelRestore, RevertState};
pub use size::{field_block_height, optimal_size, ChromeBudget};
pub use spec::{Align, Color, DialogSpec, FieldSpec};
