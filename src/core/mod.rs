//! Core helpers shared by the dialog modules: text measurement and key input.

pub mod input;
pub mod input_event;
pub mod keybindings;
pub mod text;
