//! Text helpers (ANSI recognition, width calculations, dialog text metrics).
//!
//! These helpers are pure (string in, number or string out) and live under `core` so the dialog
//! modules can depend on them without touching host rendering.

pub mod ansi;
pub mod metrics;
pub mod width;
