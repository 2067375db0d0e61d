//! Data-only description of a dialog's visual template.
//!
//! The host renderer turns a [`DialogLayout`] into drawn widgets. Rows are stacked top to bottom
//! inside a bordered, padded frame: the message (taking whatever height is left), then each input
//! field with its optional label, then a single button row.

use crate::core::text::width::visible_width;
use crate::dialog::spec::{Align, Color};

const BUTTON_SIDE_PADDING: usize = 2;
const MIN_BUTTON_WIDTH: usize = 10;
const BUTTON_GAP: usize = 1;
pub const PASSWORD_MASK: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Padding {
    pub const fn uniform(value: usize) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonCell {
    /// Stretches to centre the buttons.
    Flex,
    Gap(usize),
    Button {
        index: usize,
        label: String,
        width: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutRow {
    /// Message text; fills the height the fixed rows leave over.
    Text { text: String, align: Align },
    Spacer { height: usize },
    Label { text: String },
    Field {
        index: usize,
        mask: Option<char>,
        value: String,
    },
    Buttons(Vec<ButtonCell>),
}

impl LayoutRow {
    /// Height of a fixed row; `None` for the flexible message row.
    pub fn fixed_height(&self) -> Option<usize> {
        match self {
            LayoutRow::Text { .. } => None,
            LayoutRow::Spacer { height } => Some(*height),
            LayoutRow::Label { .. } | LayoutRow::Field { .. } | LayoutRow::Buttons(_) => Some(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    pub region: String,
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub border: bool,
    pub padding: Padding,
    pub background: Option<Color>,
    pub rows: Vec<LayoutRow>,
}

impl DialogLayout {
    /// Rows taken by everything except the message.
    pub fn fixed_rows(&self) -> usize {
        self.rows.iter().filter_map(LayoutRow::fixed_height).sum()
    }

    pub fn button_row(&self) -> Option<&[ButtonCell]> {
        self.rows.iter().find_map(|row| match row {
            LayoutRow::Buttons(cells) => Some(cells.as_slice()),
            _ => None,
        })
    }
}

/// Columns reserved for a button: two columns each side of the label, at least ten overall.
pub fn button_width(label: &str) -> usize {
    (visible_width(label) + 2 * BUTTON_SIDE_PADDING).max(MIN_BUTTON_WIDTH)
}

/// Centred button row. `widths[i]` is the reserved width of the button labelled `labels[i]`.
pub fn button_row(labels: &[String], widths: &[usize]) -> Vec<ButtonCell> {
    let mut cells = Vec::with_capacity(labels.len() * 2 + 2);
    cells.push(ButtonCell::Flex);
    for (index, (label, width)) in labels.iter().zip(widths).enumerate() {
        if index > 0 {
            cells.push(ButtonCell::Gap(BUTTON_GAP));
        }
        cells.push(ButtonCell::Button {
            index,
            label: label.clone(),
            width: *width,
        });
    }
    cells.push(ButtonCell::Flex);
    cells
}
