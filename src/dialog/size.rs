//! Dialog sizing from message text and the fixed chrome around it.

use crate::core::text::metrics::{estimated_line_count, max_line_length};
use crate::dialog::spec::FieldSpec;

/// Rows and columns the frame needs regardless of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeBudget {
    /// Border plus padding on both sides.
    pub extra_width: usize,
    /// Border, padding and the button row.
    pub base_extra_height: usize,
}

impl Default for ChromeBudget {
    fn default() -> Self {
        Self {
            extra_width: 4,
            base_extra_height: 6,
        }
    }
}

impl ChromeBudget {
    /// Extra rows for a dialog with `fields`, on top of the message.
    pub fn extra_height(&self, fields: &[FieldSpec]) -> usize {
        self.base_extra_height + field_block_height(fields)
    }
}

/// Rows taken by the input fields: one per field, one per label, one gap between fields.
pub fn field_block_height(fields: &[FieldSpec]) -> usize {
    fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let gap = usize::from(idx > 0);
            let label = usize::from(!field.label.is_empty());
            gap + label + 1
        })
        .sum()
}

/// Width and height that fit `text` plus `extra_width`/`extra_height` of chrome.
///
/// Width never exceeds `screen_width`. Height wraps the text at `screen_width - extra_width`; when
/// that leaves no room, the text contributes no rows.
pub fn optimal_size(
    screen_width: usize,
    extra_width: usize,
    extra_height: usize,
    text: &str,
) -> (usize, usize) {
    let width = (max_line_length(text) + extra_width).min(screen_width);
    let wrap_width = screen_width.saturating_sub(extra_width);
    let height = extra_height + estimated_line_count(text, wrap_width);
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::{field_block_height, optimal_size, ChromeBudget};
    use crate::dialog::spec::FieldSpec;
    use proptest::prelude::*;

    #[test]
    fn short_text_on_wide_screen() {
        assert_eq!(optimal_size(80, 4, 6, "hello"), (9, 7));
    }

    #[test]
    fn width_is_capped_by_screen() {
        let text = "x".repeat(100);
        let (width, height) = optimal_size(80, 4, 6, &text);
        assert_eq!(width, 80);
        // 100 columns wrapped at 76.
        assert_eq!(height, 8);
    }

    #[test]
    fn tabs_are_sized_as_single_characters() {
        assert_eq!(optimal_size(80, 4, 6, "\tx"), (6, 7));
        assert_eq!(optimal_size(80, 4, 6, "ok\r\nfine"), (8, 8));
    }

    #[test]
    fn screen_narrower_than_chrome_adds_no_text_rows() {
        assert_eq!(optimal_size(3, 4, 6, "hello"), (3, 6));
        assert_eq!(optimal_size(4, 4, 6, "hello"), (4, 6));
    }

    #[test]
    fn width_uses_untrimmed_text_height_uses_trimmed() {
        let (width, height) = optimal_size(80, 4, 6, "   hi   \n\n");
        assert_eq!(width, 12);
        assert_eq!(height, 7);
    }

    #[test]
    fn field_block_counts_labels_and_gaps() {
        assert_eq!(field_block_height(&[]), 0);
        assert_eq!(field_block_height(&[FieldSpec::new("")]), 1);
        assert_eq!(field_block_height(&[FieldSpec::new("User")]), 2);
        assert_eq!(
            field_block_height(&[FieldSpec::new("User"), FieldSpec::password("Password")]),
            5
        );
        assert_eq!(
            field_block_height(&[FieldSpec::new("User"), FieldSpec::new("")]),
            4
        );
    }

    #[test]
    fn default_chrome_budget() {
        let chrome = ChromeBudget::default();
        assert_eq!(chrome.extra_width, 4);
        assert_eq!(chrome.extra_height(&[]), 6);
        assert_eq!(chrome.extra_height(&[FieldSpec::new("Name")]), 8);
    }

    proptest! {
        #[test]
        fn width_never_exceeds_screen(
            screen in 0usize..200,
            extra in 0usize..10,
            text in "[a-z \n]{0,300}",
        ) {
            let (width, _) = optimal_size(screen, extra, 6, &text);
            prop_assert!(width <= screen);
        }

        #[test]
        fn height_covers_chrome(
            screen in 0usize..200,
            extra_height in 0usize..20,
            text in "[a-z \n]{0,300}",
        ) {
            let (_, height) = optimal_size(screen, 4, extra_height, &text);
            prop_assert!(height >= extra_height);
        }
    }
}
