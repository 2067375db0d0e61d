//! Message box controller.
//!
//! [`MessageView`] owns the sizing, focus-ring and label-revert state of one dialog. The host
//! runtime delivers key, blur and press events through [`MessageView::handle_event`] and draws
//! whatever [`MessageView::layout`] describes.

use std::mem;

use tracing::{debug, info, warn};

use crate::core::input::key_ids_equal;
use crate::core::input_event::InputEvent;
use crate::core::keybindings::{FocusAction, FocusKeybindings};
use crate::core::text::ansi::strip_ansi;
use crate::dialog::focus::{FocusRing, FocusTarget};
use crate::dialog::host::{DialogCallbacks, ModalHost};
use crate::dialog::layout::{
    button_row, button_width, DialogLayout, LayoutRow, Padding, PASSWORD_MASK,
};
use crate::dialog::revert::RevertState;
use crate::dialog::size::{optimal_size, ChromeBudget};
use crate::dialog::spec::{Align, Color, DialogSpec, FieldSpec};
use crate::error::DialogError;
use crate::logging::LOG_TARGET;

pub const REGION_PREFIX: &str = "message_view:";

/// Event delivered by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// Key or text received by the focused element.
    Input {
        target: FocusTarget,
        event: InputEvent,
    },
    /// `target` lost focus.
    Blur { target: FocusTarget },
    /// The host activated a button (e.g. Enter on a focused button).
    Pressed { button: usize },
}

/// What the host should do with an input event after the dialog saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Consumed,
    /// Run the host's default handling with this event.
    Forward(InputEvent),
}

impl Decision {
    pub fn is_consumed(&self) -> bool {
        matches!(self, Decision::Consumed)
    }
}

/// Options for [`MessageView::set_button_label`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetButtonLabelOpts {
    /// Restore the current label once a button loses focus.
    pub revert_on_blur: bool,
}

#[derive(Debug)]
struct FieldState {
    spec: FieldSpec,
    value: String,
}

#[derive(Debug)]
struct ButtonState {
    /// Label at construction; reported to the press handler and used for the reserved width.
    original_label: String,
    label: String,
    width: usize,
}

#[derive(Debug)]
pub struct MessageView {
    region: String,
    title: String,
    text: String,
    align: Align,
    background: Option<Color>,
    no_focus: bool,
    focus_keys: FocusKeybindings,
    chrome: ChromeBudget,
    /// Chrome rows for this dialog's field set.
    extra_height: usize,
    fields: Vec<FieldState>,
    buttons: Vec<ButtonState>,
    ring: FocusRing,
    revert: RevertState,
    cur_width: usize,
    cur_height: usize,
    shown: bool,
    callbacks: DialogCallbacks,
}

impl MessageView {
    /// Builds a dialog sized for `screen_width`, unless `spec` fixes a dimension.
    pub fn create(
        spec: DialogSpec,
        callbacks: DialogCallbacks,
        screen_width: usize,
    ) -> Result<Self, DialogError> {
        if !spec.fields.is_empty() && callbacks.on_field_key.is_none() {
            return Err(DialogError::MissingFieldCallback);
        }

        let chrome = ChromeBudget::default();
        let extra_height = chrome.extra_height(&spec.fields);
        let (optimal_width, optimal_height) =
            optimal_size(screen_width, chrome.extra_width, extra_height, &spec.message);
        let width = if spec.width == 0 {
            optimal_width
        } else {
            spec.width
        };
        let height = if spec.height == 0 {
            optimal_height
        } else {
            spec.height
        };

        let ring = FocusRing::for_dialog(spec.fields.len(), spec.buttons.len());
        let fields = spec
            .fields
            .into_iter()
            .map(|spec| FieldState {
                spec,
                value: String::new(),
            })
            .collect();
        let buttons = spec
            .buttons
            .into_iter()
            .map(|label| ButtonState {
                width: button_width(&label),
                original_label: label.clone(),
                label,
            })
            .collect();

        let region = format!("{REGION_PREFIX}{}", spec.message_id);
        info!(target: LOG_TARGET, %region, width, height, focusables = ring.len(), "dialog created");

        Ok(Self {
            region,
            title: spec.title,
            text: spec.message.trim().to_string(),
            align: spec.align,
            background: spec.background,
            no_focus: spec.no_focus,
            focus_keys: spec.focus_keys,
            chrome,
            extra_height,
            fields,
            buttons,
            ring,
            revert: RevertState::Idle,
            cur_width: width,
            cur_height: height,
            shown: false,
            callbacks,
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Committed `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.cur_width, self.cur_height)
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn focus_ring(&self) -> &FocusRing {
        &self.ring
    }

    pub fn revert_state(&self) -> &RevertState {
        &self.revert
    }

    /// First field, else first button, else nothing (the message itself).
    pub fn initial_focus(&self) -> Option<FocusTarget> {
        self.ring.first()
    }

    pub fn show(&mut self, host: &mut dyn ModalHost) {
        if self.shown {
            debug!(target: LOG_TARGET, region = %self.region, "show ignored: already shown");
            return;
        }

        let take_focus = !self.no_focus;
        host.show_modal(&self.layout(), take_focus);
        self.shown = true;
        info!(
            target: LOG_TARGET,
            region = %self.region,
            width = self.cur_width,
            height = self.cur_height,
            "dialog shown"
        );

        if take_focus {
            if let Some(target) = self.initial_focus() {
                host.set_focus(target);
            }
        }
    }

    /// Removes the dialog from the host and drops it with all of its state.
    pub fn hide(mut self, host: &mut dyn ModalHost) {
        if self.shown {
            host.hide_modal(&self.region, !self.no_focus);
            self.shown = false;
            info!(target: LOG_TARGET, region = %self.region, "dialog hidden");
        }
    }

    /// Replaces the message. With `resize_if_needed`, grows (never shrinks) the committed size to
    /// fit the new text and asks the host to resize a shown dialog.
    pub fn set_text(&mut self, host: &mut dyn ModalHost, text: &str, resize_if_needed: bool) {
        self.text = text.trim().to_string();
        if !resize_if_needed {
            return;
        }

        let (optimal_width, optimal_height) = self.optimal_size(host.screen_width(), text);
        let mut grown = false;
        if self.cur_width < optimal_width {
            self.cur_width = optimal_width;
            grown = true;
        }
        if self.cur_height < optimal_height {
            self.cur_height = optimal_height;
            grown = true;
        }
        if !grown {
            return;
        }

        debug!(
            target: LOG_TARGET,
            region = %self.region,
            width = self.cur_width,
            height = self.cur_height,
            "dialog grown"
        );
        if self.shown {
            host.resize_modal(&self.region, self.cur_width, self.cur_height);
        }
    }

    /// Message as displayed (trimmed).
    ///
    /// Styling is carried as ANSI escape sequences; `strip_formatting` removes them and leaves any
    /// other text, bracketed words included, as written.
    pub fn get_text(&self, strip_formatting: bool) -> String {
        if strip_formatting {
            strip_ansi(&self.text)
        } else {
            self.text.clone()
        }
    }

    pub fn button_label(&self, index: usize) -> Option<&str> {
        self.buttons.get(index).map(|button| button.label.as_str())
    }

    pub fn set_button_label(
        &mut self,
        index: usize,
        label: impl Into<String>,
        opts: SetButtonLabelOpts,
    ) -> Result<(), DialogError> {
        let len = self.buttons.len();
        let button = self
            .buttons
            .get_mut(index)
            .ok_or(DialogError::IndexOutOfRange { index, len })?;

        let state = mem::take(&mut self.revert);
        if opts.revert_on_blur {
            if let RevertState::PendingRevert {
                button: dropped,
                previous_label,
            } = &state
            {
                debug!(
                    target: LOG_TARGET,
                    dropped_button = dropped,
                    dropped_label = %previous_label,
                    "pending label revert replaced"
                );
            }
            debug!(
                target: LOG_TARGET,
                button = index,
                previous_label = %button.label,
                "label revert armed"
            );
        }
        self.revert = state.on_set_label(index, &button.label, opts.revert_on_blur);
        button.label = label.into();
        Ok(())
    }

    pub fn field_value(&self, index: usize) -> Result<&str, DialogError> {
        self.fields
            .get(index)
            .map(|field| field.value.as_str())
            .ok_or(DialogError::UnknownTarget(FocusTarget::Field(index)))
    }

    /// Mirrors the host field widget's current text so key handlers see it.
    pub fn set_field_value(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), DialogError> {
        let field = self
            .fields
            .get_mut(index)
            .ok_or(DialogError::UnknownTarget(FocusTarget::Field(index)))?;
        field.value = value.into();
        Ok(())
    }

    /// Runs one host event through the dialog.
    ///
    /// Input goes through the escape hook (not consuming), then the focus keys (consuming), then,
    /// on fields, the field key handler. Blur and press events are always consumed.
    pub fn handle_event(
        &mut self,
        host: &mut dyn ModalHost,
        event: DialogEvent,
    ) -> Result<Decision, DialogError> {
        match event {
            DialogEvent::Input { target, event } => self.handle_input(host, target, event),
            DialogEvent::Blur { target } => {
                self.ensure_target(target)?;
                if let FocusTarget::Button(blurred) = target {
                    self.handle_button_blur(blurred);
                }
                Ok(Decision::Consumed)
            }
            DialogEvent::Pressed { button } => {
                self.ensure_target(FocusTarget::Button(button))?;
                if let Some(handler) = self.callbacks.on_button_pressed.as_mut() {
                    handler(&self.buttons[button].original_label, button);
                }
                Ok(Decision::Consumed)
            }
        }
    }

    pub fn layout(&self) -> DialogLayout {
        let mut rows = Vec::with_capacity(self.fields.len() * 3 + 2);
        rows.push(LayoutRow::Text {
            text: self.text.clone(),
            align: self.align,
        });

        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                rows.push(LayoutRow::Spacer { height: 1 });
            }
            if !field.spec.label.is_empty() {
                rows.push(LayoutRow::Label {
                    text: field.spec.label.clone(),
                });
            }
            rows.push(LayoutRow::Field {
                index,
                mask: field.spec.is_password.then_some(PASSWORD_MASK),
                value: field.value.clone(),
            });
        }

        let labels: Vec<String> = self.buttons.iter().map(|b| b.label.clone()).collect();
        let widths: Vec<usize> = self.buttons.iter().map(|b| b.width).collect();
        rows.push(LayoutRow::Buttons(button_row(&labels, &widths)));

        DialogLayout {
            region: self.region.clone(),
            title: self.title.clone(),
            width: self.cur_width,
            height: self.cur_height,
            border: true,
            padding: Padding::uniform(1),
            background: self.background,
            rows,
        }
    }

    fn handle_input(
        &mut self,
        host: &mut dyn ModalHost,
        target: FocusTarget,
        event: InputEvent,
    ) -> Result<Decision, DialogError> {
        self.ensure_target(target)?;

        let is_escape = !event.is_release()
            && event
                .key_id()
                .is_some_and(|key_id| key_ids_equal(key_id, "escape"));
        if is_escape {
            if let Some(handler) = self.callbacks.on_escape.as_mut() {
                handler();
            }
        }

        if let Some(action) = self.focus_keys.action_for(&event) {
            let next = match action {
                FocusAction::Next => self.ring.next_of(target),
                FocusAction::Previous => self.ring.prev_of(target),
            };
            if let Some(next) = next {
                debug!(target: LOG_TARGET, from = %target, to = %next, "focus moved");
                host.set_focus(next);
            }
            return Ok(Decision::Consumed);
        }

        let FocusTarget::Field(index) = target else {
            return Ok(Decision::Forward(event));
        };

        let handler = self
            .callbacks
            .on_field_key
            .as_mut()
            .ok_or(DialogError::MissingFieldCallback)?;
        let field = &self.fields[index];
        Ok(
            match handler(&field.spec.label, index, &field.value, event) {
                Some(event) => Decision::Forward(event),
                None => Decision::Consumed,
            },
        )
    }

    fn handle_button_blur(&mut self, blurred: usize) {
        let (state, restore) = mem::take(&mut self.revert).on_blur(blurred);
        self.revert = state;
        let Some(restore) = restore else {
            return;
        };
        if let Some(button) = self.buttons.get_mut(restore.button) {
            debug!(
                target: LOG_TARGET,
                button = restore.button,
                blurred,
                label = %restore.label,
                "button label reverted"
            );
            button.label = restore.label;
        }
    }

    fn ensure_target(&self, target: FocusTarget) -> Result<(), DialogError> {
        let known = match target {
            FocusTarget::Field(index) => index < self.fields.len(),
            FocusTarget::Button(index) => index < self.buttons.len(),
        };
        if known {
            Ok(())
        } else {
            Err(DialogError::UnknownTarget(target))
        }
    }

    fn optimal_size(&self, screen_width: usize, text: &str) -> (usize, usize) {
        optimal_size(screen_width, self.chrome.extra_width, self.extra_height, text)
    }
}

impl Drop for MessageView {
    fn drop(&mut self) {
        if self.shown {
            warn!(target: LOG_TARGET, region = %self.region, "dialog dropped while shown");
        }
    }
}
