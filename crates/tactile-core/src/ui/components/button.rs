//! Button component with press/click semantics

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{CornerRadii, Rectangle, RoundedRectangle};

use super::dispatch_gesture;
use crate::config::InteractionConfig;
use crate::constants::{DEFAULT_BUTTON_CORNER_RADIUS_PX, MAX_LABEL_LEN};
use crate::ui::core::{Action, ControlId, Redraw, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::gesture::{GestureCore, GestureResponse};
use crate::ui::state::InteractionState;
use crate::ui::styling::{ButtonVariant, ColorPalette, Style};

/// Button component with label and action
///
/// A press on the button raises its pressed state; lifting the finger while
/// still within the tolerance margin reports [`Action::Activate`] with the
/// button's id. Dragging past the margin cancels the click.
///
/// # Examples
/// ```ignore
/// let mut button = Button::new(
///     SETTINGS_BUTTON,
///     Rectangle::new(Point::new(20, 50), Size::new(280, 50)),
///     "Settings",
/// )
/// .with_variant(ButtonVariant::Primary);
///
/// button.handle_touch(TouchEvent::Press(TouchPoint::new(30, 60)));
/// let result = button.handle_touch(TouchEvent::Release(TouchPoint::new(30, 60)));
/// assert_eq!(result, TouchResult::Action(Action::Activate(SETTINGS_BUTTON)));
/// ```
pub struct Button {
    id: ControlId,
    label: heapless::String<MAX_LABEL_LEN>,
    gesture: GestureCore,
    variant: ButtonVariant,
    corner_radius: u32,
    dirty: bool,
}

impl Button {
    /// Create a new button. Labels longer than the inline capacity are truncated.
    pub fn new(id: ControlId, bounds: Rectangle, label: &str) -> Self {
        Self {
            id,
            label: truncated_label(label),
            gesture: GestureCore::new(bounds),
            variant: ButtonVariant::Primary,
            corner_radius: DEFAULT_BUTTON_CORNER_RADIUS_PX,
            dirty: true,
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self.dirty = true;
        self
    }

    /// Set the corner radius of the background. 0 gives square corners.
    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = radius;
        self.dirty = true;
        self
    }

    /// Apply the shared interaction geometry
    pub fn with_config(mut self, config: &InteractionConfig) -> Self {
        self.gesture = self.gesture.with_tolerance_margin(config.tolerance_margin);
        self
    }

    /// Set the button's bounds (for dynamic repositioning)
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.gesture.bounds() != bounds {
            self.gesture.set_bounds(bounds);
            self.dirty = true;
        }
    }

    /// Enable or disable the button.
    ///
    /// Disabling mid-press drops the press without firing.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.gesture.is_enabled() != enabled {
            self.gesture.set_enabled(enabled);
            self.dirty = true;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.gesture.is_enabled()
    }

    pub fn is_pressed(&self) -> bool {
        self.gesture.is_pressed()
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    pub fn interaction_state(&self) -> InteractionState {
        InteractionState::resolve(self.is_enabled(), self.is_pressed())
    }

    /// Style for the current state
    pub fn style(&self, palette: &ColorPalette) -> Style {
        self.variant.style(palette, self.interaction_state())
    }

    /// Background shape for the rendering layer
    pub fn shape(&self) -> RoundedRectangle {
        RoundedRectangle::new(
            self.gesture.bounds(),
            CornerRadii::new(Size::new_equal(self.corner_radius)),
        )
    }
}

pub(super) fn truncated_label(label: &str) -> heapless::String<MAX_LABEL_LEN> {
    let mut out = heapless::String::new();
    for ch in label.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

impl Redraw for Button {
    fn bounds(&self) -> Rectangle {
        self.gesture.bounds()
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for Button {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.gesture.bounds().contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        let response = dispatch_gesture(&mut self.gesture, event);
        if response.changes_press() {
            self.dirty = true;
        }

        match response {
            GestureResponse::Ignored => TouchResult::NotHandled,
            GestureResponse::Activated => TouchResult::Action(Action::Activate(self.id)),
            _ => TouchResult::Handled,
        }
    }
}
