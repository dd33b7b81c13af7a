//! On/off switch component

use embedded_graphics::primitives::Rectangle;

use super::dispatch_gesture;
use crate::config::InteractionConfig;
use crate::ui::core::{Action, ControlId, Redraw, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::gesture::{GestureCore, GestureResponse};
use crate::ui::state::ToggleState;
use crate::ui::styling::{ColorPalette, Style, toggle_style};

/// Switch or checkbox that flips on each completed click
pub struct Toggle {
    id: ControlId,
    gesture: GestureCore,
    on: bool,
    dirty: bool,
}

impl Toggle {
    pub fn new(id: ControlId, bounds: Rectangle, on: bool) -> Self {
        Self {
            id,
            gesture: GestureCore::new(bounds),
            on,
            dirty: true,
        }
    }

    pub fn with_config(mut self, config: &InteractionConfig) -> Self {
        self.gesture = self.gesture.with_tolerance_margin(config.tolerance_margin);
        self
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Set the value without reporting an action
    pub fn set_on(&mut self, on: bool) {
        if self.on != on {
            self.on = on;
            self.dirty = true;
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.gesture.is_enabled() != enabled {
            self.gesture.set_enabled(enabled);
            self.dirty = true;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.gesture.is_enabled()
    }

    pub fn state(&self) -> ToggleState {
        ToggleState::resolve(self.gesture.is_enabled(), self.gesture.is_pressed(), self.on)
    }

    pub fn style(&self, palette: &ColorPalette) -> Style {
        toggle_style(palette, self.state())
    }
}

impl Redraw for Toggle {
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

impl Touchable for Toggle {
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
            GestureResponse::Activated => {
                self.on = !self.on;
                TouchResult::Action(Action::Toggle {
                    id: self.id,
                    on: self.on,
                })
            }
            _ => TouchResult::Handled,
        }
    }
}
