//! Radio button component

use embedded_graphics::primitives::Rectangle;

use super::dispatch_gesture;
use crate::config::InteractionConfig;
use crate::ui::core::{Action, ControlId, Redraw, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::gesture::{GestureCore, GestureResponse};
use crate::ui::state::SelectionState;
use crate::ui::styling::{ColorPalette, Style, selection_style};

/// Selectable item; a completed click selects it and reports
/// [`Action::Activate`]. Deselecting siblings is left to the host.
pub struct RadioButton {
    id: ControlId,
    gesture: GestureCore,
    selected: bool,
    dirty: bool,
}

impl RadioButton {
    pub fn new(id: ControlId, bounds: Rectangle, selected: bool) -> Self {
        Self {
            id,
            gesture: GestureCore::new(bounds),
            selected,
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

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        if self.selected != selected {
            self.selected = selected;
            self.dirty = true;
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.gesture.is_enabled() != enabled {
            self.gesture.set_enabled(enabled);
            self.dirty = true;
        }
    }

    pub fn state(&self) -> SelectionState {
        SelectionState::resolve(
            self.gesture.is_enabled(),
            self.gesture.is_pressed(),
            self.selected,
        )
    }

    pub fn style(&self, palette: &ColorPalette) -> Style {
        selection_style(palette, self.state())
    }
}

impl Redraw for RadioButton {
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

impl Touchable for RadioButton {
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
                self.selected = true;
                TouchResult::Action(Action::Activate(self.id))
            }
            _ => TouchResult::Handled,
        }
    }
}
