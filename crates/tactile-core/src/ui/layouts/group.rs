//! Touch routing across a set of controls

use alloc::boxed::Box;
use alloc::vec::Vec;

use embedded_graphics::primitives::Rectangle;
use log::trace;

use crate::ui::core::{Control, DirtyRegion, Redraw, TouchEvent, TouchPoint, TouchResult, Touchable};

/// Group of controls sharing one touch stream
///
/// A press goes to the first control (in insertion order) that contains the
/// point and handles it. That control then captures the gesture: drags and the
/// final release or cancel are delivered to it alone, even when the finger has
/// wandered over a sibling. A second press while a gesture is captured is
/// ignored.
///
/// Groups are controls themselves, so they nest.
pub struct ControlGroup {
    bounds: Rectangle,
    controls: Vec<Box<dyn Control>>,
    captured: Option<usize>,
    dirty: bool,
}

impl ControlGroup {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            controls: Vec::new(),
            captured: None,
            dirty: true,
        }
    }

    /// Add a control; returns its index within the group
    pub fn push(&mut self, control: impl Control + 'static) -> usize {
        self.controls.push(Box::new(control));
        self.dirty = true;
        self.controls.len() - 1
    }

    pub fn with(mut self, control: impl Control + 'static) -> Self {
        self.push(control);
        self
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Control> {
        self.controls.get(index).map(|control| &**control)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Control + 'static)> {
        self.controls.get_mut(index).map(|control| &mut **control)
    }

    /// Index of the control holding the current gesture
    pub fn captured(&self) -> Option<usize> {
        self.captured
    }

    fn press(&mut self, point: TouchPoint) -> TouchResult {
        if self.captured.is_some() {
            trace!("group: press ignored, gesture already captured");
            return TouchResult::NotHandled;
        }

        for (index, control) in self.controls.iter_mut().enumerate() {
            if !control.contains_point(point) {
                continue;
            }
            let result = control.handle_touch(TouchEvent::Press(point));
            if result != TouchResult::NotHandled {
                trace!("group: control {} captured press", index);
                self.captured = Some(index);
                return result;
            }
        }
        TouchResult::NotHandled
    }

    fn forward(&mut self, event: TouchEvent) -> TouchResult {
        let Some(index) = self.captured else {
            return TouchResult::NotHandled;
        };
        if matches!(event, TouchEvent::Release(_) | TouchEvent::Cancel) {
            self.captured = None;
        }

        match self.controls.get_mut(index) {
            Some(control) => control.handle_touch(event),
            None => TouchResult::NotHandled,
        }
    }
}

impl Redraw for ControlGroup {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.controls.iter().any(|control| control.is_dirty())
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        for control in &mut self.controls {
            control.mark_clean();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Union of the dirty children, or the whole group when it is dirty itself
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.dirty {
            return Some(DirtyRegion::new(self.bounds));
        }

        let mut region: Option<DirtyRegion> = None;
        for child in self.controls.iter().filter_map(|control| control.dirty_region()) {
            region = Some(match region {
                Some(mut region) => {
                    region.expand_to_include(child.bounds);
                    region
                }
                None => child,
            });
        }
        region
    }
}

impl Touchable for ControlGroup {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) => self.press(point),
            _ => self.forward(event),
        }
    }
}
