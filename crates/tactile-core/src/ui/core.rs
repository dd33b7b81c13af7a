//! Core touch protocol and redraw tracking shared by all controls

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Represents a 2D touch point in the control's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

impl TouchPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for TouchPoint {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Touch events delivered by the host platform, in time order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Finger down at a point
    Press(TouchPoint),
    /// Finger moved while down
    Drag(TouchPoint),
    /// Finger lifted at a point
    Release(TouchPoint),
    /// The platform interrupted the gesture
    Cancel,
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event triggered an action
    Action(Action),
}

/// Identifier the host assigns to a control so it can tell actions apart
pub type ControlId = u16;

/// Where a slider drag is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
}

/// Which thumb of a range slider a drag moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    Low,
    High,
}

/// Actions that controls report back to the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A click completed inside the tolerance zone
    Activate(ControlId),
    /// A toggle flipped to a new value
    Toggle { id: ControlId, on: bool },
    /// A single-thumb slider moved
    SliderValue {
        id: ControlId,
        value: f64,
        phase: DragPhase,
    },
    /// One thumb of a range slider moved
    RangeValue {
        id: ControlId,
        low: f64,
        high: f64,
        thumb: Thumb,
        phase: DragPhase,
    },
}

/// Dirty region tracking for efficient rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
    pub is_dirty: bool,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            is_dirty: true,
        }
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Expand this dirty region to include another region
    pub fn expand_to_include(&mut self, other: Rectangle) {
        if !self.is_dirty {
            self.bounds = other;
            self.is_dirty = true;
        } else {
            let min_x = self.bounds.top_left.x.min(other.top_left.x);
            let min_y = self.bounds.top_left.y.min(other.top_left.y);

            let max_x = (self.bounds.top_left.x + self.bounds.size.width as i32)
                .max(other.top_left.x + other.size.width as i32);
            let max_y = (self.bounds.top_left.y + self.bounds.size.height as i32)
                .max(other.top_left.y + other.size.height as i32);

            self.bounds = Rectangle::new(
                Point::new(min_x, min_y),
                Size::new((max_x - min_x) as u32, (max_y - min_y) as u32),
            );
        }
    }
}

/// Trait for elements whose appearance the rendering layer must refresh
/// whenever their interaction state or value changes
pub trait Redraw {
    /// Get the bounds of this element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Get the dirty region for partial updates
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.is_dirty() {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns result indicating if handled and any action
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}

/// Combined trait for interactive elements
pub trait Control: Redraw + Touchable {}

/// Implement Control for any type that implements both Redraw and Touchable
impl<T: Redraw + Touchable> Control for T {}
