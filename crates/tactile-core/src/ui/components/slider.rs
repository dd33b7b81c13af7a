//! Single-thumb slider component

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{CornerRadii, Rectangle, RoundedRectangle};
use log::{debug, warn};

use crate::config::InteractionConfig;
use crate::constants::DEFAULT_THUMB_SIZE_PX;
use crate::error::DomainError;
use crate::ui::core::{
    Action, ControlId, DragPhase, Redraw, TouchEvent, TouchPoint, TouchResult, Touchable,
};
use crate::ui::slider::{SliderDomain, position_from_value, value_from_position};
use crate::ui::state::InteractionState;
use crate::ui::styling::{ColorPalette, SliderStyle};

// ============================================================================
// Track geometry
// ============================================================================

/// Horizontal track a thumb travels along.
///
/// The thumb's center runs from half a thumb in from the left edge to half a
/// thumb in from the right edge, so the travel is the bounds width minus one
/// thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderTrack {
    bounds: Rectangle,
    thumb_size: u32,
}

impl SliderTrack {
    pub fn new(bounds: Rectangle, thumb_size: u32) -> Self {
        Self { bounds, thumb_size }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn thumb_size(&self) -> u32 {
        self.thumb_size
    }

    /// Thumb travel in pixels, `None` when the bounds leave no room to move
    pub fn travel(&self) -> Option<f64> {
        let travel = self.bounds.size.width.saturating_sub(self.thumb_size);
        (travel > 0).then(|| f64::from(travel))
    }

    fn start_x(&self) -> i64 {
        i64::from(self.bounds.top_left.x) + i64::from(self.thumb_size / 2)
    }

    /// Offset of `point` along the track, measured from the thumb's leftmost center
    pub fn position_of(&self, point: Point) -> f64 {
        (i64::from(point.x) - self.start_x()) as f64
    }

    /// Center of the thumb showing `value`, for the rendering layer
    pub fn thumb_center(&self, value: f64, domain: &SliderDomain) -> Point {
        let offset = match self.travel() {
            Some(travel) => position_from_value(domain.clamp(value), travel, domain),
            None => 0.0,
        };
        let x = self.start_x() + (offset + 0.5) as i64;
        let y = i64::from(self.bounds.top_left.y) + i64::from(self.bounds.size.height / 2);
        Point::new(saturate(x), saturate(y))
    }

    /// Rail the thumb slides along, vertically centered in the bounds and
    /// spanning the thumb's travel
    pub fn rail(&self, config: &InteractionConfig) -> RoundedRectangle {
        let height = config.track_height.min(self.bounds.size.height);
        let width = self.bounds.size.width.saturating_sub(self.thumb_size);
        let y = i64::from(self.bounds.top_left.y)
            + i64::from((self.bounds.size.height - height) / 2);
        let rail = Rectangle::new(
            Point::new(saturate(self.start_x()), saturate(y)),
            Size::new(width, height),
        );
        RoundedRectangle::new(
            rail,
            CornerRadii::new(Size::new_equal(config.track_corner_radius)),
        )
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

// ============================================================================
// Slider
// ============================================================================

/// Slider with one thumb over a bounded, optionally stepped domain
///
/// A press inside the bounds grabs the thumb and jumps it to the finger,
/// drags move it (clamped to the domain, snapped to the step), and
/// release or cancel end the drag. Each step is reported as
/// [`Action::SliderValue`] with its [`DragPhase`].
///
/// A slider built from an invalid domain stays inert: it renders disabled
/// and ignores all input.
pub struct Slider {
    id: ControlId,
    track: SliderTrack,
    domain: Result<SliderDomain, DomainError>,
    value: f64,
    enabled: bool,
    dragging: bool,
    dirty: bool,
}

impl Slider {
    pub fn new(id: ControlId, bounds: Rectangle, domain: SliderDomain, value: f64) -> Self {
        Self {
            id,
            track: SliderTrack::new(bounds, DEFAULT_THUMB_SIZE_PX),
            domain: Ok(domain),
            value: domain.quantize(value),
            enabled: true,
            dragging: false,
            dirty: true,
        }
    }

    /// Build from raw bounds; an invalid domain yields an inert slider.
    pub fn from_range(
        id: ControlId,
        bounds: Rectangle,
        min: f64,
        max: f64,
        step: Option<f64>,
        value: f64,
    ) -> Self {
        let domain = match step {
            Some(step) => SliderDomain::stepped(min, max, step),
            None => SliderDomain::new(min, max),
        };

        match domain {
            Ok(domain) => Self::new(id, bounds, domain, value),
            Err(err) => {
                warn!("slider {}: inert, {}", id, err);
                Self {
                    id,
                    track: SliderTrack::new(bounds, DEFAULT_THUMB_SIZE_PX),
                    domain: Err(err),
                    value,
                    enabled: true,
                    dragging: false,
                    dirty: true,
                }
            }
        }
    }

    pub fn with_config(mut self, config: &InteractionConfig) -> Self {
        self.track = SliderTrack::new(self.track.bounds, config.thumb_size);
        self
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn domain(&self) -> Option<&SliderDomain> {
        self.domain.as_ref().ok()
    }

    /// Why the slider is inert, if it is
    pub fn layout_error(&self) -> Option<DomainError> {
        self.domain.err()
    }

    pub fn track(&self) -> &SliderTrack {
        &self.track
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.track.bounds != bounds {
            self.track = SliderTrack::new(bounds, self.track.thumb_size);
            self.dirty = true;
        }
    }

    /// Set the value programmatically (clamped and snapped, no action reported)
    pub fn set_value(&mut self, value: f64) {
        if let Ok(domain) = &self.domain {
            let value = domain.quantize(value);
            if value != self.value {
                self.value = value;
                self.dirty = true;
            }
        }
    }

    /// Enable or disable the slider.
    ///
    /// Disabling mid-drag ends the drag. The returned action carries the
    /// [`DragPhase::Ended`] the host would otherwise never receive.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<Action> {
        if self.enabled == enabled {
            return None;
        }
        self.enabled = enabled;
        self.dirty = true;

        if enabled || !self.dragging {
            return None;
        }
        self.dragging = false;
        debug!("slider {}: drag ended by disable at {}", self.id, self.value);
        Some(self.action(DragPhase::Ended))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn interactive(&self) -> Option<(SliderDomain, f64)> {
        if !self.enabled {
            return None;
        }
        let domain = *self.domain.as_ref().ok()?;
        let travel = self.track.travel()?;
        Some((domain, travel))
    }

    pub fn interaction_state(&self) -> InteractionState {
        InteractionState::resolve(
            self.enabled && self.domain.is_ok() && self.track.travel().is_some(),
            self.dragging,
        )
    }

    pub fn style(&self, palette: &ColorPalette) -> SliderStyle {
        SliderStyle::resolve(palette, self.interaction_state())
    }

    /// Thumb center for the current value, `None` while inert
    pub fn thumb_center(&self) -> Option<Point> {
        let domain = self.domain.as_ref().ok()?;
        Some(self.track.thumb_center(self.value, domain))
    }

    fn action(&self, phase: DragPhase) -> Action {
        Action::SliderValue {
            id: self.id,
            value: self.value,
            phase,
        }
    }

    fn report(&self, phase: DragPhase) -> TouchResult {
        TouchResult::Action(self.action(phase))
    }

    fn drag_to(&mut self, point: TouchPoint, domain: &SliderDomain, travel: f64) -> bool {
        let value = value_from_position(self.track.position_of(point.to_point()), travel, domain);
        if value != self.value {
            self.value = value;
            self.dirty = true;
            true
        } else {
            false
        }
    }
}

impl Redraw for Slider {
    fn bounds(&self) -> Rectangle {
        self.track.bounds
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

impl Touchable for Slider {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.track.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        let Some((domain, travel)) = self.interactive() else {
            return TouchResult::NotHandled;
        };

        match event {
            TouchEvent::Press(point) => {
                if self.dragging || !self.contains_point(point) {
                    return TouchResult::NotHandled;
                }
                self.dragging = true;
                self.dirty = true;
                self.drag_to(point, &domain, travel);
                debug!("slider {}: drag began at {}", self.id, self.value);
                self.report(DragPhase::Began)
            }
            TouchEvent::Drag(point) if self.dragging => {
                if self.drag_to(point, &domain, travel) {
                    self.report(DragPhase::Changed)
                } else {
                    TouchResult::Handled
                }
            }
            TouchEvent::Release(point) if self.dragging => {
                self.drag_to(point, &domain, travel);
                self.dragging = false;
                self.dirty = true;
                debug!("slider {}: drag ended at {}", self.id, self.value);
                self.report(DragPhase::Ended)
            }
            TouchEvent::Cancel if self.dragging => {
                self.dragging = false;
                self.dirty = true;
                self.report(DragPhase::Ended)
            }
            _ => TouchResult::NotHandled,
        }
    }
}
