//! Dual-thumb range slider component

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, warn};

use super::slider::SliderTrack;
use crate::config::InteractionConfig;
use crate::constants::DEFAULT_THUMB_SIZE_PX;
use crate::error::RangeLayoutError;
use crate::ui::core::{
    Action, ControlId, DragPhase, Redraw, Thumb, TouchEvent, TouchPoint, TouchResult, Touchable,
};
use crate::ui::slider::{LayoutState, RangeSliderPair, SliderDomain};
use crate::ui::state::InteractionState;
use crate::ui::styling::{ColorPalette, SliderStyle};

/// Range slider whose two thumbs keep a minimum distance apart
///
/// A press grabs the nearer thumb and moves it to the finger; the drag is
/// then routed through [`RangeSliderPair`], so the moving thumb stops at the
/// other thumb minus the minimum difference. Every step is reported as
/// [`Action::RangeValue`].
///
/// When the initial values (or the domain) are invalid the slider is inert
/// for its whole life; rebuild it with valid values to make it interactive.
pub struct RangeSlider {
    id: ControlId,
    track: SliderTrack,
    pair: Result<RangeSliderPair, RangeLayoutError>,
    enabled: bool,
    active: Option<Thumb>,
    dirty: bool,
}

impl RangeSlider {
    pub fn new(id: ControlId, bounds: Rectangle, pair: RangeSliderPair) -> Self {
        Self {
            id,
            track: SliderTrack::new(bounds, DEFAULT_THUMB_SIZE_PX),
            pair: Ok(pair),
            enabled: true,
            active: None,
            dirty: true,
        }
    }

    /// Build from raw parameters. Any invalid input yields an inert slider.
    #[allow(clippy::too_many_arguments)]
    pub fn from_range(
        id: ControlId,
        bounds: Rectangle,
        min: f64,
        max: f64,
        step: Option<f64>,
        low: f64,
        high: f64,
        min_difference: f64,
    ) -> Self {
        let domain = match step {
            Some(step) => SliderDomain::stepped(min, max, step),
            None => SliderDomain::new(min, max),
        };

        let pair = domain
            .map(|domain| RangeSliderPair::new(domain, low, high, min_difference))
            .map_err(RangeLayoutError::from);
        if let Err(err) = &pair {
            warn!("range slider {}: inert, {}", id, err);
        }

        Self {
            id,
            track: SliderTrack::new(bounds, DEFAULT_THUMB_SIZE_PX),
            pair,
            enabled: true,
            active: None,
            dirty: true,
        }
    }

    pub fn with_config(mut self, config: &InteractionConfig) -> Self {
        self.track = SliderTrack::new(self.track.bounds(), config.thumb_size);
        self
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn layout(&self) -> LayoutState {
        match &self.pair {
            Ok(pair) => pair.layout(),
            Err(err) => LayoutState::Invalid(*err),
        }
    }

    pub fn pair(&self) -> Option<&RangeSliderPair> {
        self.pair.as_ref().ok()
    }

    /// Current `(low, high)`, `None` when the domain itself was invalid
    pub fn values(&self) -> Option<(f64, f64)> {
        self.pair().map(|pair| (pair.low(), pair.high()))
    }

    /// Thumb being dragged, if any
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.active
    }

    pub fn track(&self) -> &SliderTrack {
        &self.track
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.track.bounds() != bounds {
            self.track = SliderTrack::new(bounds, self.track.thumb_size());
            self.dirty = true;
        }
    }

    /// Enable or disable the slider.
    ///
    /// Disabling mid-drag releases the thumb and returns the
    /// [`DragPhase::Ended`] action for it.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<Action> {
        if self.enabled == enabled {
            return None;
        }
        self.enabled = enabled;
        self.dirty = true;

        if enabled {
            return None;
        }
        let thumb = self.active.take()?;
        debug!("range slider {}: {:?} thumb released by disable", self.id, thumb);
        self.action(thumb, DragPhase::Ended)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_interactive(&self) -> bool {
        self.enabled
            && self.track.travel().is_some()
            && matches!(self.layout(), LayoutState::Valid)
    }

    pub fn interaction_state(&self) -> InteractionState {
        InteractionState::resolve(self.is_interactive(), self.active.is_some())
    }

    pub fn style(&self, palette: &ColorPalette) -> SliderStyle {
        SliderStyle::resolve(palette, self.interaction_state())
    }

    /// Thumb center for the rendering layer
    pub fn thumb_center(&self, thumb: Thumb) -> Option<Point> {
        let pair = self.pair()?;
        Some(self.track.thumb_center(pair.value(thumb), pair.domain()))
    }

    fn action(&self, thumb: Thumb, phase: DragPhase) -> Option<Action> {
        let pair = self.pair()?;
        Some(Action::RangeValue {
            id: self.id,
            low: pair.low(),
            high: pair.high(),
            thumb,
            phase,
        })
    }

    fn report(&self, thumb: Thumb, phase: DragPhase) -> TouchResult {
        self.action(thumb, phase)
            .map_or(TouchResult::NotHandled, TouchResult::Action)
    }

    /// Move `thumb` to `point`; true when its value changed
    fn drag_to(&mut self, thumb: Thumb, point: TouchPoint, travel: f64) -> bool {
        let position = self.track.position_of(point.to_point());
        let Ok(pair) = self.pair.as_mut() else {
            return false;
        };

        let before = pair.value(thumb);
        let after = match thumb {
            Thumb::Low => pair.drag_low(position, travel),
            Thumb::High => pair.drag_high(position, travel),
        };

        match after {
            Some(after) if after != before => {
                self.dirty = true;
                true
            }
            _ => false,
        }
    }
}

impl Redraw for RangeSlider {
    fn bounds(&self) -> Rectangle {
        self.track.bounds()
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

impl Touchable for RangeSlider {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.track.bounds().contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        if !self.is_interactive() {
            return TouchResult::NotHandled;
        }
        let Some(travel) = self.track.travel() else {
            return TouchResult::NotHandled;
        };

        match (event, self.active) {
            (TouchEvent::Press(point), None) if self.contains_point(point) => {
                let position = self.track.position_of(point.to_point());
                let Some(thumb) = self.pair().and_then(|p| p.nearest_thumb(position, travel))
                else {
                    return TouchResult::NotHandled;
                };

                self.active = Some(thumb);
                self.dirty = true;
                self.drag_to(thumb, point, travel);
                debug!("range slider {}: {:?} thumb grabbed", self.id, thumb);
                self.report(thumb, DragPhase::Began)
            }
            (TouchEvent::Drag(point), Some(thumb)) => {
                if self.drag_to(thumb, point, travel) {
                    self.report(thumb, DragPhase::Changed)
                } else {
                    TouchResult::Handled
                }
            }
            (TouchEvent::Release(point), Some(thumb)) => {
                self.drag_to(thumb, point, travel);
                self.active = None;
                self.dirty = true;
                debug!("range slider {}: {:?} thumb released", self.id, thumb);
                self.report(thumb, DragPhase::Ended)
            }
            (TouchEvent::Cancel, Some(thumb)) => {
                self.active = None;
                self.dirty = true;
                self.report(thumb, DragPhase::Ended)
            }
            _ => TouchResult::NotHandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THUMB: u32 = 24;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(0, 0), Size::new(200 + THUMB, 30))
    }

    fn at(x: i32) -> TouchPoint {
        TouchPoint::new(x + (THUMB / 2) as i32, 15)
    }

    fn slider(low: f64, high: f64, min_difference: f64) -> RangeSlider {
        RangeSlider::from_range(4, bounds(), 0.0, 1.0, None, low, high, min_difference)
    }

    #[test]
    fn test_press_grabs_nearest_thumb() {
        let mut range = slider(0.3, 0.7, 0.1);
        range.handle_touch(TouchEvent::Press(at(150)));
        assert_eq!(range.active_thumb(), Some(Thumb::High));
        assert_eq!(range.values(), Some((0.3, 0.75)));
    }

    #[test]
    fn test_low_thumb_stops_at_separation() {
        let mut range = slider(0.3, 0.7, 0.1);
        range.handle_touch(TouchEvent::Press(at(60)));
        assert_eq!(range.active_thumb(), Some(Thumb::Low));

        let result = range.handle_touch(TouchEvent::Drag(at(130)));
        match result {
            TouchResult::Action(Action::RangeValue {
                low, high, thumb, phase, ..
            }) => {
                assert!((low - 0.6).abs() < 1e-9);
                assert_eq!(high, 0.7);
                assert_eq!(thumb, Thumb::Low);
                assert_eq!(phase, DragPhase::Changed);
            }
            other => panic!("unexpected result {:?}", other),
        }

        // Pushing further does not move it
        assert_eq!(range.handle_touch(TouchEvent::Drag(at(190))), TouchResult::Handled);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut range = slider(0.3, 0.7, 0.1);
        range.handle_touch(TouchEvent::Press(at(60)));
        let result = range.handle_touch(TouchEvent::Release(at(40)));

        assert!(matches!(
            result,
            TouchResult::Action(Action::RangeValue {
                thumb: Thumb::Low,
                phase: DragPhase::Ended,
                ..
            })
        ));
        assert_eq!(range.active_thumb(), None);
        assert_eq!(range.values(), Some((0.2, 0.7)));
    }

    #[test]
    fn test_invalid_layout_is_inert() {
        let mut range = slider(0.5, 0.55, 0.1);

        assert!(matches!(
            range.layout(),
            LayoutState::Invalid(RangeLayoutError::SeparationViolated { .. })
        ));
        assert_eq!(range.handle_touch(TouchEvent::Press(at(10))), TouchResult::NotHandled);
        assert_eq!(range.handle_touch(TouchEvent::Drag(at(150))), TouchResult::NotHandled);
        assert_eq!(range.values(), Some((0.5, 0.55)));
        assert_eq!(range.interaction_state(), InteractionState::Disabled);
    }

    #[test]
    fn test_invalid_domain_is_inert() {
        let range = RangeSlider::from_range(4, bounds(), 1.0, 0.0, None, 0.2, 0.8, 0.1);
        assert!(matches!(
            range.layout(),
            LayoutState::Invalid(RangeLayoutError::Domain(_))
        ));
        assert_eq!(range.values(), None);
        assert_eq!(range.thumb_center(Thumb::Low), None);
    }

    #[test]
    fn test_disable_mid_drag_releases_thumb() {
        let mut range = slider(0.3, 0.7, 0.1);
        range.handle_touch(TouchEvent::Press(at(60)));
        range.handle_touch(TouchEvent::Drag(at(40)));

        assert_eq!(
            range.set_enabled(false),
            Some(Action::RangeValue {
                id: 4,
                low: 0.2,
                high: 0.7,
                thumb: Thumb::Low,
                phase: DragPhase::Ended,
            })
        );
        assert_eq!(range.active_thumb(), None);
        assert_eq!(range.handle_touch(TouchEvent::Release(at(60))), TouchResult::NotHandled);
        assert_eq!(range.set_enabled(true), None);
    }

    #[test]
    fn test_disable_while_idle_reports_nothing() {
        let mut range = slider(0.3, 0.7, 0.1);
        assert_eq!(range.set_enabled(false), None);
        assert_eq!(range.interaction_state(), InteractionState::Disabled);
    }

    #[test]
    fn test_thumb_centers() {
        let range = slider(0.25, 0.75, 0.1);
        assert_eq!(range.thumb_center(Thumb::Low), Some(Point::new(62, 15)));
        assert_eq!(range.thumb_center(Thumb::High), Some(Point::new(162, 15)));
    }
}
