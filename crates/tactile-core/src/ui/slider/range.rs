//! Dual-thumb range constraint engine
//!
//! A [`RangeSliderPair`] owns the `low` and `high` values of a range slider
//! and guarantees `low <= high - min_difference` after every update. Each
//! update clamps the moving thumb against the other one; the bound is snapped
//! *inward* to the step grid (down for the low thumb, up for the high thumb)
//! so quantization can never push the thumbs closer than allowed.
//!
//! The layout is checked once at construction. A pair built from values that
//! already violate the separation is [`LayoutState::Invalid`] for its whole
//! life and ignores every update.

use log::{debug, warn};

use super::mapper::{SliderDomain, value_from_position};
use crate::error::RangeLayoutError;
use crate::ui::core::Thumb;

/// Upper bound on ulp nudges used to restore exact separation after
/// floating-point subtraction rounds the wrong way
const MAX_SEPARATION_NUDGES: usize = 8;

/// Whether a range pair accepts interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutState {
    Valid,
    Invalid(RangeLayoutError),
}

/// Low/high thumb values with a minimum separation
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderPair {
    domain: SliderDomain,
    low: f64,
    high: f64,
    min_difference: f64,
    layout: LayoutState,
}

impl RangeSliderPair {
    /// Build a pair, clamping and quantizing both values into the domain and
    /// then checking `low <= high - min_difference`.
    pub fn new(domain: SliderDomain, low: f64, high: f64, min_difference: f64) -> Self {
        let layout = Self::check_layout(&domain, low, high, min_difference);
        if let LayoutState::Invalid(reason) = layout {
            warn!("range slider: layout invalid, {}", reason);
        }

        Self {
            domain,
            low: domain.quantize(low),
            high: domain.quantize(high),
            min_difference,
            layout,
        }
    }

    fn check_layout(
        domain: &SliderDomain,
        low: f64,
        high: f64,
        min_difference: f64,
    ) -> LayoutState {
        if !low.is_finite() || !high.is_finite() {
            return LayoutState::Invalid(RangeLayoutError::NonFinite);
        }
        if !min_difference.is_finite() || min_difference < 0.0 {
            return LayoutState::Invalid(RangeLayoutError::InvalidMinDifference { min_difference });
        }

        let low = domain.quantize(low);
        let high = domain.quantize(high);
        if low <= high - min_difference {
            LayoutState::Valid
        } else {
            LayoutState::Invalid(RangeLayoutError::SeparationViolated {
                low,
                high,
                min_difference,
            })
        }
    }

    pub fn layout(&self) -> LayoutState {
        self.layout
    }

    pub fn is_valid(&self) -> bool {
        self.layout == LayoutState::Valid
    }

    pub fn domain(&self) -> &SliderDomain {
        &self.domain
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn min_difference(&self) -> f64 {
        self.min_difference
    }

    pub fn value(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Low => self.low,
            Thumb::High => self.high,
        }
    }

    fn separated(&self, low: f64, high: f64) -> bool {
        low <= high - self.min_difference
    }

    /// Move the low thumb toward `raw`.
    ///
    /// Returns the committed value, or `None` when the layout is invalid.
    pub fn update_low(&mut self, raw: f64) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }

        let upper = self
            .domain
            .quantize_down((self.high - self.min_difference).min(self.domain.max()));
        let low = clamp_between(self.domain.quantize(raw), self.domain.min(), upper);

        self.low = low;
        debug!("range slider: low -> {}", low);
        Some(low)
    }

    /// Move the high thumb toward `raw`.
    ///
    /// Returns the committed value, or `None` when the layout is invalid.
    pub fn update_high(&mut self, raw: f64) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }

        let lower = self
            .domain
            .quantize_up((self.low + self.min_difference).max(self.domain.min()));
        let mut high = clamp_between(self.domain.quantize(raw), lower, self.domain.max());

        // `low + d <= high` does not always give `low <= high - d` in floating point
        for _ in 0..MAX_SEPARATION_NUDGES {
            if self.separated(self.low, high) || high >= self.domain.max() {
                break;
            }
            high = high.next_up().min(self.domain.max());
        }

        self.high = high;
        debug!("range slider: high -> {}", high);
        Some(high)
    }

    /// Route an update to one thumb
    pub fn update(&mut self, thumb: Thumb, raw: f64) -> Option<f64> {
        match thumb {
            Thumb::Low => self.update_low(raw),
            Thumb::High => self.update_high(raw),
        }
    }

    /// Drag the low thumb to `position` on a track `track_width` wide
    pub fn drag_low(&mut self, position: f64, track_width: f64) -> Option<f64> {
        self.update_low(value_from_position(position, track_width, &self.domain))
    }

    /// Drag the high thumb to `position` on a track `track_width` wide
    pub fn drag_high(&mut self, position: f64, track_width: f64) -> Option<f64> {
        self.update_high(value_from_position(position, track_width, &self.domain))
    }

    /// Pick the thumb a press at `position` grabs.
    ///
    /// The closer thumb wins. On a tie the low thumb is picked unless it is
    /// already pinned against the high thumb, so overlapping thumbs can still
    /// be pulled apart. `None` when the layout is invalid.
    pub fn nearest_thumb(&self, position: f64, track_width: f64) -> Option<Thumb> {
        if !self.is_valid() {
            return None;
        }

        let value = value_from_position(position, track_width, &self.domain);
        let to_low = distance(value, self.low);
        let to_high = distance(value, self.high);

        let thumb = if to_low < to_high {
            Thumb::Low
        } else if to_high < to_low {
            Thumb::High
        } else if self.low < self.high - self.min_difference || value < self.low {
            Thumb::Low
        } else {
            Thumb::High
        };
        Some(thumb)
    }
}

fn clamp_between(value: f64, lower: f64, upper: f64) -> f64 {
    value.max(lower).min(upper)
}

fn distance(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { b - a }
}
