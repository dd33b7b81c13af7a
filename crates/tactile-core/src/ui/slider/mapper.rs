//! Track position ↔ value mapping
//!
//! Converts a 1-D drag position along a track of known width into a value in
//! a bounded [`SliderDomain`], optionally snapped to a step grid, and maps
//! values back to track offsets for rendering.

use crate::error::{DomainError, DomainResult};

/// Grid indices closer than this to an integer are treated as on the grid.
///
/// Absorbs the representation error of decimal steps, e.g. `0.6 / 0.1`
/// evaluating to `5.999999999999999`.
const GRID_SNAP_EPSILON: f64 = 1e-9;

/// Bounded value domain of a slider, with an optional step grid anchored at
/// `min`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDomain {
    min: f64,
    max: f64,
    step: Option<f64>,
}

impl SliderDomain {
    /// Continuous domain `[min, max]`
    pub fn new(min: f64, max: f64) -> DomainResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::NonFinite);
        }
        if min >= max {
            return Err(DomainError::InvalidBounds { min, max });
        }
        Ok(Self {
            min,
            max,
            step: None,
        })
    }

    /// Domain `[min, max]` quantized to multiples of `step` from `min`
    pub fn stepped(min: f64, max: f64, step: f64) -> DomainResult<Self> {
        Self::new(min, max)?.with_step(step)
    }

    /// The `[0, 1]` domain most sliders use
    pub fn unit() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: None,
        }
    }

    /// Attach a step grid. The step must be positive and no wider than the domain.
    pub fn with_step(mut self, step: f64) -> DomainResult<Self> {
        if !step.is_finite() {
            return Err(DomainError::NonFinite);
        }
        let width = self.width();
        if step <= 0.0 || step > width {
            return Err(DomainError::InvalidStep { step, width });
        }
        self.step = Some(step);
        Ok(self)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// Distance between the bounds (always positive)
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp into `[min, max]`. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Snap to the nearest grid point (ties to the even index), then clamp.
    ///
    /// Without a step this is just [`clamp`](Self::clamp).
    pub fn quantize(&self, value: f64) -> f64 {
        let value = self.clamp(value);
        match self.step {
            Some(step) => {
                let index = round_ties_even((value - self.min) / step);
                self.clamp(self.min + index * step)
            }
            None => value,
        }
    }

    /// Snap down to the grid, never returning more than `value`.
    pub fn quantize_down(&self, value: f64) -> f64 {
        let value = self.clamp(value);
        match self.step {
            Some(step) => {
                let index = floor((value - self.min) / step + GRID_SNAP_EPSILON);
                self.clamp(self.min + index * step).min(value)
            }
            None => value,
        }
    }

    /// Snap up to the grid, never returning less than `value`.
    pub fn quantize_up(&self, value: f64) -> f64 {
        let value = self.clamp(value);
        match self.step {
            Some(step) => {
                let index = ceil((value - self.min) / step - GRID_SNAP_EPSILON);
                self.clamp(self.min + index * step).max(value)
            }
            None => value,
        }
    }
}

fn assert_track_width(track_width: f64) {
    assert!(
        track_width > 0.0 && track_width.is_finite(),
        "slider track width must be positive and finite, got {track_width}"
    );
}

/// Map a drag `position` along a track `track_width` wide to a domain value.
///
/// Positions beyond either end of the track clamp to the domain bounds.
///
/// # Panics
///
/// If `track_width` is not positive and finite.
pub fn value_from_position(position: f64, track_width: f64, domain: &SliderDomain) -> f64 {
    assert_track_width(track_width);
    if position.is_nan() {
        return domain.quantize(domain.min);
    }

    let raw = domain.min + (position / track_width) * domain.width();
    domain.quantize(raw)
}

/// Map a domain value to its offset along the track. No quantization is applied.
///
/// # Panics
///
/// If `track_width` is not positive and finite.
pub fn position_from_value(value: f64, track_width: f64, domain: &SliderDomain) -> f64 {
    assert_track_width(track_width);
    (value - domain.min) / domain.width() * track_width
}

// ============================================================================
// Rounding
// ============================================================================
//
// `f64::floor` and friends live in `std`; these cover the grid-index range
// using integer truncation.

/// 2^52: every f64 at or above this magnitude is already an integer
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

fn floor(x: f64) -> f64 {
    let magnitude = if x < 0.0 { -x } else { x };
    if !(magnitude < INTEGRAL_THRESHOLD) {
        return x;
    }
    let truncated = x as i64 as f64;
    if truncated > x {
        truncated - 1.0
    } else {
        truncated
    }
}

fn ceil(x: f64) -> f64 {
    -floor(-x)
}

fn round_ties_even(x: f64) -> f64 {
    let lower = floor(x);
    let fraction = x - lower;
    if fraction > 0.5 {
        lower + 1.0
    } else if fraction < 0.5 || lower % 2.0 == 0.0 {
        lower
    } else {
        lower + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_domain_validation() {
        assert_eq!(
            SliderDomain::new(1.0, 1.0),
            Err(DomainError::InvalidBounds { min: 1.0, max: 1.0 })
        );
        assert_eq!(SliderDomain::new(f64::NAN, 1.0), Err(DomainError::NonFinite));
        assert!(matches!(
            SliderDomain::stepped(0.0, 1.0, 0.0),
            Err(DomainError::InvalidStep { .. })
        ));
        assert!(matches!(
            SliderDomain::stepped(0.0, 1.0, 1.5),
            Err(DomainError::InvalidStep { .. })
        ));
        assert!(SliderDomain::stepped(0.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_continuous_mapping() {
        let domain = SliderDomain::unit();
        assert_eq!(value_from_position(68.0, 200.0, &domain), 0.34);
        assert_eq!(value_from_position(0.0, 200.0, &domain), 0.0);
        assert_eq!(value_from_position(200.0, 200.0, &domain), 1.0);
    }

    #[test]
    fn test_stepped_mapping() {
        let domain = SliderDomain::stepped(0.0, 1.0, 0.1).unwrap();
        assert!(approx(value_from_position(68.0, 200.0, &domain), 0.3));
        assert!(approx(value_from_position(71.0, 200.0, &domain), 0.4));
    }

    #[test]
    fn test_positions_past_track_clamp() {
        let domain = SliderDomain::new(-5.0, 5.0).unwrap();
        assert_eq!(value_from_position(-40.0, 100.0, &domain), -5.0);
        assert_eq!(value_from_position(1e9, 100.0, &domain), 5.0);
        assert_eq!(value_from_position(f64::NEG_INFINITY, 100.0, &domain), -5.0);
        assert_eq!(value_from_position(f64::NAN, 100.0, &domain), -5.0);
    }

    #[test]
    fn test_requantize_clamps_off_grid_max() {
        // 0.6 does not divide 1.0: rounding 1.0 lands on 1.2, which clamps back
        let domain = SliderDomain::stepped(0.0, 1.0, 0.6).unwrap();
        assert_eq!(value_from_position(200.0, 200.0, &domain), 1.0);
        assert!(approx(value_from_position(110.0, 200.0, &domain), 0.6));
    }

    #[test]
    fn test_ties_round_to_even_index() {
        let domain = SliderDomain::stepped(0.0, 10.0, 1.0).unwrap();
        assert_eq!(domain.quantize(2.5), 2.0);
        assert_eq!(domain.quantize(3.5), 4.0);
        assert_eq!(domain.quantize(3.49), 3.0);
    }

    #[test]
    fn test_directional_quantization() {
        let domain = SliderDomain::stepped(0.0, 1.0, 0.1).unwrap();
        assert!(approx(domain.quantize_down(0.67), 0.6));
        assert!(approx(domain.quantize_up(0.61), 0.7));

        // Values already on the grid stay put despite representation error
        let on_grid = 0.7 - 0.1;
        assert!(domain.quantize_down(on_grid) <= on_grid);
        assert!(approx(domain.quantize_down(on_grid), 0.6));
        assert!(domain.quantize_up(on_grid) >= on_grid);
        assert!(approx(domain.quantize_up(on_grid), 0.6));
    }

    #[test]
    fn test_value_closure_over_track() {
        let domains = [
            SliderDomain::unit(),
            SliderDomain::new(-3.5, 12.25).unwrap(),
            SliderDomain::stepped(10.0, 20.0, 0.25).unwrap(),
            SliderDomain::stepped(-1.0, 1.0, 0.3).unwrap(),
        ];
        for domain in domains {
            for width in [1.0, 37.0, 200.0, 1234.5] {
                for i in 0..=100 {
                    let position = width * f64::from(i) / 100.0;
                    let value = value_from_position(position, width, &domain);
                    assert!(domain.contains(value), "{value} outside {:?}", domain);
                }
            }
        }
    }

    #[test]
    fn test_stepped_outputs_land_on_grid() {
        let domain = SliderDomain::stepped(-2.0, 3.0, 0.25).unwrap();
        for i in 0..=500 {
            let value = value_from_position(f64::from(i), 500.0, &domain);
            let index = (value - domain.min()) / 0.25;
            assert!((index - index.round()).abs() < EPS, "{value} off grid");
        }
    }

    #[test]
    fn test_round_trip() {
        let domain = SliderDomain::new(-10.0, 30.0).unwrap();
        for value in [-10.0, -2.5, 0.0, 7.125, 30.0] {
            let position = position_from_value(value, 320.0, &domain);
            assert!(approx(value_from_position(position, 320.0, &domain), value));
        }

        let stepped = SliderDomain::stepped(0.0, 1.0, 0.1).unwrap();
        for value in [0.0, 0.13, 0.5, 0.77, 1.0] {
            let position = position_from_value(value, 200.0, &stepped);
            let back = value_from_position(position, 200.0, &stepped);
            assert!((back - value).abs() <= 0.1 + EPS);
        }
    }

    #[test]
    fn test_position_from_value_is_linear() {
        let domain = SliderDomain::new(0.0, 50.0).unwrap();
        assert_eq!(position_from_value(25.0, 200.0, &domain), 100.0);
        assert_eq!(position_from_value(0.0, 200.0, &domain), 0.0);
    }

    #[test]
    #[should_panic(expected = "track width")]
    fn test_zero_track_width_panics() {
        value_from_position(10.0, 0.0, &SliderDomain::unit());
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(floor(-1.5), -2.0);
        assert_eq!(floor(2.0), 2.0);
        assert_eq!(ceil(1.2), 2.0);
        assert_eq!(ceil(-1.2), -1.0);
        assert_eq!(round_ties_even(-2.5), -2.0);
        assert_eq!(round_ties_even(-3.5), -4.0);
        assert_eq!(floor(1e17), 1e17);
    }
}
