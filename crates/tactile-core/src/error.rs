//! Error types for slider domains and range-slider layouts
//!
//! Neither error is surfaced by interactive operations: controls built from an
//! invalid configuration become inert and keep the error around so the host
//! can report it.

use thiserror_no_std::Error;

/// Reasons a [`SliderDomain`](crate::ui::slider::SliderDomain) cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// Lower bound is not strictly below the upper bound
    #[error("Invalid domain bounds (min {min} >= max {max})")]
    InvalidBounds {
        /// Requested lower bound
        min: f64,
        /// Requested upper bound
        max: f64,
    },

    /// Step is not positive or exceeds the domain width
    #[error("Invalid step {step} for domain width {width}")]
    InvalidStep {
        /// Requested step
        step: f64,
        /// Width of the domain (max - min)
        width: f64,
    },

    /// A bound or the step is NaN or infinite
    #[error("Domain parameters must be finite")]
    NonFinite,
}

/// Result type for domain construction
pub type DomainResult<T> = Result<T, DomainError>;

/// Reasons a range slider pair is constructed in the layout-invalid state
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeLayoutError {
    /// The initial thumbs are closer together than the minimum difference
    #[error("Thumbs violate minimum separation (low {low}, high {high}, min difference {min_difference})")]
    SeparationViolated {
        /// Initial low value
        low: f64,
        /// Initial high value
        high: f64,
        /// Required minimum difference
        min_difference: f64,
    },

    /// The minimum difference is negative or not finite
    #[error("Invalid minimum difference: {min_difference}")]
    InvalidMinDifference {
        /// Requested minimum difference
        min_difference: f64,
    },

    /// A thumb value is NaN or infinite
    #[error("Thumb values must be finite")]
    NonFinite,

    /// The underlying domain could not be built
    #[error("Invalid domain: {0}")]
    Domain(#[from] DomainError),
}
