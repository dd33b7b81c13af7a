//! Slider value mapping
//!
//! - [`mapper`] converts track positions to bounded, optionally stepped values
//!   and back.
//! - [`range`] coordinates the two thumbs of a range slider under a minimum
//!   separation.

pub mod mapper;
pub mod range;

pub use mapper::{SliderDomain, position_from_value, value_from_position};
pub use range::{LayoutState, RangeSliderPair};
