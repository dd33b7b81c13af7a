//! Touch interaction for embedded displays
//!
//! This module provides:
//! - Core touch protocol and redraw tracking
//! - The press/click gesture state machine with a tolerance zone
//! - Interaction states and the pure styling lookups that consume them
//! - Slider value mapping and the dual-thumb range constraint engine
//! - Controls (buttons, toggles, radio buttons, sliders) and a capture-routing group

pub mod components;
pub mod core;
pub mod gesture;
pub mod layouts;
pub mod slider;
pub mod state;
pub mod styling;

// Re-export commonly used items
pub use components::{Button, RadioButton, RangeSlider, Slider, SliderTrack, Toggle};
pub use core::{
    Action, Control, ControlId, DirtyRegion, DragPhase, Redraw, Thumb, TouchEvent, TouchPoint,
    TouchResult, Touchable,
};
pub use gesture::{GestureCore, GestureResponse, TouchPhase, TouchSession};
pub use layouts::ControlGroup;
pub use slider::{LayoutState, RangeSliderPair, SliderDomain};
pub use state::{InteractionState, SelectionState, ToggleState};
pub use styling::{ButtonVariant, ColorPalette, SliderStyle, Style, Theme};
