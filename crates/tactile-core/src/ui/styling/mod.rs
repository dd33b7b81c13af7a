//! Styling lookups for interactive controls
//!
//! - [`colors`] - Color constants and palette management
//! - [`style`] - Style values and pure `state -> Style` lookups
//! - [`theme`] - Palette plus interaction geometry
//!
//! # Examples
//!
//! ```ignore
//! let theme = Theme::default();
//! let state = button.interaction_state();
//! let style = ButtonVariant::Primary.style(&theme.palette, state);
//! ```

pub mod colors;
pub mod style;
pub mod theme;

pub use colors::ColorPalette;
pub use style::{ButtonVariant, SliderStyle, Style, selection_style, toggle_style};
pub use theme::Theme;
