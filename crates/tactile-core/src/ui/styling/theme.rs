//! Theme composition
//!
//! A [`Theme`] bundles a palette with the interaction geometry. Themes are
//! built explicitly at the call site; nothing here reads shared defaults
//! from other styles.

use super::colors::ColorPalette;
use crate::config::InteractionConfig;

/// Palette and geometry handed to controls when they are built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub palette: ColorPalette,
    pub geometry: InteractionConfig,
}

impl Default for Theme {
    /// Returns the default theme (dark mode)
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
            geometry: InteractionConfig::default(),
        }
    }

    pub fn light() -> Self {
        Self {
            palette: ColorPalette::light(),
            geometry: InteractionConfig::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: InteractionConfig) -> Self {
        self.geometry = geometry;
        self
    }
}
