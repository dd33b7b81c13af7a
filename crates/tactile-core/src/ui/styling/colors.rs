//! Color definitions and palette management
//!
//! Colors are RGB565 for 16-bit displays. To convert from 8-bit RGB:
//! R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Accent for interactive elements - azure
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(0 >> 3, 122 >> 2, 255 >> 3);

/// Accent while pressed - deeper azure
pub const COLOR_ACCENT_PRESSED: Rgb565 = Rgb565::new(0 >> 3, 88 >> 2, 208 >> 3);

/// Success/on color for switches - green
pub const COLOR_ON: Rgb565 = Rgb565::new(52 >> 3, 199 >> 2, 89 >> 3);

/// Destructive actions - red
pub const COLOR_DESTRUCTIVE: Rgb565 = Rgb565::new(255 >> 3, 59 >> 2, 48 >> 3);

/// Dark surface - near black
pub const COLOR_SURFACE_DARK: Rgb565 = Rgb565::new(28 >> 3, 28 >> 2, 30 >> 3);

/// Light surface - off white
pub const COLOR_SURFACE_LIGHT: Rgb565 = Rgb565::new(242 >> 3, 242 >> 2, 247 >> 3);

/// Inactive track fill - mid gray
pub const COLOR_TRACK: Rgb565 = Rgb565::new(120 >> 3, 120 >> 2, 128 >> 3);

// ============================================================================
// Text Colors
// ============================================================================

pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);

// ============================================================================
// Color Palette
// ============================================================================

/// Colors the state lookups draw from.
///
/// Palettes are plain values built by [`ColorPalette::dark`] or
/// [`ColorPalette::light`]; controls never share or mutate one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Accent for enabled interactive elements
    pub accent: Rgb565,

    /// Accent while a control is pressed
    pub accent_pressed: Rgb565,

    /// Fill of a switch that is on
    pub on: Rgb565,

    /// Fill of inactive tracks and switches that are off
    pub track: Rgb565,

    /// Destructive action color
    pub destructive: Rgb565,

    /// Background for controls and panels
    pub surface: Rgb565,

    /// Text on top of accent fills
    pub text_on_accent: Rgb565,

    /// Primary text color
    pub text_primary: Rgb565,

    /// Text and fills of disabled controls
    pub text_disabled: Rgb565,

    /// Outline color
    pub border: Rgb565,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    pub fn dark() -> Self {
        Self {
            accent: COLOR_ACCENT,
            accent_pressed: COLOR_ACCENT_PRESSED,
            on: COLOR_ON,
            track: COLOR_TRACK,
            destructive: COLOR_DESTRUCTIVE,
            surface: COLOR_SURFACE_DARK,
            text_on_accent: WHITE,
            text_primary: WHITE,
            text_disabled: GRAY,
            border: DARK_GRAY,
        }
    }

    pub fn light() -> Self {
        Self {
            accent: COLOR_ACCENT,
            accent_pressed: COLOR_ACCENT_PRESSED,
            on: COLOR_ON,
            track: COLOR_TRACK,
            destructive: COLOR_DESTRUCTIVE,
            surface: COLOR_SURFACE_LIGHT,
            text_on_accent: WHITE,
            text_primary: BLACK,
            text_disabled: LIGHT_GRAY,
            border: LIGHT_GRAY,
        }
    }
}
