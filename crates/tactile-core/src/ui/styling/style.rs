//! Style values and per-state lookups
//!
//! Every lookup here is a pure function from an interaction state to a
//! [`Style`]; controls keep no per-state color fields of their own.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};

use super::colors::{ColorPalette, WHITE};
use crate::ui::state::{InteractionState, SelectionState, ToggleState};

// ============================================================================
// Style
// ============================================================================

/// Visual style of a control in one state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    /// Background fill color (if any)
    pub background_color: Option<Rgb565>,

    /// Foreground/text color (if any)
    pub foreground_color: Option<Rgb565>,

    /// Border color (if any)
    pub border_color: Option<Rgb565>,

    /// Border width in pixels (0 = no border)
    pub border_width: u32,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Sets the border color and width. A width of 0 disables the border.
    pub fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    /// Converts this style to a `PrimitiveStyle` for embedded-graphics drawing
    pub fn to_primitive_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();

        if let Some(bg) = self.background_color {
            builder = builder.fill_color(bg);
        }

        if let Some(border) = self.border_color
            && self.border_width > 0
        {
            builder = builder.stroke_color(border).stroke_width(self.border_width);
        }

        builder.build()
    }
}

// ============================================================================
// Button Variants
// ============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Filled accent button for main actions
    Primary,
    /// Filled red button for destructive actions
    Destructive,
    /// Surface fill with an outline
    Outline,
    /// Text only
    Text,
}

impl ButtonVariant {
    /// Resolve the variant's style for one interaction state
    pub fn style(&self, palette: &ColorPalette, state: InteractionState) -> Style {
        match (self, state) {
            (ButtonVariant::Text, InteractionState::Disabled) => {
                Style::new().with_foreground(palette.text_disabled)
            }
            (ButtonVariant::Outline, InteractionState::Disabled) => Style::new()
                .with_background(palette.surface)
                .with_foreground(palette.text_disabled)
                .with_border(palette.text_disabled, 2),
            (_, InteractionState::Disabled) => Style::new()
                .with_background(palette.surface)
                .with_foreground(palette.text_disabled),

            (ButtonVariant::Primary, InteractionState::Enabled) => Style::new()
                .with_background(palette.accent)
                .with_foreground(palette.text_on_accent),
            (ButtonVariant::Primary, InteractionState::Pressed) => Style::new()
                .with_background(palette.accent_pressed)
                .with_foreground(palette.text_on_accent),

            (ButtonVariant::Destructive, InteractionState::Enabled) => Style::new()
                .with_background(palette.destructive)
                .with_foreground(palette.text_on_accent),
            (ButtonVariant::Destructive, InteractionState::Pressed) => Style::new()
                .with_background(darken(palette.destructive))
                .with_foreground(palette.text_on_accent),

            (ButtonVariant::Outline, InteractionState::Enabled) => Style::new()
                .with_background(palette.surface)
                .with_foreground(palette.text_primary)
                .with_border(palette.border, 2),
            (ButtonVariant::Outline, InteractionState::Pressed) => Style::new()
                .with_background(palette.surface)
                .with_foreground(palette.accent_pressed)
                .with_border(palette.accent_pressed, 2),

            (ButtonVariant::Text, InteractionState::Enabled) => {
                Style::new().with_foreground(palette.accent)
            }
            (ButtonVariant::Text, InteractionState::Pressed) => {
                Style::new().with_foreground(palette.accent_pressed)
            }
        }
    }
}

/// Darken a color for its pressed appearance
fn darken(color: Rgb565) -> Rgb565 {
    use embedded_graphics::pixelcolor::RgbColor;

    Rgb565::new(
        color.r().saturating_sub(4),
        color.g().saturating_sub(8),
        color.b().saturating_sub(4),
    )
}

// ============================================================================
// Toggle / Selection
// ============================================================================

/// Style of a switch or checkbox
pub fn toggle_style(palette: &ColorPalette, state: ToggleState) -> Style {
    match state {
        ToggleState::Off => Style::new()
            .with_background(palette.track)
            .with_foreground(WHITE),
        ToggleState::PressedOff => Style::new()
            .with_background(darken(palette.track))
            .with_foreground(WHITE),
        ToggleState::On => Style::new()
            .with_background(palette.on)
            .with_foreground(WHITE),
        ToggleState::PressedOn => Style::new()
            .with_background(darken(palette.on))
            .with_foreground(WHITE),
        ToggleState::Disabled => Style::new()
            .with_background(palette.surface)
            .with_foreground(palette.text_disabled),
    }
}

/// Style of a radio button
pub fn selection_style(palette: &ColorPalette, state: SelectionState) -> Style {
    match state {
        SelectionState::Unselected => Style::new().with_border(palette.border, 2),
        SelectionState::PressedUnselected => Style::new()
            .with_background(palette.surface)
            .with_border(palette.accent_pressed, 2),
        SelectionState::Selected => Style::new()
            .with_background(palette.accent)
            .with_border(palette.accent, 2),
        SelectionState::PressedSelected => Style::new()
            .with_background(palette.accent_pressed)
            .with_border(palette.accent_pressed, 2),
        SelectionState::Disabled => Style::new().with_border(palette.text_disabled, 2),
    }
}

// ============================================================================
// Slider
// ============================================================================

/// Per-state colors of a slider's track and thumb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    /// Portion of the track between the start (or low thumb) and the thumb
    pub active_track: Rgb565,
    pub inactive_track: Rgb565,
    pub thumb: Rgb565,
}

impl SliderStyle {
    pub fn resolve(palette: &ColorPalette, state: InteractionState) -> Self {
        match state {
            InteractionState::Enabled => Self {
                active_track: palette.accent,
                inactive_track: palette.track,
                thumb: WHITE,
            },
            InteractionState::Pressed => Self {
                active_track: palette.accent_pressed,
                inactive_track: palette.track,
                thumb: palette.text_primary,
            },
            InteractionState::Disabled => Self {
                active_track: palette.text_disabled,
                inactive_track: palette.surface,
                thumb: palette.text_disabled,
            },
        }
    }
}
