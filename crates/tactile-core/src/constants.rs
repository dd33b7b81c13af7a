//! Geometry defaults for interactive controls

// ============================================================================
// Gesture
// ============================================================================

/// Extra distance beyond a control's bounds, on each side, within which an
/// in-progress touch still counts as being on the control
pub const DEFAULT_TOLERANCE_MARGIN_PX: u32 = 20;

// ============================================================================
// Slider Geometry
// ============================================================================

/// Height of a slider track in pixels
pub const DEFAULT_TRACK_HEIGHT_PX: u32 = 4;

/// Corner radius of a slider track in pixels
pub const DEFAULT_TRACK_CORNER_RADIUS_PX: u32 = 2;

/// Diameter of a slider thumb in pixels
pub const DEFAULT_THUMB_SIZE_PX: u32 = 24;

// ============================================================================
// Button Geometry
// ============================================================================

/// Default corner radius of button backgrounds in pixels
pub const DEFAULT_BUTTON_CORNER_RADIUS_PX: u32 = 8;

/// Maximum label length stored inline by buttons
pub const MAX_LABEL_LEN: usize = 32;
