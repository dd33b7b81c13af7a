//! Interactive controls built on the gesture core and value mapping

pub mod button;
pub mod radio;
pub mod range_slider;
pub mod slider;
pub mod toggle;

pub use button::Button;
pub use radio::RadioButton;
pub use range_slider::RangeSlider;
pub use slider::{Slider, SliderTrack};
pub use toggle::Toggle;

use crate::ui::core::TouchEvent;
use crate::ui::gesture::{GestureCore, GestureResponse};

/// Feed one touch event into a control's gesture core.
///
/// A press only starts a session when it lands inside the control's bounds;
/// everything after that is judged against the tolerance zone.
pub(crate) fn dispatch_gesture(gesture: &mut GestureCore, event: TouchEvent) -> GestureResponse {
    match event {
        TouchEvent::Press(point) => {
            let point = point.to_point();
            if gesture.bounds().contains(point) {
                gesture.begin(point)
            } else {
                GestureResponse::Ignored
            }
        }
        TouchEvent::Drag(point) => gesture.move_to(point.to_point()),
        TouchEvent::Release(point) => gesture.end(point.to_point()),
        TouchEvent::Cancel => gesture.cancel(),
    }
}
