//! Interaction states consumed by styling lookups
//!
//! Every control family resolves its visual state through
//! [`InteractionState::resolve`]; families with an extra semantic axis
//! (toggle on/off, radio selected/unselected) cross that axis with the
//! resolved state, so `Disabled` absorbs every combination the same way.

/// Base interaction state of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Enabled,
    Pressed,
    Disabled,
}

impl InteractionState {
    /// Compose external enablement with the gesture press flag.
    pub const fn resolve(enabled: bool, pressed: bool) -> Self {
        match (enabled, pressed) {
            (false, _) => InteractionState::Disabled,
            (true, true) => InteractionState::Pressed,
            (true, false) => InteractionState::Enabled,
        }
    }

    pub const fn is_disabled(self) -> bool {
        matches!(self, InteractionState::Disabled)
    }

    pub const fn is_pressed(self) -> bool {
        matches!(self, InteractionState::Pressed)
    }
}

/// State of an on/off control (switch, checkbox)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleState {
    Off,
    On,
    PressedOff,
    PressedOn,
    Disabled,
}

impl ToggleState {
    pub const fn resolve(enabled: bool, pressed: bool, on: bool) -> Self {
        match (InteractionState::resolve(enabled, pressed), on) {
            (InteractionState::Disabled, _) => ToggleState::Disabled,
            (InteractionState::Pressed, false) => ToggleState::PressedOff,
            (InteractionState::Pressed, true) => ToggleState::PressedOn,
            (InteractionState::Enabled, false) => ToggleState::Off,
            (InteractionState::Enabled, true) => ToggleState::On,
        }
    }

    /// Project back onto the base interaction axis
    pub const fn interaction(self) -> InteractionState {
        match self {
            ToggleState::Off | ToggleState::On => InteractionState::Enabled,
            ToggleState::PressedOff | ToggleState::PressedOn => InteractionState::Pressed,
            ToggleState::Disabled => InteractionState::Disabled,
        }
    }
}

/// State of a selectable control (radio button, segmented item)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    Unselected,
    Selected,
    PressedUnselected,
    PressedSelected,
    Disabled,
}

impl SelectionState {
    pub const fn resolve(enabled: bool, pressed: bool, selected: bool) -> Self {
        match (InteractionState::resolve(enabled, pressed), selected) {
            (InteractionState::Disabled, _) => SelectionState::Disabled,
            (InteractionState::Pressed, false) => SelectionState::PressedUnselected,
            (InteractionState::Pressed, true) => SelectionState::PressedSelected,
            (InteractionState::Enabled, false) => SelectionState::Unselected,
            (InteractionState::Enabled, true) => SelectionState::Selected,
        }
    }

    pub const fn interaction(self) -> InteractionState {
        match self {
            SelectionState::Unselected | SelectionState::Selected => InteractionState::Enabled,
            SelectionState::PressedUnselected | SelectionState::PressedSelected => {
                InteractionState::Pressed
            }
            SelectionState::Disabled => InteractionState::Disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOLS: [bool; 2] = [false, true];

    #[test]
    fn test_resolve_truth_table() {
        assert_eq!(InteractionState::resolve(false, false), InteractionState::Disabled);
        assert_eq!(InteractionState::resolve(false, true), InteractionState::Disabled);
        assert_eq!(InteractionState::resolve(true, true), InteractionState::Pressed);
        assert_eq!(InteractionState::resolve(true, false), InteractionState::Enabled);
    }

    #[test]
    fn test_disabled_absorbs_semantic_axis() {
        for pressed in BOOLS {
            for on in BOOLS {
                assert_eq!(ToggleState::resolve(false, pressed, on), ToggleState::Disabled);
                assert_eq!(
                    SelectionState::resolve(false, pressed, on),
                    SelectionState::Disabled
                );
            }
        }
    }

    #[test]
    fn test_semantic_states_agree_with_base_rule() {
        for enabled in BOOLS {
            for pressed in BOOLS {
                let base = InteractionState::resolve(enabled, pressed);
                for on in BOOLS {
                    assert_eq!(ToggleState::resolve(enabled, pressed, on).interaction(), base);
                    assert_eq!(
                        SelectionState::resolve(enabled, pressed, on).interaction(),
                        base
                    );
                }
            }
        }
    }

    #[test]
    fn test_toggle_cross_product() {
        assert_eq!(ToggleState::resolve(true, false, true), ToggleState::On);
        assert_eq!(ToggleState::resolve(true, true, false), ToggleState::PressedOff);
        assert_eq!(ToggleState::resolve(true, true, true), ToggleState::PressedOn);
        assert_eq!(
            SelectionState::resolve(true, false, true),
            SelectionState::Selected
        );
    }
}
