/// Key actions and bindings

use bitflags::bitflags;

bitflags! {
    /// Camera action triggered by a held key
    ///
    /// Translations move the camera in the frame of its yaw, rotations add
    /// to roll (RX), pitch (RY) or yaw (RZ), distance changes the orbit
    /// offset. A binding may combine several flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyAction: u32 {
        const X_INC = 1 << 0;
        const X_DEC = 1 << 1;
        const Y_INC = 1 << 2;
        const Y_DEC = 1 << 3;
        const Z_INC = 1 << 4;
        const Z_DEC = 1 << 5;
        const RX_INC = 1 << 6;
        const RX_DEC = 1 << 7;
        const RY_INC = 1 << 8;
        const RY_DEC = 1 << 9;
        const RZ_INC = 1 << 10;
        const RZ_DEC = 1 << 11;
        const DISTANCE_INC = 1 << 12;
        const DISTANCE_DEC = 1 << 13;
    }
}

/// Associates a trigger (key code of any input backend) with an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding<T> {
    pub trigger: T,
    pub action: KeyAction,
}

impl<T> KeyBinding<T> {
    pub fn new(trigger: T, action: KeyAction) -> Self {
        Self { trigger, action }
    }
}
