use crate::input::{Button, ModMask};

/// X resource id of a window.
pub type WindowId = u32;

/// Pointer location carried by a notification, root-relative and relative to the event window.
///
/// Values are passed to drag handlers exactly as the notification carried them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub root_x: i32,
    pub root_y: i32,
    pub event_x: i32,
    pub event_y: i32,
}

impl PointerPosition {
    pub fn new(root_x: i32, root_y: i32, event_x: i32, event_y: i32) -> Self {
        Self {
            root_x,
            root_y,
            event_x,
            event_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub state: ButtonState,
    // Used only for routing a press to a registration.
    pub window: WindowId,
    pub button: Button,
    pub mods: ModMask,
    pub position: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionEvent {
    pub window: WindowId,
    pub position: PointerPosition,
}

#[derive(derive_more::From, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Button(ButtonEvent),
    Motion(MotionEvent),
}
