//! Listener Module - Callback interfaces for in-process event consumers
//!
//! Three optional listener roles the router dispatches to synchronously:
//! mouse, keyboard, and joystick. Window focus handling is internal to the
//! router and has no listener role.
//!
//! All methods have empty default bodies, so implementors override only the
//! categories they care about. A role with no registered listener silently
//! skips dispatch.
//!
//! # Example
//!
//! ```ignore
//! use input_relay::listener::MouseListener;
//! use input_relay::event::{MouseButtonEvent, MouseMotionEvent};
//!
//! struct CameraController;
//!
//! impl MouseListener for CameraController {
//!     fn mouse_moved(&mut self, event: &MouseMotionEvent) {
//!         // turn deltas into camera yaw/pitch
//!     }
//! }
//! ```

use crate::event::{
    JoyAxisEvent, JoyButtonEvent, KeyEvent, MouseButton, MouseButtonEvent, MouseMotionEvent,
    MouseWheelEvent, TextEvent,
};

// =============================================================================
// MOUSE
// =============================================================================

/// Receiver for mouse events.
pub trait MouseListener {
    fn mouse_moved(&mut self, _event: &MouseMotionEvent) {}

    fn mouse_wheel(&mut self, _event: &MouseWheelEvent) {}

    fn mouse_pressed(&mut self, _event: &MouseButtonEvent, _button: MouseButton) {}

    fn mouse_released(&mut self, _event: &MouseButtonEvent, _button: MouseButton) {}
}

// =============================================================================
// KEYBOARD
// =============================================================================

/// Receiver for keyboard events.
///
/// Auto-repeat presses and releases are filtered out before dispatch; only
/// the first press of a held key (and its release) arrive here.
pub trait KeyboardListener {
    fn key_pressed(&mut self, _event: &KeyEvent) {}

    fn key_released(&mut self, _event: &KeyEvent) {}

    fn text_input(&mut self, _event: &TextEvent) {}
}

// =============================================================================
// JOYSTICK
// =============================================================================

/// Receiver for joystick events.
pub trait JoystickListener {
    fn axis_moved(&mut self, _event: &JoyAxisEvent, _axis: u8) {}

    fn button_pressed(&mut self, _event: &JoyButtonEvent, _button: u8) {}

    fn button_released(&mut self, _event: &JoyButtonEvent, _button: u8) {}
}
