//! Event Module - Platform input event model
//!
//! Tagged-union representation of the raw events the windowing backend
//! produces. Every payload is `Copy` and allocation-free so events can be
//! stored contiguously in pooled buffer slots and forwarded across threads
//! without touching the heap on the pump thread.
//!
//! # API
//!
//! - `InputEvent` - One platform event, tagged by category
//! - `MouseMotionEvent`, `MouseWheelEvent`, `MouseButtonEvent` - Mouse payloads
//! - `KeyEvent`, `TextEvent` - Keyboard payloads
//! - `JoyAxisEvent`, `JoyButtonEvent` - Joystick payloads
//! - `WindowEventKind` - Window enter/leave/focus sub-events
//! - `Modifiers` - Keyboard modifier flags
//!
//! # Example
//!
//! ```ignore
//! use input_relay::event::{InputEvent, MouseMotionEvent};
//!
//! let event = InputEvent::MouseMotion(MouseMotionEvent {
//!     x: 320, y: 240, dx: 4, dy: -2,
//! });
//! router.route_event(event);
//! ```

use bitflags::bitflags;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Inline capacity of a text input event, in bytes.
///
/// Matches the fixed 32-byte text field of the underlying platform record,
/// which keeps `TextEvent` (and therefore `InputEvent`) `Copy`.
pub const TEXT_EVENT_CAPACITY: usize = 32;

// =============================================================================
// MODIFIERS
// =============================================================================

bitflags! {
    /// Keyboard modifier state attached to key events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u16 {
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
        const GUI   = 1 << 3;
    }
}

// =============================================================================
// MOUSE PAYLOADS
// =============================================================================

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    X1,
    X2,
}

/// Absolute position plus relative delta of one motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseMotionEvent {
    /// X position in window coordinates
    pub x: i32,
    /// Y position in window coordinates
    pub y: i32,
    /// Relative motion since the previous event
    pub dx: i32,
    /// Relative motion since the previous event
    pub dy: i32,
}

/// Wheel scroll amounts (positive = right/away from the user).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseWheelEvent {
    pub dx: i32,
    pub dy: i32,
}

/// Button press/release payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    /// X position at the time of the press/release
    pub x: i32,
    /// Y position at the time of the press/release
    pub y: i32,
    /// 1 for single click, 2 for double click, etc.
    pub clicks: u8,
}

// =============================================================================
// KEYBOARD PAYLOADS
// =============================================================================

/// Key press/release payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Physical key identifier as reported by the platform
    pub scancode: u32,
    /// Modifier state at the time of the event
    pub modifiers: Modifiers,
    /// True when this is an auto-repeat of a held key
    pub repeat: bool,
}

impl KeyEvent {
    /// Create a plain (non-repeat, unmodified) key event.
    pub fn new(scancode: u32) -> Self {
        Self {
            scancode,
            modifiers: Modifiers::empty(),
            repeat: false,
        }
    }
}

/// Text input payload with inline UTF-8 storage.
///
/// Holds up to [`TEXT_EVENT_CAPACITY`] bytes; longer input is truncated at
/// the last full character that fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEvent {
    bytes: [u8; TEXT_EVENT_CAPACITY],
    len: u8,
}

impl TextEvent {
    /// Create a text event from a string slice, truncating at a character
    /// boundary if it exceeds the inline capacity.
    pub fn new(text: &str) -> Self {
        let mut end = text.len().min(TEXT_EVENT_CAPACITY);
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }

        let mut bytes = [0u8; TEXT_EVENT_CAPACITY];
        bytes[..end].copy_from_slice(&text.as_bytes()[..end]);
        Self {
            bytes,
            len: end as u8,
        }
    }

    /// The committed text.
    pub fn as_str(&self) -> &str {
        // The buffer only ever holds a prefix of a valid &str.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }

    /// True when no text survived truncation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// =============================================================================
// JOYSTICK PAYLOADS
// =============================================================================

/// Joystick axis motion payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyAxisEvent {
    /// Device index the axis belongs to
    pub device: u32,
    pub axis: u8,
    /// Raw axis value in the platform's native range
    pub value: i16,
}

/// Joystick button press/release payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyButtonEvent {
    /// Device index the button belongs to
    pub device: u32,
    pub button: u8,
}

// =============================================================================
// WINDOW SUB-EVENTS
// =============================================================================

/// Window-level sub-events the router reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEventKind {
    /// Pointer entered the window
    Enter,
    /// Pointer left the window
    Leave,
    FocusGained,
    FocusLost,
}

// =============================================================================
// INPUT EVENT
// =============================================================================

/// One platform input event, tagged by semantic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MouseMotion(MouseMotionEvent),
    MouseWheel(MouseWheelEvent),
    MouseButtonDown(MouseButtonEvent),
    MouseButtonUp(MouseButtonEvent),
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    TextInput(TextEvent),
    JoyAxisMotion(JoyAxisEvent),
    JoyButtonDown(JoyButtonEvent),
    JoyButtonUp(JoyButtonEvent),
    /// A joystick appeared (device index); hot-plug is not handled
    JoyDeviceAdded(u32),
    /// A joystick disappeared (device index); hot-plug is not handled
    JoyDeviceRemoved(u32),
    Window(WindowEventKind),
    /// Event type the router does not recognize; silently ignored
    Unknown,
}

// =============================================================================
// TESTS
// =============================================================================
