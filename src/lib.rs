//! # input-relay
//!
//! Input event routing with pooled cross-thread handoff for windowed
//! applications.
//!
//! The crate translates low-level windowing/input events (mouse motion,
//! buttons, wheel, keyboard, text, joystick, window focus/visibility) into
//! two outputs: synchronous callbacks to in-process listener traits, and
//! copies forwarded to a logic thread through a channel, stored in a
//! fixed-capacity slot pool so the pump thread never allocates per event.
//!
//! ## Architecture
//!
//! ```text
//! platform pump → InputEventRouter → listener callbacks (same thread)
//!                        │
//!                        └→ EventBufferPool → LogicMessage channel → logic thread
//!                                ↑                                       │
//!                                └────────── release(SlotId) ────────────┘
//! ```
//!
//! The router also owns the window-focus/mouse-grab policy and a
//! warp-and-compensate fallback that emulates relative mouse mode on
//! backends without native support.
//!
//! ## Modules
//!
//! - [`event`] - Tagged-union event model, all payloads `Copy`
//! - [`listener`] - Mouse/keyboard/joystick listener traits
//! - [`window`] - `WindowControl` platform collaborator trait
//! - [`pool`] - Fixed-capacity buffer slots and the handoff free stack
//! - [`logic`] - Messages forwarded to the logic thread
//! - [`router`] - The router itself: policy, dispatch, forwarding

pub mod event;
pub mod listener;
pub mod logic;
pub mod pool;
pub mod router;
pub mod window;

// Re-export commonly used items
pub use event::{
    InputEvent, JoyAxisEvent, JoyButtonEvent, KeyEvent, Modifiers, MouseButton, MouseButtonEvent,
    MouseMotionEvent, MouseWheelEvent, TextEvent, WindowEventKind, TEXT_EVENT_CAPACITY,
};

pub use listener::{JoystickListener, KeyboardListener, MouseListener};

pub use logic::{LogicMessage, LogicSender};

pub use pool::{EventBufferPool, EventRef, SlotId, StoredEvent, DEFAULT_EVENTS_PER_SLOT};

pub use router::{InputEventRouter, MouseFlags, RouterConfig};

pub use window::{PlatformError, WindowControl};
