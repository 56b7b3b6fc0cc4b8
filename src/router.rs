//! Router Module - Focus/grab policy, dispatch and cross-thread forwarding
//!
//! [`InputEventRouter`] receives one platform event at a time from the pump
//! loop, applies the window-focus/mouse-grab policy, dispatches to the
//! registered listener roles, and forwards a pooled copy of the event to an
//! attached logic consumer.
//!
//! The router runs single-threaded inside the pump loop; nothing here
//! blocks, suspends or times out. The buffer pool is the only resource
//! shared with the logic thread, and it moves by slot-id handoff rather
//! than locking (see [`crate::pool`]).
//!
//! # API
//!
//! - `route_event(event)` - Route one platform event
//! - `set_grab_pointer`, `set_mouse_relative`, `set_mouse_visible` - Intents
//! - `attach_mouse_listener`, `attach_keyboard_listener`,
//!   `attach_joystick_listener` - Register listener roles
//! - `attach_logic(sender)` - Start forwarding to the logic thread
//! - `release_event_buffer(id)` - Return a drained slot on the consumer's behalf
//!
//! # Example
//!
//! ```ignore
//! use input_relay::router::{InputEventRouter, RouterConfig};
//!
//! let mut router = InputEventRouter::new(window, RouterConfig::default());
//! router.attach_logic(tx);
//! router.set_mouse_relative(true);
//!
//! while let Some(event) = pump.poll() {
//!     router.route_event(event);
//! }
//! ```

use bitflags::bitflags;
use tracing::{debug, trace, warn};

use crate::event::{InputEvent, MouseMotionEvent, WindowEventKind};
use crate::listener::{JoystickListener, KeyboardListener, MouseListener};
use crate::logic::{LogicMessage, LogicSender};
use crate::pool::{EventBufferPool, SlotId, DEFAULT_EVENTS_PER_SLOT};
use crate::window::WindowControl;

// =============================================================================
// MOUSE FLAGS
// =============================================================================

bitflags! {
    /// Pointer policy state.
    ///
    /// `WANT_*` bits are caller intents; the `*_ACTIVE` bits are what the
    /// policy actually granted given window entry and focus.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MouseFlags: u16 {
        const WANT_RELATIVE   = 1 << 0;
        const WANT_GRAB       = 1 << 1;
        const WANT_VISIBLE    = 1 << 2;
        const RELATIVE_ACTIVE = 1 << 3;
        /// Relative mode is emulated by warp-and-compensate
        const MANUAL_WRAP     = 1 << 4;
        const GRAB_ACTIVE     = 1 << 5;
        const MOUSE_IN_WINDOW = 1 << 6;
        const WINDOW_FOCUS    = 1 << 7;
    }
}

// =============================================================================
// WARP COMPENSATION
// =============================================================================

/// Warp-and-compensate state machine.
///
/// After issuing a pointer warp the router waits for the synthetic motion
/// event the warp itself generates and eats it. Matching is by exact
/// coordinate equality with no timing bound; genuine user motion landing
/// exactly on the warp target is indistinguishable from the echo, so this
/// is best effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WarpState {
    Idle,
    AwaitingEcho { x: i32, y: i32 },
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Construction-time configuration.
///
/// The three pointer intents can also be changed at any time through the
/// router's setters; defaults mirror a freshly created game window (pointer
/// free, cursor hidden, absolute motion).
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub grab_pointer: bool,
    pub relative_mouse: bool,
    pub cursor_visible: bool,
    /// Event records per pooled buffer slot
    pub events_per_slot: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            grab_pointer: false,
            relative_mouse: false,
            cursor_visible: false,
            events_per_slot: DEFAULT_EVENTS_PER_SLOT,
        }
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Translates platform input events into listener callbacks and pooled
/// copies forwarded to the logic thread.
pub struct InputEventRouter<W: WindowControl> {
    window: W,
    mouse_listener: Option<Box<dyn MouseListener>>,
    keyboard_listener: Option<Box<dyn KeyboardListener>>,
    joystick_listener: Option<Box<dyn JoystickListener>>,
    logic: Option<LogicSender>,
    pool: EventBufferPool,
    flags: MouseFlags,
    warp: WarpState,
}

impl<W: WindowControl> InputEventRouter<W> {
    /// Create a router for `window` and apply the configured intents.
    pub fn new(window: W, config: RouterConfig) -> Self {
        let mut flags = MouseFlags::MOUSE_IN_WINDOW | MouseFlags::WINDOW_FOCUS;
        flags.set(MouseFlags::WANT_GRAB, config.grab_pointer);
        flags.set(MouseFlags::WANT_RELATIVE, config.relative_mouse);
        flags.set(MouseFlags::WANT_VISIBLE, config.cursor_visible);

        let mut router = Self {
            window,
            mouse_listener: None,
            keyboard_listener: None,
            joystick_listener: None,
            logic: None,
            pool: EventBufferPool::new(config.events_per_slot),
            flags,
            warp: WarpState::Idle,
        };
        router.update_mouse_settings();
        router
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    pub fn attach_mouse_listener(&mut self, listener: Box<dyn MouseListener>) {
        self.mouse_listener = Some(listener);
    }

    pub fn attach_keyboard_listener(&mut self, listener: Box<dyn KeyboardListener>) {
        self.keyboard_listener = Some(listener);
    }

    pub fn attach_joystick_listener(&mut self, listener: Box<dyn JoystickListener>) {
        self.joystick_listener = Some(listener);
    }

    /// Start forwarding routed events to the logic thread.
    pub fn attach_logic(&mut self, sender: LogicSender) {
        self.logic = Some(sender);
    }

    // -------------------------------------------------------------------------
    // Pointer intents
    // -------------------------------------------------------------------------

    /// Request (or drop) pointer confinement to the window.
    pub fn set_grab_pointer(&mut self, grab: bool) {
        self.flags.set(MouseFlags::WANT_GRAB, grab);
        self.update_mouse_settings();
    }

    /// Request (or drop) relative mouse reporting.
    pub fn set_mouse_relative(&mut self, relative: bool) {
        self.flags.set(MouseFlags::WANT_RELATIVE, relative);
        self.update_mouse_settings();
    }

    /// Request the cursor be visible while the window has focus.
    pub fn set_mouse_visible(&mut self, visible: bool) {
        self.flags.set(MouseFlags::WANT_VISIBLE, visible);
        self.update_mouse_settings();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn mouse_flags(&self) -> MouseFlags {
        self.flags
    }

    pub fn grab_active(&self) -> bool {
        self.flags.contains(MouseFlags::GRAB_ACTIVE)
    }

    pub fn relative_active(&self) -> bool {
        self.flags.contains(MouseFlags::RELATIVE_ACTIVE)
    }

    pub fn manual_wrap_active(&self) -> bool {
        self.flags.contains(MouseFlags::MANUAL_WRAP)
    }

    pub fn pool(&self) -> &EventBufferPool {
        &self.pool
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Route one platform event: zero or one listener callback, plus one
    /// forwarded copy when a logic consumer is attached.
    ///
    /// Suppressed warp echoes, joystick hot-plug and unknown event types
    /// produce neither.
    pub fn route_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMotion(motion) => {
                // Synthetic echo of our own warp: eat it entirely.
                if self.consume_warp_echo(&motion) {
                    return;
                }

                // In relative mode, motion only reaches the listener while
                // the window has focus.
                if !self.flags.contains(MouseFlags::WANT_RELATIVE)
                    || self.flags.contains(MouseFlags::WINDOW_FOCUS)
                {
                    if let Some(listener) = self.mouse_listener.as_mut() {
                        listener.mouse_moved(&motion);
                    }
                }

                if self.flags.contains(MouseFlags::WINDOW_FOCUS) {
                    self.wrap_mouse_pointer(&motion);
                }

                self.forward(event);
            }
            InputEvent::MouseWheel(wheel) => {
                if let Some(listener) = self.mouse_listener.as_mut() {
                    listener.mouse_wheel(&wheel);
                }
                self.forward(event);
            }
            InputEvent::MouseButtonDown(button) => {
                if let Some(listener) = self.mouse_listener.as_mut() {
                    listener.mouse_pressed(&button, button.button);
                }
                self.forward(event);
            }
            InputEvent::MouseButtonUp(button) => {
                if let Some(listener) = self.mouse_listener.as_mut() {
                    listener.mouse_released(&button, button.button);
                }
                self.forward(event);
            }
            InputEvent::KeyDown(key) => {
                if !key.repeat {
                    if let Some(listener) = self.keyboard_listener.as_mut() {
                        listener.key_pressed(&key);
                    }
                }
                self.forward(event);
            }
            InputEvent::KeyUp(key) => {
                if !key.repeat {
                    if let Some(listener) = self.keyboard_listener.as_mut() {
                        listener.key_released(&key);
                    }
                }
                self.forward(event);
            }
            InputEvent::TextInput(text) => {
                if let Some(listener) = self.keyboard_listener.as_mut() {
                    listener.text_input(&text);
                }
                self.forward(event);
            }
            InputEvent::JoyAxisMotion(axis) => {
                if let Some(listener) = self.joystick_listener.as_mut() {
                    listener.axis_moved(&axis, axis.axis);
                }
                self.forward(event);
            }
            InputEvent::JoyButtonDown(button) => {
                if let Some(listener) = self.joystick_listener.as_mut() {
                    listener.button_pressed(&button, button.button);
                }
                self.forward(event);
            }
            InputEvent::JoyButtonUp(button) => {
                if let Some(listener) = self.joystick_listener.as_mut() {
                    listener.button_released(&button, button.button);
                }
                self.forward(event);
            }
            InputEvent::JoyDeviceAdded(_) | InputEvent::JoyDeviceRemoved(_) => {
                // Hot-plug is not handled: no dispatch, no forward.
            }
            InputEvent::Window(kind) => {
                self.handle_window_event(kind);
                self.forward(event);
            }
            InputEvent::Unknown => {}
        }
    }

    /// Return a drained slot to the pool on the consumer's behalf.
    pub fn release_event_buffer(&mut self, id: SlotId) {
        self.pool.release(id);
    }

    // -------------------------------------------------------------------------
    // Focus/grab policy
    // -------------------------------------------------------------------------

    fn handle_window_event(&mut self, kind: WindowEventKind) {
        match kind {
            WindowEventKind::Enter => self.flags.insert(MouseFlags::MOUSE_IN_WINDOW),
            WindowEventKind::Leave => self.flags.remove(MouseFlags::MOUSE_IN_WINDOW),
            WindowEventKind::FocusGained => self.flags.insert(MouseFlags::WINDOW_FOCUS),
            WindowEventKind::FocusLost => self.flags.remove(MouseFlags::WINDOW_FOCUS),
        }
        self.update_mouse_settings();
    }

    fn update_mouse_settings(&mut self) {
        let grab = self.flags.contains(
            MouseFlags::WANT_GRAB | MouseFlags::MOUSE_IN_WINDOW | MouseFlags::WINDOW_FOCUS,
        );
        self.flags.set(MouseFlags::GRAB_ACTIVE, grab);
        self.window.set_grab(grab);

        // An unfocused window always shows the cursor.
        let visible = self.flags.contains(MouseFlags::WANT_VISIBLE)
            || !self.flags.contains(MouseFlags::WINDOW_FOCUS);
        self.window.show_cursor(visible);

        let relative = self.flags.contains(
            MouseFlags::WANT_RELATIVE | MouseFlags::MOUSE_IN_WINDOW | MouseFlags::WINDOW_FOCUS,
        );
        if self.flags.contains(MouseFlags::RELATIVE_ACTIVE) == relative {
            return;
        }

        self.flags.set(MouseFlags::RELATIVE_ACTIVE, relative);
        self.flags.remove(MouseFlags::MANUAL_WRAP);

        if let Err(err) = self.window.set_relative_mouse(relative) {
            if relative {
                warn!("native relative mouse unavailable, wrapping pointer manually: {err}");
                self.flags.insert(MouseFlags::MANUAL_WRAP);
            }
        }
        debug!(grab, relative, "recomputed pointer policy");

        // Motion still queued in the backend carries deltas from the old
        // mode; it must not be delivered.
        self.window.flush_motion_events();
    }

    // -------------------------------------------------------------------------
    // Warp-and-compensate emulation
    // -------------------------------------------------------------------------

    fn warp_mouse(&mut self, x: i32, y: i32) {
        self.window.warp_mouse(x, y);
        self.warp = WarpState::AwaitingEcho { x, y };
    }

    /// Keep the pointer inside the window under emulated relative mode by
    /// recentering it whenever it nears an edge.
    fn wrap_mouse_pointer(&mut self, motion: &MouseMotionEvent) {
        if !self.flags.contains(
            MouseFlags::RELATIVE_ACTIVE | MouseFlags::MANUAL_WRAP | MouseFlags::GRAB_ACTIVE,
        ) {
            return;
        }

        let (width, height) = self.window.size();

        // One full window width/height of fudge, as originally shipped.
        let fudge_x = width;
        let fudge_y = height;

        if motion.x - fudge_x < 0
            || motion.x + fudge_x > width
            || motion.y - fudge_y < 0
            || motion.y + fudge_y > height
        {
            self.warp_mouse(width / 2, height / 2);
        }
    }

    /// True when `motion` is the synthetic echo of the last warp.
    fn consume_warp_echo(&mut self, motion: &MouseMotionEvent) -> bool {
        match self.warp {
            WarpState::AwaitingEcho { x, y } if motion.x == x && motion.y == y => {
                trace!(x, y, "suppressed synthetic warp echo");
                self.warp = WarpState::Idle;
                true
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Forwarding
    // -------------------------------------------------------------------------

    fn forward(&mut self, event: InputEvent) {
        if self.logic.is_none() {
            return;
        }

        let stored = self.pool.store(event);

        let mut disconnected = false;
        if let Some(logic) = self.logic.as_ref() {
            if let Some(id) = stored.opened {
                disconnected = logic.send(LogicMessage::SlotInUse(id)).is_err();
            }
            if !disconnected {
                disconnected = logic
                    .send(LogicMessage::Event {
                        location: stored.location,
                        event,
                    })
                    .is_err();
            }
        }

        if disconnected {
            warn!("logic consumer disconnected, forwarding stopped");
            self.logic = None;
            // No consumer can drain or release anything anymore; take the
            // outstanding slots back so teardown accounting stays intact.
            self.pool.reclaim_outstanding();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
