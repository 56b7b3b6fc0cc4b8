//! Window Module - Platform windowing collaborator
//!
//! The router never talks to the windowing library directly; it drives this
//! trait. Callers wrap their backend (SDL window, compositor seat, test
//! double) and hand it to the router at construction.
//!
//! # API
//!
//! - `WindowControl` - Grab/cursor/relative-mode/warp surface of one window
//! - `PlatformError` - Backend rejection of a requested mode
//!
//! # Example
//!
//! ```ignore
//! use input_relay::window::{PlatformError, WindowControl};
//!
//! struct SdlWindow { /* raw handle */ }
//!
//! impl WindowControl for SdlWindow {
//!     fn size(&self) -> (i32, i32) { /* SDL_GetWindowSize */ }
//!     fn set_relative_mouse(&mut self, relative: bool) -> Result<(), PlatformError> {
//!         // SDL_SetRelativeMouseMode; map a non-zero return to
//!         // PlatformError::RelativeModeUnsupported
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Failure reported by the windowing backend.
///
/// Not part of a recoverable error taxonomy: a rejected relative-mode
/// request is the signal to fall back to manual pointer wrapping, and the
/// router never surfaces it to callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
    #[error("relative mouse mode is not supported by this backend")]
    RelativeModeUnsupported,

    #[error("window backend error: {0}")]
    Backend(String),
}

// =============================================================================
// WINDOW CONTROL
// =============================================================================

/// Control surface of the window the router manages the pointer for.
pub trait WindowControl {
    /// Current window size in pixels (width, height).
    fn size(&self) -> (i32, i32);

    /// Confine the pointer to the window (or release it).
    fn set_grab(&mut self, grab: bool);

    /// Show or hide the cursor.
    fn show_cursor(&mut self, visible: bool);

    /// Ask the backend for native relative mouse reporting.
    ///
    /// An `Err` while enabling means the backend cannot do it and the
    /// router switches to warp-and-compensate emulation.
    fn set_relative_mouse(&mut self, relative: bool) -> Result<(), PlatformError>;

    /// Move the pointer to a position in window coordinates.
    fn warp_mouse(&mut self, x: i32, y: i32);

    /// Drop any raw motion events still queued in the backend.
    ///
    /// Called on every relative-mode transition so deltas recorded under
    /// the old mode are never delivered.
    fn flush_motion_events(&mut self);
}
