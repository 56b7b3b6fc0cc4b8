//! Logic Module - Messages forwarded to the logic thread
//!
//! The router's asynchronous output: every routed event (minus suppressed
//! warp echoes, joystick hot-plug and unknown types) becomes exactly one
//! [`LogicMessage::Event`] on the channel, preceded by a
//! [`LogicMessage::SlotInUse`] whenever the copy starts filling a fresh
//! buffer slot. The consumer must eventually hand every announced slot id
//! back to [`InputEventRouter::release_event_buffer`].
//!
//! [`InputEventRouter::release_event_buffer`]: crate::router::InputEventRouter::release_event_buffer

use crossbeam_channel::Sender;

use crate::event::InputEvent;
use crate::pool::{EventRef, SlotId};

// =============================================================================
// MESSAGES
// =============================================================================

/// One message on the pump-to-logic channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicMessage {
    /// The router has started filling this slot; release it once every
    /// event referencing it has been consumed.
    SlotInUse(SlotId),

    /// Tagged copy of a routed event plus the slot it lives in.
    Event {
        location: EventRef,
        event: InputEvent,
    },
}

/// Sending half of the pump-to-logic channel.
pub type LogicSender = Sender<LogicMessage>;
