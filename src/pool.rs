//! Pool Module - Fixed-capacity event buffer slots for cross-thread handoff
//!
//! The pump thread stores forwarded event copies into pooled slots instead
//! of allocating per event. A slot is filled sequentially until its capacity
//! is exhausted, then the next slot is taken from a free stack (growing the
//! pool only when the stack is empty). The consumer thread is told a slot's
//! id when the router starts filling it, reads event copies out of it, and
//! eventually hands the id back through [`EventBufferPool::release`].
//!
//! Ownership discipline (no locks): the router is the only writer and only
//! ever appends to the slot it is currently filling; the consumer only reads
//! slots it has been notified about and each slot has exactly one
//! outstanding handoff. This is single-producer/single-consumer ownership
//! transfer, not mutual exclusion, and is unsound with multiple consumers.
//!
//! # API
//!
//! - `EventBufferPool::store(event)` - Copy an event into the pool
//! - `EventBufferPool::get(location)` - Read a stored copy back
//! - `EventBufferPool::release(id)` - Return a drained slot to the free stack
//! - `SlotId`, `EventRef`, `StoredEvent` - Handoff identities

use crate::event::InputEvent;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Default number of event records per slot.
///
/// The original handler sized each buffer to 70 raw event records.
pub const DEFAULT_EVENTS_PER_SLOT: usize = 70;

// =============================================================================
// IDENTITIES
// =============================================================================

/// Identity of one buffer slot; the only payload that crosses threads
/// besides event copies themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub usize);

/// Location of one stored event copy inside the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRef {
    pub slot: SlotId,
    /// Record index within the slot
    pub index: usize,
}

/// Result of storing one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredEvent {
    /// Where the copy lives
    pub location: EventRef,
    /// Set when this store started filling a fresh slot; the caller must
    /// notify the consumer of the id before forwarding the event itself.
    pub opened: Option<SlotId>,
}

// =============================================================================
// EVENT BUFFER POOL
// =============================================================================

/// Monotonically growing pool of fixed-capacity event slots with a
/// most-recently-freed-first free stack.
pub struct EventBufferPool {
    slots: Vec<Vec<InputEvent>>,
    /// Free slot indices, top of the stack reused first
    free: Vec<usize>,
    /// Slot currently being filled; `slots.len()` when none is open
    current: usize,
    events_per_slot: usize,
}

impl EventBufferPool {
    /// Create an empty pool; slots are allocated lazily on first store.
    pub fn new(events_per_slot: usize) -> Self {
        assert!(events_per_slot > 0, "slot capacity must be non-zero");
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            current: 0,
            events_per_slot,
        }
    }

    /// Copy `event` into the pool.
    ///
    /// Appends to the current slot while it has remaining capacity;
    /// otherwise takes a slot from the free stack, allocating a new one
    /// only when the stack is empty.
    pub fn store(&mut self, event: InputEvent) -> StoredEvent {
        let mut opened = None;

        if self.current >= self.slots.len()
            || self.slots[self.current].len() >= self.events_per_slot
        {
            let index = match self.free.pop() {
                Some(index) => index,
                None => {
                    // Pool grows monotonically; slots are never deallocated.
                    self.slots.push(Vec::with_capacity(self.events_per_slot));
                    self.slots.len() - 1
                }
            };
            self.current = index;
            self.slots[index].clear();
            opened = Some(SlotId(index));
        }

        let slot = &mut self.slots[self.current];
        let index = slot.len();
        slot.push(event);

        StoredEvent {
            location: EventRef {
                slot: SlotId(self.current),
                index,
            },
            opened,
        }
    }

    /// Read a stored copy back. Consumer side of the handoff.
    pub fn get(&self, location: EventRef) -> Option<&InputEvent> {
        self.slots.get(location.slot.0)?.get(location.index)
    }

    /// Return a fully drained slot to the free stack.
    ///
    /// Called exactly once per handed-off slot, on behalf of the consumer.
    pub fn release(&mut self, id: SlotId) {
        debug_assert!(id.0 < self.slots.len(), "released unknown slot id");
        debug_assert!(!self.free.contains(&id.0), "slot released twice");
        if id.0 == self.current {
            // The router may no longer append here.
            self.current = self.slots.len();
        }
        self.free.push(id.0);
    }

    /// Return every outstanding slot to the free stack.
    ///
    /// Only valid once no consumer can observe the pool anymore (the
    /// forwarding channel disconnected before the slots were released).
    pub fn reclaim_outstanding(&mut self) {
        for index in 0..self.slots.len() {
            if !self.free.contains(&index) {
                self.free.push(index);
            }
        }
        self.current = self.slots.len();
    }

    /// Total slots ever allocated.
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Slots currently on the free stack.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Slots handed off and not yet released.
    pub fn outstanding(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Event records per slot.
    pub fn events_per_slot(&self) -> usize {
        self.events_per_slot
    }
}

impl Drop for EventBufferPool {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            assert!(
                self.free.len() == self.slots.len(),
                "event buffer pool dropped with {} slot(s) outstanding; \
                 a consumer thread may still be processing forwarded events",
                self.outstanding()
            );
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
