//! Synchronous emitters.
//!
//! A [`Signal`] belongs to one entity and fans a string payload out to every
//! connected slot on the caller's stack. Nothing is queued or deferred.

use crate::entity::EntityId;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// A handler invoked with the emitting entity and the payload.
pub type Slot = Rc<dyn Fn(EntityId, &str)>;

/// An outbound emitter owned by a single entity.
///
/// Cloning yields another handle to the same slot list.
#[derive(Clone)]
pub struct Signal {
    /// Entity passed to every slot as the sender.
    sender: EntityId,
    /// Connected slots, in connection order.
    slots: Rc<RefCell<Vec<Slot>>>,
}

impl Signal {
    /// Create an emitter with no connected slots.
    #[must_use]
    pub fn new(sender: EntityId) -> Self {
        Self {
            sender,
            slots: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// The entity this signal emits on behalf of.
    #[must_use]
    pub fn sender(&self) -> EntityId {
        self.sender
    }

    /// Number of connected slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Connect a slot.
    ///
    /// The same slot may be connected more than once and then runs once per
    /// connection.
    pub fn connect(&self, slot: Slot) {
        self.slots.borrow_mut().push(slot);
    }

    /// Connect a closure as a slot.
    pub fn connect_fn(&self, f: impl Fn(EntityId, &str) + 'static) {
        self.connect(Rc::new(f));
    }

    /// Deliver `payload` to every connected slot, in connection order.
    ///
    /// Slots may emit or connect reentrantly. Slots connected while an
    /// emission is in flight first run on the next emission.
    ///
    /// Returns the number of slots invoked.
    pub fn emit(&self, payload: &str) -> usize {
        let slots: Vec<Slot> = self.slots.borrow().clone();
        trace!(sender = %self.sender, slots = slots.len(), "Emitting signal");
        for slot in &slots {
            slot(self.sender, payload);
        }
        slots.len()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("sender", &self.sender)
            .field("slots", &self.slot_count())
            .finish()
    }
}
