//! Entity identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter backing [`EntityId::next`].
static ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a routable entity.
///
/// Two entities are the same entity iff their ids are equal; nothing about
/// their contents is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    /// Allocate a fresh, process-unique id.
    #[must_use]
    pub fn next() -> Self {
        Self(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}
