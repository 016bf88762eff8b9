//! Per-entity signal tables.
//!
//! An entity advertises what it can emit through an [`Outbound`] table and
//! what it reacts to through an [`Inbound`] table. Either table may hold a
//! reserved name with no emitter or handler behind it; the router skips such
//! entries.

use crate::entity::EntityId;
use crate::kind::SignalKind;
use crate::signal::{Signal, Slot};
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

/// Table errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The outbound kind is already declared.
    #[error("Outbound signal already declared: {0}")]
    DuplicateSignal(&'static str),

    /// The inbound kind already has an entry.
    #[error("Inbound handler already bound: {0}")]
    DuplicateHandler(&'static str),
}

/// Outbound signals of one entity, keyed by kind.
#[derive(Debug)]
pub struct Outbound<K: SignalKind> {
    /// Owner passed to every emitter created by this table.
    owner: EntityId,
    signals: BTreeMap<K, Option<Signal>>,
}

impl<K: SignalKind> Outbound<K> {
    /// Create an empty table for `owner`.
    #[must_use]
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            signals: BTreeMap::new(),
        }
    }

    /// Entity owning the emitters in this table.
    #[must_use]
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    /// Declare an emitter for `kind` and return a handle to it.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is already present, reserved or not.
    pub fn declare(&mut self, kind: K) -> Result<Signal, TableError> {
        if self.signals.contains_key(&kind) {
            return Err(TableError::DuplicateSignal(kind.name()));
        }
        let signal = Signal::new(self.owner);
        self.signals.insert(kind, Some(signal.clone()));
        Ok(signal)
    }

    /// Record `kind` without an emitter.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is already present.
    pub fn reserve(&mut self, kind: K) -> Result<(), TableError> {
        if self.signals.contains_key(&kind) {
            return Err(TableError::DuplicateSignal(kind.name()));
        }
        self.signals.insert(kind, None);
        Ok(())
    }

    /// Emitter for `kind`, if declared with one.
    #[must_use]
    pub fn get(&self, kind: K) -> Option<&Signal> {
        self.signals.get(&kind).and_then(Option::as_ref)
    }

    /// Whether `kind` has an entry, present or reserved.
    #[must_use]
    pub fn contains(&self, kind: K) -> bool {
        self.signals.contains_key(&kind)
    }

    /// All entries in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Option<&Signal>)> + '_ {
        self.signals.iter().map(|(k, s)| (*k, s.as_ref()))
    }

    /// All kinds in kind order, including reserved ones.
    #[must_use]
    pub fn kinds(&self) -> Vec<K> {
        self.signals.keys().copied().collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// Inbound handlers of one entity, keyed by kind.
pub struct Inbound<K: SignalKind> {
    handlers: BTreeMap<K, Option<Slot>>,
}

impl<K: SignalKind> Inbound<K> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Bind a handler for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` already has an entry.
    pub fn bind(
        &mut self,
        kind: K,
        handler: impl Fn(EntityId, &str) + 'static,
    ) -> Result<(), TableError> {
        self.bind_slot(kind, Rc::new(handler))
    }

    /// Bind an existing slot for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` already has an entry.
    pub fn bind_slot(&mut self, kind: K, slot: Slot) -> Result<(), TableError> {
        if self.handlers.contains_key(&kind) {
            return Err(TableError::DuplicateHandler(kind.name()));
        }
        self.handlers.insert(kind, Some(slot));
        Ok(())
    }

    /// Record `kind` without a handler.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` already has an entry.
    pub fn reserve(&mut self, kind: K) -> Result<(), TableError> {
        if self.handlers.contains_key(&kind) {
            return Err(TableError::DuplicateHandler(kind.name()));
        }
        self.handlers.insert(kind, None);
        Ok(())
    }

    /// Handler for `kind`, if bound.
    #[must_use]
    pub fn get(&self, kind: K) -> Option<&Slot> {
        self.handlers.get(&kind).and_then(Option::as_ref)
    }

    /// Whether `kind` has an entry, bound or reserved.
    #[must_use]
    pub fn contains(&self, kind: K) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// All entries in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Option<&Slot>)> + '_ {
        self.handlers.iter().map(|(k, h)| (*k, h.as_ref()))
    }

    /// All kinds in kind order, including reserved ones.
    #[must_use]
    pub fn kinds(&self) -> Vec<K> {
        self.handlers.keys().copied().collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<K: SignalKind> Default for Inbound<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SignalKind> std::fmt::Debug for Inbound<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.handlers.iter().map(|(k, h)| (k, h.is_some())))
            .finish()
    }
}
