//! Signal router.
//!
//! The router keeps an ordered list of registered entities and, on
//! [`SignalRouter::setup`], connects every outbound signal of every entity to
//! the same-kind inbound handler of every other entity.

use crate::entity::EntityId;
use crate::kind::SignalKind;
use crate::routable::Routable;
use crate::signal::Slot;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Router errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// The entity is already registered and duplicates are rejected.
    #[error("Entity already registered: {0}")]
    DuplicateEntity(EntityId),
}

/// What to do when the same entity is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Log a warning and append it again.
    #[default]
    Warn,
    /// Refuse the registration.
    Reject,
}

/// How a connection pass treats pairs wired by an earlier pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupPolicy {
    /// Wire every matching pair again; each pass adds one more delivery.
    #[default]
    Rescan,
    /// Only wire pairs no earlier pass has wired.
    SkipWired,
}

/// Router configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterConfig {
    /// Duplicate registration handling.
    pub duplicate_policy: DuplicatePolicy,
    /// Repeated setup handling.
    pub setup_policy: SetupPolicy,
}

/// Router statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterStats {
    /// Number of registrations, duplicates included.
    pub entity_count: usize,
    /// Number of completed connection passes.
    pub pass_count: usize,
    /// Connections created across all passes.
    pub connection_count: usize,
}

/// A listener collected while indexing inbound handlers.
struct Listener {
    position: usize,
    id: EntityId,
    handler: Slot,
}

/// Registry wiring outbound signals to matching inbound handlers.
pub struct SignalRouter<K: SignalKind> {
    /// Registered entities in registration order.
    entities: Vec<Rc<dyn Routable<K>>>,
    /// (outbound position, inbound position, kind) triples already wired.
    wired: BTreeSet<(usize, usize, K)>,
    pass_count: usize,
    connection_count: usize,
    config: RouterConfig,
}

impl<K: SignalKind> SignalRouter<K> {
    /// Create a new router with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create a new router with custom configuration.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        info!("Creating signal router with config: {:?}", config);
        Self {
            entities: Vec::new(),
            wired: BTreeSet::new(),
            pass_count: 0,
            connection_count: 0,
            config,
        }
    }

    /// Get the router configuration.
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Get router statistics.
    #[must_use]
    pub fn stats(&self) -> RouterStats {
        RouterStats {
            entity_count: self.entities.len(),
            pass_count: self.pass_count,
            connection_count: self.connection_count,
        }
    }

    /// Number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Registered entities in registration order.
    #[must_use]
    pub fn entities(&self) -> &[Rc<dyn Routable<K>>] {
        &self.entities
    }

    /// Append an entity to the registration list.
    ///
    /// Entities registered after a connection pass are only wired by the
    /// next call to [`setup`](Self::setup).
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is already registered and the
    /// duplicate policy is [`DuplicatePolicy::Reject`].
    pub fn register(&mut self, entity: Rc<dyn Routable<K>>) -> Result<(), RouterError> {
        let id = entity.id();

        if self.entities.iter().any(|e| e.id() == id) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    warn!(entity = %entity.label(), "Rejected duplicate registration");
                    return Err(RouterError::DuplicateEntity(id));
                }
                DuplicatePolicy::Warn => {
                    warn!(
                        entity = %entity.label(),
                        "Entity registered more than once; its signals will be wired once per registration"
                    );
                }
            }
        }

        if entity.outbound().owner() != id {
            warn!(
                entity = %entity.label(),
                owner = %entity.outbound().owner(),
                "Outbound table owner differs from entity id"
            );
        }

        debug!(
            entity = %entity.label(),
            position = self.entities.len(),
            outbound = entity.outbound().len(),
            inbound = entity.inbound().len(),
            "Registered entity"
        );
        self.entities.push(entity);
        Ok(())
    }

    /// Register several entities in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first registration error.
    pub fn register_all<I>(&mut self, entities: I) -> Result<(), RouterError>
    where
        I: IntoIterator<Item = Rc<dyn Routable<K>>>,
    {
        for entity in entities {
            self.register(entity)?;
        }
        Ok(())
    }

    /// Run one connection pass over the current registration list.
    ///
    /// For every entity A and every outbound kind it declares, A's emitter is
    /// connected to the handler of that kind on every registered entity other
    /// than A, in registration order. Entities are never connected to
    /// themselves, even when registered twice.
    pub fn setup(&mut self) {
        let listeners = self.index_listeners();
        let mut created = 0;

        for (a_pos, a) in self.entities.iter().enumerate() {
            let a_id = a.id();

            for (kind, signal) in a.outbound().iter() {
                let Some(signal) = signal else {
                    trace!(entity = %a.label(), signal = kind.name(), "Skipping absent emitter");
                    continue;
                };
                let Some(targets) = listeners.get(&kind) else {
                    continue;
                };

                for target in targets {
                    if target.id == a_id {
                        continue;
                    }
                    if self.config.setup_policy == SetupPolicy::SkipWired
                        && !self.wired.insert((a_pos, target.position, kind))
                    {
                        continue;
                    }

                    signal.connect(Rc::clone(&target.handler));
                    created += 1;
                    trace!(
                        from = a_pos,
                        to = target.position,
                        signal = kind.name(),
                        "Connected"
                    );
                }
            }
        }

        self.pass_count += 1;
        self.connection_count += created;

        debug!(
            pass = self.pass_count,
            entities = self.entities.len(),
            connections = created,
            "Connection pass complete"
        );
    }

    /// Collect present inbound handlers by kind, in registration order.
    fn index_listeners(&self) -> BTreeMap<K, Vec<Listener>> {
        let mut listeners: BTreeMap<K, Vec<Listener>> = BTreeMap::new();

        for (position, entity) in self.entities.iter().enumerate() {
            for (kind, handler) in entity.inbound().iter() {
                match handler {
                    Some(handler) => listeners.entry(kind).or_default().push(Listener {
                        position,
                        id: entity.id(),
                        handler: Rc::clone(handler),
                    }),
                    None => {
                        trace!(entity = %entity.label(), signal = kind.name(), "Skipping absent handler");
                    }
                }
            }
        }

        listeners
    }
}

impl<K: SignalKind> Default for SignalRouter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SignalKind> fmt::Debug for SignalRouter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalRouter")
            .field("entities", &self.entities.len())
            .field("pass_count", &self.pass_count)
            .field("connection_count", &self.connection_count)
            .field("config", &self.config)
            .finish()
    }
}
