//! # dockwire-core
//!
//! Name-matched signal routing between independently built widgets.
//!
//! This crate provides the building blocks:
//!
//! - **SignalKind** - Closed vocabulary of signal names shared by entities
//! - **Signal** - Synchronous emitter carrying a string payload
//! - **Outbound / Inbound** - Per-entity tables of emitters and handlers
//! - **Routable** - Capability trait any entity type can implement
//! - **SignalRouter** - Registry that wires matching signals together
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  register  ┌──────────────┐  setup   ┌─────────────┐
//! │  Routable   │───────────▶│ SignalRouter │─────────▶│   Signal    │
//! └─────────────┘            └──────────────┘          └─────────────┘
//!                                                            │ emit
//!                                                            ▼
//!                                                      ┌─────────────┐
//!                                                      │  Handlers   │
//!                                                      └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dockwire_core::{EntityId, Inbound, Outbound, Routable, SignalKind, SignalRouter};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! enum Kind {
//!     Clicked,
//! }
//!
//! impl SignalKind for Kind {
//!     fn name(self) -> &'static str {
//!         "clicked"
//!     }
//! }
//!
//! struct Node {
//!     id: EntityId,
//!     outbound: Outbound<Kind>,
//!     inbound: Inbound<Kind>,
//! }
//!
//! impl Routable<Kind> for Node {
//!     fn id(&self) -> EntityId {
//!         self.id
//!     }
//!     fn outbound(&self) -> &Outbound<Kind> {
//!         &self.outbound
//!     }
//!     fn inbound(&self) -> &Inbound<Kind> {
//!         &self.inbound
//!     }
//! }
//!
//! let hits = Rc::new(Cell::new(0));
//!
//! let sender_id = EntityId::next();
//! let mut outbound = Outbound::new(sender_id);
//! let clicked = outbound.declare(Kind::Clicked).unwrap();
//! let sender = Node { id: sender_id, outbound, inbound: Inbound::new() };
//!
//! let receiver_id = EntityId::next();
//! let mut inbound = Inbound::new();
//! let counter = Rc::clone(&hits);
//! inbound
//!     .bind(Kind::Clicked, move |_, _| counter.set(counter.get() + 1))
//!     .unwrap();
//! let receiver = Node { id: receiver_id, outbound: Outbound::new(receiver_id), inbound };
//!
//! let mut router: SignalRouter<Kind> = SignalRouter::new();
//! router.register(Rc::new(sender)).unwrap();
//! router.register(Rc::new(receiver)).unwrap();
//! router.setup();
//!
//! clicked.emit("hello");
//! assert_eq!(hits.get(), 1);
//! ```

pub mod entity;
pub mod kind;
pub mod routable;
pub mod router;
pub mod signal;
pub mod table;

pub use entity::EntityId;
pub use kind::SignalKind;
pub use routable::Routable;
pub use router::{DuplicatePolicy, RouterConfig, RouterError, RouterStats, SetupPolicy, SignalRouter};
pub use signal::{Signal, Slot};
pub use table::{Inbound, Outbound, TableError};
