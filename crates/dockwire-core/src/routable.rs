//! The routing capability.

use crate::entity::EntityId;
use crate::kind::SignalKind;
use crate::table::{Inbound, Outbound};

/// Anything that can take part in signal routing.
///
/// Implementors share no structure beyond exposing their identity and their
/// two signal tables.
pub trait Routable<K: SignalKind> {
    /// Identity of this entity.
    fn id(&self) -> EntityId;

    /// Signals this entity emits.
    fn outbound(&self) -> &Outbound<K>;

    /// Handlers this entity reacts with.
    fn inbound(&self) -> &Inbound<K>;

    /// Name used in log output.
    fn label(&self) -> String {
        self.id().to_string()
    }
}
