//! The contract shared by every persisted record.

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// A persisted record with a store-assigned, immutable identity.
///
/// Repositories and services are written once against this trait and
/// instantiated per entity type.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The entity's newtype id.
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// Human-readable resource name, used in errors and logs.
    const NAME: &'static str;

    /// The entity's identity.
    fn id(&self) -> Self::Id;
}
