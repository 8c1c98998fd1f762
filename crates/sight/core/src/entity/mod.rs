//! Entity identity, taxonomy, and kind filtering.
//!
//! The host world owns every entity; this crate only sees call-scoped
//! [`ActorRef`] snapshots handed out by the entity oracle.
mod actor;
mod filter;
mod kind;

pub use actor::{ActorRef, EntityId, Location, WorldId};
pub use filter::TypeFilter;
pub use kind::{EntityKind, KindCategories};
