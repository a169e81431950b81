//! Priority ordering.
//!
//! Ordering is split in three layers, leaves first:
//!
//! - [`PriorityLookup`]: type-level priority metadata (the equivalent of an
//!   annotation on the plugin's type)
//! - [`PriorityResolver`]: computes a plugin's effective priority, seeing
//!   through transparent decorators
//! - [`Comparator`]: the invertible comparison strategy an ordered registry
//!   sorts with

mod comparator;
mod metadata;
mod resolver;

pub use comparator::{Comparator, DEFAULT_COMPARATOR, PriorityComparator};
#[cfg(feature = "inventory")]
pub use metadata::{DeclaredOrders, OrderDeclaration};
pub use metadata::{DefaultLookup, NoMetadata, PriorityLookup, PriorityTable};
pub use resolver::{MAX_UNWRAP_DEPTH, PriorityResolver};
