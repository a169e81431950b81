//! # porta-std
//!
//! Standard implementations for the Porta plugin registry.
//!
//! This crate provides:
//! - **Registries**: [`SimplePluginRegistry`], [`OrderAwarePluginRegistry`],
//!   [`RegistryBuilder`] and the [`PluginRegistry`] query trait
//! - **Ordering**: [`PriorityResolver`], [`PriorityComparator`], [`Comparator`]
//! - **Priority metadata**: [`PriorityTable`], [`NoMetadata`] and, with the
//!   `inventory` feature, link-time declarations collected by `DeclaredOrders`
//! - **Testing utilities**: plugin and comparator fixtures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use porta_core;

// Modules
pub mod order;
pub mod registry;
pub mod testing;

pub use order::{
    Comparator, DEFAULT_COMPARATOR, DefaultLookup, MAX_UNWRAP_DEPTH, NoMetadata,
    PriorityComparator, PriorityLookup, PriorityResolver, PriorityTable,
};
#[cfg(feature = "inventory")]
pub use order::{DeclaredOrders, OrderDeclaration};
pub use registry::{
    OrderAwarePluginRegistry, PluginRegistry, RegistryBuilder, SimplePluginRegistry,
};

#[cfg(feature = "inventory")]
pub use inventory;
