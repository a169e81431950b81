//! # porta-core
//!
//! Core traits for the Porta plugin registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugin crates that only need to *describe* themselves, without pulling in
//! the registry implementations from `porta-std`.
//!
//! # Contracts
//!
//! ## Capability ([`Plugin`])
//!
//! Every plugin answers a single question: does it support a given
//! delimiter? The registry uses that answer to select implementations at
//! runtime instead of hard-coding which strategy applies.
//!
//! ## Priority ([`Prioritized`])
//!
//! Plugins that care about their position in an ordered registry expose a
//! priority, either directly or through type-level metadata. Transparent
//! decorators expose the value they wrap so ordering can see through them.
//!
//! ## Ordering ([`PluginComparator`])
//!
//! A comparator over plugin references. Comparison is fallible so that a
//! failing comparator aborts registry construction with an error value.
//!
//! # Error Types
//!
//! - [`RegistryError`] - Errors returned by registry lookups and construction
//! - [`BoxError`] - Boxed error produced by comparators

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod comparator;
mod error;
mod plugin;
mod priority;

// Re-exports
pub use comparator::PluginComparator;
pub use error::{BoxError, RegistryError};
pub use plugin::Plugin;
pub use priority::{HIGHEST_PRECEDENCE, LOWEST_PRECEDENCE, Prioritized};
