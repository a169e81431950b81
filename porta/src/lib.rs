//! # porta - Typed Plugin Registries
//!
//! `porta` selects among already-instantiated strategy objects ("plugins")
//! at runtime. Each plugin answers whether it supports a delimiter value; a
//! registry answers the usual questions over that predicate: the first
//! match, all matches, a required match, or a fallback.
//!
//! Two registries are provided:
//!
//! - [`SimplePluginRegistry`] keeps plugins in the order it was given them.
//! - [`OrderAwarePluginRegistry`] sorts them once, on construction, by
//!   resolved priority (or by a custom [`Comparator`]). Resolution sees
//!   through transparent decorators, so wrapping a plugin does not change
//!   its position.
//!
//! ## Quick Start
//!
//! ```rust
//! use porta::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Renderer {
//!     name: &'static str,
//!     extension: &'static str,
//!     order: i32,
//! }
//!
//! impl Plugin<str> for Renderer {
//!     fn supports(&self, path: &str) -> bool {
//!         path.ends_with(self.extension)
//!     }
//! }
//!
//! impl Prioritized for Renderer {
//!     fn order(&self) -> Option<i32> {
//!         Some(self.order)
//!     }
//! }
//!
//! let registry: OrderAwarePluginRegistry<Renderer, str> = OrderAwarePluginRegistry::of([
//!     Renderer { name: "fallback", extension: "", order: 100 },
//!     Renderer { name: "markdown", extension: ".md", order: 1 },
//! ]);
//!
//! let renderer = registry.required_plugin_for("README.md").unwrap();
//! assert_eq!(renderer.name, "markdown");
//! assert_eq!(registry.plugins_for("notes.txt").len(), 1);
//! ```
//!
//! ## Features
//!
//! - `tracing`: structured `debug`/`trace` events on registry construction
//!   and priority resolution
//! - `inventory`: link-time priority declarations ([`OrderDeclaration`]),
//!   consulted by the default comparator
//! - `macros`: `#[derive(Prioritized)]` (implies `inventory`)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use porta_core::{
    // Error types
    BoxError,
    // Priority
    HIGHEST_PRECEDENCE,
    LOWEST_PRECEDENCE,
    // Capability
    Plugin,
    // Ordering
    PluginComparator,
    Prioritized,
    RegistryError,
};

// Ordering
pub use porta_std::{
    Comparator, DEFAULT_COMPARATOR, DefaultLookup, MAX_UNWRAP_DEPTH, NoMetadata,
    PriorityComparator, PriorityLookup, PriorityResolver, PriorityTable,
};

// Registries
pub use porta_std::{
    OrderAwarePluginRegistry, PluginRegistry, RegistryBuilder, SimplePluginRegistry,
};

#[cfg(feature = "inventory")]
pub use porta_std::{DeclaredOrders, OrderDeclaration};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use porta_std::testing::*;
}

/// Prelude module - common imports for Porta.
///
/// # Usage
///
/// ```rust
/// use porta::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Ordering
        Comparator,
        // Registries
        OrderAwarePluginRegistry,
        // Core traits
        Plugin,
        PluginComparator,
        PluginRegistry,
        Prioritized,
        RegistryBuilder,
        // Errors
        RegistryError,
        SimplePluginRegistry,
    };
}

#[cfg(feature = "macros")]
pub use porta_macros::Prioritized;

#[cfg(feature = "inventory")]
pub use inventory;
