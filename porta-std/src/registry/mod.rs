//! Plugin registries.
//!
//! - [`PluginRegistry`]: the query surface shared by every registry
//! - [`SimplePluginRegistry`]: plugins in input order
//! - [`OrderAwarePluginRegistry`]: plugins sorted on construction
//! - [`RegistryBuilder`]: collects plugins and freezes them into either one

mod builder;
mod ordered;
mod simple;
mod traits;

pub use builder::RegistryBuilder;
pub use ordered::OrderAwarePluginRegistry;
pub use simple::SimplePluginRegistry;
pub use traits::PluginRegistry;
