use porta_core::{Plugin, RegistryError};
use std::{fmt::Debug, ops::Deref};

/// Typed access to the plugins held by a registry.
///
/// Implementors provide [`plugins`](Self::plugins); every query is derived
/// from it, in stored order. Queries never return "nothing" as an error of
/// their own: single lookups return `Option`, multi lookups return a
/// possibly empty `Vec`, and the `_or_else` variants hand the caller's own
/// error back unchanged.
///
/// # Example
///
/// ```rust
/// use porta_std::{PluginRegistry, SimplePluginRegistry};
/// use porta_core::Plugin;
///
/// #[derive(Debug, PartialEq)]
/// struct Codec(&'static str);
///
/// impl Plugin<str> for Codec {
///     fn supports(&self, delimiter: &str) -> bool {
///         delimiter == self.0
///     }
/// }
///
/// let registry: SimplePluginRegistry<Codec, str> =
///     SimplePluginRegistry::of([Codec("json"), Codec("yaml")]);
///
/// assert_eq!(registry.plugin_for("yaml"), Some(&Codec("yaml")));
/// assert!(registry.plugin_for("toml").is_none());
/// assert!(registry.required_plugin_for("toml").is_err());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a registry of `{T}` plugins",
    label = "missing `PluginRegistry` implementation",
    note = "Implement `plugins()` to expose the stored plugins in order."
)]
pub trait PluginRegistry<T, S>
where
    T: Plugin<S>,
    S: ?Sized,
{
    /// All stored plugins, in stored order.
    fn plugins(&self) -> &[T];

    /// Iterate over all stored plugins, in stored order.
    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.plugins().iter()
    }

    /// Returns the first plugin supporting `delimiter`.
    fn plugin_for(&self, delimiter: &S) -> Option<&T> {
        self.iter().find(|plugin| plugin.supports(delimiter))
    }

    /// Returns the first plugin supporting `delimiter`, or the error produced
    /// by `error` if there is none.
    ///
    /// `error` is only invoked when nothing matches.
    fn plugin_for_or_else<E, F>(&self, delimiter: &S, error: F) -> Result<&T, E>
    where
        F: FnOnce() -> E,
    {
        self.plugin_for(delimiter).ok_or_else(error)
    }

    /// Returns the first plugin supporting `delimiter`, or
    /// [`RegistryError::InvalidArgument`] listing the registered plugins.
    fn required_plugin_for(&self, delimiter: &S) -> Result<&T, RegistryError>
    where
        S: Debug,
        T: Debug,
    {
        self.required_plugin_for_with(delimiter, || {
            format!(
                "No plugin found for delimiter {delimiter:?}! Registered plugins: {:?}.",
                self.plugins()
            )
        })
    }

    /// Returns the first plugin supporting `delimiter`, or
    /// [`RegistryError::InvalidArgument`] carrying the supplied message.
    fn required_plugin_for_with<M>(&self, delimiter: &S, message: M) -> Result<&T, RegistryError>
    where
        M: FnOnce() -> String,
    {
        self.plugin_for_or_else(delimiter, || RegistryError::InvalidArgument(message()))
    }

    /// Returns all plugins supporting `delimiter`, in stored order.
    fn plugins_for(&self, delimiter: &S) -> Vec<&T> {
        self.iter()
            .filter(|plugin| plugin.supports(delimiter))
            .collect()
    }

    /// Returns all plugins supporting `delimiter`, or the error produced by
    /// `error` if there are none.
    fn plugins_for_or_else<E, F>(&self, delimiter: &S, error: F) -> Result<Vec<&T>, E>
    where
        F: FnOnce() -> E,
    {
        let plugins = self.plugins_for(delimiter);
        if plugins.is_empty() {
            return Err(error());
        }
        Ok(plugins)
    }

    /// Returns the first plugin supporting `delimiter`, or `default`.
    fn plugin_or_default_for<'a>(&'a self, delimiter: &S, default: &'a T) -> &'a T {
        self.plugin_for(delimiter).unwrap_or(default)
    }

    /// Returns a clone of the first plugin supporting `delimiter`, or the
    /// plugin produced by `default`.
    ///
    /// `default` is only invoked when nothing matches.
    fn plugin_or_else_for<F>(&self, delimiter: &S, default: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        self.plugin_for(delimiter).cloned().unwrap_or_else(default)
    }

    /// Returns all plugins supporting `delimiter`, or all of `defaults`.
    fn plugins_or_defaults_for<'a>(&'a self, delimiter: &S, defaults: &'a [T]) -> Vec<&'a T> {
        let plugins = self.plugins_for(delimiter);
        if plugins.is_empty() {
            return defaults.iter().collect();
        }
        plugins
    }

    /// Returns whether any plugin supports `delimiter`.
    fn has_plugin_for(&self, delimiter: &S) -> bool {
        self.plugin_for(delimiter).is_some()
    }

    /// Returns whether `plugin` is stored in this registry.
    fn contains(&self, plugin: &T) -> bool
    where
        T: PartialEq,
    {
        self.plugins().contains(plugin)
    }

    /// Returns whether the very instance `plugin` points to is stored in
    /// this registry.
    ///
    /// Compares pointee addresses, so it works for trait objects such as
    /// `Arc<dyn _>` that have no `PartialEq`. An equal but distinct
    /// instance is not contained.
    fn contains_ref(&self, plugin: &T) -> bool
    where
        T: Deref,
    {
        self.iter()
            .any(|stored| std::ptr::addr_eq(&**stored, &**plugin))
    }

    /// Get the number of stored plugins.
    fn count_plugins(&self) -> usize {
        self.plugins().len()
    }

    /// Check if the registry holds no plugins.
    fn is_empty(&self) -> bool {
        self.plugins().is_empty()
    }
}
