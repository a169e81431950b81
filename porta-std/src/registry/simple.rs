use super::traits::PluginRegistry;
use porta_core::Plugin;
use std::{fmt, marker::PhantomData};

/// A registry that keeps plugins in the order it was given them.
///
/// Absent entries handed to [`from_nullable`](Self::from_nullable) are
/// dropped silently; they are never stored or counted. The stored sequence
/// is immutable: [`plugins`](PluginRegistry::plugins) hands out a shared
/// slice, and a registry with different members is a new registry.
///
/// # Example
///
/// ```rust
/// use porta_std::{PluginRegistry, SimplePluginRegistry};
/// use porta_core::Plugin;
///
/// #[derive(Debug, PartialEq)]
/// struct Exporter(&'static str);
///
/// impl Plugin<str> for Exporter {
///     fn supports(&self, format: &str) -> bool {
///         self.0 == format
///     }
/// }
///
/// let registry: SimplePluginRegistry<Exporter, str> =
///     SimplePluginRegistry::from_nullable([Some(Exporter("csv")), None, Some(Exporter("pdf"))]);
///
/// assert_eq!(registry.count_plugins(), 2);
/// assert_eq!(registry.plugins(), &[Exporter("csv"), Exporter("pdf")]);
/// ```
pub struct SimplePluginRegistry<T, S: ?Sized> {
    plugins: Vec<T>,
    _delimiter: PhantomData<fn(&S)>,
}

impl<T: Plugin<S>, S: ?Sized> SimplePluginRegistry<T, S> {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create a registry holding `plugins` in the given order.
    pub fn of<I>(plugins: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(plugins.into_iter().collect())
    }

    /// Create a registry from possibly absent plugins, dropping the absent
    /// ones and keeping the relative order of the rest.
    pub fn from_nullable<I>(plugins: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self::from_vec(present(plugins))
    }

    pub(crate) fn from_vec(plugins: Vec<T>) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(plugins = plugins.len(), "created plugin registry");

        Self {
            plugins,
            _delimiter: PhantomData,
        }
    }
}

/// Collects the present plugins, preserving their relative order.
pub(crate) fn present<T, I>(plugins: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    let plugins = plugins.into_iter();

    #[cfg(feature = "tracing")]
    let mut dropped = 0usize;
    #[cfg(feature = "tracing")]
    let plugins = plugins.inspect(|plugin| {
        if plugin.is_none() {
            dropped += 1;
        }
    });

    let present = plugins.flatten().collect::<Vec<_>>();

    #[cfg(feature = "tracing")]
    {
        if dropped > 0 {
            tracing::debug!(dropped, "dropped absent plugins");
        }
    }

    present
}

impl<T, S: ?Sized> SimplePluginRegistry<T, S> {
    /// Consume the registry, returning the stored plugins.
    pub fn into_plugins(self) -> Vec<T> {
        self.plugins
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.plugins
    }
}

impl<T: Plugin<S>, S: ?Sized> PluginRegistry<T, S> for SimplePluginRegistry<T, S> {
    fn plugins(&self) -> &[T] {
        &self.plugins
    }
}

impl<T: Plugin<S>, S: ?Sized> Default for SimplePluginRegistry<T, S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Plugin<S>, S: ?Sized> FromIterator<T> for SimplePluginRegistry<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(plugins: I) -> Self {
        Self::of(plugins)
    }
}

impl<'a, T, S: ?Sized> IntoIterator for &'a SimplePluginRegistry<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.plugins.iter()
    }
}

impl<T: Clone, S: ?Sized> Clone for SimplePluginRegistry<T, S> {
    fn clone(&self) -> Self {
        Self {
            plugins: self.plugins.clone(),
            _delimiter: PhantomData,
        }
    }
}

impl<T: fmt::Debug, S: ?Sized> fmt::Debug for SimplePluginRegistry<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimplePluginRegistry")
            .field("plugins", &self.plugins)
            .finish()
    }
}
