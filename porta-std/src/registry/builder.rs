use super::{ordered::OrderAwarePluginRegistry, simple::SimplePluginRegistry};
use crate::order::Comparator;
use porta_core::{Plugin, PluginComparator, Prioritized, RegistryError};
use std::marker::PhantomData;

// ============================================================================
// RegistryBuilder - collects plugins before freezing them into a registry
// ============================================================================

/// Builder for constructing a registry.
///
/// Collect plugins, optionally pick a comparator and direction, then freeze
/// them with [`build_simple`](Self::build_simple) (input order) or
/// [`build`](Self::build) (sorted).
///
/// # Example
///
/// ```rust
/// use porta_std::{PluginRegistry, RegistryBuilder};
/// use porta_core::{Plugin, Prioritized};
///
/// #[derive(Debug, PartialEq)]
/// struct Filter(&'static str, Option<i32>);
///
/// impl Plugin<str> for Filter {
///     fn supports(&self, _path: &str) -> bool {
///         true
///     }
/// }
///
/// impl Prioritized for Filter {
///     fn order(&self) -> Option<i32> {
///         self.1
///     }
/// }
///
/// let registry = RegistryBuilder::<Filter, str>::new()
///     .plugin(Filter("gzip", None))
///     .plugin_opt(None)
///     .plugin(Filter("auth", Some(-10)))
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.plugin_for("/"), Some(&Filter("auth", Some(-10))));
/// ```
pub struct RegistryBuilder<T, S: ?Sized> {
    plugins: Vec<Option<T>>,
    comparator: Option<Comparator<T>>,
    reversed: bool,
    _delimiter: PhantomData<fn(&S)>,
}

impl<T: Plugin<S>, S: ?Sized> RegistryBuilder<T, S> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            comparator: None,
            reversed: false,
            _delimiter: PhantomData,
        }
    }

    /// Add a plugin.
    pub fn plugin(self, plugin: T) -> Self {
        self.plugin_opt(Some(plugin))
    }

    /// Add a plugin that may be absent. Absent entries are dropped on build.
    pub fn plugin_opt(mut self, plugin: Option<T>) -> Self {
        self.plugin_mut(plugin);
        self
    }

    /// Add a possibly absent plugin (mutable version).
    pub fn plugin_mut(&mut self, plugin: Option<T>) {
        self.plugins.push(plugin);
    }

    /// Add several plugins, keeping their order.
    pub fn plugins<I>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.plugins.extend(plugins.into_iter().map(Some));
        self
    }

    /// Order by `comparator` instead of resolved priority.
    pub fn comparator<C>(mut self, comparator: C) -> Self
    where
        C: PluginComparator<T> + 'static,
    {
        self.comparator = Some(Comparator::new(comparator));
        self
    }

    /// Invert the ordering used by [`build`](Self::build).
    ///
    /// Calling this twice restores the original direction.
    pub fn reversed(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }

    /// Freeze the plugins in insertion order, ignoring any comparator.
    pub fn build_simple(self) -> SimplePluginRegistry<T, S> {
        SimplePluginRegistry::from_nullable(self.plugins)
    }

    /// Freeze the plugins, ordered by the configured comparator.
    ///
    /// Unlike [`build`](Self::build), this does not fall back to priority
    /// order, so it works for plugins that are not [`Prioritized`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidArgument`] if no comparator was
    /// configured, or [`RegistryError::Comparator`] if it fails.
    pub fn try_build(mut self) -> Result<OrderAwarePluginRegistry<T, S>, RegistryError> {
        let Some(comparator) = self.comparator.take() else {
            return Err(RegistryError::InvalidArgument(
                "No comparator configured for an ordered registry!".to_string(),
            ));
        };
        self.finish(comparator)
    }

    /// Get the number of added entries, absent ones included.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    fn finish(self, comparator: Comparator<T>) -> Result<OrderAwarePluginRegistry<T, S>, RegistryError> {
        let comparator = if self.reversed {
            comparator.reversed()
        } else {
            comparator
        };
        OrderAwarePluginRegistry::try_from_nullable(self.plugins, comparator)
    }
}

impl<T: Plugin<S> + Prioritized, S: ?Sized> RegistryBuilder<T, S> {
    /// Freeze the plugins, ordered by the configured comparator or, if none
    /// was set, by resolved priority.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Comparator`] if a custom comparator fails.
    /// Priority order never fails.
    pub fn build(mut self) -> Result<OrderAwarePluginRegistry<T, S>, RegistryError> {
        match self.comparator.take() {
            Some(comparator) => self.finish(comparator),
            None if self.reversed => Ok(OrderAwarePluginRegistry::of_reverse(self.plugins.into_iter().flatten())),
            None => Ok(OrderAwarePluginRegistry::from_nullable(self.plugins)),
        }
    }
}

impl<T: Plugin<S>, S: ?Sized> Default for RegistryBuilder<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{registry::traits::PluginRegistry, testing::FailingComparator};

    #[derive(Debug, Clone, PartialEq)]
    struct Stage(&'static str, Option<i32>);

    impl Plugin<()> for Stage {
        fn supports(&self, _: &()) -> bool {
            true
        }
    }

    impl Prioritized for Stage {
        fn order(&self) -> Option<i32> {
            self.1
        }
    }

    fn stages() -> RegistryBuilder<Stage, ()> {
        RegistryBuilder::new()
            .plugin(Stage("render", Some(20)))
            .plugin_opt(None)
            .plugins([Stage("fetch", Some(0)), Stage("log", None)])
            .plugin(Stage("parse", Some(10)))
    }

    fn names<R: PluginRegistry<Stage, ()>>(registry: &R) -> Vec<&'static str> {
        registry.iter().map(|stage| stage.0).collect()
    }

    #[test]
    fn test_counts_absent_entries_until_build() {
        let builder = stages();
        assert_eq!(builder.len(), 5);
        assert!(!builder.is_empty());
        assert_eq!(builder.build_simple().count_plugins(), 4);
    }

    #[test]
    fn test_build_simple_keeps_insertion_order() {
        assert_eq!(names(&stages().build_simple()), ["render", "fetch", "log", "parse"]);
    }

    #[test]
    fn test_build_sorts_by_priority() {
        let registry = stages().build().unwrap();
        assert_eq!(names(&registry), ["fetch", "parse", "render", "log"]);
        assert!(registry.comparator().is_default());
    }

    #[test]
    fn test_build_reversed() {
        let registry = stages().reversed().build().unwrap();
        assert_eq!(names(&registry), ["log", "render", "parse", "fetch"]);
        assert!(registry.comparator().is_default_reverse());

        let registry = stages().reversed().reversed().build().unwrap();
        assert!(registry.comparator().is_default());
    }

    #[test]
    fn test_custom_comparator() {
        let registry = stages()
            .comparator(|a: &Stage, b: &Stage| a.0.cmp(b.0))
            .reversed()
            .build()
            .unwrap();
        assert_eq!(names(&registry), ["render", "parse", "log", "fetch"]);
        assert!(!registry.comparator().is_ascending());
    }

    #[test]
    fn test_try_build_requires_comparator() {
        let err = stages().try_build().unwrap_err();
        assert!(err.is_invalid_argument());

        let registry = stages()
            .comparator(|a: &Stage, b: &Stage| a.0.len().cmp(&b.0.len()))
            .try_build()
            .unwrap();
        assert_eq!(names(&registry), ["log", "fetch", "parse", "render"]);
    }

    #[test]
    fn test_failing_comparator_surfaces_error() {
        let err = stages()
            .comparator(FailingComparator::new("broken"))
            .build()
            .unwrap_err();
        assert!(matches!(err, RegistryError::Comparator(_)));
    }

    #[test]
    fn test_empty_builder() {
        let builder = RegistryBuilder::<Stage, ()>::default();
        assert!(builder.is_empty());
        assert!(builder.build().unwrap().is_empty());
    }
}
