use super::{
    simple::{SimplePluginRegistry, present},
    traits::PluginRegistry,
};
use crate::order::{Comparator, DEFAULT_COMPARATOR};
use porta_core::{Plugin, PluginComparator, Prioritized, RegistryError};
use std::{cmp::Ordering, convert::Infallible, fmt};

/// A registry that sorts its plugins on construction.
///
/// Without an explicit comparator, plugins are ordered by resolved priority,
/// ascending (see [`PriorityResolver`](crate::PriorityResolver)). Sorting is
/// stable: plugins with equal priority keep their input order, so undeclared
/// plugins trail in the order they were given.
///
/// The sorted sequence never changes. [`reverse`](Self::reverse) builds a new,
/// independent registry with the inverse comparator.
///
/// # Example
///
/// ```rust
/// use porta_std::{OrderAwarePluginRegistry, PluginRegistry};
/// use porta_core::{Plugin, Prioritized};
///
/// #[derive(Debug, PartialEq)]
/// struct Step(&'static str, i32);
///
/// impl Plugin<str> for Step {
///     fn supports(&self, _stage: &str) -> bool {
///         true
///     }
/// }
///
/// impl Prioritized for Step {
///     fn order(&self) -> Option<i32> {
///         Some(self.1)
///     }
/// }
///
/// let registry: OrderAwarePluginRegistry<Step, str> =
///     OrderAwarePluginRegistry::of([Step("persist", 5), Step("validate", 1)]);
/// assert_eq!(registry.plugin_for("save"), Some(&Step("validate", 1)));
///
/// let reversed = registry.into_reversed().unwrap();
/// assert_eq!(reversed.plugin_for("save"), Some(&Step("persist", 5)));
/// ```
pub struct OrderAwarePluginRegistry<T, S: ?Sized> {
    registry: SimplePluginRegistry<T, S>,
    comparator: Comparator<T>,
}

impl<T: Plugin<S> + Prioritized, S: ?Sized> OrderAwarePluginRegistry<T, S> {
    /// Create an empty registry using the default comparator.
    pub fn empty() -> Self {
        Self::empty_with(Comparator::by_priority())
    }

    /// Create a registry ordered by the default comparator.
    pub fn of<I>(plugins: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::by_priority(plugins.into_iter().collect(), Comparator::by_priority())
    }

    /// Create a registry ordered by the inverse of the default comparator.
    pub fn of_reverse<I>(plugins: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::by_priority(
            plugins.into_iter().collect(),
            Comparator::by_priority_reversed(),
        )
    }

    /// Create a registry ordered by the default comparator, dropping absent
    /// entries.
    pub fn from_nullable<I>(plugins: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self::by_priority(present(plugins), Comparator::by_priority())
    }

    // The default strategy cannot fail, so it sorts without an error path.
    fn by_priority(plugins: Vec<T>, comparator: Comparator<T>) -> Self {
        let ascending = comparator.is_ascending();
        let Ok(sorted) = sort_stable(plugins, |left, right| {
            let ordering = DEFAULT_COMPARATOR.compare_priority(left, right);
            Ok::<_, Infallible>(if ascending {
                ordering
            } else {
                ordering.reverse()
            })
        });
        Self::assemble(sorted, comparator)
    }
}

impl<T: Plugin<S>, S: ?Sized> OrderAwarePluginRegistry<T, S> {
    /// Create an empty registry that will order by `comparator`.
    pub fn empty_with(comparator: Comparator<T>) -> Self {
        Self::assemble(Vec::new(), comparator)
    }

    /// Create a registry ordered by an infallible comparison function.
    pub fn with_comparator<I, F>(plugins: I, compare: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let Ok(sorted) = sort_stable(plugins.into_iter().collect(), |left, right| {
            Ok::<_, Infallible>(compare(left, right))
        });
        Self::assemble(sorted, Comparator::new(compare))
    }

    /// Create a registry ordered by `comparator`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Comparator`] if the comparator fails; no
    /// registry is built in that case.
    pub fn try_with_comparator<I>(plugins: I, comparator: Comparator<T>) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_sorted(plugins.into_iter().collect(), comparator)
    }

    /// Create a registry ordered by `comparator`, dropping absent entries.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Comparator`] if the comparator fails.
    pub fn try_from_nullable<I>(plugins: I, comparator: Comparator<T>) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self::try_sorted(present(plugins), comparator)
    }

    /// Returns a new registry over a copy of these plugins, ordered by the
    /// inverse of the active comparator.
    ///
    /// The comparator is inverted, not the list: plugins the comparator
    /// considers equal keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Comparator`] if the comparator fails.
    pub fn reverse(&self) -> Result<Self, RegistryError>
    where
        T: Clone,
    {
        Self::try_sorted(self.registry.plugins().to_vec(), self.comparator.reversed())
    }

    /// Consuming version of [`reverse`](Self::reverse).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Comparator`] if the comparator fails.
    pub fn into_reversed(self) -> Result<Self, RegistryError> {
        let comparator = self.comparator.reversed();
        Self::try_sorted(self.registry.into_plugins(), comparator)
    }

    /// The comparator this registry was ordered with.
    pub fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    /// Consume the registry, returning the plugins in sorted order.
    pub fn into_plugins(self) -> Vec<T> {
        self.registry.into_plugins()
    }

    fn try_sorted(plugins: Vec<T>, comparator: Comparator<T>) -> Result<Self, RegistryError> {
        let sorted = sort_stable(plugins, |left, right| comparator.compare(left, right))
            .map_err(RegistryError::Comparator)?;
        Ok(Self::assemble(sorted, comparator))
    }

    fn assemble(sorted: Vec<T>, comparator: Comparator<T>) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            plugins = sorted.len(),
            comparator = ?comparator,
            "ordered plugin registry"
        );

        Self {
            registry: SimplePluginRegistry::from_vec(sorted),
            comparator,
        }
    }
}

/// Stable merge sort with a fallible comparison.
///
/// The first comparison error aborts the sort and is returned; the
/// partially merged items are dropped with it.
fn sort_stable<T, E, F>(items: Vec<T>, mut compare: F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    merge_sort(items, &mut compare)
}

fn merge_sort<T, E, F>(mut items: Vec<T>, compare: &mut F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if items.len() <= 1 {
        return Ok(items);
    }

    let back = items.split_off(items.len() / 2);
    let front = merge_sort(items, compare)?;
    let back = merge_sort(back, compare)?;

    let mut merged = Vec::with_capacity(front.len() + back.len());
    let mut front = front.into_iter().peekable();
    let mut back = back.into_iter().peekable();
    loop {
        // Equal elements take the front half first.
        let take_back = match (front.peek(), back.peek()) {
            (Some(left), Some(right)) => compare(left, right)? == Ordering::Greater,
            _ => break,
        };
        merged.extend(if take_back { back.next() } else { front.next() });
    }
    merged.extend(front);
    merged.extend(back);
    Ok(merged)
}

impl<T: Plugin<S>, S: ?Sized> PluginRegistry<T, S> for OrderAwarePluginRegistry<T, S> {
    fn plugins(&self) -> &[T] {
        self.registry.plugins()
    }
}

impl<T: Plugin<S> + Prioritized, S: ?Sized> Default for OrderAwarePluginRegistry<T, S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Plugin<S> + Prioritized, S: ?Sized> FromIterator<T> for OrderAwarePluginRegistry<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(plugins: I) -> Self {
        Self::of(plugins)
    }
}

impl<'a, T, S: ?Sized> IntoIterator for &'a OrderAwarePluginRegistry<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.registry).into_iter()
    }
}

impl<T: Clone, S: ?Sized> Clone for OrderAwarePluginRegistry<T, S> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T: fmt::Debug, S: ?Sized> fmt::Debug for OrderAwarePluginRegistry<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderAwarePluginRegistry")
            .field("plugins", &self.registry.as_slice())
            .field("comparator", &self.comparator)
            .finish()
    }
}
