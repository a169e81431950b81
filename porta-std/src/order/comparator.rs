//! Comparison strategies for ordered registries.

use super::{
    metadata::{DefaultLookup, PriorityLookup},
    resolver::PriorityResolver,
};
use porta_core::{BoxError, PluginComparator, Prioritized};
use std::{cmp::Ordering, fmt, sync::Arc};

/// Orders plugins by resolved priority, ascending.
///
/// Lower priorities sort first. Plugins without a declared priority resolve
/// to [`LOWEST_PRECEDENCE`](porta_core::LOWEST_PRECEDENCE) and sort last.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityComparator<L = DefaultLookup> {
    resolver: PriorityResolver<L>,
}

/// The process-wide default comparator shared by every ordered registry.
pub static DEFAULT_COMPARATOR: PriorityComparator = PriorityComparator::new();

impl PriorityComparator {
    /// Create a comparator backed by the default metadata.
    pub const fn new() -> Self {
        Self {
            resolver: PriorityResolver::new(),
        }
    }
}

impl<L> PriorityComparator<L> {
    /// Create a comparator using the given resolver.
    pub const fn with_resolver(resolver: PriorityResolver<L>) -> Self {
        Self { resolver }
    }

    /// The resolver used to compute priorities.
    pub fn resolver(&self) -> &PriorityResolver<L> {
        &self.resolver
    }
}

impl<L: PriorityLookup> PriorityComparator<L> {
    /// Compare two plugins by resolved priority.
    pub fn compare_priority<P: Prioritized + ?Sized>(&self, left: &P, right: &P) -> Ordering {
        self.resolver
            .resolve(left)
            .cmp(&self.resolver.resolve(right))
    }
}

impl<T: Prioritized + ?Sized, L: PriorityLookup> PluginComparator<T> for PriorityComparator<L> {
    fn compare(&self, left: &T, right: &T) -> Result<Ordering, BoxError> {
        Ok(self.compare_priority(left, right))
    }
}

// ============================================================================
// Comparator - the invertible strategy held by a registry
// ============================================================================

enum Strategy<T: ?Sized> {
    Default(Arc<dyn PluginComparator<T>>),
    Custom(Arc<dyn PluginComparator<T>>),
}

impl<T: ?Sized> Clone for Strategy<T> {
    fn clone(&self) -> Self {
        match self {
            Strategy::Default(comparator) => Strategy::Default(Arc::clone(comparator)),
            Strategy::Custom(comparator) => Strategy::Custom(Arc::clone(comparator)),
        }
    }
}

/// The active comparator of an ordered registry.
///
/// A comparator is a shared strategy plus a direction. [`reversed`](Self::reversed)
/// flips the direction instead of wrapping or re-implementing the strategy,
/// so reversing twice yields the original comparator, and ties (pairs the
/// strategy considers equal) stay ties in both directions.
///
/// # Example
///
/// ```rust
/// use porta_std::Comparator;
/// use porta_core::PluginComparator;
/// use std::cmp::Ordering;
///
/// let by_len = Comparator::<String>::new(|a: &String, b: &String| a.len().cmp(&b.len()));
/// let (short, long) = ("a".to_string(), "abc".to_string());
///
/// assert_eq!(by_len.compare(&short, &long).unwrap(), Ordering::Less);
/// assert_eq!(by_len.reversed().compare(&short, &long).unwrap(), Ordering::Greater);
/// assert!(by_len.reversed().reversed().is_ascending());
/// ```
pub struct Comparator<T: ?Sized> {
    strategy: Strategy<T>,
    ascending: bool,
}

impl<T: ?Sized> Comparator<T> {
    /// Create an ascending comparator from a custom strategy.
    pub fn new<C>(comparator: C) -> Self
    where
        C: PluginComparator<T> + 'static,
    {
        Self::from_shared(Arc::new(comparator))
    }

    /// Create an ascending comparator from an already shared strategy.
    pub fn from_shared(comparator: Arc<dyn PluginComparator<T>>) -> Self {
        Self {
            strategy: Strategy::Custom(comparator),
            ascending: true,
        }
    }

    /// Returns the structural inverse of this comparator.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            strategy: self.strategy.clone(),
            ascending: !self.ascending,
        }
    }

    /// Whether the strategy's order is used as is (`true`) or inverted.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Whether this comparator orders by resolved priority with the default
    /// metadata, like [`DEFAULT_COMPARATOR`].
    pub fn is_priority_order(&self) -> bool {
        matches!(self.strategy, Strategy::Default(_))
    }

    /// Whether this is [`Comparator::by_priority`].
    pub fn is_default(&self) -> bool {
        self.is_priority_order() && self.ascending
    }

    /// Whether this is [`Comparator::by_priority_reversed`].
    pub fn is_default_reverse(&self) -> bool {
        self.is_priority_order() && !self.ascending
    }
}

impl<T: Prioritized + ?Sized> Comparator<T> {
    /// The default comparator: ascending resolved priority.
    pub fn by_priority() -> Self {
        Self {
            strategy: Strategy::Default(Arc::new(PriorityComparator::new())),
            ascending: true,
        }
    }

    /// The inverse of [`Comparator::by_priority`].
    pub fn by_priority_reversed() -> Self {
        Self::by_priority().reversed()
    }
}

impl<T: ?Sized> PluginComparator<T> for Comparator<T> {
    fn compare(&self, left: &T, right: &T) -> Result<Ordering, BoxError> {
        let ordering = match &self.strategy {
            Strategy::Default(comparator) => comparator.compare(left, right)?,
            Strategy::Custom(comparator) => comparator.compare(left, right)?,
        };
        Ok(if self.ascending {
            ordering
        } else {
            ordering.reverse()
        })
    }
}

impl<T: ?Sized> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy.clone(),
            ascending: self.ascending,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self.strategy {
            Strategy::Default(_) => "priority",
            Strategy::Custom(_) => "custom",
        };
        f.debug_struct("Comparator")
            .field("strategy", &strategy)
            .field("ascending", &self.ascending)
            .finish()
    }
}

impl<T: Prioritized + ?Sized> Default for Comparator<T> {
    fn default() -> Self {
        Self::by_priority()
    }
}
