//! Testing utilities for Porta.
//!
//! Fixtures for exercising registries without writing plugin types by hand.
//!
//! # Features
//!
//! - [`NamedPlugin`]: a `Plugin<str>` with a configurable support predicate
//!   and an optional direct priority
//! - [`Decorator`]: a transparent wrapper, sorted as the plugin it wraps
//! - [`FailingComparator`]: a comparator that always fails
//! - [`CountingComparator`]: a comparator that counts its invocations

use porta_core::{BoxError, Plugin, PluginComparator, Prioritized};
use std::{
    cmp::Ordering,
    fmt,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering as AtomicOrdering},
    },
};

// ============================================================================
// Named Plugin
// ============================================================================

/// Which delimiters a [`NamedPlugin`] supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// Every delimiter.
    All,
    /// Only the listed delimiters.
    Only(&'static [&'static str]),
    /// No delimiter at all.
    Nothing,
}

/// A string-delimited plugin identified by name.
///
/// # Example
///
/// ```rust
/// use porta_std::testing::NamedPlugin;
/// use porta_core::{Plugin, Prioritized};
///
/// let pdf = NamedPlugin::new("pdf").supporting(&["report"]).with_order(2);
///
/// assert!(pdf.supports("report"));
/// assert!(!pdf.supports("invoice"));
/// assert_eq!(pdf.order(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedPlugin {
    name: &'static str,
    support: Support,
    order: Option<i32>,
}

impl NamedPlugin {
    /// Create a plugin that supports every delimiter and declares no priority.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            support: Support::All,
            order: None,
        }
    }

    /// Restrict support to the given delimiters.
    pub const fn supporting(mut self, delimiters: &'static [&'static str]) -> Self {
        self.support = Support::Only(delimiters);
        self
    }

    /// Support no delimiter.
    pub const fn unsupported(mut self) -> Self {
        self.support = Support::Nothing;
        self
    }

    /// Declare a direct priority.
    pub const fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// The plugin's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The plugin's support predicate.
    pub fn support(&self) -> Support {
        self.support
    }
}

impl Plugin<str> for NamedPlugin {
    fn supports(&self, delimiter: &str) -> bool {
        match self.support {
            Support::All => true,
            Support::Only(delimiters) => delimiters.iter().any(|accepted| *accepted == delimiter),
            Support::Nothing => false,
        }
    }
}

impl Prioritized for NamedPlugin {
    fn order(&self) -> Option<i32> {
        self.order
    }
}

// ============================================================================
// Decorator
// ============================================================================

/// A transparent wrapper around a plugin.
///
/// Forwards `supports` to the wrapped plugin and exposes it as its
/// [`target`](Prioritized::target), so ordering sees the wrapped plugin's
/// priority. The decorator itself declares nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator<P> {
    inner: P,
}

impl<P> Decorator<P> {
    /// Wrap `inner`.
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    /// The wrapped plugin.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwrap the decorator.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<S: ?Sized, P: Plugin<S>> Plugin<S> for Decorator<P> {
    fn supports(&self, delimiter: &S) -> bool {
        self.inner.supports(delimiter)
    }
}

impl<P: Prioritized> Prioritized for Decorator<P> {
    fn target(&self) -> Option<&dyn Prioritized> {
        Some(&self.inner)
    }
}

// ============================================================================
// Named fixtures behind trait objects
// ============================================================================

/// A fixture plugin that can be stored behind a trait object.
pub trait TestPlugin: Plugin<str> + Prioritized + fmt::Debug + Send + Sync {
    /// The name of the innermost plugin.
    fn name(&self) -> &'static str;
}

/// A shared, type-erased fixture plugin.
pub type SharedPlugin = Arc<dyn TestPlugin>;

impl TestPlugin for NamedPlugin {
    fn name(&self) -> &'static str {
        self.name
    }
}

impl<P: TestPlugin> TestPlugin for Decorator<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

impl<P: TestPlugin + ?Sized> TestPlugin for Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<P: TestPlugin + ?Sized> TestPlugin for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Wrap a fixture into a [`SharedPlugin`].
pub fn shared<P: TestPlugin>(plugin: P) -> SharedPlugin {
    Arc::new(plugin)
}

/// Collect the names of `plugins`, in iteration order.
pub fn names<'a, P, I>(plugins: I) -> Vec<&'static str>
where
    P: TestPlugin + 'a,
    I: IntoIterator<Item = &'a P>,
{
    plugins.into_iter().map(TestPlugin::name).collect()
}

// ============================================================================
// Comparators
// ============================================================================

/// A comparator that fails on every comparison.
#[derive(Debug, Clone)]
pub struct FailingComparator {
    message: &'static str,
}

impl FailingComparator {
    /// Create a comparator whose error displays `message`.
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl<T: ?Sized> PluginComparator<T> for FailingComparator {
    fn compare(&self, _left: &T, _right: &T) -> Result<Ordering, BoxError> {
        Err(self.message.into())
    }
}

/// Wraps a comparator and counts how often it is invoked.
///
/// Clones share the counter.
///
/// # Example
///
/// ```rust
/// use porta_std::testing::CountingComparator;
/// use porta_core::PluginComparator;
///
/// let counting = CountingComparator::new(|a: &i32, b: &i32| a.cmp(b));
/// let observer = counting.clone();
///
/// counting.compare(&1, &2).unwrap();
/// assert_eq!(observer.count(), 1);
/// ```
#[derive(Debug)]
pub struct CountingComparator<C> {
    comparator: Arc<C>,
    calls: Arc<AtomicUsize>,
}

impl<C> CountingComparator<C> {
    /// Count the invocations of `comparator`.
    pub fn new(comparator: C) -> Self {
        Self {
            comparator: Arc::new(comparator),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of comparisons performed so far.
    pub fn count(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.calls.store(0, AtomicOrdering::SeqCst);
    }
}

impl<C> Clone for CountingComparator<C> {
    fn clone(&self) -> Self {
        Self {
            comparator: Arc::clone(&self.comparator),
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T: ?Sized, C: PluginComparator<T>> PluginComparator<T> for CountingComparator<C> {
    fn compare(&self, left: &T, right: &T) -> Result<Ordering, BoxError> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        self.comparator.compare(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_plugin_support() {
        let any = NamedPlugin::new("any");
        let some = NamedPlugin::new("some").supporting(&["a", "b"]);
        let none = NamedPlugin::new("none").unsupported();

        assert!(any.supports("zzz"));
        assert!(some.supports("b"));
        assert!(!some.supports("c"));
        assert!(!none.supports("a"));
        assert_eq!(none.support(), Support::Nothing);
    }

    #[test]
    fn test_decorator_is_transparent() {
        let wrapped = Decorator::new(NamedPlugin::new("inner").supporting(&["x"]).with_order(4));

        assert!(wrapped.supports("x"));
        assert_eq!(wrapped.order(), None);
        assert_eq!(wrapped.target().and_then(|inner| inner.order()), Some(4));
        assert_eq!(TestPlugin::name(&wrapped), "inner");
    }

    #[test]
    fn test_shared_plugins_keep_names() {
        let plugins = vec![
            shared(NamedPlugin::new("a")),
            shared(Decorator::new(NamedPlugin::new("b"))),
        ];
        assert_eq!(names(&plugins), ["a", "b"]);
    }

    #[test]
    fn test_failing_comparator() {
        let err = FailingComparator::new("nope").compare(&1, &2).unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }
}
