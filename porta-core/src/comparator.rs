//! Comparator contract for ordered registries.

use crate::error::BoxError;
use std::cmp::Ordering;

/// A comparison strategy over plugin references.
///
/// Ordered registries sort with this trait at construction time. A
/// comparator that returns an error aborts the construction; no partially
/// sorted registry is ever produced.
///
/// Any `Fn(&T, &T) -> Ordering` closure is an infallible comparator:
///
/// ```rust
/// use porta_core::PluginComparator;
/// use std::cmp::Ordering;
///
/// let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
/// let ordering = by_len.compare(&"ab".to_string(), &"a".to_string()).unwrap();
/// assert_eq!(ordering, Ordering::Greater);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot compare plugins of type `{T}`",
    label = "missing `PluginComparator` implementation",
    note = "Use a closure `Fn(&{T}, &{T}) -> Ordering` or implement `PluginComparator<{T}>`."
)]
pub trait PluginComparator<T: ?Sized>: Send + Sync {
    /// Compares two plugins. `Ordering::Less` sorts `left` first.
    fn compare(&self, left: &T, right: &T) -> Result<Ordering, BoxError>;
}

impl<T: ?Sized, F> PluginComparator<T> for F
where
    F: Fn(&T, &T) -> Ordering + Send + Sync,
{
    fn compare(&self, left: &T, right: &T) -> Result<Ordering, BoxError> {
        Ok(self(left, right))
    }
}
