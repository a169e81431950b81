//! # Priority Capability (Prioritized)
//!
//! Ordered registries sort their plugins by an integer priority where a
//! lower number means higher precedence. A plugin can take part in that
//! ordering in three ways:
//!
//! 1. **Directly**, by returning a value from [`Prioritized::order`].
//! 2. **Through metadata** attached to its concrete type, looked up by the
//!    [`TypeId`] returned from [`Prioritized::concrete_type`].
//! 3. **Through a decorator**: a transparent wrapper returns the value it
//!    wraps from [`Prioritized::target`], and ordering resolves the priority
//!    of that value instead.
//!
//! A plugin that does none of these sorts with [`LOWEST_PRECEDENCE`].

use std::{
    any::{TypeId, type_name},
    rc::Rc,
    sync::Arc,
};

/// Priority of plugins without any declared priority. Sorts last.
pub const LOWEST_PRECEDENCE: i32 = i32::MAX;

/// Numerically smallest priority. Sorts first.
pub const HIGHEST_PRECEDENCE: i32 = i32::MIN;

/// Introspection hooks consulted when ordering plugins.
///
/// Every method has a default, so plain plugins opt in with an empty impl:
///
/// ```rust
/// use porta_core::Prioritized;
///
/// struct Fallback;
/// impl Prioritized for Fallback {}
///
/// struct Primary;
/// impl Prioritized for Primary {
///     fn order(&self) -> Option<i32> {
///         Some(1)
///     }
/// }
///
/// assert_eq!(Fallback.order(), None);
/// assert_eq!(Primary.order(), Some(1));
/// ```
///
/// # Decorators
///
/// A wrapper that intercepts a plugin for cross-cutting concerns should
/// return the wrapped value from [`target`](Prioritized::target). The
/// wrapper then sorts as if it were the value it wraps:
///
/// ```rust
/// use porta_core::Prioritized;
///
/// struct Inner;
/// impl Prioritized for Inner {
///     fn order(&self) -> Option<i32> {
///         Some(3)
///     }
/// }
///
/// struct Timed<P>(P);
/// impl<P: Prioritized> Prioritized for Timed<P> {
///     fn target(&self) -> Option<&dyn Prioritized> {
///         Some(&self.0)
///     }
/// }
///
/// let timed = Timed(Inner);
/// assert_eq!(timed.target().and_then(|inner| inner.order()), Some(3));
/// ```
///
/// A type without an impl is rejected where a priority is required:
///
/// ```compile_fail
/// use porta_core::Prioritized;
///
/// struct Unordered;
///
/// fn order_of(plugin: &dyn Prioritized) -> Option<i32> {
///     plugin.order()
/// }
///
/// order_of(&Unordered);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Prioritized`",
    label = "missing `Prioritized` implementation",
    note = "Add `impl Prioritized for {Self} {{}}` (or `#[derive(Prioritized)]`) to order it by priority."
)]
pub trait Prioritized: 'static {
    /// Priority declared directly by this value, if any.
    fn order(&self) -> Option<i32> {
        None
    }

    /// The value this one transparently wraps, if it is a decorator.
    fn target(&self) -> Option<&dyn Prioritized> {
        None
    }

    /// Identity of the concrete type, used as the key for priority metadata.
    fn concrete_type(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Name of the concrete type, for diagnostics.
    fn concrete_type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

// Smart pointers are not decorator layers: they forward every hook, so the
// pointee is what ordering and metadata lookup see.
macro_rules! forward_prioritized {
    ($($pointer:ty),* $(,)?) => {
        $(
            impl<P: Prioritized + ?Sized> Prioritized for $pointer {
                fn order(&self) -> Option<i32> {
                    (**self).order()
                }

                fn target(&self) -> Option<&dyn Prioritized> {
                    (**self).target()
                }

                fn concrete_type(&self) -> TypeId {
                    (**self).concrete_type()
                }

                fn concrete_type_name(&self) -> &'static str {
                    (**self).concrete_type_name()
                }
            }
        )*
    };
}

forward_prioritized!(&'static P, Box<P>, Arc<P>, Rc<P>);

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;
    impl Prioritized for Plain {}

    struct Ordered(i32);
    impl Prioritized for Ordered {
        fn order(&self) -> Option<i32> {
            Some(self.0)
        }
    }

    #[test]
    fn test_defaults_declare_nothing() {
        assert_eq!(Plain.order(), None);
        assert!(Plain.target().is_none());
        assert_eq!(Plain.concrete_type(), TypeId::of::<Plain>());
    }

    #[test]
    fn test_trait_object_reports_concrete_type() {
        let erased: &dyn Prioritized = &Ordered(7);
        assert_eq!(erased.concrete_type(), TypeId::of::<Ordered>());
        assert!(erased.concrete_type_name().ends_with("Ordered"));
    }

    #[test]
    fn test_pointers_are_transparent() {
        let shared: Arc<dyn Prioritized> = Arc::new(Ordered(2));
        let boxed: Box<Ordered> = Box::new(Ordered(4));

        assert_eq!(shared.order(), Some(2));
        assert_eq!(shared.concrete_type(), TypeId::of::<Ordered>());
        assert_eq!(boxed.order(), Some(4));
        assert_eq!(boxed.concrete_type(), TypeId::of::<Ordered>());
    }
}
