//! # Capability Contract (Plugin)
//!
//! A plugin is an already-instantiated strategy that can tell whether it
//! applies to a delimiter value. Registries never construct or destroy
//! plugins; they only select among the ones they were handed.

use std::{rc::Rc, sync::Arc};

/// A capability provider selected at runtime by delimiter matching.
///
/// `supports` must be a pure predicate: it must not mutate the plugin and
/// must accept any value of `S`, including values it has never seen. A
/// plugin that cannot decide returns `false`.
///
/// # Example
///
/// ```rust
/// use porta_core::Plugin;
///
/// struct JsonCodec;
///
/// impl Plugin<str> for JsonCodec {
///     fn supports(&self, delimiter: &str) -> bool {
///         delimiter == "application/json"
///     }
/// }
///
/// assert!(JsonCodec.supports("application/json"));
/// assert!(!JsonCodec.supports("text/plain"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Plugin` for delimiters of type `{S}`",
    label = "missing `Plugin` implementation",
    note = "Plugins must implement `supports` to decide whether they apply to a `{S}`."
)]
pub trait Plugin<S: ?Sized> {
    /// Returns whether this plugin applies to the given delimiter.
    fn supports(&self, delimiter: &S) -> bool;
}

impl<S: ?Sized, P: Plugin<S> + ?Sized> Plugin<S> for &P {
    fn supports(&self, delimiter: &S) -> bool {
        (**self).supports(delimiter)
    }
}

impl<S: ?Sized, P: Plugin<S> + ?Sized> Plugin<S> for Box<P> {
    fn supports(&self, delimiter: &S) -> bool {
        (**self).supports(delimiter)
    }
}

impl<S: ?Sized, P: Plugin<S> + ?Sized> Plugin<S> for Arc<P> {
    fn supports(&self, delimiter: &S) -> bool {
        (**self).supports(delimiter)
    }
}

impl<S: ?Sized, P: Plugin<S> + ?Sized> Plugin<S> for Rc<P> {
    fn supports(&self, delimiter: &S) -> bool {
        (**self).supports(delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Prefix(&'static str);

    impl Plugin<str> for Prefix {
        fn supports(&self, delimiter: &str) -> bool {
            delimiter.starts_with(self.0)
        }
    }

    #[test]
    fn test_smart_pointers_forward_supports() {
        let boxed: Box<dyn Plugin<str>> = Box::new(Prefix("img/"));
        let shared: Arc<dyn Plugin<str>> = Arc::new(Prefix("img/"));

        assert!(boxed.supports("img/png"));
        assert!(shared.supports("img/png"));
        assert!(!(&shared).supports("txt/plain"));
    }

    #[test]
    fn test_unknown_delimiter_is_not_supported() {
        assert!(!Prefix("img/").supports(""));
    }
}
