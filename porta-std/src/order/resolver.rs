//! Effective priority of a plugin.

use super::metadata::{DefaultLookup, PriorityLookup};
use porta_core::{LOWEST_PRECEDENCE, Prioritized};

/// Maximum number of decorator layers unwrapped before giving up.
///
/// Exceeding it is not an error: the plugin simply has no priority.
pub const MAX_UNWRAP_DEPTH: usize = 32;

/// Computes the effective priority of a plugin.
///
/// For every layer, starting with the plugin itself, the resolver checks in
/// order:
///
/// 1. the priority the layer declares directly ([`Prioritized::order`]),
/// 2. the metadata declared for the layer's concrete type,
/// 3. the wrapped target, if the layer is a transparent decorator
///    ([`Prioritized::target`]), which becomes the next layer.
///
/// If no layer answers, or the chain is deeper than [`MAX_UNWRAP_DEPTH`],
/// [`resolve`](Self::resolve) returns [`LOWEST_PRECEDENCE`].
///
/// # Example
///
/// ```rust
/// use porta_std::{PriorityResolver, PriorityTable};
/// use porta_core::{LOWEST_PRECEDENCE, Prioritized};
///
/// struct Audit;
/// impl Prioritized for Audit {}
///
/// struct Undeclared;
/// impl Prioritized for Undeclared {}
///
/// let resolver = PriorityResolver::with_metadata(PriorityTable::new().with::<Audit>(2));
/// assert_eq!(resolver.resolve(&Audit), 2);
/// assert_eq!(resolver.resolve(&Undeclared), LOWEST_PRECEDENCE);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityResolver<L = DefaultLookup> {
    metadata: L,
}

impl PriorityResolver {
    /// Create a resolver backed by the process-wide default metadata.
    pub const fn new() -> Self {
        Self {
            metadata: DefaultLookup {},
        }
    }
}

impl<L> PriorityResolver<L> {
    /// Create a resolver backed by the given metadata source.
    pub const fn with_metadata(metadata: L) -> Self {
        Self { metadata }
    }

    /// The metadata source consulted for every layer.
    pub fn metadata(&self) -> &L {
        &self.metadata
    }
}

impl<L: PriorityLookup> PriorityResolver<L> {
    /// Resolve the priority of `plugin`, falling back to [`LOWEST_PRECEDENCE`].
    pub fn resolve<P: Prioritized + ?Sized>(&self, plugin: &P) -> i32 {
        self.find(plugin).unwrap_or(LOWEST_PRECEDENCE)
    }

    /// Find the priority of `plugin`, if any layer declares one.
    pub fn find<P: Prioritized + ?Sized>(&self, plugin: &P) -> Option<i32> {
        if let Some(order) = self.declared(plugin) {
            return Some(order);
        }

        let mut layer = plugin.target();
        let mut depth = 1;
        while let Some(inner) = layer {
            if depth > MAX_UNWRAP_DEPTH {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    plugin = plugin.concrete_type_name(),
                    max_depth = MAX_UNWRAP_DEPTH,
                    "decorator chain too deep, treating plugin as undeclared"
                );
                return None;
            }
            if let Some(order) = self.declared(inner) {
                return Some(order);
            }
            layer = inner.target();
            depth += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            plugin = plugin.concrete_type_name(),
            "no declared priority, using lowest precedence"
        );
        None
    }

    fn declared<P: Prioritized + ?Sized>(&self, layer: &P) -> Option<i32> {
        layer
            .order()
            .or_else(|| self.metadata.lookup(layer.concrete_type()))
    }
}
