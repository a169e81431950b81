//! Type-level priority metadata.
//!
//! Metadata attaches a priority to a plugin's *type* instead of the plugin
//! answering for itself. The resolver asks a [`PriorityLookup`] with the
//! [`TypeId`] returned by [`Prioritized::concrete_type`].
//!
//! [`Prioritized::concrete_type`]: porta_core::Prioritized::concrete_type

use std::{any::TypeId, collections::HashMap, sync::Arc};

/// A source of priority metadata keyed by concrete type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a source of priority metadata",
    label = "missing `PriorityLookup` implementation",
    note = "Use a `PriorityTable`, `NoMetadata`, or implement `PriorityLookup`."
)]
pub trait PriorityLookup: Send + Sync {
    /// Returns the priority declared for the given type, if any.
    fn lookup(&self, ty: TypeId) -> Option<i32>;
}

/// A lookup that never declares anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMetadata;

impl PriorityLookup for NoMetadata {
    fn lookup(&self, _ty: TypeId) -> Option<i32> {
        None
    }
}

/// An explicit registration map from types to priorities.
///
/// # Example
///
/// ```rust
/// use porta_std::{PriorityLookup, PriorityTable};
/// use std::any::TypeId;
///
/// struct SmtpSender;
/// struct SmsSender;
///
/// let table = PriorityTable::new()
///     .with::<SmtpSender>(10)
///     .with::<SmsSender>(20);
///
/// assert_eq!(table.lookup(TypeId::of::<SmtpSender>()), Some(10));
/// assert_eq!(table.lookup(TypeId::of::<String>()), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriorityTable {
    entries: HashMap<TypeId, i32>,
}

impl PriorityTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a priority for `T`, replacing any earlier declaration.
    pub fn with<T: ?Sized + 'static>(mut self, order: i32) -> Self {
        self.insert::<T>(order);
        self
    }

    /// Declare a priority for `T` (mutable version).
    ///
    /// Returns the previous declaration, if any.
    pub fn insert<T: ?Sized + 'static>(&mut self, order: i32) -> Option<i32> {
        self.entries.insert(TypeId::of::<T>(), order)
    }

    /// Remove the declaration for `T`.
    pub fn remove<T: ?Sized + 'static>(&mut self) -> Option<i32> {
        self.entries.remove(&TypeId::of::<T>())
    }

    /// Get the number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table declares nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PriorityLookup for PriorityTable {
    fn lookup(&self, ty: TypeId) -> Option<i32> {
        self.entries.get(&ty).copied()
    }
}

impl<L: PriorityLookup + ?Sized> PriorityLookup for &L {
    fn lookup(&self, ty: TypeId) -> Option<i32> {
        (**self).lookup(ty)
    }
}

impl<L: PriorityLookup + ?Sized> PriorityLookup for Box<L> {
    fn lookup(&self, ty: TypeId) -> Option<i32> {
        (**self).lookup(ty)
    }
}

impl<L: PriorityLookup + ?Sized> PriorityLookup for Arc<L> {
    fn lookup(&self, ty: TypeId) -> Option<i32> {
        (**self).lookup(ty)
    }
}

impl<L: PriorityLookup> PriorityLookup for Option<L> {
    fn lookup(&self, ty: TypeId) -> Option<i32> {
        self.as_ref().and_then(|lookup| lookup.lookup(ty))
    }
}

// Composites: the first source that answers wins.

impl<L: PriorityLookup> PriorityLookup for [L] {
    fn lookup(&self, ty: TypeId) -> Option<i32> {
        self.iter().find_map(|lookup| lookup.lookup(ty))
    }
}

impl<L: PriorityLookup> PriorityLookup for Vec<L> {
    fn lookup(&self, ty: TypeId) -> Option<i32> {
        self.as_slice().lookup(ty)
    }
}

impl<A: PriorityLookup, B: PriorityLookup> PriorityLookup for (A, B) {
    fn lookup(&self, ty: TypeId) -> Option<i32> {
        self.0.lookup(ty).or_else(|| self.1.lookup(ty))
    }
}

// ============================================================================
// Link-time declarations
// ============================================================================

/// A priority declared for a type and submitted to `inventory`.
///
/// Usually emitted by `#[derive(Prioritized)]` with `#[order(N)]`, but can be
/// submitted by hand:
///
/// ```rust,ignore
/// struct Archiver;
///
/// porta_std::inventory::submit! {
///     porta_std::OrderDeclaration::of::<Archiver>(5)
/// }
/// ```
#[cfg(feature = "inventory")]
pub struct OrderDeclaration {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    order: i32,
}

#[cfg(feature = "inventory")]
impl OrderDeclaration {
    /// Declare `order` as the priority of `T`.
    pub const fn of<T: ?Sized + 'static>(order: i32) -> Self {
        Self {
            type_id: TypeId::of::<T>,
            type_name: std::any::type_name::<T>,
            order,
        }
    }

    /// The declaring type.
    pub fn declared_type(&self) -> TypeId {
        (self.type_id)()
    }

    /// Name of the declaring type, for diagnostics.
    pub fn declared_type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// The declared priority.
    pub fn order(&self) -> i32 {
        self.order
    }
}

#[cfg(feature = "inventory")]
impl std::fmt::Debug for OrderDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderDeclaration")
            .field("type_name", &self.declared_type_name())
            .field("order", &self.order)
            .finish()
    }
}

#[cfg(feature = "inventory")]
inventory::collect!(OrderDeclaration);

/// Looks up priorities among all [`OrderDeclaration`]s linked into the binary.
///
/// If a type is declared more than once, the numerically lowest priority wins
/// so the answer does not depend on link order.
#[cfg(feature = "inventory")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclaredOrders;

#[cfg(feature = "inventory")]
impl DeclaredOrders {
    /// Iterate over every collected declaration.
    pub fn iter(&self) -> impl Iterator<Item = &'static OrderDeclaration> {
        inventory::iter::<OrderDeclaration>.into_iter()
    }
}

#[cfg(feature = "inventory")]
impl PriorityLookup for DeclaredOrders {
    fn lookup(&self, ty: TypeId) -> Option<i32> {
        self.iter()
            .filter(|declaration| declaration.declared_type() == ty)
            .map(OrderDeclaration::order)
            .min()
    }
}

/// The metadata source consulted by the default comparator.
#[cfg(feature = "inventory")]
pub type DefaultLookup = DeclaredOrders;

/// The metadata source consulted by the default comparator.
#[cfg(not(feature = "inventory"))]
pub type DefaultLookup = NoMetadata;
