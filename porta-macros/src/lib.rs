//! Procedural macros for Porta.
//!
//! - `#[derive(Prioritized)]` - implements `porta::Prioritized`, optionally
//!   declaring a type-level priority and a decorator target

use proc_macro::TokenStream;

mod prioritized;

/// Derive macro for implementing the `Prioritized` trait.
///
/// # Attributes
///
/// - `#[order(N)]` on the type declares priority `N` for it. The declaration
///   is collected at link time, so it is only available to non-generic types.
/// - `#[target]` on one field marks the type as a transparent decorator of
///   that field; ordering resolves the priority of the field's value.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(porta::Prioritized)]
/// #[order(10)]
/// struct Gzip;
///
/// #[derive(porta::Prioritized)]
/// struct Metered<P: porta::Prioritized> {
///     #[target]
///     inner: P,
///     calls: usize,
/// }
/// ```
#[proc_macro_derive(Prioritized, attributes(order, target))]
pub fn derive_prioritized(input: TokenStream) -> TokenStream {
    prioritized::derive_prioritized_impl(input)
}
