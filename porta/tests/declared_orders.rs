//! Link-time priority declarations consulted by the default comparator.

#![cfg(feature = "inventory")]

use porta::{
    DeclaredOrders, OrderAwarePluginRegistry, OrderDeclaration, Plugin, PluginRegistry,
    Prioritized, PriorityLookup, PriorityResolver,
    testing::Decorator,
};
use std::any::TypeId;

#[derive(Debug, Clone, PartialEq)]
struct Archiver;

#[derive(Debug, Clone, PartialEq)]
struct Mailer;

#[derive(Debug, Clone, PartialEq)]
struct Auditor;

porta::inventory::submit! {
    OrderDeclaration::of::<Archiver>(5)
}

porta::inventory::submit! {
    OrderDeclaration::of::<Mailer>(1)
}

// A second declaration for the same type; the lowest wins.
porta::inventory::submit! {
    OrderDeclaration::of::<Mailer>(3)
}

macro_rules! job_plugin {
    ($($ty:ident),*) => {
        $(
            impl Plugin<str> for $ty {
                fn supports(&self, _job: &str) -> bool {
                    true
                }
            }

            impl Prioritized for $ty {}
        )*
    };
}

job_plugin!(Archiver, Mailer, Auditor);

#[test]
fn test_declarations_are_collected() {
    let declared: Vec<_> = DeclaredOrders
        .iter()
        .filter(|declaration| declaration.declared_type() == TypeId::of::<Mailer>())
        .map(OrderDeclaration::order)
        .collect();

    assert_eq!(declared.len(), 2);
    assert_eq!(DeclaredOrders.lookup(TypeId::of::<Mailer>()), Some(1));
    assert_eq!(DeclaredOrders.lookup(TypeId::of::<Auditor>()), None);
}

#[test]
fn test_default_resolver_reads_declarations() {
    let resolver = PriorityResolver::new();
    assert_eq!(resolver.resolve(&Archiver), 5);
    assert_eq!(resolver.resolve(&Decorator::new(Mailer)), 1);
}

#[test]
fn test_default_comparator_uses_declarations() {
    let registry: OrderAwarePluginRegistry<Box<dyn JobPlugin>, str> =
        OrderAwarePluginRegistry::of([
            Box::new(Auditor) as Box<dyn JobPlugin>,
            Box::new(Archiver),
            Box::new(Decorator::new(Mailer)),
        ]);

    let order: Vec<_> = registry.iter().map(|job| job.concrete_type()).collect();
    assert_eq!(
        order,
        [
            TypeId::of::<Decorator<Mailer>>(),
            TypeId::of::<Archiver>(),
            TypeId::of::<Auditor>(),
        ]
    );
}

trait JobPlugin: Plugin<str> + Prioritized + std::fmt::Debug {}
impl<P: Plugin<str> + Prioritized + std::fmt::Debug> JobPlugin for P {}
