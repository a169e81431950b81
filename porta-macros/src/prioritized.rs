//! `#[derive(Prioritized)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, GenericParam, Member, Type, parse_macro_input,
    parse_quote, spanned::Spanned,
};

/// Implementation of `#[derive(Prioritized)]`.
pub fn derive_prioritized_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let order = order_attr(&input.attrs)?;
    let target = target_field(&input)?;
    let name = &input.ident;

    if let Some(order) = &order {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "#[order] cannot be used on generic types; declare the priority on a concrete type",
            ));
        }
        if order.is_none() {
            return Err(syn::Error::new(
                name.span(),
                "#[order] expects a priority, e.g. #[order(10)]",
            ));
        }
    }

    // `Prioritized: 'static`, so every type parameter must be too.
    let type_params: Vec<_> = input
        .generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => Some(ty.ident.clone()),
            _ => None,
        })
        .collect();
    {
        let where_clause = input.generics.make_where_clause();
        for param in &type_params {
            where_clause.predicates.push(parse_quote!(#param: 'static));
        }
        if let Some((_, ty)) = &target {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::porta::Prioritized));
        }
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let target_impl = target.as_ref().map(|(member, _)| {
        quote! {
            fn target(&self) -> ::core::option::Option<&dyn ::porta::Prioritized> {
                ::core::option::Option::Some(&self.#member)
            }
        }
    });

    let declaration = order.flatten().map(|order| {
        quote! {
            ::porta::inventory::submit! {
                ::porta::OrderDeclaration::of::<#name>(#order)
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::porta::Prioritized for #name #ty_generics #where_clause {
            #target_impl
        }

        #declaration
    })
}

/// `None` without the attribute, `Some(None)` for a bare `#[order]`.
fn order_attr(attrs: &[Attribute]) -> syn::Result<Option<Option<Expr>>> {
    let mut found = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("order")) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate #[order] attribute"));
        }
        found = Some(match &attr.meta {
            syn::Meta::Path(_) => None,
            _ => Some(attr.parse_args::<Expr>()?),
        });
    }
    Ok(found)
}

fn target_field(input: &DeriveInput) -> syn::Result<Option<(Member, Type)>> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            if let Some(attr) = data
                .variants
                .iter()
                .flat_map(|variant| variant.fields.iter())
                .flat_map(|field| field.attrs.iter())
                .find(|attr| attr.path().is_ident("target"))
            {
                return Err(syn::Error::new_spanned(
                    attr,
                    "#[target] is only supported on struct fields",
                ));
            }
            return Ok(None);
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "Prioritized cannot be derived for unions",
            ));
        }
    };

    let mut target = None;
    let members: Vec<Member> = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|field| field.ident.clone().map(Member::Named))
            .collect(),
        Fields::Unnamed(unnamed) => (0..unnamed.unnamed.len())
            .map(|index| Member::Unnamed(index.into()))
            .collect(),
        Fields::Unit => Vec::new(),
    };

    for (field, member) in fields.iter().zip(members) {
        let Some(attr) = field.attrs.iter().find(|attr| attr.path().is_ident("target")) else {
            continue;
        };
        if target.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "only one field can be marked #[target]",
            ));
        }
        target = Some((member, field.ty.clone()));
    }

    Ok(target)
}
