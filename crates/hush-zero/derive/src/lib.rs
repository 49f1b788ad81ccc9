// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Procedural macros for the `hush_zero` crate.
//!
//! Provides `#[derive(Zeroable)]`, which gives a struct the same deep
//! zeroization the engine applies to built-in types: every field, public or
//! private, is cleared and the struct probes as zero once all of them do.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use proc_macro::TokenStream;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Index, LitStr, Type, parse_macro_input};

/// Derives `DeepZeroizable`, `ZeroizeMetadata`, `ZeroizationProbe`, and optionally `Drop` for a struct.
///
/// # Requirements
///
/// - All fields must implement `DeepZeroizable` (except fields with `#[zeroable(skip)]`)
/// - Shared references (`&T`) cannot be cleared and must be marked `#[zeroable(skip)]`
/// - Enums and unions are rejected
///
/// # Attributes
///
/// - `#[zeroable(drop)]` on the struct: also generates a `Drop` implementation that zeroizes
/// - `#[zeroable(skip)]` on a field: leave the field untouched and out of the probe
///
/// # Generated Implementations
///
/// - `DeepZeroizable`: zeroizes every non-skipped field one level deeper
/// - `ZeroizeMetadata`: `CAN_BE_BULK_ZEROIZED = false`
/// - `ZeroizationProbe`: `true` when every non-skipped field is zeroized
///
/// # Examples
///
/// ```rust
/// use hush_zero_core::{DeepZeroizable, ZeroizationProbe};
/// use hush_zero_derive::Zeroable;
///
/// #[derive(Zeroable)]
/// struct Credentials {
///     pub user: String,
///     password: String,
///     #[zeroable(skip)]
///     pub region: &'static str,
/// }
///
/// let mut creds = Credentials {
///     user: "admin".into(),
///     password: "hunter2".into(),
///     region: "eu-west-1",
/// };
///
/// creds.zeroize();
///
/// assert!(creds.is_zeroized());
/// assert!(creds.password.is_empty());
/// assert_eq!(creds.region, "eu-west-1");
/// ```
///
/// ## With automatic Drop
///
/// ```rust
/// use hush_zero_derive::Zeroable;
///
/// #[derive(Zeroable)]
/// #[zeroable(drop)]
/// struct ApiKey {
///     key: Vec<u8>,
/// }
/// // Drop is automatically generated
/// ```
#[proc_macro_derive(Zeroable, attributes(zeroable))]
pub fn derive_zeroable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input).unwrap_or_else(|e| e).into()
}

/// Finds the root crate path from a list of candidates.
///
/// A candidate is either a package name (`hush-zero-core`) or a package name
/// followed by a module path (`hush::zero`) for umbrella crates that re-export
/// the engine under a module.
pub(crate) fn find_root_with_candidates(candidates: &[&'static str]) -> TokenStream2 {
    for &candidate in candidates {
        let (package, module) = match candidate.split_once("::") {
            Some((package, module)) => (package, Some(module)),
            None => (candidate, None),
        };

        let base = match crate_name(package) {
            Ok(FoundCrate::Itself) => quote!(crate),
            Ok(FoundCrate::Name(name)) => {
                let id = Ident::new(&name, Span::call_site());
                quote!(#id)
            }
            Err(_) => continue,
        };

        return match module {
            None => base,
            Some(module) => match syn::parse_str::<syn::Path>(module) {
                Ok(path) => quote!(#base::#path),
                Err(_) => base,
            },
        };
    }

    let msg = "Zeroable: could not find hush-zero or hush-zero-core. Add hush-zero to Cargo.toml.";
    let lit = LitStr::new(msg, Span::call_site());
    quote! { compile_error!(#lit); }
}

/// Detects if a type is a shared reference (`&T`).
///
/// Shared references give no mutable access, so they cannot be cleared.
pub(crate) fn is_immut_reference_type(ty: &Type) -> bool {
    matches!(ty, Type::Reference(r) if r.mutability.is_none())
}

/// Options read from `#[zeroable(...)]` attributes.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct ZeroableOptions {
    pub(crate) skip: bool,
    pub(crate) drop: bool,
}

/// Parses every `#[zeroable(...)]` attribute in `attrs`.
///
/// Unknown keys are reported as errors at their span.
pub(crate) fn parse_zeroable_options(attrs: &[Attribute]) -> syn::Result<ZeroableOptions> {
    let mut options = ZeroableOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("zeroable")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("drop") {
                options.drop = true;
                Ok(())
            } else {
                Err(meta.error("unsupported zeroable option, expected `skip` or `drop`"))
            }
        })?;
    }

    Ok(options)
}

/// Expands the DeriveInput into the implementations of `Zeroable`.
fn expand(input: DeriveInput) -> Result<TokenStream2, TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // 1) Resolve the engine crate (prefer hush_zero_core)
    let root = find_root_with_candidates(&[
        "hush-zero-core",
        "hush-zero",
        "hush::zero",
        "hush-secret::hush_zero",
    ]);

    // 2) Get all fields as a Vec
    let all_fields: Vec<(usize, &syn::Field)> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().enumerate().collect(),
            Fields::Unnamed(unnamed) => unnamed.unnamed.iter().enumerate().collect(),
            Fields::Unit => vec![],
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Zeroable can only be derived for structs (named or tuple).",
            )
            .to_compile_error());
        }
    };

    let struct_options = parse_zeroable_options(&input.attrs).map_err(|e| e.to_compile_error())?;

    // 3) Validate fields and keep the ones that are cleared
    let mut cleared: Vec<(usize, &syn::Field)> = Vec::with_capacity(all_fields.len());

    for (i, f) in &all_fields {
        let options = parse_zeroable_options(&f.attrs).map_err(|e| e.to_compile_error())?;

        if options.skip {
            continue;
        }

        if is_immut_reference_type(&f.ty) {
            let field_name = if let Some(ident) = &f.ident {
                format!("field `{}`", ident)
            } else {
                format!("field at index {}", i)
            };

            return Err(syn::Error::new_spanned(
                &f.ty,
                format!(
                    "{} has type `&T` (immutable reference) which cannot be zeroized. \
                     Add `#[zeroable(skip)]` to exclude it from zeroization.",
                    field_name
                ),
            )
            .to_compile_error());
        }

        cleared.push((*i, *f));
    }

    // 4) Field accessors for both directions
    let (immut_refs, mut_refs): (Vec<TokenStream2>, Vec<TokenStream2>) = cleared
        .iter()
        .map(|(i, f)| {
            let access = match &f.ident {
                Some(ident) => quote! { self.#ident },
                None => {
                    let idx = Index::from(*i);
                    quote! { self.#idx }
                }
            };

            (quote! { &#access }, quote! { &mut #access })
        })
        .unzip();

    let len_lit = syn::LitInt::new(&cleared.len().to_string(), Span::call_site());

    // 5) Emit the trait implementations
    let drop_impl = if struct_options.drop {
        quote! {
            impl #impl_generics Drop for #struct_name #ty_generics #where_clause {
                fn drop(&mut self) {
                    #root::DeepZeroizable::zeroize(self);
                }
            }
        }
    } else {
        quote! {}
    };

    let output = quote! {
        unsafe impl #impl_generics #root::ZeroizeMetadata for #struct_name #ty_generics #where_clause {
            const CAN_BE_BULK_ZEROIZED: bool = false;
        }

        impl #impl_generics #root::DeepZeroizable for #struct_name #ty_generics #where_clause {
            fn deep_zeroize(&mut self, depth: #root::Depth) {
                let fields: [&mut dyn #root::DeepZeroizable; #len_lit] = [
                    #( #root::collections::to_deep_zeroizable_dyn_mut(#mut_refs) ),*
                ];
                #root::collections::zeroize_collection(&mut fields.into_iter(), depth.descend())
            }
        }

        impl #impl_generics #root::ZeroizationProbe for #struct_name #ty_generics #where_clause {
            fn is_zeroized(&self) -> bool {
                let fields: [&dyn #root::ZeroizationProbe; #len_lit] = [
                    #( #root::collections::to_zeroization_probe_dyn_ref(#immut_refs) ),*
                ];
                #root::collections::collection_zeroed(&mut fields.into_iter())
            }
        }

        #drop_impl
    };

    Ok(output)
}
