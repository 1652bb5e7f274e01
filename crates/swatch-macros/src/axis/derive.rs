//! Implementation of the `#[derive(Axis)]` macro.
//!
//! Generates `swatch::AxisValue`, `Display`, and (when a variant is marked
//! `#[axis(default)]`) `Default` for a fieldless enum.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_container_attrs, parse_variant_attrs};

/// Information about one enum variant.
struct VariantInfo {
    ident: syn::Ident,
    value_name: String,
}

/// Main implementation of the Axis derive macro.
pub fn axis_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let enum_name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(Error::new(
                input.span(),
                "Axis can only be derived for enums",
            ))
        }
    };

    if variants.is_empty() {
        return Err(Error::new(
            input.span(),
            "Axis enums need at least one variant",
        ));
    }

    let container = parse_container_attrs(&input.attrs)?;
    let axis_name = container.name.ok_or_else(|| {
        Error::new(
            input.span(),
            "missing #[axis(name = \"...\")] on the enum",
        )
    })?;

    let mut infos: Vec<VariantInfo> = Vec::with_capacity(variants.len());
    let mut default_variant: Option<syn::Ident> = None;

    for variant in variants.iter() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new(
                variant.span(),
                "Axis variants cannot carry fields",
            ));
        }

        let attrs = parse_variant_attrs(&variant.attrs)?;
        let value_name = attrs
            .rename
            .unwrap_or_else(|| to_kebab_case(&variant.ident.to_string()));

        if infos.iter().any(|info| info.value_name == value_name) {
            return Err(Error::new(
                variant.span(),
                format!("duplicate axis value name '{}'", value_name),
            ));
        }

        if attrs.default {
            if default_variant.is_some() {
                return Err(Error::new(
                    variant.span(),
                    "only one variant can be marked #[axis(default)]",
                ));
            }
            default_variant = Some(variant.ident.clone());
        }

        infos.push(VariantInfo {
            ident: variant.ident.clone(),
            value_name,
        });
    }

    let value_literals: Vec<&str> = infos.iter().map(|i| i.value_name.as_str()).collect();

    let to_name_arms: Vec<TokenStream> = infos
        .iter()
        .map(|info| {
            let ident = &info.ident;
            let name = &info.value_name;
            quote! { #enum_name::#ident => #name, }
        })
        .collect();

    let from_name_arms: Vec<TokenStream> = infos
        .iter()
        .map(|info| {
            let ident = &info.ident;
            let name = &info.value_name;
            quote! { #name => ::core::option::Option::Some(#enum_name::#ident), }
        })
        .collect();

    let default_const = match &default_variant {
        Some(ident) => {
            let name = infos
                .iter()
                .find(|info| &info.ident == ident)
                .map(|info| info.value_name.as_str())
                .unwrap_or_default();
            quote! { ::core::option::Option::Some(#name) }
        }
        None => quote! { ::core::option::Option::None },
    };

    let default_impl = default_variant.as_ref().map(|ident| {
        quote! {
            impl ::core::default::Default for #enum_name {
                fn default() -> Self {
                    #enum_name::#ident
                }
            }
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::swatch::AxisValue for #enum_name #ty_generics #where_clause {
            const AXIS: &'static str = #axis_name;
            const VALUES: &'static [&'static str] = &[#(#value_literals),*];
            const DEFAULT: ::core::option::Option<&'static str> = #default_const;

            fn value_name(&self) -> &'static str {
                match self {
                    #(#to_name_arms)*
                }
            }

            fn from_value_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#from_name_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::core::fmt::Display for #enum_name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::swatch::AxisValue::value_name(self))
            }
        }

        #default_impl
    };

    Ok(expanded)
}

/// Convert a variant identifier to kebab-case.
fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c.is_uppercase() {
            if matches!(prev, Some(p) if p.is_lowercase() || p.is_ascii_digit()) {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else if c == '_' {
            result.push('-');
        } else {
            result.push(c);
        }
        prev = Some(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("Default"), "default");
        assert_eq!(to_kebab_case("Sm"), "sm");
        assert_eq!(to_kebab_case("IconSm"), "icon-sm");
        assert_eq!(to_kebab_case("Xl2"), "xl2");
        assert_eq!(to_kebab_case("Size2Xl"), "size2-xl");
        assert_eq!(to_kebab_case("Snake_Case"), "snake-case");
    }

    #[test]
    fn test_rejects_struct() {
        let input: DeriveInput = syn::parse_quote! {
            #[axis(name = "size")]
            struct NotAnEnum;
        };
        assert!(axis_derive_impl(input).is_err());
    }

    #[test]
    fn test_requires_name() {
        let input: DeriveInput = syn::parse_quote! {
            enum Size { Sm, Lg }
        };
        let err = axis_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("axis(name"));
    }

    #[test]
    fn test_rejects_two_defaults() {
        let input: DeriveInput = syn::parse_quote! {
            #[axis(name = "size")]
            enum Size {
                #[axis(default)]
                Sm,
                #[axis(default)]
                Lg,
            }
        };
        assert!(axis_derive_impl(input).is_err());
    }

    #[test]
    fn test_rejects_duplicate_value_names() {
        let input: DeriveInput = syn::parse_quote! {
            #[axis(name = "size")]
            enum Size {
                Sm,
                #[axis(rename = "sm")]
                Small,
            }
        };
        assert!(axis_derive_impl(input).is_err());
    }

    #[test]
    fn test_generates_value_names() {
        let input: DeriveInput = syn::parse_quote! {
            #[axis(name = "variant")]
            enum Variant {
                #[axis(default)]
                Default,
                #[axis(rename = "outline")]
                Outlined,
            }
        };
        let tokens = axis_derive_impl(input).unwrap().to_string();
        assert!(tokens.contains("\"variant\""));
        assert!(tokens.contains("\"outline\""));
        assert!(tokens.contains("Default for Variant"));
    }
}
