//! Derive macro implementation for envfill

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;
mod shape;

use attrs::FieldAttrs;
use shape::Shape;

/// `EnvFill` derive macro
///
/// Implements the `envfill::EnvFill` trait for a struct with named fields,
/// filling annotated fields in place from environment variables, plus a
/// `from_env()` convenience constructor for types that also implement
/// `Default`.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Prepend a prefix to every variable name
///
/// **Field-level**:
/// - `#[env]`: Look up a variable named after the field
/// - `#[env(name = "custom_name")]`: Look up a custom variable name
/// - `#[env(nested)]`: Recurse into a nested section instead of looking
///   the field up
///
/// Variable names are upper-cased before lookup, so annotation case is
/// irrelevant. Fields without an `#[env]` attribute are skipped entirely.
///
/// Nested sections are visited unconditionally: the recursion depends only
/// on the `nested` marker, never on a variable name, and an empty
/// `Option`/`Box` section is allocated with `Default` before descending.
///
/// # Example
///
/// See the `envfill` crate documentation for usage examples.
#[proc_macro_derive(EnvFill, attributes(env))]
pub fn derive_envfill(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Struct name
    let struct_name = &input.ident;

    // Parse struct-level attributes (prefix)
    let mut prefix = String::new();

    for attr in &input.attrs {
        if !attr.path().is_ident("env") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("prefix") {
                let value = meta.value()?;
                let lit: syn::Lit = value.parse()?;
                if let syn::Lit::Str(s) = lit {
                    prefix = s.value();
                }
                return Ok(());
            }

            Err(meta.error("unsupported struct-level env attribute"))
        });
    }

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "EnvFill only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "EnvFill only supports structs")
                .to_compile_error()
                .into();
        }
    };

    // Generate a fill statement per annotated field, in declaration order
    let field_fillers = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref().unwrap();
        let field_type = &field.ty;

        // Parse attributes
        let attrs = FieldAttrs::from_field(field);

        // Untagged fields are left untouched, whatever their shape
        if !attrs.tagged {
            return None;
        }

        if attrs.nested {
            if attrs.name.is_some() {
                return Some(
                    syn::Error::new_spanned(
                        field,
                        "nested sections are recursed into, not looked up; \
                         remove the name attribute",
                    )
                    .to_compile_error(),
                );
            }

            // Recursion is unconditional for nested sections; empty
            // Option/Box sections are allocated before descending.
            return Some(quote! {
                ::envfill::EnvFill::fill_from_env(&mut self.#field_name)?;
            });
        }

        // Determine the variable name: explicit annotation or the field
        // name, prefixed, then upper-cased so lookup ignores case.
        let base_name = attrs.name.unwrap_or_else(|| field_name.to_string());
        let env_var_name = format!("{}{}", prefix, base_name).to_uppercase();

        Some(match shape::classify(field_type) {
            Shape::Scalar => quote! {
                if let Some(__text) = ::envfill::de::lookup(#env_var_name) {
                    self.#field_name =
                        <#field_type as ::envfill::de::EnvScalar>::coerce(&__text);
                }
            },
            Shape::List(elem) => quote! {
                if let Some(__text) = ::envfill::de::lookup(#env_var_name) {
                    self.#field_name = ::envfill::de::coerce_list::<#elem>(&__text);
                }
            },
            Shape::Map { convertible: true } => quote! {
                if let Some(__text) = ::envfill::de::lookup(#env_var_name) {
                    self.#field_name = ::envfill::de::coerce_map::<#field_type>(&__text);
                }
            },
            Shape::Map { convertible: false } => quote! {
                if ::envfill::de::lookup(#env_var_name).is_some() {
                    return ::std::result::Result::Err(
                        ::envfill::EnvError::unsupported_map::<#field_type>(#env_var_name),
                    );
                }
            },
            Shape::Unsupported => syn::Error::new_spanned(
                field_type,
                "EnvFill does not support this field type; expected String, \
                 an integer, bool, a Vec of those, a string-to-string map, \
                 or an #[env(nested)] section",
            )
            .to_compile_error(),
        })
    });

    // Generate the trait impl and the from_env() convenience
    let expanded = quote! {
        impl ::envfill::EnvFill for #struct_name {
            fn fill_from_env(&mut self) -> ::std::result::Result<(), ::envfill::EnvError> {
                #(#field_fillers)*
                ::std::result::Result::Ok(())
            }
        }

        impl #struct_name {
            /// Build a default instance and fill it from the environment
            ///
            /// # Errors
            ///
            /// - A map-shaped field cannot hold string keys and values
            /// - A nested section fails to decode
            pub fn from_env() -> ::envfill::anyhow::Result<Self>
            where
                Self: ::std::default::Default,
            {
                let mut value = <Self as ::std::default::Default>::default();
                ::envfill::EnvFill::fill_from_env(&mut value)?;
                ::std::result::Result::Ok(value)
            }
        }
    };

    TokenStream::from(expanded)
}
