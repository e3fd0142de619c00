//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts per-field annotations during macro expansion and
//! decides whether a field takes part in environment decoding at all.

use syn::{Field, Lit, Meta};

/// Parsed `#[env(...)]` attributes from a struct field.
///
/// A field without any `#[env]` attribute is not eligible for decoding and
/// is skipped entirely, whatever its type.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Whether the field carries an `#[env]` attribute at all.
    ///
    /// Untagged fields are left untouched by the generated code.
    pub tagged: bool,

    /// Environment variable base name override.
    ///
    /// If `None`, the base name is derived from the field identifier. The
    /// final name is upper-cased either way, so annotation case is
    /// irrelevant.
    pub name: Option<String>,

    /// Marks the field as a nested section to recurse into instead of
    /// looking it up as a value.
    pub nested: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Silently ignores unrecognized attributes to allow other macros to
    /// process them.
    pub fn from_field(field: &Field) -> Self {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attrs.tagged = true;

            // bare `#[env]`: variable name derived from the field name
            if matches!(attr.meta, Meta::Path(_)) {
                continue;
            }

            // Parse #[env(...)] contents
            let _ = attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let value = meta.value()?;
                    let name: Lit = value.parse()?;
                    if let Lit::Str(s) = name {
                        attrs.name = Some(s.value());
                    }
                    return Ok(());
                }

                // nested
                if meta.path.is_ident("nested") {
                    attrs.nested = true;
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            });
        }

        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_untagged_field() {
        let field: Field = parse_quote! {
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field);
        assert!(!attrs.tagged);
        assert_eq!(attrs.name, None);
        assert!(!attrs.nested);
    }

    #[test]
    fn test_parse_bare_attribute() {
        let field: Field = parse_quote! {
            #[env]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field);
        assert!(attrs.tagged);
        assert_eq!(attrs.name, None);
    }

    #[test]
    fn test_parse_name_attribute() {
        let field: Field = parse_quote! {
            #[env(name = "struct_test")]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field);
        assert!(attrs.tagged);
        assert_eq!(attrs.name, Some("struct_test".to_string()));
    }

    #[test]
    fn test_parse_nested() {
        let field: Field = parse_quote! {
            #[env(nested)]
            pub section: DatabaseConfig
        };

        let attrs = FieldAttrs::from_field(&field);
        assert!(attrs.tagged);
        assert!(attrs.nested);
        assert_eq!(attrs.name, None);
    }

    #[test]
    fn test_parse_nested_with_name() {
        let field: Field = parse_quote! {
            #[env(nested, name = "IGNORED")]
            pub section: DatabaseConfig
        };

        let attrs = FieldAttrs::from_field(&field);
        assert!(attrs.nested);
        assert_eq!(attrs.name, Some("IGNORED".to_string()));
    }

    #[test]
    fn test_other_attributes_ignored() {
        let field: Field = parse_quote! {
            #[serde(rename = "other")]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field);
        assert!(!attrs.tagged);
    }
}
