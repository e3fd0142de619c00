//! Syntactic classification of field types into decodable shapes.
//!
//! The macro has no type information beyond the written syntax, so shapes
//! are recognized by the last path segment and its generic arguments. A
//! type the classifier does not recognize is rejected at expansion time.

use syn::{GenericArgument, PathArguments, PathSegment, Type};

/// Field shapes the generated walker knows how to fill.
#[derive(Debug, PartialEq)]
pub enum Shape<'a> {
    /// `String`, an integer, or `bool`; coerced through `EnvScalar`.
    Scalar,
    /// `Vec<T>` with a scalar element type, decoded from a comma list.
    List(&'a Type),
    /// `HashMap` or `BTreeMap`. Only string-to-string maps are decodable;
    /// anything else reports a decode error when a value is present.
    Map { convertible: bool },
    /// Everything else. The schema is malformed and the build is halted.
    Unsupported,
}

const SCALARS: &[&str] = &[
    "String", "bool", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    if let Type::Path(type_path) = ty {
        type_path.path.segments.last()
    } else {
        None
    }
}

fn is_scalar(ty: &Type) -> bool {
    last_segment(ty)
        .map(|seg| seg.arguments.is_none() && SCALARS.iter().any(|name| seg.ident == *name))
        .unwrap_or(false)
}

fn is_string(ty: &Type) -> bool {
    last_segment(ty)
        .map(|seg| seg.arguments.is_none() && seg.ident == "String")
        .unwrap_or(false)
}

fn generic_args(seg: &PathSegment) -> Vec<&Type> {
    if let PathArguments::AngleBracketed(args) = &seg.arguments {
        args.args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect()
    } else {
        Vec::new()
    }
}

/// Classify a field type into the shape the generated code handles.
pub fn classify(ty: &Type) -> Shape<'_> {
    if is_scalar(ty) {
        return Shape::Scalar;
    }

    let Some(seg) = last_segment(ty) else {
        return Shape::Unsupported;
    };

    if seg.ident == "Vec" {
        return match generic_args(seg).as_slice() {
            [elem] if is_scalar(elem) => Shape::List(elem),
            _ => Shape::Unsupported,
        };
    }

    if seg.ident == "HashMap" || seg.ident == "BTreeMap" {
        let args = generic_args(seg);
        let convertible =
            matches!(args.as_slice(), [key, value] if is_string(key) && is_string(value));
        return Shape::Map { convertible };
    }

    Shape::Unsupported
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_classify_scalars() {
        let types: Vec<Type> = vec![
            parse_quote!(String),
            parse_quote!(bool),
            parse_quote!(i8),
            parse_quote!(i32),
            parse_quote!(i64),
            parse_quote!(isize),
            parse_quote!(u8),
            parse_quote!(u64),
            parse_quote!(usize),
        ];
        for ty in &types {
            assert_eq!(classify(ty), Shape::Scalar, "{:?}", ty);
        }
    }

    #[test]
    fn test_classify_qualified_scalar() {
        let ty: Type = parse_quote!(std::string::String);
        assert_eq!(classify(&ty), Shape::Scalar);
    }

    #[test]
    fn test_classify_list() {
        let ty: Type = parse_quote!(Vec<String>);
        let elem: Type = parse_quote!(String);
        assert_eq!(classify(&ty), Shape::List(&elem));

        let ty: Type = parse_quote!(Vec<u16>);
        let elem: Type = parse_quote!(u16);
        assert_eq!(classify(&ty), Shape::List(&elem));
    }

    #[test]
    fn test_classify_nested_list_rejected() {
        let ty: Type = parse_quote!(Vec<Vec<String>>);
        assert_eq!(classify(&ty), Shape::Unsupported);

        let ty: Type = parse_quote!(Vec<HashMap<String, String>>);
        assert_eq!(classify(&ty), Shape::Unsupported);
    }

    #[test]
    fn test_classify_string_map() {
        let ty: Type = parse_quote!(HashMap<String, String>);
        assert_eq!(classify(&ty), Shape::Map { convertible: true });

        let ty: Type = parse_quote!(BTreeMap<String, String>);
        assert_eq!(classify(&ty), Shape::Map { convertible: true });

        let ty: Type = parse_quote!(std::collections::HashMap<String, String>);
        assert_eq!(classify(&ty), Shape::Map { convertible: true });
    }

    #[test]
    fn test_classify_non_string_map() {
        let ty: Type = parse_quote!(HashMap<String, u32>);
        assert_eq!(classify(&ty), Shape::Map { convertible: false });

        let ty: Type = parse_quote!(BTreeMap<u64, String>);
        assert_eq!(classify(&ty), Shape::Map { convertible: false });
    }

    #[test]
    fn test_classify_unsupported() {
        let types: Vec<Type> = vec![
            parse_quote!(f64),
            parse_quote!(char),
            parse_quote!(i128),
            parse_quote!(Option<String>),
            parse_quote!((String, String)),
            parse_quote!(&'static str),
            parse_quote!(SomeOtherType),
        ];
        for ty in &types {
            assert_eq!(classify(ty), Shape::Unsupported, "{:?}", ty);
        }
    }
}
