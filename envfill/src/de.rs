//! Coercion routines for environment variable text
//!
//! Everything here is invoked by `#[derive(EnvFill)]`-generated code, once
//! per leaf field. Scalar coercion is best-effort: text that does not
//! parse yields the zero value instead of an error.

use std::env;
use std::num::IntErrorKind;

/// Look up an environment variable, treating empty values as absent.
///
/// Used by macro-generated code.
#[doc(hidden)]
pub fn lookup(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// A scalar type an environment value can be coerced into.
///
/// Coercion is total. Strings always succeed; integers fall back to `0`
/// and booleans to `false` on malformed text, and integers saturate to the
/// target width when the value is out of range.
pub trait EnvScalar: Sized {
    /// Convert raw environment text into `Self`.
    fn coerce(text: &str) -> Self;
}

impl EnvScalar for String {
    fn coerce(text: &str) -> Self {
        text.to_owned()
    }
}

impl EnvScalar for bool {
    fn coerce(text: &str) -> Self {
        // Anything outside the accepted spellings is false.
        matches!(text, "1" | "t" | "T" | "true" | "TRUE" | "True")
    }
}

/// Split a radix prefix off an integer literal: `0x`, `0o`, `0b`, or a
/// leading `0` for octal. A bare `0` stays decimal.
fn split_radix(text: &str) -> (u32, &str) {
    for (prefix, radix) in [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return (radix, digits);
        }
    }

    if text.len() > 1 && text.starts_with('0') {
        return (8, &text[1..]);
    }

    (10, text)
}

/// Parse an unsigned magnitude with auto-detected radix. `_` separators
/// are tolerated. Returns `u128::MAX` on overflow so callers can saturate,
/// `None` on malformed text.
fn parse_magnitude(text: &str) -> Option<u128> {
    let (radix, digits) = split_radix(text);
    let digits = digits.replace('_', "");

    match u128::from_str_radix(&digits, radix) {
        Ok(value) => Some(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u128::MAX),
        Err(_) => None,
    }
}

fn parse_signed(text: &str) -> Option<(bool, u128)> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    parse_magnitude(rest).map(|magnitude| (negative, magnitude))
}

macro_rules! signed_env_scalar {
    ($($ty:ty),*) => {$(
        impl EnvScalar for $ty {
            fn coerce(text: &str) -> Self {
                match parse_signed(text) {
                    Some((false, magnitude)) if magnitude > <$ty>::MAX as u128 => <$ty>::MAX,
                    Some((false, magnitude)) => magnitude as $ty,
                    Some((true, magnitude)) if magnitude > <$ty>::MIN.unsigned_abs() as u128 => {
                        <$ty>::MIN
                    }
                    Some((true, magnitude)) => (magnitude as i128).wrapping_neg() as $ty,
                    None => 0,
                }
            }
        }
    )*};
}

macro_rules! unsigned_env_scalar {
    ($($ty:ty),*) => {$(
        impl EnvScalar for $ty {
            fn coerce(text: &str) -> Self {
                match parse_magnitude(text) {
                    Some(magnitude) if magnitude > <$ty>::MAX as u128 => <$ty>::MAX,
                    Some(magnitude) => magnitude as $ty,
                    None => 0,
                }
            }
        }
    )*};
}

signed_env_scalar!(i8, i16, i32, i64, isize);
unsigned_env_scalar!(u8, u16, u32, u64, usize);

/// Decode a comma-separated list of scalars.
///
/// Elements are coerced independently. There is no comma escaping, so
/// element values themselves cannot contain commas.
///
/// Used by macro-generated code.
#[doc(hidden)]
pub fn coerce_list<T: EnvScalar>(text: &str) -> Vec<T> {
    text.split(',').map(T::coerce).collect()
}

/// Decode comma-separated `key=value` pairs into a string-to-string map.
///
/// Pairs without exactly one `=` are silently dropped; a key that appears
/// more than once keeps the last occurrence's value.
///
/// Used by macro-generated code.
#[doc(hidden)]
pub fn coerce_map<M: FromIterator<(String, String)>>(text: &str) -> M {
    text.split(',')
        .filter_map(|pair| {
            let mut parts = pair.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => Some((key.to_owned(), value.to_owned())),
                _ => None,
            }
        })
        .collect()
}
