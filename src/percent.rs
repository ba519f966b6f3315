//! Percent-encoding and decoding of URI components.
//!
//! Every component has its own set of octets that may appear literally.
//! All sets start from the unreserved characters (ASCII letters, digits,
//! `-`, `.`, `_`, `~`); anything outside a set is written as `%` followed by
//! two upper-case hexadecimal digits. Non-ASCII octets are always escaped.
//!
//! Decoding is lenient: a `%` that is not followed by two hexadecimal
//! digits is copied through unchanged.
//!
//! # Examples
//!
//! ```
//! use omw_uri::percent;
//!
//! assert_eq!(percent::decode("100%25 done"), "100% done");
//! assert_eq!(percent::encode_path_segment("a b/c"), "a%20b%2Fc");
//! assert_eq!(percent::decode("50%"), "50%");
//! ```

use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

pub use percent_encoding::AsciiSet;

/// Escapes everything except the unreserved characters.
pub const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Unreserved characters plus `+`.
pub const SCHEME: &AsciiSet = &UNRESERVED.remove(b'+');

/// Unreserved characters plus the sub-delimiters `+!$&'()*,;=`.
pub const AUTHORITY: &AsciiSet = &UNRESERVED
    .remove(b'+')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// [`AUTHORITY`] plus `:`, `@` and `/`.
pub const PATH: &AsciiSet = &AUTHORITY.remove(b':').remove(b'@').remove(b'/');

/// [`AUTHORITY`] plus `:` and `@`. A `/` inside a segment is escaped.
pub const PATH_SEGMENT: &AsciiSet = &AUTHORITY.remove(b':').remove(b'@');

/// [`PATH`] plus `?`.
pub const QUERY: &AsciiSet = &PATH.remove(b'?');

/// Characters kept literally inside a query key or value.
///
/// `&`, `=` and `+` stay escaped so they cannot be confused with the
/// parameter delimiters or with an encoded space.
pub const QUERY_FIELD: &AsciiSet = &UNRESERVED
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b';')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Same as [`QUERY`].
pub const FRAGMENT: &AsciiSet = QUERY;

/// Percent-encodes `input`, keeping only octets outside `set` literal.
#[must_use]
pub fn encode_with(input: &str, set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, set).to_string()
}

/// Percent-encodes everything but the unreserved characters.
///
/// ```
/// assert_eq!(omw_uri::percent::encode("a%20b"), "a%2520b");
/// ```
#[must_use]
pub fn encode(input: &str) -> String {
    encode_with(input, UNRESERVED)
}

/// Encodes a scheme.
#[must_use]
pub fn encode_scheme(input: &str) -> String {
    encode_with(input, SCHEME)
}

/// Encodes a user name, password or registered host name.
#[must_use]
pub fn encode_authority(input: &str) -> String {
    encode_with(input, AUTHORITY)
}

/// Encodes a whole path, keeping `/` literal.
#[must_use]
pub fn encode_path(input: &str) -> String {
    encode_with(input, PATH)
}

/// Encodes a single path segment.
#[must_use]
pub fn encode_path_segment(input: &str) -> String {
    encode_with(input, PATH_SEGMENT)
}

/// Encodes a whole query string.
#[must_use]
pub fn encode_query(input: &str) -> String {
    encode_with(input, QUERY)
}

/// Encodes a single query key or value.
#[must_use]
pub fn encode_query_field(input: &str) -> String {
    encode_with(input, QUERY_FIELD)
}

/// Encodes a fragment.
#[must_use]
pub fn encode_fragment(input: &str) -> String {
    encode_with(input, FRAGMENT)
}

/// Decodes percent-escapes into raw octets.
#[must_use]
pub fn decode_bytes(input: &str) -> Vec<u8> {
    percent_decode_str(input).collect()
}

/// Decodes percent-escapes.
///
/// Escapes that decode to octets which do not form valid UTF-8 are replaced
/// with U+FFFD; use [`decode_bytes`] to get the exact octets.
#[must_use]
pub fn decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

/// Decodes a form-encoded query key or value: a literal `+` is a space.
///
/// ```
/// use omw_uri::percent::decode_form;
///
/// assert_eq!(decode_form("a+b%2Bc"), "a b+c");
/// ```
#[must_use]
pub fn decode_form(input: &str) -> String {
    if input.contains('+') {
        decode(&input.replace('+', " "))
    } else {
        decode(input)
    }
}
