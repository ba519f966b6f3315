//! Diagnostics for URIs that parsed but are not well-formed.
//!
//! Parsing itself never fails. These types explain *why* a parsed value
//! reports itself as invalid.

use std::fmt;

/// Reasons an [`Authority`](crate::Authority) is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorityError {
    /// A host starting with `[` has no closing `]`.
    UnterminatedIpLiteral {
        /// The host as scanned
        host: String,
    },
    /// Text other than `:port` follows the closing `]` of an IP literal.
    TrailingAfterIpLiteral {
        /// The bracketed host
        host: String,
    },
    /// The port is empty, not decimal, or greater than 65535.
    InvalidPort,
}

impl fmt::Display for AuthorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedIpLiteral { host } => {
                write!(f, "IP literal '{host}' is missing its closing bracket")
            }
            Self::TrailingAfterIpLiteral { host } => {
                write!(
                    f,
                    "unexpected text after IP literal '{host}'; expected ':port' or end"
                )
            }
            Self::InvalidPort => write!(f, "port must be a decimal number in 0-65535"),
        }
    }
}

impl std::error::Error for AuthorityError {}

/// Reasons a [`Uri`](crate::Uri) is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidityError {
    /// The scheme is empty.
    EmptyScheme,
    /// The input ended before a `:` terminated the scheme.
    MissingSchemeDelimiter,
    /// The scheme does not start with a letter or contains a character other
    /// than letters, digits, `+`, `.` and `-`.
    InvalidScheme {
        /// The scheme
        scheme: String,
        /// The offending character
        char: char,
        /// Character position in the scheme
        position: usize,
    },
    /// An authority is present but the path does not start with `/`.
    RelativePathWithAuthority {
        /// The serialised path
        path: String,
    },
    /// No authority is present but the path starts with `//`, which would
    /// read back as an authority marker.
    AmbiguousAuthorityMarker {
        /// The serialised path
        path: String,
    },
    /// The authority is not empty and not well-formed.
    InvalidAuthority(AuthorityError),
}

impl fmt::Display for ValidityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyScheme => write!(f, "scheme cannot be empty"),
            Self::MissingSchemeDelimiter => write!(f, "scheme is not terminated by ':'"),
            Self::InvalidScheme {
                scheme,
                char,
                position,
            } => {
                if *position == 0 {
                    write!(
                        f,
                        "scheme '{scheme}' must start with a letter, found '{char}'"
                    )
                } else {
                    write!(
                        f,
                        "invalid character '{char}' at position {position} in scheme '{scheme}'"
                    )
                }
            }
            Self::RelativePathWithAuthority { path } => {
                write!(
                    f,
                    "path '{path}' must start with '/' when an authority is present"
                )
            }
            Self::AmbiguousAuthorityMarker { path } => {
                write!(f, "path '{path}' starts with '//' without an authority")
            }
            Self::InvalidAuthority(e) => write!(f, "invalid authority: {e}"),
        }
    }
}

impl std::error::Error for ValidityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAuthority(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AuthorityError> for ValidityError {
    fn from(e: AuthorityError) -> Self {
        Self::InvalidAuthority(e)
    }
}
