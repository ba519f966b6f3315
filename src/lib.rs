//! Lenient parser, editor and serialiser for generic URIs.
//!
//! This crate splits a URI into decoded components, lets you edit them, and
//! writes them back out with percent-encoding.
//!
//! # Overview
//!
//! A URI has the shape:
//!
//! ```text
//! scheme:[//[user[:pass]@]host[:port]]path[?query][#fragment]
//! ```
//!
//! Parsing never fails. Whatever could be scanned is kept and the result
//! carries a validity flag; [`Uri::validate`] explains what is wrong. The
//! strict entry points ([`str::parse`], [`Uri::try_from`]) reject malformed
//! input instead.
//!
//! # Quick Start
//!
//! ```rust
//! use omw_uri::Uri;
//!
//! let uri = Uri::parse("http://[::1]:8080/a%20b/?q=hello+world#frag");
//!
//! assert!(uri.is_valid());
//! assert_eq!(uri.authority().host(), "[::1]");
//! assert!(uri.authority().is_ipv6());
//! assert_eq!(uri.authority().port(), Some(8080));
//! assert_eq!(uri.path().segments()[0], "a b");
//! assert_eq!(uri.query().get("q"), Some("hello world"));
//! assert_eq!(uri.fragment(), "frag");
//!
//! assert_eq!(uri.serialise(), "http://[::1]:8080/a%20b/?q=hello%20world#frag");
//! ```
//!
//! # Builder Pattern
//!
//! ```rust
//! use omw_uri::{Path, UriBuilder};
//!
//! let uri = UriBuilder::new()
//!     .scheme("mailto")
//!     .path(Path::parse("someone@example.com"))
//!     .build()
//!     .unwrap();
//! assert_eq!(uri.serialise(), "mailto:someone@example.com");
//! ```
//!
//! # Equality
//!
//! | Component | Compared by                                            |
//! |-----------|--------------------------------------------------------|
//! | Scheme    | ASCII case-insensitive                                 |
//! | Authority | serialised form                                        |
//! | Path      | serialised form                                        |
//! | Query     | parameter multiset for `http`/`https`, else in order   |
//! | Fragment  | presence and decoded text                              |
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Uri`] and [`Path`] (as
//!   strings) and for [`Query`].
//! - `log`: trace and debug records through the `log` facade.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod authority;
mod builder;
mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod log;
mod path;
mod path_segment;
pub mod percent;
pub mod prelude;
mod query;
mod scheme;
mod uri;

pub use authority::{Authority, PortState};
pub use builder::{Empty, HasScheme, UriBuilder};
pub use constants::{
    AUTHORITY_MARKER, FILE_SCHEME, FRAGMENT_DELIMITER, PATH_DELIMITER, QUERY_DELIMITER,
    QUERY_PARAM_DELIMITER, QUERY_VALUE_DELIMITER, SCHEME_DELIMITER, UNORDERED_QUERY_SCHEMES,
};
pub use error::{AuthorityError, ValidityError};
pub use path::Path;
pub use path_segment::PathSegment;
pub use query::{Query, QueryParameter};
pub use scheme::Scheme;
pub use uri::Uri;
