//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use omw_uri::prelude::*;
//!
//! let uri = Uri::parse("https://example.com/index.html");
//! let path: &Path = uri.path();
//! assert_eq!(path.depth(), 1);
//! ```
//!
//! Builder state markers (`Empty`, `HasScheme`) and the delimiter constants
//! are left out.

pub use crate::{
    // Core types
    Authority, Path, PathSegment, PortState, Query, QueryParameter, Scheme, Uri,
    // Builder
    UriBuilder,
    // Errors
    AuthorityError, ValidityError,
};
