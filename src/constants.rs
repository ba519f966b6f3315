//! Delimiters and scheme names used by the URI grammar.

/// Terminates the scheme.
pub const SCHEME_DELIMITER: char = ':';

/// Introduces the authority.
pub const AUTHORITY_MARKER: &str = "//";

/// Separates path segments.
pub const PATH_DELIMITER: char = '/';

/// Introduces the query.
pub const QUERY_DELIMITER: char = '?';

/// Introduces the fragment.
pub const FRAGMENT_DELIMITER: char = '#';

/// Separates query parameters.
pub const QUERY_PARAM_DELIMITER: char = '&';

/// Separates a query key from its value.
pub const QUERY_VALUE_DELIMITER: char = '=';

/// Scheme that is always serialised with an authority marker, even when the
/// authority is empty (`file:///path`).
pub const FILE_SCHEME: &str = "file";

/// Schemes whose query parameters compare without regard to order.
pub const UNORDERED_QUERY_SCHEMES: [&str; 2] = ["http", "https"];
