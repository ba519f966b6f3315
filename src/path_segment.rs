//! Path segment type.

use std::fmt;
use std::ops::Deref;

use crate::percent;

/// A single decoded path segment.
///
/// A segment may be empty; an empty last segment marks a trailing slash.
/// A segment may also contain `/`, which is escaped as `%2F` when the path
/// is serialised.
///
/// # Examples
///
/// ```
/// use omw_uri::PathSegment;
///
/// let seg = PathSegment::new("as/df");
/// assert_eq!(seg, "as/df");
/// assert_eq!(seg.encoded(), "as%2Fdf");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathSegment(String);

impl PathSegment {
    /// Creates a segment from decoded text.
    #[must_use]
    pub fn new(segment: impl Into<String>) -> Self {
        Self(segment.into())
    }

    /// Creates a segment by decoding percent-encoded text.
    #[must_use]
    pub fn decode(encoded: &str) -> Self {
        Self(percent::decode(encoded))
    }

    /// Returns the decoded segment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the segment percent-encoded for use in a path.
    #[must_use]
    pub fn encoded(&self) -> String {
        percent::encode_path_segment(&self.0)
    }

    /// Consumes the segment and returns the decoded string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PathSegment {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for PathSegment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for PathSegment {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for PathSegment {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathSegment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
