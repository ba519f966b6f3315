//! Path component.

use std::fmt;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, PathBuf};

use crate::constants::PATH_DELIMITER;
use crate::path_segment::PathSegment;

/// The path of a URI: an ordered list of decoded segments and an
/// absolute flag.
///
/// # Shape
///
/// | Text        | Absolute | Segments           |
/// |-------------|----------|--------------------|
/// | `""`        | no       | `[]`               |
/// | `"/"`       | yes      | `[""]`             |
/// | `"/a/b"`    | yes      | `["a", "b"]`       |
/// | `"a/b/"`    | no       | `["a", "b", ""]`   |
///
/// # Examples
///
/// ```
/// use omw_uri::Path;
///
/// let path = Path::parse("/path/to/index.php");
/// assert!(path.is_absolute());
/// assert_eq!(path.depth(), 3);
/// assert_eq!(path.segments()[2], "index.php");
///
/// let path = Path::parse("/as%2Fdf/");
/// assert_eq!(path.segments()[0], "as/df");
/// assert_eq!(path.serialise(), "/as%2Fdf/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    absolute: bool,
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates an empty relative path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from decoded segments.
    #[must_use]
    pub fn from_segments<I, S>(absolute: bool, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Self {
            absolute,
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a percent-encoded path. Each segment is decoded on its own, so
    /// `%2F` stays inside its segment.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::default();
        }

        let (absolute, body) = match input.strip_prefix(PATH_DELIMITER) {
            Some(body) => (true, body),
            None => (false, input),
        };

        Self {
            absolute,
            segments: body
                .split(PATH_DELIMITER)
                .map(PathSegment::decode)
                .collect(),
        }
    }

    /// Builds a path from a filesystem path.
    ///
    /// The path is split on the platform separator. It is absolute when the
    /// first component is empty, i.e. when the text starts with the
    /// separator. A Windows drive prefix such as `C:` stays an ordinary
    /// first segment.
    #[must_use]
    pub fn from_external_path(path: impl AsRef<std::path::Path>) -> Self {
        let text = path.as_ref().to_string_lossy();
        if text.is_empty() {
            return Self::default();
        }

        let parts: Vec<&str> = text.split(MAIN_SEPARATOR).collect();
        match parts.split_first() {
            Some((&"", rest)) => Self::from_segments(true, rest.iter().copied()),
            _ => Self::from_segments(false, parts),
        }
    }

    /// Joins the segments with the platform separator.
    ///
    /// This does not round-trip when a segment itself contains the
    /// separator.
    #[must_use]
    pub fn to_external_path(&self) -> PathBuf {
        let mut text = String::new();
        if self.absolute {
            text.push(MAIN_SEPARATOR);
        }
        let segments: Vec<&str> = self.segments.iter().map(PathSegment::as_str).collect();
        text.push_str(&segments.join(MAIN_SEPARATOR_STR));
        PathBuf::from(text)
    }

    /// Returns true if the path starts with `/`.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Sets whether the path starts with `/`.
    pub fn set_absolute(&mut self, absolute: bool) {
        self.absolute = absolute;
    }

    /// Returns the decoded segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Appends a decoded segment.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.segments.push(segment.into());
    }

    /// Returns true if there are no segments, or a single empty segment on a
    /// relative path.
    ///
    /// The absolute path `/` is not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.segments.as_slice() {
            [] => true,
            [only] => only.is_empty() && !self.absolute,
            _ => false,
        }
    }

    /// Returns true if `prefix` has the same absolute flag and its segments
    /// are a leading run of this path's segments.
    #[must_use]
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.absolute == prefix.absolute && self.segments.starts_with(&prefix.segments)
    }

    /// Serialises the path, percent-encoding each segment.
    #[must_use]
    pub fn serialise(&self) -> String {
        let mut out = String::new();
        if self.absolute {
            out.push(PATH_DELIMITER);
        }
        let encoded: Vec<String> = self.segments.iter().map(PathSegment::encoded).collect();
        out.push_str(&encoded.join("/"));
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialise())
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.serialise())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
