//! Main URI type.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::authority::Authority;
use crate::constants::{
    AUTHORITY_MARKER, FILE_SCHEME, FRAGMENT_DELIMITER, PATH_DELIMITER, QUERY_DELIMITER,
    SCHEME_DELIMITER, UNORDERED_QUERY_SCHEMES,
};
use crate::error::ValidityError;
use crate::log::trace;
use crate::path::Path;
use crate::percent;
use crate::query::Query;
use crate::scheme::Scheme;

/// A URI decomposed into decoded components.
///
/// # Structure
///
/// ```text
/// scheme:[//authority]path[?query][#fragment]
/// ```
///
/// Parsing never fails. Malformed input still yields every component that
/// could be scanned, and [`Uri::is_valid`] reports whether the result is a
/// well-formed reference. [`Uri::validate`] says why it is not. Use
/// [`str::parse`] or [`Uri::try_from`] to reject malformed input outright.
///
/// Setters take decoded text and re-run the validity check.
///
/// # Examples
///
/// ```
/// use omw_uri::Uri;
///
/// let uri = Uri::parse("https://user@host:8080/a/?x=1&y&z=#top");
/// assert!(uri.is_valid());
/// assert_eq!(uri.scheme().as_str(), "https");
/// assert_eq!(uri.authority().user(), "user");
/// assert_eq!(uri.authority().port(), Some(8080));
/// assert_eq!(uri.path().segments()[0], "a");
/// assert_eq!(uri.query().len(), 3);
/// assert_eq!(uri.fragment(), "top");
/// assert_eq!(uri.serialise(), "https://user@host:8080/a/?x=1&y&z=#top");
///
/// let bad = Uri::parse("http://example.com:65536/");
/// assert!(!bad.is_valid());
/// assert!(!bad.authority().is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Uri {
    validity: bool,
    scheme: Scheme,
    scheme_terminated: bool,
    authority: Authority,
    path: Path,
    query: Query,
    fragment: Option<String>,
}

impl Uri {
    /// Creates an empty URI. It is invalid until a scheme is set.
    #[must_use]
    pub fn new() -> Self {
        let mut uri = Self {
            scheme_terminated: true,
            ..Self::default()
        };
        uri.check();
        uri
    }

    /// Parses a percent-encoded URI.
    ///
    /// Fields are split on their delimiters first and decoded afterwards, so
    /// an escaped delimiter never ends a field.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let (scheme, mut rest, scheme_terminated) = match input.split_once(SCHEME_DELIMITER) {
            Some((scheme, rest)) => (scheme, rest, true),
            None => (input, "", false),
        };

        let authority = match rest.strip_prefix(AUTHORITY_MARKER) {
            Some(after) => {
                let end = after
                    .find([PATH_DELIMITER, QUERY_DELIMITER, FRAGMENT_DELIMITER])
                    .unwrap_or(after.len());
                rest = &after[end..];
                Authority::parse(&after[..end])
            }
            None => Authority::default(),
        };

        let end = rest
            .find([QUERY_DELIMITER, FRAGMENT_DELIMITER])
            .unwrap_or(rest.len());
        let path = Path::parse(&rest[..end]);
        rest = &rest[end..];

        let mut query = Query::default();
        if let Some(after) = rest.strip_prefix(QUERY_DELIMITER) {
            let end = after.find(FRAGMENT_DELIMITER).unwrap_or(after.len());
            query = Query::parse(&after[..end]);
            rest = &after[end..];
        }

        let fragment = rest.strip_prefix(FRAGMENT_DELIMITER).map(percent::decode);

        trace!("uri {input:?}: {scheme:?} {path:?} {query:?}");

        let mut uri = Self {
            validity: false,
            scheme: Scheme::new(percent::decode(scheme)),
            scheme_terminated,
            authority,
            path,
            query,
            fragment,
        };
        uri.check();

        #[cfg(feature = "log")]
        if let Err(e) = uri.validate() {
            crate::log::debug!("uri {input:?} is not well-formed: {e}");
        }

        uri
    }

    /// Builds a `file` URI from a filesystem path.
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use omw_uri::Uri;
    ///
    /// let uri = Uri::from_file_path("/tmp/a b.txt");
    /// assert_eq!(uri.serialise(), "file:///tmp/a%20b.txt");
    /// # }
    /// ```
    #[must_use]
    pub fn from_file_path(path: impl AsRef<std::path::Path>) -> Self {
        let mut uri = Self::new();
        uri.scheme = Scheme::new(FILE_SCHEME);
        uri.path = Path::from_external_path(path);
        uri.check();
        uri
    }

    /// Returns the filesystem path of a `file` URI.
    #[must_use]
    pub fn to_file_path(&self) -> Option<PathBuf> {
        // The scheme is stored as written, so `FILE` counts as `file` too.
        self.scheme
            .eq_ignore_case(FILE_SCHEME)
            .then(|| self.path.to_external_path())
    }

    /// Returns true if the URI is well-formed: the scheme is valid, the path
    /// fits the authority, and the authority is either empty or valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validity && (self.authority.is_empty() || self.authority.is_valid())
    }

    /// Checks that the URI is well-formed.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidityError` found: scheme, path against
    /// authority, then the authority itself.
    pub fn validate(&self) -> Result<(), ValidityError> {
        self.check_structure()?;
        if !self.authority.is_empty() {
            self.authority.validate()?;
        }
        Ok(())
    }

    /// Returns the scheme.
    #[must_use]
    pub const fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Returns the authority.
    #[must_use]
    pub const fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Returns the path.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the query.
    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// Returns true if a fragment delimiter was present, even with nothing
    /// after it.
    #[must_use]
    pub const fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    /// Returns the decoded fragment, or `""` if there is none.
    #[must_use]
    pub fn fragment(&self) -> &str {
        self.fragment.as_deref().unwrap_or_default()
    }

    /// Sets the scheme, stored as given.
    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = Scheme::new(scheme);
        self.scheme_terminated = true;
        self.check();
    }

    /// Replaces the authority.
    pub fn set_authority(&mut self, authority: Authority) {
        self.authority = authority;
        self.check();
    }

    /// Sets the decoded user name.
    pub fn set_user(&mut self, user: impl Into<String>) {
        self.authority.set_user(user);
        self.check();
    }

    /// Sets the decoded password.
    pub fn set_pass(&mut self, pass: impl Into<String>) {
        self.authority.set_pass(pass);
        self.check();
    }

    /// Sets the decoded host.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.authority.set_host(host);
        self.check();
    }

    /// Sets the port.
    pub fn set_port(&mut self, port: u16) {
        self.authority.set_port(port);
        self.check();
    }

    /// Removes the port.
    pub fn clear_port(&mut self) {
        self.authority.clear_port();
        self.check();
    }

    /// Replaces the path.
    pub fn set_path(&mut self, path: Path) {
        self.path = path;
        self.check();
    }

    /// Replaces the query.
    pub fn set_query(&mut self, query: Query) {
        self.query = query;
        self.check();
    }

    /// Sets the decoded fragment.
    ///
    /// An empty fragment is remembered by [`Uri::has_fragment`] but is not
    /// written by [`Uri::serialise`].
    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.fragment = Some(fragment.into());
        self.check();
    }

    /// Removes the fragment.
    pub fn clear_fragment(&mut self) {
        self.fragment = None;
        self.check();
    }

    /// Resets to the empty URI.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Serialises the URI with percent-encoding.
    ///
    /// The authority marker `//` is written when the authority is not
    /// empty, and always for the `file` scheme.
    #[must_use]
    pub fn serialise(&self) -> String {
        let mut out = percent::encode_scheme(&self.scheme);
        out.push(SCHEME_DELIMITER);

        // `file` is matched ignoring case since the scheme is kept verbatim.
        if !self.authority.is_empty() || self.scheme.eq_ignore_case(FILE_SCHEME) {
            out.push_str(AUTHORITY_MARKER);
            out.push_str(&self.authority.serialise());
        }

        out.push_str(&self.path.serialise());

        if !self.query.is_empty() {
            out.push(QUERY_DELIMITER);
            out.push_str(&self.query.serialise());
        }

        if let Some(fragment) = self.fragment.as_deref().filter(|f| !f.is_empty()) {
            out.push(FRAGMENT_DELIMITER);
            out.push_str(&percent::encode_fragment(fragment));
        }

        out
    }

    /// Compares two URIs.
    ///
    /// Schemes compare case-insensitively; authority and path compare by
    /// their serialised form. Queries of `http` and `https` URIs compare
    /// without regard to parameter order, others in order. Fragments must
    /// agree on presence as well as content.
    ///
    /// ```
    /// use omw_uri::Uri;
    ///
    /// let a = Uri::parse("HTTP://h/p?a=1&b=2");
    /// let b = Uri::parse("http://h/p?b=2&a=1");
    /// assert!(a.equals(&b));
    ///
    /// let a = Uri::parse("ftp://h/p?a=1&b=2");
    /// let b = Uri::parse("ftp://h/p?b=2&a=1");
    /// assert!(!a.equals(&b));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        if self.scheme.canonical() != other.scheme.canonical() {
            return false;
        }
        if self.authority.serialise() != other.authority.serialise() {
            return false;
        }
        if self.path.serialise() != other.path.serialise() {
            return false;
        }

        let queries_match = if self.has_unordered_query() {
            self.query.equivalent(&other.query)
        } else {
            self.query.equals(&other.query)
        };

        queries_match && self.fragment == other.fragment
    }

    fn has_unordered_query(&self) -> bool {
        UNORDERED_QUERY_SCHEMES
            .iter()
            .any(|s| self.scheme.eq_ignore_case(s))
    }

    fn check(&mut self) {
        self.validity = self.check_structure().is_ok();
    }

    fn check_structure(&self) -> Result<(), ValidityError> {
        self.scheme.validate()?;

        if !self.scheme_terminated {
            return Err(ValidityError::MissingSchemeDelimiter);
        }

        let path = self.path.serialise();
        if self.authority.is_empty() {
            if path.starts_with(AUTHORITY_MARKER) {
                return Err(ValidityError::AmbiguousAuthorityMarker { path });
            }
        } else if !path.is_empty() && !path.starts_with(PATH_DELIMITER) {
            return Err(ValidityError::RelativePathWithAuthority { path });
        }

        Ok(())
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialise())
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Uri {}

impl FromStr for Uri {
    type Err = ValidityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uri = Self::parse(s);
        uri.validate()?;
        Ok(uri)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ValidityError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.serialise())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
