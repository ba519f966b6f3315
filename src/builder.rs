//! Typestate builder for constructing [`Uri`] instances.
//!
//! The scheme is the only required component, so the builder tracks one
//! transition: [`Empty`] to [`HasScheme`]. Everything else can be set in any
//! order, from decoded text.

use std::marker::PhantomData;

use crate::error::ValidityError;
use crate::path::Path;
use crate::path_segment::PathSegment;
use crate::query::{Query, QueryParameter};
use crate::uri::Uri;

/// Marker: no scheme set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: the scheme has been set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasScheme;

/// A typestate builder for [`Uri`].
///
/// # Examples
///
/// ```
/// use omw_uri::UriBuilder;
///
/// let uri = UriBuilder::new()
///     .scheme("https")
///     .host("example.com")
///     .port(8443)
///     .segments(["docs", "a b.html"])
///     .param("lang", "de")
///     .flag("print")
///     .fragment("intro")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     uri.serialise(),
///     "https://example.com:8443/docs/a%20b.html?lang=de&print#intro"
/// );
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use omw_uri::UriBuilder;
///
/// // Error: build() needs a scheme
/// let uri = UriBuilder::new().host("example.com").build();
/// ```
#[derive(Debug, Clone)]
pub struct UriBuilder<State = Empty> {
    scheme: String,
    user: Option<String>,
    pass: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: Path,
    query: Query,
    fragment: Option<String>,
    _state: PhantomData<State>,
}

impl UriBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheme: String::new(),
            user: None,
            pass: None,
            host: None,
            port: None,
            path: Path::new(),
            query: Query::new(),
            fragment: None,
            _state: PhantomData,
        }
    }

    /// Sets the scheme and advances to the [`HasScheme`] state.
    #[must_use]
    pub fn scheme(self, scheme: impl Into<String>) -> UriBuilder<HasScheme> {
        UriBuilder {
            scheme: scheme.into(),
            user: self.user,
            pass: self.pass,
            host: self.host,
            port: self.port,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
            _state: PhantomData,
        }
    }
}

impl Default for UriBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State> UriBuilder<State> {
    /// Sets the decoded user name.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Sets the decoded password.
    #[must_use]
    pub fn pass(mut self, pass: impl Into<String>) -> Self {
        self.pass = Some(pass.into());
        self
    }

    /// Sets the decoded host. Wrap IP literals in brackets.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Replaces the path.
    #[must_use]
    pub fn path(mut self, path: Path) -> Self {
        self.path = path;
        self
    }

    /// Replaces the path with an absolute path made of decoded segments.
    #[must_use]
    pub fn segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = Path::from_segments(true, segments.into_iter().map(PathSegment::new));
        self
    }

    /// Replaces the query.
    #[must_use]
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Appends a `key=value` query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push(QueryParameter::new(key, value));
        self
    }

    /// Appends a bare `key` query parameter.
    #[must_use]
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.query.push(QueryParameter::flag(key));
        self
    }

    /// Sets the decoded fragment.
    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }
}

impl UriBuilder<HasScheme> {
    /// Builds the [`Uri`] and checks it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidityError`] if the assembled URI is not well-formed,
    /// e.g. a host combined with a relative path.
    ///
    /// ```
    /// use omw_uri::{Path, UriBuilder, ValidityError};
    ///
    /// let result = UriBuilder::new()
    ///     .scheme("http")
    ///     .host("h")
    ///     .path(Path::parse("relative"))
    ///     .build();
    /// assert!(matches!(result, Err(ValidityError::RelativePathWithAuthority { .. })));
    /// ```
    pub fn build(self) -> Result<Uri, ValidityError> {
        let uri = self.build_unchecked();
        uri.validate()?;
        Ok(uri)
    }

    /// Builds the [`Uri`] without rejecting it; inspect
    /// [`Uri::is_valid`] afterwards.
    #[must_use]
    pub fn build_unchecked(self) -> Uri {
        let mut uri = Uri::new();
        uri.set_scheme(self.scheme);
        if let Some(user) = self.user {
            uri.set_user(user);
        }
        if let Some(pass) = self.pass {
            uri.set_pass(pass);
        }
        if let Some(host) = self.host {
            uri.set_host(host);
        }
        if let Some(port) = self.port {
            uri.set_port(port);
        }
        uri.set_path(self.path);
        uri.set_query(self.query);
        if let Some(fragment) = self.fragment {
            uri.set_fragment(fragment);
        }
        uri
    }
}
