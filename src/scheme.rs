//! Scheme type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::error::ValidityError;

/// A decoded URI scheme.
///
/// The scheme is stored exactly as given. It compares case-insensitively in
/// [`Uri::equals`](crate::Uri::equals) through [`Scheme::canonical`].
///
/// # Examples
///
/// ```
/// use omw_uri::Scheme;
///
/// let scheme = Scheme::new("svn+SSH");
/// assert!(scheme.is_valid());
/// assert_eq!(scheme.as_str(), "svn+SSH");
/// assert_eq!(scheme.canonical(), "svn+ssh");
///
/// assert!(!Scheme::new("1http").is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scheme(String);

impl Scheme {
    /// Creates a scheme from an already decoded string.
    #[must_use]
    pub fn new(scheme: impl Into<String>) -> Self {
        Self(scheme.into())
    }

    /// Returns the scheme as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lower-cased form used for comparisons.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Returns true if both schemes are equal ignoring ASCII case.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }

    /// Returns true if the scheme is non-empty, starts with a letter and
    /// contains only letters, digits, `+`, `.` and `-`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the scheme grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ValidityError::EmptyScheme`] or
    /// [`ValidityError::InvalidScheme`] naming the first bad character.
    pub fn validate(&self) -> Result<(), ValidityError> {
        let mut chars = self.0.chars();
        let Some(first) = chars.next() else {
            return Err(ValidityError::EmptyScheme);
        };
        if !first.is_ascii_alphabetic() {
            return Err(self.invalid_char(first, 0));
        }
        for (i, c) in chars.enumerate() {
            if !Self::is_valid_char(c) {
                return Err(self.invalid_char(c, i + 1));
            }
        }
        Ok(())
    }

    /// Returns true if the character may appear after the first one.
    #[must_use]
    pub const fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')
    }

    fn invalid_char(&self, c: char, position: usize) -> ValidityError {
        ValidityError::InvalidScheme {
            scheme: self.0.clone(),
            char: c,
            position,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Scheme {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Scheme {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Scheme {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for Scheme {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Scheme {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialOrd for Scheme {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheme {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
