//! Authority component: `[user[:pass]@]host[:port]`.
//!
//! The authority is scanned structurally first and decoded afterwards, so an
//! escaped delimiter such as `%3A` or `%40` never splits a field.

use std::fmt;

use crate::error::AuthorityError;
use crate::log::trace;
use crate::percent;

/// Port of an [`Authority`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PortState {
    /// No `:port` suffix.
    #[default]
    None,
    /// A `:port` suffix that is empty, not decimal, or above 65535.
    Invalid,
    /// A valid port number.
    Value(u16),
}

impl PortState {
    /// Parses the text after the port delimiter.
    ///
    /// ```
    /// use omw_uri::PortState;
    ///
    /// assert_eq!(PortState::parse("8080"), PortState::Value(8080));
    /// assert_eq!(PortState::parse("65536"), PortState::Invalid);
    /// assert_eq!(PortState::parse(""), PortState::Invalid);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Invalid;
        }
        input.parse::<u16>().map_or(Self::Invalid, Self::Value)
    }

    /// Returns the port number, if valid.
    #[must_use]
    pub const fn value(self) -> Option<u16> {
        match self {
            Self::Value(port) => Some(port),
            Self::None | Self::Invalid => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum HostDefect {
    Unterminated,
    Trailing,
}

/// The authority of a URI.
///
/// All fields are stored decoded. Parsing never fails; a malformed authority
/// keeps whatever could be scanned and reports itself through
/// [`Authority::is_valid`] and [`Authority::validate`].
///
/// # Examples
///
/// ```
/// use omw_uri::{Authority, PortState};
///
/// let auth = Authority::parse("user:secret@example.com:8080");
/// assert!(auth.is_valid());
/// assert_eq!(auth.user(), "user");
/// assert_eq!(auth.pass(), "secret");
/// assert_eq!(auth.host(), "example.com");
/// assert_eq!(auth.port(), Some(8080));
///
/// let auth = Authority::parse("[::1]:99999");
/// assert!(auth.is_ipv6());
/// assert_eq!(auth.port_state(), PortState::Invalid);
/// assert!(!auth.is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Authority {
    user: String,
    pass: String,
    host: String,
    is_ipv6: bool,
    port: PortState,
    defect: Option<HostDefect>,
}

impl Authority {
    /// Creates an empty authority.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a percent-encoded authority (the text between `//` and the
    /// path).
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut rest = input;
        let mut user = "";
        let mut pass = "";

        if rest.contains('@') {
            let end = rest.find([':', '@']).unwrap_or(rest.len());
            user = &rest[..end];
            rest = &rest[end..];

            if let Some(after) = rest.strip_prefix(':') {
                let end = after.find('@').unwrap_or(after.len());
                pass = &after[..end];
                rest = &after[end..];
            }

            rest = rest.strip_prefix('@').unwrap_or(rest);
        }

        let mut is_ipv6 = false;
        let mut defect = None;
        let host;

        if rest.starts_with('[') {
            if let Some(close) = rest.find(']') {
                host = &rest[..=close];
                rest = &rest[close + 1..];
                is_ipv6 = true;

                if !rest.is_empty() && !rest.starts_with(':') {
                    defect = Some(HostDefect::Trailing);
                    rest = &rest[rest.find(':').unwrap_or(rest.len())..];
                }
            } else {
                host = rest;
                rest = "";
                defect = Some(HostDefect::Unterminated);
            }
        } else {
            let end = rest.find(':').unwrap_or(rest.len());
            host = &rest[..end];
            rest = &rest[end..];
        }

        let port = rest
            .strip_prefix(':')
            .map_or(PortState::None, PortState::parse);

        trace!("authority {input:?}: {user:?} {host:?} {port:?}");

        Self {
            user: percent::decode(user),
            pass: percent::decode(pass),
            host: percent::decode(host),
            is_ipv6,
            port,
            defect,
        }
    }

    /// Returns the decoded user name.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the decoded password.
    #[must_use]
    pub fn pass(&self) -> &str {
        &self.pass
    }

    /// Returns the decoded host. IP literals keep their brackets.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns true if the host is a bracketed IP literal.
    #[must_use]
    pub const fn is_ipv6(&self) -> bool {
        self.is_ipv6
    }

    /// Returns the port state.
    #[must_use]
    pub const fn port_state(&self) -> PortState {
        self.port
    }

    /// Returns the port number, if a valid one is set.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port.value()
    }

    /// Returns true if a valid port is set.
    #[must_use]
    pub const fn has_port(&self) -> bool {
        matches!(self.port, PortState::Value(_))
    }

    /// Returns true if a user name or password is set.
    #[must_use]
    pub fn has_userinfo(&self) -> bool {
        !self.user.is_empty() || !self.pass.is_empty()
    }

    /// Returns true if there is no userinfo, no host and no port.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_userinfo() && self.host.is_empty() && self.port == PortState::None
    }

    /// Returns true if the authority is well-formed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks that the authority is well-formed.
    ///
    /// # Errors
    ///
    /// Returns `AuthorityError` if an IP literal is unterminated or followed
    /// by something other than a port, or if the port is invalid.
    pub fn validate(&self) -> Result<(), AuthorityError> {
        match self.defect {
            Some(HostDefect::Unterminated) => {
                return Err(AuthorityError::UnterminatedIpLiteral {
                    host: self.host.clone(),
                });
            }
            Some(HostDefect::Trailing) => {
                return Err(AuthorityError::TrailingAfterIpLiteral {
                    host: self.host.clone(),
                });
            }
            None => {}
        }
        if self.port == PortState::Invalid {
            return Err(AuthorityError::InvalidPort);
        }
        Ok(())
    }

    /// Sets the decoded user name.
    pub fn set_user(&mut self, user: impl Into<String>) {
        self.user = user.into();
    }

    /// Sets the decoded password.
    pub fn set_pass(&mut self, pass: impl Into<String>) {
        self.pass = pass.into();
    }

    /// Sets the decoded host. A host wrapped in `[` and `]` is taken as an
    /// IP literal and serialised verbatim.
    pub fn set_host(&mut self, host: impl Into<String>) {
        let host = host.into();
        self.is_ipv6 = host.len() >= 2 && host.starts_with('[') && host.ends_with(']');
        let unterminated = host.starts_with('[') && !self.is_ipv6;
        self.defect = unterminated.then_some(HostDefect::Unterminated);
        self.host = host;
    }

    /// Sets the port.
    pub fn set_port(&mut self, port: u16) {
        self.port = PortState::Value(port);
    }

    /// Removes the port.
    pub fn clear_port(&mut self) {
        self.port = PortState::None;
    }

    /// Resets to the empty authority.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Serialises the authority with percent-encoding.
    ///
    /// An empty password is not written, so `user:@host` reads back as
    /// `user@host`.
    ///
    /// ```
    /// use omw_uri::Authority;
    ///
    /// let mut auth = Authority::new();
    /// auth.set_user("j\u{f6}rg");
    /// auth.set_host("example.com");
    /// auth.set_port(21);
    /// assert_eq!(auth.serialise(), "j%C3%B6rg@example.com:21");
    /// ```
    #[must_use]
    pub fn serialise(&self) -> String {
        let mut out = String::new();

        if !self.user.is_empty() {
            out.push_str(&percent::encode_authority(&self.user));
        }
        if !self.pass.is_empty() {
            out.push(':');
            out.push_str(&percent::encode_authority(&self.pass));
        }
        if !out.is_empty() {
            out.push('@');
        }

        if self.is_ipv6 {
            out.push_str(&self.host);
        } else {
            out.push_str(&percent::encode_authority(&self.host));
        }

        if let PortState::Value(port) = self.port {
            out.push(':');
            out.push_str(&port.to_string());
        }

        out
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialise())
    }
}

impl From<&str> for Authority {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_host_only() {
        let auth = Authority::parse("example.com");
        assert!(auth.is_valid());
        assert!(!auth.has_userinfo());
        assert_eq!(auth.host(), "example.com");
        assert_eq!(auth.port_state(), PortState::None);
        assert_eq!(auth.serialise(), "example.com");
    }

    #[test]
    fn parse_user_without_password() {
        let auth = Authority::parse("hans.meier@www.example.com:8080");
        assert_eq!(auth.user(), "hans.meier");
        assert_eq!(auth.pass(), "");
        assert_eq!(auth.host(), "www.example.com");
        assert_eq!(auth.port(), Some(8080));
        assert_eq!(auth.serialise(), "hans.meier@www.example.com:8080");
    }

    #[test]
    fn parse_userinfo_decoded_after_scan() {
        let auth = Authority::parse("annek%C3%A4thi:geheim%3A23@api.example.com");
        assert_eq!(auth.user(), "annek\u{e4}thi");
        assert_eq!(auth.pass(), "geheim:23");
        assert_eq!(auth.host(), "api.example.com");
        assert!(!auth.has_port());
    }

    #[test]
    fn escaped_at_is_not_a_delimiter() {
        let auth = Authority::parse("a%40b.example");
        assert!(!auth.has_userinfo());
        assert_eq!(auth.host(), "a@b.example");
        assert_eq!(auth.serialise(), "a%40b.example");
    }

    #[test]
    fn password_may_contain_colon() {
        let auth = Authority::parse("u:p:q@h");
        assert_eq!(auth.user(), "u");
        assert_eq!(auth.pass(), "p:q");
        assert_eq!(auth.host(), "h");
    }

    #[test]
    fn empty_password_collapses() {
        let auth = Authority::parse("user:@host");
        assert_eq!(auth.user(), "user");
        assert_eq!(auth.pass(), "");
        assert_eq!(auth.serialise(), "user@host");
    }

    #[test]
    fn empty_userinfo_is_dropped() {
        let auth = Authority::parse("@host");
        assert!(!auth.has_userinfo());
        assert_eq!(auth.serialise(), "host");
    }

    #[test]
    fn parse_ipv6_literal() {
        let auth = Authority::parse("vreni.hubacher:br-bue@[2600:1406:3a00:21::173e:2e65]:1234");
        assert!(auth.is_valid());
        assert!(auth.is_ipv6());
        assert_eq!(auth.user(), "vreni.hubacher");
        assert_eq!(auth.pass(), "br-bue");
        assert_eq!(auth.host(), "[2600:1406:3a00:21::173e:2e65]");
        assert_eq!(auth.port(), Some(1234));
        assert_eq!(
            auth.serialise(),
            "vreni.hubacher:br-bue@[2600:1406:3a00:21::173e:2e65]:1234"
        );
    }

    #[test]
    fn unterminated_ipv6_keeps_host() {
        let auth = Authority::parse("user@[::1");
        assert!(!auth.is_valid());
        assert!(!auth.is_ipv6());
        assert_eq!(auth.user(), "user");
        assert_eq!(auth.host(), "[::1");
        assert_eq!(
            auth.validate(),
            Err(AuthorityError::UnterminatedIpLiteral {
                host: "[::1".to_string(),
            })
        );
    }

    #[test]
    fn text_after_ipv6_literal_is_invalid() {
        let auth = Authority::parse("[::1]x:80");
        assert!(matches!(
            auth.validate(),
            Err(AuthorityError::TrailingAfterIpLiteral { .. })
        ));
        assert_eq!(auth.host(), "[::1]");
        assert_eq!(auth.port(), Some(80));
    }

    #[test]
    fn port_bounds() {
        assert_eq!(Authority::parse("h:0").port(), Some(0));
        assert_eq!(Authority::parse("h:65535").port(), Some(65535));

        let auth = Authority::parse("h:65536");
        assert_eq!(auth.port_state(), PortState::Invalid);
        assert_eq!(auth.validate(), Err(AuthorityError::InvalidPort));
    }

    #[test]
    fn non_numeric_ports_are_invalid() {
        for input in ["h:", "h:8o", "h:-1", "h:+80", "h: 80", "h:99999999999999999999"] {
            let auth = Authority::parse(input);
            assert_eq!(auth.port_state(), PortState::Invalid, "{input}");
            assert!(!auth.is_valid(), "{input}");
            assert_eq!(auth.host(), "h");
        }
    }

    #[test]
    fn invalid_port_is_not_serialised() {
        assert_eq!(Authority::parse("h:abc").serialise(), "h");
    }

    #[test]
    fn empty_authority() {
        let auth = Authority::parse("");
        assert!(auth.is_empty());
        assert!(auth.is_valid());
        assert_eq!(auth.serialise(), "");

        assert!(!Authority::parse(":80").is_empty());
        assert!(!Authority::parse(":x").is_empty());
    }

    #[test]
    fn host_is_reencoded() {
        let mut auth = Authority::new();
        auth.set_host("\u{f6}.example.com");
        assert_eq!(auth.serialise(), "%C3%B6.example.com");
    }

    #[test]
    fn set_host_detects_ip_literal() {
        let mut auth = Authority::new();
        auth.set_host("[fe80::1]");
        assert!(auth.is_ipv6());
        assert!(auth.is_valid());
        assert_eq!(auth.serialise(), "[fe80::1]");

        auth.set_host("[fe80::1");
        assert!(!auth.is_ipv6());
        assert!(!auth.is_valid());

        auth.set_host("example.com");
        assert!(auth.is_valid());
    }

    #[test]
    fn set_port_repairs_invalid_port() {
        let mut auth = Authority::parse("h:x");
        assert!(!auth.is_valid());
        auth.set_port(443);
        assert!(auth.is_valid());
        assert_eq!(auth.serialise(), "h:443");
        auth.clear_port();
        assert_eq!(auth.serialise(), "h");
    }

    #[test]
    fn clear_resets_everything() {
        let mut auth = Authority::parse("u:p@[::1");
        auth.clear();
        assert_eq!(auth, Authority::new());
        assert!(auth.is_empty());
    }
}
