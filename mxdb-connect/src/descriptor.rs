//! Connection descriptor parsing and endpoint normalization.
//!
//! A descriptor is a loosely formatted string naming one or more MongoDB
//! endpoints. Each endpoint token has the shape `[scheme://]host[:port]` and
//! tokens are separated by any run of whitespace, commas or semicolons:
//!
//! ```rust
//! use mxdb_connect::descriptor::{HostToken, normalize, tokenize};
//!
//! let tokens: Vec<_> = tokenize("server1, server2:27018;server3").collect();
//! assert_eq!(tokens, ["server1", "server2:27018", "server3"]);
//!
//! let token = HostToken::parse("mongodb://localhost:27018").unwrap();
//! assert_eq!(token.normalize(), "localhost:27018");
//!
//! assert_eq!(normalize("localhost", None), "localhost:27017");
//! ```

use std::fmt;

use thiserror::Error;
use tracing::trace;

/// Port used when a host token does not carry one.
pub const DEFAULT_PORT: u16 = 27017;

/// Separator between a scheme and the host segment.
const SCHEME_SEPARATOR: &str = "://";

/// Format a host and optional port into the canonical `host:port` form.
///
/// An absent or empty port falls back to [`DEFAULT_PORT`]. A given port is
/// used verbatim; its numeric range is not checked here.
pub fn normalize(host: &str, port: Option<&str>) -> String {
    match port.filter(|p| !p.is_empty()) {
        Some(port) => format!("{}:{}", host, port),
        None => format!("{}:{}", host, DEFAULT_PORT),
    }
}

/// Check whether a character separates host tokens.
#[inline]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ';'
}

/// Split a descriptor into raw host tokens.
///
/// Runs of separators collapse, so leading, trailing and repeated separators
/// never produce empty tokens.
pub fn tokenize(descriptor: &str) -> impl Iterator<Item = &str> {
    descriptor.split(is_separator).filter(|token| !token.is_empty())
}

/// Reasons a single host token is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Nothing left once the scheme was removed.
    #[error("'{0}' has an empty host")]
    EmptyHost(String),

    /// `://` with nothing in front of it.
    #[error("'{0}' has an empty scheme")]
    EmptyScheme(String),

    /// Scheme with characters other than letters, digits or underscores.
    #[error("'{token}' has an invalid scheme '{scheme}'")]
    InvalidScheme {
        /// The offending token.
        token: String,
        /// The scheme that was rejected.
        scheme: String,
    },

    /// A `:` with no digits after it.
    #[error("'{0}' has an empty port")]
    EmptyPort(String),

    /// A port that is not made of ASCII digits only.
    #[error("'{token}' has an invalid port '{port}'")]
    InvalidPort {
        /// The offending token.
        token: String,
        /// The port that was rejected.
        port: String,
    },

    /// Separators are not allowed inside a single token.
    #[error("'{0}' contains a separator")]
    Separator(String),
}

/// One parsed endpoint of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostToken {
    host: String,
    port: Option<String>,
}

impl HostToken {
    /// Create a token from already extracted parts.
    pub fn new(host: impl Into<String>, port: Option<String>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parse a single token of the form `[scheme://]host[:port]`.
    ///
    /// The scheme is stripped and never kept.
    pub fn parse(token: &str) -> Result<Self, TokenError> {
        if token.chars().any(is_separator) {
            return Err(TokenError::Separator(token.to_string()));
        }

        let rest = strip_scheme(token)?;

        let (host, port) = match rest.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (rest, None),
        };

        if host.is_empty() {
            return Err(TokenError::EmptyHost(token.to_string()));
        }

        let port = match port {
            None => None,
            Some("") => return Err(TokenError::EmptyPort(token.to_string())),
            Some(port) if port.chars().all(|c| c.is_ascii_digit()) => Some(port.to_string()),
            Some(port) => {
                return Err(TokenError::InvalidPort {
                    token: token.to_string(),
                    port: port.to_string(),
                });
            }
        };

        trace!(host = %host, port = ?port, "host token parsed");
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    /// Parse the leading `[scheme://]host[:port]` of a token, ignoring the rest.
    ///
    /// The host ends at the first `:`, `/` or `?` and the port at the first
    /// non-digit, so `mongodb://localhost:27017/mydb?ssl=false` yields
    /// `localhost:27017`. A `:` without digits leaves the port unset.
    pub fn parse_prefix(token: &str) -> Result<Self, TokenError> {
        if token.chars().any(is_separator) {
            return Err(TokenError::Separator(token.to_string()));
        }

        let rest = strip_scheme(token)?;
        let host_end = rest.find([':', '/', '?']).unwrap_or(rest.len());
        let (host, tail) = rest.split_at(host_end);

        if host.is_empty() {
            return Err(TokenError::EmptyHost(token.to_string()));
        }

        let port = tail.strip_prefix(':').and_then(|tail| {
            let digits_end = tail
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(tail.len());
            Some(&tail[..digits_end]).filter(|digits| !digits.is_empty())
        });

        trace!(host = %host, port = ?port, "host prefix parsed");
        Ok(Self {
            host: host.to_string(),
            port: port.map(str::to_string),
        })
    }

    /// The host segment.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The literal port digits, if the token had any.
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// The canonical `host:port` form of this token.
    pub fn normalize(&self) -> String {
        normalize(&self.host, self.port())
    }
}

impl fmt::Display for HostToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalize())
    }
}

/// Remove a leading `scheme://`, rejecting empty or non-word schemes.
fn strip_scheme(token: &str) -> Result<&str, TokenError> {
    match token.split_once(SCHEME_SEPARATOR) {
        Some((scheme, _)) if scheme.is_empty() => Err(TokenError::EmptyScheme(token.to_string())),
        Some((scheme, _)) if !scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') => {
            Err(TokenError::InvalidScheme {
                token: token.to_string(),
                scheme: scheme.to_string(),
            })
        }
        Some((_, rest)) => Ok(rest),
        None => Ok(token),
    }
}

/// Parse every token of a descriptor, in order.
///
/// Fails on the first token that does not match the grammar.
pub fn parse_hosts(descriptor: &str) -> Result<Vec<HostToken>, TokenError> {
    tokenize(descriptor).map(HostToken::parse).collect()
}
