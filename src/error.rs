//! Error types for URL and host parsing.

use std::error::Error;
use std::fmt;

/// Errors that can occur when parsing a URL or applying a setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }
}

/// Specific URL parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input has no scheme and no base URL was given (or the base has an
    /// opaque path)
    MissingScheme,
    /// Value given to the scheme setter is not a valid scheme
    InvalidScheme {
        /// The rejected value
        found: String,
    },
    /// Scheme change would alter the shape of the URL
    SchemeChange {
        /// Current scheme
        from: String,
        /// Requested scheme
        to: String,
        /// Reason the change is rejected
        reason: &'static str,
    },
    /// Authority has credentials or a port but no host, or a special URL
    /// has an empty host
    MissingHost,
    /// Host parsing failed
    InvalidHost(HostError),
    /// Invalid port number
    InvalidPort {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// URL has no host, an empty host, or is a `file` URL
    CannotHaveCredentials,
    /// URL has no host, an empty host, or is a `file` URL
    CannotHavePort,
    /// Host setter would empty a host that still carries credentials or a port
    HostChange,
    /// Component cannot be set on a URL with an opaque path
    OpaquePath {
        /// Name of the rejected component
        component: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URL '{}': ", self.input)?;
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingScheme => {
                write!(f, "relative URL without a base; add a scheme or supply a base URL")
            }
            Self::InvalidScheme { found } => write!(f, "'{found}' is not a valid scheme"),
            Self::SchemeChange { from, to, reason } => {
                write!(f, "cannot change scheme from '{from}' to '{to}': {reason}")
            }
            Self::MissingHost => write!(f, "missing host"),
            Self::InvalidHost(e) => write!(f, "invalid host: {e}"),
            Self::InvalidPort { value, reason } => write!(f, "invalid port '{value}': {reason}"),
            Self::CannotHaveCredentials => {
                write!(f, "URL without a host or with the file scheme cannot carry credentials")
            }
            Self::CannotHavePort => {
                write!(f, "URL without a host or with the file scheme cannot carry a port")
            }
            Self::HostChange => {
                write!(f, "host cannot be emptied while credentials or a port are present")
            }
            Self::OpaquePath { component } => {
                write!(f, "cannot set {component} on a URL with an opaque path")
            }
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidHost(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HostError> for ParseErrorKind {
    fn from(e: HostError) -> Self {
        Self::InvalidHost(e)
    }
}

/// Errors for host parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Host of a special URL is empty
    Empty,
    /// IPv6 literal is missing its closing bracket
    UnclosedIpv6 {
        /// The unterminated literal
        value: String,
    },
    /// Invalid IPv6 address
    InvalidIpv6 {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Invalid IPv4 address
    InvalidIpv4 {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Host contains a code point that is never allowed in a host
    ForbiddenCodePoint {
        /// The forbidden character
        char: char,
        /// Position in the (decoded) host
        position: usize,
    },
    /// Domain has an empty label between dots
    EmptyLabel {
        /// The invalid domain
        domain: String,
    },
    /// Domain contains non-ASCII characters (IDNA is not supported)
    NonAsciiDomain {
        /// The invalid domain
        domain: String,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "host cannot be empty"),
            Self::UnclosedIpv6 { value } => {
                write!(f, "IPv6 literal '{value}' is missing its closing ']'")
            }
            Self::InvalidIpv6 { value, reason } => {
                write!(f, "invalid IPv6 address '{value}': {reason}")
            }
            Self::InvalidIpv4 { value, reason } => {
                write!(f, "invalid IPv4 address '{value}': {reason}")
            }
            Self::ForbiddenCodePoint { char, position } => {
                write!(f, "forbidden host code point {char:?} at position {position}")
            }
            Self::EmptyLabel { domain } => {
                write!(f, "domain '{domain}' has an empty label")
            }
            Self::NonAsciiDomain { domain } => {
                write!(
                    f,
                    "domain '{domain}' is not ASCII; internationalized domains are not supported"
                )
            }
        }
    }
}

impl Error for HostError {}
