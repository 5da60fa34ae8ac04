//! URL origins.

use std::fmt;

use crate::host::Host;
use crate::url::{Url, UrlPath};

/// The origin of a URL.
///
/// Only `ftp`, `http`, `https`, `ws` and `wss` URLs have a tuple origin.
/// A `blob:` URL takes the origin of the `http(s)` URL in its path. Every
/// other URL has an opaque origin, which serializes as `null`.
///
/// # Examples
///
/// ```
/// use weburl::Url;
///
/// let url = Url::parse("https://example.com:8443/a?b").unwrap();
/// assert_eq!(url.origin().ascii_serialization(), "https://example.com:8443");
///
/// let url = Url::parse("blob:https://example.com/uuid").unwrap();
/// assert_eq!(url.origin().to_string(), "https://example.com");
///
/// let url = Url::parse("data:text/plain,hi").unwrap();
/// assert_eq!(url.origin().to_string(), "null");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Origin with no identity beyond itself
    Opaque,
    /// Scheme, host and port
    Tuple {
        /// Scheme of the URL
        scheme: String,
        /// Host of the URL
        host: Host,
        /// Explicit, non-default port
        port: Option<u16>,
    },
}

impl Origin {
    pub(crate) fn of(url: &Url) -> Self {
        match url.scheme() {
            "blob" => match &url.path {
                UrlPath::Opaque(path) => Url::parse(path)
                    .ok()
                    .filter(|inner| matches!(inner.scheme(), "http" | "https"))
                    .map_or(Self::Opaque, |inner| inner.origin()),
                UrlPath::Segments(_) => Self::Opaque,
            },
            "ftp" | "http" | "https" | "ws" | "wss" => Self::Tuple {
                scheme: url.scheme().to_string(),
                host: url.parsed_host().cloned().unwrap_or(Host::Empty),
                port: url.port(),
            },
            _ => Self::Opaque,
        }
    }

    /// Returns true for a tuple origin.
    #[must_use]
    pub const fn is_tuple(&self) -> bool {
        matches!(self, Self::Tuple { .. })
    }

    /// Returns `scheme://host[:port]`, or `null` for an opaque origin.
    #[must_use]
    pub fn ascii_serialization(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opaque => f.write_str("null"),
            Self::Tuple { scheme, host, port } => {
                write!(f, "{scheme}://{host}")?;
                if let Some(port) = port {
                    write!(f, ":{port}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(input: &str) -> Origin {
        Url::parse(input).unwrap().origin()
    }

    #[test]
    fn tuple_origin_drops_credentials_path_and_default_port() {
        assert_eq!(
            origin("https://user:pw@Example.com:443/a?b#c").to_string(),
            "https://example.com"
        );
        assert_eq!(origin("ws://[::1]:9000/").to_string(), "ws://[::1]:9000");
    }

    #[test]
    fn same_origin_compares_equal() {
        assert_eq!(origin("http://example.com/a"), origin("http://EXAMPLE.com:80/b"));
        assert_ne!(origin("http://example.com/"), origin("https://example.com/"));
    }

    #[test]
    fn opaque_origins() {
        for input in ["file:///etc/hosts", "mailto:a@b.c", "foo://host/", "blob:data:x"] {
            let origin = origin(input);
            assert!(!origin.is_tuple(), "{input}");
            assert_eq!(origin.ascii_serialization(), "null");
        }
    }

    #[test]
    fn blob_origin_uses_inner_url() {
        assert_eq!(
            origin("blob:http://example.com:8080/550e8400").to_string(),
            "http://example.com:8080"
        );
        assert_eq!(origin("blob:ftp://example.com/x").to_string(), "null");
    }
}
