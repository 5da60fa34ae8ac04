//! Constants for URL parsing and serialization.

/// Schemes with their own authority and host parsing rules.
pub const SPECIAL_SCHEMES: [&str; 6] = ["ftp", "file", "http", "https", "ws", "wss"];

/// Number of 16-bit groups in an IPv6 address.
pub const IPV6_PIECES: usize = 8;

/// Maximum number of dotted parts in an IPv4 address.
pub const MAX_IPV4_PARTS: usize = 4;

/// Returns true if `scheme` is one of the special schemes.
#[must_use]
pub fn is_special_scheme(scheme: &str) -> bool {
    SPECIAL_SCHEMES.contains(&scheme)
}

/// Returns the default port of a special scheme.
///
/// `file` is special but has no port, so it returns `None` like every
/// non-special scheme.
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        "ftp" => Some(21),
        _ => None,
    }
}
