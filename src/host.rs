//! Host type and host parser.
//!
//! A host is classified into exactly one variant of [`Host`]:
//!
//! | Input | Special scheme | Result |
//! |-------|----------------|--------|
//! | `[...]` | any | [`Host::Ipv6`] |
//! | ends in a number | yes | [`Host::Ipv4`] |
//! | anything else | yes | [`Host::Domain`] |
//! | anything else | no | [`Host::Opaque`] or [`Host::Empty`] |

use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::constants::{IPV6_PIECES, MAX_IPV4_PARTS};
use crate::error::HostError;
use crate::options::{ParseOptions, SyntaxViolation};
use crate::percent::{self, EncodeSet};

/// The host of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// A lowercase ASCII domain name (e.g., "example.com")
    Domain(String),
    /// An IPv4 address (e.g., "192.168.1.1")
    Ipv4(Ipv4Addr),
    /// An IPv6 address, serialized in brackets (e.g., `[::1]`)
    Ipv6(Ipv6Addr),
    /// A percent-encoded host of a non-special URL
    Opaque(String),
    /// The empty host (`file:///`, `foo://`)
    Empty,
}

impl Host {
    /// Parses a host with the rules of special schemes.
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the host is empty, is a malformed IP address,
    /// or contains forbidden code points.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    /// use weburl::Host;
    ///
    /// assert_eq!(Host::parse("EXAMPLE.com").unwrap(), Host::Domain("example.com".into()));
    /// assert_eq!(Host::parse("0x7f.1").unwrap(), Host::Ipv4(Ipv4Addr::new(127, 0, 0, 1)));
    /// assert_eq!(Host::parse("[::1]").unwrap().to_string(), "[::1]");
    /// assert!(Host::parse("[:::1]").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, HostError> {
        parse_host(input, true, &ParseOptions::default())
    }

    /// Parses a host with the rules of non-special schemes.
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the host is a malformed IPv6 literal or
    /// contains forbidden code points.
    pub fn parse_opaque(input: &str) -> Result<Self, HostError> {
        parse_host(input, false, &ParseOptions::default())
    }

    /// Returns true for the empty host.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the domain name, if this host is one.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Domain(d) => Some(d),
            _ => None,
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Domain(_) => 0,
            Self::Ipv4(_) => 1,
            Self::Ipv6(_) => 2,
            Self::Opaque(_) => 3,
            Self::Empty => 4,
        }
    }
}

pub(crate) fn parse_host(
    input: &str,
    special: bool,
    options: &ParseOptions<'_>,
) -> Result<Host, HostError> {
    if let Some(rest) = input.strip_prefix('[') {
        let inner = rest.strip_suffix(']').ok_or_else(|| HostError::UnclosedIpv6 {
            value: input.to_string(),
        })?;
        return parse_ipv6(inner).map(Host::Ipv6);
    }

    if !special {
        return parse_opaque_host(input, options);
    }

    if input.is_empty() {
        return Err(HostError::Empty);
    }

    let decoded = percent::percent_decode_str(input);
    if !decoded.is_ascii() {
        return Err(HostError::NonAsciiDomain {
            domain: decoded.into_owned(),
        });
    }
    let domain = decoded.to_ascii_lowercase();

    if let Some((position, char)) = domain
        .chars()
        .enumerate()
        .find(|&(_, c)| is_forbidden_domain_code_point(c))
    {
        return Err(HostError::ForbiddenCodePoint { char, position });
    }

    if ends_in_number(&domain) {
        return parse_ipv4(&domain, options).map(Host::Ipv4);
    }

    validate_labels(&domain)?;
    Ok(Host::Domain(domain))
}

fn parse_opaque_host(input: &str, options: &ParseOptions<'_>) -> Result<Host, HostError> {
    if let Some((position, char)) = input
        .chars()
        .enumerate()
        .find(|&(_, c)| is_forbidden_host_code_point(c) && c != '[' && c != ']')
    {
        return Err(HostError::ForbiddenCodePoint { char, position });
    }

    let bytes = input.as_bytes();
    if bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'%' && !percent::starts_with_escape(&bytes[i..]))
    {
        options.report(SyntaxViolation::OpaqueHostPercentEncoding);
    }

    if input.is_empty() {
        return Ok(Host::Empty);
    }
    Ok(Host::Opaque(percent::percent_encode(bytes, EncodeSet::C0Control)))
}

fn validate_labels(domain: &str) -> Result<(), HostError> {
    let trimmed = domain.strip_suffix('.').unwrap_or(domain);
    if trimmed.split('.').any(str::is_empty) {
        return Err(HostError::EmptyLabel {
            domain: domain.to_string(),
        });
    }
    Ok(())
}

/// Forbidden in every host.
pub(crate) const fn is_forbidden_host_code_point(c: char) -> bool {
    matches!(
        c,
        '\0' | '\t'
            | '\n'
            | '\r'
            | ' '
            | '#'
            | '/'
            | ':'
            | '<'
            | '>'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '^'
            | '|'
    )
}

/// Forbidden in domains: host set plus C0 controls, `%` and DEL.
const fn is_forbidden_domain_code_point(c: char) -> bool {
    is_forbidden_host_code_point(c) || c <= '\u{1F}' || c == '%' || c == '\u{7F}'
}

fn ends_in_number(input: &str) -> bool {
    let mut parts: Vec<&str> = input.split('.').collect();
    if parts.last() == Some(&"") {
        if parts.len() == 1 {
            return false;
        }
        parts.pop();
    }
    let Some(last) = parts.last() else {
        return false;
    };
    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    parse_ipv4_number(last).is_some()
}

/// Parses one dotted part: `0x` prefix is hex, a leading `0` is octal.
///
/// Returns the value (saturated on overflow) and whether it was non-decimal.
pub(crate) fn parse_ipv4_number(input: &str) -> Option<(u64, bool)> {
    if input.is_empty() {
        return None;
    }
    let (digits, radix) = if let Some(rest) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        (rest, 16)
    } else if input.len() >= 2 && input.starts_with('0') {
        (&input[1..], 8)
    } else {
        (input, 10)
    };

    let mut value: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value
            .saturating_mul(u64::from(radix))
            .saturating_add(u64::from(digit));
    }
    Some((value, radix != 10))
}

fn parse_ipv4(input: &str, options: &ParseOptions<'_>) -> Result<Ipv4Addr, HostError> {
    let fail = |reason| HostError::InvalidIpv4 {
        value: input.to_string(),
        reason,
    };

    let mut parts: Vec<&str> = input.split('.').collect();
    if parts.last() == Some(&"") {
        options.report(SyntaxViolation::Ipv4EmptyPart);
        if parts.len() > 1 {
            parts.pop();
        }
    }
    if parts.len() > MAX_IPV4_PARTS {
        return Err(fail("more than four parts"));
    }

    let mut numbers = Vec::with_capacity(parts.len());
    for part in parts {
        let (n, non_decimal) =
            parse_ipv4_number(part).ok_or_else(|| fail("part is not a number"))?;
        if non_decimal {
            options.report(SyntaxViolation::Ipv4NonDecimalPart);
        }
        numbers.push(n);
    }

    if numbers.iter().any(|&n| n > 255) {
        options.report(SyntaxViolation::Ipv4OutOfRangePart);
    }
    let Some((&last, init)) = numbers.split_last() else {
        return Err(fail("no parts"));
    };
    if init.iter().any(|&n| n > 255) {
        return Err(fail("only the last part may exceed 255"));
    }
    // 1..=4 parts, so the exponent is 1..=4 and the power fits in u64.
    let limit = 256u64.pow(u32::try_from(5 - numbers.len()).unwrap_or(4));
    if last >= limit {
        return Err(fail("last part overflows the remaining bytes"));
    }

    let mut address = last;
    for (i, &n) in init.iter().enumerate() {
        address += n << (8 * (3 - i));
    }
    u32::try_from(address)
        .map(Ipv4Addr::from)
        .map_err(|_| fail("address exceeds 32 bits"))
}

fn parse_ipv6(input: &str) -> Result<Ipv6Addr, HostError> {
    let fail = |reason| HostError::InvalidIpv6 {
        value: input.to_string(),
        reason,
    };

    let bytes = input.as_bytes();
    let mut address = [0u16; IPV6_PIECES];
    let mut piece_index = 0;
    let mut compress: Option<usize> = None;
    let mut i = 0;

    if bytes.first() == Some(&b':') {
        if bytes.get(1) != Some(&b':') {
            return Err(fail("leading ':' must be part of '::'"));
        }
        i = 2;
        piece_index = 1;
        compress = Some(1);
    }

    while i < bytes.len() {
        if piece_index == IPV6_PIECES {
            return Err(fail("more than eight pieces"));
        }
        if bytes[i] == b':' {
            if compress.is_some() {
                return Err(fail("multiple compression markers"));
            }
            i += 1;
            piece_index += 1;
            compress = Some(piece_index);
            continue;
        }

        let mut value: u16 = 0;
        let mut length = 0;
        while length < 4 {
            let Some(digit) = bytes.get(i).and_then(|&b| char::from(b).to_digit(16)) else {
                break;
            };
            // At most four hex digits, so this stays within u16.
            value = value * 0x10 + u16::try_from(digit).unwrap_or(0);
            i += 1;
            length += 1;
        }

        match bytes.get(i) {
            Some(b'.') => {
                if length == 0 {
                    return Err(fail("embedded IPv4 address without leading digits"));
                }
                i -= length;
                if piece_index > IPV6_PIECES - 2 {
                    return Err(fail("embedded IPv4 address does not fit"));
                }
                let mut numbers_seen = 0;
                while i < bytes.len() {
                    if numbers_seen > 0 {
                        if bytes[i] == b'.' && numbers_seen < 4 {
                            i += 1;
                        } else {
                            return Err(fail("malformed embedded IPv4 address"));
                        }
                    }
                    if !bytes.get(i).is_some_and(u8::is_ascii_digit) {
                        return Err(fail("embedded IPv4 part is not a number"));
                    }
                    let mut ipv4_piece: Option<u16> = None;
                    while let Some(&b) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
                        let number = u16::from(b - b'0');
                        ipv4_piece = match ipv4_piece {
                            None => Some(number),
                            Some(0) => {
                                return Err(fail("embedded IPv4 part has a leading zero"));
                            }
                            Some(p) => Some(p * 10 + number),
                        };
                        if ipv4_piece.is_some_and(|p| p > 255) {
                            return Err(fail("embedded IPv4 part exceeds 255"));
                        }
                        i += 1;
                    }
                    address[piece_index] =
                        address[piece_index] * 0x100 + ipv4_piece.unwrap_or_default();
                    numbers_seen += 1;
                    if numbers_seen == 2 || numbers_seen == 4 {
                        piece_index += 1;
                    }
                }
                if numbers_seen != 4 {
                    return Err(fail("embedded IPv4 address needs four parts"));
                }
                break;
            }
            Some(b':') => {
                i += 1;
                if i == bytes.len() {
                    return Err(fail("trailing ':'"));
                }
            }
            Some(_) => return Err(fail("invalid hex piece")),
            None => {}
        }

        address[piece_index] = value;
        piece_index += 1;
    }

    if let Some(compress) = compress {
        let mut swaps = piece_index - compress;
        piece_index = IPV6_PIECES - 1;
        while piece_index != 0 && swaps > 0 {
            address.swap(piece_index, compress + swaps - 1);
            piece_index -= 1;
            swaps -= 1;
        }
    } else if piece_index != IPV6_PIECES {
        return Err(fail("fewer than eight pieces without '::'"));
    }

    Ok(Ipv6Addr::from(address))
}

/// Start of the first longest run (length > 1) of zero pieces.
fn longest_zero_run(pieces: &[u16; IPV6_PIECES]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < pieces.len() {
        if pieces[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < pieces.len() && pieces[i] == 0 {
            i += 1;
        }
        let len = i - start;
        if len > 1 && best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }
    best.map(|(start, _)| start)
}

fn write_ipv6(f: &mut fmt::Formatter<'_>, address: &Ipv6Addr) -> fmt::Result {
    let pieces = address.segments();
    let compress = longest_zero_run(&pieces);
    f.write_char('[')?;
    let mut ignore_zero = false;
    for (i, &piece) in pieces.iter().enumerate() {
        if ignore_zero && piece == 0 {
            continue;
        }
        ignore_zero = false;
        if compress == Some(i) {
            f.write_str(if i == 0 { "::" } else { ":" })?;
            ignore_zero = true;
            continue;
        }
        write!(f, "{piece:x}")?;
        if i != IPV6_PIECES - 1 {
            f.write_char(':')?;
        }
    }
    f.write_char(']')
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(d) | Self::Opaque(d) => f.write_str(d),
            Self::Ipv4(ip) => write!(f, "{ip}"),
            Self::Ipv6(ip) => write_ipv6(f, ip),
            Self::Empty => Ok(()),
        }
    }
}

impl FromStr for Host {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Host {
    type Error = HostError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Host {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Host {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Domain(a), Self::Domain(b)) | (Self::Opaque(a), Self::Opaque(b)) => a.cmp(b),
            (Self::Ipv4(a), Self::Ipv4(b)) => a.cmp(b),
            (Self::Ipv6(a), Self::Ipv6(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
