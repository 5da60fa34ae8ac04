//! Percent-encoding codec with per-component encode sets.
//!
//! Encoding never fails: every byte flagged by the encode set (and every
//! non-ASCII byte) is written as an uppercase `%XX` triplet. Decoding never
//! fails either: malformed triplets are passed through literally.

use std::borrow::Cow;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Set of bytes that must be escaped in a given URL component.
///
/// Each set is a superset of [`EncodeSet::C0Control`], which flags C0
/// controls, DEL and every non-ASCII byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeSet {
    /// C0 controls, DEL and non-ASCII bytes (opaque paths and hosts)
    C0Control,
    /// Fragment set: adds space, `"`, `<`, `>` and `` ` ``
    Fragment,
    /// Query set for non-special URLs: adds space, `"`, `#`, `<` and `>`
    Query,
    /// Query set for special URLs: query set plus `'`
    SpecialQuery,
    /// Path set: query set plus `?`, `^`, `` ` ``, `{` and `}`
    Path,
    /// Userinfo set: path set plus `/ : ; = @ [ \ ] ^ |`
    Userinfo,
    /// Component set: userinfo set plus `$ % & + ,`
    Component,
    /// `application/x-www-form-urlencoded` set: component set plus `! ' ( ) ~`
    FormUrlencoded,
}

impl EncodeSet {
    /// Returns true if `byte` must be percent-encoded in this set.
    #[must_use]
    pub const fn contains(self, byte: u8) -> bool {
        if byte < 0x20 || byte > 0x7E {
            return true;
        }
        match self {
            Self::C0Control => false,
            Self::Fragment => matches!(byte, b' ' | b'"' | b'<' | b'>' | b'`'),
            Self::Query => matches!(byte, b' ' | b'"' | b'#' | b'<' | b'>'),
            Self::SpecialQuery => Self::Query.contains(byte) || byte == b'\'',
            Self::Path => {
                Self::Query.contains(byte) || matches!(byte, b'?' | b'^' | b'`' | b'{' | b'}')
            }
            Self::Userinfo => {
                Self::Path.contains(byte)
                    || matches!(byte, b'/' | b':' | b';' | b'=' | b'@' | b'['..=b'^' | b'|')
            }
            Self::Component => {
                Self::Userinfo.contains(byte) || matches!(byte, b'$'..=b'&' | b'+' | b',')
            }
            Self::FormUrlencoded => {
                Self::Component.contains(byte) || matches!(byte, b'!' | b'\''..=b')' | b'~')
            }
        }
    }
}

/// Percent-encodes `input` with the given encode set.
///
/// # Examples
///
/// ```
/// use weburl::{percent_encode, EncodeSet};
///
/// assert_eq!(percent_encode(b"a b", EncodeSet::Path), "a%20b");
/// assert_eq!(percent_encode("é".as_bytes(), EncodeSet::C0Control), "%C3%A9");
/// ```
#[must_use]
pub fn percent_encode(input: &[u8], set: EncodeSet) -> String {
    let mut out = String::with_capacity(input.len());
    encode_bytes_into(&mut out, input, set);
    out
}

pub(crate) fn encode_bytes_into(out: &mut String, input: &[u8], set: EncodeSet) {
    for &byte in input {
        if set.contains(byte) {
            push_escape(out, byte);
        } else {
            out.push(char::from(byte));
        }
    }
}

/// Appends the UTF-8 encoding of `c`, escaping it if the set requires.
pub(crate) fn encode_char_into(out: &mut String, c: char, set: EncodeSet) {
    let mut buf = [0u8; 4];
    encode_bytes_into(out, c.encode_utf8(&mut buf).as_bytes(), set);
}

fn push_escape(out: &mut String, byte: u8) {
    out.push('%');
    out.push(char::from(HEX_UPPER[usize::from(byte >> 4)]));
    out.push(char::from(HEX_UPPER[usize::from(byte & 0x0F)]));
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Returns true if `rest` starts with a well-formed `%XX` triplet.
pub(crate) fn starts_with_escape(rest: &[u8]) -> bool {
    matches!(rest, [b'%', hi, lo, ..] if hex_value(*hi).is_some() && hex_value(*lo).is_some())
}

/// Decodes every well-formed `%XX` triplet in `input`.
///
/// Malformed triplets (non-hex digits or truncated at the end) are kept
/// literally.
///
/// # Examples
///
/// ```
/// use weburl::percent_decode;
///
/// assert_eq!(percent_decode(b"%41%42C"), b"ABC");
/// assert_eq!(percent_decode(b"100%"), b"100%");
/// assert_eq!(percent_decode(b"%zz"), b"%zz");
/// ```
#[must_use]
pub fn percent_decode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        let byte = input[i];
        if byte == b'%' {
            if let (Some(hi), Some(lo)) = (
                input.get(i + 1).and_then(|&b| hex_value(b)),
                input.get(i + 2).and_then(|&b| hex_value(b)),
            ) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(byte);
        i += 1;
    }
    out
}

/// Percent-decodes `input` and interprets the result as UTF-8, replacing
/// invalid sequences with U+FFFD.
#[must_use]
pub fn percent_decode_str(input: &str) -> Cow<'_, str> {
    if !input.contains('%') {
        return Cow::Borrowed(input);
    }
    Cow::Owned(String::from_utf8_lossy(&percent_decode(input.as_bytes())).into_owned())
}

/// Serializes a string with the `application/x-www-form-urlencoded` rules:
/// space becomes `+`, everything in [`EncodeSet::FormUrlencoded`] is escaped.
///
/// # Examples
///
/// ```
/// use weburl::form_urlencode;
///
/// assert_eq!(form_urlencode("hello world!"), "hello+world%21");
/// ```
#[must_use]
pub fn form_urlencode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if byte == b' ' {
            out.push('+');
        } else if EncodeSet::FormUrlencoded.contains(byte) {
            push_escape(&mut out, byte);
        } else {
            out.push(char::from(byte));
        }
    }
    out
}

/// Decodes an `application/x-www-form-urlencoded` name or value: `+` becomes
/// space, then percent-escapes are decoded leniently.
#[must_use]
pub fn form_urldecode(input: &str) -> String {
    let bytes: Vec<u8> = input
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();
    String::from_utf8_lossy(&percent_decode(&bytes)).into_owned()
}
