//! Parser configuration and non-fatal syntax violation reporting.

use std::fmt;

use crate::error::ParseError;
use crate::parser::Parser;
use crate::url::Url;

/// A non-fatal validation error noticed while parsing.
///
/// Parsing continues after a violation; the resulting URL is the same as
/// if the input had been written canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxViolation {
    /// Leading or trailing C0 control or space was removed
    C0SpaceIgnored,
    /// An ASCII tab or newline was removed
    TabOrNewlineIgnored,
    /// Backslash used where a slash was expected
    Backslash,
    /// A special URL was missing the `//` after its scheme
    ExpectedDoubleSlash,
    /// `file:` was not followed by `//`
    ExpectedFileDoubleSlash,
    /// Input carried a username or password
    EmbeddedCredentials,
    /// An `@` appeared inside the userinfo and was escaped
    UnencodedAt,
    /// A code point outside the URL code points was encountered
    NonUrlCodePoint,
    /// A `%` was not followed by two hex digits
    PercentEncoding,
    /// A Windows drive letter was found where a host was expected
    FileInvalidWindowsDriveLetterHost,
    /// A relative `file` URL began with a Windows drive letter
    FileInvalidWindowsDriveLetter,
    /// IPv4 address has an empty trailing part
    Ipv4EmptyPart,
    /// IPv4 address used hexadecimal or octal parts
    Ipv4NonDecimalPart,
    /// IPv4 address part other than the last exceeds 255
    Ipv4OutOfRangePart,
    /// An opaque host contained a malformed percent escape
    OpaqueHostPercentEncoding,
}

impl SyntaxViolation {
    /// Returns a short human readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::C0SpaceIgnored => "leading or trailing control or space character ignored",
            Self::TabOrNewlineIgnored => "tab or newline ignored",
            Self::Backslash => "backslash",
            Self::ExpectedDoubleSlash => "expected //",
            Self::ExpectedFileDoubleSlash => "expected // after file:",
            Self::EmbeddedCredentials => "embedding authentication information is not recommended",
            Self::UnencodedAt => "unencoded @ sign in username or password",
            Self::NonUrlCodePoint => "non-URL code point",
            Self::PercentEncoding => "expected two hex digits after %",
            Self::FileInvalidWindowsDriveLetterHost => "file host is a Windows drive letter",
            Self::FileInvalidWindowsDriveLetter => "relative file URL starts with a drive letter",
            Self::Ipv4EmptyPart => "IPv4 address ends with a dot",
            Self::Ipv4NonDecimalPart => "IPv4 address has a hexadecimal or octal part",
            Self::Ipv4OutOfRangePart => "IPv4 address part exceeds 255",
            Self::OpaqueHostPercentEncoding => "malformed percent escape in host",
        }
    }
}

impl fmt::Display for SyntaxViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Configuration for a single parse.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use weburl::{SyntaxViolation, Url};
///
/// let base = Url::parse("https://example.com/a/b").unwrap();
/// let seen = RefCell::new(Vec::new());
/// let url = Url::options()
///     .base_url(Some(&base))
///     .syntax_violation_callback(Some(&|v: SyntaxViolation| seen.borrow_mut().push(v)))
///     .parse("..\\c")
///     .unwrap();
///
/// assert_eq!(url.as_str(), "https://example.com/c");
/// assert_eq!(seen.into_inner(), vec![SyntaxViolation::Backslash]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct ParseOptions<'a> {
    pub(crate) base_url: Option<&'a Url>,
    pub(crate) violation_fn: Option<&'a dyn Fn(SyntaxViolation)>,
}

impl<'a> ParseOptions<'a> {
    /// Creates options with no base URL and no violation callback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL used to resolve relative input.
    #[must_use]
    pub const fn base_url(mut self, base: Option<&'a Url>) -> Self {
        self.base_url = base;
        self
    }

    /// Sets a callback receiving every non-fatal syntax violation.
    #[must_use]
    pub fn syntax_violation_callback(
        mut self,
        callback: Option<&'a dyn Fn(SyntaxViolation)>,
    ) -> Self {
        self.violation_fn = callback;
        self
    }

    /// Parses `input` with these options.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is not a valid URL.
    pub fn parse(self, input: &str) -> Result<Url, ParseError> {
        Parser::new(self).parse(input)
    }

    pub(crate) fn report(&self, violation: SyntaxViolation) {
        tracing::debug!(%violation, "URL syntax violation");
        if let Some(callback) = self.violation_fn {
            callback(violation);
        }
    }
}

impl fmt::Debug for ParseOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("base_url", &self.base_url.map(Url::as_str))
            .field("violation_fn", &self.violation_fn.map(|_| "Fn(SyntaxViolation)"))
            .finish()
    }
}
