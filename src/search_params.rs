//! Ordered name-value view of a URL query.

use std::convert::Infallible;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;
use std::slice;
use std::str::FromStr;
use std::vec;

use crate::percent::{form_urldecode, form_urlencode};
use crate::url::Url;

/// An ordered list of name-value pairs in
/// `application/x-www-form-urlencoded` form.
///
/// Names may repeat and insertion order is preserved. Stored names and
/// values are decoded; [`Display`](fmt::Display) re-encodes them, with space
/// written as `+`.
///
/// # Examples
///
/// ```
/// use weburl::UrlSearchParams;
///
/// let mut params = UrlSearchParams::parse("?b=2&a=1&b=3");
/// assert_eq!(params.get("b"), Some("2"));
/// assert_eq!(params.get_all("b"), vec!["2", "3"]);
///
/// params.append("q", "hello world!");
/// params.sort();
/// assert_eq!(params.to_string(), "a=1&b=2&b=3&q=hello+world%21");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UrlSearchParams {
    pairs: Vec<(String, String)>,
}

impl UrlSearchParams {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a form-urlencoded string, ignoring one leading `?`.
    ///
    /// Parsing never fails: empty pieces between `&` are skipped, a piece
    /// without `=` has an empty value, and malformed escapes are kept
    /// literally.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::from_query(input.strip_prefix('?').unwrap_or(input))
    }

    /// Parses a URL query as stored, where a leading `?` is data.
    pub(crate) fn from_query(query: &str) -> Self {
        let pairs = query
            .split('&')
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                let (name, value) = piece.split_once('=').unwrap_or((piece, ""));
                (form_urldecode(name), form_urldecode(value))
            })
            .collect();
        Self { pairs }
    }

    /// Adds a pair at the end of the list.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Sets the value of the first pair named `name` and removes the other
    /// pairs with that name. Appends a new pair if there was none.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(n, _)| n == name) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(n, _)| {
                    let keep = index <= first || n != name;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    /// Removes every pair named `name`, or only those whose value is also
    /// equal to `value` when one is given.
    pub fn delete(&mut self, name: &str, value: Option<&str>) {
        self.pairs
            .retain(|(n, v)| n != name || value.is_some_and(|value| v != value));
    }

    /// Returns the value of the first pair named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the values of every pair named `name`, in order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if a pair named `name` exists, also matching `value`
    /// when one is given.
    #[must_use]
    pub fn has(&self, name: &str, value: Option<&str>) -> bool {
        self.pairs
            .iter()
            .any(|(n, v)| n == name && value.is_none_or(|value| v == value))
    }

    /// Sorts pairs by name, comparing UTF-16 code units. Pairs with equal
    /// names keep their relative order.
    pub fn sort(&mut self) {
        self.pairs
            .sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
    }

    /// Removes every pair.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the list has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator over `(name, value)` pairs.
    #[must_use]
    pub fn iter(&self) -> Pairs<'_> {
        Pairs {
            inner: self.pairs.iter(),
        }
    }

    /// Returns an iterator over names, repeated names included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    /// Returns an iterator over values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(_, value)| value)
    }
}

impl fmt::Display for UrlSearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", form_urlencode(name), form_urlencode(value))?;
        }
        Ok(())
    }
}

impl FromStr for UrlSearchParams {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<K, V> FromIterator<(K, V)> for UrlSearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for UrlSearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.pairs
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for UrlSearchParams {
    type Item = (String, String);
    type IntoIter = vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a UrlSearchParams {
    type Item = (&'a str, &'a str);
    type IntoIter = Pairs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the pairs of a [`UrlSearchParams`].
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    inner: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Pairs<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl ExactSizeIterator for Pairs<'_> {}

impl FusedIterator for Pairs<'_> {}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlSearchParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UrlSearchParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Mutable view of a URL's query pairs.
///
/// Every mutation rewrites the owning URL's query from the serialized
/// list; an empty list removes the query entirely. Reads go through
/// [`Deref`] to the current [`UrlSearchParams`].
///
/// # Examples
///
/// ```
/// use weburl::Url;
///
/// let mut url = Url::parse("https://example.com/?a=1#f").unwrap();
/// let mut params = url.search_params_mut();
/// params.append("b", "x y");
/// assert_eq!(params.url().search(), "?a=1&b=x+y");
///
/// params.delete("a", None);
/// params.delete("b", None);
/// assert_eq!(url.as_str(), "https://example.com/#f");
/// ```
#[derive(Debug)]
pub struct SearchParamsMut<'a> {
    url: &'a mut Url,
}

impl<'a> SearchParamsMut<'a> {
    pub(crate) fn new(url: &'a mut Url) -> Self {
        Self { url }
    }

    /// Returns the URL this view writes to.
    #[must_use]
    pub fn url(&self) -> &Url {
        self.url
    }

    /// Adds a pair at the end and updates the URL.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.url.query_pairs.append(name, value);
        self.url.commit_query_pairs();
    }

    /// Replaces every pair named `name` with a single one and updates the
    /// URL.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.url.query_pairs.set(name, value);
        self.url.commit_query_pairs();
    }

    /// Removes matching pairs and updates the URL.
    pub fn delete(&mut self, name: &str, value: Option<&str>) {
        self.url.query_pairs.delete(name, value);
        self.url.commit_query_pairs();
    }

    /// Sorts pairs by name and updates the URL.
    pub fn sort(&mut self) {
        self.url.query_pairs.sort();
        self.url.commit_query_pairs();
    }

    /// Removes every pair, which removes the URL's query.
    pub fn clear(&mut self) {
        self.url.query_pairs.clear();
        self.url.commit_query_pairs();
    }

    /// Appends every pair and updates the URL once.
    pub fn extend<K, V, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.url.query_pairs.extend(pairs);
        self.url.commit_query_pairs();
    }
}

impl Deref for SearchParamsMut<'_> {
    type Target = UrlSearchParams;

    fn deref(&self) -> &Self::Target {
        &self.url.query_pairs
    }
}
