//! Parser and serializer for URLs as browsers understand them.
//!
//! This crate implements the WHATWG URL Standard's basic URL parser, URL
//! serializer, host parser and `application/x-www-form-urlencoded` query
//! handling, without internationalized domain names.
//!
//! # Quick Start
//!
//! ```rust
//! use weburl::Url;
//!
//! let url = Url::parse("https://user@Example.COM:443/a/../b?q=1#frag").unwrap();
//! assert_eq!(url.as_str(), "https://user@example.com/b?q=1#frag");
//! assert_eq!(url.host(), "example.com");
//! assert_eq!(url.search_params().get("q"), Some("1"));
//!
//! // Relative input resolves against a base
//! let next = Url::parse_with_base("../c", Some(&url)).unwrap();
//! assert_eq!(next.as_str(), "https://user@example.com/c");
//! ```
//!
//! # Mutation
//!
//! Setters re-run the relevant part of the parser and either apply in full
//! or leave the URL unchanged:
//!
//! ```rust
//! use weburl::Url;
//!
//! let mut url = Url::parse("http://example.com/").unwrap();
//! url.set_port("8080").unwrap();
//! url.set_path("/a b").unwrap();
//! assert!(url.set_port("nope").is_err());
//! assert_eq!(url.as_str(), "http://example.com:8080/a%20b");
//!
//! url.search_params_mut().append("k", "v w");
//! assert_eq!(url.as_str(), "http://example.com:8080/a%20b?k=v+w");
//! ```
//!
//! # Components
//!
//! | Module | Provides |
//! |--------|----------|
//! | percent-encoding | [`percent_encode`], [`percent_decode`], [`EncodeSet`] |
//! | hosts | [`Host`]: domain, IPv4, IPv6, opaque and empty hosts |
//! | URLs | [`Url`], [`ParseOptions`], [`Origin`] |
//! | queries | [`UrlSearchParams`], [`SearchParamsMut`] |
//!
//! # Logging
//!
//! Syntax violations and rejected setter calls are emitted as `tracing`
//! events at `DEBUG` level; install a subscriber to see them.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod error;
mod host;
#[cfg(kani)]
mod kani_impls;
mod options;
mod origin;
mod parser;
mod percent;
pub mod prelude;
mod search_params;
mod url;

pub use constants::{default_port, is_special_scheme, SPECIAL_SCHEMES};
pub use error::{HostError, ParseError, ParseErrorKind};
pub use host::Host;
pub use options::{ParseOptions, SyntaxViolation};
pub use origin::Origin;
pub use percent::{
    form_urldecode, form_urlencode, percent_decode, percent_decode_str, percent_encode, EncodeSet,
};
pub use search_params::{Pairs, SearchParamsMut, UrlSearchParams};
pub use url::Url;
