//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use weburl::prelude::*;
//!
//! let url = Url::parse("https://example.com/?a=1").unwrap();
//! assert_eq!(url.search_params().get("a"), Some("1"));
//! ```

pub use crate::{
    // Core types
    Host, Origin, Url, UrlSearchParams,
    // Configuration
    ParseOptions, SyntaxViolation,
    // Errors
    HostError, ParseError, ParseErrorKind,
};
