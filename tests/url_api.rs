//! End-to-end behavior of the public URL and query API.

use weburl::{HostError, Origin, ParseErrorKind, Url, UrlSearchParams};

mod url {
    use super::*;

    #[test]
    fn constructs_with_port() {
        let url = Url::parse("http://localhost:8080").unwrap();
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn invalid_ipv6_is_an_error() {
        let err = Url::parse("http://[:::1]").unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::InvalidHost(HostError::InvalidIpv6 { .. })
        ));
        assert_eq!(err.input, "http://[:::1]");
    }

    #[test]
    fn components() {
        let url = Url::parse("http://www.example.com").unwrap();
        assert_eq!(url.hostname(), "www.example.com");
        assert!(url.protocol().ends_with(':'));
        assert_eq!(url.origin().to_string(), "http://www.example.com");
        assert_eq!(url.host(), "www.example.com");
        assert_eq!(url.to_string(), "http://www.example.com/");

        let url = Url::parse("http://www.example.com:8080").unwrap();
        assert_eq!(url.port().map(|p| p.to_string()).as_deref(), Some("8080"));

        let url = Url::parse("http://www.example.com/path/to/resource").unwrap();
        assert_eq!(url.pathname(), "/path/to/resource");

        let url = Url::parse("http://www.example.com?query=string").unwrap();
        assert_eq!(url.search(), "?query=string");
    }

    #[test]
    fn try_parse_returns_none_on_failure() {
        let url = Url::try_parse("http://www.example.com?query=string", None).unwrap();
        assert_eq!(url.hostname(), "www.example.com");
        assert_eq!(url.search(), "?query=string");
        assert!(Url::try_parse("http://[:::1]", None).is_none());
    }

    #[test]
    fn can_parse() {
        assert!(Url::can_parse("http://www.example.com", None));
        assert!(!Url::can_parse("http://[:::1]", None));
    }

    #[test]
    fn search_params_view() {
        let url = Url::parse("http://www.example.com?query=string").unwrap();
        assert_eq!(url.search_params().get("query"), Some("string"));
        assert_eq!(url.search_params().get("nonexistent"), None);
    }

    #[test]
    fn host_kinds() {
        let host = |input: &str| Url::parse(input).unwrap().hostname();
        assert_eq!(host("http://0x7F.1/"), "127.0.0.1");
        assert_eq!(host("http://[::FFFF:192.168.0.1]/"), "[::ffff:c0a8:1]");
        assert_eq!(host("http://EXAMPLE.%63om/"), "example.com");
        assert_eq!(host("foo://Ex%41mple/"), "Ex%41mple");
        assert!(Url::parse("http://a b/").is_err());
        assert!(Url::parse("http://1.2.3.256/").is_err());
        assert!(Url::parse("http://münchen.de/").is_err());
    }

    #[test]
    fn file_url_origin_is_opaque() {
        let url = Url::parse("file:///tmp/a.txt").unwrap();
        assert_eq!(url.origin(), Origin::Opaque);
        assert_eq!(url.host(), "");
    }

    #[test]
    fn setters_are_atomic() {
        let mut url = Url::parse("https://example.com:8443/a?b#c").unwrap();
        let before = url.clone();
        assert!(url.set_host("exa mple.com").is_err());
        assert!(url.set_port("99999").is_err());
        assert!(url.set_scheme("mailto").is_err());
        assert_eq!(url, before);
    }

    #[test]
    fn setters_compose() {
        let mut url = Url::parse("http://example.com/").unwrap();
        url.set_scheme("https").unwrap();
        url.set_username("alice").unwrap();
        url.set_host("[::1]:444").unwrap();
        url.set_path("/x/./y/../z").unwrap();
        url.set_query("q=1").unwrap();
        url.set_fragment("top").unwrap();
        assert_eq!(url.as_str(), "https://alice@[::1]:444/x/z?q=1#top");
    }

    #[test]
    fn join_relative_references() {
        let base = Url::parse("http://a/b/c/d;p?q").unwrap();
        let resolve = |input: &str| base.join(input).unwrap().to_string();
        assert_eq!(resolve("g"), "http://a/b/c/g");
        assert_eq!(resolve("./g"), "http://a/b/c/g");
        assert_eq!(resolve("g/"), "http://a/b/c/g/");
        assert_eq!(resolve("/g"), "http://a/g");
        assert_eq!(resolve("//g"), "http://g/");
        assert_eq!(resolve("?y"), "http://a/b/c/d;p?y");
        assert_eq!(resolve("g?y"), "http://a/b/c/g?y");
        assert_eq!(resolve("#s"), "http://a/b/c/d;p?q#s");
        assert_eq!(resolve(";x"), "http://a/b/c/;x");
        assert_eq!(resolve(""), "http://a/b/c/d;p?q");
        assert_eq!(resolve("."), "http://a/b/c/");
        assert_eq!(resolve(".."), "http://a/b/");
        assert_eq!(resolve("../g"), "http://a/b/g");
        assert_eq!(resolve("../../../g"), "http://a/g");
        assert_eq!(resolve("g;x=1/../y"), "http://a/b/c/y");
    }
}

mod search_params {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(UrlSearchParams::parse("").to_string(), "");
    }

    #[test]
    fn append_set_delete() {
        let mut params = UrlSearchParams::parse("");
        params.append("key", "value");
        assert_eq!(params.to_string(), "key=value");

        let mut params = UrlSearchParams::parse("key=value");
        params.delete("key", None);
        assert_eq!(params.to_string(), "");

        let mut params = UrlSearchParams::new();
        params.set("key", "value");
        assert_eq!(params.to_string(), "key=value");

        let mut params = UrlSearchParams::parse("key=oldValue");
        params.set("key", "newValue");
        assert_eq!(params.to_string(), "key=newValue");

        let mut params = UrlSearchParams::new();
        params.append("key", "value1");
        params.append("key", "value2");
        assert_eq!(params.to_string(), "key=value1&key=value2");

        params.delete("key", Some("value1"));
        assert_eq!(params.to_string(), "key=value2");
    }

    #[test]
    fn lookups() {
        let params = UrlSearchParams::parse("key=value1&key=value2");
        assert_eq!(params.get("key"), Some("value1"));
        assert_eq!(params.get_all("key"), vec!["value1", "value2"]);
        assert!(params.has("key", None));
        assert!(!params.has("nonexistent", None));

        let empty = UrlSearchParams::new();
        assert_eq!(empty.get("key"), None);
        assert!(empty.get_all("key").is_empty());
    }

    #[test]
    fn encoding() {
        let params = UrlSearchParams::parse("value=hello world&key=hello+world");
        assert_eq!(params.to_string(), "value=hello+world&key=hello+world");
        let params = UrlSearchParams::parse("val=👾 Exterminate!");
        assert_eq!(params.to_string(), "val=%F0%9F%91%BE+Exterminate%21");
    }

    #[test]
    fn decoding() {
        let params = UrlSearchParams::parse("value=hello%20world&key=hello%2Bworld");
        assert_eq!(params.get("value"), Some("hello world"));
        assert_eq!(params.get("key"), Some("hello+world"));
    }

    #[test]
    fn sort() {
        let mut params = UrlSearchParams::parse("key2=value2&key1=value1");
        params.sort();
        assert_eq!(params.to_string(), "key1=value1&key2=value2");
    }

    #[test]
    fn iteration() {
        let params = UrlSearchParams::parse("key1=value1&key2=value2");
        let entries: Vec<(&str, &str)> = (&params).into_iter().collect();
        assert_eq!(entries, vec![("key1", "value1"), ("key2", "value2")]);
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["key1", "key2"]);
        assert_eq!(params.values().collect::<Vec<_>>(), vec!["value1", "value2"]);
        assert_eq!(params.iter().collect::<Vec<_>>(), entries);
    }

    #[test]
    fn live_handle() {
        let mut url = Url::parse("https://example.com/search?q=rust&page=2").unwrap();
        {
            let mut params = url.search_params_mut();
            params.set("page", "3");
            params.append("lang", "en gb");
            params.sort();
            assert_eq!(params.url().search(), "?lang=en+gb&page=3&q=rust");
        }
        assert_eq!(url.as_str(), "https://example.com/search?lang=en+gb&page=3&q=rust");

        url.set_query("?fresh=1").unwrap();
        let mut params = url.search_params_mut();
        assert_eq!(params.get("fresh"), Some("1"));
        params.delete("fresh", None);
        assert_eq!(url.as_str(), "https://example.com/search");
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn url_serializes_as_string() {
        let url = Url::parse("HTTP://Example.com/a b").unwrap();
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, "\"http://example.com/a%20b\"");
        let back: Url = serde_json::from_str(&json).unwrap();
        assert_eq!(back, url);
    }

    #[test]
    fn invalid_url_fails_to_deserialize() {
        assert!(serde_json::from_str::<Url>("\"http://[:::1]\"").is_err());
    }

    #[test]
    fn search_params_serialize_as_string() {
        let params = UrlSearchParams::parse("a=1&b=x y");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, "\"a=1&b=x+y\"");
        let back: UrlSearchParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
