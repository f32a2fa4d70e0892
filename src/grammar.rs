use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Component fragments shared by both grammars.
// `\w` and `\d` are spelled out as ASCII classes; the `regex` crate's are Unicode-aware.
// Whitespace is the ECMAScript set (`ws!`), not Unicode `White_Space`: it has U+FEFF
// and lacks U+0085.

/// Members of the whitespace class, for use inside `[...]`
macro_rules! ws {
    () => {
        r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"
    };
}

/// `[scheme:]`
const SCHEME: &str = r"(?:(?P<scheme>[0-9A-Za-z_.+\-]+):)?";

/// `//[userinfo@]host[:port]`
const AUTHORITY: &str = concat!(
    r"//(?:(?P<user_info>[^",
    ws!(),
    r":/?#\[\]@]+)@)?",
    r"(?P<host>(?P<ipv4>(?:[0-9]{1,3}\.){3}[0-9]{1,3})|(?P<domain>[^",
    ws!(),
    r":/?#\[\]@]+))",
    r"(?::(?P<port>[0-9]{1,5}))?",
);

/// `/[dir/file]`, leading slash required
const ABSOLUTE_PATH: &str = concat!(
    r"(?P<path>/(?:[^",
    ws!(),
    r"/?#]+(?:/[^",
    ws!(),
    r"/?#]*)*)?)",
);

/// `[/][dir/file]`
const RELATIVE_PATH: &str = concat!(
    r"(?P<path>/?(?:[^",
    ws!(),
    r"/?#]+(?:/[^",
    ws!(),
    r"/?#]*)*)?)",
);

/// `[?query]`
const QUERY: &str = concat!(r"(?:\?(?P<query>[^", ws!(), r"?#]*))?");

/// `[#fragment]`
const FRAGMENT: &str = concat!(r"(?:#(?P<fragment>[^", ws!(), r"?#]*))?");

/// Format: `[scheme:]//[userinfo@]host[:port]/[dir/file][?query][#fragment]`
static AUTHORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^{SCHEME}{AUTHORITY}{ABSOLUTE_PATH}{QUERY}{FRAGMENT}$"
    ))
    .expect("AUTHORITY_PATTERN: hardcoded regex is invalid")
});

/// Format: `[scheme:][/][dir/file][?query][#fragment]`
static RELATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{SCHEME}{RELATIVE_PATH}{QUERY}{FRAGMENT}$"))
        .expect("RELATIVE_PATTERN: hardcoded regex is invalid")
});

/// URL grammar alternatives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// `[scheme:]//[userinfo@]host[:port]path[?query][#fragment]`
    Authority,
    /// `[scheme:][path][?query][#fragment]`, no host
    Relative,
}

impl Grammar {
    /// Grammars in the order they are tried
    pub const ORDER: [Grammar; 2] = [Grammar::Authority, Grammar::Relative];

    fn pattern(self) -> &'static Regex {
        match self {
            Grammar::Authority => &AUTHORITY_PATTERN,
            Grammar::Relative => &RELATIVE_PATTERN,
        }
    }

    /// Match the whole of `input` against this grammar alone
    pub fn captures(self, input: &str) -> Option<FieldCaptures<'_>> {
        self.pattern()
            .captures(input)
            .map(|caps| FieldCaptures::from_captures(self, &caps))
    }
}

/// Raw fields captured by a grammar, borrowed from the normalized input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCaptures<'a> {
    /// Grammar that produced the captures
    pub grammar: Grammar,
    pub scheme: Option<&'a str>,
    pub user_info: Option<&'a str>,
    /// Either `ipv4` or `domain`; `None` for the relative grammar
    pub host: Option<&'a str>,
    pub ipv4: Option<&'a str>,
    pub domain: Option<&'a str>,
    pub port: Option<&'a str>,
    /// Always captured, may be empty
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> FieldCaptures<'a> {
    fn from_captures(grammar: Grammar, caps: &Captures<'a>) -> Self {
        let field = |name: &str| caps.name(name).map(|m| m.as_str());
        Self {
            grammar,
            scheme: field("scheme"),
            user_info: field("user_info"),
            host: field("host"),
            ipv4: field("ipv4"),
            domain: field("domain"),
            port: field("port"),
            path: field("path").unwrap_or(""),
            query: field("query"),
            fragment: field("fragment"),
        }
    }
}

/// Trim surrounding whitespace and lowercase the whole input.
///
/// Path, query and fragment are lowercased too.
pub fn normalize(input: &str) -> String {
    input.trim_matches(is_whitespace).to_lowercase()
}

/// ECMAScript whitespace and line terminators, the set the grammars exclude
fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Match a normalized input against each grammar in turn; the first full match wins.
pub fn match_url(normalized: &str) -> Option<FieldCaptures<'_>> {
    let captures = Grammar::ORDER
        .iter()
        .find_map(|grammar| grammar.captures(normalized));

    match &captures {
        Some(caps) => tracing::trace!(grammar = ?caps.grammar, input = normalized, "url matched"),
        None => tracing::trace!(input = normalized, "url matched no grammar"),
    }

    captures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        // Forces Lazy evaluation of both patterns.
        assert!(AUTHORITY_PATTERN.is_match("http://example.com/"));
        assert!(RELATIVE_PATTERN.is_match("/path"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  HTTP://Example.COM/Path?Q=1#Top \n"), "http://example.com/path?q=1#top");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_trims_bom_but_not_next_line() {
        assert_eq!(normalize("\u{feff}\u{3000}http://example.com/\u{a0}"), "http://example.com/");
        assert_eq!(normalize("\u{85}/path\u{85}"), "\u{85}/path\u{85}");
    }

    #[test]
    fn test_whitespace_class() {
        for c in ['\u{feff}', '\u{a0}', '\u{2028}', '\u{3000}', '\u{b}'] {
            assert!(is_whitespace(c), "{:?} should be whitespace", c);
            assert!(match_url(&format!("http://a{}b.com/", c)).is_none());
        }
        assert!(!is_whitespace('\u{85}'));
        let caps = match_url("http://a\u{85}b.com/").unwrap();
        assert_eq!(caps.grammar, Grammar::Authority);
        assert_eq!(caps.domain, Some("a\u{85}b.com"));
    }

    #[test]
    fn test_authority_full() {
        let caps =
            match_url("https://user@www.example.co.uk:8443/a/b.html?x=1&y=2#frag").unwrap();
        assert_eq!(caps.grammar, Grammar::Authority);
        assert_eq!(caps.scheme, Some("https"));
        assert_eq!(caps.user_info, Some("user"));
        assert_eq!(caps.host, Some("www.example.co.uk"));
        assert_eq!(caps.domain, Some("www.example.co.uk"));
        assert_eq!(caps.ipv4, None);
        assert_eq!(caps.port, Some("8443"));
        assert_eq!(caps.path, "/a/b.html");
        assert_eq!(caps.query, Some("x=1&y=2"));
        assert_eq!(caps.fragment, Some("frag"));
    }

    #[test]
    fn test_authority_ipv4() {
        let caps = match_url("http://127.0.0.1:8080/path").unwrap();
        assert_eq!(caps.grammar, Grammar::Authority);
        assert_eq!(caps.host, Some("127.0.0.1"));
        assert_eq!(caps.ipv4, Some("127.0.0.1"));
        assert_eq!(caps.domain, None);
        assert_eq!(caps.port, Some("8080"));
        assert_eq!(caps.path, "/path");
    }

    #[test]
    fn test_ipv4_not_range_checked() {
        let caps = match_url("http://999.999.999.999/").unwrap();
        assert_eq!(caps.ipv4, Some("999.999.999.999"));
    }

    #[test]
    fn test_five_octets_is_domain() {
        let caps = match_url("http://1.2.3.4.5/").unwrap();
        assert_eq!(caps.ipv4, None);
        assert_eq!(caps.domain, Some("1.2.3.4.5"));
    }

    #[test]
    fn test_port_not_range_checked() {
        let caps = match_url("http://example.com:99999/").unwrap();
        assert_eq!(caps.port, Some("99999"));
    }

    #[test]
    fn test_scheme_relative_authority() {
        let caps = match_url("//cdn.example.com/lib.js").unwrap();
        assert_eq!(caps.grammar, Grammar::Authority);
        assert_eq!(caps.scheme, None);
        assert_eq!(caps.domain, Some("cdn.example.com"));
        assert_eq!(caps.path, "/lib.js");
    }

    #[test]
    fn test_empty_query_and_fragment_are_captured() {
        let caps = match_url("http://example.com/?#").unwrap();
        assert_eq!(caps.query, Some(""));
        assert_eq!(caps.fragment, Some(""));
    }

    #[test]
    fn test_missing_path_falls_back_to_relative() {
        // The authority grammar requires a path; the relative grammar then
        // takes the whole string as a path.
        let caps = match_url("http://example.com").unwrap();
        assert_eq!(caps.grammar, Grammar::Relative);
        assert_eq!(caps.scheme, None);
        assert_eq!(caps.host, None);
        assert_eq!(caps.path, "http://example.com");
    }

    #[test]
    fn test_relative_scheme_and_path() {
        let caps = match_url("mailto:someone@example.com").unwrap();
        assert_eq!(caps.grammar, Grammar::Relative);
        assert_eq!(caps.scheme, Some("mailto"));
        assert_eq!(caps.path, "someone@example.com");
        assert_eq!(caps.host, None);
    }

    #[test]
    fn test_relative_fragment_only() {
        let caps = match_url("#section-2").unwrap();
        assert_eq!(caps.grammar, Grammar::Relative);
        assert_eq!(caps.path, "");
        assert_eq!(caps.fragment, Some("section-2"));
    }

    #[test]
    fn test_relative_query_only() {
        let caps = match_url("?page=2").unwrap();
        assert_eq!(caps.path, "");
        assert_eq!(caps.query, Some("page=2"));
    }

    #[test]
    fn test_empty_input_matches_relative() {
        let caps = match_url("").unwrap();
        assert_eq!(caps.grammar, Grammar::Relative);
        assert_eq!(caps.path, "");
        assert_eq!(caps.scheme, None);
    }

    #[test]
    fn test_no_match() {
        assert!(match_url("http://a b.com/").is_none());
        assert!(match_url("a b").is_none());
        assert!(match_url("/path?a?b").is_none());
        assert!(match_url("http://example.com/#a#b").is_none());
    }

    #[test]
    fn test_grammar_order() {
        assert_eq!(Grammar::ORDER, [Grammar::Authority, Grammar::Relative]);
        assert!(Grammar::Authority.captures("//example.com/").is_some());
        assert!(Grammar::Relative.captures("//example.com/").is_none());
        assert!(Grammar::Authority.captures("/index.html").is_none());
        assert_eq!(match_url("/index.html").unwrap().grammar, Grammar::Relative);
    }
}
