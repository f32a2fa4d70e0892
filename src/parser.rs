//! Parser module.
//!
//! Normalizes input, runs the grammars, decomposes domain hosts and
//! assembles the [`ParsedUrl`] record.

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::{decompose, DomainParts};
use crate::error::{Result, UrlError};
use crate::grammar::{match_url, normalize, FieldCaptures};
use crate::suffix::{parse_suffix_list, parse_suffix_list_from_file, SuffixTable};
use crate::types::ParsedUrl;

/// Parser over the built-in suffix table, shared by [`parse`].
static DEFAULT_PARSER: Lazy<Parser> = Lazy::new(Parser::new);

/// Parse a URL with the built-in suffix table.
///
/// Returns `None` when the input matches neither grammar.
///
/// ```
/// let url = common_url::parse("https://www.example.co.uk/index.html").unwrap();
/// assert_eq!(url.registrable_domain.as_deref(), Some("example.co.uk"));
/// assert!(common_url::parse("http://a b.com/").is_none());
/// ```
pub fn parse(url: &str) -> Option<ParsedUrl> {
    DEFAULT_PARSER.parse(url)
}

/// Parser options.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Suffix table used to decompose domains
    pub suffix_table: Arc<SuffixTable>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            suffix_table: SuffixTable::builtin_shared(),
        }
    }
}

impl ParserOptions {
    /// Create new parser options with the built-in suffix table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the suffix table.
    pub fn with_suffix_table(mut self, table: SuffixTable) -> Self {
        self.suffix_table = Arc::new(table);
        self
    }

    /// Merge extra suffix records (same format as [`parse_suffix_list`]) into the current table.
    pub fn with_extra_suffixes(mut self, text: &str) -> Result<Self> {
        let extra = parse_suffix_list(text)?;
        Arc::make_mut(&mut self.suffix_table).extend(extra);
        Ok(self)
    }
}

/// URL parser bound to one suffix table.
///
/// Cheap to clone; the table is shared read-only between clones and threads.
#[derive(Debug, Clone)]
pub struct Parser {
    suffix_table: Arc<SuffixTable>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with the built-in suffix table.
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    /// Create a parser from options.
    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            suffix_table: options.suffix_table,
        }
    }

    /// Create a parser whose suffix table is read from a file.
    pub fn from_suffix_file(path: impl AsRef<Path>) -> Result<Self> {
        let table = parse_suffix_list_from_file(path)?;
        Ok(Self::with_options(
            ParserOptions::new().with_suffix_table(table),
        ))
    }

    /// Suffix table in use
    pub fn suffix_table(&self) -> &SuffixTable {
        &self.suffix_table
    }

    /// Parse a URL. Returns `None` when the input matches neither grammar.
    pub fn parse(&self, url: &str) -> Option<ParsedUrl> {
        let normalized = normalize(url);
        let captures = match_url(&normalized)?;
        Some(self.assemble(&captures))
    }

    /// Like [`Parser::parse`], but reports no match as [`UrlError::NoMatch`].
    pub fn try_parse(&self, url: &str) -> Result<ParsedUrl> {
        self.parse(url)
            .ok_or_else(|| UrlError::NoMatch(url.to_string()))
    }

    fn assemble(&self, captures: &FieldCaptures<'_>) -> ParsedUrl {
        let parts = captures
            .domain
            .map(|domain| decompose(domain, &self.suffix_table));

        let (sub_domain, site_name, public_suffix, registrable_domain) = match parts {
            Some(DomainParts {
                sub_domain,
                site_name,
                public_suffix,
                registrable_domain,
            }) => (sub_domain, site_name, Some(public_suffix), registrable_domain),
            None => (None, None, None, None),
        };

        let owned = |field: Option<&str>| field.map(str::to_string);

        ParsedUrl {
            scheme: owned(captures.scheme),
            user_info: owned(captures.user_info),
            host: owned(captures.host),
            ipv4: owned(captures.ipv4),
            domain: owned(captures.domain),
            sub_domain,
            site_name,
            public_suffix,
            registrable_domain,
            port: owned(captures.port),
            path: captures.path.to_string(),
            query: owned(captures.query),
            fragment: owned(captures.fragment),
        }
    }
}
