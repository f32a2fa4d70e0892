//! Common URL - parse common URLs and find their registrable domain
//!
//! This library splits a URL-like string into its components and, when the
//! host is a domain name, decomposes it into:
//! - Sub-domain
//! - Site name
//! - Public suffix (one or two labels, from an embedded public suffix subset)
//! - Registrable domain (`site name` + `.` + `public suffix`)
//!
//! # Example
//!
//! ```rust
//! use common_url::{parse, HostKind};
//!
//! let url = parse("HTTPS://user@www.Example.co.uk:8443/Index.html?q=1#top").unwrap();
//!
//! assert_eq!(url.scheme.as_deref(), Some("https"));
//! assert_eq!(url.host_kind(), Some(HostKind::Domain));
//! assert_eq!(url.sub_domain.as_deref(), Some("www"));
//! assert_eq!(url.site_name.as_deref(), Some("example"));
//! assert_eq!(url.tld(), Some("co.uk"));
//! assert_eq!(url.root_domain(), Some("example.co.uk"));
//! // The whole input is lowercased, path included.
//! assert_eq!(url.path, "/index.html");
//!
//! // Inputs that match no grammar yield `None`.
//! assert!(parse("http://a b.com/").is_none());
//! ```
//!
//! # Grammars
//!
//! Two grammars are tried in order, the first to match the whole input wins:
//!
//! | Grammar | Format |
//! |---------|--------|
//! | Authority | `[scheme:]//[userinfo@]host[:port]/[path][?query][#fragment]` |
//! | Relative | `[scheme:][/][path][?query][#fragment]` |
//!
//! Ports and IPv4 octets are matched syntactically only; `999.999.999.999`
//! is an IPv4 host and `99999` is a port.
//!
//! # Suffix lists
//!
//! Records are `top second second ...`, separated by `|` or line breaks,
//! `*` standing for any second-level label:
//!
//! ```text
//! uk ac co gov ltd me net nhs org plc
//! bd *
//! ```

pub mod domain;
pub mod error;
pub mod grammar;
pub mod parser;
pub mod suffix;
pub mod types;

// Re-export commonly used items
pub use domain::{decompose, DomainParts};
pub use error::{Result, UrlError};
pub use grammar::{match_url, normalize, FieldCaptures, Grammar};
pub use parser::{parse, Parser, ParserOptions};
pub use suffix::{parse_suffix_list, parse_suffix_list_from_file, SuffixRule, SuffixTable};
pub use types::{HostKind, ParsedUrl};
