//! Domain decomposition.
//!
//! Splits a domain name into sub-domain, site name and public suffix using a
//! [`SuffixTable`]. Only one- and two-label suffixes are recognized:
//!
//! | Domain | Sub-domain | Site name | Public suffix |
//! |--------|------------|-----------|---------------|
//! | `www.example.co.uk` | `www` | `example` | `co.uk` |
//! | `www.example.com` | `www` | `example` | `com` |
//! | `poster.blog.sysu.at` | `poster.blog` | `sysu` | `at` |

use crate::suffix::SuffixTable;

/// Labels of a domain partitioned around its public suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    /// Labels left of the site name, joined with `.`; empty when the site
    /// name is the leftmost label, `None` when there is no site name
    pub sub_domain: Option<String>,
    /// Label immediately left of the public suffix
    pub site_name: Option<String>,
    /// One or two trailing labels
    pub public_suffix: String,
    /// `site_name.public_suffix`
    pub registrable_domain: Option<String>,
}

impl DomainParts {
    /// Rejoin the non-empty parts with `.`
    pub fn reassemble(&self) -> String {
        [
            self.sub_domain.as_deref(),
            self.site_name.as_deref(),
            Some(self.public_suffix.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
    }
}

/// Decompose a (lowercased) domain name.
///
/// The public suffix is two labels when the table has a rule for the last
/// label that lists the second-to-last label or is a wildcard, otherwise one.
pub fn decompose(domain: &str, table: &SuffixTable) -> DomainParts {
    let labels: Vec<&str> = domain.split('.').collect();
    let n = labels.len();

    // `split` always yields at least one label.
    let last = labels[n - 1];
    let second_last = n.checked_sub(2).map(|i| labels[i]);

    let suffix_len = if table.recognizes(last, second_last) {
        n.min(2)
    } else {
        1
    };
    let public_suffix = labels[n - suffix_len..].join(".");

    // An empty label cannot name a site.
    let site_index = n
        .checked_sub(suffix_len + 1)
        .filter(|&i| !labels[i].is_empty());

    let site_name = site_index.map(|i| labels[i].to_string());
    let sub_domain = site_index.map(|i| labels[..i].join("."));
    let registrable_domain = site_name
        .as_ref()
        .map(|site| format!("{}.{}", site, public_suffix));

    DomainParts {
        sub_domain,
        site_name,
        public_suffix,
        registrable_domain,
    }
}
