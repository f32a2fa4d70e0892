use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::Result;

/// Kind of host captured by the authority grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// Dotted-quad literal, octets not range-checked
    Ipv4,
    /// Anything else; decomposed against the suffix table
    Domain,
}

/// Parsed URL record.
///
/// All strings are lowercase copies of the normalized input. A field is
/// `None` when the grammar did not capture it or it does not apply to the
/// kind of host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: Option<String>,
    pub user_info: Option<String>,
    /// Same value as `ipv4` or `domain`, whichever is present
    pub host: Option<String>,
    pub ipv4: Option<String>,
    pub domain: Option<String>,
    pub sub_domain: Option<String>,
    pub site_name: Option<String>,
    pub public_suffix: Option<String>,
    pub registrable_domain: Option<String>,
    pub port: Option<String>,
    /// Always present, may be empty
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl ParsedUrl {
    /// Alias of `scheme`
    pub fn protocol(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Alias of `public_suffix`
    pub fn tld(&self) -> Option<&str> {
        self.public_suffix.as_deref()
    }

    /// Alias of `registrable_domain`
    pub fn root_domain(&self) -> Option<&str> {
        self.registrable_domain.as_deref()
    }

    /// Kind of host, `None` when no host was captured
    pub fn host_kind(&self) -> Option<HostKind> {
        if self.ipv4.is_some() {
            Some(HostKind::Ipv4)
        } else if self.domain.is_some() {
            Some(HostKind::Domain)
        } else {
            None
        }
    }

    /// Serialize to a JSON object, aliases included and absent fields as `null`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Serialized shape of [`ParsedUrl`], with alias keys next to their canonical field
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParsedUrlRecord<'a> {
    scheme: Option<&'a str>,
    protocol: Option<&'a str>,
    user_info: Option<&'a str>,
    host: Option<&'a str>,
    ipv4: Option<&'a str>,
    domain: Option<&'a str>,
    sub_domain: Option<&'a str>,
    site_name: Option<&'a str>,
    public_suffix: Option<&'a str>,
    #[serde(rename = "TLD")]
    tld: Option<&'a str>,
    registrable_domain: Option<&'a str>,
    root_domain: Option<&'a str>,
    port: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl Serialize for ParsedUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ParsedUrlRecord {
            scheme: self.scheme.as_deref(),
            protocol: self.protocol(),
            user_info: self.user_info.as_deref(),
            host: self.host.as_deref(),
            ipv4: self.ipv4.as_deref(),
            domain: self.domain.as_deref(),
            sub_domain: self.sub_domain.as_deref(),
            site_name: self.site_name.as_deref(),
            public_suffix: self.public_suffix.as_deref(),
            tld: self.tld(),
            registrable_domain: self.registrable_domain.as_deref(),
            root_domain: self.root_domain(),
            port: self.port.as_deref(),
            path: &self.path,
            query: self.query.as_deref(),
            fragment: self.fragment.as_deref(),
        }
        .serialize(serializer)
    }
}

/// Writes the normalized URL back out from its parts.
impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{}:", scheme)?;
        }
        if let Some(host) = &self.host {
            f.write_str("//")?;
            if let Some(user_info) = &self.user_info {
                write!(f, "{}@", user_info)?;
            }
            f.write_str(host)?;
            if let Some(port) = &self.port {
                write!(f, ":{}", port)?;
            }
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
