//! `[host]` section configuration.
//!
//! Describes the URL namespaces the resolver tells apart.
//!
//! # Example
//!
//! ```toml
//! [host]
//! scheme = "chrome"                    # URL scheme of host resources
//! core_host = "resources"              # canonical resource namespace
//! namespace_host = "brave-resources"   # secondary resource namespace
//! host_url = "chrome://resources/"     # recorded in resolution traces
//! ```
//!
//! Derived prefixes with the defaults above:
//!
//! | Prefix                        | Meaning                         |
//! |-------------------------------|---------------------------------|
//! | `chrome://resources/`         | canonical, scheme-qualified     |
//! | `//resources/`                | canonical, scheme-relative      |
//! | `chrome://brave-resources/`   | secondary, scheme-qualified     |
//! | `//brave-resources/`          | secondary, scheme-relative      |

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Resource URL namespaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub scheme: String,
    pub core_host: String,
    pub namespace_host: String,
    /// Host resource base URL. Defaults to the canonical prefix.
    pub host_url: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            scheme: "chrome".to_string(),
            core_host: "resources".to_string(),
            namespace_host: "brave-resources".to_string(),
            host_url: None,
        }
    }
}

impl HostConfig {
    pub const SCHEME: FieldPath = FieldPath::new("host.scheme");
    pub const CORE_HOST: FieldPath = FieldPath::new("host.core_host");
    pub const NAMESPACE_HOST: FieldPath = FieldPath::new("host.namespace_host");
    pub const HOST_URL: FieldPath = FieldPath::new("host.host_url");

    /// `scheme://core_host/`
    pub fn canonical_prefix(&self) -> String {
        format!("{}://{}/", self.scheme, self.core_host)
    }

    /// `//core_host/`
    pub fn canonical_relative_prefix(&self) -> String {
        format!("//{}/", self.core_host)
    }

    /// `scheme://namespace_host/`
    pub fn namespace_prefix(&self) -> String {
        format!("{}://{}/", self.scheme, self.namespace_host)
    }

    /// `//namespace_host/`
    pub fn namespace_relative_prefix(&self) -> String {
        format!("//{}/", self.namespace_host)
    }

    pub fn host_url(&self) -> String {
        self.host_url
            .clone()
            .unwrap_or_else(|| self.canonical_prefix())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::SCHEME, &self.scheme),
            (Self::CORE_HOST, &self.core_host),
            (Self::NAMESPACE_HOST, &self.namespace_host),
        ] {
            if value.is_empty() {
                diag.error(field, "must not be empty");
            } else if value.contains(['/', ':']) {
                diag.error(field, format!("'{value}' must not contain '/' or ':'"));
            }
        }

        if self.core_host == self.namespace_host {
            diag.error_with_hint(
                Self::NAMESPACE_HOST,
                format!("'{}' is the same as host.core_host", self.namespace_host),
                "the secondary namespace needs its own host",
            );
        }

        if let Some(url) = &self.host_url
            && !crate::config::util::is_valid_url(url)
        {
            diag.error(Self::HOST_URL, format!("'{url}' is not a valid URL"));
        }
    }
}
