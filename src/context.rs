//! Site context: the read-only deployment facts a few predicates need.
//!
//! Self-hosted article and thinking links are only recognised when the
//! caller says which site it is running on. Instead of reading ambient
//! globals, the predicates receive a [`SiteContext`] explicitly. The context
//! can be built in code, from the environment, or from a TOML file through
//! [`SiteConfig`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::LinkError;

/// Hostname accepted as "own site" in development mode.
pub const DEFAULT_DEV_HOSTNAME: &str = "innei.in";

/// Bangumi path categories recognised by default.
pub const DEFAULT_BANGUMI_TYPES: [&str; 4] = ["subject", "person", "character", "ep"];

pub const ENV_WEB_URL: &str = "LINKPARSER_WEB_URL";
pub const ENV_OWN_HOSTNAME: &str = "LINKPARSER_OWN_HOSTNAME";
pub const ENV_DEV: &str = "LINKPARSER_DEV";

/// Deployment facts injected into classification.
///
/// Hostnames are stored lowercased and the web origin's hostname is resolved
/// once, when the origin is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    /// `None` means there is no interactive context (e.g. server-side
    /// rendering), in which case self-hosted links are never recognised.
    own_hostname: Option<String>,
    /// Canonical web origin of the deployment, e.g. `https://innei.in`.
    web_url: Option<String>,
    web_hostname: Option<String>,
    is_dev: bool,
    dev_hostname: String,
    /// Allowed first path segments for bgm.tv / bangumi.tv links.
    bangumi_types: Vec<String>,
}

impl Default for SiteContext {
    fn default() -> Self {
        Self {
            own_hostname: None,
            web_url: None,
            web_hostname: None,
            is_dev: false,
            dev_hostname: DEFAULT_DEV_HOSTNAME.to_string(),
            bangumi_types: default_bangumi_types(),
        }
    }
}

impl SiteContext {
    /// Context for code running on `own_hostname`.
    pub fn client(own_hostname: &str) -> Self {
        Self::default().with_own_hostname(own_hostname)
    }

    pub fn with_own_hostname(mut self, own_hostname: &str) -> Self {
        self.own_hostname = Some(own_hostname.to_ascii_lowercase());
        self
    }

    /// Set the canonical web origin. An origin that does not parse is kept
    /// for reference but never matches any host.
    pub fn with_web_url(mut self, web_url: &str) -> Self {
        self.web_hostname = match Url::parse(web_url) {
            Ok(url) => url
                .host_str()
                .filter(|h| !h.is_empty())
                .map(str::to_ascii_lowercase),
            Err(err) => {
                tracing::warn!("ignoring unparsable web url {:?}: {}", web_url, err);
                None
            }
        };
        self.web_url = Some(web_url.to_string());
        self
    }

    pub fn with_dev(mut self, is_dev: bool) -> Self {
        self.is_dev = is_dev;
        self
    }

    pub fn with_dev_hostname(mut self, dev_hostname: &str) -> Self {
        self.dev_hostname = dev_hostname.to_ascii_lowercase();
        self
    }

    pub fn with_bangumi_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bangumi_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Build a context from `LINKPARSER_*` environment variables.
    pub fn from_env() -> Self {
        let mut ctx = Self::default();

        if let Some(host) = std::env::var(ENV_OWN_HOSTNAME).ok().filter(|h| !h.is_empty()) {
            ctx = ctx.with_own_hostname(&host);
        }
        if let Some(web_url) = std::env::var(ENV_WEB_URL).ok().filter(|u| !u.is_empty()) {
            ctx = ctx.with_web_url(&web_url);
        }
        let is_dev = std::env::var(ENV_DEV)
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        ctx.with_dev(is_dev)
    }

    pub fn own_hostname(&self) -> Option<&str> {
        self.own_hostname.as_deref()
    }

    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    /// Hostname of the configured web origin, or `None` when it is unset or
    /// does not parse.
    pub fn web_hostname(&self) -> Option<&str> {
        self.web_hostname.as_deref()
    }

    pub fn is_dev(&self) -> bool {
        self.is_dev
    }

    pub fn dev_hostname(&self) -> &str {
        &self.dev_hostname
    }

    pub fn bangumi_types(&self) -> &[String] {
        &self.bangumi_types
    }

    /// Whether `hostname` belongs to the deployment's own site.
    ///
    /// Always false outside an interactive context.
    pub fn is_own_host(&self, hostname: &str) -> bool {
        let Some(own) = self.own_hostname.as_deref() else {
            return false;
        };

        if hostname.is_empty() {
            return false;
        }

        (self.is_dev && hostname == self.dev_hostname)
            || hostname == own
            || self.web_hostname.as_deref() == Some(hostname)
    }

    pub fn is_bangumi_type(&self, category: &str) -> bool {
        self.bangumi_types.iter().any(|t| t == category)
    }
}

fn default_bangumi_types() -> Vec<String> {
    DEFAULT_BANGUMI_TYPES.iter().map(|t| t.to_string()).collect()
}

fn default_dev_hostname() -> String {
    DEFAULT_DEV_HOSTNAME.to_string()
}

/// File form of [`SiteContext`], loaded from TOML. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub own_hostname: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub is_dev: bool,
    #[serde(default = "default_dev_hostname")]
    pub dev_hostname: String,
    #[serde(default = "default_bangumi_types")]
    pub bangumi_types: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            own_hostname: None,
            web_url: None,
            is_dev: false,
            dev_hostname: default_dev_hostname(),
            bangumi_types: default_bangumi_types(),
        }
    }
}

impl From<SiteConfig> for SiteContext {
    fn from(config: SiteConfig) -> Self {
        let mut ctx = SiteContext::default()
            .with_dev(config.is_dev)
            .with_dev_hostname(&config.dev_hostname)
            .with_bangumi_types(config.bangumi_types);

        if let Some(host) = config.own_hostname.as_deref() {
            ctx = ctx.with_own_hostname(host);
        }
        if let Some(web_url) = config.web_url.as_deref() {
            ctx = ctx.with_web_url(web_url);
        }
        ctx
    }
}

impl SiteConfig {
    pub fn from_toml(data: &str) -> Result<Self, LinkError> {
        Ok(toml::from_str(data)?)
    }
}

/// Load a site configuration file.
pub fn load_config(path: &Path) -> Result<SiteConfig, LinkError> {
    let data = fs::read_to_string(path)
        .map_err(|e| LinkError::Config(format!("{}: {}", path.display(), e)))?;
    let config = SiteConfig::from_toml(&data)?;
    tracing::debug!("loaded site config from {}", path.display());
    Ok(config)
}
