use crate::config::{Locale, RequestConfig};
use crate::utils::error::{FeedError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File layer of the configuration. Every key is optional; whatever is left
/// out keeps the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub request: Option<RequestSection>,
    pub crests: Option<CrestSection>,
    pub display: Option<DisplaySection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestSection {
    pub proxy_base: Option<String>,
    pub api_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub origin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrestSection {
    pub base_url: Option<String>,
    pub placeholder_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    pub locale: Option<Locale>,
}

impl TomlConfig {
    /// Loads the file layer from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FeedError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FeedError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FeedError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the file values over `base`.
    pub fn apply_to(&self, mut base: RequestConfig) -> RequestConfig {
        if let Some(request) = &self.request {
            if let Some(proxy_base) = &request.proxy_base {
                base.proxy_base = proxy_base.clone();
            }
            if let Some(api_url) = &request.api_url {
                base.api_url = api_url.clone();
            }
            if let Some(timeout_ms) = request.timeout_ms {
                base.timeout_ms = timeout_ms;
            }
            if let Some(origin) = &request.origin {
                base.origin = origin.clone();
            }
        }
        if let Some(crests) = &self.crests {
            if let Some(base_url) = &crests.base_url {
                base.crest_base_url = base_url.clone();
            }
            if let Some(placeholder_url) = &crests.placeholder_url {
                base.placeholder_crest_url = placeholder_url.clone();
            }
        }
        if let Some(locale) = self.display.as_ref().and_then(|d| d.locale) {
            base.locale = locale;
        }
        base
    }
}
