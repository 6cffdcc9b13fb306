use crate::config::toml_config::TomlConfig;
use crate::config::{Locale, RequestConfig};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "match-feed")]
#[command(about = "Fetches Cartola matches through a CORS proxy and renders them as an HTML page")]
pub struct CliConfig {
    /// TOML file with request, crest and display settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// CORS proxy prefixed to the API URL (empty string for a direct request)
    #[arg(long)]
    pub proxy: Option<String>,

    #[arg(long)]
    pub api_url: Option<String>,

    /// Base URL the crest images are served from
    #[arg(long)]
    pub crest_url: Option<String>,

    #[arg(long)]
    pub timeout_ms: Option<u64>,

    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// HTML page rewritten on every state change
    #[arg(short, long, default_value = "./match-feed.html")]
    pub output: String,

    /// Probe every crest before rendering and use the placeholder for broken ones
    #[arg(long)]
    pub check_crests: bool,

    /// Do not ask for a retry after an error
    #[arg(long)]
    pub no_prompt: bool,

    /// Print the resolved configuration and exit without fetching
    #[arg(long)]
    pub dry_run: bool,

    /// Log as JSON lines instead of compact text
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file, then command-line flags.
    pub fn request_config(&self) -> Result<RequestConfig> {
        let mut config = RequestConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from: {}", path);
            config = TomlConfig::from_file(path)?.apply_to(config);
        }

        if let Some(proxy) = &self.proxy {
            config.proxy_base = proxy.clone();
        }
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(crest_url) = &self.crest_url {
            config.crest_base_url = crest_url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[request]\ntimeout_ms = 2000\napi_url = \"https://file.example.org/partidas\"\n[display]\nlocale = \"en\""
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "match-feed",
            "--config",
            file.path().to_str().unwrap(),
            "--timeout-ms",
            "500",
            "--proxy",
            "",
        ]);

        let config = cli.request_config().unwrap();
        assert_eq!(config.timeout_ms, 500);
        assert_eq!(config.proxy_base, "");
        assert_eq!(config.request_url(), "https://file.example.org/partidas");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["match-feed"]);
        let config = cli.request_config().unwrap();

        assert_eq!(config, RequestConfig::default());
        assert_eq!(cli.output, "./match-feed.html");
        assert!(!cli.check_crests);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::parse_from(["match-feed", "--config", "/nonexistent/feed.toml"]);
        assert!(cli.request_config().is_err());
    }
}
