#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PROXY_BASE: &str = "https://cors-anywhere.herokuapp.com/";
pub const DEFAULT_API_URL: &str = "https://api.cartola.globo.com/partidas";
pub const DEFAULT_CREST_BASE_URL: &str = "https://s.glbimg.com/es/sde/f/2024/03/18";
pub const DEFAULT_PLACEHOLDER_CREST_URL: &str = "https://via.placeholder.com/60x60?text=LOGO";
pub const DEFAULT_ORIGIN: &str = "https://example.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 15000;

/// Language of the messages placed in the render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    pub fn loading_message(self) -> &'static str {
        match self {
            Locale::Pt => "Carregando dados...",
            Locale::En => "Loading data...",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Locale::Pt => "Nenhuma partida encontrada.",
            Locale::En => "No matches found.",
        }
    }

    pub fn retry_label(self) -> &'static str {
        match self {
            Locale::Pt => "Tentar Novamente",
            Locale::En => "Try Again",
        }
    }

    pub fn retry_prompt(self) -> &'static str {
        match self {
            Locale::Pt => "Tentar novamente? [s/N] ",
            Locale::En => "Try again? [y/N] ",
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::Pt => "pt-BR",
            Locale::En => "en",
        }
    }
}

/// Read-only settings shared by every fetch cycle. Built once at start-up and
/// handed to the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    pub proxy_base: String,
    pub api_url: String,
    pub crest_base_url: String,
    pub placeholder_crest_url: String,
    pub origin: String,
    pub timeout_ms: u64,
    pub locale: Locale,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            proxy_base: DEFAULT_PROXY_BASE.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            crest_base_url: DEFAULT_CREST_BASE_URL.to_string(),
            placeholder_crest_url: DEFAULT_PLACEHOLDER_CREST_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            locale: Locale::default(),
        }
    }
}

impl RequestConfig {
    /// The proxy prefixes the upstream URL verbatim.
    pub fn request_url(&self) -> String {
        format!("{}{}", self.proxy_base, self.api_url)
    }

    pub fn crest_url(&self, club_id: u32) -> String {
        format!("{}/{}.png", self.crest_base_url.trim_end_matches('/'), club_id)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Validate for RequestConfig {
    fn validate(&self) -> Result<()> {
        validate_url("request.api_url", &self.request_url())?;
        validate_url("crests.base_url", &self.crest_base_url)?;
        validate_url("crests.placeholder_url", &self.placeholder_crest_url)?;
        validate_non_empty_string("request.origin", &self.origin)?;
        validate_positive_number("request.timeout_ms", self.timeout_ms, 1)?;
        Ok(())
    }
}
