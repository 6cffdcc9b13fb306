use crate::config::Locale;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Erro {0}")]
    HttpStatus(u16),

    #[error("The operation was aborted: request timed out")]
    Timeout,

    #[error("NetworkError: {0}")]
    Network(String),

    #[error("Invalid match payload: {0}")]
    Parse(String),

    #[error("API request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Render target error: {message}")]
    RenderError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FeedError::Timeout
        } else if e.is_decode() {
            FeedError::Parse(e.to_string())
        } else if e.is_connect() || e.is_request() || e.is_body() {
            // Refused, reset or closed mid-body: the proxy or the link is gone.
            FeedError::Network(e.to_string())
        } else if let Some(status) = e.status() {
            FeedError::HttpStatus(status.as_u16())
        } else {
            FeedError::Request(e)
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Parse(e.to_string())
    }
}

impl FeedError {
    /// Maps a failure onto one of the four categories shown to the user.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedError::HttpStatus(404) => ErrorKind::ApiNotFound,
            FeedError::HttpStatus(_) => ErrorKind::Unknown,
            FeedError::Timeout => ErrorKind::SlowConnection,
            FeedError::Network(_) => ErrorKind::NoConnection,
            FeedError::Parse(_) => ErrorKind::Unknown,
            FeedError::Request(e) => ErrorKind::from_description(&e.to_string()),
            _ => ErrorKind::Unknown,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FeedError::ConfigError { message } => format!("Configuração inválida: {}", message),
            FeedError::InvalidConfigValueError { field, reason, .. } => {
                format!("Valor inválido em '{}': {}", field, reason)
            }
            FeedError::IoError(e) => format!("Falha ao gravar a saída: {}", e),
            other => other.kind().message(Locale::Pt).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ApiNotFound,
    SlowConnection,
    NoConnection,
    Unknown,
}

impl ErrorKind {
    /// Classifies a failure known only by its text, using the same markers a
    /// browser fetch error would carry.
    pub fn from_description(description: &str) -> Self {
        let lower = description.to_lowercase();
        if lower.contains("404") {
            ErrorKind::ApiNotFound
        } else if lower.contains("aborted") {
            ErrorKind::SlowConnection
        } else if lower.contains("networkerror") || lower.contains("failed to fetch") {
            ErrorKind::NoConnection
        } else {
            ErrorKind::Unknown
        }
    }

    pub fn message(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ErrorKind::ApiNotFound, Locale::Pt) => "API não encontrada",
            (ErrorKind::ApiNotFound, Locale::En) => "API not found",
            (ErrorKind::SlowConnection, Locale::Pt) => "Conexão lenta - tente novamente",
            (ErrorKind::SlowConnection, Locale::En) => "Slow connection - try again",
            (ErrorKind::NoConnection, Locale::Pt) => {
                "Sem conexão com a internet ou CORS bloqueado"
            }
            (ErrorKind::NoConnection, Locale::En) => "No internet connection or CORS blocked",
            (ErrorKind::Unknown, Locale::Pt) => "Erro desconhecido",
            (ErrorKind::Unknown, Locale::En) => "Unknown error",
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(FeedError::HttpStatus(404).kind(), ErrorKind::ApiNotFound);
        assert_eq!(FeedError::HttpStatus(500).kind(), ErrorKind::Unknown);
        assert_eq!(FeedError::HttpStatus(403).kind(), ErrorKind::Unknown);
    }

    #[test]
    fn test_transport_classification() {
        assert_eq!(FeedError::Timeout.kind(), ErrorKind::SlowConnection);
        assert_eq!(
            FeedError::Network("connection refused".to_string()).kind(),
            ErrorKind::NoConnection
        );
        assert_eq!(
            FeedError::Parse("expected value at line 1".to_string()).kind(),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn test_classification_from_description() {
        assert_eq!(ErrorKind::from_description("Erro 404"), ErrorKind::ApiNotFound);
        assert_eq!(
            ErrorKind::from_description("The user aborted a request."),
            ErrorKind::SlowConnection
        );
        assert_eq!(
            ErrorKind::from_description("TypeError: Failed to fetch"),
            ErrorKind::NoConnection
        );
        assert_eq!(
            ErrorKind::from_description("NetworkError when attempting to fetch resource."),
            ErrorKind::NoConnection
        );
        assert_eq!(
            ErrorKind::from_description("Unexpected token < in JSON"),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn test_display_keeps_markers() {
        assert_eq!(
            ErrorKind::from_description(&FeedError::HttpStatus(404).to_string()),
            ErrorKind::ApiNotFound
        );
        assert_eq!(
            ErrorKind::from_description(&FeedError::Timeout.to_string()),
            ErrorKind::SlowConnection
        );
    }

    #[test]
    fn test_localized_messages() {
        assert_eq!(ErrorKind::ApiNotFound.message(Locale::En), "API not found");
        assert_eq!(ErrorKind::Unknown.message(Locale::Pt), "Erro desconhecido");
    }
}
