pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::ProxyClient;
pub use adapters::target::{FileTarget, MemoryTarget};
pub use config::{Locale, RequestConfig};
pub use core::widget::MatchFeedWidget;
pub use domain::model::{Club, Match, MatchListResponse};
pub use domain::ports::{MatchSource, RenderTarget};
pub use domain::state::WidgetState;
pub use utils::error::{ErrorKind, FeedError, Result};
