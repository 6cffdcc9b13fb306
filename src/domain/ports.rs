use crate::domain::model::MatchListResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where match data comes from.
#[async_trait]
pub trait MatchSource: Send + Sync {
    async fn fetch_matches(&self) -> Result<MatchListResponse>;
}

/// The single region holding all widget output. Every call replaces the
/// previous content entirely.
pub trait RenderTarget: Send + Sync {
    fn replace(&self, html: &str) -> Result<()>;
}
