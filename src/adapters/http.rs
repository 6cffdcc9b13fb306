use crate::config::RequestConfig;
use crate::domain::model::MatchListResponse;
use crate::domain::ports::MatchSource;
use crate::utils::error::{FeedError, Result};
use async_trait::async_trait;
use reqwest::header::ORIGIN;
use reqwest::Client;
use std::collections::HashSet;
use tokio::task::JoinSet;

const X_REQUESTED_WITH: &str = "X-Requested-With";

/// Fetches the match list through the CORS proxy.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    config: RequestConfig,
}

impl ProxyClient {
    /// The client-wide timeout stands in for the abort timer: it covers
    /// connecting, sending and reading the body.
    pub fn new(config: RequestConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// A crest probe sharing this client's connection pool and timeout.
    pub fn crest_probe(&self) -> CrestProbe {
        CrestProbe {
            client: self.client.clone(),
            config: self.config.clone(),
        }
    }
}

#[async_trait]
impl MatchSource for ProxyClient {
    async fn fetch_matches(&self) -> Result<MatchListResponse> {
        let url = self.config.request_url();
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ORIGIN, self.config.origin.as_str())
            .header(X_REQUESTED_WITH, "XMLHttpRequest")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(FeedError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        tracing::debug!("API response body: {} bytes", body.len());

        // A bare `null` body counts as an empty round.
        let parsed: Option<MatchListResponse> = serde_json::from_slice(&body)?;
        Ok(parsed.unwrap_or_default())
    }
}

/// Checks crest images ahead of rendering so broken ones can be swapped for
/// the placeholder server-side.
#[derive(Debug, Clone)]
pub struct CrestProbe {
    client: Client,
    config: RequestConfig,
}

impl CrestProbe {
    /// Returns the club ids whose crest did not load. Probes run concurrently,
    /// once per distinct id.
    pub async fn broken_crests<I>(&self, club_ids: I) -> HashSet<u32>
    where
        I: IntoIterator<Item = u32>,
    {
        let distinct: HashSet<u32> = club_ids.into_iter().collect();
        let mut probes = JoinSet::new();

        for club_id in distinct {
            let client = self.client.clone();
            let url = self.config.crest_url(club_id);
            probes.spawn(async move {
                let loaded = match client.get(&url).send().await {
                    Ok(response) if response.status().is_success() => true,
                    Ok(response) => {
                        tracing::warn!("Crest {} returned {}", url, response.status());
                        false
                    }
                    Err(e) => {
                        tracing::warn!("Crest {} failed to load: {}", url, e);
                        false
                    }
                };
                (club_id, loaded)
            });
        }

        let mut broken = HashSet::new();
        while let Some(joined) = probes.join_next().await {
            match joined {
                Ok((club_id, false)) => {
                    broken.insert(club_id);
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("Crest probe task failed: {}", e),
            }
        }
        broken
    }
}
