use crate::adapters::http::CrestProbe;
use crate::config::RequestConfig;
use crate::core::render;
use crate::domain::model::MatchListResponse;
use crate::domain::ports::{MatchSource, RenderTarget};
use crate::domain::state::WidgetState;
use crate::utils::error::FeedError;
use std::collections::HashSet;
use std::sync::Mutex;

/// Fetches the match list and keeps its render target showing one of:
/// loading, match cards, the empty message, or an error box with retry.
///
/// `fetch_data` takes `&self`, so overlapping calls are allowed; whichever
/// finishes last owns the render target.
pub struct MatchFeedWidget<S: MatchSource, T: RenderTarget> {
    source: S,
    target: T,
    config: RequestConfig,
    crest_probe: Option<CrestProbe>,
    state: Mutex<WidgetState>,
}

impl<S: MatchSource, T: RenderTarget> MatchFeedWidget<S, T> {
    pub fn new(source: S, target: T, config: RequestConfig) -> Self {
        Self {
            source,
            target,
            config,
            crest_probe: None,
            state: Mutex::new(WidgetState::Idle),
        }
    }

    /// Probe crests before rendering and draw broken ones with the placeholder.
    pub fn with_crest_probe(mut self, probe: CrestProbe) -> Self {
        self.crest_probe = Some(probe);
        self
    }

    pub fn state(&self) -> WidgetState {
        self.state.lock().map(|s| *s).unwrap_or_default()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// One full cycle: loading, request, then cards, empty message or error
    /// box. Never fails; returns the state this cycle ended in.
    pub async fn fetch_data(&self) -> WidgetState {
        self.show_loading();

        match self.source.fetch_matches().await {
            Ok(response) if !response.is_empty() => {
                let broken = self.check_crests(&response).await;
                self.render_with_crests(&response, &broken)
            }
            Ok(_) => {
                tracing::info!("No matches in response");
                self.show(render::render_empty(&self.config), WidgetState::Empty)
            }
            Err(e) => self.handle_error(e),
        }
    }

    /// Action behind the retry control.
    pub async fn retry(&self) -> WidgetState {
        tracing::info!("Retry requested (state was {:?})", self.state());
        self.fetch_data().await
    }

    pub fn show_loading(&self) {
        self.show(render::render_loading(&self.config), WidgetState::Loading);
    }

    pub fn render_content(&self, response: &MatchListResponse) -> WidgetState {
        self.render_with_crests(response, &HashSet::new())
    }

    pub fn render_team(&self, club_id: u32, name: &str) -> String {
        render::render_team(&self.config, club_id, name)
    }

    /// Logs the failure and shows the classified message with a retry control.
    pub fn handle_error(&self, error: FeedError) -> WidgetState {
        let kind = error.kind();
        tracing::error!("Fetch failed: {} ({:?})", error, kind);
        self.show(
            render::render_error(&self.config, kind),
            WidgetState::ErrorShown(kind),
        )
    }

    fn render_with_crests(
        &self,
        response: &MatchListResponse,
        broken_crests: &HashSet<u32>,
    ) -> WidgetState {
        let count = response.matches().len();
        tracing::info!("Rendering {} matches", count);
        self.show(
            render::render_content(&self.config, response, broken_crests),
            WidgetState::Rendered { matches: count },
        )
    }

    async fn check_crests(&self, response: &MatchListResponse) -> HashSet<u32> {
        let Some(probe) = &self.crest_probe else {
            return HashSet::new();
        };

        let ids = response
            .matches()
            .iter()
            .flat_map(|m| [m.home_club_id, m.away_club_id]);
        let broken = probe.broken_crests(ids).await;
        if !broken.is_empty() {
            tracing::warn!("{} crests unavailable, using placeholder", broken.len());
        }
        broken
    }

    fn show(&self, html: String, state: WidgetState) -> WidgetState {
        if let Err(e) = self.target.replace(&html) {
            tracing::error!("Failed to update render target: {}", e);
        }
        if let Ok(mut current) = self.state.lock() {
            tracing::debug!("State {:?} -> {:?}", *current, state);
            *current = state;
        }
        state
    }
}
