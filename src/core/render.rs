//! Markup for everything the widget places in its render target.

use crate::config::RequestConfig;
use crate::domain::model::{Match, MatchListResponse};
use crate::utils::error::ErrorKind;
use std::collections::HashSet;

/// One `rodada-card` per match, in input order.
pub fn render_content(
    config: &RequestConfig,
    response: &MatchListResponse,
    broken_crests: &HashSet<u32>,
) -> String {
    response
        .matches()
        .iter()
        .map(|m| render_match(config, m, broken_crests))
        .collect()
}

fn render_match(config: &RequestConfig, m: &Match, broken_crests: &HashSet<u32>) -> String {
    format!(
        r#"
        <div class="rodada-card">
            <div class="partida-item">
                {home}
                <div class="placar">
                    {score}
                </div>
                {away}
            </div>
        </div>
    "#,
        home = render_club(config, m.home_club_id, &m.home_club.name, broken_crests),
        score = m.scoreline(),
        away = render_club(config, m.away_club_id, &m.away_club.name, broken_crests),
    )
}

fn render_club(
    config: &RequestConfig,
    club_id: u32,
    name: &str,
    broken_crests: &HashSet<u32>,
) -> String {
    if broken_crests.contains(&club_id) {
        render_team_with_crest(config, &config.placeholder_crest_url, name)
    } else {
        render_team(config, club_id, name)
    }
}

/// Team card: crest image plus name. The image swaps itself for the
/// placeholder if it fails to load in the browser.
pub fn render_team(config: &RequestConfig, club_id: u32, name: &str) -> String {
    render_team_with_crest(config, &config.crest_url(club_id), name)
}

fn render_team_with_crest(config: &RequestConfig, crest_src: &str, name: &str) -> String {
    let name = escape_html(name);
    format!(
        r#"
        <div class="time-card">
            <img src="{src}"
                 alt="{name}"
                 class="time-logo"
                 onerror="this.onerror=null;this.src='{placeholder}'">
            <div class="time-name">{name}</div>
        </div>
    "#,
        src = escape_html(crest_src),
        placeholder = escape_html(&escape_js_string(&config.placeholder_crest_url)),
    )
}

pub fn render_loading(config: &RequestConfig) -> String {
    format!(
        r#"
        <div class="loading">
            <p>{}</p>
        </div>
    "#,
        config.locale.loading_message()
    )
}

pub fn render_empty(config: &RequestConfig) -> String {
    format!("<h3>{}</h3>", config.locale.empty_message())
}

/// Error box with the classified message and the retry control.
pub fn render_error(config: &RequestConfig, kind: ErrorKind) -> String {
    format!(
        r#"
        <div class="error-box">
            <h3>{message}</h3>
            <button onclick="fetchData()" class="retry-btn">{label}</button>
        </div>
    "#,
        message = kind.message(config.locale),
        label = config.locale.retry_label(),
    )
}

/// For text placed inside a single-quoted JS literal in an inline handler.
fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use crate::domain::model::Club;

    fn fixture(home: u32, away: u32, score: (Option<u32>, Option<u32>)) -> Match {
        Match {
            home_club_id: home,
            home_club: Club::new(format!("Clube {}", home)),
            away_club_id: away,
            away_club: Club::new(format!("Clube {}", away)),
            official_home_score: score.0,
            official_away_score: score.1,
        }
    }

    #[test]
    fn test_one_card_per_match_in_order() {
        let config = RequestConfig::default();
        let response = MatchListResponse::new(vec![
            fixture(262, 275, (Some(1), Some(0))),
            fixture(276, 277, (None, None)),
            fixture(284, 285, (Some(3), Some(3))),
        ]);

        let html = render_content(&config, &response, &HashSet::new());

        assert_eq!(html.matches("class=\"rodada-card\"").count(), 3);
        assert_eq!(html.matches("class=\"time-card\"").count(), 6);
        let first = html.find("Clube 262").unwrap();
        let second = html.find("Clube 276").unwrap();
        let third = html.find("Clube 284").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_missing_scores_show_zero() {
        let config = RequestConfig::default();
        let response = MatchListResponse::new(vec![fixture(1, 2, (None, Some(2)))]);

        let html = render_content(&config, &response, &HashSet::new());

        assert!(html.contains("0 - 2"));
    }

    #[test]
    fn test_team_card_crest_and_fallback() {
        let config = RequestConfig::default();
        let html = render_team(&config, 262, "Flamengo");

        assert!(html.contains(r#"src="https://s.glbimg.com/es/sde/f/2024/03/18/262.png""#));
        assert!(html.contains(r#"alt="Flamengo""#));
        assert!(html.contains("this.src='https://via.placeholder.com/60x60?text=LOGO'"));
        assert!(html.contains(r#"<div class="time-name">Flamengo</div>"#));
    }

    #[test]
    fn test_broken_crest_uses_placeholder() {
        let config = RequestConfig::default();
        let response = MatchListResponse::new(vec![fixture(10, 20, (Some(1), Some(2)))]);
        let broken: HashSet<u32> = [10].into_iter().collect();

        let html = render_content(&config, &response, &broken);

        assert!(!html.contains("/10.png"));
        assert!(html.contains("/20.png"));
        assert!(html.contains(r#"src="https://via.placeholder.com/60x60?text=LOGO""#));
        assert!(html.contains("Clube 10"));
        assert!(html.contains("1 - 2"));
    }

    #[test]
    fn test_placeholder_quote_stays_inside_handler_string() {
        let config = RequestConfig {
            placeholder_crest_url: "https://img.example.org/logo.png?text='LOGO'".to_string(),
            ..RequestConfig::default()
        };
        let html = render_team(&config, 1, "A");

        assert!(html.contains(
            r#"this.src='https://img.example.org/logo.png?text=\&#39;LOGO\&#39;'""#
        ));
    }

    #[test]
    fn test_team_name_is_escaped() {
        let config = RequestConfig::default();
        let html = render_team(&config, 1, "<script>alert('x')</script>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_box_has_retry() {
        let config = RequestConfig {
            locale: Locale::En,
            ..RequestConfig::default()
        };
        let html = render_error(&config, ErrorKind::SlowConnection);

        assert!(html.contains("Slow connection - try again"));
        assert!(html.contains(r#"class="retry-btn""#));
        assert!(html.contains("fetchData()"));
    }

    #[test]
    fn test_loading_and_empty() {
        let config = RequestConfig::default();
        assert!(render_loading(&config).contains("Carregando dados..."));
        assert_eq!(render_empty(&config), "<h3>Nenhuma partida encontrada.</h3>");
    }
}
