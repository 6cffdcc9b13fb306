use crate::config::Locale;
use chrono::{DateTime, Local};

const STYLE: &str = r#"
        body { font-family: system-ui, sans-serif; background: #f4f6f8; margin: 0; padding: 1rem; }
        #main-content { max-width: 640px; margin: 0 auto; }
        .rodada-card { background: #fff; border-radius: 8px; margin-bottom: 0.75rem; padding: 0.75rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); }
        .partida-item { display: flex; align-items: center; justify-content: space-between; }
        .time-card { display: flex; flex-direction: column; align-items: center; width: 40%; }
        .time-logo { width: 60px; height: 60px; object-fit: contain; }
        .time-name { margin-top: 0.25rem; font-weight: 600; text-align: center; }
        .placar { font-size: 1.5rem; font-weight: 700; }
        .loading, .error-box { text-align: center; padding: 2rem; }
        .error-box { background: #fdecea; border-radius: 8px; color: #8a1c1c; }
        .retry-btn { margin-top: 0.5rem; padding: 0.5rem 1rem; cursor: pointer; }
        footer { text-align: center; color: #888; font-size: 0.8rem; margin-top: 1rem; }
"#;

/// Host document for a region: the region sits inside `<main id="main-content">`.
pub fn render_page(region: &str, locale: Locale, generated_at: DateTime<Local>) -> String {
    let mut page = String::with_capacity(region.len() + STYLE.len() + 512);
    page.push_str("<!DOCTYPE html>\n");
    page.push_str(&format!("<html lang=\"{}\">\n", locale.html_lang()));
    page.push_str("<head>\n    <meta charset=\"utf-8\">\n");
    page.push_str("    <title>Cartola - Partidas</title>\n    <style>");
    page.push_str(STYLE);
    page.push_str("    </style>\n</head>\n<body>\n");
    page.push_str("    <main id=\"main-content\">");
    page.push_str(region);
    page.push_str("</main>\n");
    page.push_str(&format!(
        "    <footer>{}</footer>\n",
        generated_at.format("%d/%m/%Y %H:%M:%S")
    ));
    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_page_wraps_region() {
        let generated_at = Local.with_ymd_and_hms(2024, 3, 18, 16, 30, 0).unwrap();
        let page = render_page("<h3>ok</h3>", Locale::Pt, generated_at);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<html lang=\"pt-BR\">"));
        assert!(page.contains("<main id=\"main-content\"><h3>ok</h3></main>"));
        assert!(page.contains("18/03/2024 16:30:00"));
    }
}
