use crate::config::Locale;
use crate::core::page::render_page;
use crate::domain::ports::RenderTarget;
use crate::utils::error::{FeedError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Keeps the region in memory. Clones share the same region.
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    content: Arc<Mutex<String>>,
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> String {
        self.content
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    /// Every region written so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl RenderTarget for MemoryTarget {
    fn replace(&self, html: &str) -> Result<()> {
        let mut content = self.content.lock().map_err(|_| FeedError::RenderError {
            message: "render target lock poisoned".to_string(),
        })?;
        *content = html.to_string();
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(html.to_string());
        }
        Ok(())
    }
}

/// Writes a complete HTML page around the region on every replacement.
#[derive(Debug, Clone)]
pub struct FileTarget {
    path: PathBuf,
    locale: Locale,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>, locale: Locale) -> Self {
        Self {
            path: path.into(),
            locale,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderTarget for FileTarget {
    fn replace(&self, html: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let page = render_page(html, self.locale, chrono::Local::now());
        fs::write(&self.path, page)?;
        tracing::debug!("Wrote {} bytes to {}", html.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_target_replaces_content() {
        let target = MemoryTarget::new();
        target.replace("<p>first</p>").unwrap();
        target.replace("<p>second</p>").unwrap();

        assert_eq!(target.content(), "<p>second</p>");
        assert_eq!(target.history().len(), 2);
    }

    #[test]
    fn test_memory_target_clones_share_region() {
        let target = MemoryTarget::new();
        let view = target.clone();
        target.replace("<h3>x</h3>").unwrap();

        assert_eq!(view.content(), "<h3>x</h3>");
    }

    #[test]
    fn test_file_target_writes_page() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("feed.html");
        let target = FileTarget::new(&path, Locale::Pt);

        target.replace("<div class=\"loading\"></div>").unwrap();
        target.replace("<h3>Nenhuma partida encontrada.</h3>").unwrap();

        let page = std::fs::read_to_string(&path).unwrap();
        assert!(page.contains("<main id=\"main-content\">"));
        assert!(page.contains("Nenhuma partida encontrada."));
        assert!(!page.contains("class=\"loading\""));
    }
}
