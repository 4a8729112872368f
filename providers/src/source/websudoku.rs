use super::PuzzleSource;
use crate::SourceError;
use crate::config::SourceConfig;
use crate::formats::html;
use reqwest::Url;
use std::collections::HashMap;
use websudoku_core::{Puzzle, codec};

/// Scraper for websudoku.com.
///
/// The entry page is a frameset; the puzzle itself lives in the framed
/// document, where every given cell is a read-only `<input>` whose id is
/// `f<col><row>` and whose value is the digit.
#[derive(Debug, Clone)]
pub struct WebSudoku {
    client: reqwest::Client,
    entry_url: Url,
}

impl WebSudoku {
    pub fn new(client: reqwest::Client, config: &SourceConfig) -> Result<Self, SourceError> {
        let mut entry_url = Url::parse(&config.source_url).map_err(|e| {
            SourceError::Unavailable(format!("invalid source URL {}: {}", config.source_url, e))
        })?;
        let kept: Vec<(String, String)> = entry_url
            .query_pairs()
            .filter(|(key, _)| key != "level")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        entry_url
            .query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("level", &config.level.to_string());

        Ok(Self { client, entry_url })
    }

    pub fn entry_url(&self) -> &Url {
        &self.entry_url
    }

    /// Fetch the entry page and resolve the target of its first frame.
    pub async fn fetch_frame_link(&self) -> Result<Url, SourceError> {
        let page = self.fetch_text(self.entry_url.clone()).await?;

        let src = frame_link(&page).ok_or_else(|| {
            SourceError::Unavailable(format!("no frame reference on {}", self.entry_url))
        })?;

        let link = self.entry_url.join(&src).map_err(|e| {
            SourceError::Parse(format!("frame reference {:?} is not a valid URL: {}", src, e))
        })?;
        tracing::info!(url = %link, "found puzzle frame");
        Ok(link)
    }

    /// Fetch the puzzle page and map each given cell id to its digit.
    pub async fn fetch_fixed_cells(&self, url: &Url) -> Result<HashMap<String, String>, SourceError> {
        let page = self.fetch_text(url.clone()).await?;
        let cells = fixed_cells(&page)?;
        tracing::debug!(givens = cells.len(), "extracted fixed cells");
        Ok(cells)
    }

    async fn fetch_text(&self, url: Url) -> Result<String, SourceError> {
        tracing::debug!(%url, "fetching page");
        let res = self.client.get(url).send().await?.error_for_status()?;
        Ok(res.text().await?)
    }
}

impl PuzzleSource for WebSudoku {
    async fn fetch_puzzle(&self) -> Result<Puzzle, SourceError> {
        let link = self.fetch_frame_link().await?;
        let cells = self.fetch_fixed_cells(&link).await?;
        Ok(codec::encode(&cells)?)
    }
}

/// `src` of the first `<frame>` or `<iframe>` in the page.
fn frame_link(page: &str) -> Option<String> {
    html::elements(page)
        .into_iter()
        .filter(|e| matches!(e.name(), "frame" | "iframe"))
        .find_map(|e| e.attr("src").filter(|s| !s.is_empty()).map(String::from))
}

/// Id-to-value map of every read-only `<input>` in the page.
fn fixed_cells(page: &str) -> Result<HashMap<String, String>, SourceError> {
    let inputs: Vec<html::Element> = html::find(page, "input").collect();
    if inputs.is_empty() {
        return Err(SourceError::Parse(
            "no input fields on puzzle page".to_string(),
        ));
    }

    let mut cells = HashMap::new();
    for input in inputs.iter().filter(|e| e.has_attr("readonly")) {
        let id = input
            .attr("id")
            .ok_or_else(|| SourceError::Parse("read-only input without an id".to_string()))?;
        let value = input
            .attr("value")
            .ok_or_else(|| SourceError::Parse(format!("read-only input {} has no value", id)))?;
        cells.insert(id.to_string(), value.to_string());
    }

    Ok(cells)
}
