//! Content model for the site: the game catalog loaded from `games.json`.
//!
//! The catalog is fetched once per page view by the content loader, parsed
//! here, and then treated as immutable. Display order in the JSON document
//! is display order everywhere downstream.

use crate::error::SiteError;
use log::debug;
use serde::Deserialize;
use std::io::Read;

/// How a media item should be rendered. The gallery controller is
/// kind-agnostic; the renderer dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Embed,
}

/// One entry in a game's media strip (screenshot, trailer, playable embed).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Source locator: image URL or embed/iframe URL depending on `kind`.
    pub src: String,
    #[serde(default)]
    pub thumbnail_src: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Storefront pricing block on the detail page. All fields optional;
/// prices are plain numbers, currency formatting is the renderer's job.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDetails {
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<String>,
    #[serde(default)]
    pub sale_end_date: Option<String>,
}

/// One game as described by `games.json`. Immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Feeds the in-place featured carousel on the home page.
    #[serde(default)]
    pub is_featured: bool,
    /// Feeds the featured grid/carousel that links to detail routes.
    #[serde(default)]
    pub show_in_featured_grid: bool,
    /// Media strip for the detail-page gallery, in display order.
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub price_details: Option<PriceDetails>,
    #[serde(default)]
    pub itchio_page_url: Option<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub key_features: Vec<String>,
}

/// Ordered collection of game records.
#[derive(Debug, Clone)]
pub struct GameCatalog {
    games: Vec<GameRecord>,
}

impl GameCatalog {
    /// Build a catalog from already-deserialized records. Runs the same
    /// structural validation as the JSON entry points.
    pub fn new(games: Vec<GameRecord>) -> Result<Self, SiteError> {
        let catalog = GameCatalog { games };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a `games.json` document (a top-level JSON array).
    pub fn from_json_str(json: &str) -> Result<Self, SiteError> {
        let games: Vec<GameRecord> = serde_json::from_str(json)
            .map_err(|e| SiteError::Catalog(format!("Failed to parse games.json: {}", e)))?;
        debug!("Parsed {} game records", games.len());
        Self::new(games)
    }

    /// Parse a `games.json` document from any reader (file, fetch body).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SiteError> {
        let games: Vec<GameRecord> = serde_json::from_reader(reader)
            .map_err(|e| SiteError::Catalog(format!("Failed to parse games.json: {}", e)))?;
        debug!("Parsed {} game records", games.len());
        Self::new(games)
    }

    /// Structural checks beyond what serde enforces: ids present and
    /// unique, titles present. `catalog-lint` runs this against content
    /// edits before they ship.
    pub fn validate(&self) -> Result<(), SiteError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.games.len());
        for (pos, game) in self.games.iter().enumerate() {
            if game.id.trim().is_empty() {
                return Err(SiteError::Catalog(format!(
                    "Game at position {} has an empty id",
                    pos
                )));
            }
            if game.title.trim().is_empty() {
                return Err(SiteError::Catalog(format!(
                    "Game '{}' has an empty title",
                    game.id
                )));
            }
            if seen.contains(&game.id.as_str()) {
                return Err(SiteError::Catalog(format!(
                    "Duplicate game id '{}'",
                    game.id
                )));
            }
            seen.push(&game.id);
        }
        Ok(())
    }

    /// Lookup by id, as the detail route does.
    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Games flagged for the featured grid on the home page, catalog order.
    pub fn featured_grid(&self) -> Vec<&GameRecord> {
        self.games.iter().filter(|g| g.show_in_featured_grid).collect()
    }

    /// Games flagged featured (the modal-style carousel), catalog order.
    pub fn featured(&self) -> Vec<&GameRecord> {
        self.games.iter().filter(|g| g.is_featured).collect()
    }

    /// Up to `count` games other than `current_id`, in catalog order.
    /// Backs the "More Games You Might Like" strip.
    pub fn others(&self, current_id: &str, count: usize) -> Vec<&GameRecord> {
        self.games
            .iter()
            .filter(|g| g.id != current_id)
            .take(count)
            .collect()
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
