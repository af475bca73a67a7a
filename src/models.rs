use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One saved title: the catalog record it was saved from, plus the category
/// tag the caller was browsing at the time ("movie", "tv", ...).
///
/// Only `id` and `category` are typed; everything else the catalog sent along
/// (title, poster path, rating, ...) is flattened through untouched so the
/// at-rest entry stays a single flat JSON object.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WatchlistEntry {
    pub id: String,
    pub category: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl WatchlistEntry {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            details: Map::new(),
        }
    }

    /// Builds an entry from a raw catalog record and the category label the
    /// view layer supplies. The record's `id` may be a JSON string or a
    /// number (TMDB uses numeric ids); all other fields are carried through
    /// verbatim.
    pub fn from_catalog(record: &Value, category: impl Into<String>) -> Result<Self> {
        let obj = record
            .as_object()
            .context("Catalog record is not a JSON object")?;
        let id = match obj.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => anyhow::bail!("Catalog record has no usable id"),
        };
        let mut details = obj.clone();
        details.remove("id");
        details.remove("category");
        Ok(Self {
            id,
            category: category.into(),
            details,
        })
    }

    /// Display title if the catalog record carried one. Movies use `title`,
    /// TV shows use `name`.
    pub fn display_title(&self) -> Option<&str> {
        self.details
            .get("title")
            .or_else(|| self.details.get("name"))
            .and_then(Value::as_str)
    }
}
