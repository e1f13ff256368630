use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Kind of catalog the view is browsing, taken from the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    /// Path segment used by the catalog service.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            MediaType::Movie => "Movies",
            MediaType::Tv => "TV Series",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMediaType(pub String);

impl fmt::Display for UnknownMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown media type {:?} (expected \"movie\" or \"tv\")", self.0)
    }
}

impl std::error::Error for UnknownMediaType {}

impl FromStr for MediaType {
    type Err = UnknownMediaType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(MediaType::Movie),
            "tv" | "series" => Ok(MediaType::Tv),
            _ => Err(UnknownMediaType(raw.to_string())),
        }
    }
}

/// Upstream identifier; catalog ids are numeric, user lists may store strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaId {
    Number(i64),
    Text(String),
}

/// A single catalog entry.
///
/// Only the fields the listing logic relies on are typed; everything else the
/// catalog returns is kept verbatim in `attributes` for the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MediaId>,
    /// Correlation key matched against reference lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MediaItem {
    pub fn correlation_key(&self) -> Option<&str> {
        self.original_title.as_deref()
    }

    /// Best human-readable title: `title` (movies), `name` (tv), then `original_title`.
    pub fn display_title(&self) -> &str {
        ["title", "name"]
            .iter()
            .find_map(|key| self.attributes.get(*key).and_then(Value::as_str))
            .or(self.original_title.as_deref())
            .unwrap_or("untitled")
    }
}

/// Entry of a user list (favorites or reviews) used only for exclusion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceEntry {
    #[serde(rename = "mediaTitle", default, skip_serializing_if = "Option::is_none")]
    pub media_title: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// One page as returned by the catalog service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingPage {
    pub results: Vec<MediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

/// Either shape a listing response may take: a `{ results, .. }` wrapper or a bare array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListingPayload {
    Page(ListingPage),
    Items(Vec<MediaItem>),
}

/// Arrays decode as bare item lists; anything else must be a page wrapper and
/// reports the wrapper's own error.
impl<'de> Deserialize<'de> for ListingPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_array() {
            Vec::<MediaItem>::deserialize(value)
                .map(ListingPayload::Items)
                .map_err(D::Error::custom)
        } else {
            ListingPage::deserialize(value)
                .map(ListingPayload::Page)
                .map_err(D::Error::custom)
        }
    }
}

impl ListingPayload {
    pub fn items(&self) -> &[MediaItem] {
        match self {
            ListingPayload::Page(page) => &page.results,
            ListingPayload::Items(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<MediaItem> {
        match self {
            ListingPayload::Page(page) => page.results,
            ListingPayload::Items(items) => items,
        }
    }

    pub fn total_pages(&self) -> Option<u32> {
        match self {
            ListingPayload::Page(page) => page.total_pages,
            ListingPayload::Items(_) => None,
        }
    }
}

impl From<Vec<MediaItem>> for ListingPayload {
    fn from(items: Vec<MediaItem>) -> Self {
        ListingPayload::Items(items)
    }
}

impl From<ListingPage> for ListingPayload {
    fn from(page: ListingPage) -> Self {
        ListingPayload::Page(page)
    }
}
