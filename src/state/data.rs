/// Shared data structures for the gallery
///
/// These structs represent the catalog records that flow between
/// the catalog loader, the filter engine, and the UI layer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Represents a single project in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: u32,
    /// Display title (searchable)
    #[serde(default)]
    pub title: String,
    /// Short description (searchable)
    #[serde(default)]
    pub description: String,
    /// Link target, absolute or relative to the site root
    #[serde(default)]
    pub url: String,
    /// Preview image URL, if any
    #[serde(default)]
    pub image: Option<String>,
    /// Glyph shown when there is no image
    #[serde(default)]
    pub icon: String,
    /// Ordered tags. `None` when the record had no usable tag array.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Option<Vec<String>>,
}

/// What a card shows in its visual slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisual<'a> {
    Image(&'a str),
    Icon(&'a str),
}

impl Project {
    /// Tags of this project; a missing or malformed tag list reads as no tags
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Whether the exact tag is attached to this project
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    /// The image when set, otherwise the icon glyph
    pub fn visual(&self) -> CardVisual<'_> {
        match self.image.as_deref() {
            Some(image) if !image.is_empty() => CardVisual::Image(image),
            _ => CardVisual::Icon(&self.icon),
        }
    }
}

// Anything other than an array decodes as "no tags"; non-string entries are dropped.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(tag) => Some(tag),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
