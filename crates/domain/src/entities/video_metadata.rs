//! Backend-owned video metadata record

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::{Coordinates, DifficultyBand, DifficultyRating};

/// Descriptive record for an indexed trail video
///
/// The record belongs to the video server and is kept as the raw JSON object,
/// so it serializes back exactly as received (nulls, integer ratings and
/// unexpected field types included). The accessors read the fields the
/// pipeline understands leniently and return `None` when a value has an
/// unusable shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoMetadata {
    fields: Map<String, Value>,
}

impl VideoMetadata {
    /// Wrap a JSON value; only objects are metadata records
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Set a field, replacing any previous value
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Raw value of a field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The record as received
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    /// Non-blank string field
    fn text(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)?
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn video_id(&self) -> Option<&str> {
        self.text("video_id")
    }

    #[must_use]
    pub fn trail_name(&self) -> Option<&str> {
        self.text("trail_name")
    }

    /// File name on the video server
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.text("filename")
    }

    /// AI-generated summary
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.text("summary")
    }

    #[must_use]
    pub fn recommended_skill_level(&self) -> Option<&str> {
        self.text("recommended_skill_level")
    }

    #[must_use]
    pub fn terrain_type(&self) -> Option<&str> {
        self.text("terrain_type")
    }

    /// Difficulty rating, from a number or a label such as "7" or "7/10"
    #[must_use]
    pub fn difficulty_rating(&self) -> Option<DifficultyRating> {
        match self.fields.get("difficulty_rating")? {
            Value::Number(n) => n.as_f64().map(DifficultyRating::Score),
            Value::String(s) => Some(DifficultyRating::Label(s.clone())),
            _ => None,
        }
    }

    /// Difficulty band, `Unrated` when no usable rating exists
    #[must_use]
    pub fn difficulty_band(&self) -> DifficultyBand {
        self.difficulty_rating()
            .map_or(DifficultyBand::Unrated, |rating| rating.band())
    }

    /// Key features; a comma-separated string is split into items
    #[must_use]
    pub fn key_features(&self) -> Vec<String> {
        match self.fields.get("key_features") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .filter(|s| !s.is_empty())
                .collect(),
            Some(Value::String(s)) => s
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Location payload; `{latitude, longitude}` for geotagged videos,
    /// a plain place name for older records
    #[must_use]
    pub fn location(&self) -> Option<&Value> {
        self.fields.get("location").filter(|v| !v.is_null())
    }

    /// Trail coordinates, when the location payload carries valid ones
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        let location = self.location()?.as_object()?;
        let latitude = number(location.get("latitude")?)?;
        let longitude = number(location.get("longitude")?)?;
        Coordinates::new(latitude, longitude).ok()
    }

    /// When the video was indexed (ISO 8601, with or without offset)
    #[must_use]
    pub fn indexed_at(&self) -> Option<&str> {
        self.text("indexed_at")
    }

    /// Day the video was indexed
    #[must_use]
    pub fn indexed_on(&self) -> Option<NaiveDate> {
        let raw = self.indexed_at()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Trail name or the given default
    #[must_use]
    pub fn display_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.trail_name().unwrap_or(default)
    }
}

impl From<Map<String, Value>> for VideoMetadata {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Number or numeric string
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
