use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{slug_for, AccentColor, AppleDay, StatAxis, StatRank, StatSet};

use super::ContentError;

/// Sanity returns slugs as `{ "current": ".." }` unless the query projects them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SlugField {
    Plain(String),
    Object { current: Option<String> },
}

/// Colors arrive as a bare hex string or as the color plugin's object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ColorField {
    Hex(String),
    Object { hex: Option<String> },
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawStats {
    sweetness: Option<String>,
    crunchiness: Option<String>,
    vibes: Option<String>,
    durability: Option<String>,
    crispiness: Option<String>,
    appleal: Option<String>,
}

impl RawStats {
    fn rank(&self, axis: StatAxis) -> StatRank {
        let value = match axis {
            StatAxis::Sweetness => &self.sweetness,
            StatAxis::Crunchiness => &self.crunchiness,
            StatAxis::Vibes => &self.vibes,
            StatAxis::Durability => &self.durability,
            StatAxis::Crispiness => &self.crispiness,
            StatAxis::Appleal => &self.appleal,
        };
        StatRank::from_untrusted(axis, value.as_deref())
    }

    fn into_stats(self) -> StatSet {
        StatSet {
            sweetness: self.rank(StatAxis::Sweetness),
            crunchiness: self.rank(StatAxis::Crunchiness),
            vibes: self.rank(StatAxis::Vibes),
            durability: self.rank(StatAxis::Durability),
            crispiness: self.rank(StatAxis::Crispiness),
            appleal: self.rank(StatAxis::Appleal),
        }
    }
}

/// An apple document as the content service returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawApple {
    #[serde(rename = "_id")]
    id: Option<String>,
    date: Option<String>,
    #[serde(alias = "name")]
    apple_name: Option<String>,
    slug: Option<SlugField>,
    description: Option<String>,
    stats: Option<RawStats>,
    accent_color: Option<ColorField>,
    image_url: Option<String>,
}

impl RawApple {
    /// Validates the document. Returns `None` for documents that cannot be
    /// placed on the calendar.
    pub fn into_apple(self) -> Option<AppleDay> {
        let id = self.id.as_deref().unwrap_or("(no id)");

        let Some(raw_date) = self.date.as_deref() else {
            tracing::warn!(id, "skipping apple without a date");
            return None;
        };
        let Ok(date) = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d") else {
            tracing::warn!(id, date = raw_date, "skipping apple with an invalid date");
            return None;
        };

        let Some(name) = self.apple_name.filter(|name| !name.trim().is_empty()) else {
            tracing::warn!(id, %date, "skipping apple without a name");
            return None;
        };

        let slug = match self.slug {
            Some(SlugField::Plain(slug) | SlugField::Object { current: Some(slug) })
                if !slug.trim().is_empty() =>
            {
                slug
            }
            _ => slug_for(&name),
        };

        if self.stats.is_none() {
            tracing::warn!(id, %date, "apple has no stats");
        }
        let stats = self.stats.unwrap_or_default().into_stats();

        let accent_color = match self.accent_color {
            Some(ColorField::Hex(hex) | ColorField::Object { hex: Some(hex) }) => {
                match hex.parse::<AccentColor>() {
                    Ok(color) => Some(color),
                    Err(error) => {
                        tracing::warn!(id, %error, "ignoring accent color");
                        None
                    }
                }
            }
            _ => None,
        };

        Some(AppleDay {
            date,
            name,
            slug,
            stats,
            accent_color,
            description: self.description.filter(|text| !text.trim().is_empty()),
            image_url: self.image_url.filter(|url| !url.trim().is_empty()),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Query { result: Vec<RawApple> },
    Bare(Vec<RawApple>),
}

/// Decodes a query response (`{ "result": [...] }`) or a bare array of
/// apple documents, dropping documents that fail validation.
pub fn decode_document(body: &str) -> Result<Vec<AppleDay>, ContentError> {
    let raw = match serde_json::from_str::<Document>(body)? {
        Document::Query { result } | Document::Bare(result) => result,
    };
    let total = raw.len();
    let apples: Vec<AppleDay> = raw.into_iter().filter_map(RawApple::into_apple).collect();

    if apples.len() < total {
        tracing::warn!(skipped = total - apples.len(), "some apple documents were invalid");
    }

    Ok(apples)
}
