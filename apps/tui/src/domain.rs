use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accent used when an apple has no color of its own.
pub const DEFAULT_ACCENT: AccentColor = AccentColor::new(0xec, 0x1d, 0x25);

/// Slugs coming from the CMS are capped at this length.
pub const SLUG_MAX_LEN: usize = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatRank {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl StatRank {
    pub const ALL: [Self; 6] = [Self::E, Self::D, Self::C, Self::B, Self::A, Self::S];

    pub const fn magnitude(self) -> u8 {
        match self {
            Self::E => 1,
            Self::D => 2,
            Self::C => 3,
            Self::B => 4,
            Self::A => 5,
            Self::S => 6,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::S => "S",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "E" => Some(Self::E),
            "D" => Some(Self::D),
            "C" => Some(Self::C),
            "B" => Some(Self::B),
            "A" => Some(Self::A),
            "S" => Some(Self::S),
            _ => None,
        }
    }

    /// Reads a rank from content we do not control.
    ///
    /// Anything outside the six grades, including a missing value, drops to
    /// the lowest rank so a bad document still draws a chart.
    pub fn from_untrusted(axis: StatAxis, value: Option<&str>) -> Self {
        match value {
            Some(raw) => Self::parse(raw).unwrap_or_else(|| {
                tracing::warn!(axis = axis.as_str(), value = raw, "unknown stat rank, using E");
                Self::E
            }),
            None => {
                tracing::warn!(axis = axis.as_str(), "missing stat rank, using E");
                Self::E
            }
        }
    }
}

impl fmt::Display for StatRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatAxis {
    Sweetness,
    Crunchiness,
    Vibes,
    Durability,
    Crispiness,
    Appleal,
}

impl StatAxis {
    /// Chart order, clockwise from the top.
    pub const ALL: [Self; 6] = [
        Self::Sweetness,
        Self::Crunchiness,
        Self::Vibes,
        Self::Durability,
        Self::Crispiness,
        Self::Appleal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sweetness => "sweetness",
            Self::Crunchiness => "crunchiness",
            Self::Vibes => "vibes",
            Self::Durability => "durability",
            Self::Crispiness => "crispiness",
            Self::Appleal => "appleal",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Sweetness),
            1 => Some(Self::Crunchiness),
            2 => Some(Self::Vibes),
            3 => Some(Self::Durability),
            4 => Some(Self::Crispiness),
            5 => Some(Self::Appleal),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sweetness => "Sweetness",
            Self::Crunchiness => "Crunchiness",
            Self::Vibes => "Vibes",
            Self::Durability => "Durability",
            Self::Crispiness => "Crispiness",
            Self::Appleal => "Appleal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatSet {
    pub sweetness: StatRank,
    pub crunchiness: StatRank,
    pub vibes: StatRank,
    pub durability: StatRank,
    pub crispiness: StatRank,
    pub appleal: StatRank,
}

impl StatSet {
    pub const fn uniform(rank: StatRank) -> Self {
        Self {
            sweetness: rank,
            crunchiness: rank,
            vibes: rank,
            durability: rank,
            crispiness: rank,
            appleal: rank,
        }
    }

    pub const fn get(&self, axis: StatAxis) -> StatRank {
        match axis {
            StatAxis::Sweetness => self.sweetness,
            StatAxis::Crunchiness => self.crunchiness,
            StatAxis::Vibes => self.vibes,
            StatAxis::Durability => self.durability,
            StatAxis::Crispiness => self.crispiness,
            StatAxis::Appleal => self.appleal,
        }
    }

    /// Ranks paired with their axis, in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (StatAxis, StatRank)> + '_ {
        StatAxis::ALL
            .into_iter()
            .map(move |axis| (axis, self.get(axis)))
    }

    pub fn magnitudes(&self) -> [f64; 6] {
        StatAxis::ALL.map(|axis| f64::from(self.get(axis).magnitude()))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid hex color: {0:?}")]
pub struct ParseColorError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for AccentColor {
    type Err = ParseColorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(value.to_string());
        let hex = value.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let double = |s: &str| channel(&s.repeat(2));
                Ok(Self::new(
                    double(&hex[0..1])?,
                    double(&hex[1..2])?,
                    double(&hex[2..3])?,
                ))
            }
            _ => Err(err()),
        }
    }
}

impl Serialize for AccentColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// One dated entry of the showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppleDay {
    pub date: NaiveDate,
    pub name: String,
    pub slug: String,
    pub stats: StatSet,
    pub accent_color: Option<AccentColor>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl AppleDay {
    pub fn new(date: NaiveDate, name: impl Into<String>, stats: StatSet) -> Self {
        let name = name.into();
        Self {
            date,
            slug: slug_for(&name),
            name,
            stats,
            accent_color: None,
            description: None,
            image_url: None,
        }
    }

    #[must_use]
    pub const fn with_accent(mut self, color: AccentColor) -> Self {
        self.accent_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn accent(&self) -> AccentColor {
        self.accent_color.unwrap_or(DEFAULT_ACCENT)
    }
}

/// URL-safe slug derived from an apple name.
pub fn slug_for(name: &str) -> String {
    let mut slug = slug::slugify(name);
    if slug.len() > SLUG_MAX_LEN {
        slug.truncate(SLUG_MAX_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitudes_increase_from_e_to_s() {
        let magnitudes = StatRank::ALL.map(StatRank::magnitude);
        assert_eq!(magnitudes, [1, 2, 3, 4, 5, 6]);
        assert!(StatRank::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn parse_accepts_only_the_six_grades() {
        assert_eq!(StatRank::parse(" s "), Some(StatRank::S));
        assert_eq!(StatRank::parse("a"), Some(StatRank::A));
        assert_eq!(StatRank::parse("F"), None);
        assert_eq!(StatRank::parse(""), None);
    }

    #[test]
    fn untrusted_ranks_fall_back_to_lowest() {
        assert_eq!(
            StatRank::from_untrusted(StatAxis::Vibes, Some("SSS")),
            StatRank::E
        );
        assert_eq!(StatRank::from_untrusted(StatAxis::Vibes, None), StatRank::E);
        assert_eq!(
            StatRank::from_untrusted(StatAxis::Vibes, Some("B")),
            StatRank::B
        );
    }

    #[test]
    fn stat_set_follows_chart_order() {
        let stats = StatSet {
            sweetness: StatRank::S,
            crunchiness: StatRank::A,
            vibes: StatRank::B,
            durability: StatRank::C,
            crispiness: StatRank::D,
            appleal: StatRank::E,
        };
        assert_eq!(stats.magnitudes(), [6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(StatAxis::from_index(3), Some(StatAxis::Durability));
        assert_eq!(StatAxis::from_index(6), None);
    }

    #[test]
    fn accent_colors_parse_long_and_short_hex() {
        assert_eq!(
            "#ec1d25".parse::<AccentColor>(),
            Ok(AccentColor::new(0xec, 0x1d, 0x25))
        );
        assert_eq!(
            "#f00".parse::<AccentColor>(),
            Ok(AccentColor::new(0xff, 0, 0))
        );
        assert!("ec1d25".parse::<AccentColor>().is_err());
        assert!("#ec1d2580".parse::<AccentColor>().is_err());
        assert!("#zzzzzz".parse::<AccentColor>().is_err());
    }

    #[test]
    fn accent_default_applies_only_when_missing() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let apple = AppleDay::new(date, "Fuji", StatSet::uniform(StatRank::C));
        assert_eq!(apple.accent(), DEFAULT_ACCENT);
        assert_eq!(apple.accent_color, None);

        let green = AccentColor::new(0, 0x80, 0);
        assert_eq!(apple.with_accent(green).accent(), green);
    }

    #[test]
    fn slugs_are_url_safe_and_capped() {
        assert_eq!(slug_for("Granny Smith"), "granny-smith");
        let long = "Pink Lady ".repeat(20);
        let slug = slug_for(&long);
        assert!(slug.len() <= SLUG_MAX_LEN);
        assert!(!slug.ends_with('-'));
    }
}
