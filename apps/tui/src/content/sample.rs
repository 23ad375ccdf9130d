use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{AppleDay, StatRank, StatSet};

use super::{ContentError, ContentSource};

/// Built-in apples for running without a content service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

#[async_trait]
impl ContentSource for SampleSource {
    async fn fetch_apples(&self) -> Result<Vec<AppleDay>, ContentError> {
        Ok(sample_apples())
    }

    fn describe(&self) -> String {
        "built-in sample apples".to_string()
    }
}

fn january(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, day).unwrap_or(NaiveDate::MIN)
}

pub fn sample_apples() -> Vec<AppleDay> {
    vec![
        AppleDay::new(
            january(1),
            "Honeycrisp",
            StatSet {
                sweetness: StatRank::A,
                crunchiness: StatRank::S,
                vibes: StatRank::E,
                durability: StatRank::C,
                crispiness: StatRank::A,
                appleal: StatRank::A,
            },
        )
        .with_description(
            "The Honeycrisp apple is known for its exceptional crunchiness and balanced sweet-tart flavor.",
        ),
        AppleDay::new(
            january(2),
            "Fuji",
            StatSet {
                sweetness: StatRank::S,
                crunchiness: StatRank::A,
                vibes: StatRank::A,
                durability: StatRank::B,
                crispiness: StatRank::B,
                appleal: StatRank::S,
            },
        )
        .with_description(
            "Fuji apples are incredibly sweet and crisp, making them perfect for snacking.",
        ),
        AppleDay::new(
            january(15),
            "Granny Smith",
            StatSet {
                sweetness: StatRank::D,
                crunchiness: StatRank::S,
                vibes: StatRank::B,
                durability: StatRank::A,
                crispiness: StatRank::S,
                appleal: StatRank::B,
            },
        )
        .with_description(
            "Tart and crisp, Granny Smith apples are excellent for baking and add a nice contrast to sweet dishes.",
        ),
    ]
}
