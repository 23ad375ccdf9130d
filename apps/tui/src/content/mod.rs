//! Reading apples from wherever they are published.

mod file;
mod raw;
mod sample;
mod sanity;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::AppleDay;

pub use file::FileSource;
pub use raw::{decode_document, RawApple};
pub use sample::{sample_apples, SampleSource};
pub use sanity::{SanityClient, SanityConfig, APPLE_QUERY};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("content service returned status {status}")]
    Status { status: u16 },
    #[error("could not decode content: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content fetch stopped before returning")]
    Interrupted,
}

/// A read-only source of published apples.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Every published apple, in no particular order.
    async fn fetch_apples(&self) -> Result<Vec<AppleDay>, ContentError>;

    /// Short human description used in logs and the status line.
    fn describe(&self) -> String;
}

/// Fetches from `source` and returns apples unique by date, oldest first.
pub async fn fetch_content_items(
    source: &dyn ContentSource,
) -> Result<Vec<AppleDay>, ContentError> {
    tracing::info!(source = %source.describe(), "fetching apples");
    let apples = source.fetch_apples().await?;
    let apples = normalize(apples);
    tracing::info!(count = apples.len(), "apples loaded");
    Ok(apples)
}

/// Sorts by date and keeps the first apple seen for each date.
pub fn normalize(mut apples: Vec<AppleDay>) -> Vec<AppleDay> {
    apples.sort_by_key(|apple| apple.date);
    apples.dedup_by(|later, earlier| {
        let duplicate = later.date == earlier.date;
        if duplicate {
            tracing::warn!(
                date = %later.date,
                kept = %earlier.name,
                dropped = %later.name,
                "duplicate apple for date"
            );
        }
        duplicate
    });
    apples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StatRank, StatSet};
    use chrono::NaiveDate;

    fn apple(day: u32, name: &str) -> AppleDay {
        let date = NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
        AppleDay::new(date, name, StatSet::uniform(StatRank::C))
    }

    #[test]
    fn normalize_sorts_and_drops_duplicate_dates() {
        let apples = vec![
            apple(15, "Granny Smith"),
            apple(1, "Honeycrisp"),
            apple(15, "Braeburn"),
            apple(2, "Fuji"),
        ];

        let names: Vec<String> = normalize(apples).into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["Honeycrisp", "Fuji", "Granny Smith"]);
    }

    struct Failing;

    #[async_trait]
    impl ContentSource for Failing {
        async fn fetch_apples(&self) -> Result<Vec<AppleDay>, ContentError> {
            Err(ContentError::Status { status: 503 })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[tokio::test]
    async fn fetch_errors_are_passed_through() {
        let result = fetch_content_items(&Failing).await;
        assert!(matches!(result, Err(ContentError::Status { status: 503 })));
    }

    #[tokio::test]
    async fn sample_source_is_sorted() {
        let apples = fetch_content_items(&SampleSource).await.unwrap();
        assert!(apples.windows(2).all(|pair| pair[0].date < pair[1].date));
    }
}
