use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{AppleDay, StatRank};
use crate::page::{display_date, PageController, PagePhase, PAGE_TITLE};

#[derive(Debug, Serialize)]
pub struct HeadlessStat {
    pub axis: &'static str,
    pub rank: StatRank,
    pub magnitude: u8,
}

#[derive(Debug, Serialize)]
pub struct HeadlessApple {
    pub date: NaiveDate,
    pub name: String,
    pub slug: String,
    pub accent_color: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub stats: Vec<HeadlessStat>,
}

impl From<&AppleDay> for HeadlessApple {
    fn from(apple: &AppleDay) -> Self {
        Self {
            date: apple.date,
            name: apple.name.clone(),
            slug: apple.slug.clone(),
            accent_color: apple.accent().to_hex(),
            description: apple.description.clone(),
            image_url: apple.image_url.clone(),
            stats: apple
                .stats
                .iter()
                .map(|(axis, rank)| HeadlessStat {
                    axis: axis.as_str(),
                    rank,
                    magnitude: rank.magnitude(),
                })
                .collect(),
        }
    }
}

/// What the page would show, for printing without a terminal UI.
#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub today: NaiveDate,
    pub phase: &'static str,
    pub total_apples: usize,
    pub notice: Option<&'static str>,
    pub apple: Option<HeadlessApple>,
}

impl HeadlessReport {
    pub fn from_page(page: &PageController) -> Self {
        let phase = match page.phase() {
            PagePhase::Loading => "loading",
            PagePhase::Empty(_) => "empty",
            PagePhase::Ready => "ready",
        };

        Self {
            today: page.today(),
            phase,
            total_apples: page.items().len(),
            notice: page.notice(),
            apple: page.current_item().map(HeadlessApple::from),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{PAGE_TITLE}");
        let _ = writeln!(out, "{}", "=".repeat(PAGE_TITLE.len()));

        if let Some(notice) = self.notice {
            let _ = writeln!(out, "{notice}");
        }

        if let Some(apple) = &self.apple {
            let _ = writeln!(out, "{} – {}", apple.name, display_date(apple.date));
            let _ = writeln!(out);
            for stat in &apple.stats {
                let bar = "█".repeat(usize::from(stat.magnitude));
                let _ = writeln!(out, "- {:<12} {} {bar}", stat.axis, stat.rank);
            }
            if let Some(description) = &apple.description {
                let _ = writeln!(out, "\n{description}");
            }
        }

        let _ = writeln!(out, "\nApples published: {}", self.total_apples);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample_apples;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn text_report_lists_stats_in_chart_order() {
        let mut page = PageController::new(day(2));
        page.begin_fetch();
        page.finish_fetch(Ok(sample_apples()));

        let text = HeadlessReport::from_page(&page).render_text();
        assert!(text.contains("Fuji – January 2, 2026"));
        let sweetness = text.find("sweetness").unwrap();
        let appleal = text.find("appleal").unwrap();
        assert!(sweetness < appleal);
        assert!(text.contains("- sweetness    S ██████"));
        assert!(text.contains("Apples published: 3"));
    }

    #[test]
    fn json_report_for_an_empty_page() {
        let mut page = PageController::new(day(2));
        page.begin_fetch();
        page.finish_fetch(Ok(Vec::new()));

        let json = serde_json::to_value(HeadlessReport::from_page(&page)).unwrap();
        assert_eq!(json["phase"], "empty");
        assert_eq!(json["notice"], "COMING SOON");
        assert!(json["apple"].is_null());
    }

    #[test]
    fn json_report_applies_default_accent() {
        let mut page = PageController::new(day(1));
        page.begin_fetch();
        page.finish_fetch(Ok(sample_apples()));

        let json = serde_json::to_value(HeadlessReport::from_page(&page)).unwrap();
        assert_eq!(json["apple"]["accent_color"], "#ec1d25");
        assert_eq!(json["apple"]["stats"][1]["axis"], "crunchiness");
        assert_eq!(json["apple"]["stats"][1]["rank"], "S");
        assert_eq!(json["apple"]["stats"][1]["magnitude"], 6);
    }
}
