use chrono::NaiveDate;

use crate::calendar::{CalendarIndex, CalendarMonth};
use crate::content::ContentError;
use crate::domain::AppleDay;
use crate::navigation::{step, NavAction};

pub const PAGE_TITLE: &str = "Apple a Day";
pub const LOADING_NOTICE: &str = "Loading apples...";
pub const COMING_SOON_NOTICE: &str = "COMING SOON";
pub const NOTHING_POSTED_NOTICE: &str = "Nothing posted yet. Check back later!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoContent,
    FetchFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    Loading,
    Empty(EmptyReason),
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchState {
    NotStarted,
    InFlight,
    Done,
}

/// Owns the loaded apples and the selected date. Every change to either
/// goes through here.
#[derive(Debug, Clone)]
pub struct PageController {
    today: NaiveDate,
    phase: PagePhase,
    fetch: FetchState,
    items: Vec<AppleDay>,
    selected: Option<NaiveDate>,
}

impl PageController {
    pub const fn new(today: NaiveDate) -> Self {
        Self {
            today,
            phase: PagePhase::Loading,
            fetch: FetchState::NotStarted,
            items: Vec::new(),
            selected: Some(today),
        }
    }

    /// Claims the single fetch of this page load. Returns false if a fetch
    /// is already running or has finished.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch != FetchState::NotStarted {
            tracing::debug!(state = ?self.fetch, "fetch already claimed");
            return false;
        }
        self.fetch = FetchState::InFlight;
        self.phase = PagePhase::Loading;
        true
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<AppleDay>, ContentError>) {
        self.fetch = FetchState::Done;

        match result {
            Err(error) => {
                tracing::error!(%error, "failed to fetch apples");
                self.items.clear();
                self.selected = None;
                self.phase = PagePhase::Empty(EmptyReason::FetchFailed);
            }
            Ok(items) if items.is_empty() => {
                tracing::info!("no apples published");
                self.items = items;
                self.selected = None;
                self.phase = PagePhase::Empty(EmptyReason::NoContent);
            }
            Ok(items) => {
                self.items = items;
                self.selected = self.default_selection();
                self.phase = PagePhase::Ready;
                tracing::info!(selected = ?self.selected, "page ready");
            }
        }
    }

    /// Today's apple, or the most recent one when today has none.
    fn default_selection(&self) -> Option<NaiveDate> {
        if self.items.iter().any(|item| item.date == self.today) {
            return Some(self.today);
        }
        self.items.last().map(|item| item.date)
    }

    pub const fn phase(&self) -> PagePhase {
        self.phase
    }

    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn items(&self) -> &[AppleDay] {
        &self.items
    }

    pub const fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch == FetchState::InFlight
    }

    /// Selects `date` if an apple exists for it.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if self.items.iter().any(|item| item.date == date) {
            self.selected = Some(date);
            true
        } else {
            false
        }
    }

    /// Moves the selection one apple back or forward. Returns true if it moved.
    pub fn navigate(&mut self, action: NavAction) -> bool {
        match step(&self.items, self.selected, action) {
            Some(date) => {
                self.selected = Some(date);
                true
            }
            None => false,
        }
    }

    pub fn current_item(&self) -> Option<&AppleDay> {
        let selected = self.selected?;
        self.items.iter().find(|item| item.date == selected)
    }

    pub fn calendar(&self, month: CalendarMonth) -> CalendarIndex<'_> {
        CalendarIndex::build(&self.items, month, self.selected)
    }

    /// Message shown in place of the chart, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self.phase {
            PagePhase::Loading => Some(LOADING_NOTICE),
            PagePhase::Empty(_) => Some(COMING_SOON_NOTICE),
            PagePhase::Ready if self.current_item().is_none() => Some(NOTHING_POSTED_NOTICE),
            PagePhase::Ready => None,
        }
    }

    /// Heading for the selected apple, e.g. "Fuji – January 2, 2026".
    pub fn header(&self) -> Option<String> {
        self.current_item()
            .map(|item| format!("{} – {}", item.name, display_date(item.date)))
    }
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StatRank, StatSet};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn apple(d: u32, name: &str) -> AppleDay {
        AppleDay::new(day(d), name, StatSet::uniform(StatRank::B))
    }

    #[test]
    fn starts_loading_with_today_selected() {
        let page = PageController::new(day(10));
        assert_eq!(page.phase(), PagePhase::Loading);
        assert_eq!(page.selected(), Some(day(10)));
        assert_eq!(page.notice(), Some(LOADING_NOTICE));
        assert!(page.current_item().is_none());
    }

    #[test]
    fn fetch_is_claimed_once() {
        let mut page = PageController::new(day(1));
        assert!(page.begin_fetch());
        assert!(page.is_fetching());
        assert!(!page.begin_fetch());

        page.finish_fetch(Ok(vec![apple(1, "Fuji")]));
        assert!(!page.is_fetching());
        assert!(!page.begin_fetch());
    }

    #[test]
    fn today_wins_when_present() {
        let mut page = PageController::new(day(2));
        page.begin_fetch();
        page.finish_fetch(Ok(vec![apple(1, "Honeycrisp"), apple(2, "Fuji"), apple(3, "Gala")]));

        assert_eq!(page.phase(), PagePhase::Ready);
        assert_eq!(page.selected(), Some(day(2)));
        assert_eq!(page.header().as_deref(), Some("Fuji – January 2, 2026"));
        assert_eq!(page.notice(), None);
    }

    #[test]
    fn falls_back_to_latest_apple() {
        let mut page = PageController::new(day(20));
        page.begin_fetch();
        page.finish_fetch(Ok(vec![apple(1, "Honeycrisp"), apple(15, "Granny Smith")]));

        assert_eq!(page.selected(), Some(day(15)));
        assert_eq!(page.current_item().map(|a| a.name.as_str()), Some("Granny Smith"));
    }

    #[test]
    fn empty_and_failed_fetches_show_coming_soon() {
        let mut empty = PageController::new(day(1));
        empty.begin_fetch();
        empty.finish_fetch(Ok(Vec::new()));
        assert_eq!(empty.phase(), PagePhase::Empty(EmptyReason::NoContent));
        assert_eq!(empty.notice(), Some(COMING_SOON_NOTICE));
        assert_eq!(empty.selected(), None);

        let mut failed = PageController::new(day(1));
        failed.begin_fetch();
        failed.finish_fetch(Err(ContentError::Status { status: 500 }));
        assert_eq!(failed.phase(), PagePhase::Empty(EmptyReason::FetchFailed));
        assert_eq!(failed.notice(), Some(COMING_SOON_NOTICE));
        assert!(failed.current_item().is_none());
    }

    #[test]
    fn select_only_accepts_known_dates() {
        let mut page = PageController::new(day(1));
        page.begin_fetch();
        page.finish_fetch(Ok(vec![apple(1, "Honeycrisp"), apple(15, "Granny Smith")]));

        assert!(page.select(day(15)));
        assert_eq!(page.selected(), Some(day(15)));
        assert!(!page.select(day(16)));
        assert_eq!(page.selected(), Some(day(15)));
    }

    #[test]
    fn navigation_moves_through_the_live_collection() {
        let mut page = PageController::new(day(2));
        page.begin_fetch();
        page.finish_fetch(Ok(vec![apple(1, "A"), apple(2, "B"), apple(3, "C")]));

        assert!(page.navigate(NavAction::Next));
        assert_eq!(page.selected(), Some(day(3)));
        assert!(!page.navigate(NavAction::Next));
        assert!(page.navigate(NavAction::Previous));
        assert!(page.navigate(NavAction::Previous));
        assert_eq!(page.selected(), Some(day(1)));
        assert!(!page.navigate(NavAction::Previous));
    }

    #[test]
    fn calendar_reflects_selection() {
        let mut page = PageController::new(day(15));
        page.begin_fetch();
        page.finish_fetch(Ok(vec![apple(1, "A"), apple(15, "B")]));

        let calendar = page.calendar(CalendarMonth::default());
        assert!(calendar.cell(15).unwrap().selected);
        assert!(!calendar.cell(1).unwrap().selected);
    }
}
