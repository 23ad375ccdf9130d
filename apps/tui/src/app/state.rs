use std::time::Instant;

use apple_a_day::animation::GrowAnimation;
use apple_a_day::calendar::CalendarMonth;
use apple_a_day::config::AppConfig;
use apple_a_day::content::ContentError;
use apple_a_day::navigation::{NavAction, SwipeTracker};
use apple_a_day::page::{display_date, PageController, PagePhase};
use apple_a_day::AppleDay;
use chrono::{Datelike, NaiveDate};
use throbber_widgets_tui::ThrobberState;

/// The modal month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub expanded: bool,
    /// Day of month under the keyboard cursor, 1-based.
    pub cursor_day: u32,
}

pub struct App {
    pub running: bool,
    pub page: PageController,
    pub calendar_month: CalendarMonth,
    pub calendar: CalendarView,
    pub animation: GrowAnimation,
    /// Date of the apple the chart last grew for.
    animated_date: Option<NaiveDate>,
    pub swipe: SwipeTracker,
    pub show_help: bool,
    pub status_message: String,
    pub source_label: String,
    pub throbber: ThrobberState,
    started: Instant,
}

impl App {
    pub fn new(config: &AppConfig, source_label: String) -> Self {
        Self {
            running: true,
            page: PageController::new(config.today),
            calendar_month: config.calendar_month,
            calendar: CalendarView {
                expanded: false,
                cursor_day: 1,
            },
            animation: GrowAnimation::new(),
            animated_date: None,
            swipe: SwipeTracker::new(),
            show_help: false,
            status_message: String::new(),
            source_label,
            throbber: ThrobberState::default(),
            started: Instant::now(),
        }
    }

    fn now_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Advances per-frame state. Called once before every draw.
    pub fn update(&mut self) {
        if let Some(ticket) = self.animation.ticket() {
            self.animation.tick(ticket, self.now_seconds());
        }
        if self.page.phase() == PagePhase::Loading {
            self.throbber.calc_next();
        }
    }

    pub fn current_apple(&self) -> Option<&AppleDay> {
        self.page.current_item()
    }

    /// Restarts the chart animation whenever a different apple is shown,
    /// even one with the same ranks.
    fn sync_animation(&mut self) {
        let date = self.page.selected().filter(|_| self.page.current_item().is_some());
        if date == self.animated_date {
            return;
        }

        self.animated_date = date;
        if date.is_some() {
            self.animation.restart(self.now_seconds());
        } else {
            self.animation.cancel();
        }
    }

    pub fn replay_animation(&mut self) {
        if self.animated_date.is_some() {
            self.animation.restart(self.now_seconds());
        }
    }

    /// Fetch errors are logged by the page and never shown on screen.
    pub fn finish_fetch(&mut self, result: Result<Vec<AppleDay>, ContentError>) {
        self.page.finish_fetch(result);
        self.sync_animation();
    }

    pub fn navigate(&mut self, action: NavAction) {
        if self.page.navigate(action) {
            self.status_message.clear();
            self.sync_animation();
        } else {
            tracing::debug!(?action, "navigation had nowhere to go");
        }
    }

    pub fn toggle_calendar(&mut self) {
        if self.calendar.expanded {
            self.close_calendar();
            return;
        }

        let month = self.calendar_month;
        let index = self.page.calendar(month);
        if index.outside_month() > 0 {
            tracing::warn!(
                month = %month,
                hidden = index.outside_month(),
                "apples dated outside the calendar month"
            );
        }
        self.calendar.cursor_day = self
            .page
            .selected()
            .filter(|date| month.contains(*date))
            .map(|date| date.day())
            .or_else(|| index.enabled_days().next())
            .unwrap_or(1);
        self.calendar.expanded = true;
        self.swipe.cancel();
    }

    pub fn close_calendar(&mut self) {
        self.calendar.expanded = false;
    }

    /// Moves the calendar cursor by `days`, wrapping around the month.
    pub fn move_calendar_cursor(&mut self, days: i32) {
        let len = i64::from(self.calendar_month.days_in_month());
        let index = i64::from(self.calendar.cursor_day) - 1 + i64::from(days);
        let day = index.rem_euclid(len) + 1;
        self.calendar.cursor_day = u32::try_from(day).unwrap_or(1);
    }

    /// Selects the apple under the cursor and closes the calendar. Days
    /// without an apple do nothing.
    pub fn activate_calendar_cursor(&mut self) {
        let day = self.calendar.cursor_day;
        let Some(date) = self.page.calendar(self.calendar_month).activate(day) else {
            return;
        };

        if self.page.select(date) {
            self.status_message = format!("Showing {}", display_date(date));
            self.close_calendar();
            self.sync_animation();
        }
    }

    /// Stops anything still scheduled for the page.
    pub fn teardown(&mut self) {
        self.animation.cancel();
        self.swipe.cancel();
        self.calendar.expanded = false;
    }
}
