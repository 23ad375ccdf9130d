use chrono::NaiveDate;

use crate::domain::AppleDay;

/// Horizontal travel, in terminal columns, below which a drag is noise.
pub const MIN_SWIPE_DISTANCE: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Previous,
    Next,
}

/// Date to select after `action`, or `None` when there is nowhere to go.
///
/// `items` must be in ascending date order.
pub fn step(items: &[AppleDay], current: Option<NaiveDate>, action: NavAction) -> Option<NaiveDate> {
    let current = current?;
    let index = items.iter().position(|item| item.date == current)?;

    let target = match action {
        NavAction::Previous => index.checked_sub(1)?,
        NavAction::Next => index + 1,
    };

    items.get(target).map(|item| item.date)
}

/// Turns a press/release pair into a navigation action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeTracker {
    start_x: Option<i32>,
}

impl SwipeTracker {
    pub const fn new() -> Self {
        Self { start_x: None }
    }

    pub fn begin(&mut self, x: i32) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. Right-to-left moves forward, left-to-right back.
    pub fn end(&mut self, x: i32) -> Option<NavAction> {
        let start = self.start_x.take()?;
        let delta = x - start;

        if delta.abs() <= MIN_SWIPE_DISTANCE {
            return None;
        }

        if delta < 0 {
            Some(NavAction::Next)
        } else {
            Some(NavAction::Previous)
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub const fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
