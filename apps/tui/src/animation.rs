/// Pause between a chart appearing and its polygon starting to grow.
pub const ANIMATION_DELAY: f64 = 0.3;
/// Time the polygon takes to reach full size.
pub const ANIMATION_DURATION: f64 = 1.0;

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear progress of a run that started at `started_at`.
pub fn linear_progress(started_at: f64, now_seconds: f64) -> f64 {
    let elapsed = now_seconds - started_at - ANIMATION_DELAY;
    (elapsed / ANIMATION_DURATION).clamp(0.0, 1.0)
}

/// Identifies one scheduled run. A tick holding an old ticket is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Finished,
}

/// Drives the chart polygon from nothing to its final size.
#[derive(Debug, Clone)]
pub struct GrowAnimation {
    generation: u64,
    started_at: f64,
    progress: f64,
    phase: Phase,
}

impl Default for GrowAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowAnimation {
    pub const fn new() -> Self {
        Self {
            generation: 0,
            started_at: 0.0,
            progress: 0.0,
            phase: Phase::Idle,
        }
    }

    /// Starts a fresh run and hands out the only ticket that may advance it.
    pub fn restart(&mut self, now_seconds: f64) -> FrameTicket {
        self.generation = self.generation.wrapping_add(1);
        self.started_at = now_seconds;
        self.progress = 0.0;
        self.phase = Phase::Running;
        FrameTicket(self.generation)
    }

    /// Drops the pending run; outstanding tickets go stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.phase == Phase::Running {
            self.phase = Phase::Idle;
        }
    }

    pub fn ticket(&self) -> Option<FrameTicket> {
        (self.phase == Phase::Running).then_some(FrameTicket(self.generation))
    }

    /// Advances the run for the current frame and returns the eased progress.
    pub fn tick(&mut self, ticket: FrameTicket, now_seconds: f64) -> Option<f64> {
        if ticket != FrameTicket(self.generation) || self.phase != Phase::Running {
            return None;
        }

        let t = linear_progress(self.started_at, now_seconds);
        self.progress = ease_out_cubic(t);
        if t >= 1.0 {
            self.progress = 1.0;
            self.phase = Phase::Finished;
        }

        Some(self.progress)
    }

    pub const fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    #[test]
    fn progress_is_zero_until_the_delay_passes() {
        let mut animation = GrowAnimation::new();
        let ticket = animation.restart(10.0);

        assert_eq!(animation.tick(ticket, 10.1), Some(0.0));
        let at_delay = animation.tick(ticket, 10.0 + ANIMATION_DELAY).unwrap_or(1.0);
        assert_close(at_delay, 0.0);
        assert!(animation.is_running());
    }

    #[test]
    fn progress_reaches_exactly_one_and_stops() {
        let mut animation = GrowAnimation::new();
        let ticket = animation.restart(0.0);

        let done = ANIMATION_DELAY + ANIMATION_DURATION + 0.5;
        assert_eq!(animation.tick(ticket, done), Some(1.0));
        assert!(!animation.is_running());
        assert_eq!(animation.ticket(), None);
        // Finished runs accept no more frames.
        assert_eq!(animation.tick(ticket, done + 1.0), None);
        assert_close(animation.progress(), 1.0);
    }

    #[test]
    fn progress_follows_ease_out_cubic() {
        let mut animation = GrowAnimation::new();
        let ticket = animation.restart(0.0);

        let midway = ANIMATION_DELAY + ANIMATION_DURATION / 2.0;
        let progress = animation.tick(ticket, midway).unwrap_or_default();
        assert_close(progress, 1.0 - 0.5_f64.powi(3));
    }

    #[test]
    fn progress_never_decreases() {
        let mut animation = GrowAnimation::new();
        let ticket = animation.restart(0.0);

        let mut last = 0.0;
        for step in 0..=200 {
            let now = f64::from(step) * 0.01;
            let Some(progress) = animation.tick(ticket, now) else {
                break;
            };
            assert!(progress >= last, "{progress} < {last} at {now}");
            last = progress;
        }
        assert_close(last, 1.0);
    }

    #[test]
    fn restart_invalidates_the_previous_ticket() {
        let mut animation = GrowAnimation::new();
        let stale = animation.restart(0.0);
        animation.tick(stale, 1.0);

        let fresh = animation.restart(5.0);
        assert_ne!(stale, fresh);
        assert_eq!(animation.tick(stale, 100.0), None);
        assert_close(animation.progress(), 0.0);
        assert_eq!(animation.tick(fresh, 5.0), Some(0.0));
    }

    #[test]
    fn cancel_stops_pending_frames() {
        let mut animation = GrowAnimation::new();
        let ticket = animation.restart(0.0);
        animation.cancel();

        assert!(!animation.is_running());
        assert_eq!(animation.tick(ticket, 0.9), None);
    }

    #[test]
    fn backwards_time_does_not_reverse_animation() {
        assert_close(linear_progress(10.0, 9.0), 0.0);
        assert_close(ease_out_cubic(-1.0), 0.0);
        assert_close(ease_out_cubic(2.0), 1.0);
    }
}
