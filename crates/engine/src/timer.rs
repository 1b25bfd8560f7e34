//! Gravity timer.
//!
//! A poll-driven scheduler: the caller asks [`TickTimer::poll`] whether a tick is
//! due and uses [`TickTimer::time_until_fire`] as its input wait timeout.
//! Speed changes only apply from the next scheduled fire; the deadline that is
//! already pending is kept.

use std::time::{Duration, Instant};

use crate::types::{interval_ms_for_speed, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

#[derive(Debug, Clone)]
pub struct TickTimer {
    speed: u32,
    interval: Duration,
    next_fire: Instant,
    paused: bool,
}

impl TickTimer {
    /// Timer at `speed` (clamped to the valid range), first fire one interval from `now`.
    pub fn new(speed: u32, now: Instant) -> Self {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        let interval = Duration::from_millis(interval_ms_for_speed(speed) as u64);
        Self {
            speed,
            interval,
            next_fire: now + interval,
            paused: false,
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Change speed. Returns the clamped speed actually set.
    pub fn set_speed(&mut self, speed: u32) -> u32 {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self.interval = Duration::from_millis(interval_ms_for_speed(self.speed) as u64);
        self.speed
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Restart ticking; the next fire is one full interval after `now`.
    pub fn resume(&mut self, now: Instant) {
        if self.paused {
            self.paused = false;
            self.next_fire = now + self.interval;
        }
    }

    /// Returns the new paused state.
    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        if self.paused {
            self.resume(now);
        } else {
            self.pause();
        }
        self.paused
    }

    /// Fire at most once if the deadline has passed and the timer is running.
    /// The next deadline is scheduled one interval after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.paused || now < self.next_fire {
            return false;
        }
        self.next_fire = now + self.interval;
        true
    }

    /// Time left until the pending deadline (zero if already due).
    pub fn time_until_fire(&self, now: Instant) -> Duration {
        self.next_fire.saturating_duration_since(now)
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED, Instant::now())
    }
}
