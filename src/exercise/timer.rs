//! Countdown timer engine.
//!
//! Owns one remaining-duration value and a running flag. The timer does not
//! schedule itself: a driver (the TUI loop) calls [`CountdownTimer::tick`]
//! once per elapsed cadence unit, measured against a fixed deadline schedule
//! so that scheduler jitter cannot accumulate into drift.

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

/// One cadence unit: ticks are delivered once per second.
pub const TICK: Duration = Duration::milliseconds(1000);

const TICK_MS: i64 = 1000;

/// Result of applying one cadence unit to a running timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    /// Remaining duration after the tick was applied.
    pub remaining: Duration,
    /// True exactly once per arm cycle: the tick that reached zero.
    pub expired: bool,
}

/// A countdown timer.
///
/// All operations are total. `remaining` is clamped to zero at the lower
/// bound and only ever decreases while running; `start`/`pause` gate whether
/// a tick has effect, they never touch `remaining`.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    /// Remaining milliseconds.
    remaining_ms: i64,
    /// Whether ticks currently have effect.
    is_running: bool,
}

impl CountdownTimer {
    /// Create a new timer armed with the given duration, paused.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining_ms: duration.num_milliseconds().max(0),
            is_running: false,
        }
    }

    /// Start or resume the timer. No-op if already running or expired.
    pub fn start(&mut self) {
        if self.remaining_ms > 0 {
            self.is_running = true;
        }
    }

    /// Pause the timer. `remaining` is preserved. No-op if already paused.
    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Re-arm the timer with a new duration.
    ///
    /// Does not itself start or stop the timer.
    pub fn reset(&mut self, to: Duration) {
        self.remaining_ms = to.num_milliseconds().max(0);
    }

    /// Apply one cadence unit.
    ///
    /// Returns `None` when the timer is paused or already expired (the
    /// driver's clock keeps firing regardless; the flag only gates effect).
    /// Otherwise returns the post-decrement remaining duration, with
    /// `expired` set on the single tick that reaches zero. Expiry also
    /// pauses the timer, so no further ticks land until the next
    /// `reset` + `start`.
    pub fn tick(&mut self) -> Option<TimerTick> {
        if !self.is_running || self.remaining_ms == 0 {
            return None;
        }

        self.remaining_ms = (self.remaining_ms - TICK_MS).max(0);

        let expired = self.remaining_ms == 0;
        if expired {
            self.is_running = false;
        }

        Some(TimerTick {
            remaining: self.remaining(),
            expired,
        })
    }

    /// Get remaining time as a Duration.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        Duration::milliseconds(self.remaining_ms)
    }

    /// Check if the timer is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s*(m|s)?$|^(\d+)m\s*(\d+)s?$")
        .unwrap_or_else(|e| panic!("Invalid duration regex: {e}"))
});

/// Parse a duration string like "5", "5s", "1m", "1m30s".
///
/// Bare numbers are seconds; breathing phases are short.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();
    let caps = DURATION_PATTERN.captures(&s)?;

    if let Some(num) = caps.get(1) {
        let num: i64 = num.as_str().parse().ok()?;
        let seconds = match caps.get(2).map(|m| m.as_str()) {
            Some("m") => num * 60,
            _ => num,
        };
        return Some(Duration::seconds(seconds));
    }

    let minutes: i64 = caps.get(3)?.as_str().parse().ok()?;
    let seconds: i64 = caps.get(4)?.as_str().parse().ok()?;
    Some(Duration::seconds(minutes * 60 + seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_new_is_paused() {
        let timer = CountdownTimer::new(Duration::seconds(5));
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), Duration::seconds(5));
    }

    #[test]
    fn test_timer_counts_down_to_zero() {
        let mut timer = CountdownTimer::new(Duration::seconds(3));
        timer.start();

        let t = timer.tick().unwrap();
        assert_eq!(t.remaining, Duration::seconds(2));
        assert!(!t.expired);

        let t = timer.tick().unwrap();
        assert_eq!(t.remaining, Duration::seconds(1));
        assert!(!t.expired);

        let t = timer.tick().unwrap();
        assert_eq!(t.remaining, Duration::zero());
        assert!(t.expired);
    }

    #[test]
    fn test_timer_expires_exactly_once() {
        let mut timer = CountdownTimer::new(Duration::seconds(1));
        timer.start();

        assert!(timer.tick().unwrap().expired);
        assert!(!timer.is_running());

        // No further ticks until reset + start.
        assert!(timer.tick().is_none());
        timer.start();
        assert!(timer.tick().is_none());
    }

    #[test]
    fn test_timer_tick_gated_while_paused() {
        let mut timer = CountdownTimer::new(Duration::seconds(5));
        timer.start();
        timer.tick();

        timer.pause();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining(), Duration::seconds(4));

        timer.start();
        let t = timer.tick().unwrap();
        assert_eq!(t.remaining, Duration::seconds(3));
    }

    #[test]
    fn test_timer_start_is_noop_when_running() {
        let mut timer = CountdownTimer::new(Duration::seconds(5));
        timer.start();
        timer.tick();
        timer.start();
        assert_eq!(timer.remaining(), Duration::seconds(4));
    }

    #[test]
    fn test_timer_reset_preserves_running_flag() {
        let mut timer = CountdownTimer::new(Duration::seconds(5));
        timer.start();
        timer.reset(Duration::seconds(7));

        assert!(timer.is_running());
        assert_eq!(timer.remaining(), Duration::seconds(7));
    }

    #[test]
    fn test_timer_rejects_negative_durations() {
        let timer = CountdownTimer::new(Duration::seconds(-4));
        assert_eq!(timer.remaining(), Duration::zero());

        let mut timer = CountdownTimer::new(Duration::seconds(2));
        timer.reset(Duration::seconds(-1));
        assert_eq!(timer.remaining(), Duration::zero());
    }

    #[test]
    fn test_timer_n_ticks_monotonic() {
        let mut timer = CountdownTimer::new(Duration::seconds(10));
        timer.start();

        let mut previous = timer.remaining();
        for _ in 0..10 {
            let t = timer.tick().unwrap();
            assert!(t.remaining <= previous);
            assert!(t.remaining >= Duration::zero());
            previous = t.remaining;
        }
        assert_eq!(previous, Duration::zero());
    }

    #[test]
    fn test_parse_duration_seconds() {
        assert_eq!(parse_duration("5"), Some(Duration::seconds(5)));
        assert_eq!(parse_duration("5s"), Some(Duration::seconds(5)));
        assert_eq!(parse_duration("90s"), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration("1m"), Some(Duration::seconds(60)));
        assert_eq!(parse_duration("1m30s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("1m30"), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("-5").is_none());
    }

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(5)), "00:05");
    }
}
