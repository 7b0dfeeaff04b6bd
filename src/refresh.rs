use serde::Serialize;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tracing::info;

use crate::clock::Clock;
use crate::error::ZeroPeriod;
use crate::scheduler::{schedule_once, schedule_repeating, TaskHandle};

pub const REFRESH_INTERVAL: Duration = Duration::from_millis(300_000);
pub const COUNTDOWN_TICK: Duration = Duration::from_millis(1_000);
pub const REFRESHED_FLASH: Duration = Duration::from_millis(1_000);

/// Milliseconds left until the next refresh, clamped at zero.
pub fn remaining_ms(interval_ms: u64, last_refresh_ms: i64, now_ms: i64) -> u64 {
    let elapsed = now_ms.saturating_sub(last_refresh_ms).max(0) as u64;
    interval_ms.saturating_sub(elapsed)
}

/// Formats a countdown as `minutes:seconds` with two-digit seconds.
pub fn format_countdown(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshStatus {
    pub last_refresh: i64,
    pub remaining_ms: u64,
    pub just_refreshed: bool,
    pub label: String,
}

struct TickerState {
    clock: Arc<dyn Clock>,
    interval_ms: u64,
    last_refresh: i64,
    remaining_ms: u64,
    just_refreshed: bool,
    flash: TaskHandle,
    countdown: TaskHandle,
}

impl TickerState {
    fn status(&self) -> RefreshStatus {
        let label = if self.just_refreshed {
            "Refreshed".to_string()
        } else {
            format!("Next: {}", format_countdown(self.remaining_ms))
        };
        RefreshStatus {
            last_refresh: self.last_refresh,
            remaining_ms: self.remaining_ms,
            just_refreshed: self.just_refreshed,
            label,
        }
    }
}

/// Advances the refresh timestamp on a fixed interval and keeps the
/// countdown shown by the status badge.
///
/// Three timers hang off a ticker: the refresh interval itself, a one
/// second countdown that restarts with every refresh, and the one second
/// "refreshed" flash. All of them are cancelled on `stop` or drop.
pub struct RefreshTicker {
    state: Arc<Mutex<TickerState>>,
    interval: TaskHandle,
}

impl RefreshTicker {
    /// Starts ticking. `on_refresh` receives every new timestamp, after the
    /// ticker's own state has been updated.
    pub fn start<F>(
        clock: Arc<dyn Clock>,
        interval: Duration,
        on_refresh: F,
    ) -> Result<Self, ZeroPeriod>
    where
        F: Fn(i64) + Send + 'static,
    {
        let now = clock.now_ms();
        Self::starting_from(clock, interval, now, on_refresh)
    }

    /// Like [`RefreshTicker::start`], with the initial timestamp supplied by
    /// the caller so it can be shared with state built before the ticker.
    pub fn starting_from<F>(
        clock: Arc<dyn Clock>,
        interval: Duration,
        last_refresh: i64,
        on_refresh: F,
    ) -> Result<Self, ZeroPeriod>
    where
        F: Fn(i64) + Send + 'static,
    {
        if interval.is_zero() {
            return Err(ZeroPeriod);
        }
        let interval_ms = interval.as_millis() as u64;
        let state = Arc::new(Mutex::new(TickerState {
            last_refresh,
            clock,
            interval_ms,
            remaining_ms: interval_ms,
            just_refreshed: false,
            flash: TaskHandle::inert(),
            countdown: TaskHandle::inert(),
        }));

        if let Ok(mut guard) = state.lock() {
            restart_side_timers(&mut guard, Arc::downgrade(&state));
        }

        let weak = Arc::downgrade(&state);
        let interval_task = schedule_repeating(interval, move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let stamp = {
                let Ok(mut guard) = state.lock() else {
                    return;
                };
                let now = guard.clock.now_ms().max(guard.last_refresh);
                guard.last_refresh = now;
                guard.remaining_ms = guard.interval_ms;
                restart_side_timers(&mut guard, Arc::downgrade(&state));
                now
            };
            info!(last_refresh = stamp, "dashboard refresh");
            on_refresh(stamp);
        })?;

        Ok(Self {
            state,
            interval: interval_task,
        })
    }

    pub fn status(&self) -> RefreshStatus {
        match self.state.lock() {
            Ok(guard) => guard.status(),
            Err(poisoned) => poisoned.into_inner().status(),
        }
    }

    pub fn last_refresh(&self) -> i64 {
        self.status().last_refresh
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_active()
    }

    /// Cancels every timer owned by the ticker. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.interval.cancel();
        if let Ok(mut guard) = self.state.lock() {
            guard.flash.cancel();
            guard.countdown.cancel();
            guard.just_refreshed = false;
        }
    }
}

impl Drop for RefreshTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Raises the flash for `REFRESHED_FLASH` and restarts the countdown.
fn restart_side_timers(state: &mut TickerState, weak: Weak<Mutex<TickerState>>) {
    state.just_refreshed = true;

    let flash_target = weak.clone();
    state.flash = schedule_once(REFRESHED_FLASH, move || {
        if let Some(state) = flash_target.upgrade() {
            if let Ok(mut guard) = state.lock() {
                guard.just_refreshed = false;
            }
        }
    });

    let countdown = schedule_repeating(COUNTDOWN_TICK, move || {
        if let Some(state) = weak.upgrade() {
            if let Ok(mut guard) = state.lock() {
                let now = guard.clock.now_ms();
                guard.remaining_ms = remaining_ms(guard.interval_ms, guard.last_refresh, now);
            }
        }
    });
    // COUNTDOWN_TICK is a non-zero constant.
    if let Ok(countdown) = countdown {
        state.countdown = countdown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_clamps_at_zero() {
        assert_eq!(remaining_ms(300_000, 0, 0), 300_000);
        assert_eq!(remaining_ms(300_000, 0, 299_000), 1_000);
        assert_eq!(remaining_ms(300_000, 0, 300_000), 0);
        assert_eq!(remaining_ms(300_000, 0, 300_001), 0);
    }

    #[test]
    fn zero_interval_is_refused() {
        let clock: Arc<dyn Clock> = Arc::new(crate::clock::MonotonicClock::starting_at(0));
        let result = RefreshTicker::start(clock, Duration::ZERO, |_| {});
        assert!(matches!(result, Err(ZeroPeriod)));
    }

    #[test]
    fn countdown_pads_seconds() {
        assert_eq!(format_countdown(300_000), "5:00");
        assert_eq!(format_countdown(65_000), "1:05");
        assert_eq!(format_countdown(9_999), "0:09");
        assert_eq!(format_countdown(0), "0:00");
    }
}
