use tokio::time::Instant;

/// Source of millisecond timestamps for refresh bookkeeping.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Epoch-anchored clock that advances with the tokio timer.
///
/// The wall-clock reading is taken once; afterwards time only moves with
/// `tokio::time::Instant`, which keeps timestamps monotonically
/// non-decreasing and lets paused-time tests control them.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    anchor: Instant,
    anchor_ms: i64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::starting_at(chrono::Utc::now().timestamp_millis())
    }

    pub fn starting_at(anchor_ms: i64) -> Self {
        Self {
            anchor: Instant::now(),
            anchor_ms,
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> i64 {
        let elapsed = Instant::now().saturating_duration_since(self.anchor);
        self.anchor_ms + elapsed.as_millis() as i64
    }
}
