use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::scheduler::{schedule_once, TaskHandle};
use crate::view::ViewId;

pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(100);
pub const COMPACT_REVEAL_DELAY: Duration = Duration::from_millis(200);

/// Identity of a gate instance. A new key means a new gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GateKey {
    pub view: ViewId,
    pub refreshed_at: i64,
}

impl GateKey {
    pub fn new(view: ViewId, refreshed_at: i64) -> Self {
        Self { view, refreshed_at }
    }
}

/// Loading-skeleton layout shown while content is withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skeleton {
    pub header_lines: usize,
    pub metric_cards: usize,
    pub chart_cards: usize,
    pub list_rows: usize,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            header_lines: 2,
            metric_cards: 4,
            chart_cards: 2,
            list_rows: 3,
        }
    }
}

/// What a gate currently shows.
#[derive(Debug)]
pub enum Frame<'a, T> {
    Placeholder(&'a Skeleton),
    Content(&'a T),
}

impl<T> Frame<'_, T> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Frame::Placeholder(_))
    }
}

/// Withholds `content` behind a placeholder until `delay` has elapsed.
///
/// The transition is one way. Dropping the gate before the delay elapses
/// cancels the pending timer.
#[derive(Debug)]
pub struct RevealGate<T> {
    key: GateKey,
    delay: Duration,
    content: T,
    placeholder: Skeleton,
    revealed: Arc<AtomicBool>,
    timer: TaskHandle,
}

impl<T> RevealGate<T> {
    pub fn new(key: GateKey, delay: Duration, content: T) -> Self {
        Self::with_placeholder(key, delay, content, Skeleton::default())
    }

    pub fn with_placeholder(
        key: GateKey,
        delay: Duration,
        content: T,
        placeholder: Skeleton,
    ) -> Self {
        let revealed = Arc::new(AtomicBool::new(false));
        let flag = Arc::downgrade(&revealed);
        let timer = schedule_once(delay, move || {
            if let Some(flag) = flag.upgrade() {
                flag.store(true, Ordering::Release);
                debug!(view = %key.view, refreshed_at = key.refreshed_at, "content revealed");
            }
        });
        Self {
            key,
            delay,
            content,
            placeholder,
            revealed,
            timer,
        }
    }

    pub fn key(&self) -> GateKey {
        self.key
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.load(Ordering::Acquire)
    }

    /// True while the reveal timer is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.timer.is_active()
    }

    pub fn frame(&self) -> Frame<'_, T> {
        if self.is_revealed() {
            Frame::Content(&self.content)
        } else {
            Frame::Placeholder(&self.placeholder)
        }
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    /// Mutable access for view-local state changes; does not affect reveal state.
    pub fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }
}
