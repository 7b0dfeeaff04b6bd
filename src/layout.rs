use serde::Deserialize;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info};

use crate::scheduler::TaskHandle;

/// Widths strictly below this are rendered in compact mode.
pub const COMPACT_BREAKPOINT_PX: u32 = 768;

const SIGNAL_CAPACITY: usize = 16;

pub fn is_compact(width: u32) -> bool {
    width < COMPACT_BREAKPOINT_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportSignal {
    Resize,
    #[serde(rename = "orientationchange")]
    OrientationChange,
}

struct ViewportInner {
    width: AtomicU32,
    resize: broadcast::Sender<u32>,
    orientation: broadcast::Sender<u32>,
}

/// The host viewport: current width plus resize and orientation-change signals.
#[derive(Clone)]
pub struct Viewport {
    inner: Arc<ViewportInner>,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        let (resize, _) = broadcast::channel(SIGNAL_CAPACITY);
        let (orientation, _) = broadcast::channel(SIGNAL_CAPACITY);
        Self {
            inner: Arc::new(ViewportInner {
                width: AtomicU32::new(width),
                resize,
                orientation,
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.inner.width.load(Ordering::Acquire)
    }

    /// Records the new width and notifies listeners of `signal`.
    pub fn emit(&self, signal: ViewportSignal, width: u32) {
        self.inner.width.store(width, Ordering::Release);
        let sender = match signal {
            ViewportSignal::Resize => &self.inner.resize,
            ViewportSignal::OrientationChange => &self.inner.orientation,
        };
        // No listeners is fine; the width is still recorded.
        let _ = sender.send(width);
    }

    pub fn resize(&self, width: u32) {
        self.emit(ViewportSignal::Resize, width);
    }

    pub fn rotate(&self, width: u32) {
        self.emit(ViewportSignal::OrientationChange, width);
    }

    /// Number of live subscriptions across both signals.
    pub fn listener_count(&self) -> usize {
        self.inner.resize.receiver_count() + self.inner.orientation.receiver_count()
    }
}

/// Tracks the compact-mode flag for a viewport.
pub struct ResponsiveMonitor {
    compact: watch::Receiver<bool>,
    listener: TaskHandle,
}

impl ResponsiveMonitor {
    /// Computes the initial flag synchronously, then follows both signals.
    pub fn attach(viewport: &Viewport) -> Self {
        let initial = is_compact(viewport.width());
        let (tx, rx) = watch::channel(initial);
        let mut resize = viewport.inner.resize.subscribe();
        let mut orientation = viewport.inner.orientation.subscribe();
        let source = viewport.clone();

        let task = tokio::spawn(async move {
            loop {
                let received = tokio::select! {
                    r = resize.recv() => r,
                    r = orientation.recv() => r,
                };
                let width = match received {
                    Ok(width) => width,
                    // Missed signals only matter for their final width.
                    Err(broadcast::error::RecvError::Lagged(_)) => source.width(),
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                let compact = is_compact(width);
                let changed = tx.send_if_modified(|current| {
                    let changed = *current != compact;
                    *current = compact;
                    changed
                });
                if changed {
                    info!(width, compact, "layout mode changed");
                } else {
                    debug!(width, compact, "viewport signal");
                }
            }
        });

        Self {
            compact: rx,
            listener: TaskHandle::from(task),
        }
    }

    pub fn is_compact(&self) -> bool {
        *self.compact.borrow()
    }

    /// Receiver that is notified whenever the flag flips.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.compact.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_active()
    }

    /// Detaches from both signals and waits for the subscriptions to close.
    pub async fn detach(self) {
        self.listener.shutdown().await;
    }
}
