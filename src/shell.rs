//! Top-level shell controller.
//!
//! The shell owns the active view, the reveal gate wrapped around it, the
//! refresh ticker and the responsive monitor. Every timer it starts is
//! cancelled when the shell is shut down or dropped.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::config::{ShellConfig, UnknownViewPolicy};
use crate::data::Fixtures;
use crate::error::{Result, ZeroPeriod};
use crate::layout::{ResponsiveMonitor, Viewport};
use crate::meta::HeadMeta;
use crate::refresh::{RefreshStatus, RefreshTicker};
use crate::reveal::{Frame, GateKey, RevealGate, Skeleton};
use crate::view::{navigation, NavGroup, ViewId};
use crate::views::{ViewAction, ViewContent, ViewInstance};

/// Everything a client needs to draw the shell at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct ShellFrame {
    pub view: ViewId,
    pub key: GateKey,
    pub compact: bool,
    pub navigation: Vec<NavGroup>,
    pub refresh: RefreshStatus,
    pub body: FrameBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FrameBody {
    Loading { skeleton: Skeleton },
    Ready { content: ViewContent },
}

impl FrameBody {
    pub fn is_loading(&self) -> bool {
        matches!(self, FrameBody::Loading { .. })
    }
}

struct ShellState {
    config: ShellConfig,
    fixtures: Arc<Fixtures>,
    gate: RevealGate<ViewInstance>,
    last_refresh: i64,
    compact: watch::Receiver<bool>,
    head: HeadMeta,
}

impl ShellState {
    fn is_compact(&self) -> bool {
        *self.compact.borrow()
    }

    fn current_view(&self) -> ViewId {
        self.gate.content().id()
    }

    /// Replaces the gate with a fresh one for `view` at the current refresh
    /// timestamp. The old gate's pending reveal is cancelled on drop.
    fn remount(&mut self, view: ViewId) {
        let delay = self.config.reveal_delay_for(self.is_compact());
        self.gate = RevealGate::new(
            GateKey::new(view, self.last_refresh),
            delay,
            ViewInstance::fresh(view),
        );
    }
}

pub struct Shell {
    state: Arc<Mutex<ShellState>>,
    ticker: RefreshTicker,
    monitor: ResponsiveMonitor,
    viewport: Viewport,
}

impl Shell {
    /// Starts the shell on `dashboard`. Must be called inside a tokio runtime.
    ///
    /// Fails with [`ShellError::Schedule`](crate::ShellError::Schedule) when
    /// the refresh interval is zero.
    pub fn start(
        config: ShellConfig,
        fixtures: Arc<Fixtures>,
        viewport: Viewport,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let interval = config.refresh_interval;
        if interval.is_zero() {
            return Err(ZeroPeriod.into());
        }

        let monitor = ResponsiveMonitor::attach(&viewport);
        let compact = monitor.subscribe();

        let mut head = HeadMeta::new();
        head.ensure_platform_meta();

        let last_refresh = clock.now_ms();
        let delay = config.reveal_delay_for(*compact.borrow());
        let view = ViewId::default();
        let gate = RevealGate::new(
            GateKey::new(view, last_refresh),
            delay,
            ViewInstance::fresh(view),
        );
        let state = Arc::new(Mutex::new(ShellState {
            config,
            fixtures,
            gate,
            last_refresh,
            compact,
            head,
        }));

        let target = Arc::downgrade(&state);
        let ticker = RefreshTicker::starting_from(clock, interval, last_refresh, move |stamp| {
            if let Some(state) = target.upgrade() {
                on_refresh(&state, stamp);
            }
        })?;

        info!(
            view = %ViewId::default(),
            compact = monitor.is_compact(),
            "shell started"
        );

        Ok(Self {
            state,
            ticker,
            monitor,
            viewport,
        })
    }

    fn lock(&self) -> MutexGuard<'_, ShellState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn current_view(&self) -> ViewId {
        self.lock().current_view()
    }

    /// Makes `view` the active view. Selecting the active view again keeps
    /// its gate and local state.
    pub fn select_view(&self, view: ViewId) {
        let mut state = self.lock();
        let from = state.current_view();
        if from == view {
            debug!(view = %view, "view already active");
            return;
        }
        state.remount(view);
        info!(from = %from, to = %view, "view selected");
    }

    /// Selects a view by its wire identifier, applying the configured
    /// policy to identifiers outside the enumeration.
    pub fn select_view_str(&self, raw: &str) -> Result<ViewId> {
        let view = match raw.parse::<ViewId>() {
            Ok(view) => view,
            Err(err) => match self.lock().config.unknown_view_policy {
                UnknownViewPolicy::Strict => return Err(err),
                UnknownViewPolicy::Fallback => {
                    warn!(requested = raw, "unknown view, falling back to dashboard");
                    ViewId::default()
                }
            },
        };
        self.select_view(view);
        Ok(view)
    }

    /// Forwards a view-local action to the active view.
    pub fn apply(&self, action: ViewAction) -> Result<()> {
        let mut state = self.lock();
        let name = action.name();
        state.gate.content_mut().apply(action)?;
        debug!(action = name, view = %state.current_view(), "view action applied");
        Ok(())
    }

    pub fn frame(&self) -> ShellFrame {
        let state = self.lock();
        let view = state.current_view();
        let compact = state.is_compact();
        let body = match state.gate.frame() {
            Frame::Placeholder(skeleton) => FrameBody::Loading {
                skeleton: skeleton.clone(),
            },
            Frame::Content(instance) => FrameBody::Ready {
                content: instance.render(&state.fixtures),
            },
        };
        ShellFrame {
            view,
            key: state.gate.key(),
            compact,
            navigation: navigation(view, compact),
            refresh: self.ticker.status(),
            body,
        }
    }

    pub fn gate_key(&self) -> GateKey {
        self.lock().gate.key()
    }

    pub fn is_revealed(&self) -> bool {
        self.lock().gate.is_revealed()
    }

    pub fn last_refresh(&self) -> i64 {
        self.lock().last_refresh
    }

    pub fn refresh_status(&self) -> RefreshStatus {
        self.ticker.status()
    }

    pub fn is_compact(&self) -> bool {
        self.monitor.is_compact()
    }

    /// The view instance currently behind the gate, revealed or not.
    pub fn view_instance(&self) -> ViewInstance {
        self.lock().gate.content().clone()
    }

    pub fn head(&self) -> HeadMeta {
        self.lock().head.clone()
    }

    pub fn fixtures(&self) -> Arc<Fixtures> {
        self.lock().fixtures.clone()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Stops every timer and detaches from the viewport.
    pub async fn shutdown(mut self) {
        self.ticker.stop();
        self.monitor.detach().await;
        info!("shell stopped");
    }
}

fn on_refresh(state: &Mutex<ShellState>, stamp: i64) {
    let mut guard = match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    guard.last_refresh = stamp;
    let view = guard.current_view();
    guard.remount(view);
    debug!(view = %view, refreshed_at = stamp, "view remounted");
}
