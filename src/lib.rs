//! EduCore LMS dashboard shell.
//!
//! A headless controller for the administrative dashboard: view routing,
//! a deferred reveal gate around the active view, a simulated auto-refresh
//! ticker, responsive layout tracking and course catalog filtering. The
//! binary serves it over HTTP with actix-web.

pub mod clock;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod layout;
pub mod meta;
pub mod model;
pub mod refresh;
pub mod reveal;
pub mod scheduler;
pub mod server;
pub mod shell;
pub mod view;
pub mod views;

pub use config::{AppConfig, ShellConfig, UnknownViewPolicy};
pub use data::Fixtures;
pub use error::{ConfigError, FixtureError, ShellError};
pub use shell::{FrameBody, Shell, ShellFrame};
pub use view::ViewId;
