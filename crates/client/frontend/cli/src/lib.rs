//! Line-oriented stdio host adapter for the battle screen.
//!
//! The adapter plays the role of the embedding host: it reads inbound pushes
//! and player gestures from stdin, prints outbound commands to stdout, and
//! draws each refreshed view as text on stderr.
//!
//! # Architecture
//!
//! `CliFrontend` owns a single [`client_frontend_core::BattleScreen`] and
//! feeds it one event at a time:
//! - [`StdioBridge`] implements the host bridge over stdout
//! - [`TextRenderer`] implements the render hooks over stderr

mod app;
mod bridge;
mod config;
pub mod input;
pub mod logging;
pub mod render;

pub use app::CliFrontend;
pub use bridge::{CLOSE_LINE, StdioBridge};
pub use config::{CliConfig, HostConfig, LoggingConfig};
pub use render::TextRenderer;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
