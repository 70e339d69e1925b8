//! Client-side battle screen: state synchronization and player interaction.
//!
//! Houses the snapshot synchronizer, the interaction controller, the host
//! capability traits, and the view model that every host adapter renders.
pub mod config;
pub mod controller;
pub mod cursor;
pub mod event;
pub mod format;
pub mod frontend;
pub mod host;
pub mod message;
pub mod screen;
pub mod services;
pub mod view_model;

pub use config::{FrontendConfig, GestureConfig, LayoutConfig, MessageConfig};
pub use controller::{InteractionController, InteractionMode, QuitOutcome, SelectError};
pub use cursor::DisplayCursor;
pub use event::{UnitAnimation, VisualEffect};
pub use frontend::Frontend;
pub use host::{BridgeError, Capability, DetachedBridge, HostBridge, NullRenderer, RenderHooks};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use screen::BattleScreen;
pub use services::{BattleStore, StateSynchronizer, SyncOutcome, Targetability, UpdateScope, targeting};
pub use view_model::{BattleResult, BattleView, Screen};
