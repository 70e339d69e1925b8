//! Snapshot types and wire codecs shared by every battle-screen client.
//!
//! `battle-core` mirrors the state an external resolver pushes to the screen
//! and defines the two wire formats crossing that boundary: the inbound
//! key-value payload and the outbound player command string. Nothing here
//! evaluates battle rules; every value originates from the resolver.
pub mod assets;
pub mod protocol;
pub mod state;

pub use assets::{AssetCache, PLACEHOLDER_ALLY_PORTRAIT, PLACEHOLDER_ENEMY_PORTRAIT};
pub use protocol::{
    BATTLE_MESSAGE_KEY, COMMAND_PREFIX, FIELD_DELIMITER, InboundPayload, OutboundCommand,
    PayloadError, QUIT_COMMAND_ID, SYSTEM_ACTOR_ID, WireError,
};
pub use state::{
    ActionKind, BattlePhase, BattleState, Command, CommandError, CommandType, LastAction,
    TargetableType, Unit, UnitKind, UnitStats, UnitStatus,
};
