//! Wire formats exchanged with the external battle resolver.
//!
//! - [`inbound`]: key-value payloads pushed by the host. Every field is parsed
//!   independently so one malformed field never hides the others.
//! - [`outbound`]: the delimited command string sent back for each player action.
pub mod inbound;
pub mod outbound;

pub use inbound::{
    ASSET_CACHE_KEYS, BATTLE_MESSAGE_KEY, BATTLE_STATE_KEYS, InboundPayload, PayloadError,
};
pub use outbound::{
    COMMAND_PREFIX, FIELD_DELIMITER, OutboundCommand, QUIT_COMMAND_ID, SYSTEM_ACTOR_ID, WireError,
};
