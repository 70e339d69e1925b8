//! Service layer: snapshot synchronization and target validation.

pub mod sync;
pub mod targeting;

pub use sync::{BattleStore, StateSynchronizer, SyncOutcome, UpdateScope};
pub use targeting::Targetability;
