//! Merges externally pushed snapshots into the canonical battle store.
//!
//! # Architecture
//!
//! - `UpdateScope`: bitflags recording which parts of the store a push touched
//! - `StateSynchronizer`: stateless service applying one [`InboundPayload`]
//!
//! Each payload field is applied independently. A field that fails to decode
//! is logged and skipped, and the value already in the store is kept. The
//! synchronizer never touches interaction state; callers reset it when
//! [`SyncOutcome::battle_replaced`] reports a new snapshot.

use battle_core::{ActionKind, AssetCache, BattleState, InboundPayload, LastAction};
use bitflags::bitflags;
use serde_json::Value;
use tracing::{debug, warn};

use crate::event::{UnitAnimation, VisualEffect};

bitflags! {
    /// Tracks which parts of the store a push replaced.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UpdateScope: u8 {
        /// The battle snapshot was replaced.
        const BATTLE  = 0b001;

        /// The asset cache was replaced.
        const ASSETS  = 0b010;

        /// A standalone message must be shown.
        const MESSAGE = 0b100;
    }
}

impl Default for UpdateScope {
    fn default() -> Self {
        Self::empty()
    }
}

/// Latest accepted snapshot and asset cache.
#[derive(Clone, Debug, Default)]
pub struct BattleStore {
    battle: Option<BattleState>,
    assets: AssetCache,
}

impl BattleStore {
    pub fn battle(&self) -> Option<&BattleState> {
        self.battle.as_ref()
    }

    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    pub fn has_battle(&self) -> bool {
        self.battle.is_some()
    }
}

/// Result of applying one push.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyncOutcome {
    pub scope: UpdateScope,
    /// Visual triggers to play before the refresh, in order.
    pub effects: Vec<VisualEffect>,
    /// Standalone message to show after the refresh.
    pub message: Option<String>,
    /// Whether the view must be redrawn.
    pub refresh: bool,
}

impl SyncOutcome {
    /// Returns true when a new battle snapshot was accepted.
    pub fn battle_replaced(&self) -> bool {
        self.scope.contains(UpdateScope::BATTLE)
    }
}

/// Stateless service for applying inbound pushes to a [`BattleStore`].
pub struct StateSynchronizer;

impl StateSynchronizer {
    /// Applies a raw JSON push. A value that is not an object changes nothing.
    pub fn apply_value(store: &mut BattleStore, value: &Value) -> SyncOutcome {
        match InboundPayload::from_value(value) {
            Ok(payload) => Self::apply(store, payload),
            Err(error) => {
                warn!(%error, "ignoring inbound push");
                SyncOutcome::default()
            }
        }
    }

    /// Applies a decoded push.
    ///
    /// The asset cache is applied before the battle state so a refresh
    /// triggered by a new snapshot already sees the new portraits.
    pub fn apply(store: &mut BattleStore, payload: InboundPayload) -> SyncOutcome {
        let mut outcome = SyncOutcome::default();

        if let Some(result) = payload.asset_cache {
            match result {
                Ok(assets) => {
                    debug!(
                        portraits = assets.portraits.len(),
                        "asset cache replaced"
                    );
                    store.assets = assets;
                    outcome.scope |= UpdateScope::ASSETS;
                }
                Err(error) => warn!(%error, "keeping previous asset cache"),
            }
        }

        if let Some(result) = payload.battle_state {
            match result {
                Ok(battle) => {
                    debug!(
                        round = battle.round,
                        turn = battle.turn_in_round,
                        phase = %battle.phase,
                        units = battle.units.len(),
                        "battle state replaced"
                    );
                    if let Some(action) = &battle.last_action {
                        outcome.effects = action_effects(&battle, action);
                    }
                    store.battle = Some(battle);
                    outcome.scope |= UpdateScope::BATTLE;
                }
                Err(error) => warn!(%error, "keeping previous battle state"),
            }
        }

        outcome.refresh = outcome.battle_replaced()
            || (outcome.scope.contains(UpdateScope::ASSETS) && store.has_battle());

        if let Some(message) = payload.message {
            let repeats_snapshot = outcome.battle_replaced()
                && store
                    .battle()
                    .is_some_and(|battle| battle.message == message);
            if !repeats_snapshot {
                outcome.scope |= UpdateScope::MESSAGE;
                outcome.message = Some(message);
            }
        }

        outcome
    }
}

/// Visual triggers for the action the resolver just applied.
fn action_effects(battle: &BattleState, action: &LastAction) -> Vec<VisualEffect> {
    let mut effects = Vec::new();

    if action.kind == ActionKind::NormalAttack {
        let attacker = action
            .attacker_id
            .as_deref()
            .and_then(|id| battle.unit(id));
        match attacker {
            Some(attacker) => effects.push(VisualEffect::animate(
                attacker.id.clone(),
                UnitAnimation::swing_for(attacker),
            )),
            None => debug!(attacker = ?action.attacker_id, "attacker not in snapshot"),
        }
    }

    if action.damage_dealt > 0 {
        if let Some(target) = action.target_id.as_deref() {
            effects.push(VisualEffect::animate(target, UnitAnimation::Hit));
            effects.push(VisualEffect::damage_popup(target, action.damage_dealt));
        }
    }

    effects
}
