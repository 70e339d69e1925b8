//! Canonical battle snapshot as pushed by the external resolver.
//!
//! A [`BattleState`] is always replaced wholesale; the client never patches
//! individual fields. Field names follow the resolver's JSON keys so a value
//! survives a serialize/deserialize round trip unchanged.
mod action;
mod command;
mod unit;

use serde::{Deserialize, Serialize};

pub use action::{ActionKind, LastAction};
pub use command::{Command, CommandError, CommandType, TargetableType};
pub use unit::{Unit, UnitKind, UnitStats, UnitStatus};

/// Overall battle outcome as decided by the resolver.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
pub enum BattlePhase {
    #[default]
    Ongoing,
    Win,
    Lose,
}

/// Full battle snapshot.
///
/// # Invariants (owned by the resolver)
///
/// - At most one unit carries [`UnitStatus::Active`].
/// - `active_unit_id` names a non-defeated unit; otherwise it is stale and
///   [`BattleState::active_unit`] reports nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    #[serde(rename = "Round", default)]
    pub round: u32,

    #[serde(rename = "TurnInRound", default)]
    pub turn_in_round: u32,

    #[serde(rename = "BattleState", default)]
    pub phase: BattlePhase,

    #[serde(rename = "BattleMessage", default)]
    pub message: String,

    #[serde(
        rename = "ActiveUnitID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub active_unit_id: Option<String>,

    #[serde(rename = "Units", default)]
    pub units: Vec<Unit>,

    /// Descriptor of the action the resolver just applied, if any.
    #[serde(
        rename = "lastActionDetails",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_action: Option<LastAction>,
}

impl BattleState {
    /// Looks up a unit by id.
    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Returns the active unit, or `None` when the id is missing or stale.
    pub fn active_unit(&self) -> Option<&Unit> {
        let id = self.active_unit_id.as_deref()?;
        self.unit(id).filter(|unit| !unit.is_defeated())
    }

    /// Returns the active unit when it is a living ally the player controls.
    pub fn active_hero(&self) -> Option<&Unit> {
        self.active_unit().filter(|unit| unit.kind == UnitKind::Ally)
    }

    /// Iterates living units in snapshot order.
    pub fn living_units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|unit| !unit.is_defeated())
    }

    /// Iterates living units of one side in snapshot order.
    pub fn living_units_of(&self, kind: UnitKind) -> impl Iterator<Item = &Unit> {
        self.living_units().filter(move |unit| unit.kind == kind)
    }

    pub const fn is_ongoing(&self) -> bool {
        matches!(self.phase, BattlePhase::Ongoing)
    }
}
