use serde::{Deserialize, Serialize};

use super::command::{Command, CommandError, CommandType};

/// Side a unit fights on.
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
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum UnitKind {
    #[default]
    Ally,
    Enemy,
}

/// Turn status reported by the resolver.
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
pub enum UnitStatus {
    #[default]
    Idle,
    Active,
    EndTurn,
    Defeated,
}

/// Numeric stats mirrored from the resolver.
///
/// The resolver sends plain JSON numbers, fractional values included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    #[serde(rename = "HP", default)]
    pub hp: f64,
    #[serde(rename = "MaxHP", default)]
    pub max_hp: f64,
    #[serde(rename = "ATK", default)]
    pub attack: f64,
}

/// A combatant in the battle snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: UnitKind,

    #[serde(default)]
    pub status: UnitStatus,

    #[serde(default)]
    pub stats: UnitStats,

    /// Relative lane coordinate. The resolver clears it once a unit is defeated.
    #[serde(rename = "pseudoPos", default)]
    pub pseudo_pos: Option<i32>,

    #[serde(
        rename = "portraitRef",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub portrait_ref: Option<String>,

    #[serde(rename = "turnOrder", default, skip_serializing_if = "Option::is_none")]
    pub turn_order: Option<i32>,

    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Unit {
    pub fn is_defeated(&self) -> bool {
        self.status == UnitStatus::Defeated
    }

    /// Returns the first command of the requested type.
    pub fn first_command_of(&self, command_type: &CommandType) -> Result<&Command, CommandError> {
        self.commands
            .iter()
            .find(|command| &command.command_type == command_type)
            .ok_or_else(|| CommandError::NotDefined {
                unit: self.id.clone(),
                command_type: command_type.clone(),
            })
    }

    /// Shorthand for the basic attack every playable hero is expected to carry.
    pub fn normal_attack(&self) -> Result<&Command, CommandError> {
        self.first_command_of(&CommandType::NormalAttack)
    }

    /// Signed lane offset from `self` to `other`, if both have a lane.
    ///
    /// Widened to `i64` so any pair of `i32` lanes fits.
    pub fn lane_offset_to(&self, other: &Unit) -> Option<i64> {
        Some(i64::from(other.pseudo_pos?) - i64::from(self.pseudo_pos?))
    }

    /// Current HP as a percentage in `0..=100`.
    ///
    /// A unit without max HP is reported as full.
    pub fn hp_percentage(&self) -> u32 {
        if self.stats.max_hp.is_nan() || self.stats.max_hp <= 0.0 {
            return 100;
        }
        let ratio = (self.stats.hp / self.stats.max_hp).clamp(0.0, 1.0);
        (ratio * 100.0).floor() as u32
    }
}
