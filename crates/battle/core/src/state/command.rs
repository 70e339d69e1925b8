use std::fmt;

use serde::{Deserialize, Serialize};

use super::unit::UnitKind;

/// Category of a unit command.
///
/// Only `NormalAttack` drives client behaviour; every other category is kept
/// verbatim so snapshots round-trip unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CommandType {
    NormalAttack,
    Other(String),
}

impl From<String> for CommandType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "NormalAttack" => Self::NormalAttack,
            _ => Self::Other(raw),
        }
    }
}

impl From<CommandType> for String {
    fn from(command_type: CommandType) -> Self {
        match command_type {
            CommandType::NormalAttack => "NormalAttack".to_owned(),
            CommandType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NormalAttack => f.write_str("NormalAttack"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Side a command may be aimed at.
///
/// Values other than the two sides are kept verbatim and never match a unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetableType {
    Side(UnitKind),
    Other(String),
}

impl TargetableType {
    pub const ALLY: Self = Self::Side(UnitKind::Ally);
    pub const ENEMY: Self = Self::Side(UnitKind::Enemy);

    /// Returns true when a unit of `kind` is a valid target.
    pub fn accepts(&self, kind: UnitKind) -> bool {
        matches!(self, Self::Side(side) if *side == kind)
    }
}

impl From<String> for TargetableType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Ally" => Self::ALLY,
            "Enemy" => Self::ENEMY,
            _ => Self::Other(raw),
        }
    }
}

impl From<TargetableType> for String {
    fn from(targetable: TargetableType) -> Self {
        match targetable {
            TargetableType::Side(kind) => kind.as_ref().to_owned(),
            TargetableType::Other(raw) => raw,
        }
    }
}

/// A command a unit may issue, as advertised by the resolver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    #[serde(rename = "commandId")]
    pub command_id: String,

    #[serde(rename = "commandType")]
    pub command_type: CommandType,

    /// Maximum absolute lane distance to a valid target.
    #[serde(default)]
    pub range: f64,

    #[serde(rename = "targetableType")]
    pub targetable_type: TargetableType,
}

impl Command {
    pub fn new(
        command_id: impl Into<String>,
        command_type: CommandType,
        range: f64,
        targetable_type: TargetableType,
    ) -> Self {
        Self {
            command_id: command_id.into(),
            command_type,
            range,
            targetable_type,
        }
    }
}

/// Failures resolving a command on a unit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unit {unit} has no {command_type} command")]
    NotDefined {
        unit: String,
        command_type: CommandType,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_types_survive_serde() {
        let json = r#"{"commandId":"heal_1","commandType":"Heal","range":2.0,"targetableType":"Ally"}"#;
        let command: Command = serde_json::from_str(json).unwrap();
        assert_eq!(command.command_type, CommandType::Other("Heal".into()));
        assert_eq!(serde_json::to_string(&command).unwrap(), json);
    }

    #[test]
    fn normal_attack_is_recognized() {
        let command_type: CommandType = "NormalAttack".to_owned().into();
        assert_eq!(command_type, CommandType::NormalAttack);
        assert_eq!(command_type.to_string(), "NormalAttack");
    }

    #[test]
    fn unexpected_targetable_type_is_kept_and_matches_nobody() {
        let json = r#"{"commandId":"focus","commandType":"Buff","range":0.5,"targetableType":"Self"}"#;
        let command: Command = serde_json::from_str(json).unwrap();
        assert_eq!(command.targetable_type, TargetableType::Other("Self".into()));
        assert!(!command.targetable_type.accepts(UnitKind::Ally));
        assert!(!command.targetable_type.accepts(UnitKind::Enemy));
        assert_eq!(command.range, 0.5);
        assert_eq!(serde_json::to_string(&command).unwrap(), json);
    }

    #[test]
    fn side_targets_match_their_kind() {
        let enemy: TargetableType = "Enemy".to_owned().into();
        assert_eq!(enemy, TargetableType::ENEMY);
        assert!(enemy.accepts(UnitKind::Enemy));
        assert!(!enemy.accepts(UnitKind::Ally));
    }
}
