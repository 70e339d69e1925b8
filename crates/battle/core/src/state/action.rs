use serde::{Deserialize, Deserializer, Serialize};

/// Kind of action the resolver reports having applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    NormalAttack,
    UnitDefeated,
    Other(String),
}

impl From<String> for ActionKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "NormalAttack" => Self::NormalAttack,
            "UnitDefeated" => Self::UnitDefeated,
            _ => Self::Other(raw),
        }
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::NormalAttack => "NormalAttack".to_owned(),
            ActionKind::UnitDefeated => "UnitDefeated".to_owned(),
            ActionKind::Other(raw) => raw,
        }
    }
}

/// Descriptor of the most recent resolved action, used only for animation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastAction {
    #[serde(rename = "attackerId", default, skip_serializing_if = "Option::is_none")]
    pub attacker_id: Option<String>,

    #[serde(rename = "targetId", default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,

    #[serde(rename = "damageDealt", default, deserialize_with = "whole_number")]
    pub damage_dealt: i64,

    #[serde(rename = "actionType")]
    pub kind: ActionKind,
}

/// Accepts any JSON number; fractional amounts are rounded.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = f64::deserialize(deserializer)?;
    Ok(amount.round() as i64)
}
