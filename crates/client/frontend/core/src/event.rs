//! Best-effort visual events emitted alongside state changes.
use battle_core::{Unit, UnitKind};

/// Short animation played on a unit portrait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitAnimation {
    /// Attack swing of an allied unit.
    AttackAlly,
    /// Attack swing of an enemy unit.
    AttackEnemy,
    /// Recoil of a unit that took damage.
    Hit,
}

impl UnitAnimation {
    /// Swing animation matching the attacker's side.
    pub fn swing_for(attacker: &Unit) -> Self {
        match attacker.kind {
            UnitKind::Ally => Self::AttackAlly,
            UnitKind::Enemy => Self::AttackEnemy,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AttackAlly => "attack_ally",
            Self::AttackEnemy => "attack_enemy",
            Self::Hit => "hit",
        }
    }
}

/// Visual trigger handed to [`crate::host::RenderHooks`].
///
/// Effects never mutate state and a renderer may drop them freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisualEffect {
    Animate {
        unit_id: String,
        animation: UnitAnimation,
    },
    DamagePopup {
        unit_id: String,
        amount: i64,
    },
}

impl VisualEffect {
    pub fn animate(unit_id: impl Into<String>, animation: UnitAnimation) -> Self {
        Self::Animate {
            unit_id: unit_id.into(),
            animation,
        }
    }

    pub fn damage_popup(unit_id: impl Into<String>, amount: i64) -> Self {
        Self::DamagePopup {
            unit_id: unit_id.into(),
            amount,
        }
    }
}
