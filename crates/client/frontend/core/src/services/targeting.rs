//! Target validation mirrored from snapshot data.
//!
//! The resolver has the final word on every action; these checks only decide
//! whether a tap is worth sending and how enemies are highlighted while the
//! player is choosing a target.

use battle_core::{BattleState, Command, Unit, UnitKind};

/// Classification of one candidate target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Targetability {
    /// Within range and of the type the command accepts.
    Targetable,
    /// Lane distance exceeds the command range, or the target has no lane.
    OutOfRange,
    /// Target side does not match the command's targetable type.
    WrongType,
    /// The acting hero has no command to target with.
    NoCommand,
}

impl Targetability {
    pub const fn is_targetable(&self) -> bool {
        matches!(self, Self::Targetable)
    }
}

/// Absolute lane distance between two units, if both are on the lane.
pub fn lane_distance(from: &Unit, to: &Unit) -> Option<u64> {
    from.lane_offset_to(to).map(i64::unsigned_abs)
}

/// Applies the range/type rule of `command` issued by `actor` against `target`.
pub fn classify(actor: &Unit, command: &Command, target: &Unit) -> Targetability {
    if !command.targetable_type.accepts(target.kind) {
        return Targetability::WrongType;
    }

    match lane_distance(actor, target) {
        Some(distance) if distance as f64 <= command.range => Targetability::Targetable,
        _ => Targetability::OutOfRange,
    }
}

/// Targetability of every living enemy, in display order, for `hero`'s basic attack.
pub fn enemy_overlay(state: &BattleState, hero: &Unit) -> Vec<(String, Targetability)> {
    let command = hero.normal_attack().ok();
    state
        .living_units_of(UnitKind::Enemy)
        .map(|enemy| {
            let targetability = command.map_or(Targetability::NoCommand, |command| {
                classify(hero, command, enemy)
            });
            (enemy.id.clone(), targetability)
        })
        .collect()
}
