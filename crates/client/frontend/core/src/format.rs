//! Player-facing text for the message area and derived views.

use battle_core::Unit;

pub const WAITING_FOR_DATA: &str = "Waiting for battle data...";
pub const EMPTY_MESSAGE: &str = "---";
pub const NO_ENEMIES: &str = "No enemies remaining!";
pub const NO_ACTIVE_ALLY: &str = "No active ally.";
pub const CANNOT_ATTACK: &str = "Cannot attack!";
pub const QUITTING: &str = "Quitting...";

/// Message shown once an attack command has been sent.
pub fn attack_message(hero: &Unit, target: &Unit) -> String {
    format!("{} attacks {}...", hero.name, target.name)
}

pub fn out_of_range_message(target: &Unit) -> String {
    format!("{} is out of range!", target.name)
}

pub fn cannot_target_message(target: &Unit) -> String {
    format!("{} cannot be targeted!", target.name)
}

/// Header line. Zero counters render as `-`.
pub fn round_header(round: u32, turn: u32) -> String {
    format!("Round: {} - Turn: {}", counter(round), counter(turn))
}

pub fn hp_text(unit: &Unit) -> String {
    format!("{} / {}", unit.stats.hp, unit.stats.max_hp)
}

fn counter(value: u32) -> String {
    if value == 0 {
        "-".to_owned()
    } else {
        value.to_string()
    }
}
