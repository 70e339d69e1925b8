//! Plain-text rendering of [`BattleView`] snapshots.
use std::fmt::Write as _;
use std::io::Write;

use client_frontend_core::view_model::{EnemyCard, PseudomapSlot};
use client_frontend_core::{
    BattleView, InteractionMode, RenderHooks, Screen, Targetability, UnitAnimation,
};
use tracing::warn;

/// Draws each refreshed view to `writer` (stderr in production).
pub struct TextRenderer<W> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn emit(&mut self, text: &str) {
        if let Err(error) = self.writer.write_all(text.as_bytes()) {
            warn!(%error, "render output failed");
            return;
        }
        if let Err(error) = self.writer.flush() {
            warn!(%error, "render flush failed");
        }
    }
}

impl<W: Write> RenderHooks for TextRenderer<W> {
    fn refresh(&mut self, view: &BattleView) {
        let text = render_view(view);
        self.emit(&text);
    }

    fn animate(&mut self, unit_id: &str, animation: UnitAnimation) {
        self.emit(&format!("~ {unit_id}: {}\n", animation.as_str()));
    }

    fn damage_popup(&mut self, unit_id: &str, amount: i64) {
        self.emit(&format!("~ {unit_id}: -{amount}\n"));
    }
}

/// Formats a whole view as a text block.
pub fn render_view(view: &BattleView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "==== {} ====", view.header.round_text);
    let _ = writeln!(out, "{}", view.header.message);

    match view.screen {
        Screen::Waiting => return out,
        Screen::Ended(result) => {
            let _ = writeln!(out, "*** {} ***", result.text());
            return out;
        }
        Screen::Battle => {}
    }

    let lanes: Vec<String> = view.pseudomap.slots.iter().map(lane_cell).collect();
    let _ = writeln!(out, "Lane: {}", lanes.join(" "));

    match view.enemies.focused() {
        Some(card) => {
            let _ = writeln!(
                out,
                "Enemy {}/{}: {}",
                view.enemies.cursor + 1,
                view.enemies.cards.len(),
                enemy_line(card)
            );
            if view.enemies.show_navigation {
                let _ = writeln!(out, "  (prev / next to browse)");
            }
        }
        None => {
            let _ = writeln!(out, "{}", view.enemies.placeholder.unwrap_or_default());
        }
    }

    match &view.hero.hero {
        Some(hero) => {
            let status = match view.mode {
                InteractionMode::TargetingEnemy => " [choose a target]",
                InteractionMode::WaitingForResponse => " [waiting]",
                InteractionMode::Idle => "",
            };
            let _ = writeln!(
                out,
                "Hero: {} HP {} ({}%){}",
                hero.name, hero.hp_text, hero.hp_percent, status
            );
        }
        None => {
            let _ = writeln!(out, "{}", view.hero.placeholder.unwrap_or_default());
        }
    }

    out
}

fn lane_cell(slot: &PseudomapSlot) -> String {
    match slot {
        PseudomapSlot::Unit(unit) if unit.is_active => format!("[*{}*]", unit.name),
        PseudomapSlot::Unit(unit) => format!("[{}]", unit.name),
        PseudomapSlot::Empty { .. } => "[ . ]".to_owned(),
    }
}

fn enemy_line(card: &EnemyCard) -> String {
    let mark = match card.targetability {
        Some(Targetability::Targetable) => " <target>",
        Some(Targetability::OutOfRange) => " (out of range)",
        Some(Targetability::WrongType | Targetability::NoCommand) => " (invalid)",
        None => "",
    };
    format!("{} HP {} ({}%){}", card.name, card.hp_text, card.hp_percent, mark)
}

#[cfg(test)]
mod tests {
    use client_frontend_core::{BattleScreen, DetachedBridge, FrontendConfig};
    use serde_json::json;

    use super::*;

    fn pushed_screen() -> BattleScreen<DetachedBridge, TextRenderer<Vec<u8>>> {
        let mut screen = BattleScreen::new(
            FrontendConfig::default(),
            DetachedBridge,
            TextRenderer::new(Vec::new()),
        );
        screen.push(&json!({
            "jsonDataBattle": {
                "Round": 2, "TurnInRound": 3, "BattleState": "Ongoing",
                "BattleMessage": "Tir's turn.", "ActiveUnitID": "tir",
                "Units": [
                    {"id": "tir", "name": "Tir", "type": "Ally", "status": "Active",
                     "stats": {"HP": 30, "MaxHP": 30, "ATK": 8}, "pseudoPos": 0,
                     "commands": [{"commandId": "slash", "commandType": "NormalAttack",
                                   "range": 1, "targetableType": "Enemy"}]},
                    {"id": "orc", "name": "Orc", "type": "Enemy", "status": "Idle",
                     "stats": {"HP": 10, "MaxHP": 20, "ATK": 5}, "pseudoPos": 1, "commands": []}
                ]
            }
        }));
        screen
    }

    #[test]
    fn renders_battle_screen() {
        let screen = pushed_screen();
        let text = render_view(&screen.view());
        assert!(text.contains("==== Round: 2 - Turn: 3 ===="));
        assert!(text.contains("Lane: [*Tir*] [Orc]"));
        assert!(text.contains("Enemy 1/1: Orc HP 10 / 20 (50%)"));
        assert!(text.contains("Hero: Tir HP 30 / 30 (100%)"));
    }

    #[test]
    fn targeting_marks_enemies() {
        let mut screen = pushed_screen();
        screen.tap_hero_panel();
        let text = render_view(&screen.view());
        assert!(text.contains("Orc HP 10 / 20 (50%) <target>"));
        assert!(text.contains("[choose a target]"));
    }

    #[test]
    fn refresh_writes_to_the_writer() {
        let screen = pushed_screen();
        let output = String::from_utf8(screen.renderer().writer().clone()).unwrap();
        assert!(output.contains("Tir's turn."));
    }

    #[test]
    fn waiting_view_is_short() {
        let screen = BattleScreen::new(
            FrontendConfig::default(),
            DetachedBridge,
            TextRenderer::new(Vec::new()),
        );
        let text = render_view(&screen.view());
        assert_eq!(text, "==== Round: - - Turn: - ====\nWaiting for battle data...\n");
    }
}
