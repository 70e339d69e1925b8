#![allow(dead_code)]

use std::io;

use battle_core::OutboundCommand;
use client_frontend_core::{
    BattleScreen, BattleView, BridgeError, Capability, FrontendConfig, HostBridge, RenderHooks,
    UnitAnimation,
};
use serde_json::{Value, json};

/// Bridge that records every command and optionally supports closing.
#[derive(Default)]
pub struct RecordingBridge {
    pub sent: Vec<OutboundCommand>,
    pub closes: usize,
    pub can_close: bool,
    /// Close is offered but the transport fails.
    pub close_fails: bool,
}

impl HostBridge for RecordingBridge {
    fn send_command(&mut self, command: &OutboundCommand) -> Result<(), BridgeError> {
        self.sent.push(command.clone());
        Ok(())
    }

    fn close_screen(&mut self) -> Result<(), BridgeError> {
        if self.close_fails {
            return Err(BridgeError::Transport(io::Error::other("host pipe closed")));
        }
        if !self.can_close {
            return Err(BridgeError::Unavailable(Capability::CloseScreen));
        }
        self.closes += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub refreshes: usize,
    pub last_view: Option<BattleView>,
    pub animations: Vec<(String, UnitAnimation)>,
    pub popups: Vec<(String, i64)>,
}

impl RenderHooks for RecordingRenderer {
    fn refresh(&mut self, view: &BattleView) {
        self.refreshes += 1;
        self.last_view = Some(view.clone());
    }

    fn animate(&mut self, unit_id: &str, animation: UnitAnimation) {
        self.animations.push((unit_id.to_owned(), animation));
    }

    fn damage_popup(&mut self, unit_id: &str, amount: i64) {
        self.popups.push((unit_id.to_owned(), amount));
    }
}

pub type TestScreen = BattleScreen<RecordingBridge, RecordingRenderer>;

pub fn screen() -> TestScreen {
    BattleScreen::new(
        FrontendConfig::default(),
        RecordingBridge::default(),
        RecordingRenderer::default(),
    )
}

pub fn unit(id: &str, name: &str, kind: &str, status: &str, pos: Option<i32>) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": kind,
        "status": status,
        "stats": { "HP": 20, "MaxHP": 20, "ATK": 5 },
        "pseudoPos": pos,
        "commands": []
    })
}

pub fn hero(pos: i32, range: u32) -> Value {
    let mut hero = unit("hero", "Tir", "Ally", "Active", Some(pos));
    hero["commands"] = json!([{
        "commandId": "tir_slash",
        "commandType": "NormalAttack",
        "range": range,
        "targetableType": "Enemy"
    }]);
    hero
}

pub fn enemy(id: &str, pos: i32) -> Value {
    unit(id, &id.to_uppercase(), "Enemy", "Idle", Some(pos))
}

pub fn battle(units: Vec<Value>) -> Value {
    json!({
        "Round": 1,
        "TurnInRound": 1,
        "BattleState": "Ongoing",
        "BattleMessage": "Tir's turn.",
        "ActiveUnitID": "hero",
        "Units": units
    })
}

pub fn push_battle(screen: &mut TestScreen, battle: Value) {
    let outcome = screen.push(&json!({ "jsonDataBattle": battle }));
    assert!(outcome.battle_replaced());
}
