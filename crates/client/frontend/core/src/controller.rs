//! Interaction controller: transient UI state and gesture handling.
//!
//! The controller owns everything the resolver does not know about: the
//! current interaction mode, the enemy viewer cursor and the quit latch.
//! Validation mirrors the snapshot's range/type data so obviously invalid
//! taps never leave the client; the resolver still decides every outcome.

use battle_core::{BattleState, CommandError, OutboundCommand, UnitKind, WireError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cursor::DisplayCursor;
use crate::event::{UnitAnimation, VisualEffect};
use crate::format;
use crate::host::{BridgeError, HostBridge, RenderHooks, dispatch_effect};
use crate::message::MessageLog;
use crate::services::targeting::{self, Targetability};

/// What a tap currently means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum InteractionMode {
    /// Taps on enemies only page the viewer.
    #[default]
    Idle,
    /// The active hero is choosing a target for its basic attack.
    TargetingEnemy,
    /// A command was sent; input waits for the next push.
    WaitingForResponse,
}

/// Reasons a target tap produced no command.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("target selection requires targeting mode, current mode is {0}")]
    NotTargeting(InteractionMode),

    #[error("no active hero to act")]
    NoActiveHero,

    #[error("unit {0} is not in the current snapshot")]
    UnknownTarget(String),

    #[error("unit {0} is already defeated")]
    TargetDefeated(String),

    #[error(transparent)]
    NoAttack(#[from] CommandError),

    #[error("unit {0} is out of range")]
    OutOfRange(String),

    #[error("unit {0} cannot be targeted by this command")]
    WrongType(String),

    #[error("attack command cannot be encoded")]
    Encode(#[from] WireError),
}

/// Result of a quit request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuitOutcome {
    /// The host dismissed the screen itself.
    Closed,
    /// The quit command was emitted; `delivered` is false when the bridge dropped it.
    CommandSent {
        command: OutboundCommand,
        delivered: bool,
    },
    /// A quit is already pending for this snapshot.
    Locked,
    /// The host close call failed; quitting may be retried.
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    mode: InteractionMode,
    cursor: DisplayCursor,
    quit_locked: bool,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub const fn cursor(&self) -> DisplayCursor {
        self.cursor
    }

    pub const fn is_quit_locked(&self) -> bool {
        self.quit_locked
    }

    /// Resets transient state after a new snapshot was accepted.
    pub fn on_state_pushed(&mut self, living_enemies: usize) {
        if self.mode != InteractionMode::Idle {
            info!(from = %self.mode, "interaction mode reset by state push");
        }
        self.mode = InteractionMode::Idle;
        self.quit_locked = false;
        self.cursor.clamp(living_enemies);
    }

    /// Toggles between idle and targeting when the active hero is focused.
    ///
    /// Returns true when the mode changed.
    pub fn toggle_targeting(&mut self, state: Option<&BattleState>, focused_id: &str) -> bool {
        let Some(state) = state else {
            debug!("targeting toggle ignored: no battle data");
            return false;
        };
        if !state.is_ongoing() {
            debug!(phase = %state.phase, "targeting toggle ignored: battle finished");
            return false;
        }
        if state.active_unit_id.as_deref() != Some(focused_id) {
            debug!(focused_id, "targeting toggle ignored: focused unit is not active");
            return false;
        }
        if state.active_hero().is_none() {
            debug!(focused_id, "targeting toggle ignored: active unit is not a living ally");
            return false;
        }

        let next = match self.mode {
            InteractionMode::Idle => InteractionMode::TargetingEnemy,
            InteractionMode::TargetingEnemy => InteractionMode::Idle,
            InteractionMode::WaitingForResponse => {
                debug!("targeting toggle ignored: waiting for response");
                return false;
            }
        };
        info!(from = %self.mode, to = %next, "interaction mode changed");
        self.mode = next;
        true
    }

    /// Pages the enemy viewer. Returns true when the cursor moved.
    pub fn navigate(&mut self, direction: i32, living_enemies: usize) -> bool {
        if living_enemies < 2 {
            debug!(living_enemies, "navigation skipped");
            return false;
        }
        let moved = self.cursor.step(direction, living_enemies);
        debug!(index = self.cursor.index(), "enemy viewer navigated");
        moved
    }

    /// Maps a horizontal swipe onto navigation.
    ///
    /// Travel must exceed `threshold`; swiping left shows the next enemy.
    pub fn swipe(&mut self, start_x: f32, end_x: f32, threshold: f32, living_enemies: usize) -> bool {
        if end_x < start_x - threshold {
            self.navigate(1, living_enemies)
        } else if end_x > start_x + threshold {
            self.navigate(-1, living_enemies)
        } else {
            false
        }
    }

    /// Validates a tapped target and emits the active hero's basic attack.
    ///
    /// Player-facing rejections are written to `messages` as warnings; the
    /// mode is left unchanged on every error.
    pub fn select_target(
        &mut self,
        state: &BattleState,
        target_id: &str,
        messages: &mut MessageLog,
        bridge: &mut dyn HostBridge,
        renderer: &mut dyn RenderHooks,
    ) -> Result<OutboundCommand, SelectError> {
        if self.mode != InteractionMode::TargetingEnemy {
            return Err(SelectError::NotTargeting(self.mode));
        }

        let hero = state.active_hero().ok_or(SelectError::NoActiveHero)?;
        let target = state
            .unit(target_id)
            .ok_or_else(|| SelectError::UnknownTarget(target_id.to_owned()))?;
        if target.is_defeated() {
            return Err(SelectError::TargetDefeated(target.id.clone()));
        }

        let attack = match hero.normal_attack() {
            Ok(attack) => attack,
            Err(error) => {
                messages.push_warning(format::CANNOT_ATTACK);
                return Err(error.into());
            }
        };

        match targeting::classify(hero, attack, target) {
            Targetability::Targetable => {}
            Targetability::WrongType => {
                messages.push_warning(format::cannot_target_message(target));
                return Err(SelectError::WrongType(target.id.clone()));
            }
            Targetability::OutOfRange | Targetability::NoCommand => {
                messages.push_warning(format::out_of_range_message(target));
                return Err(SelectError::OutOfRange(target.id.clone()));
            }
        }

        let command = OutboundCommand::new(
            hero.id.as_str(),
            attack.command_id.as_str(),
            Some(target.id.clone()),
        )?;

        dispatch_effect(
            renderer,
            &VisualEffect::animate(hero.id.clone(), UnitAnimation::swing_for(hero)),
        );
        send(bridge, &command);

        info!(hero = %hero.id, target = %target.id, "attack selected, waiting for response");
        self.mode = InteractionMode::WaitingForResponse;
        messages.show(format::attack_message(hero, target), Some(state.round));

        Ok(command)
    }

    /// Classifies each living enemy while targeting; empty in any other mode.
    pub fn targetability(&self, state: &BattleState) -> Vec<(String, Targetability)> {
        if self.mode != InteractionMode::TargetingEnemy {
            return Vec::new();
        }
        match state.active_hero() {
            Some(hero) => targeting::enemy_overlay(state, hero),
            None => state
                .living_units_of(UnitKind::Enemy)
                .map(|enemy| (enemy.id.clone(), Targetability::NoCommand))
                .collect(),
        }
    }

    /// Leaves the battle.
    ///
    /// A host close call is preferred. Without one, a quit command is emitted
    /// once and further attempts are locked until the next push.
    pub fn quit(
        &mut self,
        state: Option<&BattleState>,
        messages: &mut MessageLog,
        bridge: &mut dyn HostBridge,
    ) -> QuitOutcome {
        if self.quit_locked {
            debug!("quit ignored: already quitting");
            return QuitOutcome::Locked;
        }

        match bridge.close_screen() {
            Ok(()) => {
                info!("host closed the battle screen");
                self.quit_locked = true;
                return QuitOutcome::Closed;
            }
            Err(BridgeError::Unavailable(capability)) => {
                debug!(%capability, "falling back to quit command");
            }
            Err(error) => {
                warn!(%error, "host close failed");
                return QuitOutcome::Failed;
            }
        }

        let actor = state
            .and_then(BattleState::active_hero)
            .map(|hero| hero.id.as_str());
        let command = match OutboundCommand::quit(actor) {
            Ok(command) => command,
            Err(error) => {
                warn!(%error, "hero id unusable as quit actor, using system actor");
                match OutboundCommand::quit(None) {
                    Ok(command) => command,
                    Err(error) => {
                        warn!(%error, "quit command cannot be encoded");
                        return QuitOutcome::Failed;
                    }
                }
            }
        };

        let delivered = send(bridge, &command);
        self.quit_locked = true;
        messages.show(format::QUITTING, state.map(|battle| battle.round));
        QuitOutcome::CommandSent { command, delivered }
    }
}

/// Sends one command, logging instead of failing when the bridge cannot.
fn send(bridge: &mut dyn HostBridge, command: &OutboundCommand) -> bool {
    match bridge.send_command(command) {
        Ok(()) => {
            info!(%command, "command sent");
            true
        }
        Err(error) if error.is_unavailable() => {
            warn!(%command, "command dropped: {error}");
            false
        }
        Err(error) => {
            warn!(%command, %error, "command delivery failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{Command, CommandType, TargetableType, Unit, UnitStatus};

    use super::*;
    use crate::host::{DetachedBridge, NullRenderer};

    #[derive(Default)]
    struct RecordingBridge {
        sent: Vec<OutboundCommand>,
        closes: usize,
        can_close: bool,
    }

    impl HostBridge for RecordingBridge {
        fn send_command(&mut self, command: &OutboundCommand) -> Result<(), BridgeError> {
            self.sent.push(command.clone());
            Ok(())
        }

        fn close_screen(&mut self) -> Result<(), BridgeError> {
            if self.can_close {
                self.closes += 1;
                Ok(())
            } else {
                Err(BridgeError::Unavailable(crate::host::Capability::CloseScreen))
            }
        }
    }

    fn unit(id: &str, kind: UnitKind, pos: i32) -> Unit {
        Unit {
            id: id.into(),
            name: id.to_uppercase(),
            kind,
            pseudo_pos: Some(pos),
            ..Unit::default()
        }
    }

    fn battle() -> BattleState {
        let mut hero = unit("tir", UnitKind::Ally, 0);
        hero.status = UnitStatus::Active;
        hero.commands
            .push(Command::new("slash", CommandType::NormalAttack, 1.0, TargetableType::ENEMY));
        BattleState {
            round: 1,
            turn_in_round: 1,
            active_unit_id: Some("tir".into()),
            units: vec![
                hero,
                unit("orc", UnitKind::Enemy, 1),
                unit("bat", UnitKind::Enemy, 3),
                unit("ally", UnitKind::Ally, -1),
            ],
            ..BattleState::default()
        }
    }

    fn targeting(state: &BattleState) -> InteractionController {
        let mut controller = InteractionController::new();
        assert!(controller.toggle_targeting(Some(state), "tir"));
        controller
    }

    #[test]
    fn toggle_requires_the_active_hero() {
        let state = battle();
        let mut controller = InteractionController::new();
        assert!(!controller.toggle_targeting(None, "tir"));
        assert!(!controller.toggle_targeting(Some(&state), "orc"));
        assert!(controller.toggle_targeting(Some(&state), "tir"));
        assert_eq!(controller.mode(), InteractionMode::TargetingEnemy);
        assert!(controller.toggle_targeting(Some(&state), "tir"));
        assert_eq!(controller.mode(), InteractionMode::Idle);
    }

    #[test]
    fn toggle_ignored_after_battle_end() {
        let mut state = battle();
        state.phase = battle_core::BattlePhase::Win;
        let mut controller = InteractionController::new();
        assert!(!controller.toggle_targeting(Some(&state), "tir"));
    }

    #[test]
    fn valid_target_sends_attack_and_waits() {
        let state = battle();
        let mut controller = targeting(&state);
        let mut messages = MessageLog::new(8);
        let mut bridge = RecordingBridge::default();

        let command = controller
            .select_target(&state, "orc", &mut messages, &mut bridge, &mut NullRenderer)
            .unwrap();

        assert_eq!(command.to_string(), "TBC_PLAYER_ACTION=:=tir=:=slash=:=orc");
        assert_eq!(bridge.sent, vec![command]);
        assert_eq!(controller.mode(), InteractionMode::WaitingForResponse);
        assert_eq!(messages.latest().unwrap().text, "TIR attacks ORC...");
    }

    #[test]
    fn out_of_range_target_keeps_mode() {
        let state = battle();
        let mut controller = targeting(&state);
        let mut messages = MessageLog::new(8);
        let mut bridge = RecordingBridge::default();

        let error = controller
            .select_target(&state, "bat", &mut messages, &mut bridge, &mut NullRenderer)
            .unwrap_err();

        assert!(matches!(error, SelectError::OutOfRange(id) if id == "bat"));
        assert!(bridge.sent.is_empty());
        assert_eq!(controller.mode(), InteractionMode::TargetingEnemy);
        assert_eq!(messages.latest().unwrap().text, "BAT is out of range!");
    }

    #[test]
    fn defeated_target_is_never_attacked() {
        let mut state = battle();
        state.units[1].status = UnitStatus::Defeated;
        let mut controller = targeting(&state);
        let mut messages = MessageLog::new(8);
        let mut bridge = RecordingBridge::default();

        let result =
            controller.select_target(&state, "orc", &mut messages, &mut bridge, &mut NullRenderer);

        assert!(matches!(result, Err(SelectError::TargetDefeated(id)) if id == "orc"));
        assert!(bridge.sent.is_empty());
        assert_eq!(controller.mode(), InteractionMode::TargetingEnemy);
        assert!(messages.latest().is_none());
    }

    #[test]
    fn extreme_lanes_do_not_overflow() {
        let mut state = battle();
        state.units[0].pseudo_pos = Some(i32::MIN);
        state.units[1].pseudo_pos = Some(i32::MAX);
        let mut controller = targeting(&state);
        let mut messages = MessageLog::new(8);
        let mut bridge = RecordingBridge::default();

        let result =
            controller.select_target(&state, "orc", &mut messages, &mut bridge, &mut NullRenderer);

        assert!(matches!(result, Err(SelectError::OutOfRange(_))));
        assert!(bridge.sent.is_empty());
        assert_eq!(messages.latest().unwrap().text, "ORC is out of range!");
    }

    #[test]
    fn ally_target_reports_type_mismatch() {
        let state = battle();
        let mut controller = targeting(&state);
        let mut messages = MessageLog::new(8);
        let error = controller
            .select_target(&state, "ally", &mut messages, &mut DetachedBridge, &mut NullRenderer)
            .unwrap_err();
        assert!(matches!(error, SelectError::WrongType(_)));
        assert_eq!(messages.latest().unwrap().text, "ALLY cannot be targeted!");
    }

    #[test]
    fn hero_without_attack_cannot_attack() {
        let mut state = battle();
        state.units[0].commands.clear();
        let mut controller = targeting(&state);
        let mut messages = MessageLog::new(8);
        let error = controller
            .select_target(&state, "orc", &mut messages, &mut DetachedBridge, &mut NullRenderer)
            .unwrap_err();
        assert!(matches!(error, SelectError::NoAttack(_)));
        assert_eq!(messages.latest().unwrap().text, "Cannot attack!");
    }

    #[test]
    fn select_outside_targeting_is_rejected() {
        let state = battle();
        let mut controller = InteractionController::new();
        let mut bridge = RecordingBridge::default();
        let result = controller.select_target(
            &state,
            "orc",
            &mut MessageLog::new(4),
            &mut bridge,
            &mut NullRenderer,
        );
        assert!(matches!(result, Err(SelectError::NotTargeting(InteractionMode::Idle))));
        assert!(bridge.sent.is_empty());
    }

    #[test]
    fn unavailable_bridge_still_waits_for_response() {
        let state = battle();
        let mut controller = targeting(&state);
        let result = controller.select_target(
            &state,
            "orc",
            &mut MessageLog::new(4),
            &mut DetachedBridge,
            &mut NullRenderer,
        );
        assert!(result.is_ok());
        assert_eq!(controller.mode(), InteractionMode::WaitingForResponse);
    }

    #[test]
    fn overlay_only_while_targeting() {
        let state = battle();
        let controller = InteractionController::new();
        assert!(controller.targetability(&state).is_empty());

        let controller = targeting(&state);
        assert_eq!(
            controller.targetability(&state),
            vec![
                ("orc".to_owned(), Targetability::Targetable),
                ("bat".to_owned(), Targetability::OutOfRange),
            ]
        );
    }

    #[test]
    fn swipe_needs_more_than_threshold() {
        let mut controller = InteractionController::new();
        assert!(!controller.swipe(100.0, 50.0, 50.0, 3));
        assert!(controller.swipe(100.0, 40.0, 50.0, 3));
        assert_eq!(controller.cursor().index(), 1);
        assert!(controller.swipe(40.0, 100.0, 50.0, 3));
        assert_eq!(controller.cursor().index(), 0);
    }

    #[test]
    fn quit_prefers_close_and_locks() {
        let state = battle();
        let mut controller = InteractionController::new();
        let mut bridge = RecordingBridge {
            can_close: true,
            ..RecordingBridge::default()
        };
        let mut messages = MessageLog::new(4);

        assert_eq!(
            controller.quit(Some(&state), &mut messages, &mut bridge),
            QuitOutcome::Closed
        );
        assert_eq!(
            controller.quit(Some(&state), &mut messages, &mut bridge),
            QuitOutcome::Locked
        );
        assert_eq!(bridge.closes, 1);
        assert!(bridge.sent.is_empty());
    }

    #[test]
    fn quit_falls_back_to_command_once() {
        let mut controller = InteractionController::new();
        let mut bridge = RecordingBridge::default();
        let mut messages = MessageLog::new(4);

        let outcome = controller.quit(None, &mut messages, &mut bridge);
        let QuitOutcome::CommandSent { command, delivered } = outcome else {
            panic!("expected a quit command, got {outcome:?}");
        };
        assert!(delivered);
        assert_eq!(command.to_string(), "TBC_PLAYER_ACTION=:=PWA_System=:=QuitBattleAction=:=");
        assert_eq!(
            controller.quit(None, &mut messages, &mut bridge),
            QuitOutcome::Locked
        );
        assert_eq!(bridge.sent.len(), 1);
        assert_eq!(messages.latest().unwrap().text, "Quitting...");

        controller.on_state_pushed(0);
        assert!(!controller.is_quit_locked());
    }

    #[test]
    fn push_resets_mode_and_clamps_cursor() {
        let state = battle();
        let mut controller = targeting(&state);
        controller.navigate(-1, 4);
        assert_eq!(controller.cursor().index(), 3);

        controller.on_state_pushed(2);
        assert_eq!(controller.mode(), InteractionMode::Idle);
        assert_eq!(controller.cursor().index(), 1);
    }
}
