//! Battle screen: the single owner of client-side battle state.
//!
//! Every push and gesture goes through `&mut BattleScreen` and completes
//! before the next one, so a state push always wins over whatever the player
//! was doing.

use battle_core::{AssetCache, BattleState, InboundPayload, OutboundCommand, PayloadError, UnitKind};
use serde_json::Value;
use tracing::debug;

use crate::config::FrontendConfig;
use crate::controller::{InteractionController, InteractionMode, QuitOutcome, SelectError};
use crate::cursor::DisplayCursor;
use crate::format;
use crate::host::{HostBridge, RenderHooks, dispatch_effect};
use crate::message::MessageLog;
use crate::services::{BattleStore, StateSynchronizer, SyncOutcome};
use crate::view_model::BattleView;

/// Number of history entries carried in each derived view.
const VIEW_HISTORY: usize = 8;

pub struct BattleScreen<B, R> {
    config: FrontendConfig,
    store: BattleStore,
    controller: InteractionController,
    messages: MessageLog,
    bridge: B,
    renderer: R,
}

impl<B, R> BattleScreen<B, R>
where
    B: HostBridge,
    R: RenderHooks,
{
    pub fn new(config: FrontendConfig, bridge: B, renderer: R) -> Self {
        let messages = MessageLog::new(config.messages.capacity);
        Self {
            config,
            store: BattleStore::default(),
            controller: InteractionController::new(),
            messages,
            bridge,
            renderer,
        }
    }

    /// Applies a structured push from the host.
    pub fn push(&mut self, value: &Value) -> SyncOutcome {
        match InboundPayload::from_value(value) {
            Ok(payload) => self.push_payload(payload),
            Err(error) => {
                debug!(%error, "push ignored");
                SyncOutcome::default()
            }
        }
    }

    /// Applies a raw JSON push. Only an undecodable document is an error;
    /// malformed fields inside it are skipped.
    pub fn push_json(&mut self, raw: &str) -> Result<SyncOutcome, PayloadError> {
        let payload = InboundPayload::from_json_str(raw)?;
        Ok(self.push_payload(payload))
    }

    pub fn push_payload(&mut self, payload: InboundPayload) -> SyncOutcome {
        let outcome = StateSynchronizer::apply(&mut self.store, payload);

        if outcome.battle_replaced() {
            if let Some(state) = self.store.battle() {
                let living_enemies = state.living_units_of(UnitKind::Enemy).count();
                self.controller.on_state_pushed(living_enemies);
                let text = if state.message.is_empty() {
                    format::EMPTY_MESSAGE
                } else {
                    state.message.as_str()
                };
                self.messages.show(text, Some(state.round));
            }
        }

        for effect in &outcome.effects {
            dispatch_effect(&mut self.renderer, effect);
        }

        if let Some(message) = &outcome.message {
            let round = self.store.battle().map(|state| state.round);
            self.messages.show(message.as_str(), round);
        }

        if outcome.refresh || outcome.message.is_some() {
            self.refresh();
        }

        outcome
    }

    /// Tap on the hero panel: focuses the active hero.
    pub fn tap_hero_panel(&mut self) -> bool {
        let focused = self
            .store
            .battle()
            .and_then(BattleState::active_hero)
            .map(|hero| hero.id.clone());
        match focused {
            Some(id) => self.toggle_targeting(&id),
            None => {
                debug!("hero panel tap ignored: no active hero");
                false
            }
        }
    }

    /// Toggles targeting for the focused unit.
    pub fn toggle_targeting(&mut self, unit_id: &str) -> bool {
        let toggled = self
            .controller
            .toggle_targeting(self.store.battle(), unit_id);
        if toggled {
            self.refresh();
        }
        toggled
    }

    pub fn navigate(&mut self, direction: i32) -> bool {
        let moved = self.controller.navigate(direction, self.living_enemies());
        if moved {
            self.refresh();
        }
        moved
    }

    pub fn swipe(&mut self, start_x: f32, end_x: f32) -> bool {
        let moved = self.controller.swipe(
            start_x,
            end_x,
            self.config.gestures.swipe_threshold,
            self.living_enemies(),
        );
        if moved {
            self.refresh();
        }
        moved
    }

    /// Tap on an enemy card. Returns the command sent, if any.
    pub fn tap_enemy(&mut self, unit_id: &str) -> Option<OutboundCommand> {
        let Some(state) = self.store.battle() else {
            debug!(unit_id, "enemy tap ignored: no battle data");
            return None;
        };

        let result = self.controller.select_target(
            state,
            unit_id,
            &mut self.messages,
            &mut self.bridge,
            &mut self.renderer,
        );

        match result {
            Ok(command) => {
                self.refresh();
                Some(command)
            }
            Err(SelectError::NotTargeting(mode)) => {
                debug!(unit_id, %mode, "enemy tap ignored");
                None
            }
            Err(error) => {
                debug!(unit_id, %error, "target rejected");
                self.refresh();
                None
            }
        }
    }

    pub fn quit(&mut self) -> QuitOutcome {
        let outcome = self.controller.quit(
            self.store.battle(),
            &mut self.messages,
            &mut self.bridge,
        );
        if matches!(
            outcome,
            QuitOutcome::Closed | QuitOutcome::CommandSent { .. }
        ) {
            self.refresh();
        }
        outcome
    }

    /// Derives the current view.
    pub fn view(&self) -> BattleView {
        BattleView::build(
            &self.store,
            &self.controller,
            &self.messages,
            &self.config.layout,
            VIEW_HISTORY,
        )
    }

    pub fn battle(&self) -> Option<&BattleState> {
        self.store.battle()
    }

    pub fn assets(&self) -> &AssetCache {
        self.store.assets()
    }

    pub fn mode(&self) -> InteractionMode {
        self.controller.mode()
    }

    pub fn cursor(&self) -> DisplayCursor {
        self.controller.cursor()
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn living_enemies(&self) -> usize {
        self.store
            .battle()
            .map_or(0, |state| state.living_units_of(UnitKind::Enemy).count())
    }

    fn refresh(&mut self) {
        let view = self.view();
        self.renderer.refresh(&view);
    }
}
