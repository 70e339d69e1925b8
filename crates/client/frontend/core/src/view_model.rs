//! View snapshots derived from the battle store and interaction state.
//!
//! A [`BattleView`] is rebuilt from scratch on every refresh; renderers never
//! read [`BattleState`] directly.
mod enemies;
mod pseudomap;

use battle_core::{AssetCache, BattlePhase, BattleState};

use crate::config::LayoutConfig;
use crate::controller::{InteractionController, InteractionMode};
use crate::format;
use crate::message::{MessageEntry, MessageLog};
use crate::services::BattleStore;

pub use enemies::{EnemyCard, EnemyViewer};
pub use pseudomap::{LaneUnit, PseudomapSlot, PseudomapView};

/// Which screen the renderer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// No battle data has arrived yet.
    Waiting,
    Battle,
    Ended(BattleResult),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleResult {
    Victory,
    Defeat,
    /// A quit was requested and the host has not answered yet.
    Quitting,
}

impl BattleResult {
    pub const fn text(&self) -> &'static str {
        match self {
            Self::Victory => "Victory!",
            Self::Defeat => "Defeat!",
            Self::Quitting => format::QUITTING,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub round_text: String,
    /// Message area text.
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroCard {
    pub id: String,
    pub name: String,
    pub portrait: String,
    pub hp_text: String,
    pub hp_percent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroPanel {
    pub hero: Option<HeroCard>,
    /// True while the hero is choosing a target.
    pub ready_to_attack: bool,
    pub placeholder: Option<&'static str>,
}

impl HeroPanel {
    fn from_state(state: &BattleState, assets: &AssetCache, mode: InteractionMode) -> Self {
        let hero = state.active_hero().map(|hero| HeroCard {
            id: hero.id.clone(),
            name: hero.name.clone(),
            portrait: assets
                .portrait(hero.portrait_ref.as_deref(), hero.kind)
                .to_owned(),
            hp_text: format::hp_text(hero),
            hp_percent: hero.hp_percentage(),
        });

        Self {
            ready_to_attack: hero.is_some() && mode == InteractionMode::TargetingEnemy,
            placeholder: hero.is_none().then_some(format::NO_ACTIVE_ALLY),
            hero,
        }
    }

    fn empty() -> Self {
        Self {
            hero: None,
            ready_to_attack: false,
            placeholder: Some(format::NO_ACTIVE_ALLY),
        }
    }
}

/// Complete presentation snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleView {
    pub screen: Screen,
    pub header: HeaderView,
    pub enemies: EnemyViewer,
    pub pseudomap: PseudomapView,
    pub hero: HeroPanel,
    pub mode: InteractionMode,
    /// Newest first.
    pub history: Vec<MessageEntry>,
}

impl BattleView {
    pub fn build(
        store: &BattleStore,
        controller: &InteractionController,
        messages: &MessageLog,
        layout: &LayoutConfig,
        history_limit: usize,
    ) -> Self {
        let history = messages.recent(history_limit).cloned().collect();

        let Some(state) = store.battle().filter(|state| !state.units.is_empty()) else {
            return Self::waiting(controller.mode(), history);
        };

        let assets = store.assets();
        let overlay = controller.targetability(state);

        let screen = if controller.is_quit_locked() {
            Screen::Ended(BattleResult::Quitting)
        } else {
            match state.phase {
                BattlePhase::Ongoing => Screen::Battle,
                BattlePhase::Win => Screen::Ended(BattleResult::Victory),
                BattlePhase::Lose => Screen::Ended(BattleResult::Defeat),
            }
        };

        let message = messages
            .latest()
            .map(|entry| entry.text.clone())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| format::EMPTY_MESSAGE.to_owned());

        Self {
            screen,
            header: HeaderView {
                round_text: format::round_header(state.round, state.turn_in_round),
                message,
            },
            enemies: EnemyViewer::from_state(state, assets, controller.cursor(), &overlay),
            pseudomap: PseudomapView::from_state(state, assets, layout.pseudomap_slots),
            hero: HeroPanel::from_state(state, assets, controller.mode()),
            mode: controller.mode(),
            history,
        }
    }

    fn waiting(mode: InteractionMode, history: Vec<MessageEntry>) -> Self {
        Self {
            screen: Screen::Waiting,
            header: HeaderView {
                round_text: format::round_header(0, 0),
                message: format::WAITING_FOR_DATA.to_owned(),
            },
            enemies: EnemyViewer {
                cards: Vec::new(),
                cursor: 0,
                show_navigation: false,
                placeholder: None,
            },
            pseudomap: PseudomapView {
                slots: Vec::new(),
                windowed: false,
            },
            hero: HeroPanel::empty(),
            mode,
            history,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.screen == Screen::Waiting
    }
}
