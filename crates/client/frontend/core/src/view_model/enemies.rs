//! Paged enemy viewer.

use battle_core::{AssetCache, BattleState, UnitKind};

use crate::cursor::DisplayCursor;
use crate::format;
use crate::services::targeting::Targetability;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyCard {
    pub id: String,
    pub name: String,
    pub portrait: String,
    pub hp_text: String,
    pub hp_percent: u32,
    /// Present only while the player is choosing a target.
    pub targetability: Option<Targetability>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyViewer {
    pub cards: Vec<EnemyCard>,
    pub cursor: usize,
    pub show_navigation: bool,
    /// Text shown instead of cards when no enemy is left.
    pub placeholder: Option<&'static str>,
}

impl EnemyViewer {
    pub fn from_state(
        state: &BattleState,
        assets: &AssetCache,
        cursor: DisplayCursor,
        overlay: &[(String, Targetability)],
    ) -> Self {
        let cards: Vec<EnemyCard> = state
            .living_units_of(UnitKind::Enemy)
            .map(|enemy| EnemyCard {
                id: enemy.id.clone(),
                name: enemy.name.clone(),
                portrait: assets
                    .portrait(enemy.portrait_ref.as_deref(), enemy.kind)
                    .to_owned(),
                hp_text: format::hp_text(enemy),
                hp_percent: enemy.hp_percentage(),
                targetability: overlay
                    .iter()
                    .find(|(id, _)| *id == enemy.id)
                    .map(|(_, targetability)| *targetability),
            })
            .collect();

        let mut cursor = cursor;
        cursor.clamp(cards.len());

        Self {
            show_navigation: cards.len() > 1,
            placeholder: cards.is_empty().then_some(format::NO_ENEMIES),
            cursor: cursor.index(),
            cards,
        }
    }

    /// Card under the cursor.
    pub fn focused(&self) -> Option<&EnemyCard> {
        self.cards.get(self.cursor)
    }
}
