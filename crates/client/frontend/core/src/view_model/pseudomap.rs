//! Lane strip showing every living unit by relative position.

use battle_core::{AssetCache, BattleState, Unit, UnitKind};
use tracing::debug;

/// Ordered lane strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PseudomapView {
    pub slots: Vec<PseudomapSlot>,
    /// True when the strip is a fixed window centered on one lane.
    pub windowed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PseudomapSlot {
    Unit(LaneUnit),
    /// Lane inside the window with nobody on it.
    Empty { lane: i64 },
}

impl PseudomapSlot {
    pub fn unit(&self) -> Option<&LaneUnit> {
        match self {
            Self::Unit(unit) => Some(unit),
            Self::Empty { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaneUnit {
    pub id: String,
    pub name: String,
    pub kind: UnitKind,
    pub lane: Option<i32>,
    pub portrait: String,
    pub is_active: bool,
}

impl LaneUnit {
    fn from_unit(unit: &Unit, state: &BattleState, assets: &AssetCache) -> Self {
        Self {
            id: unit.id.clone(),
            name: unit.name.clone(),
            kind: unit.kind,
            lane: unit.pseudo_pos,
            portrait: assets
                .portrait(unit.portrait_ref.as_deref(), unit.kind)
                .to_owned(),
            is_active: state.active_unit_id.as_deref() == Some(unit.id.as_str()),
        }
    }
}

impl PseudomapView {
    /// Builds the strip.
    ///
    /// With fewer living units than `slots`, every living unit is listed in
    /// lane order. Otherwise exactly `slots` lanes are produced, centered on
    /// the active unit's lane, and lanes without a unit become
    /// [`PseudomapSlot::Empty`].
    pub fn from_state(state: &BattleState, assets: &AssetCache, slots: usize) -> Self {
        let slots = slots.max(1);
        let mut living: Vec<&Unit> = state.living_units().collect();
        // Units without a lane sort after every positioned unit.
        living.sort_by_key(|unit| (unit.pseudo_pos.is_none(), unit.pseudo_pos));

        if living.len() < slots {
            return Self {
                slots: living
                    .into_iter()
                    .map(|unit| PseudomapSlot::Unit(LaneUnit::from_unit(unit, state, assets)))
                    .collect(),
                windowed: false,
            };
        }

        let center = match state.active_unit().and_then(|unit| unit.pseudo_pos) {
            Some(lane) => lane,
            None => {
                debug!("active unit has no lane, centering on the first living unit");
                living
                    .iter()
                    .find_map(|unit| unit.pseudo_pos)
                    .unwrap_or_default()
            }
        };

        // Lanes span all of i32, so the window is laid out in i64.
        let first = i64::from(center) - (slots / 2) as i64;
        let window = (0..slots as i64)
            .map(|offset| {
                let lane = first + offset;
                living
                    .iter()
                    .find(|unit| unit.pseudo_pos.map(i64::from) == Some(lane))
                    .map_or(PseudomapSlot::Empty { lane }, |unit| {
                        PseudomapSlot::Unit(LaneUnit::from_unit(unit, state, assets))
                    })
            })
            .collect();

        Self {
            slots: window,
            windowed: true,
        }
    }

    pub fn active(&self) -> Option<&LaneUnit> {
        self.slots
            .iter()
            .filter_map(PseudomapSlot::unit)
            .find(|unit| unit.is_active)
    }
}
