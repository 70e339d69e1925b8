//! Frontend configuration structures and loaders.
//!
//! These settings are shared by every host adapter (terminal, embedded web
//! view, test harness) driving a [`crate::BattleScreen`].

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub layout: LayoutConfig,
    pub gestures: GestureConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, layout: LayoutConfig, gestures: GestureConfig) -> Self {
        Self {
            messages,
            layout,
            gestures,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_MESSAGE_CAPACITY` - Message history capacity (default: 64)
    /// - `PSEUDOMAP_MAX_VISIBLE_UNITS` - Lane slots shown before windowing (default: 7)
    /// - `SWIPE_THRESHOLD` - Minimum horizontal travel for a swipe (default: 50)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("BATTLE_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(slots) = read_env::<usize>("PSEUDOMAP_MAX_VISIBLE_UNITS") {
            config.layout.pseudomap_slots = slots.max(1);
        }

        if let Some(threshold) = read_env::<f32>("SWIPE_THRESHOLD") {
            if threshold.is_finite() {
                config.gestures.swipe_threshold = threshold.max(0.0);
            }
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Layout parameters for derived views.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Number of lane slots in the pseudomap strip before it switches to a
    /// window centered on the active unit.
    pub pseudomap_slots: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { pseudomap_slots: 7 }
    }
}

#[derive(Clone, Debug)]
pub struct GestureConfig {
    /// Minimum horizontal distance, in host pixels, for a swipe to page enemies.
    pub swipe_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_battle_screen_layout() {
        let config = FrontendConfig::default();
        assert_eq!(config.messages.capacity, 64);
        assert_eq!(config.layout.pseudomap_slots, 7);
        assert_eq!(config.gestures.swipe_threshold, 50.0);
    }
}
