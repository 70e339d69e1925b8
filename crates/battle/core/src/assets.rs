//! Portrait and UI asset payloads supplied by the host.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::state::UnitKind;

/// 1x1 transparent PNG shown when an ally portrait is missing.
pub const PLACEHOLDER_ALLY_PORTRAIT: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// 1x1 transparent GIF shown when an enemy portrait is missing.
pub const PLACEHOLDER_ENEMY_PORTRAIT: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// Mapping from symbolic asset references to encoded payloads.
///
/// Replaced as a whole whenever the host pushes a new cache. Lookups never
/// fail: unknown or empty entries resolve to a placeholder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCache {
    #[serde(default)]
    pub portraits: HashMap<String, String>,

    #[serde(default)]
    pub ui_elements: HashMap<String, String>,

    #[serde(default)]
    pub sfx: HashMap<String, String>,
}

impl AssetCache {
    pub fn is_empty(&self) -> bool {
        self.portraits.is_empty() && self.ui_elements.is_empty() && self.sfx.is_empty()
    }

    /// Resolves a unit portrait, falling back to the placeholder for its side.
    pub fn portrait(&self, portrait_ref: Option<&str>, kind: UnitKind) -> &str {
        portrait_ref
            .and_then(|key| self.portraits.get(key))
            .map(String::as_str)
            .filter(|payload| !payload.is_empty())
            .unwrap_or_else(|| Self::placeholder(kind))
    }

    pub const fn placeholder(kind: UnitKind) -> &'static str {
        match kind {
            UnitKind::Ally => PLACEHOLDER_ALLY_PORTRAIT,
            UnitKind::Enemy => PLACEHOLDER_ENEMY_PORTRAIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> AssetCache {
        let mut cache = AssetCache::default();
        cache
            .portraits
            .insert("tir_default_portrait".into(), "data:image/png;base64,TIR".into());
        cache.portraits.insert("blank".into(), String::new());
        cache
    }

    #[test]
    fn known_portrait_resolves() {
        assert_eq!(
            cache().portrait(Some("tir_default_portrait"), UnitKind::Ally),
            "data:image/png;base64,TIR"
        );
    }

    #[test]
    fn missing_portrait_falls_back_per_side() {
        let cache = cache();
        assert_eq!(
            cache.portrait(Some("unknown"), UnitKind::Ally),
            PLACEHOLDER_ALLY_PORTRAIT
        );
        assert_eq!(cache.portrait(None, UnitKind::Enemy), PLACEHOLDER_ENEMY_PORTRAIT);
        assert_eq!(
            cache.portrait(Some("blank"), UnitKind::Enemy),
            PLACEHOLDER_ENEMY_PORTRAIT
        );
    }

    #[test]
    fn groups_default_when_absent() {
        let cache: AssetCache = serde_json::from_str(r#"{"portraits":{"a":"x"}}"#).unwrap();
        assert_eq!(cache.portraits.len(), 1);
        assert!(cache.sfx.is_empty());
        assert!(!cache.is_empty());
    }
}
