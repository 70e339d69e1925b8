//! Capabilities the embedding host may provide to the battle screen.
//!
//! Every member has a default implementation meaning "not provided", so an
//! adapter only implements what its host actually exposes. Callers treat
//! [`BridgeError::Unavailable`] as a skipped feature, not a failure.
use battle_core::OutboundCommand;
use thiserror::Error;

use crate::event::{UnitAnimation, VisualEffect};
use crate::view_model::BattleView;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Capability {
    SendCommand,
    CloseScreen,
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("host does not provide the {0} capability")]
    Unavailable(Capability),

    #[error("host transport failed")]
    Transport(#[source] std::io::Error),
}

impl BridgeError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Write channel back to the external resolver.
pub trait HostBridge {
    /// Delivers one fire-and-forget command.
    fn send_command(&mut self, command: &OutboundCommand) -> Result<(), BridgeError> {
        let _ = command;
        Err(BridgeError::Unavailable(Capability::SendCommand))
    }

    /// Asks the host to dismiss the battle screen directly.
    fn close_screen(&mut self) -> Result<(), BridgeError> {
        Err(BridgeError::Unavailable(Capability::CloseScreen))
    }
}

/// Bridge used when no host is attached; every command is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedBridge;

impl HostBridge for DetachedBridge {}

/// Optional presentation callbacks.
pub trait RenderHooks {
    /// Redraws the whole screen from a freshly derived view.
    fn refresh(&mut self, view: &BattleView) {
        let _ = view;
    }

    fn animate(&mut self, unit_id: &str, animation: UnitAnimation) {
        let _ = (unit_id, animation);
    }

    /// Shows a floating damage number over a unit.
    fn damage_popup(&mut self, unit_id: &str, amount: i64) {
        let _ = (unit_id, amount);
    }
}

/// Renderer for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl RenderHooks for NullRenderer {}

/// Routes a visual effect to the matching render hook.
pub fn dispatch_effect<R: RenderHooks + ?Sized>(renderer: &mut R, effect: &VisualEffect) {
    match effect {
        VisualEffect::Animate { unit_id, animation } => renderer.animate(unit_id, *animation),
        VisualEffect::DamagePopup { unit_id, amount } => {
            if *amount > 0 {
                renderer.damage_popup(unit_id, *amount);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        popups: Vec<(String, i64)>,
        animations: Vec<(String, UnitAnimation)>,
    }

    impl RenderHooks for Recorder {
        fn animate(&mut self, unit_id: &str, animation: UnitAnimation) {
            self.animations.push((unit_id.to_owned(), animation));
        }

        fn damage_popup(&mut self, unit_id: &str, amount: i64) {
            self.popups.push((unit_id.to_owned(), amount));
        }
    }

    #[test]
    fn detached_bridge_reports_unavailable() {
        let mut bridge = DetachedBridge;
        let command = OutboundCommand::quit(None).unwrap();
        assert!(matches!(
            bridge.send_command(&command),
            Err(BridgeError::Unavailable(Capability::SendCommand))
        ));
        assert!(bridge.close_screen().unwrap_err().is_unavailable());
    }

    #[test]
    fn unavailable_error_names_the_capability() {
        assert_eq!(Capability::CloseScreen.to_string(), "close-screen");
        assert_eq!(
            BridgeError::Unavailable(Capability::SendCommand).to_string(),
            "host does not provide the send-command capability"
        );
    }

    #[test]
    fn dispatch_routes_effects_and_skips_empty_popups() {
        let mut recorder = Recorder::default();
        dispatch_effect(
            &mut recorder,
            &VisualEffect::animate("tir", UnitAnimation::AttackAlly),
        );
        dispatch_effect(&mut recorder, &VisualEffect::damage_popup("luca", 9));
        dispatch_effect(&mut recorder, &VisualEffect::damage_popup("luca", 0));

        assert_eq!(
            recorder.animations,
            vec![("tir".to_owned(), UnitAnimation::AttackAlly)]
        );
        assert_eq!(recorder.popups, vec![("luca".to_owned(), 9)]);
    }

    #[test]
    fn null_renderer_accepts_everything() {
        let mut renderer = NullRenderer;
        dispatch_effect(&mut renderer, &VisualEffect::damage_popup("x", 3));
        renderer.animate("x", UnitAnimation::Hit);
    }
}
