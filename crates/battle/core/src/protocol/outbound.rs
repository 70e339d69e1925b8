//! Outbound player commands.
//!
//! Wire form: `TBC_PLAYER_ACTION=:=<actor>=:=<command>=:=<target>`, with an
//! empty target field when the command has none.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fixed prefix the host profile listens for.
pub const COMMAND_PREFIX: &str = "TBC_PLAYER_ACTION";

/// Separator between the prefix and each field.
pub const FIELD_DELIMITER: &str = "=:=";

/// Reserved command id asking the host to end the battle screen.
pub const QUIT_COMMAND_ID: &str = "QuitBattleAction";

/// Actor id used for system commands issued while no hero is active.
pub const SYSTEM_ACTOR_ID: &str = "PWA_System";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("command string does not start with {COMMAND_PREFIX}")]
    MissingPrefix,

    #[error("expected 3 command fields, found {found}")]
    FieldCount { found: usize },

    #[error("command field {field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("command field {field} contains the reserved delimiter")]
    DelimiterInField { field: &'static str },
}

/// A single fire-and-forget command for the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OutboundCommand {
    actor_id: String,
    command_id: String,
    target_id: Option<String>,
}

impl OutboundCommand {
    /// Builds a command, rejecting ids that would corrupt the wire form.
    pub fn new(
        actor_id: impl Into<String>,
        command_id: impl Into<String>,
        target_id: Option<String>,
    ) -> Result<Self, WireError> {
        let actor_id = actor_id.into();
        let command_id = command_id.into();
        let target_id = target_id.filter(|target| !target.is_empty());

        check_field("actor", &actor_id, true)?;
        check_field("command", &command_id, true)?;
        if let Some(target) = &target_id {
            check_field("target", target, false)?;
        }

        Ok(Self {
            actor_id,
            command_id,
            target_id,
        })
    }

    /// Quit request on behalf of `actor`, or the system actor when none is active.
    pub fn quit(actor_id: Option<&str>) -> Result<Self, WireError> {
        Self::new(actor_id.unwrap_or(SYSTEM_ACTOR_ID), QUIT_COMMAND_ID, None)
    }

    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    pub fn command_id(&self) -> &str {
        &self.command_id
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    pub fn is_quit(&self) -> bool {
        self.command_id == QUIT_COMMAND_ID
    }

    /// Field section without the prefix, as handed to bridges that take the
    /// prefix separately.
    pub fn body(&self) -> String {
        [
            self.actor_id.as_str(),
            self.command_id.as_str(),
            self.target_id.as_deref().unwrap_or(""),
        ]
        .join(FIELD_DELIMITER)
    }
}

impl fmt::Display for OutboundCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COMMAND_PREFIX}{FIELD_DELIMITER}{}", self.body())
    }
}

impl FromStr for OutboundCommand {
    type Err = WireError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let body = raw
            .strip_prefix(COMMAND_PREFIX)
            .and_then(|rest| rest.strip_prefix(FIELD_DELIMITER))
            .ok_or(WireError::MissingPrefix)?;

        let fields: Vec<&str> = body.split(FIELD_DELIMITER).collect();
        let [actor, command, target] = fields.as_slice() else {
            return Err(WireError::FieldCount {
                found: fields.len(),
            });
        };

        Self::new(*actor, *command, Some((*target).to_owned()))
    }
}

fn check_field(field: &'static str, value: &str, required: bool) -> Result<(), WireError> {
    if required && value.is_empty() {
        return Err(WireError::EmptyField { field });
    }
    if value.contains(FIELD_DELIMITER) {
        return Err(WireError::DelimiterInField { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_attack_command() {
        let command =
            OutboundCommand::new("kyuris", "normal_attack_kyuris", Some("luca".into())).unwrap();
        assert_eq!(
            command.to_string(),
            "TBC_PLAYER_ACTION=:=kyuris=:=normal_attack_kyuris=:=luca"
        );
        assert_eq!(command.body(), "kyuris=:=normal_attack_kyuris=:=luca");
    }

    #[test]
    fn quit_without_hero_uses_system_actor_and_empty_target() {
        let command = OutboundCommand::quit(None).unwrap();
        assert!(command.is_quit());
        assert_eq!(
            command.to_string(),
            "TBC_PLAYER_ACTION=:=PWA_System=:=QuitBattleAction=:="
        );
    }

    #[test]
    fn decodes_what_it_encodes() {
        let sent = OutboundCommand::new("tir", "slash", Some("soldier_2".into())).unwrap();
        let decoded: OutboundCommand = sent.to_string().parse().unwrap();
        assert_eq!(decoded, sent);

        let quit: OutboundCommand = "TBC_PLAYER_ACTION=:=tir=:=QuitBattleAction=:="
            .parse()
            .unwrap();
        assert_eq!(quit.target_id(), None);
        assert_eq!(quit.actor_id(), "tir");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(
            "OTHER=:=a=:=b=:=c".parse::<OutboundCommand>(),
            Err(WireError::MissingPrefix)
        );
        assert_eq!(
            "TBC_PLAYER_ACTION=:=a=:=b".parse::<OutboundCommand>(),
            Err(WireError::FieldCount { found: 2 })
        );
        assert_eq!(
            "TBC_PLAYER_ACTION=:==:=b=:=".parse::<OutboundCommand>(),
            Err(WireError::EmptyField { field: "actor" })
        );
    }

    #[test]
    fn rejects_delimiter_inside_ids() {
        assert_eq!(
            OutboundCommand::new("a=:=b", "slash", None),
            Err(WireError::DelimiterInField { field: "actor" })
        );
    }
}
