//! Inbound payload pushed by the host.
//!
//! The host sends a flat JSON object. Recognized fields may arrive either as a
//! JSON-encoded string or as an already-structured object; both forms decode
//! to the same value. Unrecognized keys are ignored.
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::assets::AssetCache;
use crate::state::BattleState;

/// Keys carrying a replacement battle state, in priority order.
pub const BATTLE_STATE_KEYS: [&str; 2] = ["initialBattleState", "jsonDataBattle"];

/// Keys carrying a replacement asset cache, in priority order.
pub const ASSET_CACHE_KEYS: [&str; 2] = ["initialAssetCache", "assetCache"];

/// Key carrying a standalone message for the message area.
pub const BATTLE_MESSAGE_KEY: &str = "BattleMessage";

/// Failures decoding an inbound payload or one of its fields.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("inbound payload is not a JSON object")]
    NotAnObject,

    #[error("inbound payload is not valid JSON")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("field {key} must be a JSON string or object, found {found}")]
    UnexpectedType { key: &'static str, found: &'static str },

    #[error("field {key} could not be decoded")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Decoded view of one inbound push.
///
/// Each field is `None` when the payload did not carry it and `Some(Err(_))`
/// when it was present but could not be decoded.
#[derive(Debug, Default)]
pub struct InboundPayload {
    pub battle_state: Option<Result<BattleState, PayloadError>>,
    pub asset_cache: Option<Result<AssetCache, PayloadError>>,
    pub message: Option<String>,
}

impl InboundPayload {
    /// Decodes a raw JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(raw).map_err(PayloadError::InvalidPayload)?;
        Self::from_value(&value)
    }

    /// Decodes an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, PayloadError> {
        let fields = value.as_object().ok_or(PayloadError::NotAnObject)?;
        Ok(Self::from_fields(fields))
    }

    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let message = fields
            .get(BATTLE_MESSAGE_KEY)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);

        Self {
            battle_state: decode_first(fields, &BATTLE_STATE_KEYS),
            asset_cache: decode_first(fields, &ASSET_CACHE_KEYS),
            message,
        }
    }

    /// Returns true when no recognized field was present.
    pub fn is_empty(&self) -> bool {
        self.battle_state.is_none() && self.asset_cache.is_none() && self.message.is_none()
    }
}

/// Decodes the first present key out of `keys`.
fn decode_first<T>(
    fields: &Map<String, Value>,
    keys: &[&'static str],
) -> Option<Result<T, PayloadError>>
where
    T: DeserializeOwned,
{
    keys.iter().find_map(|&key| {
        let value = fields.get(key).filter(|value| is_present(value))?;
        decode_field(key, value)
    })
}

fn decode_field<T>(key: &'static str, value: &Value) -> Option<Result<T, PayloadError>>
where
    T: DeserializeOwned,
{
    let structured = match value {
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => parsed,
            Err(source) => return Some(Err(PayloadError::Malformed { key, source })),
        },
        Value::Object(_) => value.clone(),
        other => {
            return Some(Err(PayloadError::UnexpectedType {
                key,
                found: json_type_name(other),
            }));
        }
    };

    // A string that decodes to `null` carries nothing.
    if structured.is_null() {
        return None;
    }
    if !structured.is_object() {
        return Some(Err(PayloadError::UnexpectedType {
            key,
            found: json_type_name(&structured),
        }));
    }

    Some(serde_json::from_value(structured).map_err(|source| PayloadError::Malformed { key, source }))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(raw) => !raw.is_empty(),
        _ => true,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
