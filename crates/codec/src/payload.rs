//! Payload module - serde types for the save envelope
//!
//! Wire shape (camelCase keys):
//!
//! ```text
//! { "v": 1,
//!   "state": { "size": 4, "target": 2048, "grid": [[...]], "score": 0, "best": 0,
//!              "moveCount": 0, "won": false, "over": false,
//!              "rngSeed": 12345, "rngState": 12345, "canUndo": true,
//!              "prev": { "grid": [[...]], "score": 0, "rngState": 12345 } } }
//! ```
//!
//! Decoding is lenient where a hand-edited or older save may differ (missing counters
//! and flags default to `0`/`false`, RNG values are masked to 32 bits) and strict
//! where the state would otherwise be unusable (version, grid shape, size, target).

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::types::{Tile, SAVE_VERSION};

/// The `v` tag; only version 1 is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SaveVersion;

impl Serialize for SaveVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(SAVE_VERSION)
    }
}

impl<'de> Deserialize<'de> for SaveVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        if v.as_f64() == Some(f64::from(SAVE_VERSION)) {
            Ok(SaveVersion)
        } else {
            Err(de::Error::custom(format!(
                "unsupported save version {} (expected {})",
                v, SAVE_VERSION
            )))
        }
    }
}

/// Versioned save envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePayload {
    pub v: SaveVersion,
    pub state: SavedState,
}

/// Every persisted field of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    #[serde(deserialize_with = "numeric")]
    pub size: u32,
    #[serde(deserialize_with = "numeric")]
    pub target: Tile,
    pub grid: Vec<Vec<Tile>>,
    #[serde(default, deserialize_with = "count")]
    pub score: u64,
    #[serde(default, deserialize_with = "count")]
    pub best: u64,
    #[serde(default, deserialize_with = "count")]
    pub move_count: u64,
    #[serde(default, deserialize_with = "truthy")]
    pub won: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub over: bool,
    #[serde(default, deserialize_with = "uint32")]
    pub rng_seed: u32,
    #[serde(default, deserialize_with = "uint32")]
    pub rng_state: u32,
    #[serde(default, deserialize_with = "truthy")]
    pub can_undo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<SavedSnapshot>,
}

/// The one-step undo snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSnapshot {
    pub grid: Vec<Vec<Tile>>,
    #[serde(default, deserialize_with = "count")]
    pub score: u64,
    #[serde(default, deserialize_with = "uint32")]
    pub rng_state: u32,
}

/// A JSON number holding a non-negative integer that fits in `u32`
fn numeric<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    let Some(n) = v.as_f64() else {
        return Err(de::Error::custom(format!("expected a number, got {}", v)));
    };
    if n.fract() != 0.0 || n < 0.0 || n > f64::from(u32::MAX) {
        let msg = format!("expected a non-negative integer, got {}", n);
        return Err(de::Error::custom(msg));
    }
    Ok(n as u32)
}

/// Score-like counter: `null` reads as 0, fractions are truncated, negatives clamp to 0
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => Ok(match n.as_u64() {
            Some(u) => u,
            // `as` saturates, so negatives become 0
            None => n.as_f64().map(|f| f as u64).unwrap_or(0),
        }),
        other => {
            let msg = format!("expected a number, got {}", other);
            Err(de::Error::custom(msg))
        }
    }
}

/// Truthiness of any JSON value
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Mask any value to an unsigned 32-bit integer (modulo 2^32).
///
/// Numeric strings and booleans convert like numbers; anything else reads as 0.
fn uint32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(to_uint32(&Value::deserialize(deserializer)?))
}

pub(crate) fn to_uint32(v: &Value) -> u32 {
    match v {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u as u32
            } else if let Some(i) = n.as_i64() {
                i as u32
            } else {
                n.as_f64().map(mask_f64).unwrap_or(0)
            }
        }
        Value::String(s) => s.trim().parse::<f64>().map(mask_f64).unwrap_or(0),
        Value::Bool(b) => u32::from(*b),
        _ => 0,
    }
}

fn mask_f64(f: f64) -> u32 {
    if f.is_finite() {
        f.trunc().rem_euclid(4_294_967_296.0) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn version_must_be_one() {
        assert!(serde_json::from_value::<SaveVersion>(json!(1)).is_ok());
        assert!(serde_json::from_value::<SaveVersion>(json!(1.0)).is_ok());
        assert!(serde_json::from_value::<SaveVersion>(json!(2)).is_err());
        assert!(serde_json::from_value::<SaveVersion>(json!("1")).is_err());
        assert_eq!(serde_json::to_value(SaveVersion).unwrap(), json!(1));
    }

    #[test]
    fn uint32_masks() {
        assert_eq!(to_uint32(&json!(5)), 5);
        assert_eq!(to_uint32(&json!(-1)), u32::MAX);
        assert_eq!(to_uint32(&json!(4294967297u64)), 1);
        assert_eq!(to_uint32(&json!(12.9)), 12);
        assert_eq!(to_uint32(&json!(null)), 0);
        assert_eq!(to_uint32(&json!([1])), 0);
    }

    #[test]
    fn uint32_converts_strings_and_booleans() {
        assert_eq!(to_uint32(&json!("7")), 7);
        assert_eq!(to_uint32(&json!(" 42 ")), 42);
        assert_eq!(to_uint32(&json!("-1")), u32::MAX);
        assert_eq!(to_uint32(&json!("4294967298")), 2);
        assert_eq!(to_uint32(&json!("seven")), 0);
        assert_eq!(to_uint32(&json!("")), 0);
        assert_eq!(to_uint32(&json!("NaN")), 0);
        assert_eq!(to_uint32(&json!(true)), 1);
        assert_eq!(to_uint32(&json!(false)), 0);
    }

    #[test]
    fn missing_optional_fields_default() {
        let s: SavedState = serde_json::from_value(json!({
            "size": 2,
            "target": 2048,
            "grid": [[0, 2], [0, 0]]
        }))
        .unwrap();
        assert_eq!(s.score, 0);
        assert_eq!(s.best, 0);
        assert_eq!(s.move_count, 0);
        assert!(!s.won && !s.over && !s.can_undo);
        assert_eq!(s.rng_seed, 0);
        assert!(s.prev.is_none());
    }

    #[test]
    fn size_and_target_must_be_numeric() {
        let bad_size = json!({ "size": "4", "target": 2048, "grid": [] });
        assert!(serde_json::from_value::<SavedState>(bad_size).is_err());
        let bad_target = json!({ "size": 4, "grid": [] });
        assert!(serde_json::from_value::<SavedState>(bad_target).is_err());
        let fractional = json!({ "size": 4.5, "target": 2048, "grid": [] });
        assert!(serde_json::from_value::<SavedState>(fractional).is_err());
    }

    #[test]
    fn grid_must_be_list_shaped() {
        let not_list = json!({ "size": 1, "target": 2048, "grid": "2" });
        assert!(serde_json::from_value::<SavedState>(not_list).is_err());
        let bad_row = json!({ "size": 1, "target": 2048, "grid": [2] });
        assert!(serde_json::from_value::<SavedState>(bad_row).is_err());
    }

    #[test]
    fn flags_follow_truthiness() {
        let s: SavedState = serde_json::from_value(json!({
            "size": 1, "target": 2048, "grid": [[2]],
            "won": 1, "over": "", "canUndo": null
        }))
        .unwrap();
        assert!(s.won);
        assert!(!s.over);
        assert!(!s.can_undo);
    }
}
