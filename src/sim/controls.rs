//! Player control intents
//!
//! The driver maps key events to intents and sends patch-style updates; the
//! simulation only ever sees the fixed set below.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Thrust,
    TurnLeft,
    TurnRight,
    Attack,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::Thrust,
        Intent::TurnLeft,
        Intent::TurnRight,
        Intent::Attack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Thrust => "thrust",
            Intent::TurnLeft => "turn_left",
            Intent::TurnRight => "turn_right",
            Intent::Attack => "attack",
        }
    }
}

impl FromStr for Intent {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        match s {
            "thrust" => Ok(Intent::Thrust),
            "turn_left" => Ok(Intent::TurnLeft),
            "turn_right" => Ok(Intent::TurnRight),
            "attack" => Ok(Intent::Attack),
            other => Err(SimError::UnknownIntent(other.to_string())),
        }
    }
}

/// Held-down state of every intent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub thrust: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub attack: bool,
}

impl Controls {
    pub fn is_active(&self, intent: Intent) -> bool {
        match intent {
            Intent::Thrust => self.thrust,
            Intent::TurnLeft => self.turn_left,
            Intent::TurnRight => self.turn_right,
            Intent::Attack => self.attack,
        }
    }

    pub fn set(&mut self, intent: Intent, active: bool) {
        match intent {
            Intent::Thrust => self.thrust = active,
            Intent::TurnLeft => self.turn_left = active,
            Intent::TurnRight => self.turn_right = active,
            Intent::Attack => self.attack = active,
        }
    }

    /// Merge a patch; intents absent from it keep their current state
    pub fn apply(&mut self, patch: &ControlPatch) {
        for intent in Intent::ALL {
            if let Some(active) = patch.get(intent) {
                self.set(intent, active);
            }
        }
    }
}

/// Partial control update
///
/// JSON form accepts `true`/`false` or `0`/`1` per intent and rejects any
/// other key or value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControlPatch {
    #[serde(default, deserialize_with = "flag", skip_serializing_if = "Option::is_none")]
    pub thrust: Option<bool>,
    #[serde(default, deserialize_with = "flag", skip_serializing_if = "Option::is_none")]
    pub turn_left: Option<bool>,
    #[serde(default, deserialize_with = "flag", skip_serializing_if = "Option::is_none")]
    pub turn_right: Option<bool>,
    #[serde(default, deserialize_with = "flag", skip_serializing_if = "Option::is_none")]
    pub attack: Option<bool>,
}

impl ControlPatch {
    /// Patch touching nothing
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, intent: Intent, active: bool) -> Self {
        self.set(intent, active);
        self
    }

    pub fn set(&mut self, intent: Intent, active: bool) {
        let slot = match intent {
            Intent::Thrust => &mut self.thrust,
            Intent::TurnLeft => &mut self.turn_left,
            Intent::TurnRight => &mut self.turn_right,
            Intent::Attack => &mut self.attack,
        };
        *slot = Some(active);
    }

    pub fn get(&self, intent: Intent) -> Option<bool> {
        match intent {
            Intent::Thrust => self.thrust,
            Intent::TurnLeft => self.turn_left,
            Intent::TurnRight => self.turn_right,
            Intent::Attack => self.attack,
        }
    }

    pub fn is_empty(&self) -> bool {
        Intent::ALL.iter().all(|i| self.get(*i).is_none())
    }

    /// Build a patch from named flags, failing on the first unknown name
    pub fn from_pairs<'a, I>(pairs: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut patch = Self::default();
        for (name, active) in pairs {
            patch.set(name.parse()?, active);
        }
        Ok(patch)
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
}

fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(b) => Ok(Some(b)),
        RawFlag::Int(0) => Ok(Some(false)),
        RawFlag::Int(1) => Ok(Some(true)),
        RawFlag::Int(n) => Err(D::Error::custom(format!(
            "control flag must be 0 or 1, got {n}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_merges_only_present_keys() {
        let mut controls = Controls {
            turn_left: true,
            ..Default::default()
        };
        controls.apply(&ControlPatch::none().with(Intent::Thrust, true));
        assert!(controls.thrust);
        assert!(controls.turn_left);

        controls.apply(&ControlPatch::none().with(Intent::TurnLeft, false));
        assert!(controls.thrust);
        assert!(!controls.turn_left);
    }

    #[test]
    fn test_from_pairs_rejects_unknown_intent() {
        let pairs = [("thrust", true), ("attack", false)];
        let patch = ControlPatch::from_pairs(pairs).unwrap();
        assert_eq!(patch.thrust, Some(true));
        assert_eq!(patch.attack, Some(false));
        assert_eq!(patch.turn_left, None);

        let pairs = [("thrust", true), ("jump", true)];
        let err = ControlPatch::from_pairs(pairs).unwrap_err();
        assert!(matches!(err, SimError::UnknownIntent(name) if name == "jump"));
    }

    #[test]
    fn test_json_accepts_bool_and_int_flags() {
        let json = r#"{"thrust": 1, "turn_right": false}"#;
        let patch = ControlPatch::from_json(json).unwrap();
        assert_eq!(patch.thrust, Some(true));
        assert_eq!(patch.turn_right, Some(false));
        assert_eq!(patch.attack, None);

        assert!(ControlPatch::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_json_rejects_bad_input() {
        assert!(ControlPatch::from_json(r#"{"thrust": 2}"#).is_err());
        assert!(ControlPatch::from_json(r#"{"thrust": "yes"}"#).is_err());
        assert!(ControlPatch::from_json(r#"{"boost": 1}"#).is_err());
    }

    #[test]
    fn test_intent_names_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), intent);
        }
    }
}
