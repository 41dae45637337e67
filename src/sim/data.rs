//! Externalized object state
//!
//! The seam where a HUD, network sync or save/load layer attaches. Every field
//! is optional so the same type serves as a full snapshot (`get_data`) and as
//! a patch (`set_data`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::object::{ObjectId, ObjectKind};
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ObjectKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vel: Option<Vec2>,
    /// Degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_vel: Option<f32>,
    /// Players only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<f32>,
    /// Bullets only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shooter_id: Option<ObjectId>,
}

impl ObjectData {
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject NaN or infinite numbers before they reach object state
    pub fn check_finite(&self) -> SimResult<()> {
        let vectors = [("loc", self.loc), ("vel", self.vel)];
        for (field, v) in vectors {
            if v.is_some_and(|v| !v.is_finite()) {
                return Err(non_finite(field));
            }
        }
        let scalars = [
            ("angle", self.angle),
            ("angular_vel", self.angular_vel),
            ("health", self.health),
        ];
        for (field, x) in scalars {
            if x.is_some_and(|x| !x.is_finite()) {
                return Err(non_finite(field));
            }
        }
        Ok(())
    }
}

fn non_finite(field: &'static str) -> SimError {
    SimError::InvalidValue {
        field,
        reason: "must be finite".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_patch() {
        let data = ObjectData::from_json(r#"{"health": 40}"#).unwrap();
        assert_eq!(data.health, Some(40.0));
        assert!(data.loc.is_none());
        assert!(data.angle.is_none());
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let data = ObjectData {
            id: Some(ObjectId(7)),
            loc: Some(Vec2::new(1.0, 2.0)),
            shooter_id: Some(ObjectId(2)),
            ..Default::default()
        };
        let json = data.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["shooter_id"], 2);
        assert_eq!(value["loc"], serde_json::json!([1.0, 2.0]));
        assert!(value.get("health").is_none());
        assert!(value.get("vel").is_none());
    }

    #[test]
    fn test_malformed_json_fails_fast() {
        assert!(ObjectData::from_json(r#"{"health": "full"}"#).is_err());
        assert!(ObjectData::from_json(r#"{"loc": 3}"#).is_err());
        assert!(ObjectData::from_json(r#"{"shield": 1}"#).is_err());
        assert!(ObjectData::from_json(r#"{"kind": "asteroid"}"#).is_err());
    }
}
