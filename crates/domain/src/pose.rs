//! Pose — a stored angle tuple with its store-assigned identifier.

use serde::{Deserialize, Serialize};

use crate::angles::ServoAngles;
use crate::id::PoseId;

/// One saved set of four servo angles.
///
/// Serializes flat as `{"id": N, "servo1": A, ..., "servo4": D}` — the shape
/// the dashboard frontend consumes from the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub id: PoseId,
    #[serde(flatten)]
    pub angles: ServoAngles,
}

impl Pose {
    #[must_use]
    pub const fn new(id: PoseId, angles: ServoAngles) -> Self {
        Self { id, angles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_flat_with_id_and_four_angles() {
        let pose = Pose::new(PoseId::new(7), ServoAngles::new(90, 45, 135, 0));
        let json = serde_json::to_value(&pose).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "servo1": 90,
                "servo2": 45,
                "servo3": 135,
                "servo4": 0,
            })
        );
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let pose = Pose::new(PoseId::new(1), ServoAngles::new(1, 2, 3, 4));
        let json = serde_json::to_string(&pose).unwrap();
        let parsed: Pose = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pose);
    }
}
