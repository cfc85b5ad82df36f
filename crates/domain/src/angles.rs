//! Servo angles — the four-angle tuple driven onto the actuator.

use serde::{Deserialize, Serialize};

/// One set of four servo angles.
///
/// Angles are plain integers; the backend deliberately performs no range
/// validation (no 0–180 clamp), matching the behaviour the existing
/// controller firmware was built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServoAngles {
    pub servo1: i64,
    pub servo2: i64,
    pub servo3: i64,
    pub servo4: i64,
}

impl ServoAngles {
    #[must_use]
    pub const fn new(servo1: i64, servo2: i64, servo3: i64, servo4: i64) -> Self {
        Self {
            servo1,
            servo2,
            servo3,
            servo4,
        }
    }

    /// Render as the comma-joined decimal line polled by the controller,
    /// e.g. `90,45,135,0`. No trailing newline, no enclosing structure.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.servo1, self.servo2, self.servo3, self.servo4
        )
    }
}
