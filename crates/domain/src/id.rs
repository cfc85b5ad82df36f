//! Typed identifier for stored poses.

use serde::{Deserialize, Serialize};

/// Identifier of a stored pose, assigned by the store on insert.
///
/// Identifiers are monotonic by insertion order and immutable once assigned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PoseId(i64);

impl PoseId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for PoseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PoseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
