//! Application services — one per use-case family.

pub mod pose_service;
pub mod snapshot_service;
