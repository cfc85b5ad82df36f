//! # posehub-app
//!
//! Application layer for the posehub servo-pose backend.
//!
//! ## Responsibilities
//! - Define **ports** — the trait boundaries adapters implement
//!   (pose persistence, angle snapshot file)
//! - Provide **services** — thin use-case orchestration over the ports
//!
//! ## Dependency rule
//! Depends only on `posehub-domain`. Adapters depend on this crate for the
//! port traits; this crate must never reference an adapter.

pub mod ports;
pub mod services;
