//! # posehub-domain
//!
//! Pure domain model for the posehub servo-pose backend.
//!
//! ## Responsibilities
//! - Foundational types: the pose identifier, error conventions
//! - Define **Servo angles** (the four-angle tuple driven onto the actuator)
//! - Define **Poses** (a stored angle tuple with its store-assigned identifier)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod angles;
pub mod pose;
