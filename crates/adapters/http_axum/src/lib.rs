//! # posehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API the dashboard frontend and controller tooling use
//!   (`/api/poses`, `/api/poses/save`, `/api/poses/delete`, `/api/angles`)
//! - Validate form fields and apply the permissive numeric cast
//! - Map application results into the `{status, message}` envelope and the
//!   bare pose array, with the status codes the clients were built against
//! - Allow cross-origin access from any origin (the frontend and the
//!   controller live elsewhere)
//!
//! ## Response shape
//! The list endpoint returns a bare JSON array; the three mutation endpoints
//! return the envelope. This asymmetry is part of the observable contract and
//! is kept as-is for client compatibility.
//!
//! ## Dependency rule
//! Depends on `posehub-app` (for port traits and services) and
//! `posehub-domain` (for types used in request/response mapping). Never leaks
//! axum types into the domain.

pub mod api;
pub mod error;
pub mod params;
pub mod router;
pub mod state;
