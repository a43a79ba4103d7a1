//! CineCMS server library.
//!
//! Exposes the server modules for integration testing; the binary in
//! `main.rs` stays a thin orchestrator.

pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod middleware;
pub mod routes;
