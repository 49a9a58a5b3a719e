//! Library exports for the hangar application core.
//!
//! The `hangar` binary in `main.rs` drives the terminal UI; the library
//! target exists so integration tests can exercise the fetching and caching
//! core against a mock HTTP server.

pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod models;
pub mod ui;
