//! In-memory caching module for resolved pilots.
//!
//! This module provides the `PilotCache`, a session-scoped cache of
//! pilot lists keyed by ship name. Entries are append-only and never
//! invalidated; re-visiting a ship across page navigations hits the
//! cache with no network traffic.

pub mod pilots;

pub use pilots::PilotCache;
