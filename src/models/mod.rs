//! Data models for the starship catalog.
//!
//! This module contains the data structures used to represent
//! catalog data:
//!
//! - `Starship`: an entry in the paginated catalog listing
//! - `Pilot`: a crew member resolved from a starship's pilot URL
//! - `Page`: one rendered catalog page with derived pagination flags

pub mod pilot;
pub mod starship;

pub use pilot::Pilot;
pub use starship::{Page, Starship, StarshipPageResponse};
