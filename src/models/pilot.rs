//! Domain model for pilots.

use serde::Deserialize;

/// A pilot resolved from a URL embedded in a starship record.
/// The API returns a full person payload; only the name is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pilot {
    pub name: String,
}
