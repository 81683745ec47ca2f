pub mod table_parser;

pub use table_parser::TableParser;

use serde::Serialize;

/// Placeholder used when the listing has no "Available" column for a row
pub const UNKNOWN_VERSION: &str = "Unknown";

/// One upgradeable package as reported by the package manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeCandidate {
    pub name: String,
    pub id: String,
    pub current_version: String,
    pub available_version: String,
    #[serde(skip)]
    pub selected: bool,
}

impl UpgradeCandidate {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        current_version: impl Into<String>,
        available_version: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            current_version: current_version.into(),
            available_version: available_version.unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            selected: false,
        }
    }
}

/// Turns the raw output of a "list upgrades" command into candidates.
///
/// Implementations must keep the order the package manager printed and
/// never fail on rows they cannot understand; such rows are skipped.
pub trait ListingParser {
    fn parse(&self, output: &str) -> Vec<UpgradeCandidate>;
}
