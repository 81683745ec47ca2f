use crate::error::{Result, WingupError};
use crate::listing::{ListingParser, UpgradeCandidate};
use crate::verbose;
use regex::Regex;

/// Parser for the whitespace-aligned table printed by `winget upgrade`
///
/// ```text
/// Name            Id              Version   Available  Source
/// -------------------------------------------------------------
/// Google Chrome   Google.Chrome   120.0     121.0      winget
/// 1 upgrades available.
/// ```
pub struct TableParser {
    separator: Regex,
    column_gap: Regex,
    hint_prefix: String,
}

impl TableParser {
    /// Create a parser that drops rows starting with `hint_prefix`
    /// (the manager's own "run this command" suggestion).
    pub fn new(hint_prefix: impl Into<String>) -> Result<Self> {
        let separator = Regex::new(r"^-{2,}")
            .map_err(|e| WingupError::Listing(format!("Regex error: {}", e)))?;
        let column_gap = Regex::new(r"\s{2,}")
            .map_err(|e| WingupError::Listing(format!("Regex error: {}", e)))?;

        Ok(Self {
            separator,
            column_gap,
            hint_prefix: hint_prefix.into(),
        })
    }

    fn is_data_row(&self, line: &str) -> bool {
        let starts_alphanumeric = line
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric());

        starts_alphanumeric && (self.hint_prefix.is_empty() || !line.starts_with(&self.hint_prefix))
    }

    fn parse_row(&self, line: &str) -> Option<UpgradeCandidate> {
        let fields: Vec<&str> = self
            .column_gap
            .split(line)
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();

        if fields.len() < 3 {
            verbose!("Skipping row with {} field(s): {:?}", fields.len(), line);
            return None;
        }

        Some(UpgradeCandidate::new(
            fields[0],
            fields[1],
            fields[2],
            fields.get(3).map(|v| v.to_string()),
        ))
    }
}

/// Keep only what is left visible after the last carriage return, which
/// strips spinner frames drawn on the same line as the header.
fn visible_text(raw: &str) -> &str {
    match raw.rfind('\r') {
        Some(pos) => &raw[pos + 1..],
        None => raw,
    }
}

impl ListingParser for TableParser {
    fn parse(&self, output: &str) -> Vec<UpgradeCandidate> {
        let mut candidates = Vec::new();
        let mut in_table = false;

        for raw in output.lines() {
            let line = visible_text(raw);

            if !in_table {
                in_table = self.separator.is_match(line);
                continue;
            }

            if !self.is_data_row(line) {
                continue;
            }

            if let Some(candidate) = self.parse_row(line) {
                candidates.push(candidate);
            }
        }

        candidates
    }
}
