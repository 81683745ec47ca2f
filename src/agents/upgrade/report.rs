/// A package whose upgrade command did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeFailure {
    pub id: String,
    pub name: String,
    pub message: String,
}

/// Tracks the results of one batch of upgrades
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<UpgradeFailure>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, id: String, name: String, message: String) {
        self.failed += 1;
        self.failures.push(UpgradeFailure { id, name, message });
    }

    /// Number of upgrade commands that were run
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
