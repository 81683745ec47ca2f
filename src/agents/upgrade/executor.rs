use crate::agents::package_manager::PackageManager;
use crate::agents::upgrade::report::BatchReport;
use crate::error::Result;
use crate::listing::UpgradeCandidate;
use crate::verbose;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;

/// Runs the selected upgrades one after another
///
/// A failed upgrade is recorded and the batch moves on to the next package.
/// Per-package lines go to `output` with the bar suspended, so they survive
/// when the bar itself is hidden (stderr not a terminal).
pub struct BatchExecutor<'a, W> {
    manager: &'a dyn PackageManager,
    output: W,
}

impl<'a, W: Write> BatchExecutor<'a, W> {
    pub fn new(manager: &'a dyn PackageManager, output: W) -> Self {
        Self { manager, output }
    }

    pub fn run(&mut self, selected: &[String], candidates: &[UpgradeCandidate]) -> Result<BatchReport> {
        let mut report = BatchReport::new();

        let pb = ProgressBar::new(selected.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("  [{bar:40}] {pos}/{len} {msg}") {
            pb.set_style(style.progress_chars("=>-"));
        }

        for id in selected {
            let name = candidates
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.name.as_str())
                .unwrap_or(id.as_str());

            pb.set_message(format!("Upgrading {}", name));

            let manager = self.manager;
            let output = &mut self.output;
            pb.suspend(|| -> Result<()> {
                writeln!(
                    output,
                    "\n{} {} ({})",
                    "Upgrading".cyan().bold(),
                    name.white().bold(),
                    id
                )?;
                output.flush()?;

                match manager.upgrade(id) {
                    Ok(()) => {
                        writeln!(output, "{}", format!("✓ {} upgraded", name).green())?;
                        report.record_success();
                    }
                    Err(e) => {
                        verbose!("Upgrade of {} failed: {:?}", id, e);
                        writeln!(output, "{} {}", format!("✗ {} failed:", name).red(), e)?;
                        report.record_failure(id.clone(), name.to_string(), e.to_string());
                    }
                }
                Ok(())
            })?;

            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(report)
    }
}
