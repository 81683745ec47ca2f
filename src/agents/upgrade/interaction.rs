use crate::error::Result;
use crate::listing::UpgradeCandidate;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Answer to a single per-package prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Select,
    Skip,
    StopAll,
}

impl Decision {
    /// `y` selects, `a` skips this and every remaining package, anything else skips.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim() {
            "Y" | "y" => Decision::Select,
            "A" | "a" => Decision::StopAll,
            _ => Decision::Skip,
        }
    }
}

/// Manages the console conversation that decides which packages get upgraded
///
/// Input and output are injected so the whole exchange can be scripted.
pub struct UpgradeInteraction<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> UpgradeInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask about each candidate in order, marking the chosen ones as selected.
    ///
    /// Returns the selected identifiers in the order they were chosen.
    pub fn select(&mut self, candidates: &mut [UpgradeCandidate]) -> Result<Vec<String>> {
        let mut selected = Vec::new();
        let total = candidates.len();

        for (index, candidate) in candidates.iter_mut().enumerate() {
            writeln!(
                self.output,
                "\n{} {} {}",
                format!("[{}/{}]", index + 1, total).cyan().bold(),
                candidate.name.white().bold(),
                format!("({})", candidate.id).dimmed()
            )?;
            writeln!(
                self.output,
                "      {} {} {}",
                candidate.current_version.red(),
                "->".dimmed(),
                candidate.available_version.green().bold()
            )?;

            let answer = self.ask("Upgrade this package? [y/N/a(no to all)]: ")?;
            match Decision::from_answer(&answer) {
                Decision::Select => {
                    candidate.selected = true;
                    selected.push(candidate.id.clone());
                }
                Decision::Skip => {
                    writeln!(self.output, "{}", "Skipping.".dimmed())?;
                }
                Decision::StopAll => {
                    writeln!(
                        self.output,
                        "{}",
                        "Skipping this and all remaining packages.".yellow()
                    )?;
                    break;
                }
            }
        }

        Ok(selected)
    }

    /// Select every candidate without prompting.
    pub fn select_all(&mut self, candidates: &mut [UpgradeCandidate]) -> Vec<String> {
        candidates
            .iter_mut()
            .map(|candidate| {
                candidate.selected = true;
                candidate.id.clone()
            })
            .collect()
    }

    /// Show the candidates marked as selected and ask for a final go-ahead.
    pub fn confirm(&mut self, candidates: &[UpgradeCandidate]) -> Result<bool> {
        let batch: Vec<&UpgradeCandidate> = candidates.iter().filter(|c| c.selected).collect();

        writeln!(
            self.output,
            "\n{}",
            format!("{} package(s) selected for upgrade:", batch.len())
                .cyan()
                .bold()
        )?;

        for candidate in batch {
            writeln!(
                self.output,
                "   • {}: {} -> {}",
                candidate.name.bright_cyan(),
                candidate.current_version,
                candidate.available_version.green()
            )?;
        }

        let answer = self.ask("\nProceed with these upgrades? [y/N]: ")?;
        Ok(Decision::from_answer(&answer) == Decision::Select)
    }

    /// The console stream shared with the rest of the run.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt.bold())?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer)
    }
}
