use crate::agents::{BatchExecutor, BatchReport, PackageManager, UpgradeInteraction, WingetAgent};
use crate::error::Result;
use crate::listing::{ListingParser, TableParser, UpgradeCandidate};
use crate::verbose;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How the upgrade run should behave beyond the default interactive flow
#[derive(Debug, Clone, Copy, Default)]
pub struct UpgradeOptions {
    /// Select every candidate without per-package prompts
    pub select_all: bool,
    /// Skip the final confirmation
    pub assume_yes: bool,
    /// Stop after confirmation without invoking any upgrade
    pub dry_run: bool,
}

/// Terminal state of one upgrade run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NoUpdates,
    NothingSelected,
    Canceled,
    DryRun(Vec<String>),
    Completed(BatchReport),
}

/// Check, list, select, confirm, then upgrade using the real package manager
pub fn execute_upgrade(manager_path: &str, silent: bool, options: UpgradeOptions) -> Result<()> {
    println!("{}", "Starting package upgrade process...".cyan().bold());

    let manager = WingetAgent::new(manager_path, silent);
    let parser = TableParser::new(manager.hint_prefix())?;
    let stdin = io::stdin();
    let mut interaction = UpgradeInteraction::new(stdin.lock(), io::stdout());

    let outcome = run_upgrade(&manager, &parser, &mut interaction, options)?;
    print_outcome(interaction.output(), &outcome)?;
    Ok(())
}

/// Drive the whole pipeline against any package manager and console
///
/// Only a failed probe, a failed listing or console I/O errors abort the run;
/// every other ending is reported through [`RunOutcome`].
pub fn run_upgrade<R: BufRead, W: Write>(
    manager: &dyn PackageManager,
    parser: &dyn ListingParser,
    interaction: &mut UpgradeInteraction<R, W>,
    options: UpgradeOptions,
) -> Result<RunOutcome> {
    let mut candidates = load_candidates(manager, parser)?;

    if candidates.is_empty() {
        return Ok(RunOutcome::NoUpdates);
    }

    println!("\n{}", "4. Selecting packages...".yellow());
    let selected = if options.select_all {
        interaction.select_all(&mut candidates)
    } else {
        interaction.select(&mut candidates)?
    };

    if selected.is_empty() {
        return Ok(RunOutcome::NothingSelected);
    }

    if !options.assume_yes && !interaction.confirm(&candidates)? {
        return Ok(RunOutcome::Canceled);
    }

    if options.dry_run {
        return Ok(RunOutcome::DryRun(selected));
    }

    println!("\n{}", "5. Upgrading selected packages...".yellow());
    let report = BatchExecutor::new(manager, interaction.output()).run(&selected, &candidates)?;
    Ok(RunOutcome::Completed(report))
}

/// Print upgradeable packages without selecting or upgrading anything
pub fn execute_list(manager_path: &str, json: bool) -> Result<()> {
    let manager = WingetAgent::new(manager_path, false);
    let parser = TableParser::new(manager.hint_prefix())?;

    if json {
        let candidates = fetch_quietly(&manager, &parser)?;
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }

    let candidates = load_candidates(&manager, &parser)?;
    if candidates.is_empty() {
        println!("\n{}", "No updates available.".green());
        return Ok(());
    }

    print_candidates(&candidates);
    Ok(())
}

/// Steps 1-3 with progress headers: probe, list and parse
fn load_candidates(
    manager: &dyn PackageManager,
    parser: &dyn ListingParser,
) -> Result<Vec<UpgradeCandidate>> {
    println!("\n{}", "1. Checking package manager...".yellow());
    let version = manager.probe()?;
    println!("{}", format!("✓ Package manager available ({})", version).green());

    println!("\n{}", "2. Fetching upgradeable packages...".yellow());
    let output = manager.list_upgrades()?;
    verbose!("Listing returned {} line(s)", output.lines().count());

    println!("\n{}", "3. Parsing upgrade list...".yellow());
    let candidates = parser.parse(&output);
    println!("   Found {} upgradeable package(s)", candidates.len());

    Ok(candidates)
}

/// Same as [`load_candidates`] but keeps stdout clean for machine output
fn fetch_quietly(
    manager: &dyn PackageManager,
    parser: &dyn ListingParser,
) -> Result<Vec<UpgradeCandidate>> {
    manager.probe()?;
    let output = manager.list_upgrades()?;
    Ok(parser.parse(&output))
}

fn print_candidates(candidates: &[UpgradeCandidate]) {
    let name_width = candidates.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
    let id_width = candidates.iter().map(|c| c.id.chars().count()).max().unwrap_or(0);

    println!("\n{}", "Upgradeable packages:".cyan().bold());
    for candidate in candidates {
        println!(
            "   • {:<name_width$}  {:<id_width$}  {} -> {}",
            candidate.name.bright_cyan(),
            candidate.id.dimmed(),
            candidate.current_version.red(),
            candidate.available_version.green()
        );
    }
}

fn print_outcome<W: Write>(out: &mut W, outcome: &RunOutcome) -> io::Result<()> {
    match outcome {
        RunOutcome::NoUpdates => {
            writeln!(out, "\n{}", "No updates available.".green())?;
        }
        RunOutcome::NothingSelected => {
            writeln!(out, "\n{}", "No packages selected, nothing to do.".yellow())?;
        }
        RunOutcome::Canceled => {
            writeln!(out, "\n{}", "Upgrade canceled by user.".yellow())?;
        }
        RunOutcome::DryRun(ids) => {
            writeln!(out, "\n{}", "Dry run, no upgrades were executed.".yellow())?;
            for id in ids {
                writeln!(out, "   • would upgrade {}", id.bright_cyan())?;
            }
        }
        RunOutcome::Completed(report) => print_batch_report(out, report)?,
    }
    out.flush()
}

fn print_batch_report<W: Write>(out: &mut W, report: &BatchReport) -> io::Result<()> {
    writeln!(out, "\n{}", "📊 Upgrade Summary".cyan().bold())?;
    writeln!(out, "{}", "═".repeat(50).cyan())?;
    writeln!(out, "   {} {}", "Attempted:".bold(), report.attempted())?;
    writeln!(
        out,
        "   {} {}",
        "Succeeded:".green().bold(),
        report.succeeded.to_string().green()
    )?;
    writeln!(
        out,
        "   {} {}",
        "Failed:".red().bold(),
        report.failed.to_string().red()
    )?;

    if !report.failures.is_empty() {
        writeln!(out, "\n{}", "Failed packages:".red().bold())?;
        for failure in &report.failures {
            writeln!(
                out,
                "   • {} ({}): {}",
                failure.name.white().bold(),
                failure.id.dimmed(),
                failure.message
            )?;
        }
    }

    if report.is_clean() {
        writeln!(
            out,
            "\n{}",
            "✨ Upgrade process completed successfully!".green().bold()
        )
    } else {
        writeln!(out, "\n{}", "⚠ Upgrade process completed with failures.".yellow().bold())
    }
}
