use crate::error::{Result, WingupError};
use crate::verbose;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// The external tool that knows which packages can be upgraded and how to upgrade them
pub trait PackageManager {
    /// Confirm the tool can be started, returning its reported version
    fn probe(&self) -> Result<String>;

    /// Raw text of the "list upgradeable packages" command
    fn list_upgrades(&self) -> Result<String>;

    /// Upgrade a single package by identifier
    fn upgrade(&self, id: &str) -> Result<()>;

    /// Prefix of the tool's own trailing "run this command" hint line
    fn hint_prefix(&self) -> String;
}

/// WingetAgent drives the Windows Package Manager CLI
pub struct WingetAgent {
    program: PathBuf,
    silent: bool,
}

impl WingetAgent {
    pub fn new<P: AsRef<Path>>(program: P, silent: bool) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            silent,
        }
    }

    fn upgrade_args<'a>(&self, id: &'a str) -> Vec<&'a str> {
        let mut args = vec!["upgrade", "--id", id, "--exact"];
        if self.silent {
            args.extend([
                "--silent",
                "--accept-package-agreements",
                "--accept-source-agreements",
            ]);
        }
        args
    }

    fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        verbose!("Running: {} {}", self.program.display(), args.join(" "));
        Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(self.output_for(args).stdio())
            .stderr(Stdio::piped())
            .output()
    }

    /// Run attached to the console so the tool's own prompts (which do not
    /// end in a newline) are visible and answerable while it waits.
    fn run_attached(&self, args: &[&str]) -> Result<()> {
        println!("Executing: {} {}", self.program.display(), args.join(" "));

        let status = Command::new(&self.program)
            .args(args)
            .stdout(self.output_for(args).stdio())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                WingupError::UpgradeInvocation(format!("Failed to spawn process: {}", e))
            })?;

        if !status.success() {
            return Err(WingupError::UpgradeInvocation(format!(
                "{} exited with code: {}",
                self.program.display(),
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }

    /// Probe and listing output is parsed; an upgrade talks to the user directly.
    fn output_for(&self, args: &[&str]) -> ChildOutput {
        if args.len() > 1 && args[0] == "upgrade" {
            ChildOutput::Console
        } else {
            ChildOutput::Capture
        }
    }
}

/// Destination of a child's standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildOutput {
    /// Read back by us and parsed
    Capture,
    /// Shared with the user's terminal
    Console,
}

impl ChildOutput {
    fn stdio(self) -> Stdio {
        match self {
            ChildOutput::Capture => Stdio::piped(),
            ChildOutput::Console => Stdio::inherit(),
        }
    }
}

impl PackageManager for WingetAgent {
    fn probe(&self) -> Result<String> {
        let output = self.run(&["--version"]).map_err(|e| {
            WingupError::ToolUnavailable(format!(
                "'{}' could not be started: {}",
                self.program.display(),
                e
            ))
        })?;

        if !output.status.success() {
            return Err(WingupError::ToolUnavailable(format!(
                "'{} --version' failed: {}",
                self.program.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn list_upgrades(&self) -> Result<String> {
        let output = self.run(&["upgrade"]).map_err(|e| {
            WingupError::Listing(format!(
                "Failed to execute '{} upgrade': {}",
                self.program.display(),
                e
            ))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            if stdout.trim().is_empty() {
                return Err(WingupError::Listing(format!(
                    "'{} upgrade' exited with code {}: {}",
                    self.program.display(),
                    output.status.code().unwrap_or(-1),
                    String::from_utf8_lossy(&output.stderr).trim()
                )));
            }
            verbose!(
                "'upgrade' listing exited with code {}, parsing its output anyway",
                output.status.code().unwrap_or(-1)
            );
        }

        Ok(stdout)
    }

    fn upgrade(&self, id: &str) -> Result<()> {
        let args = self.upgrade_args(id);
        self.run_attached(&args)
    }

    fn hint_prefix(&self) -> String {
        let stem = self
            .program
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "winget".to_string());
        format!("{} ", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_executable_is_tool_unavailable() {
        let dir = tempdir().unwrap();
        let agent = WingetAgent::new(dir.path().join("no-such-winget"), false);

        match agent.probe() {
            Err(WingupError::ToolUnavailable(msg)) => assert!(msg.contains("no-such-winget")),
            other => panic!("expected ToolUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn missing_executable_fails_listing_and_upgrade() {
        let dir = tempdir().unwrap();
        let agent = WingetAgent::new(dir.path().join("no-such-winget"), false);

        assert!(matches!(agent.list_upgrades(), Err(WingupError::Listing(_))));
        assert!(matches!(
            agent.upgrade("Some.Package"),
            Err(WingupError::UpgradeInvocation(_))
        ));
    }

    #[test]
    fn hint_prefix_uses_program_stem() {
        assert_eq!(WingetAgent::new("winget", false).hint_prefix(), "winget ");
        assert_eq!(
            WingetAgent::new("/opt/tools/winget.exe", false).hint_prefix(),
            "winget "
        );
    }

    #[test]
    fn upgrade_output_goes_to_console_not_a_pipe() {
        let agent = WingetAgent::new("winget", false);

        assert_eq!(
            agent.output_for(&agent.upgrade_args("Google.Chrome")),
            ChildOutput::Console
        );
        assert_eq!(
            WingetAgent::new("winget", true).output_for(&["upgrade", "--id", "X", "--exact"]),
            ChildOutput::Console
        );
        assert_eq!(agent.output_for(&["upgrade"]), ChildOutput::Capture);
        assert_eq!(agent.output_for(&["--version"]), ChildOutput::Capture);
    }

    #[cfg(unix)]
    #[test]
    fn upgrade_reports_child_exit_status() {
        assert!(WingetAgent::new("true", false).upgrade("Some.Package").is_ok());

        match WingetAgent::new("false", false).upgrade("Some.Package") {
            Err(WingupError::UpgradeInvocation(msg)) => assert!(msg.contains("exit")),
            other => panic!("expected UpgradeInvocation, got {:?}", other),
        }
    }

    #[test]
    fn silent_adds_agreement_flags() {
        let loud = WingetAgent::new("winget", false);
        assert_eq!(
            loud.upgrade_args("Google.Chrome"),
            vec!["upgrade", "--id", "Google.Chrome", "--exact"]
        );

        let quiet = WingetAgent::new("winget", true);
        let args = quiet.upgrade_args("Google.Chrome");
        assert!(args.contains(&"--silent"));
        assert!(args.contains(&"--accept-package-agreements"));
        assert!(args.contains(&"--accept-source-agreements"));
    }
}
