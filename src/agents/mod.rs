pub mod package_manager;
pub mod upgrade;

pub use package_manager::{PackageManager, WingetAgent};
pub use upgrade::{BatchExecutor, BatchReport, UpgradeInteraction};
