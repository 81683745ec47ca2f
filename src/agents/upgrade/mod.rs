// Upgrade module: the interactive selection and the batch that follows it
//
// - UpgradeInteraction: per-package prompts and the final confirmation
// - BatchExecutor: sequential upgrades, failures isolated per package
// - BatchReport: success/failure tally consumed by the summary
pub mod executor;
pub mod interaction;
pub mod report;

pub use executor::BatchExecutor;
pub use interaction::UpgradeInteraction;
pub use report::BatchReport;
