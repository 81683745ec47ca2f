use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Turn `[VERBOSE]` diagnostics on or off for the rest of the process.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print a diagnostic line to stderr when `--verbose` is set.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {{
        if $crate::utils::verbose::is_verbose() {
            eprintln!("[VERBOSE] {}", format!($($arg)*));
        }
    }};
}
