//! Utility functions and persistence helpers for Trailhead.

use std::path::PathBuf;

use dirs_next::home_dir;

pub mod progress;

pub use progress::{ProgressError, ProgressStore, PROGRESS_FILE_NAME, PROGRESS_PATH_ENV};

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

/// Completion percentage as displayed next to checklists:
/// `round(100 × checked / total)`, and 0 for an empty list.
pub fn completion_percent(checked: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * checked as f64 / total as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::completion_percent;

    #[test]
    fn completion_percent_rounds_to_nearest() {
        assert_eq!(completion_percent(0, 8), 0);
        assert_eq!(completion_percent(1, 8), 13); // 12.5 rounds up
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(8, 8), 100);
        assert_eq!(completion_percent(0, 0), 0);
    }
}
