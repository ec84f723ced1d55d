//! Progress bar helpers using indicatif

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over a known number of files.
pub fn create_progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("   [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    bar
}
