//! Progress indicators for the baseliner CLI.

use indicatif::{ProgressBar, ProgressStyle};

/// Styled bar for the per-endpoint fetch loop.
///
/// Hidden when the run is quiet or narrated through the log, where a live
/// bar would interleave with the messages.
pub fn endpoint_bar(len: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:25.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );
    pb
}
