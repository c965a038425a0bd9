//! Progress spinner shown while a category synchronizes

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for one category install. Suppressed in unattended
/// mode so post-install hooks stay quiet.
pub fn category_spinner(suppress: bool, label: &str) -> Option<ProgressBar> {
    if suppress {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(&format!("{{spinner}} Installing {}...", label.to_lowercase()))
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    Some(pb)
}

/// Clear a spinner so it never interleaves with the summary
pub fn finish_spinner(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}
