//! Progress display for batch renders

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static JOB_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Renders: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many render jobs of a batch are done
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Create the bar for `job_count` jobs
    pub fn initialize(&mut self, job_count: usize) {
        let bar = ProgressBar::new(job_count as u64);
        bar.set_style(JOB_STYLE.clone());
        self.bar = Some(bar);
        self.completed = 0;
    }

    /// Show which job is being rendered
    pub fn start_job(&self, label: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(label.to_string());
        }
    }

    /// Count a finished job
    pub fn complete_job(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of jobs completed since the last `initialize`
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
