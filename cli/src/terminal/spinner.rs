use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner shown while a lookup is in flight. Cleared when dropped.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn start(message: String, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let style: ProgressStyle = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message);
        pb.enable_steady_tick(TICK_INTERVAL);

        Self { bar: Some(pb) }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }
}
