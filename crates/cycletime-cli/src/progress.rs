// Rust guideline compliant 2026-10-16

//! Progress reporting for report runs.

/// Simple progress reporter that emits periodic updates on stderr.
pub struct ProgressReporter {
    label: String,
    interval: usize,
}

impl ProgressReporter {
    /// Creates a new progress reporter.
    ///
    /// # Arguments
    ///
    /// * `label` - Label to include in progress messages
    /// * `interval` - Report every N items (minimum 1)
    pub fn new(label: &str, interval: usize) -> Self {
        Self {
            label: label.to_string(),
            interval: interval.max(1),
        }
    }

    /// Returns the progress line for `current` of `total`, if one is due.
    pub fn line(&self, current: usize, total: usize) -> Option<String> {
        if current % self.interval != 0 && current != total {
            return None;
        }
        Some(format!("{}: {} / {}", self.label, current, total))
    }

    /// Reports progress at the configured interval and on the last item.
    ///
    /// # Arguments
    ///
    /// * `current` - Current item count processed (1-based)
    /// * `total` - Total item count
    pub fn report(&self, current: usize, total: usize) {
        if let Some(line) = self.line(current, total) {
            eprintln!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_at_interval_and_end() {
        let progress = ProgressReporter::new("Summarized issues", 2);
        assert_eq!(progress.line(1, 5), None);
        assert_eq!(progress.line(2, 5).as_deref(), Some("Summarized issues: 2 / 5"));
        assert_eq!(progress.line(3, 5), None);
        assert_eq!(progress.line(5, 5).as_deref(), Some("Summarized issues: 5 / 5"));
    }

    #[test]
    fn test_zero_interval_treated_as_one() {
        let progress = ProgressReporter::new("Summarized issues", 0);
        assert!(progress.line(1, 3).is_some());
    }
}
