//! Double-click detection.

use std::time::{Duration, Instant};

/// Maximum delay between the clicks of a double-click.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(500);

#[derive(Debug, Default)]
pub(crate) struct ClickTracker {
    last: Option<(Instant, usize)>,
}

impl ClickTracker {
    /// Record a click on char index `idx`.
    ///
    /// Returns true when it completes a double-click on the same char.
    pub(crate) fn click(&mut self, idx: usize) -> bool {
        let now = Instant::now();
        let double = matches!(
            self.last,
            Some((time, last_idx)) if last_idx == idx && now.duration_since(time) < DOUBLE_CLICK_THRESHOLD
        );
        // A third click starts a new sequence
        self.last = if double { None } else { Some((now, idx)) };
        double
    }
}
