//! Staggered reveal of freshly rendered items.
//!
//! All revealable items of a container are hidden, then shown one at a time
//! in document order: item `i` (0-based) after `base × (i + 1)`. Purely
//! cosmetic; nothing else waits on it.

use std::time::Duration;

/// Class marking an element as revealable.
pub const REVEAL_CLASS: &str = "content-child";

/// One reveal pass over a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPlan {
    /// Show delay of each revealable item, in document order.
    pub delays: Vec<Duration>,
}

impl RevealPlan {
    pub fn new(count: usize, base: Duration) -> Self {
        Self {
            delays: schedule(count, base),
        }
    }

    /// Time until the last item is visible.
    pub fn total(&self) -> Duration {
        self.delays.last().copied().unwrap_or_default()
    }
}

/// Show delays for `count` items spaced `base` apart, starting at `base`.
pub fn schedule(count: usize, base: Duration) -> Vec<Duration> {
    (1..=count)
        .map(|n| base.saturating_mul(u32::try_from(n).unwrap_or(u32::MAX)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_increase_linearly() {
        let delays = schedule(3, Duration::from_millis(100));
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(300),
            ]
        );
    }

    #[test]
    fn empty_container_has_no_delays() {
        let plan = RevealPlan::new(0, Duration::from_millis(100));
        assert!(plan.delays.is_empty());
        assert_eq!(plan.total(), Duration::ZERO);
    }

    #[test]
    fn total_is_last_delay() {
        let plan = RevealPlan::new(4, Duration::from_millis(50));
        assert_eq!(plan.total(), Duration::from_millis(200));
    }
}
