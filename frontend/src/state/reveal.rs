pub fn threshold(viewport_height: f64, divisor: f64) -> f64 {
    viewport_height / divisor
}

// A flag never goes back to false.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    divisor: f64,
}

impl RevealTracker {
    pub fn new(len: usize, divisor: f64) -> Self {
        Self {
            revealed: vec![false; len],
            divisor,
        }
    }

    pub fn observe(&mut self, index: usize, top: f64, viewport_height: f64) -> bool {
        let Some(flag) = self.revealed.get_mut(index) else {
            return false;
        };
        if *flag || top >= threshold(viewport_height, self.divisor) {
            return false;
        }
        *flag = true;
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_viewport_over_divisor() {
        assert!((threshold(1300.0, 1.3) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn reveals_when_top_is_above_threshold() {
        let mut tracker = RevealTracker::new(2, 1.3);
        assert!(tracker.observe(0, 999.0, 1300.0));
        assert!(!tracker.observe(1, 1000.0, 1300.0));
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut tracker = RevealTracker::new(1, 1.3);
        assert!(tracker.observe(0, 100.0, 800.0));
        // scrolled back: element is far below the fold again
        assert!(!tracker.observe(0, 5000.0, 800.0));
        assert!(tracker.is_revealed(0));
        assert!(!tracker.observe(0, 100.0, 800.0));
        assert!(tracker.all_revealed());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut tracker = RevealTracker::new(1, 1.3);
        assert!(!tracker.observe(3, 0.0, 800.0));
        assert!(!tracker.is_revealed(3));
    }

    #[test]
    fn all_revealed_tracks_every_element() {
        let mut tracker = RevealTracker::new(2, 1.3);
        tracker.observe(0, -50.0, 800.0);
        assert!(!tracker.all_revealed());
        tracker.observe(1, 10.0, 800.0);
        assert!(tracker.all_revealed());
    }
}
