/// Inclusive time interval in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub from: i64,
    pub to: i64,
}

impl Interval {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Closed-interval intersection test: touching endpoints intersect.
    pub fn intersects(&self, other: &Interval) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Length of the common part, or `None` when the intervals are disjoint.
    /// Intervals touching at a single instant overlap by zero. Lengths beyond
    /// `i64::MAX` saturate.
    pub fn overlap(&self, other: &Interval) -> Option<i64> {
        if !self.intersects(other) {
            return None;
        }

        let common_from = if self.from < other.from {
            other.from
        } else {
            self.from
        };
        let common_to = self.to.min(other.to);

        Some(common_to.saturating_sub(common_from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overlap() {
        let a = Interval::new(0, 100);
        let b = Interval::new(50, 150);
        assert_eq!(a.overlap(&b), Some(50));
        assert_eq!(b.overlap(&a), Some(50));
    }

    #[test]
    fn containment_yields_inner_length() {
        let outer = Interval::new(0, 1_000);
        let inner = Interval::new(200, 300);
        assert_eq!(outer.overlap(&inner), Some(100));
        assert_eq!(inner.overlap(&outer), Some(100));
    }

    #[test]
    fn touching_endpoints_overlap_by_zero() {
        let a = Interval::new(0, 100);
        let b = Interval::new(100, 200);
        assert!(a.intersects(&b));
        assert_eq!(a.overlap(&b), Some(0));
    }

    #[test]
    fn full_range_overlap_saturates() {
        let a = Interval::new(i64::MIN, i64::MAX);
        let b = Interval::new(i64::MIN, i64::MAX);
        assert_eq!(a.overlap(&b), Some(i64::MAX));
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        let a = Interval::new(0, 99);
        let b = Interval::new(100, 200);
        assert!(!a.intersects(&b));
        assert_eq!(a.overlap(&b), None);
        assert_eq!(b.overlap(&a), None);
    }
}
