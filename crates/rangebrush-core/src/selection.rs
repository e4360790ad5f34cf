//! The selected sub-range of a domain.

use crate::scale::Domain;
use serde::{Deserialize, Serialize};

/// A selected sub-range `(low, high)` in domain units.
///
/// Values handed out by [`RangeSelector`](crate::RangeSelector) always satisfy
/// `domain.min <= low <= high <= domain.max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub low: f64,
    pub high: f64,
}

impl Selection {
    /// Create a new selection. No ordering or clamping is applied.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Selection covering a whole domain.
    pub fn full(domain: Domain) -> Self {
        Self::new(domain.min(), domain.max())
    }

    /// Width of the selection (`high - low`).
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Whether both edges coincide.
    pub fn is_collapsed(&self) -> bool {
        self.low == self.high
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Order the pair and clamp both edges into `domain`.
    pub fn clamped_to(self, domain: Domain) -> Self {
        let (low, high) = if self.low > self.high {
            (self.high, self.low)
        } else {
            (self.low, self.high)
        };
        let low = domain.clamp(low);
        let high = domain.clamp(high).max(low);
        Self { low, high }
    }

    /// Shift both edges by `delta`, limited so that neither edge leaves
    /// `domain`. Width is kept whenever the selection fits in the domain.
    pub fn translated_within(self, delta: f64, domain: Domain) -> Self {
        let mut delta = if delta.is_nan() { 0.0 } else { delta };
        if self.high + delta > domain.max() {
            delta = domain.max() - self.high;
        }
        if self.low + delta < domain.min() {
            delta = domain.min() - self.low;
        }
        Self::new(self.low + delta, self.high + delta).clamped_to(domain)
    }
}

impl From<(f64, f64)> for Selection {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

impl From<[f64; 2]> for Selection {
    fn from([low, high]: [f64; 2]) -> Self {
        Self::new(low, high)
    }
}
