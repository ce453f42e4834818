use std::cmp::Ordering;

/// Tolerant comparison of weights (kg) and lengths (mm), wrapping [`float_cmp::approx_eq!()`].
/// Sums of many pipe weights accumulate rounding errors, two values within [`FPA::EPSILON`]
/// of each other compare equal.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    pub const EPSILON: f64 = 1e-6;
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = Self::EPSILON, ulps = 8)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}
