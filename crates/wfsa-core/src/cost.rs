// Tropical (min, +) semiring over f64 costs.

use std::fmt;

use crate::semiring::{Semiring, Sole};

/// A path cost: `plus` keeps the cheaper alternative, `times` adds costs.
///
/// Zero is an infinite cost (no path), One is cost 0 (empty path). With this
/// semiring the acyclic shortest distance is the classic single-source
/// shortest path.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cost(f64);

impl Cost {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Semiring for Cost {
    #[inline]
    fn zero() -> Self {
        Cost(f64::INFINITY)
    }

    #[inline]
    fn one() -> Self {
        Cost(0.0)
    }

    #[inline]
    fn plus(&self, other: &Self) -> Self {
        Cost(self.0.min(other.0))
    }

    #[inline]
    fn times(&self, other: &Self) -> Self {
        Cost(self.0 + other.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == f64::INFINITY
    }

    fn is_one(&self) -> bool {
        self.0 == 0.0
    }
}

impl PartialEq<Sole> for Cost {
    fn eq(&self, other: &Sole) -> bool {
        match other {
            Sole::Zero => self.is_zero(),
            Sole::One => self.is_one(),
        }
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLES: [f64; 6] = [-2.5, -1.0, 0.0, 0.5, 3.0, f64::INFINITY];

    #[test]
    fn equality() {
        assert_eq!(Cost::new(1.0), Cost::new(1.0));
        assert_ne!(Cost::new(1.0), Cost::new(2.0));
        for a in EXAMPLES {
            for b in EXAMPLES {
                assert_eq!(Cost::new(a) == Cost::new(b), a == b);
            }
        }
    }

    #[test]
    fn identities() {
        for value in EXAMPLES {
            let cost = Cost::new(value);
            assert_eq!(cost.times(&Cost::one()), cost);
            assert_eq!(Cost::one().times(&cost), cost);
            assert_eq!(cost.plus(&Cost::zero()), cost);
            assert_eq!(Cost::zero().plus(&cost), cost);
            assert!(cost.times(&Cost::zero()).is_zero());
            assert!(Cost::zero().times(&cost).is_zero());
        }
    }

    #[test]
    fn equates_with_markers() {
        assert_eq!(Cost::new(f64::INFINITY), Sole::Zero);
        assert_eq!(Cost::new(0.0), Sole::One);
        assert_ne!(Cost::new(1.0), Sole::One);
        assert_ne!(Cost::new(1.0), Sole::Zero);
    }

    #[test]
    fn plus_is_minimum() {
        assert_eq!(Cost::new(0.0).plus(&Cost::new(1.0)), Cost::new(0.0));
        assert_eq!(Cost::new(2.0).plus(&Cost::new(1.0)), Cost::new(1.0));
    }

    #[test]
    fn times_is_sum() {
        assert_eq!(Cost::new(0.0).times(&Cost::new(1.0)), Cost::new(1.0));
        assert_eq!(Cost::new(2.0).times(&Cost::new(1.0)), Cost::new(3.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_transparent() {
        let json = serde_json::to_string(&Cost::new(1.5)).unwrap();
        assert_eq!(json, "1.5");
        let back: Cost = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Cost::new(1.5));
    }
}
