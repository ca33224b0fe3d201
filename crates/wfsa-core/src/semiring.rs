// Semiring capability trait, the Zero/One marker and the generalised weight.

use std::fmt;

use crate::SemiringError;

/// A weight type that forms a semiring.
///
/// `plus` combines alternative paths and must be commutative; `times`
/// composes weights along a path and must be associative but need not be
/// commutative. `zero()` is the identity of `plus` and absorbs under `times`;
/// `one()` is the identity of `times`.
///
/// Distributivity is not required: the algorithms in this workspace only
/// ever combine values through the two operations in path order.
pub trait Semiring: Clone + PartialEq + fmt::Debug {
    /// Identity for `plus`, absorbing for `times` ("no path").
    fn zero() -> Self;

    /// Identity for `times` ("empty path").
    fn one() -> Self;

    /// Combine two alternatives.
    fn plus(&self, other: &Self) -> Self;

    /// Compose `self` followed by `other`.
    fn times(&self, other: &Self) -> Self;

    /// Whether this value equals Zero.
    ///
    /// Override when several representations denote Zero (for example a
    /// probability of 0 with a non-empty trace).
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Whether this value equals One.
    fn is_one(&self) -> bool {
        *self == Self::one()
    }
}

/// The two designated semiring elements as a stateless marker.
///
/// A `Sole` carries no carrier type, so it can stand in for Zero or One of
/// any semiring. Most of the algebra works on markers alone; the exception
/// is `One + One`, whose result depends on the concrete semiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sole {
    Zero,
    One,
}

impl Sole {
    /// Sum of two markers.
    ///
    /// Zero is the identity, so any sum involving it succeeds. `One + One`
    /// returns [`SemiringError::UnsupportedOperation`].
    pub fn plus(self, other: Sole) -> Result<Sole, SemiringError> {
        match (self, other) {
            (Sole::Zero, x) | (x, Sole::Zero) => Ok(x),
            (Sole::One, Sole::One) => Err(SemiringError::UnsupportedOperation(
                "One + One requires a concrete semiring",
            )),
        }
    }

    /// Product of two markers. Zero absorbs; `One * One` is One.
    pub fn times(self, other: Sole) -> Sole {
        match (self, other) {
            (Sole::One, Sole::One) => Sole::One,
            _ => Sole::Zero,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sole::Zero
    }

    /// The concrete value this marker denotes in semiring `W`.
    pub fn value<W: Semiring>(self) -> W {
        match self {
            Sole::Zero => W::zero(),
            Sole::One => W::one(),
        }
    }

    /// Lift into a [`Weight`] of any semiring.
    pub fn weight<W>(self) -> Weight<W> {
        match self {
            Sole::Zero => Weight::Zero,
            Sole::One => Weight::One,
        }
    }
}

impl fmt::Display for Sole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sole::Zero => f.write_str("<Zero>"),
            Sole::One => f.write_str("<One>"),
        }
    }
}

/// A semiring value that may also be one of the bare markers.
///
/// This is what terminal labels store: a state can be marked initial with
/// plain One without the caller having to build a concrete `W::one()`.
/// Equality is semantic, so `Weight::Zero == Weight::Value(w)` holds exactly
/// when `w.is_zero()`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight<W> {
    Zero,
    One,
    Value(W),
}

impl<W: Semiring> Weight<W> {
    /// Sum of two weights.
    ///
    /// A marker meeting a concrete value is resolved against `W`; two bare
    /// One markers are an [`SemiringError::UnsupportedOperation`].
    pub fn plus(&self, other: &Self) -> Result<Self, SemiringError> {
        match (self, other) {
            (Weight::Zero, x) | (x, Weight::Zero) => Ok(x.clone()),
            (Weight::One, Weight::One) => Sole::One.plus(Sole::One).map(Sole::weight),
            (Weight::One, Weight::Value(v)) => Ok(Weight::Value(W::one().plus(v))),
            (Weight::Value(v), Weight::One) => Ok(Weight::Value(v.plus(&W::one()))),
            (Weight::Value(a), Weight::Value(b)) => Ok(Weight::Value(a.plus(b))),
        }
    }

    /// Product of two weights, `self` first.
    pub fn times(&self, other: &Self) -> Self {
        match (self, other) {
            (Weight::Zero, _) | (_, Weight::Zero) => Weight::Zero,
            (Weight::One, x) | (x, Weight::One) => x.clone(),
            (Weight::Value(a), Weight::Value(b)) => Weight::Value(a.times(b)),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Weight::Zero => true,
            Weight::One => false,
            Weight::Value(v) => v.is_zero(),
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Weight::Zero => false,
            Weight::One => true,
            Weight::Value(v) => v.is_one(),
        }
    }

    /// Resolve markers into concrete values of `W`.
    pub fn resolve(self) -> W {
        match self {
            Weight::Zero => W::zero(),
            Weight::One => W::one(),
            Weight::Value(v) => v,
        }
    }

    /// The concrete value, if this is not a bare marker.
    pub fn as_value(&self) -> Option<&W> {
        match self {
            Weight::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Transform the concrete value, keeping markers as they are.
    pub fn map<V, F>(self, f: F) -> Weight<V>
    where
        F: FnOnce(W) -> V,
    {
        match self {
            Weight::Zero => Weight::Zero,
            Weight::One => Weight::One,
            Weight::Value(v) => Weight::Value(f(v)),
        }
    }
}

impl<W> From<W> for Weight<W> {
    fn from(value: W) -> Self {
        Weight::Value(value)
    }
}

impl<W: Semiring> PartialEq for Weight<W> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Weight::Zero, x) | (x, Weight::Zero) => x.is_zero(),
            (Weight::One, x) | (x, Weight::One) => x.is_one(),
            (Weight::Value(a), Weight::Value(b)) => a == b,
        }
    }
}

impl<W: Semiring> PartialEq<Sole> for Weight<W> {
    fn eq(&self, other: &Sole) -> bool {
        match other {
            Sole::Zero => self.is_zero(),
            Sole::One => self.is_one(),
        }
    }
}

impl<W: fmt::Display> fmt::Display for Weight<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Zero => fmt::Display::fmt(&Sole::Zero, f),
            Weight::One => fmt::Display::fmt(&Sole::One, f),
            Weight::Value(v) => fmt::Display::fmt(v, f),
        }
    }
}
