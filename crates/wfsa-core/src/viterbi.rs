// Viterbi semiring: maximum probability with the symbol trace that produced it.

use std::fmt;

use crate::SemiringError;
use crate::semiring::{Semiring, Sole};

/// A probability paired with the sequence of symbols along its path.
///
/// `plus` keeps the more probable alternative (the left operand on ties),
/// `times` multiplies probabilities and concatenates the traces. Because of
/// the concatenation, `times` is not commutative. Running the acyclic
/// shortest distance over this semiring is Viterbi decoding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ViterbiFields<T>"))]
pub struct Viterbi<T> {
    probability: f64,
    symbols: Vec<T>,
}

/// Unchecked wire form; deserialized values go through [`Viterbi::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ViterbiFields<T> {
    probability: f64,
    symbols: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<ViterbiFields<T>> for Viterbi<T> {
    type Error = SemiringError;

    fn try_from(fields: ViterbiFields<T>) -> Result<Self, Self::Error> {
        Viterbi::new(fields.probability, fields.symbols)
    }
}

impl<T> Viterbi<T> {
    /// Create a value; the probability must be non-negative.
    pub fn new(probability: f64, symbols: Vec<T>) -> Result<Self, SemiringError> {
        if !(probability >= 0.0) {
            return Err(SemiringError::InvalidProbability(probability));
        }
        Ok(Self {
            probability,
            symbols,
        })
    }

    /// Value for a single arc emitting one symbol.
    pub fn symbol(probability: f64, symbol: T) -> Result<Self, SemiringError> {
        Self::new(probability, vec![symbol])
    }

    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    #[inline]
    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }
}

impl<T: Clone + PartialEq + fmt::Debug> Semiring for Viterbi<T> {
    fn zero() -> Self {
        Self {
            probability: 0.0,
            symbols: Vec::new(),
        }
    }

    fn one() -> Self {
        Self {
            probability: 1.0,
            symbols: Vec::new(),
        }
    }

    fn plus(&self, other: &Self) -> Self {
        if self.probability < other.probability {
            other.clone()
        } else {
            self.clone()
        }
    }

    fn times(&self, other: &Self) -> Self {
        let mut symbols = Vec::with_capacity(self.symbols.len() + other.symbols.len());
        symbols.extend_from_slice(&self.symbols);
        symbols.extend_from_slice(&other.symbols);
        Self {
            probability: self.probability * other.probability,
            symbols,
        }
    }

    // Any trace with probability 0 is Zero.
    fn is_zero(&self) -> bool {
        self.probability == 0.0
    }

    fn is_one(&self) -> bool {
        self.probability == 1.0 && self.symbols.is_empty()
    }
}

impl<T: Clone + PartialEq + fmt::Debug> PartialEq<Sole> for Viterbi<T> {
    fn eq(&self, other: &Sole) -> bool {
        match other {
            Sole::Zero => self.is_zero(),
            Sole::One => self.is_one(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Viterbi<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, [", self.probability)?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}")?;
        }
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(probability: f64, symbols: &[&'static str]) -> Viterbi<&'static str> {
        Viterbi::new(probability, symbols.to_vec()).unwrap()
    }

    #[test]
    fn rejects_negative_probability() {
        assert!(matches!(
            Viterbi::<char>::new(-0.5, vec![]),
            Err(SemiringError::InvalidProbability(_))
        ));
        assert!(Viterbi::<char>::new(f64::NAN, vec![]).is_err());
    }

    #[test]
    fn equates_with_markers() {
        assert_eq!(v(0.0, &[]), Sole::Zero);
        assert_eq!(v(0.0, &["a"]), Sole::Zero);
        assert_eq!(v(1.0, &[]), Sole::One);
        assert_ne!(v(1.0, &["a"]), Sole::One);
    }

    #[test]
    fn identities() {
        let x = v(0.5, &["a"]);
        assert_eq!(x.plus(&Viterbi::zero()), x);
        assert_eq!(Viterbi::zero().plus(&x), x);
        assert!(x.times(&Viterbi::zero()).is_zero());
        assert!(Viterbi::zero().times(&x).is_zero());
        assert_eq!(x.times(&Viterbi::one()), x);
        assert_eq!(Viterbi::one().times(&x), x);
    }

    #[test]
    fn times_concatenates_in_order() {
        assert_eq!(v(0.5, &["a"]).times(&v(0.25, &["b"])), v(0.125, &["a", "b"]));
        assert_eq!(v(0.25, &["b"]).times(&v(0.5, &["a"])), v(0.125, &["b", "a"]));
    }

    #[test]
    fn plus_keeps_more_probable() {
        assert_eq!(v(0.25, &["a"]).plus(&v(0.5, &["b"])), v(0.5, &["b"]));
        assert_eq!(v(0.5, &["b"]).plus(&v(0.25, &["a"])), v(0.5, &["b"]));
        // Ties keep the left operand.
        assert_eq!(v(0.5, &["a"]).plus(&v(0.5, &["b"])), v(0.5, &["a"]));
    }

    #[test]
    fn display() {
        assert_eq!(v(0.5, &["a", "b"]).to_string(), "(0.5, [a, b])");
        assert_eq!(v(1.0, &[]).to_string(), "(1, [])");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_checks_probability() {
        let json = serde_json::to_string(&v(0.5, &["a"])).unwrap();
        assert_eq!(json, r#"{"probability":0.5,"symbols":["a"]}"#);
        let back: Viterbi<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.probability(), 0.5);
        assert_eq!(back.symbols(), ["a".to_string()]);

        let err = serde_json::from_str::<Viterbi<String>>(r#"{"probability":-1.0,"symbols":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid probability: -1"), "{err}");
    }
}
