//! Semiring abstraction for weighted finite-state automata.
//!
//! Arc weights, terminal labels and shortest distances are all values of a
//! semiring: a type with an associative `times` that composes weights along a
//! path, a commutative `plus` that combines alternative paths, and the two
//! distinguished elements Zero and One.
//!
//! # Architecture
//!
//! - [`semiring`] -- The [`Semiring`] trait, the [`Sole`] Zero/One marker and
//!   the generalised [`Weight`] that mixes markers with concrete values
//! - [`direction`] -- Forward/backward flag used by every directional query
//! - [`cost`] -- Tropical semiring: `plus` is minimum, `times` is addition
//! - [`viterbi`] -- Maximum-probability semiring that keeps a symbol trace

pub mod cost;
pub mod direction;
pub mod semiring;
pub mod viterbi;

pub use cost::Cost;
pub use direction::Direction;
pub use semiring::{Semiring, Sole, Weight};
pub use viterbi::Viterbi;

/// Error type for semiring operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SemiringError {
    /// `One + One` on bare markers: without a concrete carrier type there is
    /// no way to tell which semiring the sum belongs to.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    #[error("invalid probability: {0}")]
    InvalidProbability(f64),
}
