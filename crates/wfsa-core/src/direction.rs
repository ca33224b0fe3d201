// Traversal direction: which end of an arc, which terminal side.

use std::fmt;

/// Direction flag shared by every directional query on an automaton.
///
/// - For arcs, `Forward` selects the outgoing arcs of a state and
///   `Backward` the incoming ones. Viewed from an arc, `state(Forward)` is
///   its target and `state(Backward)` its source.
/// - For terminal labels, `Forward` is the initial side and `Backward` the
///   final side.
/// - For topological order and shortest distance, `Backward` behaves as if
///   every arc were reversed.
///
/// The boolean encoding used at binding boundaries maps `true` to `Forward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Both directions, forward first.
    pub const ALL: [Direction; 2] = [Direction::Forward, Direction::Backward];

    /// Return the other direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Dense index (0 for forward, 1 for backward) for per-direction tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Backward => 1,
        }
    }

    #[inline]
    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

impl From<bool> for Direction {
    #[inline]
    fn from(forward: bool) -> Self {
        if forward {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

impl From<Direction> for bool {
    #[inline]
    fn from(direction: Direction) -> Self {
        direction.is_forward()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_encoding() {
        assert_eq!(Direction::from(true), Direction::Forward);
        assert_eq!(Direction::from(false), Direction::Backward);
        assert!(bool::from(Direction::Forward));
        assert!(!bool::from(Direction::Backward));
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn dense_index() {
        assert_eq!(Direction::Forward.index(), 0);
        assert_eq!(Direction::Backward.index(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&Direction::Backward).unwrap();
        assert_eq!(json, "\"Backward\"");
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::Backward);
    }
}
