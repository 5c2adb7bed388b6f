//! Navigation intents understood by the grid resolver.

/// Directional move over the two-dimensional card grid.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the direction that undoes this one on a full row or column.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// One step of flat (one-dimensional) traversal through the roster.
///
/// Used for swipe gestures and previous/next buttons, which ignore the grid
/// layout and walk the roster in order with wraparound.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    pub const fn reverse(self) -> Self {
        match self {
            Step::Previous => Step::Next,
            Step::Next => Step::Previous,
        }
    }
}

impl From<Direction> for Step {
    /// Collapses a direction onto the flat traversal axis.
    ///
    /// `Left` and `Up` walk backwards, `Right` and `Down` walk forwards.
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up | Direction::Left => Step::Previous,
            Direction::Down | Direction::Right => Step::Next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Direction::from_str("LEFT").unwrap(), Direction::Left);
        assert_eq!(Direction::from_str("up").unwrap(), Direction::Up);
        assert_eq!(Step::from_str("Next").unwrap(), Step::Next);
        assert!(Direction::from_str("sideways").is_err());
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn horizontal_directions_map_to_steps() {
        assert_eq!(Step::from(Direction::Left), Step::Previous);
        assert_eq!(Step::from(Direction::Right), Step::Next);
        assert_eq!(Step::Next.reverse(), Step::Previous);
    }
}
