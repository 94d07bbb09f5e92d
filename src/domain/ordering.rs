//! Neighbour swaps for user-ordered lists.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("direction must be `up` or `down`, got `{0}`")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Index of the neighbour `index` would swap with, if it exists.
pub fn neighbour(len: usize, index: usize, direction: Direction) -> Option<usize> {
    if index >= len {
        return None;
    }
    match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => Some(index + 1).filter(|&target| target < len),
    }
}

/// Swap `items[index]` with its neighbour. Returns `false` and leaves the
/// slice untouched when the move would leave the list.
pub fn swap_with_neighbour<T>(items: &mut [T], index: usize, direction: Direction) -> bool {
    match neighbour(items.len(), index, direction) {
        Some(target) => {
            items.swap(index, target);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_moves_are_rejected() {
        let mut items = vec!['a', 'b', 'c'];
        assert!(!swap_with_neighbour(&mut items, 0, Direction::Up));
        assert!(!swap_with_neighbour(&mut items, 2, Direction::Down));
        assert!(!swap_with_neighbour(&mut items, 9, Direction::Up));
        assert_eq!(items, ['a', 'b', 'c']);
    }

    #[test]
    fn swap_moves_one_step() {
        let mut items = vec!['a', 'b', 'c'];
        assert!(swap_with_neighbour(&mut items, 1, Direction::Down));
        assert_eq!(items, ['a', 'c', 'b']);
        assert!(swap_with_neighbour(&mut items, 2, Direction::Up));
        assert_eq!(items, ['a', 'b', 'c']);
    }

    #[test]
    fn direction_parses_lowercase_names() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(Direction::Down.inverse(), Direction::Up);
        assert!("left".parse::<Direction>().is_err());
    }
}
