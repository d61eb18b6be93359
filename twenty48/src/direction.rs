use std::{fmt, str::FromStr};

use crate::error::Twenty48Error;

/// Direction of travel for a move.
///
/// A gesture that doesn't resolve to any of these is represented as `None`
/// wherever an `Option<Direction>` is returned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
  Left,
  Right,
  Up,
  Down,
}

#[derive(Debug)]
pub struct DirectionError(&'static str);
impl fmt::Display for DirectionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
impl std::error::Error for DirectionError {}

impl Direction {
  pub const ALL: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
  ];

  pub fn char(self) -> char {
    match self {
      Direction::Left => 'l',
      Direction::Right => 'r',
      Direction::Up => 'u',
      Direction::Down => 'd',
    }
  }

  /// Numeric code of the direction, inverse of `Direction::try_from(u8)`.
  pub fn index(self) -> u8 {
    match self {
      Direction::Left => 0,
      Direction::Right => 1,
      Direction::Up => 2,
      Direction::Down => 3,
    }
  }

  pub fn from_char(c: char) -> Result<Self, DirectionError> {
    match c.to_ascii_lowercase() {
      'l' => Ok(Direction::Left),
      'r' => Ok(Direction::Right),
      'u' => Ok(Direction::Up),
      'd' => Ok(Direction::Down),
      _ => Err(DirectionError("Unexpected character!")),
    }
  }

  pub fn is_horizontal(self) -> bool {
    matches!(self, Direction::Left | Direction::Right)
  }

  /// Direction along the same axis, pointing the other way.
  pub fn opposite(self) -> Self {
    match self {
      Direction::Left => Direction::Right,
      Direction::Right => Direction::Left,
      Direction::Up => Direction::Down,
      Direction::Down => Direction::Up,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = Twenty48Error;

  fn try_from(code: u8) -> Result<Self, Self::Error> {
    match code {
      0 => Ok(Direction::Left),
      1 => Ok(Direction::Right),
      2 => Ok(Direction::Up),
      3 => Ok(Direction::Down),
      _ => Err(Twenty48Error::InvalidDirection(code)),
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.char())
  }
}

impl FromStr for Direction {
  type Err = DirectionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut chars = s.trim().chars();

    match (chars.next(), chars.next()) {
      (Some(c), None) => Direction::from_char(c),
      _ => match s.trim().to_ascii_lowercase().as_str() {
        "left" => Ok(Direction::Left),
        "right" => Ok(Direction::Right),
        "up" => Ok(Direction::Up),
        "down" => Ok(Direction::Down),
        _ => Err(DirectionError("Unexpected direction!")),
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_codes() {
    for direction in Direction::ALL {
      assert_eq!(Direction::try_from(direction.index()).unwrap(), direction);
    }

    assert!(matches!(
      Direction::try_from(4),
      Err(Twenty48Error::InvalidDirection(4))
    ));
  }

  #[test]
  fn test_from_str() {
    assert_eq!("L".parse::<Direction>().unwrap(), Direction::Left);
    assert_eq!("down".parse::<Direction>().unwrap(), Direction::Down);
    assert_eq!(" u ".parse::<Direction>().unwrap(), Direction::Up);
    assert!("x".parse::<Direction>().is_err());
    assert!("".parse::<Direction>().is_err());
  }

  #[test]
  fn test_opposite() {
    for direction in Direction::ALL {
      let opposite = direction.opposite();

      assert_ne!(opposite, direction);
      assert_eq!(opposite.opposite(), direction);
      assert_eq!(opposite.is_horizontal(), direction.is_horizontal());
    }
  }
}
