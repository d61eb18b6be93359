use std::fmt;

use super::Score;

/// Result of a single move.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Outcome {
  /// No direction was resolved or nothing on the board could move
  NoOp,
  /// Tiles moved and a new tile was spawned
  Moved { score_delta: Score, spawned: usize },
}
impl Outcome {
  pub fn is_moved(self) -> bool {
    matches!(self, Self::Moved { .. })
  }

  pub fn score_delta(self) -> Score {
    match self {
      Self::NoOp => 0,
      Self::Moved { score_delta, .. } => score_delta,
    }
  }

  pub fn spawned(self) -> Option<usize> {
    match self {
      Self::NoOp => None,
      Self::Moved { spawned, .. } => Some(spawned),
    }
  }
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NoOp => write!(f, "Nothing moved"),
      Self::Moved {
        score_delta,
        spawned,
      } => write!(f, "Moved (+{score_delta}), spawned tile {spawned}"),
    }
  }
}
