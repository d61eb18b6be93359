use std::{
  fmt,
  ops::{Add, AddAssign},
};

use super::{utils::format_number, Score};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Stats {
  pub moves: u64,
  pub rejected: u64,
  pub resets: u64,
  pub score: Score,
}
impl Stats {
  pub fn new() -> Stats {
    Stats::default()
  }

  pub fn total_moves(&self) -> u64 {
    self.moves + self.rejected
  }
}
impl fmt::Display for Stats {
  #[allow(clippy::cast_precision_loss)]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
      f,
      "Moves applied: {} ({})",
      self.moves,
      format_number(self.moves as f32)
    )?;
    writeln!(
      f,
      "Moves rejected: {} ({})",
      self.rejected,
      format_number(self.rejected as f32)
    )?;
    writeln!(f, "Sessions reset: {}", self.resets)?;
    write!(
      f,
      "Score gained: {} ({})",
      self.score,
      format_number(self.score as f32)
    )
  }
}
impl Add for Stats {
  type Output = Stats;

  fn add(self, other: Stats) -> Self::Output {
    Stats {
      moves: self.moves + other.moves,
      rejected: self.rejected + other.rejected,
      resets: self.resets + other.resets,
      score: self.score + other.score,
    }
  }
}
impl AddAssign for Stats {
  fn add_assign(&mut self, other: Stats) {
    *self = *self + other;
  }
}
