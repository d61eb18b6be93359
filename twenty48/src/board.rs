mod blocks;
mod error;

use std::{fmt, str::FromStr};

pub use blocks::enumerate_blocks;
pub use error::Error;

use super::{Direction, Score};
use crate::functions::{compact_block, Compaction};

/// Value of a tile. Zero marks an empty cell, anything else is a power of two.
pub type Tile = u32;

/// Width and height of the board.
pub const SIZE: usize = 4;
/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;
/// Value of an empty cell.
pub const EMPTY: Tile = 0;
/// Largest tile a board can hold. Two of them never merge.
pub const MAX_TILE: Tile = 1 << 26;

/// Indices of one row or column, ordered from the destination edge inwards.
pub type Block = [usize; SIZE];

/// Result of previewing a move with [`Board::shifted`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Shift {
  pub board: Board,
  pub score: Score,
  pub moved: bool,
}

/// A 4x4 board stored in row-major order.
///
/// Every tile is guaranteed to be either empty or a power of two.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Board {
  data: [Tile; CELLS],
}

impl Board {
  /// Create a new board from a flat row-major vector of tiles.
  ///
  /// # Errors
  /// Returns an error if there aren't exactly 16 tiles or some tile is
  /// neither empty nor a power of two.
  pub fn new(data: Vec<Tile>) -> Result<Board, Error> {
    let data: [Tile; CELLS] = data
      .try_into()
      .map_err(|data: Vec<Tile>| Error::WrongSize { len: data.len() })?;

    if let Some((index, &value)) = data
      .iter()
      .enumerate()
      .find(|&(.., &value)| !is_valid_tile(value))
    {
      return Err(Error::InvalidTile { index, value });
    }

    Ok(Board { data })
  }

  /// Create an empty board.
  pub fn new_empty() -> Board {
    Board {
      data: [EMPTY; CELLS],
    }
  }

  /// Get reference to slice of all tiles in the board.
  pub fn tiles(&self) -> &[Tile; CELLS] {
    &self.data
  }

  /// Get value of a tile at the given index.
  ///
  /// # Panics
  /// Panics if the index is out of bounds.
  pub fn get_tile(&self, index: usize) -> Tile {
    *self
      .data
      .get(index)
      .unwrap_or_else(|| panic!("Tile index out of bounds: {index}"))
  }

  /// Set a tile at the given index.
  ///
  /// # Panics
  /// Panics if the index is out of bounds or the value isn't a valid tile.
  pub fn set_tile(&mut self, index: usize, value: Tile) {
    assert!(
      is_valid_tile(value),
      "attempted to write {value} to tile {index} at board \n{self}"
    );

    let tile = self
      .data
      .get_mut(index)
      .unwrap_or_else(|| panic!("Tile index out of bounds: {index}"));

    *tile = value;
  }

  /// Get iterator over indices of all empty tiles in the board.
  pub fn pointers_to_empty_tiles(&self) -> impl Iterator<Item = usize> + '_ {
    self
      .data
      .iter()
      .enumerate()
      .filter(|&(.., &tile)| tile == EMPTY)
      .map(|(index, ..)| index)
  }

  pub fn count_empty(&self) -> usize {
    self.pointers_to_empty_tiles().count()
  }

  pub fn is_full(&self) -> bool {
    self.pointers_to_empty_tiles().next().is_none()
  }

  pub fn max_tile(&self) -> Tile {
    self.data.iter().copied().max().unwrap_or(EMPTY)
  }

  /// Sum of all tiles. Moves never change it, only spawns do.
  pub fn sum(&self) -> u64 {
    self.data.iter().map(|&tile| u64::from(tile)).sum()
  }

  /// Preview a move in `direction` without spawning a new tile.
  pub fn shifted(&self, direction: Direction) -> Shift {
    let mut board = *self;

    let (moved, score) = enumerate_blocks(direction).iter().fold(
      (false, 0),
      |(moved, score), block| {
        let Compaction { changed, score: gained } = compact_block(&mut board, block);
        (moved | changed, score + gained)
      },
    );

    Shift {
      board,
      score,
      moved,
    }
  }
}

fn is_valid_tile(value: Tile) -> bool {
  value == EMPTY || (value.is_power_of_two() && (2..=MAX_TILE).contains(&value))
}

impl FromStr for Board {
  type Err = Error;

  /// Parse a string into a board.
  ///
  /// Expects the same format that is produced by [`Board::to_string`]: four
  /// lines of four whitespace separated tiles, with `-`, `.` or `0` for
  /// empty tiles. Blank lines are skipped.
  ///
  /// # Errors
  /// Returns an error if the board is not 4x4 or contains invalid tiles.
  fn from_str(input_string: &str) -> Result<Board, Self::Err> {
    let rows = input_string
      .lines()
      .map(str::trim)
      .filter(|row| !row.is_empty())
      .collect::<Vec<_>>();

    let mut data = Vec::with_capacity(CELLS);

    for (index, row) in rows.iter().enumerate() {
      let line = index + 1;
      let tiles = row.split_whitespace().collect::<Vec<_>>();

      if tiles.len() != SIZE {
        return Err(Error::NotSquare {
          line,
          width: tiles.len(),
        });
      }

      for tile in tiles {
        let value = match tile {
          "-" | "." => EMPTY,
          _ => tile.parse().map_err(|_| Error::Unparsable {
            line,
            input: tile.to_owned(),
          })?,
        };

        data.push(value);
      }
    }

    Board::new(data)
  }
}

impl fmt::Display for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let width = self.max_tile().to_string().len();

    for row in self.data.chunks(SIZE) {
      let line = row
        .iter()
        .map(|&tile| match tile {
          EMPTY => format!("{:>width$}", '-'),
          _ => format!("{tile:>width$}"),
        })
        .collect::<Vec<_>>()
        .join(" ");

      writeln!(f, "{line}")?;
    }

    Ok(())
  }
}
