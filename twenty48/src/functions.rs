use std::ops::Range;

use log::debug;
use rand::Rng;

use super::{
  board::{Block, Board, Tile, EMPTY, MAX_TILE, SIZE},
  error::Twenty48Error,
  Score,
};

/// Value of every freshly spawned tile.
pub const SPAWN_VALUE: Tile = 2;

/// Source of uniformly distributed indices.
///
/// Implemented for every [`rand::Rng`], tests can script their own.
pub trait RandomIndex {
  /// Return an index uniformly distributed over `range`.
  ///
  /// The range is half-open and never empty.
  fn random_index(&mut self, range: Range<usize>) -> usize;
}

impl<R: Rng> RandomIndex for R {
  fn random_index(&mut self, range: Range<usize>) -> usize {
    self.random_range(range)
  }
}

/// Outcome of compacting a single block.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Compaction {
  /// Whether any tile in the block moved or merged
  pub changed: bool,
  /// Sum of pre-merge values of all merged tiles
  pub score: Score,
}

/// Slide and merge tiles of `block` towards its first position.
///
/// Tiles are walked from position 1 onwards, each one travelling as far
/// towards position 0 as it can. A tile can merge with an equal neighbour,
/// but neither the resulting tile nor its destination can merge again
/// during this pass.
pub fn compact_block(board: &mut Board, block: &Block) -> Compaction {
  let mut merged = [false; SIZE];
  let mut compaction = Compaction::default();

  for i in 1..SIZE {
    let mut j = i;

    while j >= 1 {
      let current = board.get_tile(block[j]);
      let previous = board.get_tile(block[j - 1]);

      if current == EMPTY {
        break;
      }

      if previous == EMPTY {
        board.set_tile(block[j - 1], current);
        board.set_tile(block[j], EMPTY);

        merged[j - 1] = merged[j];
        merged[j] = false;
      } else if previous == current && current < MAX_TILE && !merged[j - 1] && !merged[j] {
        board.set_tile(block[j - 1], current * 2);
        board.set_tile(block[j], EMPTY);

        merged[j - 1] = true;
        compaction.score += Score::from(current);
      } else {
        break;
      }

      compaction.changed = true;
      j -= 1;
    }
  }

  compaction
}

/// Place a new tile into a uniformly chosen empty cell.
///
/// Returns the index of the new tile.
///
/// # Errors
/// Returns [`Twenty48Error::BoardFull`] if there is no empty cell.
pub fn spawn_tile<R: RandomIndex + ?Sized>(
  board: &mut Board,
  rng: &mut R,
) -> Result<usize, Twenty48Error> {
  let empty_tiles = board.pointers_to_empty_tiles().collect::<Vec<_>>();

  if empty_tiles.is_empty() {
    return Err(Twenty48Error::BoardFull);
  }

  let index = empty_tiles[rng.random_index(0..empty_tiles.len())];
  board.set_tile(index, SPAWN_VALUE);

  debug!("spawned {SPAWN_VALUE} at tile {index}");

  Ok(index)
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use rand::{rngs::StdRng, SeedableRng};

  use super::*;
  use crate::board::{enumerate_blocks, CELLS};

  /// Always picks the n-th option, wrapped to the range
  struct Fixed(usize);
  impl RandomIndex for Fixed {
    fn random_index(&mut self, range: Range<usize>) -> usize {
      range.start + self.0 % range.len()
    }
  }

  fn row(tiles: [Tile; SIZE]) -> Board {
    let mut data = tiles.to_vec();
    data.resize(CELLS, EMPTY);
    Board::new(data).unwrap()
  }

  fn compact_first_row(tiles: [Tile; SIZE]) -> ([Tile; SIZE], Compaction) {
    let mut board = row(tiles);
    let compaction = compact_block(&mut board, &[0, 1, 2, 3]);

    let mut result = [EMPTY; SIZE];
    result.copy_from_slice(&board.tiles()[..SIZE]);

    (result, compaction)
  }

  #[test]
  fn test_compact_rows() {
    let data = [
      ([2, 2, 0, 0], [4, 0, 0, 0], true, 2),
      ([2, 0, 2, 0], [4, 0, 0, 0], true, 2),
      ([2, 4, 2, 0], [2, 4, 2, 0], false, 0),
      ([0, 0, 0, 2], [2, 0, 0, 0], true, 0),
      ([0, 0, 0, 0], [0, 0, 0, 0], false, 0),
      ([2, 2, 2, 2], [4, 4, 0, 0], true, 4),
      ([2, 2, 2, 0], [4, 2, 0, 0], true, 2),
      ([4, 2, 2, 0], [4, 4, 0, 0], true, 2),
      ([4, 0, 2, 2], [4, 4, 0, 0], true, 2),
      ([8, 4, 4, 8], [8, 8, 8, 0], true, 4),
      ([4, 4, 8, 16], [8, 8, 16, 0], true, 4),
      ([0, 4, 4, 4], [8, 4, 0, 0], true, 4),
      ([16, 8, 4, 2], [16, 8, 4, 2], false, 0),
      ([MAX_TILE, MAX_TILE, 0, 0], [MAX_TILE, MAX_TILE, 0, 0], false, 0),
      ([0, MAX_TILE, MAX_TILE, 0], [MAX_TILE, MAX_TILE, 0, 0], true, 0),
      (
        [MAX_TILE / 2, MAX_TILE / 2, 0, 0],
        [MAX_TILE, 0, 0, 0],
        true,
        Score::from(MAX_TILE / 2),
      ),
    ];

    for (src, target, changed, score) in data {
      let (result, compaction) = compact_first_row(src);

      assert_eq!(result, target, "{src:?}");
      assert_eq!(compaction, Compaction { changed, score }, "{src:?}");
    }
  }

  #[test]
  fn test_compact_reversed_block() {
    let mut board = Board::from_str(
      "2 - - -
       2 - - -
       4 - - -
       4 - - -",
    )
    .unwrap();

    let compaction = compact_block(&mut board, &[12, 8, 4, 0]);

    assert!(compaction.changed);
    assert_eq!(compaction.score, 6);
    assert_eq!(
      [0, 4, 8, 12].map(|index| board.get_tile(index)),
      [0, 0, 4, 8]
    );
  }

  #[test]
  fn test_compaction_conserves_sum() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
      let data = (0..CELLS)
        .map(|_| match rng.random_range(0..5) {
          0 => EMPTY,
          exponent => 1 << exponent,
        })
        .collect();
      let board = Board::new(data).unwrap();

      for direction in crate::Direction::ALL {
        let mut compacted = board;

        for block in enumerate_blocks(direction) {
          compact_block(&mut compacted, &block);
        }

        assert_eq!(compacted.sum(), board.sum(), "{board}");
        assert!(compacted.count_empty() >= board.count_empty());
      }
    }
  }

  #[test]
  fn test_compaction_is_stable() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
      let data = (0..CELLS)
        .map(|_| match rng.random_range(0..4) {
          0 => EMPTY,
          exponent => 1 << exponent,
        })
        .collect();
      let mut board = Board::new(data).unwrap();
      let block = [0, 1, 2, 3];

      // compacting until nothing changes has to settle quickly
      let mut passes = 0;
      while compact_block(&mut board, &block).changed {
        passes += 1;
        assert!(passes < SIZE, "{board}");
      }

      assert!(!compact_block(&mut board, &block).changed);
    }
  }

  #[test]
  fn test_spawn_tile() {
    let mut board = row([2, 0, 4, 0]);

    let index = spawn_tile(&mut board, &mut Fixed(0)).unwrap();
    assert_eq!(index, 1);
    assert_eq!(board.get_tile(1), SPAWN_VALUE);

    let index = spawn_tile(&mut board, &mut Fixed(1)).unwrap();
    assert_eq!(index, 5);
    assert_eq!(board.count_empty(), CELLS - 4);
  }

  #[test]
  fn test_spawn_tile_uses_only_empty() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut board = Board::new_empty();

    for spawned in 1..=CELLS {
      spawn_tile(&mut board, &mut rng).unwrap();
      assert_eq!(board.count_empty(), CELLS - spawned);
    }

    assert!(board.is_full());
    assert!(board.tiles().iter().all(|&tile| tile == SPAWN_VALUE));
  }

  #[test]
  fn test_spawn_tile_full_board() {
    let mut board = Board::new(vec![2; CELLS]).unwrap();

    assert!(matches!(
      spawn_tile(&mut board, &mut Fixed(3)),
      Err(Twenty48Error::BoardFull)
    ));
    assert_eq!(board, Board::new(vec![2; CELLS]).unwrap());
  }
}
