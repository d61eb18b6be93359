use super::{Block, SIZE};
use crate::Direction;

/// Positions within a block, starting at the destination edge.
fn base(direction: Direction) -> [usize; SIZE] {
  match direction {
    Direction::Left | Direction::Up => [0, 1, 2, 3],
    Direction::Right | Direction::Down => [3, 2, 1, 0],
  }
}

/// Create `Block` representing given row
fn make_row(base: [usize; SIZE], y: usize) -> Block {
  base.map(|x| SIZE * y + x)
}

/// Create `Block` representing given column
fn make_col(base: [usize; SIZE], x: usize) -> Block {
  base.map(|y| x + SIZE * y)
}

/// Generate the four blocks that have to be compacted for a move in `direction`.
///
/// Each block is one row (horizontal moves) or one column (vertical moves),
/// ordered from the destination edge inwards. Blocks are disjoint and cover
/// the whole board.
///
/// # Examples
/// ```rust
/// # use twenty48_lib::{enumerate_blocks, Direction};
///
/// let blocks = enumerate_blocks(Direction::Down);
///
/// assert_eq!(blocks[0], [15, 11, 7, 3]);
/// assert_eq!(blocks[3], [12, 8, 4, 0]);
/// ```
pub fn enumerate_blocks(direction: Direction) -> [Block; SIZE] {
  let base = base(direction);

  if direction.is_horizontal() {
    base.map(|y| make_row(base, y))
  } else {
    base.map(|x| make_col(base, x))
  }
}
