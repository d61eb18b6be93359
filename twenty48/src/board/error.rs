use thiserror::Error;

use super::Tile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("board has {len} tiles, but 16 were expected")]
  WrongSize { len: usize },
  #[error("tile {index} holds {value}, which is neither empty nor a power of two")]
  InvalidTile { index: usize, value: Tile },
  #[error("row {line} is {width} tiles wide, but 4 were expected")]
  NotSquare { line: usize, width: usize },
  #[error("cannot parse tile {input:?} on row {line}")]
  Unparsable { line: usize, input: String },
}
