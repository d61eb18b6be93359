use thiserror::Error;

use crate::board;

#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum Twenty48Error {
  #[error("invalid direction code: {0}")]
  InvalidDirection(u8),
  #[error("no empty tiles left")]
  BoardFull,
  #[error(transparent)]
  MisshapedBoard(#[from] board::Error),
}
