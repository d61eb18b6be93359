use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};

/// Check if the benchmark should continue running.
#[inline]
pub(crate) fn do_run(end: &Arc<AtomicBool>) -> bool {
  !end.load(Ordering::Acquire)
}

/// Format a number into a readable string with SI suffix.
///
/// # Examples
/// #[doctest]
/// ```rust
/// # use twenty48_lib::utils::format_number;
///
/// assert_eq!(format_number(0.0), "0");
/// assert_eq!(format_number(1.1), "1.1");
/// assert_eq!(format_number(1000.0), "1k");
/// assert_eq!(format_number(50000.0), "50k");
/// assert_eq!(format_number(1250000.0), "1.25M");
/// ```
#[allow(
  clippy::cast_possible_truncation,
  clippy::cast_sign_loss,
  clippy::missing_panics_doc
)]
pub fn format_number(input: f32) -> String {
  let (number, i) = if input < 1.0 {
    (input, 0.0)
  } else {
    let base: f32 = 1000.0;
    let i = input.log(base).floor();
    (input / base.powi(i as i32), i)
  };

  let string = format!("{number:.2}")
    .trim_end_matches('0')
    .trim_end_matches('.')
    .to_owned();

  if i >= 1.0 {
    let sizes = ['-', 'k', 'M', 'G', 'T'];
    format!("{string}{}", sizes[(i as usize).min(sizes.len() - 1)])
  } else {
    string
  }
}

#[cfg(feature = "notation")]
pub use notation::{parse_notation, to_notation, NotationError};

#[cfg(feature = "notation")]
mod notation {
  use regex::{Captures, Regex};
  use thiserror::Error;

  use crate::board::{self, Board, Tile, EMPTY, SIZE};

  #[derive(Debug, Error)]
  pub enum NotationError {
    #[error("expected 4 rows separated by '/', found {0}")]
    RowCount(usize),
    #[error("row {0} is longer than 4 tiles")]
    RowTooLong(usize),
    #[error("unexpected character {0:?} in row {1}")]
    InvalidCharacter(char, usize),
    #[error(transparent)]
    Board(#[from] board::Error),
  }

  /// Helper function for replacing all matches in a string using a replacement function
  fn replace_all(re: &Regex, haystack: &str, replacement: impl Fn(&Captures) -> String) -> String {
    let mut new = String::with_capacity(haystack.len());
    let mut last_match = 0;
    for caps in re.captures_iter(haystack) {
      let m = caps.get(0).expect("capture group 0 is guaranteed to exist");
      new.push_str(&haystack[last_match..m.start()]);
      new.push_str(&replacement(&caps));
      last_match = m.end();
    }
    new.push_str(&haystack[last_match..]);
    new
  }

  fn tile_from_char(c: char) -> Option<Tile> {
    match c {
      '-' => Some(EMPTY),
      'a'..='z' => Some(1 << (c as u32 - 'a' as u32 + 1)),
      _ => None,
    }
  }

  /// Boards only hold tiles from 2 up to `MAX_TILE`, which map onto `a..=z`.
  fn char_from_tile(tile: Tile) -> char {
    match tile {
      EMPTY => '-',
      _ => char::from(b'a' + (tile.trailing_zeros() - 1) as u8),
    }
  }

  /// Parse a board from its compact notation.
  ///
  /// Rows are separated by `/`, a tile `2^n` is written as the n-th letter of
  /// the alphabet and a run of empty tiles as its length. Trailing empty
  /// tiles of a row may be left out.
  ///
  /// # Errors
  /// Returns an error if there aren't four rows, a row is too long or
  /// contains an unexpected character.
  ///
  /// # Examples
  /// ```rust
  /// # use twenty48_lib::utils::parse_notation;
  ///
  /// let board = parse_notation("aa/4/1b/").unwrap();
  ///
  /// assert_eq!(board.tiles()[..4], [2, 2, 0, 0]);
  /// assert_eq!(board.get_tile(9), 4);
  /// ```
  #[allow(clippy::missing_panics_doc)] // https://github.com/rust-lang/rust-clippy/issues/11436
  pub fn parse_notation(input: &str) -> Result<Board, NotationError> {
    let parts: Vec<_> = input.trim().split('/').collect();

    if parts.len() != SIZE {
      return Err(NotationError::RowCount(parts.len()));
    }

    let re = Regex::new(r"\d+").expect("the regex is valid");

    let mut data = Vec::with_capacity(SIZE * SIZE);

    for (index, part) in parts.into_iter().enumerate() {
      let line = index + 1;

      // counts that don't fit are certainly too long
      let expanded = replace_all(&re, part, |captures| {
        let count = captures[0].parse().unwrap_or(SIZE + 1);
        "-".repeat(count.min(SIZE + 1))
      });

      if expanded.chars().count() > SIZE {
        return Err(NotationError::RowTooLong(line));
      }

      for c in expanded.chars() {
        let tile = tile_from_char(c).ok_or(NotationError::InvalidCharacter(c, line))?;
        data.push(tile);
      }

      data.resize(line * SIZE, EMPTY);
    }

    Ok(Board::new(data)?)
  }

  /// Convert a board to its compact notation.
  #[must_use]
  #[allow(clippy::missing_panics_doc)] // https://github.com/rust-lang/rust-clippy/issues/11436
  pub fn to_notation(board: &Board) -> String {
    let re = Regex::new(r"-+").expect("the regex is valid");

    let compress_row = |row: String| -> String {
      replace_all(&re, row.trim_end_matches('-'), |captures| {
        captures[0].len().to_string()
      })
    };

    board
      .tiles()
      .chunks(SIZE)
      .map(|row| row.iter().map(|&tile| char_from_tile(tile)).collect())
      .map(compress_row)
      .collect::<Vec<_>>()
      .join("/")
  }

}
