use log::{debug, warn};

use super::{
  board::{enumerate_blocks, Board, Tile, CELLS},
  functions::{compact_block, spawn_tile, Compaction, RandomIndex},
  gesture::{classify_direction, Gesture, Point},
  state::Outcome,
  Direction, Score, Twenty48Error,
};

/// Read-only view of a session handed to renderers after each move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Snapshot {
  pub tiles: [Tile; CELLS],
  pub score: Score,
  /// Tile spawned by the last move, if it hasn't been drawn yet
  pub spawned: Option<usize>,
}

/// A single game: the board, the running score and the random source used
/// for spawning.
///
/// Every move runs to completion before the next one is accepted, so the
/// session needs no synchronization.
#[derive(Clone, Debug)]
pub struct Session<R> {
  board: Board,
  score: Score,
  spawned: Option<usize>,
  gesture: Gesture,
  rng: R,
}

impl<R: RandomIndex> Session<R> {
  /// Start a new game with a single tile on the board.
  pub fn new(rng: R) -> Self {
    let mut session = Self::with_board(Board::new_empty(), rng);
    session.spawn_initial();
    session
  }

  /// Continue from an existing board with a zero score.
  pub fn with_board(board: Board, rng: R) -> Self {
    Session {
      board,
      score: 0,
      spawned: None,
      gesture: Gesture::new(),
      rng,
    }
  }

  /// Throw away the current game and start over.
  pub fn reset(&mut self) {
    self.board = Board::new_empty();
    self.score = 0;
    self.spawned = None;
    self.gesture.reset();
    self.spawn_initial();
  }

  fn spawn_initial(&mut self) {
    // an empty board always has room
    if let Ok(index) = spawn_tile(&mut self.board, &mut self.rng) {
      self.spawned = Some(index);
    }
  }

  /// Move all tiles in `direction`, spawning a new tile if anything moved.
  ///
  /// # Errors
  /// Returns [`Twenty48Error::BoardFull`] if tiles moved but there is no room
  /// for a new one. The board keeps the moved tiles and the score is updated.
  pub fn apply_move(&mut self, direction: Direction) -> Result<Outcome, Twenty48Error> {
    let mut moved = false;
    let mut score_delta = 0;

    for block in enumerate_blocks(direction) {
      let Compaction { changed, score } = compact_block(&mut self.board, &block);

      moved |= changed;
      score_delta += score;
    }

    if !moved {
      debug!("move {direction} changed nothing");
      return Ok(Outcome::NoOp);
    }

    self.score += score_delta;

    let spawned = spawn_tile(&mut self.board, &mut self.rng).map_err(|error| {
      warn!("move {direction} left no room for a new tile");
      error
    })?;
    self.spawned = Some(spawned);

    debug!("move {direction} scored {score_delta}, total {}", self.score);

    Ok(Outcome::Moved {
      score_delta,
      spawned,
    })
  }

  /// Resolve a gesture and apply the resulting move.
  ///
  /// Gestures that don't resolve to a direction leave the session untouched.
  ///
  /// # Errors
  /// Same as [`Session::apply_move`].
  pub fn handle_gesture(&mut self, start: Point, end: Point) -> Result<Outcome, Twenty48Error> {
    match classify_direction(start, end) {
      Some(direction) => self.apply_move(direction),
      None => Ok(Outcome::NoOp),
    }
  }

  /// Record the start of a pointer gesture.
  pub fn pointer_down(&mut self, point: Point) {
    self.gesture.press(point);
  }

  /// Finish a pointer gesture and apply the resulting move.
  ///
  /// # Errors
  /// Same as [`Session::apply_move`].
  pub fn pointer_up(&mut self, point: Point) -> Result<Outcome, Twenty48Error> {
    match self.gesture.release(point) {
      Some(direction) => self.apply_move(direction),
      None => Ok(Outcome::NoOp),
    }
  }
}

impl<R> Session<R> {
  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn score(&self) -> Score {
    self.score
  }

  /// Index of the most recently spawned tile, until the next draw finishes.
  pub fn spawned(&self) -> Option<usize> {
    self.spawned
  }

  pub fn snapshot(&self) -> Snapshot {
    Snapshot {
      tiles: *self.board.tiles(),
      score: self.score,
      spawned: self.spawned,
    }
  }

  /// Mark the end of a draw cycle, the spawn highlight is no longer needed.
  pub fn finish_draw(&mut self) {
    self.spawned = None;
  }
}
