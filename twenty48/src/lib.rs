mod board;
mod direction;
mod error;
mod functions;
mod gesture;
mod session;
mod state;
mod stats;
pub mod utils;

use std::{
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
  },
  thread::{sleep, spawn},
  time::Duration,
};

pub use board::{
  enumerate_blocks, Block, Board, Error as BoardError, Shift, Tile, CELLS, MAX_TILE, SIZE,
};
pub use direction::{Direction, DirectionError};
pub use error::Twenty48Error;
pub use functions::{compact_block, spawn_tile, Compaction, RandomIndex, SPAWN_VALUE};
pub use gesture::{classify_direction, Gesture, Point};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use rayon::{prelude::*, ThreadPoolBuilder};
pub use session::{Session, Snapshot};
pub use state::Outcome;
pub use stats::Stats;
use utils::do_run;

pub type Score = u64;

/// Consecutive rejected moves after which a benchmark session starts over.
const STUCK_LIMIT: u32 = 16;

fn play_until(end: &Arc<AtomicBool>, seed: u64) -> Stats {
  let mut stats = Stats::new();
  let mut rng = StdRng::seed_from_u64(seed);
  let mut session = Session::new(StdRng::seed_from_u64(seed.wrapping_add(1)));
  let mut stuck = 0;

  while do_run(end) {
    let direction = Direction::ALL[rng.random_index(0..Direction::ALL.len())];

    match session.apply_move(direction) {
      Ok(Outcome::Moved { score_delta, .. }) => {
        stats.moves += 1;
        stats.score += score_delta;
        stuck = 0;
      }
      Ok(Outcome::NoOp) => {
        stats.rejected += 1;
        stuck += 1;
      }
      Err(error) => {
        warn!("benchmark session failed: {error}");
        stuck = STUCK_LIMIT;
      }
    }

    if stuck >= STUCK_LIMIT {
      session.reset();
      stats.resets += 1;
      stuck = 0;
    }
  }

  stats
}

/// Play random moves on `threads` independent sessions for `time_limit`
/// seconds and report the totals.
///
/// # Errors
/// Returns an error if the thread pool can't be created.
pub fn perf(time_limit: u64, threads: usize) -> Result<Stats, rayon::ThreadPoolBuildError> {
  let time_limit = Duration::from_secs(time_limit);
  let end = Arc::new(AtomicBool::new(false));

  {
    let end = end.clone();
    spawn(move || {
      sleep(time_limit);
      end.store(true, Ordering::Release);
    });
  }

  let pool = ThreadPoolBuilder::new()
    .thread_name(|index| format!("session-{index}"))
    .num_threads(threads)
    .build()?;

  info!("running {threads} sessions for {time_limit:?}");

  let stats = pool.install(|| {
    (0..threads as u64)
      .into_par_iter()
      .map(|index| play_until(&end, index * 2))
      .reduce(Stats::new, |a, b| a + b)
  });

  Ok(stats)
}
