#![warn(clippy::pedantic)]

use std::{fs::File, io::prelude::Read, time::Instant};

use clap::{value_parser, Arg, ArgMatches, Command};
use log::{debug, error};
use rand::{rngs::StdRng, SeedableRng};
use twenty48_lib::{
  utils::parse_notation, Board, Direction, Outcome, Point, Session, Shift, Snapshot, SIZE,
};

type Error = Box<dyn std::error::Error>;

struct Config {
  seed: Option<u64>,
  board: Option<String>,
  perf: Option<u64>,
  threads: usize,
}

impl Config {
  fn from_matches(matches: &ArgMatches) -> Self {
    Config {
      seed: matches.get_one::<u64>("seed").copied(),
      board: matches.get_one::<String>("board").cloned(),
      perf: matches.get_one::<u64>("perf").copied(),
      threads: matches
        .get_one::<usize>("threads")
        .copied()
        .unwrap_or_else(num_cpus::get),
    }
  }
}

fn main() {
  colog::init();

  let matches = Command::new("2048")
    .version("1.0")
    .arg(
      Arg::new("seed")
        .help("Seed for tile spawning (random by default)")
        .index(1)
        .value_parser(value_parser!(u64)),
    )
    .arg(
      Arg::new("board")
        .short('b')
        .long("board")
        .help("Load a board from a file and preview every move")
        .takes_value(true)
        .value_name("FILE"),
    )
    .arg(
      Arg::new("perf")
        .short('p')
        .long("perf")
        .help("Benchmark random games for the given number of seconds")
        .takes_value(true)
        .value_name("SECONDS")
        .conflicts_with("board")
        .value_parser(value_parser!(u64)),
    )
    .arg(
      Arg::new("threads")
        .short('t')
        .long("threads")
        .help("How many threads to use for benchmarking (default is all cores)")
        .takes_value(true)
        .value_parser(value_parser!(usize)),
    )
    .get_matches();

  let config = Config::from_matches(&matches);

  let result = if let Some(path) = &config.board {
    run_inspect(path)
  } else if let Some(time_limit) = config.perf {
    run_perf(time_limit, config.threads)
  } else {
    run(config.seed);
    Ok(())
  };

  if let Err(msg) = result {
    error!("{msg}");
  }
}

fn load_input(path: &str) -> Result<String, Error> {
  let mut file = File::open(path)?;
  let mut contents = String::new();
  file.read_to_string(&mut contents)?;
  Ok(contents)
}

/// Accepts both the grid printed by the game and the one-line notation.
fn parse_board(input: &str) -> Result<Board, Error> {
  let board = if input.trim().contains('/') {
    parse_notation(input)?
  } else {
    input.parse()?
  };

  Ok(board)
}

fn run_inspect(path: &str) -> Result<(), Error> {
  let board = parse_board(&load_input(path)?)?;

  println!("{board}");

  for direction in Direction::ALL {
    let Shift {
      board,
      score,
      moved,
    } = board.shifted(direction);

    if moved {
      println!("{direction}: +{score}\n{board}");
    } else {
      println!("{direction}: nothing moves\n");
    }
  }

  Ok(())
}

fn run_perf(time_limit: u64, threads: usize) -> Result<(), Error> {
  println!("Benchmarking on {threads} threads for {time_limit} s\n");

  let start = Instant::now();
  let stats = twenty48_lib::perf(time_limit, threads)?;
  let run_time = start.elapsed().as_micros();

  println!("{stats}");
  print_runtime(run_time);

  Ok(())
}

fn run(seed: Option<u64>) {
  use text_io::read;

  let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
  let mut session = Session::new(rng);

  println!("Moves: l, r, u, d or a gesture 'x1 y1 x2 y2'. 'reset' starts over, '$' quits.\n");
  draw(&mut session);

  loop {
    let line: String = read!("{}\n");
    let line = line.trim();

    let result = match line {
      "$" | "q" | "quit" => return,
      "reset" => {
        session.reset();
        draw(&mut session);
        continue;
      }
      _ => match (line.parse::<Direction>(), parse_gesture(line)) {
        (Ok(direction), _) => session.apply_move(direction),
        (_, Some((start, end))) => {
          session.pointer_down(start);
          session.pointer_up(end)
        }
        _ => {
          println!("Invalid input: {line:?}");
          continue;
        }
      },
    };

    match result {
      Ok(Outcome::NoOp) => debug!("nothing moved"),
      Ok(outcome) => debug!("{outcome}"),
      Err(err) => println!("Error occured: {err}"),
    }

    draw(&mut session);
  }
}

fn parse_gesture(line: &str) -> Option<(Point, Point)> {
  let coords = line
    .split_whitespace()
    .map(str::parse::<f64>)
    .collect::<Result<Vec<_>, _>>()
    .ok()?;

  match coords[..] {
    [x1, y1, x2, y2] => Some((Point::new(x1, y1), Point::new(x2, y2))),
    _ => None,
  }
}

/// Print the board with the freshly spawned tile marked and end the draw cycle.
fn draw(session: &mut Session<StdRng>) {
  let Snapshot {
    tiles,
    score,
    spawned,
  } = session.snapshot();

  let width = tiles.iter().max().map_or(1, |tile| tile.to_string().len());

  for (y, row) in tiles.chunks(SIZE).enumerate() {
    let line = row
      .iter()
      .enumerate()
      .map(|(x, &tile)| {
        let text = if tile == 0 {
          "-".to_owned()
        } else {
          tile.to_string()
        };

        if spawned == Some(y * SIZE + x) {
          format!("[{text:>width$}]")
        } else {
          format!(" {text:>width$} ")
        }
      })
      .collect::<String>();

    println!("{line}");
  }

  println!("score: {score}\n");

  session.finish_draw();
}

fn print_runtime(run_time: u128) {
  if run_time < 10_000 {
    println!("Time: {run_time} \u{03bc}s");
  } else if run_time < 10_000_000 {
    println!("Time: {} ms", run_time / 1000);
  } else {
    println!("Time: {} s", run_time / 1_000_000);
  }
}
