use std::f64::consts::PI;

use crate::Direction;

/// A point reported by the input layer.
///
/// Either coordinate may be unset, in which case the point can't take part
/// in a gesture.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point {
  pub x: Option<f64>,
  pub y: Option<f64>,
}

impl Point {
  pub const UNSET: Point = Point { x: None, y: None };

  pub fn new(x: f64, y: f64) -> Self {
    Point {
      x: Some(x),
      y: Some(y),
    }
  }

  pub fn is_set(&self) -> bool {
    self.x.is_some() && self.y.is_some()
  }

  fn coords(self) -> Option<(f64, f64)> {
    Some((self.x?, self.y?))
  }
}

/// Classify the directed segment from `start` to `end`.
///
/// The plane is split into four sectors around the axes, with thresholds at
/// ±45° compared strictly. Returns `None` when either point is unset or both
/// points are the same.
///
/// # Examples
/// ```rust
/// # use twenty48_lib::{classify_direction, Direction, Point};
///
/// let start = Point::new(0.0, 0.0);
///
/// assert_eq!(classify_direction(start, Point::new(0.0, 100.0)), Some(Direction::Down));
/// assert_eq!(classify_direction(start, Point::new(-30.0, 10.0)), Some(Direction::Left));
/// assert_eq!(classify_direction(start, start), None);
/// ```
#[allow(clippy::float_cmp)]
pub fn classify_direction(start: Point, end: Point) -> Option<Direction> {
  let (x1, y1) = start.coords()?;
  let (x2, y2) = end.coords()?;

  if x1 == x2 && y1 == y2 {
    return None;
  }

  if x1 == x2 {
    return Some(if y1 > y2 { Direction::Up } else { Direction::Down });
  }

  if y1 == y2 {
    return Some(if x1 > x2 {
      Direction::Left
    } else {
      Direction::Right
    });
  }

  // screen coordinates, y grows downwards
  let deg = ((y2 - y1) / (x2 - x1)).atan() / PI * 180.0;

  let direction = if x1 > x2 {
    if deg > 45.0 {
      Direction::Up
    } else if deg > -45.0 {
      Direction::Left
    } else {
      Direction::Down
    }
  } else if deg > 45.0 {
    Direction::Down
  } else if deg > -45.0 {
    Direction::Right
  } else {
    Direction::Up
  };

  Some(direction)
}

/// Tracks the start and end of a single pointer gesture.
///
/// Both points are reset after every release, so each gesture is independent
/// of the previous one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gesture {
  start: Point,
  end: Point,
}

impl Gesture {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record the start of a gesture, overwriting any unfinished one.
  pub fn press(&mut self, point: Point) {
    self.start = point;
  }

  /// Record the end of a gesture and classify it.
  pub fn release(&mut self, point: Point) -> Option<Direction> {
    self.end = point;

    let direction = classify_direction(self.start, self.end);

    self.reset();

    direction
  }

  pub fn reset(&mut self) {
    self.start = Point::UNSET;
    self.end = Point::UNSET;
  }

  pub fn is_pressed(&self) -> bool {
    self.start.is_set()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn classify(start: (f64, f64), end: (f64, f64)) -> Option<Direction> {
    classify_direction(Point::new(start.0, start.1), Point::new(end.0, end.1))
  }

  #[test]
  fn test_axis_aligned() {
    assert_eq!(classify((0.0, 0.0), (0.0, 100.0)), Some(Direction::Down));
    assert_eq!(classify((0.0, 100.0), (0.0, 0.0)), Some(Direction::Up));
    assert_eq!(classify((50.0, 5.0), (0.0, 5.0)), Some(Direction::Left));
    assert_eq!(classify((0.0, 5.0), (50.0, 5.0)), Some(Direction::Right));
  }

  #[test]
  fn test_degenerate() {
    assert_eq!(classify((10.0, 10.0), (10.0, 10.0)), None);

    let end = Point::new(3.0, 4.0);
    let half_set = Point {
      x: Some(1.0),
      y: None,
    };

    assert_eq!(classify_direction(Point::UNSET, end), None);
    assert_eq!(classify_direction(end, Point::UNSET), None);
    assert_eq!(classify_direction(half_set, end), None);
  }

  #[test]
  fn test_sectors() {
    let data = [
      ((0.0, 0.0), (100.0, 20.0), Direction::Right),
      ((0.0, 0.0), (100.0, -20.0), Direction::Right),
      ((0.0, 0.0), (20.0, 100.0), Direction::Down),
      ((0.0, 0.0), (20.0, -100.0), Direction::Up),
      ((0.0, 0.0), (-100.0, 20.0), Direction::Left),
      ((0.0, 0.0), (-100.0, -20.0), Direction::Left),
      ((0.0, 0.0), (-20.0, 100.0), Direction::Down),
      ((0.0, 0.0), (-20.0, -100.0), Direction::Up),
    ];

    for (start, end, target) in data {
      assert_eq!(classify(start, end), Some(target), "{start:?} -> {end:?}");
    }
  }

  #[test]
  fn test_diagonal_ties() {
    // +45° stays horizontal, -45° goes vertical
    assert_eq!(classify((10.0, 10.0), (0.0, 0.0)), Some(Direction::Left));
    assert_eq!(classify((10.0, 0.0), (0.0, 10.0)), Some(Direction::Down));
    assert_eq!(classify((0.0, 0.0), (10.0, 10.0)), Some(Direction::Right));
    assert_eq!(classify((0.0, 10.0), (10.0, 0.0)), Some(Direction::Up));
  }

  #[test]
  fn test_antisymmetric() {
    let pairs = [
      ((0.0, 0.0), (0.0, 7.0)),
      ((3.0, 1.0), (-8.0, 1.0)),
      ((0.0, 0.0), (40.0, 3.0)),
      ((5.0, 5.0), (6.0, -30.0)),
    ];

    for (p, q) in pairs {
      let forward = classify(p, q).unwrap();
      let backward = classify(q, p).unwrap();

      assert_eq!(forward.opposite(), backward, "{p:?} <-> {q:?}");
    }
  }

  #[test]
  fn test_gesture_resets() {
    let mut gesture = Gesture::new();

    gesture.press(Point::new(0.0, 0.0));
    assert!(gesture.is_pressed());
    assert_eq!(gesture.release(Point::new(0.0, -5.0)), Some(Direction::Up));
    assert!(!gesture.is_pressed());

    // release without press has no start point
    assert_eq!(gesture.release(Point::new(9.0, 9.0)), None);

    gesture.press(Point::new(0.0, 0.0));
    gesture.press(Point::new(100.0, 0.0));
    assert_eq!(gesture.release(Point::new(0.0, 0.0)), Some(Direction::Left));
  }
}
