//! This module defines load curves (`*DEFINE_CURVE`): tabulated functions
//! referenced by loads, boundary conditions, and control settings.

use serde::{Deserialize, Serialize};

/// A load curve: a header of scale/offset scalars, then an unbounded run of
/// (abscissa, ordinate) pairs at 20-wide columns until the next keyword.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Curve {
  /// The load curve ID.
  pub lcid: i32,
  /// Stress-initialization-by-dynamic-relaxation flag.
  pub sidr: i32,
  /// Scale factor for the abscissa.
  pub sfa: f64,
  /// Scale factor for the ordinate.
  pub sfo: f64,
  /// Offset for the abscissa.
  pub offa: f64,
  /// Offset for the ordinate.
  pub offo: f64,
  /// Data type flag.
  pub dattyp: i32,
  /// The data points in source order.
  pub points: Vec<(f64, f64)>,
  /// The title line, when the keyword carried the `_TITLE` option.
  pub title: String
}

impl Curve {
  /// Instantiates an empty curve with unit scale factors.
  pub fn new() -> Self {
    return Self {
      lcid: 0,
      sidr: 0,
      sfa: 1.0,
      sfo: 1.0,
      offa: 0.0,
      offo: 0.0,
      dattyp: 0,
      points: Vec::new(),
      title: String::new()
    };
  }

  /// Appends a data point.
  pub fn add_point(&mut self, a: f64, o: f64) {
    self.points.push((a, o));
  }

  /// Returns the number of data points.
  pub fn num_points(&self) -> usize {
    return self.points.len();
  }

  /// Returns a point by index, (0.0, 0.0) if out of range.
  pub fn point(&self, idx: usize) -> (f64, f64) {
    return self.points.get(idx).copied().unwrap_or((0.0, 0.0));
  }
}

impl Default for Curve {
  fn default() -> Self {
    return Self::new();
  }
}
