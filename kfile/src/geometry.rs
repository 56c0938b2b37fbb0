//! This module defines the basic geometric vocabulary the K-file format
//! leans on -- currently just the coordinate axes, which show up as keyword
//! suffixes (`*LOAD_BODY_X` and friends).

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The three axes.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum Axis {
  /// The X axis.
  X,
  /// The Y axis.
  Y,
  /// The Z axis.
  Z,
}

impl From<Axis> for char {
  fn from(value: Axis) -> Self {
    return value.letter();
  }
}

impl From<Axis> for usize {
  fn from(value: Axis) -> Self {
    return value.number();
  }
}

impl TryFrom<usize> for Axis {
  type Error = ();

  fn try_from(value: usize) -> Result<Self, Self::Error> {
    return Ok(match value {
      1 => Self::X,
      2 => Self::Y,
      3 => Self::Z,
      _ => return Err(())
    });
  }
}

impl Display for Axis {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.letter());
  }
}

impl Axis {
  /// Returns all axes in order.
  pub const fn all() -> &'static [Self] {
    return &[Self::X, Self::Y, Self::Z];
  }

  /// Returns this axis' lowercase letter.
  pub const fn letter(&self) -> char {
    return match self {
      Axis::X => 'x',
      Axis::Y => 'y',
      Axis::Z => 'z',
    };
  }

  /// Returns this axis' number 1-3, as encoded in direction columns.
  pub const fn number(&self) -> usize {
    return match self {
      Axis::X => 1,
      Axis::Y => 2,
      Axis::Z => 3,
    };
  }
}
