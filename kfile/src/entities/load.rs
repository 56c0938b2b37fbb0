//! This module defines applied loads: point loads on nodes or node sets,
//! pressure on segments, and body loads.

use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

/// The load families of the `*LOAD_` keyword group. Only the node, segment
/// and body families get their own card decoders here; the rest exist so a
/// load record can still say what it is.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum LoadKind {
  /// `*LOAD_NODE_*`.
  Node,
  /// `*LOAD_SEGMENT`.
  Segment,
  /// `*LOAD_SHELL_SET`.
  ShellSet,
  /// `*LOAD_BODY_*`.
  Body,
  /// `*LOAD_RIGID_BODY`.
  RigidBody,
  /// `*LOAD_THERMAL_*`.
  Thermal,
  /// Anything else.
  Other
}

/// A point load: `[nid, dof, lcid, sf, cid, m1, m2, m3]` at 10-wide columns.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoadNode {
  /// The load family (always [`LoadKind::Node`] when parsed).
  pub kind: LoadKind,
  /// Node ID, or node set ID for the `_SET` variant.
  pub nid: i32,
  /// Degree of freedom the load acts along.
  pub dof: i32,
  /// Load curve ID.
  pub lcid: i32,
  /// Scale factor on the curve.
  pub sf: f64,
  /// Coordinate system ID.
  pub cid: i32,
  /// First follower-force node.
  pub m1: i32,
  /// Second follower-force node.
  pub m2: i32,
  /// Third follower-force node.
  pub m3: i32,
  /// Whether this came from the `_SET` variant.
  pub is_set: bool
}

impl LoadNode {
  /// Instantiates a zeroed node load (scale factor 1.0).
  pub const fn new(is_set: bool) -> Self {
    return Self {
      kind: LoadKind::Node,
      nid: 0,
      dof: 0,
      lcid: 0,
      sf: 1.0,
      cid: 0,
      m1: 0,
      m2: 0,
      m3: 0,
      is_set
    };
  }
}

/// A pressure load on one segment: `[lcid, sf, at, n1..n4]` at 10-wide
/// columns, one segment per line.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoadSegment {
  /// Load curve ID.
  pub lcid: i32,
  /// Scale factor on the curve.
  pub sf: f64,
  /// Arrival time.
  pub at: f64,
  /// First segment node.
  pub n1: i32,
  /// Second segment node.
  pub n2: i32,
  /// Third segment node.
  pub n3: i32,
  /// Fourth segment node.
  pub n4: i32
}

impl Default for LoadSegment {
  fn default() -> Self {
    return Self { lcid: 0, sf: 1.0, at: 0.0, n1: 0, n2: 0, n3: 0, n4: 0 };
  }
}

/// A body load (gravity and the like):
/// `[lcid, sf, lciddr, xc, yc, zc, cid]` at 10-wide columns. The direction
/// comes from the keyword suffix, not from the card.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoadBody {
  /// The direction from the `_X`/`_Y`/`_Z` suffix; `None` for other
  /// body-load variants.
  pub direction: Option<Axis>,
  /// Load curve ID.
  pub lcid: i32,
  /// Scale factor (typically the acceleration magnitude).
  pub sf: f64,
  /// Load curve for dynamic relaxation.
  pub lciddr: i32,
  /// X of the rotation center.
  pub xc: f64,
  /// Y of the rotation center.
  pub yc: f64,
  /// Z of the rotation center.
  pub zc: f64,
  /// Coordinate system ID.
  pub cid: i32
}

impl LoadBody {
  /// Instantiates a zeroed body load along an optional axis.
  pub const fn new(direction: Option<Axis>) -> Self {
    return Self {
      direction,
      lcid: 0,
      sf: 0.0,
      lciddr: 0,
      xc: 0.0,
      yc: 0.0,
      zc: 0.0,
      cid: 0
    };
  }
}
