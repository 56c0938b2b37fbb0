//! This module defines the `*INITIAL_` records: initial velocities and the
//! (recognized but not decoded) initial stress state.

use serde::{Deserialize, Serialize};

/// The initial velocity flavours.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum InitialVelocityKind {
  /// `*INITIAL_VELOCITY[_NODE]`.
  Node,
  /// `*INITIAL_VELOCITY_SET`.
  Set,
  /// `*INITIAL_VELOCITY_GENERATION`.
  Generation,
  /// Anything else under the velocity family.
  Other
}

/// An initial velocity record. The node/set card is
/// `[nsid, nsidex, boxid, irigid, vx, vy, vz, vxr]`; the generation card is
/// `[nsid, omega, vx, vy, vz, xc, yc, zc]`, both at 10-wide columns. The
/// non-generation card stops at `vxr`: `vyr` and `vzr` keep their slots but
/// are not decoded, matching the historical column coverage.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InitialVelocity {
  /// The velocity flavour.
  pub kind: InitialVelocityKind,
  /// Node ID or node set ID.
  pub nsid: i32,
  /// Excluded node set ID.
  pub nsidex: i32,
  /// Box limiting the affected nodes.
  pub boxid: i32,
  /// Rigid body treatment flag.
  pub irigid: i32,
  /// Initial X velocity.
  pub vx: f64,
  /// Initial Y velocity.
  pub vy: f64,
  /// Initial Z velocity.
  pub vz: f64,
  /// Initial rotational velocity about X.
  pub vxr: f64,
  /// Initial rotational velocity about Y (not decoded).
  pub vyr: f64,
  /// Initial rotational velocity about Z (not decoded).
  pub vzr: f64,
  /// Angular velocity (generation).
  pub omega: f64,
  /// X of the rotation center (generation).
  pub xc: f64,
  /// Y of the rotation center (generation).
  pub yc: f64,
  /// Z of the rotation center (generation).
  pub zc: f64
}

impl InitialVelocity {
  /// Instantiates a zeroed record of a flavour.
  pub const fn new(kind: InitialVelocityKind) -> Self {
    return Self {
      kind,
      nsid: 0,
      nsidex: 0,
      boxid: 0,
      irigid: 0,
      vx: 0.0,
      vy: 0.0,
      vz: 0.0,
      vxr: 0.0,
      vyr: 0.0,
      vzr: 0.0,
      omega: 0.0,
      xc: 0.0,
      yc: 0.0,
      zc: 0.0
    };
  }
}

/// An initial stress state for an element. The keyword is recognized so the
/// dispatcher skips its card data cleanly, but the multi-line stress tables
/// are not decoded and no record is ever committed.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct InitialStress {
  /// Element ID.
  pub eid: i32,
  /// Number of in-plane integration points.
  pub nplane: i32,
  /// Number of through-thickness integration points.
  pub nthick: i32,
  /// Large format flag.
  pub large: i32,
  /// XX stress component.
  pub sigxx: f64,
  /// YY stress component.
  pub sigyy: f64,
  /// ZZ stress component.
  pub sigzz: f64,
  /// XY stress component.
  pub sigxy: f64,
  /// YZ stress component.
  pub sigyz: f64,
  /// ZX stress component.
  pub sigzx: f64,
  /// Effective plastic strain.
  pub eps: f64
}
