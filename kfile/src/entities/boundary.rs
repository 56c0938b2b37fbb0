//! This module defines boundary conditions: single-point constraints and
//! prescribed motion.

use serde::{Deserialize, Serialize};

/// The boundary condition flavours.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum BoundaryKind {
  /// `*BOUNDARY_SPC_NODE`: constrain one node.
  SpcNode,
  /// `*BOUNDARY_SPC_SET`: constrain a node set.
  SpcSet,
  /// `*BOUNDARY_PRESCRIBED_MOTION_NODE`.
  PrescribedMotionNode,
  /// `*BOUNDARY_PRESCRIBED_MOTION_SET`.
  PrescribedMotionSet
}

/// A single-point constraint. The `_NODE` card is `[nid, dof, vad]`; the
/// `_SET` card is `[nsid, cid, dofx..dofrz]`, all 10-wide.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BoundarySpc {
  /// Node or set flavour.
  pub kind: BoundaryKind,
  /// Node ID (`_NODE`) or node set ID (`_SET`).
  pub nid: i32,
  /// Coordinate system ID (`_SET` only).
  pub cid: i32,
  /// X-translation constraint flag (`_SET`).
  pub dofx: i32,
  /// Y-translation constraint flag (`_SET`).
  pub dofy: i32,
  /// Z-translation constraint flag (`_SET`).
  pub dofz: i32,
  /// X-rotation constraint flag (`_SET`).
  pub dofrx: i32,
  /// Y-rotation constraint flag (`_SET`).
  pub dofry: i32,
  /// Z-rotation constraint flag (`_SET`).
  pub dofrz: i32,
  /// DOF code 1-7 (`_NODE`).
  pub dof: i32,
  /// VAD code (`_NODE`).
  pub vad: i32
}

impl BoundarySpc {
  /// Instantiates a zeroed SPC of a flavour.
  pub const fn new(kind: BoundaryKind) -> Self {
    return Self {
      kind,
      nid: 0,
      cid: 0,
      dofx: 0,
      dofy: 0,
      dofz: 0,
      dofrx: 0,
      dofry: 0,
      dofrz: 0,
      dof: 0,
      vad: 0
    };
  }
}

/// A prescribed motion on a node or node set. One card:
/// `[nid, dof, vad, lcid, sf, vid, death, birth]` at 10-wide columns.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BoundaryPrescribedMotion {
  /// Node or set flavour.
  pub kind: BoundaryKind,
  /// Node ID or set ID.
  pub nid: i32,
  /// Degree of freedom (1=X, 2=Y, 3=Z, ...).
  pub dof: i32,
  /// Motion type: 0 displacement, 1 velocity, 2 acceleration.
  pub vad: i32,
  /// Load curve driving the motion.
  pub lcid: i32,
  /// Scale factor on the curve.
  pub sf: f64,
  /// Vector ID for the direction.
  pub vid: i32,
  /// Death time.
  pub death: f64,
  /// Birth time.
  pub birth: f64
}

impl BoundaryPrescribedMotion {
  /// Instantiates a zeroed prescribed motion (scale factor 1.0).
  pub const fn new(kind: BoundaryKind) -> Self {
    return Self {
      kind,
      nid: 0,
      dof: 0,
      vad: 0,
      lcid: 0,
      sf: 1.0,
      vid: 0,
      death: 0.0,
      birth: 0.0
    };
  }
}
