//! This module defines the `*CONSTRAINED_` records: nodal rigid bodies,
//! extra nodes attached to rigid bodies, joints, and spotwelds.

use serde::{Deserialize, Serialize};

/// The joint subtypes of `*CONSTRAINED_JOINT_*`.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum JointKind {
  /// A revolute (hinge) joint.
  Revolute,
  /// A spherical (ball) joint.
  Spherical,
  /// A cylindrical joint.
  Cylindrical,
  /// A translational joint.
  Translational,
  /// A universal joint.
  Universal,
  /// A planar joint.
  Planar,
  /// A subtype the recognizer did not resolve.
  Other
}

impl JointKind {
  /// Resolves the subtype atom following `*CONSTRAINED_JOINT_`.
  pub fn from_head(head: &str) -> Self {
    return match head {
      "REVOLUTE" => Self::Revolute,
      "SPHERICAL" => Self::Spherical,
      "CYLINDRICAL" => Self::Cylindrical,
      "TRANSLATIONAL" => Self::Translational,
      "UNIVERSAL" => Self::Universal,
      "PLANAR" => Self::Planar,
      _ => Self::Other
    };
  }
}

/// A nodal rigid body: `[pid, cid, nsid, pnode, iprt, drflag, rrflag]` at
/// 10-wide columns. The `_INERTIA` variant shares the leading columns.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ConstrainedNodalRigidBody {
  /// Part ID assigned to the rigid body.
  pub pid: i32,
  /// Coordinate system ID.
  pub cid: i32,
  /// Node set forming the body.
  pub nsid: i32,
  /// Pivot node.
  pub pnode: i32,
  /// Print flag.
  pub iprt: i32,
  /// Dynamic relaxation flag.
  pub drflag: i32,
  /// Rerun relaxation flag.
  pub rrflag: i32,
  /// Whether the keyword carried the `_INERTIA` suffix.
  pub has_inertia: bool
}

/// Extra nodes welded onto a rigid body. The `_SET` card is `[pid, nsid]`;
/// the `_NODE` variant reads `pid` from its first card and then accumulates
/// node IDs (up to eight 10-wide per line) until the next keyword.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ConstrainedExtraNodes {
  /// The rigid body part ID.
  pub pid: i32,
  /// The node set ID (`_SET` variant).
  pub nsid: i32,
  /// The individual node IDs (`_NODE` variant).
  pub node_ids: Vec<i32>,
  /// Whether this came from the `_SET` variant.
  pub is_set: bool
}

impl ConstrainedExtraNodes {
  /// Appends a node ID (`_NODE` variant).
  pub fn add_node(&mut self, nid: i32) {
    self.node_ids.push(nid);
  }

  /// Returns the number of individual nodes collected.
  pub fn num_nodes(&self) -> usize {
    return self.node_ids.len();
  }
}

/// A joint between two rigid bodies:
/// `[n1..n6, rps, damp]` at 10-wide columns. The failure load curve has no
/// column on this card, so `lcid` stays zero after parsing.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConstrainedJoint {
  /// The joint subtype.
  pub kind: JointKind,
  /// First joint node.
  pub n1: i32,
  /// Second joint node.
  pub n2: i32,
  /// Third joint node.
  pub n3: i32,
  /// Fourth joint node.
  pub n4: i32,
  /// Fifth joint node.
  pub n5: i32,
  /// Sixth joint node.
  pub n6: i32,
  /// Rigid/penalty selection flag.
  pub rps: i32,
  /// Damping flag.
  pub damp: i32,
  /// Failure load curve ID.
  pub lcid: i32
}

impl ConstrainedJoint {
  /// Instantiates a zeroed joint of a subtype.
  pub const fn new(kind: JointKind) -> Self {
    return Self {
      kind,
      n1: 0,
      n2: 0,
      n3: 0,
      n4: 0,
      n5: 0,
      n6: 0,
      rps: 0,
      damp: 0,
      lcid: 0
    };
  }
}

/// A spotweld between two nodes: `[n1, n2, sn, ss, n, m, tf]` at 10-wide
/// columns.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ConstrainedSpotweld {
  /// First welded node.
  pub n1: i32,
  /// Second welded node.
  pub n2: i32,
  /// Normal failure strength.
  pub sn: f64,
  /// Shear failure strength.
  pub ss: f64,
  /// Normal failure exponent.
  pub n: i32,
  /// Shear failure exponent.
  pub m: i32,
  /// Failure time.
  pub tf: f64
}
