//! This module defines the mesh-level entities: nodes, parts, and elements.
//! These are the families that dominate real decks (million-line meshes are
//! routine), so their records stay flat and copyable.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single node: an ID, three coordinates, and two constraint codes.
///
/// Card layout (column widths `[8, 16, 16, 16, 8, 8]`):
///
/// ```text
/// *NODE
/// $#   nid               x               y               z      tc      rc
///        1       100.0000        200.0000        300.0000       0       0
/// ```
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Node {
  /// The node ID.
  pub nid: i32,
  /// The X coordinate.
  pub x: f64,
  /// The Y coordinate.
  pub y: f64,
  /// The Z coordinate.
  pub z: f64,
  /// The translational constraint code.
  pub tc: i32,
  /// The rotational constraint code.
  pub rc: i32
}

/// A part: a named grouping of elements sharing a section and a material.
///
/// Two cards: an 80-wide free-text name, then eight 10-wide integers.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Part {
  /// The part name, up to 80 characters, trimmed.
  pub name: String,
  /// The part ID.
  pub pid: i32,
  /// The section ID.
  pub secid: i32,
  /// The material ID.
  pub mid: i32,
  /// The equation-of-state ID.
  pub eosid: i32,
  /// The hourglass ID.
  pub hgid: i32,
  /// The gravity load curve.
  pub grav: i32,
  /// The adaptive remeshing option.
  pub adpopt: i32,
  /// The thermal material ID.
  pub tmid: i32
}

/// The three element formulation families sharing the element card layout.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum ElementKind {
  /// A shell element (3 or 4 nodes).
  Shell,
  /// A solid element (4 to 8 nodes).
  Solid,
  /// A beam element (2 nodes plus orientation node).
  Beam
}

impl Display for ElementKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.name());
  }
}

impl ElementKind {
  /// Returns all element kinds.
  pub const fn all() -> &'static [Self] {
    return &[Self::Shell, Self::Solid, Self::Beam];
  }

  /// Returns the keyword suffix for this element kind.
  pub const fn name(&self) -> &'static str {
    return match self {
      Self::Shell => "SHELL",
      Self::Solid => "SOLID",
      Self::Beam => "BEAM",
    };
  }
}

/// An element of any of the three kinds. The card is ten 8-wide integers:
/// element ID, part ID, then up to eight node IDs (zero for unused slots).
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Element {
  /// The element ID.
  pub eid: i32,
  /// The ID of the part this element belongs to.
  pub pid: i32,
  /// The node IDs; unused trailing slots hold zero.
  pub nodes: [i32; 8],
  /// The element formulation family.
  pub kind: ElementKind,
  /// The 1-based index of the highest non-zero node slot, clamped to zero
  /// when fewer than three nodes are set.
  pub node_count: u8
}

impl Element {
  /// Instantiates a zeroed element of a kind.
  pub const fn new(kind: ElementKind) -> Self {
    return Self { eid: 0, pid: 0, nodes: [0; 8], kind, node_count: 0 };
  }
}

impl Default for Element {
  fn default() -> Self {
    return Self::new(ElementKind::Shell);
  }
}
