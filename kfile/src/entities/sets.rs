//! This module defines sets: ID collections used as targets for contacts,
//! constraints, loads, and output requests.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The five set flavours. All share the same header card; SEGMENT sets carry
/// 4-node faces instead of a flat ID list.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum SetKind {
  /// A list of node IDs.
  NodeList,
  /// A list of part IDs.
  PartList,
  /// A list of 4-node segments (faces).
  Segment,
  /// A list of shell element IDs.
  Shell,
  /// A list of solid element IDs.
  Solid
}

impl Display for SetKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.name());
  }
}

impl SetKind {
  /// Returns all set kinds.
  pub const fn all() -> &'static [Self] {
    return &[
      Self::NodeList, Self::PartList, Self::Segment, Self::Shell, Self::Solid
    ];
  }

  /// Returns a display name for the set kind.
  pub const fn name(&self) -> &'static str {
    return match self {
      Self::NodeList => "NODE_LIST",
      Self::PartList => "PART_LIST",
      Self::Segment => "SEGMENT",
      Self::Shell => "SHELL",
      Self::Solid => "SOLID",
    };
  }
}

/// A set of any kind. The header card is `[sid, da1..da4, solver]` at
/// 10-wide columns (the last one text); data cards follow until the next
/// keyword -- up to eight IDs per line for list sets, exactly four node IDs
/// per segment for segment sets.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Set {
  /// The set ID.
  pub sid: i32,
  /// The set flavour.
  pub kind: SetKind,
  /// First default attribute; meaning depends on downstream use.
  pub da1: f64,
  /// Second default attribute.
  pub da2: f64,
  /// Third default attribute.
  pub da3: f64,
  /// Fourth default attribute.
  pub da4: f64,
  /// The solver token from the header (`MECH`, `THEM`, ...).
  pub solver: String,
  /// The collected IDs, for every kind except [`SetKind::Segment`].
  pub ids: Vec<i32>,
  /// The collected segments, for [`SetKind::Segment`] only.
  pub segments: Vec<[i32; 4]>
}

impl Set {
  /// Instantiates an empty set of a kind.
  pub fn new(kind: SetKind) -> Self {
    return Self {
      sid: 0,
      kind,
      da1: 0.0,
      da2: 0.0,
      da3: 0.0,
      da4: 0.0,
      solver: "MECH".to_owned(),
      ids: Vec::new(),
      segments: Vec::new()
    };
  }

  /// Returns the number of items: segments for segment sets, IDs otherwise.
  pub fn count(&self) -> usize {
    if self.kind == SetKind::Segment {
      return self.segments.len();
    }
    return self.ids.len();
  }

  /// Appends an ID. Zero marks an unused slot and is skipped.
  pub fn add_id(&mut self, id: i32) {
    if id > 0 {
      self.ids.push(id);
    }
  }

  /// Appends a segment, unless all four node slots are zero.
  pub fn add_segment(&mut self, n1: i32, n2: i32, n3: i32, n4: i32) {
    if n1 > 0 || n2 > 0 || n3 > 0 || n4 > 0 {
      self.segments.push([n1, n2, n3, n4]);
    }
  }
}

impl Default for Set {
  fn default() -> Self {
    return Self::new(SetKind::NodeList);
  }
}
