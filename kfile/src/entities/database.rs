//! This module defines the `*DATABASE_` records: output requests for binary
//! plot states, ASCII time-history files, node/element history lists, and
//! cross sections.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::entities::mesh::ElementKind;

/// Generates the DatabaseKind enum plus its lookup tables.
macro_rules! gen_database_kinds {
  (
    binary: [ $( { $bdesc:literal, $bname:ident, $bhead:literal }, )* ],
    ascii: [ $( { $adesc:literal, $aname:ident, $ahead:literal }, )* ]
  ) => {
    /// The database output requests the parser knows. Binary kinds share
    /// one card layout, ASCII kinds another.
    #[derive(
      Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd,
      Ord
    )]
    #[non_exhaustive]
    pub enum DatabaseKind {
      $(
        #[doc = $bdesc]
        $bname,
      )*
      $(
        #[doc = $adesc]
        $aname,
      )*
    }

    impl DatabaseKind {
      /// Returns the binary database kinds (`*DATABASE_BINARY_*`).
      pub const fn binary_kinds() -> &'static [Self] {
        return &[ $(Self::$bname,)* ];
      }

      /// Returns the ASCII database kinds (`*DATABASE_<NAME>`).
      pub const fn ascii_kinds() -> &'static [Self] {
        return &[ $(Self::$aname,)* ];
      }

      /// Returns the keyword head for the kind: the part after
      /// `*DATABASE_BINARY_` for binary kinds, after `*DATABASE_` for
      /// ASCII ones.
      pub const fn head(&self) -> &'static str {
        return match self {
          $(Self::$bname => $bhead,)*
          $(Self::$aname => $ahead,)*
        };
      }
    }
  }
}

gen_database_kinds!(
  binary: [
    { "Plot state output", BinaryD3plot, "D3PLOT" },
    { "Time history output", BinaryD3thdt, "D3THDT" },
    { "Restart dump output", BinaryD3dump, "D3DUMP" },
    { "Running restart output", BinaryRunrsf, "RUNRSF" },
    { "Interface force output", BinaryIntfor, "INTFOR" },
  ],
  ascii: [
    { "Global statistics", Glstat, "GLSTAT" },
    { "Material energies", Matsum, "MATSUM" },
    { "Nodal point data", Nodout, "NODOUT" },
    { "Element data", Elout, "ELOUT" },
    { "Resultant interface forces", Rcforc, "RCFORC" },
    { "Sliding interface energies", Sleout, "SLEOUT" },
    { "Nodal force groups", Nodfor, "NODFOR" },
    { "Cross section forces", Secforc, "SECFORC" },
    { "Rigid wall forces", Rwforc, "RWFORC" },
    { "Airbag statistics", Abstat, "ABSTAT" },
    { "Boundary condition energies", Bndout, "BNDOUT" },
    { "SPC reaction forces", Spcforc, "SPCFORC" },
    { "Joint forces", Jntforc, "JNTFORC" },
    { "Discrete element forces", Deforc, "DEFORC" },
  ]
);

impl Display for DatabaseKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.head());
  }
}

/// A binary database request: `[dt, lcdt, beam, npltc, psetid]` at 10-wide
/// columns.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DatabaseBinary {
  /// Which binary database this requests.
  pub kind: DatabaseKind,
  /// Output interval.
  pub dt: f64,
  /// Load curve overriding the interval.
  pub lcdt: i32,
  /// Beam output option.
  pub beam: i32,
  /// Number of plot states over the run.
  pub npltc: i32,
  /// Part set limiting the output.
  pub psetid: i32
}

impl DatabaseBinary {
  /// Instantiates a zeroed request of a kind.
  pub const fn new(kind: DatabaseKind) -> Self {
    return Self { kind, dt: 0.0, lcdt: 0, beam: 0, npltc: 0, psetid: 0 };
  }
}

/// An ASCII database request: `[dt, lcdt, binary, lcur, ioopt]` at 10-wide
/// columns.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DatabaseAscii {
  /// Which ASCII database this requests.
  pub kind: DatabaseKind,
  /// Output interval.
  pub dt: f64,
  /// Load curve overriding the interval.
  pub lcdt: i32,
  /// Binary flag.
  pub binary: i32,
  /// Load curve ID.
  pub lcur: i32,
  /// I/O option.
  pub ioopt: i32
}

impl DatabaseAscii {
  /// Instantiates a zeroed request of a kind.
  pub const fn new(kind: DatabaseKind) -> Self {
    return Self { kind, dt: 0.0, lcdt: 0, binary: 0, lcur: 0, ioopt: 0 };
  }
}

/// A `*DATABASE_HISTORY_NODE` request: node IDs accumulated across data
/// lines (up to eight 10-wide IDs each) until the next keyword.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DatabaseHistoryNode {
  /// The collected node IDs.
  pub node_ids: Vec<i32>
}

impl DatabaseHistoryNode {
  /// Appends a node ID.
  pub fn add_node(&mut self, nid: i32) {
    self.node_ids.push(nid);
  }

  /// Returns the number of collected nodes.
  pub fn num_nodes(&self) -> usize {
    return self.node_ids.len();
  }
}

/// A `*DATABASE_HISTORY_SHELL/SOLID/BEAM` request: element IDs accumulated
/// like the node variant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DatabaseHistoryElement {
  /// The collected element IDs.
  pub element_ids: Vec<i32>,
  /// Which element family the keyword named.
  pub kind: ElementKind
}

impl DatabaseHistoryElement {
  /// Instantiates an empty list for an element family.
  pub const fn new(kind: ElementKind) -> Self {
    return Self { element_ids: Vec::new(), kind };
  }

  /// Appends an element ID.
  pub fn add_element(&mut self, eid: i32) {
    self.element_ids.push(eid);
  }

  /// Returns the number of collected elements.
  pub fn num_elements(&self) -> usize {
    return self.element_ids.len();
  }
}

/// A `*DATABASE_CROSS_SECTION_SET` request:
/// `[csid, psid, ssid, tsid, dsid]` at 10-wide columns.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DatabaseCrossSection {
  /// Cross section ID.
  pub csid: i32,
  /// Part set ID.
  pub psid: i32,
  /// Segment set ID.
  pub ssid: i32,
  /// Thick shell set ID.
  pub tsid: i32,
  /// Discrete element set ID.
  pub dsid: i32
}
