//! This module defines contact interfaces. A `*CONTACT_` keyword names one
//! of a small zoo of algorithms; the parser resolves the common ones to a
//! variant and keeps the raw name either way.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The contact algorithms the parser tells apart. Heads are matched longest
/// first, so the `AUTOMATIC_` family wins over its plain counterparts.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum ContactKind {
  /// `AUTOMATIC_SINGLE_SURFACE`.
  AutomaticSingleSurface,
  /// `AUTOMATIC_SURFACE_TO_SURFACE`.
  AutomaticSurfaceToSurface,
  /// `AUTOMATIC_NODES_TO_SURFACE`.
  AutomaticNodesToSurface,
  /// `AUTOMATIC_GENERAL`.
  AutomaticGeneral,
  /// `TIED_SURFACE_TO_SURFACE`.
  TiedSurfaceToSurface,
  /// `TIED_NODES_TO_SURFACE`.
  TiedNodesToSurface,
  /// `TIED_SHELL_EDGE_TO_SURFACE`.
  TiedShellEdgeToSurface,
  /// `SURFACE_TO_SURFACE`.
  SurfaceToSurface,
  /// `NODES_TO_SURFACE`.
  NodesToSurface,
  /// Anything else; the raw name lives on the contact record.
  Other
}

impl Display for ContactKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{:?}", self);
  }
}

impl ContactKind {
  /// The recognized heads, longest-prefix first.
  const HEADS: &'static [(Self, &'static str)] = &[
    (Self::AutomaticSingleSurface, "AUTOMATIC_SINGLE_SURFACE"),
    (Self::AutomaticSurfaceToSurface, "AUTOMATIC_SURFACE_TO_SURFACE"),
    (Self::AutomaticNodesToSurface, "AUTOMATIC_NODES_TO_SURFACE"),
    (Self::AutomaticGeneral, "AUTOMATIC_GENERAL"),
    (Self::TiedSurfaceToSurface, "TIED_SURFACE_TO_SURFACE"),
    (Self::TiedNodesToSurface, "TIED_NODES_TO_SURFACE"),
    (Self::TiedShellEdgeToSurface, "TIED_SHELL_EDGE_TO_SURFACE"),
    (Self::SurfaceToSurface, "SURFACE_TO_SURFACE"),
    (Self::NodesToSurface, "NODES_TO_SURFACE"),
  ];

  /// Resolves a contact head (the keyword text after `*CONTACT_`, options
  /// stripped). Prefix matching, so decorated names like
  /// `AUTOMATIC_SURFACE_TO_SURFACE_TIEBREAK` still resolve to their family.
  pub fn from_head(head: &str) -> Self {
    for (kind, name) in Self::HEADS {
      if head.starts_with(name) {
        return *kind;
      }
    }
    return Self::Other;
  }
}

/// A contact interface: three 8-column cards of mixed integers and floats,
/// after an optional ID or title prefix card. `cards_parsed` records how far
/// decoding got; a contact interrupted by the next keyword keeps whatever it
/// had.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Contact {
  /// The resolved contact algorithm.
  pub kind: ContactKind,
  /// The raw keyword text after `*CONTACT_`, options stripped.
  pub type_name: String,
  /// Slave set ID; also the lookup key in the deck's contact index.
  pub ssid: i32,
  /// Master set ID.
  pub msid: i32,
  /// Slave surface type code.
  pub sstyp: i32,
  /// Master surface type code.
  pub mstyp: i32,
  /// Slave search box ID.
  pub sboxid: i32,
  /// Master search box ID.
  pub mboxid: i32,
  /// Slave-side output inclusion flag.
  pub spr: i32,
  /// Master-side output inclusion flag.
  pub mpr: i32,
  /// Static friction coefficient.
  pub fs: f64,
  /// Dynamic friction coefficient.
  pub fd: f64,
  /// Exponential decay coefficient.
  pub dc: f64,
  /// Viscous friction coefficient.
  pub vc: f64,
  /// Viscous damping coefficient.
  pub vdc: f64,
  /// Penetration check option.
  pub penchk: i32,
  /// Birth time.
  pub bt: f64,
  /// Death time.
  pub dt: f64,
  /// Penalty stiffness scale factor, slave side.
  pub sfs: f64,
  /// Penalty stiffness scale factor, master side.
  pub sfm: f64,
  /// Optional slave surface thickness.
  pub sst: f64,
  /// Optional master surface thickness.
  pub mst: f64,
  /// Slave thickness scale factor.
  pub sfst: f64,
  /// Master thickness scale factor.
  pub sfmt: f64,
  /// Coulomb friction scale factor.
  pub fsf: f64,
  /// Viscous friction scale factor.
  pub vsf: f64,
  /// Number of cards successfully decoded, 0 through 3.
  pub cards_parsed: usize
}

impl Contact {
  /// Instantiates a contact of a kind with solver-default scalars (death
  /// time 1e20, scale factors 1.0).
  pub fn new(kind: ContactKind, type_name: String) -> Self {
    return Self {
      kind,
      type_name,
      ssid: 0,
      msid: 0,
      sstyp: 0,
      mstyp: 0,
      sboxid: 0,
      mboxid: 0,
      spr: 0,
      mpr: 0,
      fs: 0.0,
      fd: 0.0,
      dc: 0.0,
      vc: 0.0,
      vdc: 0.0,
      penchk: 0,
      bt: 0.0,
      dt: 1.0e20,
      sfs: 1.0,
      sfm: 1.0,
      sst: 0.0,
      mst: 0.0,
      sfst: 1.0,
      sfmt: 1.0,
      fsf: 1.0,
      vsf: 1.0,
      cards_parsed: 0
    };
  }
}

impl Default for Contact {
  fn default() -> Self {
    return Self::new(ContactKind::Other, String::new());
  }
}
