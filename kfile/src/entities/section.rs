//! This module defines sections: the element-formulation and geometry
//! properties a part points at through its `secid`.

use serde::{Deserialize, Serialize};

/// The three section flavours, each with its own card layout.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum SectionKind {
  /// `*SECTION_SHELL`: header plus thickness card.
  Shell,
  /// `*SECTION_SOLID`: a single card.
  Solid,
  /// `*SECTION_BEAM`: header plus thickness card.
  Beam
}

impl SectionKind {
  /// Returns all section kinds.
  pub const fn all() -> &'static [Self] {
    return &[Self::Shell, Self::Solid, Self::Beam];
  }
}

/// A section of any kind. Fields not applicable to a kind keep their
/// defaults; the defaults mirror the solver's documented ones (shear factor
/// 1.0, two integration points, and so on) rather than plain zeroes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Section {
  /// The section ID.
  pub secid: i32,
  /// The section flavour.
  pub kind: SectionKind,
  /// The element formulation code.
  pub elform: i32,
  /// Shear correction factor (shell, beam).
  pub shrf: f64,
  /// Number of through-thickness integration points (shell).
  pub nip: i32,
  /// Printout option (shell).
  pub propt: f64,
  /// Quadrature rule or integration rule ID (shell, beam).
  pub qr_irid: i32,
  /// Composite section flag (shell).
  pub icomp: i32,
  /// 2D section type (shell).
  pub setyp: i32,
  /// Shell thickness at the four corner nodes.
  pub thickness: [f64; 4],
  /// Location of the reference surface (shell).
  pub nloc: f64,
  /// Non-structural mass per unit area (shell).
  pub marea: f64,
  /// Rigid-body-motion degree of freedom (shell).
  pub idof: f64,
  /// Edge set ID (shell).
  pub edgset: f64,
  /// Ambient element type (solid).
  pub aet: i32,
  /// Cross-section type (beam).
  pub cst: f64,
  /// Local coordinate option (beam).
  pub scoor: f64,
  /// Beam thickness in the s direction at both nodes.
  pub ts: [f64; 2],
  /// Beam thickness in the t direction at both nodes.
  pub tt: [f64; 2],
  /// s-direction location of the reference axis (beam).
  pub nsloc: f64,
  /// t-direction location of the reference axis (beam).
  pub ntloc: f64
}

impl Section {
  /// Instantiates a section of a kind with solver-default scalars.
  pub fn new(kind: SectionKind) -> Self {
    return Self {
      secid: 0,
      kind,
      elform: 0,
      shrf: 1.0,
      nip: 2,
      propt: 1.0,
      qr_irid: 0,
      icomp: 0,
      setyp: 1,
      thickness: [0.0; 4],
      nloc: 0.0,
      marea: 0.0,
      idof: 0.0,
      edgset: 0.0,
      aet: 0,
      cst: 0.0,
      scoor: 0.0,
      ts: [0.0; 2],
      tt: [0.0; 2],
      nsloc: 0.0,
      ntloc: 0.0
    };
  }
}

impl Default for Section {
  fn default() -> Self {
    return Self::new(SectionKind::Shell);
  }
}
