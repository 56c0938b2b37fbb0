//! This module defines materials. The `*MAT_` family is huge; a closed table
//! of common types gets typed projections, everything else lands in
//! [`MaterialKind::Other`] with its raw cards retained for round-tripping.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The material types the parser projects typed fields for. The numeric
/// alias (e.g. `*MAT_001` for `*MAT_ELASTIC`) maps to the same variant.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum MaterialKind {
  /// `*MAT_ELASTIC` / `*MAT_001`.
  Elastic,
  /// `*MAT_ORTHOTROPIC_ELASTIC` / `*MAT_002`.
  OrthotropicElastic,
  /// `*MAT_PLASTIC_KINEMATIC` / `*MAT_003`.
  PlasticKinematic,
  /// `*MAT_RIGID` / `*MAT_020`.
  Rigid,
  /// `*MAT_PIECEWISE_LINEAR_PLASTICITY` / `*MAT_024`.
  PiecewiseLinearPlasticity,
  /// `*MAT_FABRIC` / `*MAT_034`.
  Fabric,
  /// `*MAT_COMPOSITE_DAMAGE` / `*MAT_054` / `*MAT_055`.
  CompositeDamage,
  /// `*MAT_LAMINATED_COMPOSITE_FABRIC` / `*MAT_058`.
  LaminatedCompositeFabric,
  /// `*MAT_COMPOSITE_FAILURE` / `*MAT_ENHANCED_COMPOSITE_DAMAGE` /
  /// `*MAT_059`.
  CompositeFailure,
  /// Any other material type; cards are kept raw, nothing is projected.
  Other
}

impl Display for MaterialKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{:?}", self);
  }
}

impl MaterialKind {
  /// The recognized heads per kind: the spelled name(s) first, then the
  /// numeric code(s).
  const HEADS: &'static [(Self, &'static [&'static str])] = &[
    (Self::Elastic, &["ELASTIC", "001"]),
    (Self::OrthotropicElastic, &["ORTHOTROPIC_ELASTIC", "002"]),
    (Self::PlasticKinematic, &["PLASTIC_KINEMATIC", "003"]),
    (Self::Rigid, &["RIGID", "020"]),
    (Self::PiecewiseLinearPlasticity, &[
      "PIECEWISE_LINEAR_PLASTICITY", "024"
    ]),
    (Self::Fabric, &["FABRIC", "034"]),
    (Self::CompositeDamage, &["COMPOSITE_DAMAGE", "054", "055"]),
    (Self::LaminatedCompositeFabric, &[
      "LAMINATED_COMPOSITE_FABRIC", "058"
    ]),
    (Self::CompositeFailure, &[
      "COMPOSITE_FAILURE", "ENHANCED_COMPOSITE_DAMAGE", "059"
    ]),
  ];

  /// Resolves a `*MAT_` head (options already stripped) against the closed
  /// table of common types. Unrecognized heads become [`Self::Other`].
  pub fn from_head(head: &str) -> Self {
    for (kind, names) in Self::HEADS {
      if names.iter().any(|n| *n == head) {
        return *kind;
      }
    }
    return Self::Other;
  }

  /// Returns how many cards this material type consumes. Unknown types
  /// accept up to ten so their raw data still gets retained.
  pub const fn expected_cards(&self) -> usize {
    return match self {
      Self::Elastic => 1,
      Self::OrthotropicElastic => 2,
      Self::PlasticKinematic => 1,
      Self::Rigid => 3,
      Self::PiecewiseLinearPlasticity => 2,
      Self::Fabric => 4,
      Self::CompositeDamage => 6,
      Self::LaminatedCompositeFabric => 5,
      Self::CompositeFailure => 5,
      Self::Other => 10,
    };
  }
}

/// A material. Every decoded card is retained verbatim in [`Self::cards`]
/// (eight 10-wide floats per row) no matter how many typed fields the kind
/// projects out of it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Material {
  /// The material ID.
  pub mid: i32,
  /// The resolved material type.
  pub kind: MaterialKind,
  /// The raw head text from the keyword line, options stripped, so unknown
  /// subtypes survive a round trip.
  pub type_name: String,
  /// Mass density.
  pub ro: f64,
  /// Young's modulus (`E`, or `EA` for orthotropic kinds).
  pub e: f64,
  /// Poisson's ratio (`PR`, or `PRBA` for orthotropic kinds).
  pub pr: f64,
  /// Young's modulus in the b direction (orthotropic kinds).
  pub eb: f64,
  /// Young's modulus in the c direction (orthotropic kinds).
  pub ec: f64,
  /// Poisson's ratio ca (orthotropic).
  pub prca: f64,
  /// Poisson's ratio cb (orthotropic).
  pub prcb: f64,
  /// Shear modulus ab.
  pub gab: f64,
  /// Shear modulus bc.
  pub gbc: f64,
  /// Shear modulus ca.
  pub gca: f64,
  /// Yield stress (plasticity kinds).
  pub sigy: f64,
  /// Tangent modulus (plasticity kinds).
  pub etan: f64,
  /// Failure strain (plasticity kinds).
  pub fail: f64,
  /// Time step for element deletion (plasticity kinds).
  pub tdel: f64,
  /// Center-of-mass constraint option (rigid).
  pub cmo: f64,
  /// First constraint parameter (rigid).
  pub con1: f64,
  /// Second constraint parameter (rigid).
  pub con2: f64,
  /// Longitudinal compressive strength (composites).
  pub xc: f64,
  /// Longitudinal tensile strength (composites).
  pub xt: f64,
  /// Transverse compressive strength (composites).
  pub yc: f64,
  /// Transverse tensile strength (composites).
  pub yt: f64,
  /// Shear strength (composites).
  pub sc: f64,
  /// Material axes option.
  pub aopt: i32,
  /// Every decoded card, verbatim, eight values per row.
  pub cards: Vec<Vec<f64>>,
  /// Number of cards consumed so far; equals `cards.len()` once committed.
  pub cards_parsed: usize,
  /// The title line, when the keyword carried the `_TITLE` option.
  pub title: String
}

impl Material {
  /// Instantiates an empty material of a kind.
  pub fn new(kind: MaterialKind, type_name: String) -> Self {
    return Self {
      mid: 0,
      kind,
      type_name,
      ro: 0.0,
      e: 0.0,
      pr: 0.0,
      eb: 0.0,
      ec: 0.0,
      prca: 0.0,
      prcb: 0.0,
      gab: 0.0,
      gbc: 0.0,
      gca: 0.0,
      sigy: 0.0,
      etan: 0.0,
      fail: 0.0,
      tdel: 0.0,
      cmo: 0.0,
      con1: 0.0,
      con2: 0.0,
      xc: 0.0,
      xt: 0.0,
      yc: 0.0,
      yt: 0.0,
      sc: 0.0,
      aopt: 0,
      cards: Vec::new(),
      cards_parsed: 0,
      title: String::new()
    };
  }

  /// Returns a value from a card by (row, column), 0.0 if out of range.
  pub fn card_value(&self, card: usize, col: usize) -> f64 {
    return self
      .cards
      .get(card)
      .and_then(|row| row.get(col))
      .copied()
      .unwrap_or(0.0);
  }

  /// Returns the number of cards retained.
  pub fn num_cards(&self) -> usize {
    return self.cards.len();
  }
}

impl Default for Material {
  fn default() -> Self {
    return Self::new(MaterialKind::Other, String::new());
  }
}
