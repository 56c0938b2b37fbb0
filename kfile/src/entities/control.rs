//! This module defines the `*CONTROL_` records: flat one-card settings
//! blocks steering the solver run. Defaults follow the solver's documented
//! values, so an unparsed field still reads sensibly.

use serde::{Deserialize, Serialize};

/// The control blocks the parser decodes.
#[derive(
  Copy, Clone, Debug, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq
)]
pub enum ControlKind {
  /// `*CONTROL_TERMINATION`.
  Termination,
  /// `*CONTROL_TIMESTEP`.
  Timestep,
  /// `*CONTROL_ENERGY`.
  Energy,
  /// `*CONTROL_OUTPUT`.
  Output,
  /// `*CONTROL_SHELL`.
  Shell,
  /// `*CONTROL_CONTACT`.
  Contact,
  /// `*CONTROL_HOURGLASS`.
  Hourglass,
  /// `*CONTROL_BULK_VISCOSITY`.
  BulkViscosity
}

impl ControlKind {
  /// Returns all control kinds.
  pub const fn all() -> &'static [Self] {
    return &[
      Self::Termination,
      Self::Timestep,
      Self::Energy,
      Self::Output,
      Self::Shell,
      Self::Contact,
      Self::Hourglass,
      Self::BulkViscosity,
    ];
  }

  /// Returns the keyword head after `*CONTROL_`.
  pub const fn head(&self) -> &'static str {
    return match self {
      Self::Termination => "TERMINATION",
      Self::Timestep => "TIMESTEP",
      Self::Energy => "ENERGY",
      Self::Output => "OUTPUT",
      Self::Shell => "SHELL",
      Self::Contact => "CONTACT",
      Self::Hourglass => "HOURGLASS",
      Self::BulkViscosity => "BULK_VISCOSITY",
    };
  }
}

/// `*CONTROL_TERMINATION`: `[endtim, endcyc, dtmin, endeng, endmas, nosol]`.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlTermination {
  /// Termination time.
  pub endtim: f64,
  /// Termination cycle. A float, oddly, but the format has always had it so.
  pub endcyc: f64,
  /// Minimum time step before termination.
  pub dtmin: f64,
  /// Energy-ratio termination threshold.
  pub endeng: f64,
  /// Mass-ratio termination threshold.
  pub endmas: f64,
  /// No-solution flag.
  pub nosol: i32
}

/// `*CONTROL_TIMESTEP`:
/// `[dtinit, tssfac, isdo, tslimt, dt2ms, lctm, erode, ms1st]`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlTimestep {
  /// Initial time step.
  pub dtinit: f64,
  /// Time step scale factor.
  pub tssfac: f64,
  /// Shell time step option.
  pub isdo: i32,
  /// Shell element time step limit.
  pub tslimt: f64,
  /// Mass-scaling time step.
  pub dt2ms: f64,
  /// Load curve limiting the time step.
  pub lctm: i32,
  /// Erosion flag.
  pub erode: i32,
  /// Mass-scaling-on-first-cycle flag.
  pub ms1st: i32
}

impl Default for ControlTimestep {
  fn default() -> Self {
    return Self {
      dtinit: 0.0,
      tssfac: 0.9,
      isdo: 0,
      tslimt: 0.0,
      dt2ms: 0.0,
      lctm: 0,
      erode: 0,
      ms1st: 0
    };
  }
}

/// `*CONTROL_ENERGY`: `[hgen, rwen, slnten, rylen]`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlEnergy {
  /// Hourglass energy accounting.
  pub hgen: i32,
  /// Rigid wall energy accounting.
  pub rwen: i32,
  /// Sliding interface energy accounting.
  pub slnten: i32,
  /// Rayleigh damping energy accounting.
  pub rylen: i32
}

impl Default for ControlEnergy {
  fn default() -> Self {
    return Self { hgen: 2, rwen: 2, slnten: 2, rylen: 2 };
  }
}

/// `*CONTROL_OUTPUT`:
/// `[npopt, netefm, nflcit, nprint, ikedit, iflush, iprtf, ierode]`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlOutput {
  /// Print suppression option.
  pub npopt: i32,
  /// Element time step output option.
  pub netefm: i32,
  /// Flush iteration count.
  pub nflcit: i32,
  /// Print frequency.
  pub nprint: i32,
  /// Edit interval.
  pub ikedit: i32,
  /// Flush interval.
  pub iflush: i32,
  /// Print flag.
  pub iprtf: i32,
  /// Eroded-element output flag.
  pub ierode: i32
}

impl Default for ControlOutput {
  fn default() -> Self {
    return Self {
      npopt: 0,
      netefm: 0,
      nflcit: 0,
      nprint: 0,
      ikedit: 0,
      iflush: 5000,
      iprtf: 0,
      ierode: 0
    };
  }
}

/// `*CONTROL_SHELL`:
/// `[wrpang, esort, irnxx, istupd, theory, bwc, miter, proj]`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlShell {
  /// Warpage angle threshold.
  pub wrpang: f64,
  /// Automatic sorting flag.
  pub esort: i32,
  /// Shell normal update option.
  pub irnxx: i32,
  /// Shell thickness update option.
  pub istupd: i32,
  /// Shell theory selector.
  pub theory: i32,
  /// Warping stiffness option.
  pub bwc: i32,
  /// Membrane iteration flag.
  pub miter: i32,
  /// Projection method.
  pub proj: i32
}

impl Default for ControlShell {
  fn default() -> Self {
    return Self {
      wrpang: 20.0,
      esort: 0,
      irnxx: -1,
      istupd: 0,
      theory: 2,
      bwc: 2,
      miter: 1,
      proj: 0
    };
  }
}

/// `*CONTROL_CONTACT`:
/// `[slsfac, rwpnal, islchk, shlthk, penopt, thkchg, otefm, enmass]`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlContact {
  /// Sliding interface penalty scale factor.
  pub slsfac: f64,
  /// Rigid wall penalty scale factor.
  pub rwpnal: f64,
  /// Initial penetration check flag.
  pub islchk: i32,
  /// Shell thickness handling.
  pub shlthk: i32,
  /// Penalty option.
  pub penopt: i32,
  /// Shell thickness change flag.
  pub thkchg: f64,
  /// Tie enforcement option.
  pub otefm: i32,
  /// Extra-nodes mass treatment.
  pub enmass: i32
}

impl Default for ControlContact {
  fn default() -> Self {
    return Self {
      slsfac: 0.1,
      rwpnal: 0.0,
      islchk: 1,
      shlthk: 0,
      penopt: 1,
      thkchg: 0.0,
      otefm: 0,
      enmass: 0
    };
  }
}

/// `*CONTROL_HOURGLASS`: `[ihq, qh]`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlHourglass {
  /// Hourglass suppression type.
  pub ihq: i32,
  /// Hourglass coefficient.
  pub qh: f64
}

impl Default for ControlHourglass {
  fn default() -> Self {
    return Self { ihq: 1, qh: 0.1 };
  }
}

/// `*CONTROL_BULK_VISCOSITY`: `[q1, q2, type]`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlBulkViscosity {
  /// Quadratic viscosity coefficient.
  pub q1: f64,
  /// Linear viscosity coefficient.
  pub q2: f64,
  /// Bulk viscosity formulation.
  pub ibq: i32
}

impl Default for ControlBulkViscosity {
  fn default() -> Self {
    return Self { q1: 1.5, q2: 0.06, ibq: 1 };
  }
}
