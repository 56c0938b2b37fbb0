//! This module implements the keyword recognizer: the piece that takes a
//! `*`-line and figures out which family it introduces and which option
//! atoms decorate it. Matching is prefix-major, suffix-minor: the longest
//! recognized head wins, then the leftover suffix is scanned for option
//! atoms like `TITLE`, `ID` and `MPP`.

use serde::{Deserialize, Serialize};

use crate::entities::constrained::JointKind;
use crate::entities::contact::ContactKind;
use crate::entities::control::ControlKind;
use crate::entities::database::DatabaseKind;
use crate::entities::initial::InitialVelocityKind;
use crate::entities::material::MaterialKind;
use crate::entities::mesh::ElementKind;
use crate::entities::section::SectionKind;
use crate::entities::sets::SetKind;
use crate::geometry::Axis;

/// The option atoms that may trail a recognized keyword head. These are
/// orthogonal to the family; family-specific suffixes (`SET`, `NODE`,
/// `INERTIA`, joint subtypes, body-load axes) are resolved into the
/// [`KeywordKind`] payload instead.
#[derive(
  Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq
)]
pub struct KeywordOptions {
  /// The `_TITLE` atom: a free-text title card precedes the data cards.
  pub title: bool,
  /// The `_ID` atom: an ID card precedes the data cards.
  pub id: bool,
  /// The `_MPP` atom: an MPP tuning card may be present; layout-neutral
  /// for the cards this parser decodes.
  pub mpp: bool
}

/// The keyword families the parser knows how to decode, with whatever the
/// suffix already resolved baked into the variant payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum KeywordKind {
  /// `*NODE` (exactly; `*NODE_`-prefixed keywords are different animals).
  Node,
  /// `*PART` (exactly).
  Part,
  /// `*ELEMENT_SHELL/SOLID/BEAM`.
  Element(ElementKind),
  /// `*SET_NODE_LIST`, `*SET_PART_LIST`, `*SET_SEGMENT`, `*SET_SHELL`,
  /// `*SET_SOLID`.
  Set(SetKind),
  /// `*SECTION_SHELL/SOLID/BEAM`.
  Section(SectionKind),
  /// `*CONTACT_<TYPE>`; the raw type text survives alongside the resolved
  /// kind.
  Contact {
    /// The resolved contact algorithm family.
    kind: ContactKind,
    /// The keyword text after `*CONTACT_`, options stripped.
    type_name: String
  },
  /// `*MAT_<TYPE>`; same deal as contacts.
  Material {
    /// The resolved material type.
    kind: MaterialKind,
    /// The keyword text after `*MAT_`, options stripped.
    type_name: String
  },
  /// `*INCLUDE`, `*INCLUDE_PATH`, `*INCLUDE_PATH_RELATIVE`.
  Include {
    /// Whether this is a search-path entry rather than a file.
    path_only: bool,
    /// Whether the search path is relative.
    relative: bool
  },
  /// `*DEFINE_CURVE`.
  DefineCurve,
  /// `*BOUNDARY_SPC_NODE` / `*BOUNDARY_SPC_SET`.
  BoundarySpc {
    /// Whether the `_SET` variant was named.
    set: bool
  },
  /// `*BOUNDARY_PRESCRIBED_MOTION_NODE` / `_SET`.
  BoundaryPrescribedMotion {
    /// Whether the `_SET` variant was named.
    set: bool
  },
  /// `*LOAD_NODE_POINT` / `*LOAD_NODE_SET`.
  LoadNode {
    /// Whether the `_SET` variant was named.
    set: bool
  },
  /// `*LOAD_SEGMENT`.
  LoadSegment,
  /// `*LOAD_BODY_X/Y/Z`; other body-load variants come through with no
  /// axis.
  LoadBody {
    /// The direction the suffix named, if any.
    axis: Option<Axis>
  },
  /// The `*CONTROL_` blocks.
  Control(ControlKind),
  /// `*DATABASE_BINARY_<NAME>`.
  DatabaseBinary(DatabaseKind),
  /// `*DATABASE_<NAME>` for the ASCII output files.
  DatabaseAscii(DatabaseKind),
  /// `*DATABASE_HISTORY_NODE`.
  DatabaseHistoryNode,
  /// `*DATABASE_HISTORY_SHELL/SOLID/BEAM`.
  DatabaseHistoryElement(ElementKind),
  /// `*DATABASE_CROSS_SECTION[_SET]`.
  DatabaseCrossSection,
  /// `*INITIAL_VELOCITY[_NODE/_SET/_GENERATION]`.
  InitialVelocity(InitialVelocityKind),
  /// `*INITIAL_STRESS_*`; recognized so its cards get skipped cleanly.
  InitialStress,
  /// `*CONSTRAINED_NODAL_RIGID_BODY[_INERTIA]`.
  ConstrainedNodalRigidBody {
    /// Whether the `_INERTIA` variant was named.
    inertia: bool
  },
  /// `*CONSTRAINED_EXTRA_NODES_SET` / `_NODE`.
  ConstrainedExtraNodes {
    /// Whether the `_SET` variant was named.
    set: bool
  },
  /// `*CONSTRAINED_JOINT_<SUBTYPE>`.
  ConstrainedJoint(JointKind),
  /// `*CONSTRAINED_SPOTWELD`.
  ConstrainedSpotweld
}

/// A fully-recognized keyword line: the family plus its option flags.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Keyword {
  /// The keyword family, suffix payloads resolved.
  pub kind: KeywordKind,
  /// The orthogonal option atoms.
  pub options: KeywordOptions
}

/// Strips a head off a keyword body. The remainder must either be empty or
/// continue with an underscore, so `NODE` does not swallow `NODOUT`-style
/// heads mid-atom; the returned remainder has the underscore dropped.
fn tail<'b>(body: &'b str, head: &str) -> Option<&'b str> {
  let rest = body.strip_prefix(head)?;
  if rest.is_empty() {
    return Some(rest);
  }
  return rest.strip_prefix('_');
}

/// Returns whether a suffix contains a given atom between underscores.
fn has_atom(suffix: &str, atom: &str) -> bool {
  return suffix.split('_').any(|a| a == atom);
}

/// Scans every atom of a suffix for the orthogonal option flags.
fn scan_options(suffix: &str) -> KeywordOptions {
  let mut options = KeywordOptions::default();
  for atom in suffix.split('_') {
    match atom {
      "TITLE" => options.title = true,
      "ID" => options.id = true,
      "MPP" => options.mpp = true,
      _ => {}
    }
  }
  return options;
}

/// Splits the trailing option atoms off an open-ended head (contacts and
/// materials, whose type text is itself underscore-separated). All trailing
/// atoms are consumed, so `..._MPP_ID` yields both flags.
fn split_trailing_options(suffix: &str) -> (String, KeywordOptions) {
  let mut atoms: Vec<&str> = suffix.split('_').collect();
  let mut options = KeywordOptions::default();
  while let Some(last) = atoms.last() {
    match *last {
      "TITLE" => options.title = true,
      "ID" => options.id = true,
      "MPP" => options.mpp = true,
      _ => break
    }
    atoms.pop();
  }
  return (atoms.join("_"), options);
}

/// Wraps a kind and a suffix into a recognized keyword.
fn kw(kind: KeywordKind, suffix: &str) -> Option<Keyword> {
  return Some(Keyword { kind, options: scan_options(suffix) });
}

/// Resolves a keyword line to its family and options. Returns `None` for
/// unrecognized keywords -- decks in the wild carry plenty of vendor
/// keywords that are legitimately ignored. Stable under surrounding
/// whitespace and case.
pub fn recognize(line: &str) -> Option<Keyword> {
  let upper = line.trim().to_ascii_uppercase();
  let body = upper.strip_prefix('*')?;
  // the two bare heads that refuse suffixes outright
  if body == "NODE" {
    return kw(KeywordKind::Node, "");
  }
  if body == "PART" {
    return kw(KeywordKind::Part, "");
  }
  // elements
  if let Some(rest) = tail(body, "ELEMENT_SHELL") {
    return kw(KeywordKind::Element(ElementKind::Shell), rest);
  }
  if let Some(rest) = tail(body, "ELEMENT_SOLID") {
    return kw(KeywordKind::Element(ElementKind::Solid), rest);
  }
  if let Some(rest) = tail(body, "ELEMENT_BEAM") {
    return kw(KeywordKind::Element(ElementKind::Beam), rest);
  }
  // sets
  if let Some(rest) = tail(body, "SET_NODE_LIST") {
    return kw(KeywordKind::Set(SetKind::NodeList), rest);
  }
  if let Some(rest) = tail(body, "SET_PART_LIST") {
    return kw(KeywordKind::Set(SetKind::PartList), rest);
  }
  if let Some(rest) = tail(body, "SET_SEGMENT") {
    return kw(KeywordKind::Set(SetKind::Segment), rest);
  }
  if let Some(rest) = tail(body, "SET_SHELL") {
    return kw(KeywordKind::Set(SetKind::Shell), rest);
  }
  if let Some(rest) = tail(body, "SET_SOLID") {
    return kw(KeywordKind::Set(SetKind::Solid), rest);
  }
  // sections
  if let Some(rest) = tail(body, "SECTION_SHELL") {
    return kw(KeywordKind::Section(SectionKind::Shell), rest);
  }
  if let Some(rest) = tail(body, "SECTION_SOLID") {
    return kw(KeywordKind::Section(SectionKind::Solid), rest);
  }
  if let Some(rest) = tail(body, "SECTION_BEAM") {
    return kw(KeywordKind::Section(SectionKind::Beam), rest);
  }
  // contacts: open-ended type text, options stripped off the end
  if let Some(rest) = tail(body, "CONTACT") {
    if rest.is_empty() {
      return None;
    }
    let (type_name, options) = split_trailing_options(rest);
    let kind = ContactKind::from_head(&type_name);
    return Some(Keyword {
      kind: KeywordKind::Contact { kind, type_name },
      options
    });
  }
  // materials: closed table of common heads, everything else is Other
  if let Some(rest) = tail(body, "MAT") {
    if rest.is_empty() {
      return None;
    }
    let (type_name, options) = split_trailing_options(rest);
    let kind = MaterialKind::from_head(&type_name);
    return Some(Keyword {
      kind: KeywordKind::Material { kind, type_name },
      options
    });
  }
  // includes
  if let Some(rest) = tail(body, "INCLUDE") {
    let path_only = rest.split('_').next() == Some("PATH");
    let relative = path_only && has_atom(rest, "RELATIVE");
    return kw(KeywordKind::Include { path_only, relative }, rest);
  }
  // curves
  if let Some(rest) = tail(body, "DEFINE_CURVE") {
    return kw(KeywordKind::DefineCurve, rest);
  }
  // boundaries
  if let Some(rest) = tail(body, "BOUNDARY_SPC") {
    return kw(KeywordKind::BoundarySpc { set: has_atom(rest, "SET") }, rest);
  }
  if let Some(rest) = tail(body, "BOUNDARY_PRESCRIBED_MOTION") {
    let set = has_atom(rest, "SET");
    return kw(KeywordKind::BoundaryPrescribedMotion { set }, rest);
  }
  // loads
  if let Some(rest) = tail(body, "LOAD_NODE") {
    return kw(KeywordKind::LoadNode { set: has_atom(rest, "SET") }, rest);
  }
  if let Some(rest) = tail(body, "LOAD_SEGMENT") {
    return kw(KeywordKind::LoadSegment, rest);
  }
  if let Some(rest) = tail(body, "LOAD_BODY") {
    let axis = match rest.split('_').next() {
      Some("X") => Some(Axis::X),
      Some("Y") => Some(Axis::Y),
      Some("Z") => Some(Axis::Z),
      _ => None
    };
    return kw(KeywordKind::LoadBody { axis }, rest);
  }
  // control blocks
  if let Some(rest) = tail(body, "CONTROL") {
    for kind in ControlKind::all() {
      if let Some(sub) = tail(rest, kind.head()) {
        return kw(KeywordKind::Control(*kind), sub);
      }
    }
    return None;
  }
  // database requests; the specific heads go before the ASCII sweep
  if let Some(rest) = tail(body, "DATABASE_BINARY") {
    for kind in DatabaseKind::binary_kinds() {
      if let Some(sub) = tail(rest, kind.head()) {
        return kw(KeywordKind::DatabaseBinary(*kind), sub);
      }
    }
    return None;
  }
  if let Some(rest) = tail(body, "DATABASE_HISTORY_NODE") {
    return kw(KeywordKind::DatabaseHistoryNode, rest);
  }
  if let Some(rest) = tail(body, "DATABASE_HISTORY_SHELL") {
    return kw(KeywordKind::DatabaseHistoryElement(ElementKind::Shell), rest);
  }
  if let Some(rest) = tail(body, "DATABASE_HISTORY_SOLID") {
    return kw(KeywordKind::DatabaseHistoryElement(ElementKind::Solid), rest);
  }
  if let Some(rest) = tail(body, "DATABASE_HISTORY_BEAM") {
    return kw(KeywordKind::DatabaseHistoryElement(ElementKind::Beam), rest);
  }
  if let Some(rest) = tail(body, "DATABASE_CROSS_SECTION") {
    // only the SET card layout is decoded; PLANE cards would misread
    if has_atom(rest, "PLANE") {
      return None;
    }
    return kw(KeywordKind::DatabaseCrossSection, rest);
  }
  if let Some(rest) = tail(body, "DATABASE") {
    for kind in DatabaseKind::ascii_kinds() {
      if let Some(sub) = tail(rest, kind.head()) {
        return kw(KeywordKind::DatabaseAscii(*kind), sub);
      }
    }
    return None;
  }
  // initial conditions
  if let Some(rest) = tail(body, "INITIAL_VELOCITY") {
    let kind = if has_atom(rest, "GENERATION") {
      InitialVelocityKind::Generation
    } else if has_atom(rest, "SET") {
      InitialVelocityKind::Set
    } else {
      InitialVelocityKind::Node
    };
    return kw(KeywordKind::InitialVelocity(kind), rest);
  }
  if let Some(rest) = tail(body, "INITIAL_STRESS") {
    return kw(KeywordKind::InitialStress, rest);
  }
  // constraints
  if let Some(rest) = tail(body, "CONSTRAINED_NODAL_RIGID_BODY") {
    let inertia = has_atom(rest, "INERTIA");
    return kw(KeywordKind::ConstrainedNodalRigidBody { inertia }, rest);
  }
  if let Some(rest) = tail(body, "CONSTRAINED_EXTRA_NODES") {
    let set = has_atom(rest, "SET");
    return kw(KeywordKind::ConstrainedExtraNodes { set }, rest);
  }
  if let Some(rest) = tail(body, "CONSTRAINED_JOINT") {
    let kind =
      rest.split('_').next().map_or(JointKind::Other, JointKind::from_head);
    return kw(KeywordKind::ConstrainedJoint(kind), rest);
  }
  if let Some(rest) = tail(body, "CONSTRAINED_SPOTWELD") {
    return kw(KeywordKind::ConstrainedSpotweld, rest);
  }
  return None;
}
