//! This module implements the output aggregate of a parse: one ordered
//! collection per entity family, the ID lookup maps, parse statistics, and
//! the warning/error lists.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::boundary::{BoundaryPrescribedMotion, BoundarySpc};
use crate::entities::constrained::{
  ConstrainedExtraNodes, ConstrainedJoint, ConstrainedNodalRigidBody,
  ConstrainedSpotweld
};
use crate::entities::contact::Contact;
use crate::entities::control::{
  ControlBulkViscosity, ControlContact, ControlEnergy, ControlHourglass,
  ControlOutput, ControlShell, ControlTermination, ControlTimestep
};
use crate::entities::curve::Curve;
use crate::entities::database::{
  DatabaseAscii, DatabaseBinary, DatabaseCrossSection, DatabaseHistoryElement,
  DatabaseHistoryNode
};
use crate::entities::include::Include;
use crate::entities::initial::{InitialStress, InitialVelocity};
use crate::entities::load::{LoadBody, LoadNode, LoadSegment};
use crate::entities::material::Material;
use crate::entities::mesh::{Element, Node, Part};
use crate::entities::section::Section;
use crate::entities::sets::Set;

/// The output of a K-file parse. Collections hold entities in source order;
/// the `*_index` maps go from primary key to position in the matching
/// collection once [`Deck::build_indices`] has run.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Deck {
  /// The nodes, in source order.
  pub nodes: Vec<Node>,
  /// The parts, in source order.
  pub parts: Vec<Part>,
  /// The elements of all kinds, in source order.
  pub elements: Vec<Element>,
  /// The sets, in source order.
  pub sets: Vec<Set>,
  /// The sections, in source order.
  pub sections: Vec<Section>,
  /// The contact interfaces, in source order.
  pub contacts: Vec<Contact>,
  /// The materials, in source order.
  pub materials: Vec<Material>,
  /// The include references, in source order.
  pub includes: Vec<Include>,
  /// The load curves, in source order.
  pub curves: Vec<Curve>,
  /// The single-point constraints.
  pub boundary_spcs: Vec<BoundarySpc>,
  /// The prescribed motions.
  pub boundary_motions: Vec<BoundaryPrescribedMotion>,
  /// The node point loads.
  pub load_nodes: Vec<LoadNode>,
  /// The segment pressure loads.
  pub load_segments: Vec<LoadSegment>,
  /// The body loads.
  pub load_bodies: Vec<LoadBody>,
  /// The `*CONTROL_TERMINATION` blocks.
  pub control_terminations: Vec<ControlTermination>,
  /// The `*CONTROL_TIMESTEP` blocks.
  pub control_timesteps: Vec<ControlTimestep>,
  /// The `*CONTROL_ENERGY` blocks.
  pub control_energies: Vec<ControlEnergy>,
  /// The `*CONTROL_OUTPUT` blocks.
  pub control_outputs: Vec<ControlOutput>,
  /// The `*CONTROL_SHELL` blocks.
  pub control_shells: Vec<ControlShell>,
  /// The `*CONTROL_CONTACT` blocks.
  pub control_contacts: Vec<ControlContact>,
  /// The `*CONTROL_HOURGLASS` blocks.
  pub control_hourglasses: Vec<ControlHourglass>,
  /// The `*CONTROL_BULK_VISCOSITY` blocks.
  pub control_bulk_viscosities: Vec<ControlBulkViscosity>,
  /// The binary database requests.
  pub database_binaries: Vec<DatabaseBinary>,
  /// The ASCII database requests.
  pub database_asciis: Vec<DatabaseAscii>,
  /// The node history lists.
  pub database_history_nodes: Vec<DatabaseHistoryNode>,
  /// The element history lists.
  pub database_history_elements: Vec<DatabaseHistoryElement>,
  /// The cross-section requests.
  pub database_cross_sections: Vec<DatabaseCrossSection>,
  /// The initial velocities.
  pub initial_velocities: Vec<InitialVelocity>,
  /// The initial stresses. The keyword is recognized but its card data is
  /// not decoded, so this stays empty for now.
  pub initial_stresses: Vec<InitialStress>,
  /// The nodal rigid bodies.
  pub constrained_nodal_rigid_bodies: Vec<ConstrainedNodalRigidBody>,
  /// The extra-nodes constraints.
  pub constrained_extra_nodes: Vec<ConstrainedExtraNodes>,
  /// The joints.
  pub constrained_joints: Vec<ConstrainedJoint>,
  /// The spotwelds.
  pub constrained_spotwelds: Vec<ConstrainedSpotweld>,
  /// Node ID to position in [`Self::nodes`].
  pub node_index: HashMap<i32, usize>,
  /// Part ID to position in [`Self::parts`].
  pub part_index: HashMap<i32, usize>,
  /// Element ID to position in [`Self::elements`].
  pub element_index: HashMap<i32, usize>,
  /// Set ID to position in [`Self::sets`].
  pub set_index: HashMap<i32, usize>,
  /// Section ID to position in [`Self::sections`].
  pub section_index: HashMap<i32, usize>,
  /// Slave set ID to position in [`Self::contacts`].
  pub contact_index: HashMap<i32, usize>,
  /// Material ID to position in [`Self::materials`].
  pub material_index: HashMap<i32, usize>,
  /// Load curve ID to position in [`Self::curves`].
  pub curve_index: HashMap<i32, usize>,
  /// Total number of lines scanned, blanks and comments included.
  pub total_lines: usize,
  /// Wall-clock duration of the parse, in milliseconds.
  pub parse_time_ms: u64,
  /// Recoverable per-card decode complaints.
  pub warnings: Vec<String>,
  /// Unrecoverable failures (in practice: could not read the file).
  pub errors: Vec<String>
}

impl Deck {
  /// Instantiates an empty deck.
  pub fn new() -> Self {
    return Self::default();
  }

  /// Builds (or rebuilds) the ID lookup maps from the collections. Each map
  /// is cleared first, so calling this twice changes nothing. Collections
  /// keep every occurrence of a duplicated key in source order; the maps
  /// resolve to the **last** occurrence.
  pub fn build_indices(&mut self) {
    self.node_index.clear();
    for (i, node) in self.nodes.iter().enumerate() {
      self.node_index.insert(node.nid, i);
    }
    self.part_index.clear();
    for (i, part) in self.parts.iter().enumerate() {
      self.part_index.insert(part.pid, i);
    }
    self.element_index.clear();
    for (i, element) in self.elements.iter().enumerate() {
      self.element_index.insert(element.eid, i);
    }
    self.set_index.clear();
    for (i, set) in self.sets.iter().enumerate() {
      self.set_index.insert(set.sid, i);
    }
    self.section_index.clear();
    for (i, section) in self.sections.iter().enumerate() {
      self.section_index.insert(section.secid, i);
    }
    self.contact_index.clear();
    for (i, contact) in self.contacts.iter().enumerate() {
      self.contact_index.insert(contact.ssid, i);
    }
    self.material_index.clear();
    for (i, material) in self.materials.iter().enumerate() {
      self.material_index.insert(material.mid, i);
    }
    self.curve_index.clear();
    for (i, curve) in self.curves.iter().enumerate() {
      self.curve_index.insert(curve.lcid, i);
    }
  }

  /// Looks up a node by ID through the index.
  pub fn node(&self, nid: i32) -> Option<&Node> {
    return self.node_index.get(&nid).and_then(|i| self.nodes.get(*i));
  }

  /// Looks up a part by ID through the index.
  pub fn part(&self, pid: i32) -> Option<&Part> {
    return self.part_index.get(&pid).and_then(|i| self.parts.get(*i));
  }

  /// Looks up an element by ID through the index.
  pub fn element(&self, eid: i32) -> Option<&Element> {
    return self.element_index.get(&eid).and_then(|i| self.elements.get(*i));
  }

  /// Looks up a set by ID through the index.
  pub fn set(&self, sid: i32) -> Option<&Set> {
    return self.set_index.get(&sid).and_then(|i| self.sets.get(*i));
  }

  /// Looks up a section by ID through the index.
  pub fn section(&self, secid: i32) -> Option<&Section> {
    return self.section_index.get(&secid).and_then(|i| self.sections.get(*i));
  }

  /// Looks up a contact by slave set ID through the index.
  pub fn contact(&self, ssid: i32) -> Option<&Contact> {
    return self.contact_index.get(&ssid).and_then(|i| self.contacts.get(*i));
  }

  /// Looks up a material by ID through the index.
  pub fn material(&self, mid: i32) -> Option<&Material> {
    return self.material_index.get(&mid).and_then(|i| self.materials.get(*i));
  }

  /// Looks up a load curve by ID through the index.
  pub fn curve(&self, lcid: i32) -> Option<&Curve> {
    return self.curve_index.get(&lcid).and_then(|i| self.curves.get(*i));
  }
}
