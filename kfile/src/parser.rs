//! This module implements the one-pass K-file parser: the per-family enable
//! flags, the state machine that routes data cards to the active handler,
//! and the handlers themselves. It's single-thread and strictly forward --
//! no backtracking, no lookahead. A fresh parser (or at least a fresh
//! `parse_*` call, which resets all in-flight state) per parse is the
//! supported pattern.

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::columns::{
  self, classify, read_float, read_int, read_text, LineKind
};
use crate::deck::Deck;
use crate::entities::boundary::{
  BoundaryKind, BoundaryPrescribedMotion, BoundarySpc
};
use crate::entities::constrained::{
  ConstrainedExtraNodes, ConstrainedJoint, ConstrainedNodalRigidBody,
  ConstrainedSpotweld, JointKind
};
use crate::entities::contact::Contact;
use crate::entities::control::{
  ControlBulkViscosity, ControlContact, ControlEnergy, ControlHourglass,
  ControlKind, ControlOutput, ControlShell, ControlTermination,
  ControlTimestep
};
use crate::entities::curve::Curve;
use crate::entities::database::{
  DatabaseAscii, DatabaseBinary, DatabaseCrossSection, DatabaseHistoryElement,
  DatabaseHistoryNode, DatabaseKind
};
use crate::entities::include::Include;
use crate::entities::initial::{InitialVelocity, InitialVelocityKind};
use crate::entities::load::{LoadBody, LoadNode, LoadSegment};
use crate::entities::material::{Material, MaterialKind};
use crate::entities::mesh::{Element, ElementKind, Node, Part};
use crate::entities::section::{Section, SectionKind};
use crate::entities::sets::{Set, SetKind};
use crate::geometry::Axis;
use crate::keywords::{recognize, KeywordKind};

/// Which entity families to decode, plus whether to build the ID indices
/// after the parse. Everything defaults to on; turning a family off makes
/// its keywords park the parser in the idle state.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParserConfig {
  /// Decode `*NODE` blocks.
  pub nodes: bool,
  /// Decode `*PART` blocks.
  pub parts: bool,
  /// Decode `*ELEMENT_*` blocks.
  pub elements: bool,
  /// Decode `*SET_*` blocks.
  pub sets: bool,
  /// Decode `*SECTION_*` blocks.
  pub sections: bool,
  /// Decode `*CONTACT_*` blocks.
  pub contacts: bool,
  /// Decode `*MAT_*` blocks.
  pub materials: bool,
  /// Decode `*INCLUDE*` blocks.
  pub includes: bool,
  /// Decode `*DEFINE_CURVE` blocks.
  pub curves: bool,
  /// Decode `*BOUNDARY_*` blocks.
  pub boundaries: bool,
  /// Decode `*LOAD_*` blocks.
  pub loads: bool,
  /// Decode `*CONTROL_*` blocks.
  pub controls: bool,
  /// Decode `*DATABASE_*` blocks.
  pub databases: bool,
  /// Decode `*INITIAL_*` blocks.
  pub initials: bool,
  /// Decode `*CONSTRAINED_*` blocks.
  pub constraineds: bool,
  /// Build the ID lookup maps once parsing is done.
  pub build_index: bool
}

impl Default for ParserConfig {
  fn default() -> Self {
    return Self {
      nodes: true,
      parts: true,
      elements: true,
      sets: true,
      sections: true,
      contacts: true,
      materials: true,
      includes: true,
      curves: true,
      boundaries: true,
      loads: true,
      controls: true,
      databases: true,
      initials: true,
      constraineds: true,
      build_index: true
    };
  }
}

/// The dispatcher states: idle, or inside some handler, with an ordinal
/// sub-state where a handler consumes ordered cards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParseState {
  /// Between blocks; data lines are ignored.
  Idle,
  /// Consuming node cards, one node per line, until the next keyword.
  InNode,
  /// Expecting the 80-wide part name card.
  InPartName,
  /// Expecting the part data card.
  InPartData,
  /// Consuming element cards of a kind until the next keyword.
  InElement(ElementKind),
  /// Expecting (and discarding) a set title line.
  InSetTitle,
  /// Expecting the set header card.
  InSetHeader,
  /// Consuming set data cards until the next keyword.
  InSetData,
  /// Expecting (and discarding) a section title line.
  InSectionTitle(SectionKind),
  /// Expecting the section header card (the only card, for solids).
  InSectionHeader(SectionKind),
  /// Expecting the section data card (shells and beams).
  InSectionData(SectionKind),
  /// Expecting (and discarding) a contact ID or title card.
  InContactPrefix,
  /// Expecting contact card 1 (surface IDs and types).
  InContactCard1,
  /// Expecting contact card 2 (friction and timing).
  InContactCard2,
  /// Expecting contact card 3 (scale factors).
  InContactCard3,
  /// Expecting the material title line.
  InMaterialTitle,
  /// Consuming material cards until the type's count is reached.
  InMaterialData,
  /// Expecting the include path line.
  InInclude {
    /// Whether this is a search-path entry.
    path_only: bool,
    /// Whether the path is relative.
    relative: bool
  },
  /// Expecting the curve title line.
  InCurveTitle,
  /// Expecting the curve header card.
  InCurveHeader,
  /// Consuming curve points until the next keyword.
  InCurveData,
  /// Consuming SPC cards until the next keyword.
  InBoundarySpc {
    /// Whether the `_SET` card layout applies.
    set: bool
  },
  /// Consuming prescribed-motion cards until the next keyword.
  InBoundaryMotion {
    /// Whether the target is a set.
    set: bool
  },
  /// Consuming node load cards until the next keyword.
  InLoadNode {
    /// Whether the target is a set.
    set: bool
  },
  /// Consuming segment load cards until the next keyword.
  InLoadSegment,
  /// Expecting the single body load card.
  InLoadBody {
    /// The direction from the keyword suffix.
    axis: Option<Axis>
  },
  /// Expecting the single card of a control block.
  InControl(ControlKind),
  /// Expecting the single card of a binary database request.
  InDatabaseBinary(DatabaseKind),
  /// Expecting the single card of an ASCII database request.
  InDatabaseAscii(DatabaseKind),
  /// Accumulating history node IDs until the next keyword.
  InDatabaseHistoryNode,
  /// Accumulating history element IDs until the next keyword.
  InDatabaseHistoryElement,
  /// Expecting the single cross-section card.
  InDatabaseCrossSection,
  /// Expecting the single initial-velocity card.
  InInitialVelocity(InitialVelocityKind),
  /// Skipping initial-stress card data.
  InInitialStress,
  /// Expecting the single nodal-rigid-body card.
  InConstrainedNrb {
    /// Whether the `_INERTIA` layout applies.
    inertia: bool
  },
  /// Expecting the single extra-nodes `_SET` card.
  InConstrainedExtraNodesSet,
  /// Accumulating extra-nodes `_NODE` cards until the next keyword.
  InConstrainedExtraNodesNode,
  /// Expecting the single joint card.
  InConstrainedJoint(JointKind),
  /// Expecting the single spotweld card.
  InConstrainedSpotweld
}

/// Picks a handler state if its family is enabled, idle otherwise.
fn gate(enabled: bool, state: ParseState) -> ParseState {
  return if enabled { state } else { ParseState::Idle };
}

/// Decodes an integer column; a malformed token becomes a warning on the
/// deck and a zero.
fn int_col(
  deck: &mut Deck,
  ctx: &str,
  name: &str,
  line: &str,
  start: usize,
  len: usize
) -> i32 {
  return match columns::try_int(line, start, len) {
    Ok(v) => v,
    Err(tok) => {
      let msg =
        format!("{} parse warning: bad {} field {:?}, using 0", ctx, name, tok);
      warn!("{}", msg);
      deck.warnings.push(msg);
      0
    }
  };
}

/// Decodes a float column; a malformed token becomes a warning on the deck
/// and a zero.
fn float_col(
  deck: &mut Deck,
  ctx: &str,
  name: &str,
  line: &str,
  start: usize,
  len: usize
) -> f64 {
  return match columns::try_float(line, start, len) {
    Ok(v) => v,
    Err(tok) => {
      let msg =
        format!("{} parse warning: bad {} field {:?}, using 0", ctx, name, tok);
      warn!("{}", msg);
      deck.warnings.push(msg);
      0.0
    }
  };
}

/// The one-pass K-file parser. It doesn't care how lines reach it: feed a
/// whole string, a reader, or a file path. Each `parse_*` call resets the
/// in-flight state and produces a fresh [`Deck`].
pub struct OnePassParser {
  /// The enable flags.
  config: ParserConfig,
  /// The current dispatcher state.
  state: ParseState,
  /// Lines consumed so far, blanks and comments included.
  total_lines: usize,
  /// The pending part name, between the name card and the data card.
  part_name: String,
  /// The set being accumulated, if any.
  current_set: Option<Set>,
  /// The section between its header and data cards, if any.
  current_section: Option<Section>,
  /// The contact being accumulated, if any.
  current_contact: Option<Contact>,
  /// The material being accumulated, if any.
  current_material: Option<Material>,
  /// How many cards the current material type consumes.
  material_cards_expected: usize,
  /// The curve being accumulated, if any.
  current_curve: Option<Curve>,
  /// The history node list being accumulated, if any.
  current_history_nodes: Option<DatabaseHistoryNode>,
  /// The history element list being accumulated, if any.
  current_history_elements: Option<DatabaseHistoryElement>,
  /// The extra-nodes constraint being accumulated, if any.
  current_extra_nodes: Option<ConstrainedExtraNodes>
}

impl Default for OnePassParser {
  fn default() -> Self {
    return Self::new();
  }
}

impl OnePassParser {
  /// Instantiates a parser with everything enabled.
  pub fn new() -> Self {
    return Self::with_config(ParserConfig::default());
  }

  /// Instantiates a parser with specific enable flags.
  pub fn with_config(config: ParserConfig) -> Self {
    return Self {
      config,
      state: ParseState::Idle,
      total_lines: 0,
      part_name: String::new(),
      current_set: None,
      current_section: None,
      current_contact: None,
      current_material: None,
      material_cards_expected: 0,
      current_curve: None,
      current_history_nodes: None,
      current_history_elements: None,
      current_extra_nodes: None
    };
  }

  /// Returns the enable flags.
  pub fn config(&self) -> &ParserConfig {
    return &self.config;
  }

  /// Returns the enable flags, mutably, for tweaking before a parse.
  pub fn config_mut(&mut self) -> &mut ParserConfig {
    return &mut self.config;
  }

  /// Parses a whole in-memory string. Performs no I/O.
  pub fn parse_string(&mut self, content: &str) -> Deck {
    let start = Instant::now();
    let mut deck = Deck::new();
    self.reset();
    for line in content.lines() {
      self.consume(line, &mut deck);
    }
    self.finish(&mut deck);
    deck.parse_time_ms = start.elapsed().as_millis() as u64;
    return deck;
  }

  /// Parses from a `BufRead` instance, line by line.
  pub fn parse_bufread<R: BufRead>(&mut self, mut reader: R) -> io::Result<Deck> {
    let start = Instant::now();
    let mut deck = Deck::new();
    self.reset();
    let mut buf: Vec<u8> = Vec::new();
    loop {
      buf.clear();
      if reader.read_until(b'\n', &mut buf)? == 0 {
        break;
      }
      if buf.last() == Some(&b'\n') {
        buf.pop();
      }
      if buf.last() == Some(&b'\r') {
        buf.pop();
      }
      let line = String::from_utf8_lossy(&buf);
      self.consume(&line, &mut deck);
    }
    self.finish(&mut deck);
    deck.parse_time_ms = start.elapsed().as_millis() as u64;
    return Ok(deck);
  }

  /// Reads and parses a file. A file that cannot be opened or read yields
  /// an otherwise-empty deck with one entry in its error list.
  pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Deck {
    let file = match fs::File::open(path.as_ref()) {
      Ok(f) => f,
      Err(e) => {
        let msg =
          format!("Failed to open file: {}: {}", path.as_ref().display(), e);
        error!("{}", msg);
        let mut deck = Deck::new();
        deck.errors.push(msg);
        return deck;
      }
    };
    return match self.parse_bufread(BufReader::new(file)) {
      Ok(deck) => deck,
      Err(e) => {
        let msg =
          format!("Failed to read file: {}: {}", path.as_ref().display(), e);
        error!("{}", msg);
        let mut deck = Deck::new();
        deck.errors.push(msg);
        deck
      }
    };
  }

  /// Clears all in-flight state for a fresh parse.
  fn reset(&mut self) {
    self.state = ParseState::Idle;
    self.total_lines = 0;
    self.part_name.clear();
    self.current_set = None;
    self.current_section = None;
    self.current_contact = None;
    self.current_material = None;
    self.material_cards_expected = 0;
    self.current_curve = None;
    self.current_history_nodes = None;
    self.current_history_elements = None;
    self.current_extra_nodes = None;
  }

  /// Commits whatever end-of-input leaves in flight and builds the indices.
  fn finish(&mut self, deck: &mut Deck) {
    self.flush_pending(deck);
    deck.total_lines = self.total_lines;
    if self.config.build_index {
      deck.build_indices();
    }
  }

  /// Consumes one line into the parser.
  pub fn consume(&mut self, line: &str, deck: &mut Deck) {
    self.total_lines += 1;
    match classify(line) {
      LineKind::Blank | LineKind::Comment => {}
      LineKind::Keyword => self.begin_keyword(line, deck),
      LineKind::Data => self.consume_data(line, deck)
    }
  }

  /// Commits the in-flight open-ended entities. This is the rule that lets
  /// sets, materials, curves, and history lists span arbitrary numbers of
  /// data lines without an explicit terminator: the next keyword (or EOF)
  /// terminates them, guarded by a valid primary key. Half-done two-card
  /// entities (a part name without its data card, a section header without
  /// its data card) are dropped.
  fn flush_pending(&mut self, deck: &mut Deck) {
    if let Some(set) = self.current_set.take() {
      if set.sid > 0 {
        debug!("Committing set {} with {} item(s).", set.sid, set.count());
        deck.sets.push(set);
      }
    }
    if let Some(material) = self.current_material.take() {
      if material.mid > 0 {
        debug!("Committing material {}.", material.mid);
        deck.materials.push(material);
      }
    }
    if let Some(curve) = self.current_curve.take() {
      if curve.lcid > 0 {
        debug!("Committing curve {} with {} point(s).", curve.lcid,
          curve.num_points());
        deck.curves.push(curve);
      }
    }
    if let Some(contact) = self.current_contact.take() {
      if contact.cards_parsed > 0 {
        debug!("Committing contact {} after {} card(s).", contact.ssid,
          contact.cards_parsed);
        deck.contacts.push(contact);
      }
    }
    if let Some(history) = self.current_history_nodes.take() {
      if !history.node_ids.is_empty() {
        deck.database_history_nodes.push(history);
      }
    }
    if let Some(history) = self.current_history_elements.take() {
      if !history.element_ids.is_empty() {
        deck.database_history_elements.push(history);
      }
    }
    if let Some(extra) = self.current_extra_nodes.take() {
      if extra.pid > 0 {
        deck.constrained_extra_nodes.push(extra);
      }
    }
    self.current_section = None;
    self.part_name.clear();
  }

  /// Handles a keyword line: commits in-flight entities, then selects the
  /// next handler (or idle, for unrecognized keywords and disabled
  /// families).
  fn begin_keyword(&mut self, line: &str, deck: &mut Deck) {
    self.flush_pending(deck);
    let keyword = match recognize(line) {
      Some(k) => k,
      None => {
        debug!(
          "Line {}: unrecognized keyword, going idle.", self.total_lines
        );
        self.state = ParseState::Idle;
        return;
      }
    };
    let cfg = self.config;
    let title = keyword.options.title;
    self.state = match keyword.kind {
      KeywordKind::Node => gate(cfg.nodes, ParseState::InNode),
      KeywordKind::Part => gate(cfg.parts, ParseState::InPartName),
      KeywordKind::Element(kind) => {
        gate(cfg.elements, ParseState::InElement(kind))
      }
      KeywordKind::Set(kind) => {
        if cfg.sets {
          self.current_set = Some(Set::new(kind));
          if title { ParseState::InSetTitle } else { ParseState::InSetHeader }
        } else {
          ParseState::Idle
        }
      }
      KeywordKind::Section(kind) => {
        if cfg.sections {
          if title {
            ParseState::InSectionTitle(kind)
          } else {
            ParseState::InSectionHeader(kind)
          }
        } else {
          ParseState::Idle
        }
      }
      KeywordKind::Contact { kind, type_name } => {
        if cfg.contacts {
          self.current_contact = Some(Contact::new(kind, type_name));
          if title || keyword.options.id {
            ParseState::InContactPrefix
          } else {
            ParseState::InContactCard1
          }
        } else {
          ParseState::Idle
        }
      }
      KeywordKind::Material { kind, type_name } => {
        if cfg.materials {
          self.material_cards_expected = kind.expected_cards();
          self.current_material = Some(Material::new(kind, type_name));
          if title {
            ParseState::InMaterialTitle
          } else {
            ParseState::InMaterialData
          }
        } else {
          ParseState::Idle
        }
      }
      KeywordKind::Include { path_only, relative } => {
        gate(cfg.includes, ParseState::InInclude { path_only, relative })
      }
      KeywordKind::DefineCurve => {
        if cfg.curves {
          self.current_curve = Some(Curve::new());
          if title {
            ParseState::InCurveTitle
          } else {
            ParseState::InCurveHeader
          }
        } else {
          ParseState::Idle
        }
      }
      KeywordKind::BoundarySpc { set } => {
        gate(cfg.boundaries, ParseState::InBoundarySpc { set })
      }
      KeywordKind::BoundaryPrescribedMotion { set } => {
        gate(cfg.boundaries, ParseState::InBoundaryMotion { set })
      }
      KeywordKind::LoadNode { set } => {
        gate(cfg.loads, ParseState::InLoadNode { set })
      }
      KeywordKind::LoadSegment => gate(cfg.loads, ParseState::InLoadSegment),
      KeywordKind::LoadBody { axis } => {
        gate(cfg.loads, ParseState::InLoadBody { axis })
      }
      KeywordKind::Control(kind) => {
        gate(cfg.controls, ParseState::InControl(kind))
      }
      KeywordKind::DatabaseBinary(kind) => {
        gate(cfg.databases, ParseState::InDatabaseBinary(kind))
      }
      KeywordKind::DatabaseAscii(kind) => {
        gate(cfg.databases, ParseState::InDatabaseAscii(kind))
      }
      KeywordKind::DatabaseHistoryNode => {
        if cfg.databases {
          self.current_history_nodes = Some(DatabaseHistoryNode::default());
          ParseState::InDatabaseHistoryNode
        } else {
          ParseState::Idle
        }
      }
      KeywordKind::DatabaseHistoryElement(kind) => {
        if cfg.databases {
          self.current_history_elements =
            Some(DatabaseHistoryElement::new(kind));
          ParseState::InDatabaseHistoryElement
        } else {
          ParseState::Idle
        }
      }
      KeywordKind::DatabaseCrossSection => {
        gate(cfg.databases, ParseState::InDatabaseCrossSection)
      }
      KeywordKind::InitialVelocity(kind) => {
        gate(cfg.initials, ParseState::InInitialVelocity(kind))
      }
      KeywordKind::InitialStress => {
        gate(cfg.initials, ParseState::InInitialStress)
      }
      KeywordKind::ConstrainedNodalRigidBody { inertia } => {
        gate(cfg.constraineds, ParseState::InConstrainedNrb { inertia })
      }
      KeywordKind::ConstrainedExtraNodes { set } => {
        if cfg.constraineds {
          if set {
            ParseState::InConstrainedExtraNodesSet
          } else {
            self.current_extra_nodes = Some(ConstrainedExtraNodes::default());
            ParseState::InConstrainedExtraNodesNode
          }
        } else {
          ParseState::Idle
        }
      }
      KeywordKind::ConstrainedJoint(kind) => {
        gate(cfg.constraineds, ParseState::InConstrainedJoint(kind))
      }
      KeywordKind::ConstrainedSpotweld => {
        gate(cfg.constraineds, ParseState::InConstrainedSpotweld)
      }
    };
  }

  /// Routes a data line to the active handler.
  fn consume_data(&mut self, line: &str, deck: &mut Deck) {
    match self.state {
      ParseState::Idle => {}

      ParseState::InNode => {
        deck.nodes.push(Self::decode_node_line(line));
      }

      ParseState::InPartName => {
        self.part_name = read_text(line, 0, 80).to_owned();
        self.state = ParseState::InPartData;
      }

      ParseState::InPartData => {
        deck.parts.push(Self::decode_part_lines(&self.part_name, line));
        self.part_name.clear();
        self.state = ParseState::Idle;
      }

      ParseState::InElement(kind) => {
        deck.elements.push(Self::decode_element_line(line, kind));
      }

      ParseState::InSetTitle => {
        // the title line is read and discarded; sets don't store it
        self.state = ParseState::InSetHeader;
      }

      ParseState::InSetHeader => {
        let kind = self.current_set.as_ref().map_or(SetKind::NodeList, |s| {
          s.kind
        });
        self.current_set = Some(Self::decode_set_header(line, kind));
        self.state = ParseState::InSetData;
      }

      ParseState::InSetData => {
        if let Some(ref mut set) = self.current_set {
          if set.kind == SetKind::Segment {
            Self::decode_segment_line(line, set);
          } else {
            Self::decode_set_ids(line, set);
          }
        }
      }

      ParseState::InSectionTitle(kind) => {
        self.state = ParseState::InSectionHeader(kind);
      }

      ParseState::InSectionHeader(kind) => match kind {
        SectionKind::Shell => {
          let mut s = Section::new(kind);
          s.secid = int_col(deck, "Section shell header", "secid", line, 0, 10);
          s.elform =
            int_col(deck, "Section shell header", "elform", line, 10, 10);
          s.shrf =
            float_col(deck, "Section shell header", "shrf", line, 20, 10);
          s.nip = int_col(deck, "Section shell header", "nip", line, 30, 10);
          s.propt =
            float_col(deck, "Section shell header", "propt", line, 40, 10);
          s.qr_irid =
            int_col(deck, "Section shell header", "qr_irid", line, 50, 10);
          s.icomp =
            int_col(deck, "Section shell header", "icomp", line, 60, 10);
          s.setyp =
            int_col(deck, "Section shell header", "setyp", line, 70, 10);
          self.current_section = Some(s);
          self.state = ParseState::InSectionData(kind);
        }
        SectionKind::Solid => {
          let mut s = Section::new(kind);
          s.secid = int_col(deck, "Section solid", "secid", line, 0, 10);
          s.elform = int_col(deck, "Section solid", "elform", line, 10, 10);
          s.aet = int_col(deck, "Section solid", "aet", line, 20, 10);
          deck.sections.push(s);
          self.state = ParseState::Idle;
        }
        SectionKind::Beam => {
          let mut s = Section::new(kind);
          s.secid = int_col(deck, "Section beam header", "secid", line, 0, 10);
          s.elform =
            int_col(deck, "Section beam header", "elform", line, 10, 10);
          s.shrf = float_col(deck, "Section beam header", "shrf", line, 20, 10);
          s.qr_irid =
            int_col(deck, "Section beam header", "qr_irid", line, 30, 10);
          s.cst = float_col(deck, "Section beam header", "cst", line, 40, 10);
          s.scoor =
            float_col(deck, "Section beam header", "scoor", line, 50, 10);
          self.current_section = Some(s);
          self.state = ParseState::InSectionData(kind);
        }
      },

      ParseState::InSectionData(kind) => {
        if let Some(mut s) = self.current_section.take() {
          match kind {
            SectionKind::Shell => {
              for (i, t) in s.thickness.iter_mut().enumerate() {
                *t = float_col(deck, "Section shell data", "t", line, i * 10,
                  10);
              }
              s.nloc = float_col(deck, "Section shell data", "nloc", line, 40,
                10);
              s.marea = float_col(deck, "Section shell data", "marea", line,
                50, 10);
              s.idof = float_col(deck, "Section shell data", "idof", line, 60,
                10);
              s.edgset = float_col(deck, "Section shell data", "edgset", line,
                70, 10);
            }
            SectionKind::Beam => {
              s.ts[0] = float_col(deck, "Section beam data", "ts1", line, 0,
                10);
              s.ts[1] = float_col(deck, "Section beam data", "ts2", line, 10,
                10);
              s.tt[0] = float_col(deck, "Section beam data", "tt1", line, 20,
                10);
              s.tt[1] = float_col(deck, "Section beam data", "tt2", line, 30,
                10);
              s.nsloc = float_col(deck, "Section beam data", "nsloc", line, 40,
                10);
              s.ntloc = float_col(deck, "Section beam data", "ntloc", line, 50,
                10);
            }
            SectionKind::Solid => {}
          }
          deck.sections.push(s);
        }
        self.state = ParseState::Idle;
      }

      ParseState::InContactPrefix => {
        // the ID card (cid + heading) or title line is discarded
        self.state = ParseState::InContactCard1;
      }

      ParseState::InContactCard1 => {
        if let Some(ref mut c) = self.current_contact {
          c.ssid = int_col(deck, "Contact card 1", "ssid", line, 0, 10);
          c.msid = int_col(deck, "Contact card 1", "msid", line, 10, 10);
          c.sstyp = int_col(deck, "Contact card 1", "sstyp", line, 20, 10);
          c.mstyp = int_col(deck, "Contact card 1", "mstyp", line, 30, 10);
          c.sboxid = int_col(deck, "Contact card 1", "sboxid", line, 40, 10);
          c.mboxid = int_col(deck, "Contact card 1", "mboxid", line, 50, 10);
          c.spr = int_col(deck, "Contact card 1", "spr", line, 60, 10);
          c.mpr = int_col(deck, "Contact card 1", "mpr", line, 70, 10);
          c.cards_parsed = 1;
        }
        self.state = ParseState::InContactCard2;
      }

      ParseState::InContactCard2 => {
        if let Some(ref mut c) = self.current_contact {
          c.fs = float_col(deck, "Contact card 2", "fs", line, 0, 10);
          c.fd = float_col(deck, "Contact card 2", "fd", line, 10, 10);
          c.dc = float_col(deck, "Contact card 2", "dc", line, 20, 10);
          c.vc = float_col(deck, "Contact card 2", "vc", line, 30, 10);
          c.vdc = float_col(deck, "Contact card 2", "vdc", line, 40, 10);
          c.penchk = int_col(deck, "Contact card 2", "penchk", line, 50, 10);
          c.bt = float_col(deck, "Contact card 2", "bt", line, 60, 10);
          c.dt = float_col(deck, "Contact card 2", "dt", line, 70, 10);
          c.cards_parsed = 2;
        }
        self.state = ParseState::InContactCard3;
      }

      ParseState::InContactCard3 => {
        if let Some(ref mut c) = self.current_contact {
          c.sfs = float_col(deck, "Contact card 3", "sfs", line, 0, 10);
          c.sfm = float_col(deck, "Contact card 3", "sfm", line, 10, 10);
          c.sst = float_col(deck, "Contact card 3", "sst", line, 20, 10);
          c.mst = float_col(deck, "Contact card 3", "mst", line, 30, 10);
          c.sfst = float_col(deck, "Contact card 3", "sfst", line, 40, 10);
          c.sfmt = float_col(deck, "Contact card 3", "sfmt", line, 50, 10);
          c.fsf = float_col(deck, "Contact card 3", "fsf", line, 60, 10);
          c.vsf = float_col(deck, "Contact card 3", "vsf", line, 70, 10);
          c.cards_parsed = 3;
        }
        if let Some(c) = self.current_contact.take() {
          deck.contacts.push(c);
        }
        self.state = ParseState::Idle;
      }

      ParseState::InMaterialTitle => {
        if let Some(ref mut m) = self.current_material {
          m.title = line.trim().to_owned();
        }
        self.state = ParseState::InMaterialData;
      }

      ParseState::InMaterialData => {
        let mut row = [0.0_f64; 8];
        for (i, v) in row.iter_mut().enumerate() {
          *v = float_col(deck, "Material data", "value", line, i * 10, 10);
        }
        let mut done = false;
        if let Some(ref mut m) = self.current_material {
          m.cards.push(row.to_vec());
          m.cards_parsed += 1;
          match m.cards_parsed {
            1 => {
              // card 1 carries mid/ro/e/pr for every type; some types remap
              // the tail columns
              m.mid = row[0] as i32;
              m.ro = row[1];
              m.e = row[2];
              m.pr = row[3];
              match m.kind {
                MaterialKind::PlasticKinematic
                | MaterialKind::PiecewiseLinearPlasticity => {
                  m.sigy = row[4];
                  m.etan = row[5];
                  m.fail = row[6];
                  m.tdel = row[7];
                }
                MaterialKind::OrthotropicElastic => {
                  m.eb = row[3];
                  m.ec = row[4];
                  m.pr = row[5];
                  m.prca = row[6];
                  m.prcb = row[7];
                }
                MaterialKind::CompositeDamage
                | MaterialKind::LaminatedCompositeFabric
                | MaterialKind::CompositeFailure => {
                  m.eb = row[3];
                  m.ec = row[4];
                  m.pr = row[5];
                }
                _ => {}
              }
            }
            2 => match m.kind {
              MaterialKind::OrthotropicElastic => {
                m.gab = row[0];
                m.gbc = row[1];
                m.gca = row[2];
                m.aopt = row[3] as i32;
              }
              MaterialKind::CompositeDamage
              | MaterialKind::LaminatedCompositeFabric
              | MaterialKind::CompositeFailure => {
                m.gab = row[0];
                m.gbc = row[1];
                m.gca = row[2];
              }
              MaterialKind::Rigid => {
                m.cmo = row[0];
                m.con1 = row[1];
                m.con2 = row[2];
              }
              _ => {}
            },
            3 => match m.kind {
              MaterialKind::CompositeDamage
              | MaterialKind::LaminatedCompositeFabric
              | MaterialKind::CompositeFailure => {
                m.xc = row[0];
                m.xt = row[1];
                m.yc = row[2];
                m.yt = row[3];
                m.sc = row[4];
              }
              _ => {}
            },
            _ => {}
          }
          done = m.cards_parsed >= self.material_cards_expected;
        }
        if done {
          if let Some(m) = self.current_material.take() {
            deck.materials.push(m);
          }
          self.state = ParseState::Idle;
        }
      }

      ParseState::InInclude { path_only, relative } => {
        deck.includes.push(Include {
          filepath: line.trim().to_owned(),
          is_path_only: path_only,
          is_relative: relative
        });
        self.state = ParseState::Idle;
      }

      ParseState::InCurveTitle => {
        if let Some(ref mut c) = self.current_curve {
          c.title = line.trim().to_owned();
        }
        self.state = ParseState::InCurveHeader;
      }

      ParseState::InCurveHeader => {
        if let Some(ref mut c) = self.current_curve {
          c.lcid = int_col(deck, "Curve header", "lcid", line, 0, 10);
          c.sidr = int_col(deck, "Curve header", "sidr", line, 10, 10);
          c.sfa = float_col(deck, "Curve header", "sfa", line, 20, 10);
          c.sfo = float_col(deck, "Curve header", "sfo", line, 30, 10);
          c.offa = float_col(deck, "Curve header", "offa", line, 40, 10);
          c.offo = float_col(deck, "Curve header", "offo", line, 50, 10);
          c.dattyp = int_col(deck, "Curve header", "dattyp", line, 60, 10);
        }
        self.state = ParseState::InCurveData;
      }

      ParseState::InCurveData => {
        let a = float_col(deck, "Curve data", "abscissa", line, 0, 20);
        let o = float_col(deck, "Curve data", "ordinate", line, 20, 20);
        if let Some(ref mut c) = self.current_curve {
          c.add_point(a, o);
        }
      }

      ParseState::InBoundarySpc { set } => {
        let kind =
          if set { BoundaryKind::SpcSet } else { BoundaryKind::SpcNode };
        let mut spc = BoundarySpc::new(kind);
        if set {
          spc.nid = int_col(deck, "Boundary SPC", "nsid", line, 0, 10);
          spc.cid = int_col(deck, "Boundary SPC", "cid", line, 10, 10);
          spc.dofx = int_col(deck, "Boundary SPC", "dofx", line, 20, 10);
          spc.dofy = int_col(deck, "Boundary SPC", "dofy", line, 30, 10);
          spc.dofz = int_col(deck, "Boundary SPC", "dofz", line, 40, 10);
          spc.dofrx = int_col(deck, "Boundary SPC", "dofrx", line, 50, 10);
          spc.dofry = int_col(deck, "Boundary SPC", "dofry", line, 60, 10);
          spc.dofrz = int_col(deck, "Boundary SPC", "dofrz", line, 70, 10);
        } else {
          spc.nid = int_col(deck, "Boundary SPC", "nid", line, 0, 10);
          spc.dof = int_col(deck, "Boundary SPC", "dof", line, 10, 10);
          spc.vad = int_col(deck, "Boundary SPC", "vad", line, 20, 10);
        }
        deck.boundary_spcs.push(spc);
        // stays active: these blocks may carry one card per constraint
      }

      ParseState::InBoundaryMotion { set } => {
        let kind = if set {
          BoundaryKind::PrescribedMotionSet
        } else {
          BoundaryKind::PrescribedMotionNode
        };
        let mut m = BoundaryPrescribedMotion::new(kind);
        m.nid = int_col(deck, "Boundary motion", "nid", line, 0, 10);
        m.dof = int_col(deck, "Boundary motion", "dof", line, 10, 10);
        m.vad = int_col(deck, "Boundary motion", "vad", line, 20, 10);
        m.lcid = int_col(deck, "Boundary motion", "lcid", line, 30, 10);
        m.sf = float_col(deck, "Boundary motion", "sf", line, 40, 10);
        m.vid = int_col(deck, "Boundary motion", "vid", line, 50, 10);
        m.death = float_col(deck, "Boundary motion", "death", line, 60, 10);
        m.birth = float_col(deck, "Boundary motion", "birth", line, 70, 10);
        deck.boundary_motions.push(m);
      }

      ParseState::InLoadNode { set } => {
        let mut load = LoadNode::new(set);
        load.nid = int_col(deck, "Load node", "nid", line, 0, 10);
        load.dof = int_col(deck, "Load node", "dof", line, 10, 10);
        load.lcid = int_col(deck, "Load node", "lcid", line, 20, 10);
        load.sf = float_col(deck, "Load node", "sf", line, 30, 10);
        load.cid = int_col(deck, "Load node", "cid", line, 40, 10);
        load.m1 = int_col(deck, "Load node", "m1", line, 50, 10);
        load.m2 = int_col(deck, "Load node", "m2", line, 60, 10);
        load.m3 = int_col(deck, "Load node", "m3", line, 70, 10);
        deck.load_nodes.push(load);
      }

      ParseState::InLoadSegment => {
        let seg = LoadSegment {
          lcid: int_col(deck, "Load segment", "lcid", line, 0, 10),
          sf: float_col(deck, "Load segment", "sf", line, 10, 10),
          at: float_col(deck, "Load segment", "at", line, 20, 10),
          n1: int_col(deck, "Load segment", "n1", line, 30, 10),
          n2: int_col(deck, "Load segment", "n2", line, 40, 10),
          n3: int_col(deck, "Load segment", "n3", line, 50, 10),
          n4: int_col(deck, "Load segment", "n4", line, 60, 10)
        };
        deck.load_segments.push(seg);
      }

      ParseState::InLoadBody { axis } => {
        let mut body = LoadBody::new(axis);
        body.lcid = int_col(deck, "Load body", "lcid", line, 0, 10);
        body.sf = float_col(deck, "Load body", "sf", line, 10, 10);
        body.lciddr = int_col(deck, "Load body", "lciddr", line, 20, 10);
        body.xc = float_col(deck, "Load body", "xc", line, 30, 10);
        body.yc = float_col(deck, "Load body", "yc", line, 40, 10);
        body.zc = float_col(deck, "Load body", "zc", line, 50, 10);
        body.cid = int_col(deck, "Load body", "cid", line, 60, 10);
        deck.load_bodies.push(body);
        self.state = ParseState::Idle;
      }

      ParseState::InControl(kind) => {
        Self::consume_control(kind, line, deck);
        self.state = ParseState::Idle;
      }

      ParseState::InDatabaseBinary(kind) => {
        let mut db = DatabaseBinary::new(kind);
        db.dt = float_col(deck, "Database binary", "dt", line, 0, 10);
        db.lcdt = int_col(deck, "Database binary", "lcdt", line, 10, 10);
        db.beam = int_col(deck, "Database binary", "beam", line, 20, 10);
        db.npltc = int_col(deck, "Database binary", "npltc", line, 30, 10);
        db.psetid = int_col(deck, "Database binary", "psetid", line, 40, 10);
        deck.database_binaries.push(db);
        self.state = ParseState::Idle;
      }

      ParseState::InDatabaseAscii(kind) => {
        let mut db = DatabaseAscii::new(kind);
        db.dt = float_col(deck, "Database ASCII", "dt", line, 0, 10);
        db.lcdt = int_col(deck, "Database ASCII", "lcdt", line, 10, 10);
        db.binary = int_col(deck, "Database ASCII", "binary", line, 20, 10);
        db.lcur = int_col(deck, "Database ASCII", "lcur", line, 30, 10);
        db.ioopt = int_col(deck, "Database ASCII", "ioopt", line, 40, 10);
        deck.database_asciis.push(db);
        self.state = ParseState::Idle;
      }

      ParseState::InDatabaseHistoryNode => {
        for i in 0..8 {
          let nid =
            int_col(deck, "Database history node", "id", line, i * 10, 10);
          if nid > 0 {
            if let Some(ref mut h) = self.current_history_nodes {
              h.add_node(nid);
            }
          }
        }
      }

      ParseState::InDatabaseHistoryElement => {
        for i in 0..8 {
          let eid =
            int_col(deck, "Database history element", "id", line, i * 10, 10);
          if eid > 0 {
            if let Some(ref mut h) = self.current_history_elements {
              h.add_element(eid);
            }
          }
        }
      }

      ParseState::InDatabaseCrossSection => {
        let cs = DatabaseCrossSection {
          csid: int_col(deck, "Database cross section", "csid", line, 0, 10),
          psid: int_col(deck, "Database cross section", "psid", line, 10, 10),
          ssid: int_col(deck, "Database cross section", "ssid", line, 20, 10),
          tsid: int_col(deck, "Database cross section", "tsid", line, 30, 10),
          dsid: int_col(deck, "Database cross section", "dsid", line, 40, 10)
        };
        deck.database_cross_sections.push(cs);
        self.state = ParseState::Idle;
      }

      ParseState::InInitialVelocity(kind) => {
        let mut iv = InitialVelocity::new(kind);
        if kind == InitialVelocityKind::Generation {
          iv.nsid =
            int_col(deck, "Initial velocity generation", "nsid", line, 0, 10);
          iv.omega = float_col(deck, "Initial velocity generation", "omega",
            line, 10, 10);
          iv.vx = float_col(deck, "Initial velocity generation", "vx", line,
            20, 10);
          iv.vy = float_col(deck, "Initial velocity generation", "vy", line,
            30, 10);
          iv.vz = float_col(deck, "Initial velocity generation", "vz", line,
            40, 10);
          iv.xc = float_col(deck, "Initial velocity generation", "xc", line,
            50, 10);
          iv.yc = float_col(deck, "Initial velocity generation", "yc", line,
            60, 10);
          iv.zc = float_col(deck, "Initial velocity generation", "zc", line,
            70, 10);
        } else {
          iv.nsid = int_col(deck, "Initial velocity", "nsid", line, 0, 10);
          iv.nsidex =
            int_col(deck, "Initial velocity", "nsidex", line, 10, 10);
          iv.boxid = int_col(deck, "Initial velocity", "boxid", line, 20, 10);
          iv.irigid =
            int_col(deck, "Initial velocity", "irigid", line, 30, 10);
          iv.vx = float_col(deck, "Initial velocity", "vx", line, 40, 10);
          iv.vy = float_col(deck, "Initial velocity", "vy", line, 50, 10);
          iv.vz = float_col(deck, "Initial velocity", "vz", line, 60, 10);
          iv.vxr = float_col(deck, "Initial velocity", "vxr", line, 70, 10);
        }
        deck.initial_velocities.push(iv);
        self.state = ParseState::Idle;
      }

      ParseState::InInitialStress => {
        // stress tables are not decoded
        self.state = ParseState::Idle;
      }

      ParseState::InConstrainedNrb { inertia } => {
        let mut nrb = ConstrainedNodalRigidBody {
          has_inertia: inertia,
          ..Default::default()
        };
        nrb.pid =
          int_col(deck, "Constrained nodal rigid body", "pid", line, 0, 10);
        nrb.cid =
          int_col(deck, "Constrained nodal rigid body", "cid", line, 10, 10);
        nrb.nsid =
          int_col(deck, "Constrained nodal rigid body", "nsid", line, 20, 10);
        nrb.pnode =
          int_col(deck, "Constrained nodal rigid body", "pnode", line, 30, 10);
        if !inertia {
          nrb.iprt = int_col(deck, "Constrained nodal rigid body", "iprt",
            line, 40, 10);
          nrb.drflag = int_col(deck, "Constrained nodal rigid body", "drflag",
            line, 50, 10);
          nrb.rrflag = int_col(deck, "Constrained nodal rigid body", "rrflag",
            line, 60, 10);
        }
        deck.constrained_nodal_rigid_bodies.push(nrb);
        self.state = ParseState::Idle;
      }

      ParseState::InConstrainedExtraNodesSet => {
        let extra = ConstrainedExtraNodes {
          pid: int_col(deck, "Constrained extra nodes", "pid", line, 0, 10),
          nsid: int_col(deck, "Constrained extra nodes", "nsid", line, 10, 10),
          node_ids: Vec::new(),
          is_set: true
        };
        deck.constrained_extra_nodes.push(extra);
        self.state = ParseState::Idle;
      }

      ParseState::InConstrainedExtraNodesNode => {
        if let Some(ref mut extra) = self.current_extra_nodes {
          if extra.pid == 0 {
            extra.pid =
              int_col(deck, "Constrained extra nodes", "pid", line, 0, 10);
          } else {
            for i in 0..8 {
              let nid = int_col(deck, "Constrained extra nodes", "id", line,
                i * 10, 10);
              if nid > 0 {
                extra.add_node(nid);
              }
            }
          }
        }
      }

      ParseState::InConstrainedJoint(kind) => {
        let mut joint = ConstrainedJoint::new(kind);
        joint.n1 = int_col(deck, "Constrained joint", "n1", line, 0, 10);
        joint.n2 = int_col(deck, "Constrained joint", "n2", line, 10, 10);
        joint.n3 = int_col(deck, "Constrained joint", "n3", line, 20, 10);
        joint.n4 = int_col(deck, "Constrained joint", "n4", line, 30, 10);
        joint.n5 = int_col(deck, "Constrained joint", "n5", line, 40, 10);
        joint.n6 = int_col(deck, "Constrained joint", "n6", line, 50, 10);
        joint.rps = int_col(deck, "Constrained joint", "rps", line, 60, 10);
        joint.damp = int_col(deck, "Constrained joint", "damp", line, 70, 10);
        deck.constrained_joints.push(joint);
        self.state = ParseState::Idle;
      }

      ParseState::InConstrainedSpotweld => {
        let weld = ConstrainedSpotweld {
          n1: int_col(deck, "Constrained spotweld", "n1", line, 0, 10),
          n2: int_col(deck, "Constrained spotweld", "n2", line, 10, 10),
          sn: float_col(deck, "Constrained spotweld", "sn", line, 20, 10),
          ss: float_col(deck, "Constrained spotweld", "ss", line, 30, 10),
          n: int_col(deck, "Constrained spotweld", "n", line, 40, 10),
          m: int_col(deck, "Constrained spotweld", "m", line, 50, 10),
          tf: float_col(deck, "Constrained spotweld", "tf", line, 60, 10)
        };
        deck.constrained_spotwelds.push(weld);
        self.state = ParseState::Idle;
      }
    }
  }

  /// Decodes the single card of a control block.
  fn consume_control(kind: ControlKind, line: &str, deck: &mut Deck) {
    match kind {
      ControlKind::Termination => {
        let ctl = ControlTermination {
          endtim: float_col(deck, "Control termination", "endtim", line, 0, 10),
          endcyc: float_col(deck, "Control termination", "endcyc", line, 10,
            10),
          dtmin: float_col(deck, "Control termination", "dtmin", line, 20, 10),
          endeng: float_col(deck, "Control termination", "endeng", line, 30,
            10),
          endmas: float_col(deck, "Control termination", "endmas", line, 40,
            10),
          nosol: int_col(deck, "Control termination", "nosol", line, 50, 10)
        };
        deck.control_terminations.push(ctl);
      }
      ControlKind::Timestep => {
        let ctl = ControlTimestep {
          dtinit: float_col(deck, "Control timestep", "dtinit", line, 0, 10),
          tssfac: float_col(deck, "Control timestep", "tssfac", line, 10, 10),
          isdo: int_col(deck, "Control timestep", "isdo", line, 20, 10),
          tslimt: float_col(deck, "Control timestep", "tslimt", line, 30, 10),
          dt2ms: float_col(deck, "Control timestep", "dt2ms", line, 40, 10),
          lctm: int_col(deck, "Control timestep", "lctm", line, 50, 10),
          erode: int_col(deck, "Control timestep", "erode", line, 60, 10),
          ms1st: int_col(deck, "Control timestep", "ms1st", line, 70, 10)
        };
        deck.control_timesteps.push(ctl);
      }
      ControlKind::Energy => {
        let ctl = ControlEnergy {
          hgen: int_col(deck, "Control energy", "hgen", line, 0, 10),
          rwen: int_col(deck, "Control energy", "rwen", line, 10, 10),
          slnten: int_col(deck, "Control energy", "slnten", line, 20, 10),
          rylen: int_col(deck, "Control energy", "rylen", line, 30, 10)
        };
        deck.control_energies.push(ctl);
      }
      ControlKind::Output => {
        let ctl = ControlOutput {
          npopt: int_col(deck, "Control output", "npopt", line, 0, 10),
          netefm: int_col(deck, "Control output", "netefm", line, 10, 10),
          nflcit: int_col(deck, "Control output", "nflcit", line, 20, 10),
          nprint: int_col(deck, "Control output", "nprint", line, 30, 10),
          ikedit: int_col(deck, "Control output", "ikedit", line, 40, 10),
          iflush: int_col(deck, "Control output", "iflush", line, 50, 10),
          iprtf: int_col(deck, "Control output", "iprtf", line, 60, 10),
          ierode: int_col(deck, "Control output", "ierode", line, 70, 10)
        };
        deck.control_outputs.push(ctl);
      }
      ControlKind::Shell => {
        let ctl = ControlShell {
          wrpang: float_col(deck, "Control shell", "wrpang", line, 0, 10),
          esort: int_col(deck, "Control shell", "esort", line, 10, 10),
          irnxx: int_col(deck, "Control shell", "irnxx", line, 20, 10),
          istupd: int_col(deck, "Control shell", "istupd", line, 30, 10),
          theory: int_col(deck, "Control shell", "theory", line, 40, 10),
          bwc: int_col(deck, "Control shell", "bwc", line, 50, 10),
          miter: int_col(deck, "Control shell", "miter", line, 60, 10),
          proj: int_col(deck, "Control shell", "proj", line, 70, 10)
        };
        deck.control_shells.push(ctl);
      }
      ControlKind::Contact => {
        let ctl = ControlContact {
          slsfac: float_col(deck, "Control contact", "slsfac", line, 0, 10),
          rwpnal: float_col(deck, "Control contact", "rwpnal", line, 10, 10),
          islchk: int_col(deck, "Control contact", "islchk", line, 20, 10),
          shlthk: int_col(deck, "Control contact", "shlthk", line, 30, 10),
          penopt: int_col(deck, "Control contact", "penopt", line, 40, 10),
          thkchg: float_col(deck, "Control contact", "thkchg", line, 50, 10),
          otefm: int_col(deck, "Control contact", "otefm", line, 60, 10),
          enmass: int_col(deck, "Control contact", "enmass", line, 70, 10)
        };
        deck.control_contacts.push(ctl);
      }
      ControlKind::Hourglass => {
        let ctl = ControlHourglass {
          ihq: int_col(deck, "Control hourglass", "ihq", line, 0, 10),
          qh: float_col(deck, "Control hourglass", "qh", line, 10, 10)
        };
        deck.control_hourglasses.push(ctl);
      }
      ControlKind::BulkViscosity => {
        let ctl = ControlBulkViscosity {
          q1: float_col(deck, "Control bulk viscosity", "q1", line, 0, 10),
          q2: float_col(deck, "Control bulk viscosity", "q2", line, 10, 10),
          ibq: int_col(deck, "Control bulk viscosity", "ibq", line, 20, 10)
        };
        deck.control_bulk_viscosities.push(ctl);
      }
    }
  }

  /// Decodes one node card. Column widths `[8, 16, 16, 16, 8, 8]`.
  pub fn decode_node_line(line: &str) -> Node {
    return Node {
      nid: read_int(line, 0, 8),
      x: read_float(line, 8, 16),
      y: read_float(line, 24, 16),
      z: read_float(line, 40, 16),
      tc: read_int(line, 56, 8),
      rc: read_int(line, 64, 8)
    };
  }

  /// Decodes a part from its name card (80-wide) and data card (eight
  /// 10-wide integers).
  pub fn decode_part_lines(name_line: &str, data_line: &str) -> Part {
    return Part {
      name: read_text(name_line, 0, 80).to_owned(),
      pid: read_int(data_line, 0, 10),
      secid: read_int(data_line, 10, 10),
      mid: read_int(data_line, 20, 10),
      eosid: read_int(data_line, 30, 10),
      hgid: read_int(data_line, 40, 10),
      grav: read_int(data_line, 50, 10),
      adpopt: read_int(data_line, 60, 10),
      tmid: read_int(data_line, 70, 10)
    };
  }

  /// Decodes one element card for a given kind. Column widths are ten
  /// 8-wide integers: eid, pid, then up to eight node IDs.
  pub fn decode_element_line(line: &str, kind: ElementKind) -> Element {
    let mut element = Element::new(kind);
    element.eid = read_int(line, 0, 8);
    element.pid = read_int(line, 8, 8);
    let mut count: u8 = 0;
    for (i, slot) in element.nodes.iter_mut().enumerate() {
      let nid = read_int(line, 16 + i * 8, 8);
      *slot = nid;
      if nid > 0 {
        count = (i + 1) as u8;
      }
    }
    element.node_count = if count >= 3 { count } else { 0 };
    return element;
  }

  /// Decodes a set header card for a given kind: `[sid, da1..da4, solver]`
  /// at 10-wide columns. A line too short to reach the solver column keeps
  /// the default solver token.
  pub fn decode_set_header(line: &str, kind: SetKind) -> Set {
    let mut set = Set::new(kind);
    set.sid = read_int(line, 0, 10);
    set.da1 = read_float(line, 10, 10);
    set.da2 = read_float(line, 20, 10);
    set.da3 = read_float(line, 30, 10);
    set.da4 = read_float(line, 40, 10);
    if line.len() > 50 {
      set.solver = read_text(line, 50, 10).to_owned();
    }
    return set;
  }

  /// Decodes one list-set data card: up to eight 10-wide IDs, zeroes
  /// skipped.
  pub fn decode_set_ids(line: &str, set: &mut Set) {
    for i in 0..8 {
      set.add_id(read_int(line, i * 10, 10));
    }
  }

  /// Decodes one segment-set data card: four 10-wide node IDs forming a
  /// face.
  pub fn decode_segment_line(line: &str, set: &mut Set) {
    let n1 = read_int(line, 0, 10);
    let n2 = read_int(line, 10, 10);
    let n3 = read_int(line, 20, 10);
    let n4 = read_int(line, 30, 10);
    set.add_segment(n1, n2, n3, n4);
  }
}
