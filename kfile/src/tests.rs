use crate::prelude::*;

/// Builds a data card out of right-aligned 10-wide fields.
fn card10(fields: &[&str]) -> String {
  return fields
    .iter()
    .map(|f| format!("{:>10}", f))
    .collect::<Vec<_>>()
    .join("");
}

/// Builds a data card out of right-aligned 8-wide fields.
fn card8(fields: &[&str]) -> String {
  return fields
    .iter()
    .map(|f| format!("{:>8}", f))
    .collect::<Vec<_>>()
    .join("");
}

/// Builds a curve data card out of right-aligned 20-wide fields.
fn card20(fields: &[&str]) -> String {
  return fields
    .iter()
    .map(|f| format!("{:>20}", f))
    .collect::<Vec<_>>()
    .join("");
}

/// Parses a string with a fresh, fully-enabled parser.
fn parse(content: &str) -> Deck {
  let mut parser = OnePassParser::new();
  return parser.parse_string(content);
}

#[test]
fn test_classifier() {
  assert_eq!(classify("*NODE"), LineKind::Keyword);
  assert_eq!(classify("  *NODE"), LineKind::Keyword);
  assert_eq!(classify("$# comment"), LineKind::Comment);
  assert_eq!(classify("   $"), LineKind::Comment);
  assert_eq!(classify(""), LineKind::Blank);
  assert_eq!(classify("  \t "), LineKind::Blank);
  assert_eq!(classify("       1       2"), LineKind::Data);
  assert_eq!(classify("some text"), LineKind::Data);
}

#[test]
fn test_column_decoders_never_panic_on_short_lines() {
  // sweep every (start, len) over a short line; all of these must yield
  // the zero/empty defaults without complaint
  let line = "12345";
  for start in 0..16 {
    for len in 0..16 {
      let i = read_int(line, start, len);
      let x = read_float(line, start, len);
      let t = read_text(line, start, len);
      if start >= line.len() {
        assert_eq!(i, 0);
        assert_eq!(x, 0.0);
        assert_eq!(t, "");
      }
    }
  }
}

#[test]
fn test_column_decoder_values() {
  let direct = |s: &str, v: i32| assert_eq!(read_int(s, 0, s.len()), v);
  direct("      12", 12);
  direct("-3", -3);
  direct("", 0);
  direct("   ", 0);
  direct("abc", 0);
  direct("1.5", 0);
  assert_eq!(read_float("   1e+20", 0, 10), 1e20);
  assert_eq!(read_float("-7.85e-9", 0, 10), -7.85e-9);
  assert_eq!(read_float("1e20", 0, 10), 1e20);
  assert_eq!(read_float("  .5", 0, 10), 0.5);
  assert_eq!(read_float("nope", 0, 10), 0.0);
  // a neighbour bleeding into a wide window: the leading token wins
  assert_eq!(read_float("300.0     0", 0, 16), 300.0);
  assert_eq!(read_int("12 34", 0, 10), 12);
  // the checked variants surface the offending token
  assert_eq!(try_int("   abc", 0, 10), Err("abc"));
  assert_eq!(try_int("      ", 0, 6), Ok(0));
  assert_eq!(try_float("  x9", 0, 4), Err("x9"));
  // text fields keep their inner spacing
  assert_eq!(read_text("  Roof panel  ", 0, 80), "Roof panel");
}

#[test]
fn test_recognizer_families() {
  let kind = |l: &str| recognize(l).map(|k| k.kind);
  assert_eq!(kind("*NODE"), Some(KeywordKind::Node));
  assert_eq!(kind("*node"), Some(KeywordKind::Node));
  assert_eq!(kind("*NODE_TRANSFORM"), None);
  assert_eq!(kind("*PART"), Some(KeywordKind::Part));
  assert_eq!(kind("*PART_CONTACT"), None);
  assert_eq!(
    kind("*ELEMENT_SHELL"),
    Some(KeywordKind::Element(ElementKind::Shell))
  );
  assert_eq!(
    kind("*ELEMENT_SOLID"),
    Some(KeywordKind::Element(ElementKind::Solid))
  );
  assert_eq!(
    kind("*ELEMENT_BEAM"),
    Some(KeywordKind::Element(ElementKind::Beam))
  );
  assert_eq!(kind("*SET_NODE_LIST"), Some(KeywordKind::Set(SetKind::NodeList)));
  assert_eq!(kind("*SET_PART_LIST"), Some(KeywordKind::Set(SetKind::PartList)));
  assert_eq!(kind("*SET_SEGMENT"), Some(KeywordKind::Set(SetKind::Segment)));
  assert_eq!(kind("*SET_SHELL"), Some(KeywordKind::Set(SetKind::Shell)));
  assert_eq!(kind("*SET_SOLID"), Some(KeywordKind::Set(SetKind::Solid)));
  assert_eq!(
    kind("*SECTION_BEAM"),
    Some(KeywordKind::Section(SectionKind::Beam))
  );
  assert_eq!(kind("*DEFINE_CURVE"), Some(KeywordKind::DefineCurve));
  assert_eq!(
    kind("*BOUNDARY_SPC_NODE"),
    Some(KeywordKind::BoundarySpc { set: false })
  );
  assert_eq!(
    kind("*BOUNDARY_SPC_SET"),
    Some(KeywordKind::BoundarySpc { set: true })
  );
  assert_eq!(
    kind("*BOUNDARY_PRESCRIBED_MOTION_SET"),
    Some(KeywordKind::BoundaryPrescribedMotion { set: true })
  );
  assert_eq!(
    kind("*LOAD_NODE_POINT"),
    Some(KeywordKind::LoadNode { set: false })
  );
  assert_eq!(kind("*LOAD_NODE_SET"), Some(KeywordKind::LoadNode { set: true }));
  assert_eq!(kind("*LOAD_SEGMENT"), Some(KeywordKind::LoadSegment));
  assert_eq!(
    kind("*LOAD_BODY_Y"),
    Some(KeywordKind::LoadBody { axis: Some(Axis::Y) })
  );
  assert_eq!(
    kind("*LOAD_BODY_PARTS"),
    Some(KeywordKind::LoadBody { axis: None })
  );
  assert_eq!(
    kind("*CONTROL_TERMINATION"),
    Some(KeywordKind::Control(ControlKind::Termination))
  );
  assert_eq!(
    kind("*CONTROL_BULK_VISCOSITY"),
    Some(KeywordKind::Control(ControlKind::BulkViscosity))
  );
  assert_eq!(kind("*CONTROL_IMPLICIT_GENERAL"), None);
  assert_eq!(
    kind("*DATABASE_BINARY_D3PLOT"),
    Some(KeywordKind::DatabaseBinary(DatabaseKind::BinaryD3plot))
  );
  assert_eq!(
    kind("*DATABASE_GLSTAT"),
    Some(KeywordKind::DatabaseAscii(DatabaseKind::Glstat))
  );
  assert_eq!(
    kind("*DATABASE_SPCFORC"),
    Some(KeywordKind::DatabaseAscii(DatabaseKind::Spcforc))
  );
  assert_eq!(
    kind("*DATABASE_HISTORY_NODE"),
    Some(KeywordKind::DatabaseHistoryNode)
  );
  assert_eq!(
    kind("*DATABASE_HISTORY_SHELL"),
    Some(KeywordKind::DatabaseHistoryElement(ElementKind::Shell))
  );
  assert_eq!(
    kind("*DATABASE_CROSS_SECTION_SET"),
    Some(KeywordKind::DatabaseCrossSection)
  );
  assert_eq!(kind("*DATABASE_EXTENT_BINARY"), None);
  assert_eq!(
    kind("*INITIAL_VELOCITY"),
    Some(KeywordKind::InitialVelocity(InitialVelocityKind::Node))
  );
  assert_eq!(
    kind("*INITIAL_VELOCITY_SET"),
    Some(KeywordKind::InitialVelocity(InitialVelocityKind::Set))
  );
  assert_eq!(
    kind("*INITIAL_VELOCITY_GENERATION"),
    Some(KeywordKind::InitialVelocity(InitialVelocityKind::Generation))
  );
  assert_eq!(kind("*INITIAL_STRESS_SHELL"), Some(KeywordKind::InitialStress));
  assert_eq!(
    kind("*CONSTRAINED_NODAL_RIGID_BODY_INERTIA"),
    Some(KeywordKind::ConstrainedNodalRigidBody { inertia: true })
  );
  assert_eq!(
    kind("*CONSTRAINED_EXTRA_NODES_SET"),
    Some(KeywordKind::ConstrainedExtraNodes { set: true })
  );
  assert_eq!(
    kind("*CONSTRAINED_JOINT_REVOLUTE"),
    Some(KeywordKind::ConstrainedJoint(JointKind::Revolute))
  );
  assert_eq!(
    kind("*CONSTRAINED_SPOTWELD"),
    Some(KeywordKind::ConstrainedSpotweld)
  );
  assert_eq!(kind("*INCLUDE"), Some(KeywordKind::Include {
    path_only: false,
    relative: false
  }));
  assert_eq!(kind("*INCLUDE_PATH"), Some(KeywordKind::Include {
    path_only: true,
    relative: false
  }));
  assert_eq!(kind("*INCLUDE_PATH_RELATIVE"), Some(KeywordKind::Include {
    path_only: true,
    relative: true
  }));
  // vendor keywords we legitimately ignore
  assert_eq!(kind("*KEYWORD"), None);
  assert_eq!(kind("*AIRBAG_SIMPLE_PRESSURE_VOLUME"), None);
  assert_eq!(kind("*END"), None);
}

#[test]
fn test_recognizer_contacts_and_materials() {
  let kw = recognize("*CONTACT_AUTOMATIC_SURFACE_TO_SURFACE_ID").unwrap();
  assert!(kw.options.id);
  assert!(!kw.options.title);
  match kw.kind {
    KeywordKind::Contact { kind, type_name } => {
      assert_eq!(kind, ContactKind::AutomaticSurfaceToSurface);
      assert_eq!(type_name, "AUTOMATIC_SURFACE_TO_SURFACE");
    }
    other => panic!("wrong kind: {:?}", other)
  }
  // the automatic family wins over its plain counterpart, and vice versa
  let kw = recognize("*CONTACT_SURFACE_TO_SURFACE").unwrap();
  match kw.kind {
    KeywordKind::Contact { kind, .. } => {
      assert_eq!(kind, ContactKind::SurfaceToSurface);
    }
    other => panic!("wrong kind: {:?}", other)
  }
  let kw = recognize("*CONTACT_TIED_SHELL_EDGE_TO_SURFACE_MPP_ID").unwrap();
  assert!(kw.options.mpp);
  assert!(kw.options.id);
  match kw.kind {
    KeywordKind::Contact { kind, type_name } => {
      assert_eq!(kind, ContactKind::TiedShellEdgeToSurface);
      assert_eq!(type_name, "TIED_SHELL_EDGE_TO_SURFACE");
    }
    other => panic!("wrong kind: {:?}", other)
  }
  let kw = recognize("*CONTACT_FORMING_ONE_WAY").unwrap();
  match kw.kind {
    KeywordKind::Contact { kind, type_name } => {
      assert_eq!(kind, ContactKind::Other);
      assert_eq!(type_name, "FORMING_ONE_WAY");
    }
    other => panic!("wrong kind: {:?}", other)
  }
  // materials: names and numeric codes map to the same variant
  for head in ["*MAT_PIECEWISE_LINEAR_PLASTICITY", "*MAT_024"] {
    match recognize(head).unwrap().kind {
      KeywordKind::Material { kind, .. } => {
        assert_eq!(kind, MaterialKind::PiecewiseLinearPlasticity);
        assert_eq!(kind.expected_cards(), 2);
      }
      other => panic!("wrong kind: {:?}", other)
    }
  }
  for head in ["*MAT_054", "*MAT_055", "*MAT_COMPOSITE_DAMAGE"] {
    match recognize(head).unwrap().kind {
      KeywordKind::Material { kind, .. } => {
        assert_eq!(kind, MaterialKind::CompositeDamage);
        assert_eq!(kind.expected_cards(), 6);
      }
      other => panic!("wrong kind: {:?}", other)
    }
  }
  let kw = recognize("*MAT_ELASTIC_TITLE").unwrap();
  assert!(kw.options.title);
  match kw.kind {
    KeywordKind::Material { kind, type_name } => {
      assert_eq!(kind, MaterialKind::Elastic);
      assert_eq!(type_name, "ELASTIC");
    }
    other => panic!("wrong kind: {:?}", other)
  }
  match recognize("*MAT_JOHNSON_COOK").unwrap().kind {
    KeywordKind::Material { kind, type_name } => {
      assert_eq!(kind, MaterialKind::Other);
      assert_eq!(type_name, "JOHNSON_COOK");
      assert_eq!(kind.expected_cards(), 10);
    }
    other => panic!("wrong kind: {:?}", other)
  }
}

#[test]
fn test_recognizer_stable_under_trailing_whitespace() {
  let lines = [
    "*NODE",
    "*PART",
    "*ELEMENT_SHELL",
    "*SET_NODE_LIST_TITLE",
    "*CONTACT_AUTOMATIC_GENERAL",
    "*MAT_RIGID",
    "*DEFINE_CURVE_TITLE",
    "*CONTROL_TIMESTEP",
    "*DATABASE_NODOUT",
    "*CONSTRAINED_JOINT_PLANAR",
    "*TOTALLY_MADE_UP"
  ];
  for line in lines {
    let padded = format!("  {}   ", line);
    assert_eq!(recognize(line), recognize(&padded), "unstable: {}", line);
  }
}

#[test]
fn test_node_card() {
  // scenario: one node, loose alignment and all
  let deck = parse(
    "*NODE\n       1     100.0           200.0           300.0     0       0\n"
  );
  assert_eq!(deck.nodes.len(), 1);
  let node = &deck.nodes[0];
  assert_eq!(node.nid, 1);
  assert_eq!(node.x, 100.0);
  assert_eq!(node.y, 200.0);
  assert_eq!(node.z, 300.0);
  assert_eq!(node.tc, 0);
  assert_eq!(node.rc, 0);
  assert!(deck.warnings.is_empty());
}

#[test]
fn test_part_cards() {
  let input = format!(
    "*PART\nRoof panel\n{}\n",
    card10(&["7", "2", "3", "0", "0", "0", "0", "0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.parts.len(), 1);
  let part = &deck.parts[0];
  assert_eq!(part.name, "Roof panel");
  assert_eq!(part.pid, 7);
  assert_eq!(part.secid, 2);
  assert_eq!(part.mid, 3);
  assert_eq!(part.eosid, 0);
  assert_eq!(part.tmid, 0);
}

#[test]
fn test_element_shell_node_count() {
  let input = format!(
    "*ELEMENT_SHELL\n{}\n{}\n",
    card8(&["1", "1", "1", "2", "3", "4", "0", "0", "0", "0"]),
    card8(&["2", "1", "1", "2", "3", "4", "5", "0", "0", "0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.elements.len(), 2);
  assert_eq!(deck.elements[0].pid, 1);
  assert_eq!(deck.elements[0].kind, ElementKind::Shell);
  assert_eq!(deck.elements[0].node_count, 4);
  assert_eq!(deck.elements[1].node_count, 5);
  // every slot at or past node_count is zero
  for element in &deck.elements {
    for i in (element.node_count as usize)..8 {
      assert_eq!(element.nodes[i], 0);
    }
  }
}

#[test]
fn test_element_with_too_few_nodes() {
  let input =
    format!("*ELEMENT_BEAM\n{}\n", card8(&["9", "1", "1", "2"]));
  let deck = parse(&input);
  assert_eq!(deck.elements.len(), 1);
  assert_eq!(deck.elements[0].kind, ElementKind::Beam);
  assert_eq!(deck.elements[0].nodes[0], 1);
  assert_eq!(deck.elements[0].nodes[1], 2);
  // below three nodes the count clamps to zero
  assert_eq!(deck.elements[0].node_count, 0);
}

#[test]
fn test_set_node_list_commits_on_keyword_boundary() {
  let input = concat!(
    "*SET_NODE_LIST\n",
    "         5       0.0       0.0       0.0       0.0MECH\n",
    "         1         2         3         0         0         0         0         0\n",
    "         4         0         0         0         0         0         0         0\n",
    "*NODE\n"
  );
  let deck = parse(input);
  assert_eq!(deck.sets.len(), 1);
  let set = &deck.sets[0];
  assert_eq!(set.sid, 5);
  assert_eq!(set.kind, SetKind::NodeList);
  assert_eq!(set.solver, "MECH");
  assert_eq!(set.ids, vec![1, 2, 3, 4]);
  assert_eq!(set.count(), 4);
  assert!(set.ids.iter().all(|id| *id > 0));
}

#[test]
fn test_set_segment() {
  let input = format!(
    "*SET_SEGMENT\n{}\n{}\n{}\n",
    card10(&["3", "0.0", "0.0", "0.0", "0.0"]),
    card10(&["1", "2", "3", "4"]),
    card10(&["5", "6", "7", "8"])
  );
  let deck = parse(&input);
  assert_eq!(deck.sets.len(), 1);
  let set = &deck.sets[0];
  assert_eq!(set.kind, SetKind::Segment);
  assert_eq!(set.segments, vec![[1, 2, 3, 4], [5, 6, 7, 8]]);
  assert_eq!(set.count(), set.segments.len());
  assert!(set.ids.is_empty());
}

#[test]
fn test_set_title_line_is_discarded() {
  let input = format!(
    "*SET_NODE_LIST_TITLE\nwindshield nodes\n{}\n{}\n",
    card10(&["8", "0.0", "0.0", "0.0", "0.0"]),
    card10(&["21", "22"])
  );
  let deck = parse(&input);
  assert_eq!(deck.sets.len(), 1);
  assert_eq!(deck.sets[0].sid, 8);
  assert_eq!(deck.sets[0].ids, vec![21, 22]);
}

#[test]
fn test_set_with_header_only_still_commits() {
  // commit guard is the primary key alone; an empty set is a valid set
  let input = format!(
    "*SET_PART_LIST\n{}\n*NODE\n",
    card10(&["4", "0.0", "0.0", "0.0", "0.0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.sets.len(), 1);
  assert_eq!(deck.sets[0].sid, 4);
  assert_eq!(deck.sets[0].count(), 0);
}

#[test]
fn test_mat_elastic() {
  let epsilon = 1e-15_f64;
  let assert_near = |a: f64, b: f64| assert!((a - b).abs() < epsilon);
  let input = concat!(
    "*MAT_ELASTIC\n",
    "         1  7.85e-9     210.0       0.3       0.0       0.0       0.0       0.0\n"
  );
  let deck = parse(input);
  assert_eq!(deck.materials.len(), 1);
  let material = &deck.materials[0];
  assert_eq!(material.mid, 1);
  assert_eq!(material.kind, MaterialKind::Elastic);
  assert_near(material.ro, 7.85e-9);
  assert_eq!(material.e, 210.0);
  assert_eq!(material.pr, 0.3);
  assert_eq!(material.cards.len(), 1);
  assert_eq!(material.cards_parsed, material.cards.len());
  assert!(material.cards.iter().all(|card| card.len() == 8));
}

#[test]
fn test_mat_plastic_kinematic_projections() {
  let input = format!(
    "*MAT_003\n{}\n",
    card10(&["2", "7.85e-9", "210.0", "0.3", "0.235", "1.2", "1.05", "0.1"])
  );
  let deck = parse(&input);
  let material = &deck.materials[0];
  assert_eq!(material.kind, MaterialKind::PlasticKinematic);
  assert_eq!(material.sigy, 0.235);
  assert_eq!(material.etan, 1.2);
  assert_eq!(material.fail, 1.05);
  assert_eq!(material.tdel, 0.1);
}

#[test]
fn test_mat_rigid_card_two() {
  let input = format!(
    "*MAT_RIGID\n{}\n{}\n{}\n",
    card10(&["4", "7.85e-9", "210.0", "0.3", "0", "0", "0", "0"]),
    card10(&["1.0", "4.0", "7.0", "0.0", "0.0", "0.0", "0.0", "0.0"]),
    card10(&["0.0", "0", "0", "0", "0", "0", "0", "0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.materials.len(), 1);
  let material = &deck.materials[0];
  assert_eq!(material.kind, MaterialKind::Rigid);
  assert_eq!(material.cards_parsed, 3);
  assert_eq!(material.cmo, 1.0);
  assert_eq!(material.con1, 4.0);
  assert_eq!(material.con2, 7.0);
  // every raw card is retained alongside the projections
  assert_eq!(material.cards.len(), 3);
  assert_eq!(material.card_value(1, 2), 7.0);
  assert_eq!(material.card_value(9, 0), 0.0);
}

#[test]
fn test_mat_composite_damage_projections() {
  let cards = [
    card10(&["6", "1.8e-9", "130e3", "9e3", "9e3", "0.02", "0", "0"]),
    card10(&["5.2e3", "3.0e3", "5.2e3", "0", "0", "0", "0", "0"]),
    card10(&["800.0", "1200.0", "160.0", "40.0", "75.0", "0", "0", "0"]),
    card10(&["0", "0", "0", "0", "0", "0", "0", "0"]),
    card10(&["0", "0", "0", "0", "0", "0", "0", "0"]),
    card10(&["0", "0", "0", "0", "0", "0", "0", "0"]),
  ];
  let input = format!("*MAT_054\n{}\n", cards.join("\n"));
  let deck = parse(&input);
  assert_eq!(deck.materials.len(), 1);
  let material = &deck.materials[0];
  assert_eq!(material.kind, MaterialKind::CompositeDamage);
  assert_eq!(material.cards_parsed, 6);
  assert_eq!(material.e, 130e3);
  assert_eq!(material.eb, 9e3);
  assert_eq!(material.ec, 9e3);
  assert_eq!(material.pr, 0.02);
  assert_eq!(material.gab, 5.2e3);
  assert_eq!(material.gbc, 3.0e3);
  assert_eq!(material.gca, 5.2e3);
  assert_eq!(material.xc, 800.0);
  assert_eq!(material.xt, 1200.0);
  assert_eq!(material.yc, 160.0);
  assert_eq!(material.yt, 40.0);
  assert_eq!(material.sc, 75.0);
}

#[test]
fn test_mat_title_and_unknown_type() {
  let input = format!(
    "*MAT_ELASTIC_TITLE\nmild steel\n{}\n*MAT_JOHNSON_COOK\n{}\n{}\n",
    card10(&["1", "7.85e-9", "210.0", "0.3", "0", "0", "0", "0"]),
    card10(&["2", "2.7e-9", "70.0", "0.33", "0", "0", "0", "0"]),
    card10(&["0.2", "0.1", "0.05", "0", "0", "0", "0", "0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.materials.len(), 2);
  assert_eq!(deck.materials[0].title, "mild steel");
  assert_eq!(deck.materials[0].kind, MaterialKind::Elastic);
  // the unknown type keeps its name and every raw card, no projections
  let other = &deck.materials[1];
  assert_eq!(other.kind, MaterialKind::Other);
  assert_eq!(other.type_name, "JOHNSON_COOK");
  assert_eq!(other.mid, 2);
  assert_eq!(other.cards.len(), 2);
  assert_eq!(other.sigy, 0.0);
}

#[test]
fn test_contact_three_cards() {
  let input = concat!(
    "*CONTACT_AUTOMATIC_SURFACE_TO_SURFACE\n",
    "         1         2         0         0         0         0         0         0\n",
    "       0.2       0.1       0.0       0.0       0.0         0       0.0     1e+20\n",
    "       1.0       1.0       0.0       0.0       1.0       1.0       1.0       1.0\n"
  );
  let deck = parse(input);
  assert_eq!(deck.contacts.len(), 1);
  let contact = &deck.contacts[0];
  assert_eq!(contact.kind, ContactKind::AutomaticSurfaceToSurface);
  assert_eq!(contact.ssid, 1);
  assert_eq!(contact.msid, 2);
  assert_eq!(contact.fs, 0.2);
  assert_eq!(contact.fd, 0.1);
  assert_eq!(contact.dt, 1e20);
  assert_eq!(contact.sfs, 1.0);
  assert_eq!(contact.cards_parsed, 3);
}

#[test]
fn test_contact_title_prefix_and_partial_commit() {
  // a title card is consumed before card 1; a contact interrupted by EOF
  // keeps whatever cards it managed to read
  let input = format!(
    "*CONTACT_TIED_NODES_TO_SURFACE_TITLE\nspot glue\n{}\n{}\n",
    card10(&["3", "4", "0", "0", "0", "0", "0", "0"]),
    card10(&["0.3", "0.2", "0", "0", "0", "0", "0.0", "0.0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.contacts.len(), 1);
  let contact = &deck.contacts[0];
  assert_eq!(contact.kind, ContactKind::TiedNodesToSurface);
  assert_eq!(contact.ssid, 3);
  assert_eq!(contact.fs, 0.3);
  assert_eq!(contact.cards_parsed, 2);
  // the death time default survives since card 2 left it blank
  assert_eq!(contact.dt, 0.0);
}

#[test]
fn test_contact_malformed_field_warns_and_zeroes() {
  let input = format!(
    "*CONTACT_SURFACE_TO_SURFACE\n{}\n",
    card10(&["bad", "2", "0", "0", "0", "0", "0", "0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.contacts.len(), 1);
  assert_eq!(deck.contacts[0].ssid, 0);
  assert_eq!(deck.contacts[0].msid, 2);
  assert_eq!(deck.warnings.len(), 1);
  assert!(deck.warnings[0].contains("ssid"));
}

#[test]
fn test_section_shell() {
  let input = format!(
    "*SECTION_SHELL\n{}\n{}\n",
    card10(&["1", "2", "1.0", "5", "1.0", "0", "0", "1"]),
    card10(&["2.5", "2.5", "2.5", "2.5", "0.0", "0.0", "0.0", "0.0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.sections.len(), 1);
  let section = &deck.sections[0];
  assert_eq!(section.kind, SectionKind::Shell);
  assert_eq!(section.secid, 1);
  assert_eq!(section.elform, 2);
  assert_eq!(section.nip, 5);
  assert_eq!(section.thickness, [2.5, 2.5, 2.5, 2.5]);
}

#[test]
fn test_section_solid_single_card() {
  let input = format!(
    "*SECTION_SOLID_TITLE\nfoam block\n{}\n",
    card10(&["3", "1", "4"])
  );
  let deck = parse(&input);
  assert_eq!(deck.sections.len(), 1);
  let section = &deck.sections[0];
  assert_eq!(section.kind, SectionKind::Solid);
  assert_eq!(section.secid, 3);
  assert_eq!(section.elform, 1);
  assert_eq!(section.aet, 4);
}

#[test]
fn test_section_beam() {
  let input = format!(
    "*SECTION_BEAM\n{}\n{}\n",
    card10(&["4", "1", "1.0", "2", "0.0", "0.0"]),
    card10(&["10.0", "10.0", "8.0", "8.0", "0.0", "0.0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.sections.len(), 1);
  let section = &deck.sections[0];
  assert_eq!(section.kind, SectionKind::Beam);
  assert_eq!(section.qr_irid, 2);
  assert_eq!(section.ts, [10.0, 10.0]);
  assert_eq!(section.tt, [8.0, 8.0]);
}

#[test]
fn test_curve_with_title_and_points() {
  let input = format!(
    "*DEFINE_CURVE_TITLE\nloading ramp\n{}\n{}\n{}\n",
    card10(&["9", "0", "1.0", "2.0", "0.0", "0.0", "0"]),
    card20(&["0.0", "0.0"]),
    card20(&["1.0", "100.0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.curves.len(), 1);
  let curve = &deck.curves[0];
  assert_eq!(curve.lcid, 9);
  assert_eq!(curve.title, "loading ramp");
  assert_eq!(curve.sfa, 1.0);
  assert_eq!(curve.sfo, 2.0);
  assert_eq!(curve.num_points(), 2);
  assert_eq!(curve.point(1), (1.0, 100.0));
  assert_eq!(curve.point(99), (0.0, 0.0));
}

#[test]
fn test_includes_keep_their_flags() {
  let input = concat!(
    "*INCLUDE\nsub/model.k\n",
    "*INCLUDE_PATH\n/opt/decks\n",
    "*INCLUDE_PATH_RELATIVE\n../common\n"
  );
  let deck = parse(input);
  assert_eq!(deck.includes.len(), 3);
  assert_eq!(deck.includes[0].filepath, "sub/model.k");
  assert!(!deck.includes[0].is_path_only);
  assert!(deck.includes[1].is_path_only);
  assert!(!deck.includes[1].is_relative);
  assert!(deck.includes[2].is_path_only);
  assert!(deck.includes[2].is_relative);
}

#[test]
fn test_boundary_spc_both_layouts() {
  let input = format!(
    "*BOUNDARY_SPC_NODE\n{}\n{}\n*BOUNDARY_SPC_SET\n{}\n",
    card10(&["12", "4", "0"]),
    card10(&["13", "7", "0"]),
    card10(&["3", "0", "1", "1", "1", "0", "0", "1"])
  );
  let deck = parse(&input);
  assert_eq!(deck.boundary_spcs.len(), 3);
  assert_eq!(deck.boundary_spcs[0].kind, BoundaryKind::SpcNode);
  assert_eq!(deck.boundary_spcs[0].nid, 12);
  assert_eq!(deck.boundary_spcs[0].dof, 4);
  assert_eq!(deck.boundary_spcs[1].nid, 13);
  let set_spc = &deck.boundary_spcs[2];
  assert_eq!(set_spc.kind, BoundaryKind::SpcSet);
  assert_eq!(set_spc.nid, 3);
  assert_eq!(set_spc.dofx, 1);
  assert_eq!(set_spc.dofrz, 1);
  assert_eq!(set_spc.dofrx, 0);
}

#[test]
fn test_boundary_prescribed_motion() {
  let input = format!(
    "*BOUNDARY_PRESCRIBED_MOTION_SET\n{}\n",
    card10(&["2", "1", "2", "9", "1.5", "0", "0.08", "0.001"])
  );
  let deck = parse(&input);
  assert_eq!(deck.boundary_motions.len(), 1);
  let motion = &deck.boundary_motions[0];
  assert_eq!(motion.kind, BoundaryKind::PrescribedMotionSet);
  assert_eq!(motion.nid, 2);
  assert_eq!(motion.vad, 2);
  assert_eq!(motion.lcid, 9);
  assert_eq!(motion.sf, 1.5);
  assert_eq!(motion.death, 0.08);
  assert_eq!(motion.birth, 0.001);
}

#[test]
fn test_loads() {
  let input = format!(
    "*LOAD_NODE_SET\n{}\n*LOAD_SEGMENT\n{}\n*LOAD_BODY_Z\n{}\n",
    card10(&["4", "3", "2", "-1.0", "0", "0", "0", "0"]),
    card10(&["7", "2.0", "0.0", "1", "2", "3", "4"]),
    card10(&["3", "9810.0", "0", "0.0", "0.0", "0.0", "0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.load_nodes.len(), 1);
  assert!(deck.load_nodes[0].is_set);
  assert_eq!(deck.load_nodes[0].dof, 3);
  assert_eq!(deck.load_nodes[0].sf, -1.0);
  assert_eq!(deck.load_segments.len(), 1);
  assert_eq!(deck.load_segments[0].lcid, 7);
  assert_eq!(deck.load_segments[0].n4, 4);
  assert_eq!(deck.load_bodies.len(), 1);
  assert_eq!(deck.load_bodies[0].direction, Some(Axis::Z));
  assert_eq!(deck.load_bodies[0].sf, 9810.0);
}

#[test]
fn test_control_blocks() {
  let input = format!(
    "*CONTROL_TERMINATION\n{}\n*CONTROL_TIMESTEP\n{}\n\
     *CONTROL_HOURGLASS\n{}\n*CONTROL_BULK_VISCOSITY\n{}\n",
    card10(&["0.12", "0", "0.0", "0.0", "0.0", "0"]),
    card10(&["0.0", "0.8", "0", "0.0", "-1e-6", "0", "0", "1"]),
    card10(&["4", "0.05"]),
    card10(&["1.2", "0.05", "-1"])
  );
  let deck = parse(&input);
  assert_eq!(deck.control_terminations.len(), 1);
  assert_eq!(deck.control_terminations[0].endtim, 0.12);
  assert_eq!(deck.control_timesteps.len(), 1);
  assert_eq!(deck.control_timesteps[0].tssfac, 0.8);
  assert_eq!(deck.control_timesteps[0].dt2ms, -1e-6);
  assert_eq!(deck.control_timesteps[0].ms1st, 1);
  assert_eq!(deck.control_hourglasses.len(), 1);
  assert_eq!(deck.control_hourglasses[0].ihq, 4);
  assert_eq!(deck.control_hourglasses[0].qh, 0.05);
  assert_eq!(deck.control_bulk_viscosities.len(), 1);
  assert_eq!(deck.control_bulk_viscosities[0].ibq, -1);
}

#[test]
fn test_database_requests() {
  let input = format!(
    "*DATABASE_BINARY_D3PLOT\n{}\n*DATABASE_GLSTAT\n{}\n\
     *DATABASE_CROSS_SECTION_SET\n{}\n",
    card10(&["0.001", "0", "0", "0", "0"]),
    card10(&["1e-5", "0", "1", "0", "0"]),
    card10(&["1", "2", "3", "0", "0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.database_binaries.len(), 1);
  assert_eq!(deck.database_binaries[0].kind, DatabaseKind::BinaryD3plot);
  assert_eq!(deck.database_binaries[0].dt, 0.001);
  assert_eq!(deck.database_asciis.len(), 1);
  assert_eq!(deck.database_asciis[0].kind, DatabaseKind::Glstat);
  assert_eq!(deck.database_asciis[0].binary, 1);
  assert_eq!(deck.database_cross_sections.len(), 1);
  assert_eq!(deck.database_cross_sections[0].csid, 1);
  assert_eq!(deck.database_cross_sections[0].psid, 2);
  assert_eq!(deck.database_cross_sections[0].ssid, 3);
}

#[test]
fn test_database_history_lists_commit_on_boundary() {
  let input = format!(
    "*DATABASE_HISTORY_NODE\n{}\n{}\n*DATABASE_HISTORY_SHELL\n{}\n*NODE\n",
    card10(&["1", "2", "3", "4", "5", "6", "7", "8"]),
    card10(&["9", "10"]),
    card10(&["101", "102"])
  );
  let deck = parse(&input);
  assert_eq!(deck.database_history_nodes.len(), 1);
  assert_eq!(
    deck.database_history_nodes[0].node_ids,
    vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
  );
  assert_eq!(deck.database_history_elements.len(), 1);
  assert_eq!(deck.database_history_elements[0].kind, ElementKind::Shell);
  assert_eq!(deck.database_history_elements[0].element_ids, vec![101, 102]);
}

#[test]
fn test_initial_velocity_layouts() {
  let input = format!(
    "*INITIAL_VELOCITY\n{}\n*INITIAL_VELOCITY_GENERATION\n{}\n",
    card10(&["0", "0", "0", "0", "5.0", "0.0", "0.0", "0.5"]),
    card10(&["2", "3.5", "0.0", "0.0", "0.0", "1.0", "2.0", "3.0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.initial_velocities.len(), 2);
  let plain = &deck.initial_velocities[0];
  assert_eq!(plain.kind, InitialVelocityKind::Node);
  assert_eq!(plain.vx, 5.0);
  assert_eq!(plain.vxr, 0.5);
  assert_eq!(plain.vyr, 0.0);
  let generated = &deck.initial_velocities[1];
  assert_eq!(generated.kind, InitialVelocityKind::Generation);
  assert_eq!(generated.nsid, 2);
  assert_eq!(generated.omega, 3.5);
  assert_eq!(generated.xc, 1.0);
  assert_eq!(generated.zc, 3.0);
}

#[test]
fn test_constrained_records() {
  let input = format!(
    "*CONSTRAINED_NODAL_RIGID_BODY\n{}\n\
     *CONSTRAINED_NODAL_RIGID_BODY_INERTIA\n{}\n\
     *CONSTRAINED_EXTRA_NODES_SET\n{}\n\
     *CONSTRAINED_JOINT_SPHERICAL\n{}\n\
     *CONSTRAINED_SPOTWELD\n{}\n",
    card10(&["2", "0", "5", "0", "1", "0", "0"]),
    card10(&["3", "0", "6", "0"]),
    card10(&["2", "9"]),
    card10(&["11", "12", "0", "0", "0", "0", "1", "0"]),
    card10(&["21", "22", "5.0", "3.0", "2", "2", "1e20"])
  );
  let deck = parse(&input);
  assert_eq!(deck.constrained_nodal_rigid_bodies.len(), 2);
  assert_eq!(deck.constrained_nodal_rigid_bodies[0].pid, 2);
  assert_eq!(deck.constrained_nodal_rigid_bodies[0].nsid, 5);
  assert_eq!(deck.constrained_nodal_rigid_bodies[0].iprt, 1);
  assert!(!deck.constrained_nodal_rigid_bodies[0].has_inertia);
  assert!(deck.constrained_nodal_rigid_bodies[1].has_inertia);
  assert_eq!(deck.constrained_nodal_rigid_bodies[1].nsid, 6);
  assert_eq!(deck.constrained_extra_nodes.len(), 1);
  assert!(deck.constrained_extra_nodes[0].is_set);
  assert_eq!(deck.constrained_extra_nodes[0].nsid, 9);
  assert_eq!(deck.constrained_joints.len(), 1);
  assert_eq!(deck.constrained_joints[0].kind, JointKind::Spherical);
  assert_eq!(deck.constrained_joints[0].n1, 11);
  assert_eq!(deck.constrained_joints[0].rps, 1);
  assert_eq!(deck.constrained_joints[0].lcid, 0);
  assert_eq!(deck.constrained_spotwelds.len(), 1);
  assert_eq!(deck.constrained_spotwelds[0].sn, 5.0);
  assert_eq!(deck.constrained_spotwelds[0].tf, 1e20);
}

#[test]
fn test_constrained_extra_nodes_node_variant_accumulates() {
  let input = format!(
    "*CONSTRAINED_EXTRA_NODES_NODE\n{}\n{}\n{}\n",
    card10(&["5"]),
    card10(&["31", "32", "33", "0", "0", "0", "0", "0"]),
    card10(&["34"])
  );
  let deck = parse(&input);
  assert_eq!(deck.constrained_extra_nodes.len(), 1);
  let extra = &deck.constrained_extra_nodes[0];
  assert!(!extra.is_set);
  assert_eq!(extra.pid, 5);
  assert_eq!(extra.node_ids, vec![31, 32, 33, 34]);
}

#[test]
fn test_unknown_keyword_commits_in_flight_silently() {
  let input = format!(
    "*SET_NODE_LIST\n{}\n{}\n*VENDOR_SPECIFIC_THING\n{}\n",
    card10(&["9", "0.0", "0.0", "0.0", "0.0"]),
    card10(&["1", "2"]),
    card10(&["3", "4"])
  );
  let deck = parse(&input);
  // the set commits at the unknown keyword; the data after it is ignored
  assert_eq!(deck.sets.len(), 1);
  assert_eq!(deck.sets[0].ids, vec![1, 2]);
  assert!(deck.warnings.is_empty());
}

#[test]
fn test_comments_and_blanks_anywhere() {
  let input = concat!(
    "$ header comment\n",
    "*NODE\n",
    "$#   nid               x               y               z\n",
    "       1             1.0             2.0             3.0\n",
    "\n",
    "       2             4.0             5.0             6.0\n",
    "*END\n"
  );
  let deck = parse(input);
  assert_eq!(deck.nodes.len(), 2);
  assert_eq!(deck.nodes[1].x, 4.0);
  assert_eq!(deck.total_lines, 7);
}

#[test]
fn test_indexer_idempotent_and_last_wins() {
  let input = format!(
    "*NODE\n{}\n{}\n{}\n",
    card8(&["7", "1.0", "1.0", "1.0"]),
    card8(&["8", "2.0", "2.0", "2.0"]),
    card8(&["7", "3.0", "3.0", "3.0"])
  );
  let mut deck = parse(&input);
  // both occurrences of nid 7 survive in source order
  assert_eq!(deck.nodes.len(), 3);
  // the index resolves to the last one
  assert_eq!(deck.node_index[&7], 2);
  assert_eq!(deck.node(7).unwrap().x, 3.0);
  assert_eq!(deck.node(8).unwrap().x, 2.0);
  assert!(deck.node(9).is_none());
  // rebuilding changes nothing
  let before = deck.clone();
  deck.build_indices();
  assert_eq!(deck.node_index, before.node_index);
  assert_eq!(deck.part_index, before.part_index);
  assert_eq!(deck.curve_index, before.curve_index);
}

#[test]
fn test_index_lookups_per_family() {
  let input = format!(
    "*PART\nfloor\n{}\n*SECTION_SOLID\n{}\n*DEFINE_CURVE\n{}\n",
    card10(&["3", "1", "2", "0", "0", "0", "0", "0"]),
    card10(&["1", "1", "0"]),
    card10(&["5", "0", "1.0", "1.0", "0.0", "0.0", "0"])
  );
  let deck = parse(&input);
  assert_eq!(deck.part(3).unwrap().name, "floor");
  assert_eq!(deck.section(1).unwrap().elform, 1);
  assert_eq!(deck.curve(5).unwrap().sfa, 1.0);
  assert!(deck.material(1).is_none());
}

#[test]
fn test_disabling_a_family_removes_only_it() {
  let input = format!(
    "*NODE\n{}\n*PART\nbumper\n{}\n*ELEMENT_SHELL\n{}\n*MAT_ELASTIC\n{}\n",
    card8(&["1", "0.0", "0.0", "0.0"]),
    card10(&["1", "1", "1", "0", "0", "0", "0", "0"]),
    card8(&["1", "1", "1", "2", "3", "4"]),
    card10(&["1", "7.85e-9", "210.0", "0.3", "0", "0", "0", "0"])
  );
  let full = parse(&input);
  let config = ParserConfig { nodes: false, ..Default::default() };
  let mut parser = OnePassParser::with_config(config);
  let partial = parser.parse_string(&input);
  assert!(partial.nodes.is_empty());
  assert!(!full.nodes.is_empty());
  assert_eq!(partial.parts, full.parts);
  assert_eq!(partial.elements, full.elements);
  assert_eq!(partial.materials, full.materials);
  assert_eq!(partial.total_lines, full.total_lines);
}

#[test]
fn test_disabling_the_index() {
  let input = format!("*NODE\n{}\n", card8(&["1", "0.0", "0.0", "0.0"]));
  let mut parser = OnePassParser::new();
  parser.config_mut().build_index = false;
  let deck = parser.parse_string(&input);
  assert_eq!(deck.nodes.len(), 1);
  assert!(deck.node_index.is_empty());
}

#[test]
fn test_concatenation_preserves_order() {
  let fragment_a = format!(
    "*NODE\n{}\n*MAT_ELASTIC\n{}\n",
    card8(&["1", "1.0", "0.0", "0.0"]),
    card10(&["1", "7.85e-9", "210.0", "0.3", "0", "0", "0", "0"])
  );
  let fragment_b = format!(
    "*NODE\n{}\n*SET_NODE_LIST\n{}\n{}\n",
    card8(&["2", "2.0", "0.0", "0.0"]),
    card10(&["1", "0.0", "0.0", "0.0", "0.0"]),
    card10(&["1", "2"])
  );
  let deck_a = parse(&fragment_a);
  let deck_b = parse(&fragment_b);
  let deck_ab = parse(&format!("{}{}", fragment_a, fragment_b));
  assert_eq!(
    deck_ab.nodes,
    [deck_a.nodes.clone(), deck_b.nodes.clone()].concat()
  );
  assert_eq!(
    deck_ab.materials,
    [deck_a.materials.clone(), deck_b.materials.clone()].concat()
  );
  assert_eq!(
    deck_ab.sets,
    [deck_a.sets.clone(), deck_b.sets.clone()].concat()
  );
}

#[test]
fn test_parser_instance_is_reusable() {
  let mut parser = OnePassParser::new();
  let first =
    parser.parse_string(&format!("*NODE\n{}\n", card8(&["1", "0.0"])));
  let second = parser.parse_string("");
  assert_eq!(first.nodes.len(), 1);
  assert!(second.nodes.is_empty());
  assert_eq!(second.total_lines, 0);
}

#[test]
fn test_parse_file_open_failure() {
  let mut parser = OnePassParser::new();
  let deck = parser.parse_file("/definitely/not/a/real/path.k");
  assert_eq!(deck.errors.len(), 1);
  assert!(deck.errors[0].contains("Failed to open file"));
  assert!(deck.nodes.is_empty());
  assert!(deck.warnings.is_empty());
}

#[test]
fn test_parse_bufread_handles_crlf() {
  let input = format!("*NODE\r\n{}\r\n", card8(&["4", "1.5", "0.0", "0.0"]));
  let mut parser = OnePassParser::new();
  let deck = parser.parse_bufread(input.as_bytes()).unwrap();
  assert_eq!(deck.nodes.len(), 1);
  assert_eq!(deck.nodes[0].nid, 4);
  assert_eq!(deck.nodes[0].x, 1.5);
}

#[test]
fn test_static_decode_utilities() {
  let node = OnePassParser::decode_node_line(
    "       3             1.0             2.0             3.0       1       2"
  );
  assert_eq!(node.nid, 3);
  assert_eq!(node.tc, 1);
  assert_eq!(node.rc, 2);
  let part = OnePassParser::decode_part_lines(
    "hood inner",
    &card10(&["9", "1", "2", "0", "0", "0", "0", "0"])
  );
  assert_eq!(part.name, "hood inner");
  assert_eq!(part.pid, 9);
  let element = OnePassParser::decode_element_line(
    &card8(&["5", "2", "1", "2", "3", "0", "0", "0", "0", "0"]),
    ElementKind::Shell
  );
  assert_eq!(element.eid, 5);
  assert_eq!(element.node_count, 3);
  // a short header keeps the default solver token
  let set = OnePassParser::decode_set_header(
    &card10(&["6", "0.0", "0.0"]),
    SetKind::Shell
  );
  assert_eq!(set.sid, 6);
  assert_eq!(set.solver, "MECH");
  let mut set = Set::new(SetKind::NodeList);
  OnePassParser::decode_set_ids(&card10(&["4", "0", "5"]), &mut set);
  assert_eq!(set.ids, vec![4, 5]);
  let mut seg_set = Set::new(SetKind::Segment);
  OnePassParser::decode_segment_line(
    &card10(&["1", "2", "3", "4"]),
    &mut seg_set
  );
  assert_eq!(seg_set.count(), 1);
}
