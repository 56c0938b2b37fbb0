//! Dumps summary information on a K-file: entity counts per family, parse
//! statistics, and whatever warnings came up.

#![allow(clippy::needless_return)] // explicit returns, always

use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use kfile::prelude::*;
use log::{error, info, warn, LevelFilter};

/// The arguments to the summary tool.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
  /// Skip building the ID lookup indices.
  #[arg(short = 'I', long)]
  no_index: bool,
  /// Output extra/debug info while parsing.
  #[arg(short, long)]
  verbose: bool,
  /// File path (set to "-" to read from standard input).
  file: PathBuf
}

const INDENT: &str = "  ";

fn main() -> io::Result<()> {
  // init cli stuff
  let args = Cli::parse();
  let log_level = if args.verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };
  env_logger::builder().filter_level(log_level).init();
  let mut parser = OnePassParser::new();
  parser.config_mut().build_index = !args.no_index;
  // parse the file
  let deck: Deck = if args.file.as_os_str().eq_ignore_ascii_case("-") {
    parser.parse_bufread(BufReader::new(io::stdin()))?
  } else if args.file.is_file() {
    if let Some(bn) = args.file.file_name().and_then(|s| s.to_str()) {
      info!("Parsing {}...", bn);
    }
    parser.parse_file(&args.file)
  } else {
    error!("Provided path either does not exist or is not a file!");
    std::process::exit(1);
  };
  if !deck.errors.is_empty() {
    for msg in deck.errors.iter() {
      error!("{}", msg);
    }
    std::process::exit(1);
  }
  info!(
    "Done: {} lines in {} ms.", deck.total_lines, deck.parse_time_ms
  );
  // entity counts, in the order they tend to matter
  let counts: &[(&str, usize)] = &[
    ("nodes", deck.nodes.len()),
    ("parts", deck.parts.len()),
    ("elements", deck.elements.len()),
    ("sets", deck.sets.len()),
    ("sections", deck.sections.len()),
    ("contacts", deck.contacts.len()),
    ("materials", deck.materials.len()),
    ("curves", deck.curves.len()),
    ("includes", deck.includes.len()),
    ("boundary SPCs", deck.boundary_spcs.len()),
    ("prescribed motions", deck.boundary_motions.len()),
    ("node loads", deck.load_nodes.len()),
    ("segment loads", deck.load_segments.len()),
    ("body loads", deck.load_bodies.len()),
    (
      "control blocks",
      deck.control_terminations.len()
        + deck.control_timesteps.len()
        + deck.control_energies.len()
        + deck.control_outputs.len()
        + deck.control_shells.len()
        + deck.control_contacts.len()
        + deck.control_hourglasses.len()
        + deck.control_bulk_viscosities.len()
    ),
    (
      "database requests",
      deck.database_binaries.len()
        + deck.database_asciis.len()
        + deck.database_history_nodes.len()
        + deck.database_history_elements.len()
        + deck.database_cross_sections.len()
    ),
    ("initial velocities", deck.initial_velocities.len()),
    (
      "constraints",
      deck.constrained_nodal_rigid_bodies.len()
        + deck.constrained_extra_nodes.len()
        + deck.constrained_joints.len()
        + deck.constrained_spotwelds.len()
    ),
  ];
  info!("Entities found:");
  for (name, count) in counts {
    if *count > 0 {
      info!("{}- {}: {}", INDENT, name, count);
    }
  }
  if counts.iter().all(|(_, c)| *c == 0) {
    info!("{}(nothing recognized)", INDENT);
  }
  // warnings, if any
  if deck.warnings.is_empty() {
    info!("No warnings.");
  } else {
    warn!("The parse produced {} warning(s):", deck.warnings.len());
    for msg in deck.warnings.iter() {
      warn!("{}- {}", INDENT, msg);
    }
  }
  return Ok(());
}
