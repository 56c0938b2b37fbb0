//! This module defines `*INCLUDE` references. The parser records them; it
//! does not resolve or read the referenced files.

use serde::{Deserialize, Serialize};

/// An include reference: the free-text path from the card after
/// `*INCLUDE`, `*INCLUDE_PATH`, or `*INCLUDE_PATH_RELATIVE`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Include {
  /// The referenced path, trimmed.
  pub filepath: String,
  /// Whether this is a search-path entry (`*INCLUDE_PATH*`) rather than a
  /// file inclusion.
  pub is_path_only: bool,
  /// Whether the path is relative (`*INCLUDE_PATH_RELATIVE`).
  pub is_relative: bool
}
