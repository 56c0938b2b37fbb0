//! This module implements the two lowest layers of the parser: the line
//! classifier and the fixed-width column decoders. Everything here is
//! deliberately lenient -- K-files in the wild truncate trailing zero
//! columns, pad with whatever, and generally assume the reader shrugs a lot.

use serde::{Deserialize, Serialize};

/// The four things a raw K-file line can be, going by its first non-space
/// character: `*` starts a keyword, `$` a comment, nothing at all is a blank
/// line, and anything else is data for whatever handler is active.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LineKind {
  /// The line introduces a new keyword block.
  Keyword,
  /// The line is a comment and carries no information.
  Comment,
  /// The line is empty or all-whitespace.
  Blank,
  /// The line is a data card for the active keyword.
  Data
}

/// Classifies a raw line by its first non-space character.
pub fn classify(line: &str) -> LineKind {
  for b in line.bytes() {
    if b.is_ascii_whitespace() {
      continue;
    }
    return match b {
      b'*' => LineKind::Keyword,
      b'$' => LineKind::Comment,
      _ => LineKind::Data
    };
  }
  return LineKind::Blank;
}

/// Returns the trimmed text content of the column `[start, start+len)`,
/// clipped to the actual line length. A start beyond the end of the line
/// yields the empty string -- short lines are never an error.
pub fn read_text(line: &str, start: usize, len: usize) -> &str {
  let bytes = line.as_bytes();
  if start >= bytes.len() {
    return "";
  }
  let end = bytes.len().min(start.saturating_add(len));
  // a column boundary can, in principle, split a multi-byte character; such
  // a field can't be numeric anyway, so it reads as empty
  return core::str::from_utf8(&bytes[start..end]).map_or("", str::trim);
}

/// Returns the first whitespace-delimited token of a column. Decks with
/// loose alignment let a value's neighbour bleed into the tail of the
/// window; only the leading token is the column's own.
fn token(line: &str, start: usize, len: usize) -> &str {
  let field = read_text(line, start, len);
  return field.split_ascii_whitespace().next().unwrap_or(field);
}

/// Decodes a signed 32-bit integer column. `Ok(0)` for a blank field; the
/// offending token comes back in `Err` if the field is non-empty but its
/// leading token does not parse as a whole.
pub fn try_int(line: &str, start: usize, len: usize) -> Result<i32, &str> {
  let tok = token(line, start, len);
  if tok.is_empty() {
    return Ok(0);
  }
  return tok.parse::<i32>().map_err(|_| tok);
}

/// Decodes a 64-bit float column, same contract as [`try_int`]. Scientific
/// notation (`1e+20`, `-7.85e-9`, exponent sign optional) is accepted.
pub fn try_float(line: &str, start: usize, len: usize) -> Result<f64, &str> {
  let tok = token(line, start, len);
  if tok.is_empty() {
    return Ok(0.0);
  }
  return tok.parse::<f64>().map_err(|_| tok);
}

/// Lenient integer read: blank or malformed fields are 0.
pub fn read_int(line: &str, start: usize, len: usize) -> i32 {
  return try_int(line, start, len).unwrap_or(0);
}

/// Lenient float read: blank or malformed fields are 0.0.
pub fn read_float(line: &str, start: usize, len: usize) -> f64 {
  return try_float(line, start, len).unwrap_or(0.0);
}
