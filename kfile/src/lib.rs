//! This library implements types and functions to parse LS-DYNA keyword
//! files (also known as K-files or input decks) into an in-memory structured
//! representation suitable for inspection, transformation, or downstream
//! serialization.
//!
//! A K-file is a linear stream of sections, each introduced by a keyword line
//! beginning with `*` and followed by fixed-width data "cards" whose column
//! layout depends on the keyword and its optional suffixes. The parser is
//! one-pass, single-thread, and tolerant: blank fields default to zero, short
//! lines are fine, comments and blank lines may appear anywhere, and unknown
//! keywords are skipped without fuss.
//!
//! The usual entry point is [`parser::OnePassParser`]; the output aggregate
//! is a [`deck::Deck`].

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::needless_return)] // explicit returns, always

pub mod columns;
pub mod deck;
pub mod entities;
pub mod geometry;
pub mod keywords;
pub mod parser;

/// Prelude module; includes commonly-used public exports.
pub mod prelude {
  pub use crate::columns::*;
  pub use crate::deck::*;
  pub use crate::entities::boundary::*;
  pub use crate::entities::constrained::*;
  pub use crate::entities::contact::*;
  pub use crate::entities::control::*;
  pub use crate::entities::curve::*;
  pub use crate::entities::database::*;
  pub use crate::entities::include::*;
  pub use crate::entities::initial::*;
  pub use crate::entities::load::*;
  pub use crate::entities::material::*;
  pub use crate::entities::mesh::*;
  pub use crate::entities::section::*;
  pub use crate::entities::sets::*;
  pub use crate::geometry::*;
  pub use crate::keywords::*;
  pub use crate::parser::*;
}

#[cfg(test)]
mod tests;
