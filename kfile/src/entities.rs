//! This module collects the pure data types for every entity family the
//! parser can produce. Polymorphism is expressed as tagged variants; fields
//! a variant does not use sit at their numeric-zero or empty-text defaults.
//! Cross-entity references (element to part, part to section and material,
//! contact to set, load to curve) are plain integer keys -- resolution goes
//! through the index maps on the deck, never through owning references.

pub mod boundary;
pub mod constrained;
pub mod contact;
pub mod control;
pub mod curve;
pub mod database;
pub mod include;
pub mod initial;
pub mod load;
pub mod material;
pub mod mesh;
pub mod section;
pub mod sets;
