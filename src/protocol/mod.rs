//! Position notation.
//!
//! Parsing and serialization of the single-line position notation exchanged
//! with storage and front-end layers.

pub mod notation;

pub use notation::{encode_notation, parse_notation, NotationError};
