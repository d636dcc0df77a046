//! Value module - In-memory representation of decoded YAML/JSON documents.
//!
//! A document tree is built once by decoding input text, optionally merged
//! with an override tree, walked once by the emitter, and discarded.

mod value;

pub use value::*;
