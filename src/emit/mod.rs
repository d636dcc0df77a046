//! Emit module - Canonical YAML text emission.
//!
//! The marshaler walks a document tree depth-first and writes it with
//! deterministic key order, 2-space indentation, and predictable quoting.

mod escape;
mod marshal;


pub use escape::*;
pub use marshal::*;
