//! Fieldpath module - Textual paths to values and include/exclude filtering.
//!
//! A value's path is built while walking from the root: `.key` for mapping
//! descent, `[i]` for plain sequence descent, and `[name=value]` for descent
//! into a sequence element that is a mapping with a string `name` field.
//! Paths exist only for filtering, never for identity.

mod filter;
mod path;

pub use filter::*;
pub use path::*;
