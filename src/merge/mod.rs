//! Merge module - Deep-merging an override tree into a base tree.
//!
//! Override values win wherever they are present; sequence elements that
//! are mappings with a `name` field merge by that identity.

mod overlay;


pub use overlay::*;
