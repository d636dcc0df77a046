//! Sort module - Deterministic key ordering for mapping emission.
//!
//! Ordering is priority-list first, then natural (numeric-aware) order.

mod keys;
mod natural;

pub use keys::*;
pub use natural::*;
