//! Document module - Multi-document splitting and the per-section pipeline.
//!
//! Input text is split on `---` separator lines; each section is decoded,
//! optionally merged with the override tree, and emitted in the configured
//! output mode, strictly in order. The first error aborts the run.

mod processor;
mod splitter;

pub use processor::*;
pub use splitter::*;
