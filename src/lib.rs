//! # yamlsort
//!
//! Re-serializes parsed YAML/JSON documents into a canonical,
//! deterministically key-ordered YAML text form, making documents
//! diff-friendly and reviewable. An optional "override" document can be
//! deep-merged into each input document before emission.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of decoded YAML/JSON documents
//! - [`sort`] - Priority-aware natural key ordering for mapping emission
//! - [`fieldpath`] - Textual value paths and skip/select filtering
//! - [`emit`] - The canonical marshaler and string quoting rules
//! - [`merge`] - Deep-merging an override tree into a base tree
//! - [`document`] - Multi-document splitting and the section pipeline
//! - [`config`] / [`error`] - Run configuration and the error taxonomy

pub mod config;
pub mod document;
pub mod emit;
pub mod error;
pub mod fieldpath;
pub mod merge;
pub mod sort;
pub mod value;

pub use config::{Config, OutputMode};
pub use document::{decode, process_input, split_documents, Section};
pub use emit::{escape_string, Marshaler};
pub use error::Error;
pub use fieldpath::PathFilter;
pub use merge::{merge, MergeError};
pub use sort::KeyOrder;
pub use value::{Map, Value};
