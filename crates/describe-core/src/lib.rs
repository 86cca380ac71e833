//! Describe Core - canonical descriptions of runtime values and their types
//!
//! This crate provides:
//! - A closed descriptor model for types ([`TypeDesc`]) and payloads ([`Data`])
//! - Type and value describers producing deterministic, literal-like text
//! - An identity registry labelling callables in first-seen order
//! - The [`Describe`] capture trait with impls for std types, plus macros for
//!   user structs and named newtypes
//! - A [`Comparator`] that compares by description and reports mismatches
//!   through an injected [`DiffRenderer`]

pub mod capture;
pub mod compare;
pub mod config;
pub mod describe;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod registry;

// Re-export commonly used types
pub use capture::{Capture, Describe};
pub use compare::{Comparator, Comparison, DiffRenderer};
pub use config::{parse_config_file, parse_config_str, CyclePolicy, DescribeConfig};
pub use describe::values::CYCLE_MARKER;
pub use describe::{describe_type, Describer};
pub use errors::{DescribeError, ErrorKind, Result};
pub use model::{Data, Field, Kind, Shape, TypeDesc, Value, Visibility};
pub use registry::IdentityRegistry;
