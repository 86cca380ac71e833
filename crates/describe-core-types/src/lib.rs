//! Core types shared across the describe crates
//!
//! This crate provides foundational types used by the describer, the
//! comparator and the diff renderer:
//!
//! - **Schema constants**: Canonical log field keys and event names
//! - **Sensitive data**: `Sensitive<T>` marker whose contents are never rendered

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
