//! Application model handed to downstream generators.
//!
//! # Responsibility
//! - Define the forms/views/documents shape produced by one parse.
//! - Keep wire names stable (`snake_case`) for external consumers.
//!
//! # Invariants
//! - List-valued fields preserve insertion order; consumers index by position.
//! - A model returned by the pipeline always has at least one form and view.

pub mod application;
