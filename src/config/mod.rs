// src/config/mod.rs

//! Task file loading and validation.
//!
//! - Define the TOML/JSON-backed data model (`model.rs`).
//! - Load a task file from disk (`loader.rs`).
//! - Validate field-level syntax such as deadlines (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigSection, RawDeadline, RawTask, RawTaskFile, TaskFile};
pub use validate::parse_deadline;
