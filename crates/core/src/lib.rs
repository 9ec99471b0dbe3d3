//! Domain layer for the PromptVault backend.
//!
//! Pure types, error taxonomy, boundary validation rules, and the heuristic
//! tag-suggestion collaborator. No I/O and no internal dependencies, so both
//! the persistence and API crates can depend on it freely.

pub mod error;
pub mod roles;
pub mod tagging;
pub mod types;
pub mod validate;
