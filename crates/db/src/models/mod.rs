//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches
//! - Safe `Serialize` projections for API output where the raw entity
//!   carries data that must never leave the server
//!
//! API-facing serialization is camelCase throughout -- the JSON field names
//! are part of the client compatibility contract.

pub mod prompt;
pub mod user;
