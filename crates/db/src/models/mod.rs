//! Record structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` record struct as stored and returned by the API
//! - A `Deserialize` create DTO, validated into a typed insert struct
//! - Update DTOs and list parameters where the record supports them

pub mod experiment;
pub mod idea;
pub mod outcome;
pub mod reflection;
