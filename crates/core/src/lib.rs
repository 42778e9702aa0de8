//! Domain logic for EchoRoom: error types, field validation, and the idea
//! lifecycle guard. No storage or HTTP dependencies.

pub mod error;
pub mod idea;
pub mod listing;
pub mod outcome;
pub mod types;
pub mod validation;
