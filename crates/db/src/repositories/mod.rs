//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&Store` as the first argument.

pub mod experiment_repo;
pub mod idea_repo;
pub mod outcome_repo;
pub mod reflection_repo;

pub use experiment_repo::ExperimentRepo;
pub use idea_repo::IdeaRepo;
pub use outcome_repo::OutcomeRepo;
pub use reflection_repo::ReflectionRepo;
