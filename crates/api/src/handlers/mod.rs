pub mod experiments;
pub mod ideas;
pub mod outcomes;
pub mod reflections;
