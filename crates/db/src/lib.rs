//! In-memory storage for EchoRoom records.
//!
//! A single [`Store`] instance owns every table. It is created once at
//! startup, wrapped in `Arc`, and handed to the repositories explicitly;
//! contents are lost on restart.

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::{Mutex, RwLock};

use echoroom_core::types::EntityId;

pub mod models;
pub mod repositories;

use models::experiment::Experiment;
use models::idea::Idea;
use models::outcome::Outcome;
use models::reflection::Reflection;

/// Shared handle to the store, cloned into application state.
pub type DbPool = Arc<Store>;

/// Every table, keyed by record id and kept in insertion order.
///
/// Ideas are mutable and each sits behind its own mutex so that mutations
/// of one idea are serialized while different ideas proceed in parallel.
/// The other records are immutable after insert.
#[derive(Default)]
pub struct Store {
    pub(crate) ideas: RwLock<IndexMap<EntityId, Arc<Mutex<Idea>>>>,
    pub(crate) experiments: RwLock<IndexMap<EntityId, Experiment>>,
    pub(crate) outcomes: RwLock<IndexMap<EntityId, Outcome>>,
    pub(crate) reflections: RwLock<IndexMap<EntityId, Reflection>>,
}

/// Create an empty store.
pub fn create_pool() -> DbPool {
    Arc::new(Store::default())
}

/// Generate a fresh, time-ordered record identifier.
pub(crate) fn new_id() -> EntityId {
    uuid::Uuid::now_v7().to_string()
}
