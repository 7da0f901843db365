//! State slice types
//!
//! Each REST resource is backed by one slice of the global state: a list
//! slice for collections, a single-entity slice for models. Both pair the
//! data with a loading flag so drivers can render fetch progress.

use serde::{Deserialize, Serialize};

/// State slice backing a collection of entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState<T> {
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// The entities, replaced wholesale on every update.
    pub items: Vec<T>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            items: Vec::new(),
        }
    }
}

/// State slice backing a single entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelState<T> {
    /// Whether a fetch or mutation is in flight.
    pub loading: bool,
    /// The entity, once one has been loaded.
    pub model: Option<T>,
}

impl<T> Default for ModelState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            model: None,
        }
    }
}
