mod availability;
mod error;
mod mutations;
mod queries;
mod store;
mod validate;

pub use availability::{find_free_room, fully_occupied_dates};
pub use error::EngineError;
pub use store::{MemoryStore, Store, StoreError};

use std::sync::Arc;

use crate::clock::Clock;

/// The availability-decision engine: validation, one snapshot per
/// operation from the store collaborator, then the pure interval logic in
/// `availability`. Holds no state of its own and caches nothing across
/// calls.
pub struct Engine {
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
}

impl Engine {
    pub fn new(store: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}
