use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use super::EntityStore;

/// Handle to the process-wide [`EntityStore`].
///
/// Mutations take the write lock for their whole duration, lookups take the
/// read lock. Guards must be dropped before any `.await`.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<EntityStore>>,
}

impl SharedStore {
    pub fn new(store: EntityStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, EntityStore> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, EntityStore> {
        self.inner.write()
    }
}
