use std::sync::Arc;
use anyhow::Result;
use parking_lot::RwLock;

use super::{ConfigStore, PropertyMap};

/// In-memory store. The substitutable fake for tests, also usable by hosts
/// that manage persistence themselves.
#[derive(Clone, Default)]
pub struct MemStore {
    map: Arc<RwLock<PropertyMap>>,
}

impl MemStore {
    pub fn new() -> Self { Self::default() }
}

impl ConfigStore for MemStore {
    fn snapshot(&self) -> Result<PropertyMap> { Ok(self.map.read().clone()) }

    fn put_all(&self, props: &PropertyMap) -> Result<()> {
        let mut w = self.map.write();
        for (k, v) in props {
            w.insert(k.clone(), v.clone());
        }
        Ok(())
    }

    fn delete_all(&self) -> Result<()> {
        self.map.write().clear();
        Ok(())
    }
}
