use std::path::{Path, PathBuf};
use std::sync::Arc;
use anyhow::Result;
use parking_lot::RwLock;
use tracing::debug;

use super::{ConfigStore, PropertyMap};

/// File-backed store: one JSON document (`properties.json`) under a root
/// directory. Writes go through a temp file and rename so a reader of the
/// file never observes a torn write. The in-memory map is the authoritative
/// view for this handle; the write lock is held across persistence so a
/// commit is atomic with respect to concurrent snapshots.
#[derive(Clone)]
pub struct FileStore {
    dir: PathBuf,
    map: Arc<RwLock<PropertyMap>>,
}

impl FileStore {
    /// Open a store rooted at the given directory, creating it if needed and
    /// loading any previously persisted properties.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        let s = Self { dir, map: Arc::new(RwLock::new(PropertyMap::new())) };
        s.load()?;
        Ok(s)
    }

    fn props_path(&self) -> PathBuf { self.dir.join("properties.json") }

    fn load(&self) -> Result<()> {
        let path = self.props_path();
        if !path.exists() {
            crate::tprintln!("[storage.load] no properties file at '{}'", path.display());
            return Ok(());
        }
        let bytes = std::fs::read(&path)?;
        let props: PropertyMap = serde_json::from_slice(&bytes)?;
        crate::tprintln!("[storage.load] loaded {} keys from '{}'", props.len(), path.display());
        *self.map.write() = props;
        Ok(())
    }

    fn persist(&self, props: &PropertyMap) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(props)?;
        let tmp = self.props_path().with_extension("json.tmp");
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, self.props_path())?;
        Ok(())
    }
}

impl ConfigStore for FileStore {
    fn snapshot(&self) -> Result<PropertyMap> { Ok(self.map.read().clone()) }

    fn put_all(&self, props: &PropertyMap) -> Result<()> {
        let mut w = self.map.write();
        for (k, v) in props {
            w.insert(k.clone(), v.clone());
        }
        self.persist(&w)?;
        debug!(target: "anteroom::storage", "persisted {} keys to '{}'", w.len(), self.props_path().display());
        Ok(())
    }

    fn delete_all(&self) -> Result<()> {
        let mut w = self.map.write();
        w.clear();
        self.persist(&w)?;
        debug!(target: "anteroom::storage", "cleared all keys at '{}'", self.props_path().display());
        Ok(())
    }
}
