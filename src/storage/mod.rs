//!
//! anteroom configuration storage
//! ------------------------------
//! Persisted setup configuration lives in a flat key/value map. The key names
//! mirror the legacy property layout (`ADMIN_EMAIL`, `AUTHORIZED_USERS`,
//! `GOOGLE_SHEETS_LINK`, `SETUP_DATE`) so data persisted by earlier
//! deployments of the app remains readable without migration.
//!
//! Two invariants matter here:
//! - Presence of `SETUP_DATE` is the sole phase discriminant. There is no
//!   separate "configured" flag; absence of the timestamp IS the pre-setup
//!   state.
//! - Reads are snapshot-consistent: a caller always sees all keys from one
//!   coherent view, never a torn write.
//!
//! The store is an explicit, injected handle (`Arc<dyn ConfigStore>`), never
//! ambient process state, so tests can substitute `MemStore` for the
//! file-backed implementation.

use std::collections::BTreeMap;
use anyhow::Result;
use serde::{Deserialize, Serialize};

mod file;
mod mem;

pub use file::FileStore;
pub use mem::MemStore;

pub const KEY_ADMIN_EMAIL: &str = "ADMIN_EMAIL";
pub const KEY_AUTHORIZED_USERS: &str = "AUTHORIZED_USERS";
pub const KEY_DATA_SOURCE_LINK: &str = "GOOGLE_SHEETS_LINK";
pub const KEY_SETUP_DATE: &str = "SETUP_DATE";

pub type PropertyMap = BTreeMap<String, String>;

/// Persisted key/value store for setup configuration.
pub trait ConfigStore: Send + Sync {
    /// Return one coherent snapshot of every persisted key.
    fn snapshot(&self) -> Result<PropertyMap>;
    /// Commit all entries as one atomic write, replacing any existing values.
    fn put_all(&self, props: &PropertyMap) -> Result<()>;
    /// Delete every key atomically.
    fn delete_all(&self) -> Result<()>;
}

/// Typed read-side view over one snapshot; only constructible once setup has
/// completed (i.e. `SETUP_DATE` is present).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetupConfig {
    pub admin_email: String,
    pub authorized_users_raw: String,
    pub data_source_link: String,
    pub setup_date: String,
}

impl SetupConfig {
    pub fn from_props(props: &PropertyMap) -> Option<Self> {
        let setup_date = props.get(KEY_SETUP_DATE)?.clone();
        Some(Self {
            admin_email: props.get(KEY_ADMIN_EMAIL).cloned().unwrap_or_default(),
            authorized_users_raw: props.get(KEY_AUTHORIZED_USERS).cloned().unwrap_or_default(),
            data_source_link: props.get(KEY_DATA_SOURCE_LINK).cloned().unwrap_or_default(),
            setup_date,
        })
    }

    /// Split the stored comma-joined list and trim surrounding whitespace from
    /// each element. Trimming happens at read time only; the raw string is
    /// persisted exactly as supplied, matching the legacy data format.
    pub fn authorized_users(&self) -> Vec<String> {
        if self.authorized_users_raw.is_empty() { return Vec::new(); }
        self.authorized_users_raw.split(',').map(|s| s.trim().to_string()).collect()
    }

    /// Exact string membership against the trimmed list. Duplicates in the
    /// stored sequence are harmless; only membership matters.
    pub fn is_authorized_user(&self, email: &str) -> bool {
        self.authorized_users().iter().any(|u| u == email)
    }
}

/// Load the typed view from a store, if setup has completed.
pub fn load_config(store: &dyn ConfigStore) -> Result<Option<SetupConfig>> {
    let props = store.snapshot()?;
    Ok(SetupConfig::from_props(&props))
}
