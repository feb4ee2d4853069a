//! First-time setup: validate inputs, probe the data source, commit the
//! configuration as one write.

use std::sync::Arc;
use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::probe::DataSourceProbe;
use crate::storage::{
    ConfigStore, PropertyMap, KEY_ADMIN_EMAIL, KEY_AUTHORIZED_USERS, KEY_DATA_SOURCE_LINK,
    KEY_SETUP_DATE,
};

// local@domain.tld shape with no embedded whitespace; deliberately loose.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub struct SetupController {
    store: Arc<dyn ConfigStore>,
    probe: Arc<dyn DataSourceProbe>,
}

impl SetupController {
    pub fn new(store: Arc<dyn ConfigStore>, probe: Arc<dyn DataSourceProbe>) -> Self {
        Self { store, probe }
    }

    /// Validate and commit first-time configuration.
    ///
    /// Checks run in order and the first failure wins; nothing is written
    /// unless every check passes. A later successful call overwrites the
    /// previous configuration without any guard (preserved legacy behavior;
    /// the integration tests document it).
    pub fn perform_setup(
        &self,
        admin_email: &str,
        authorized_users_csv: &str,
        data_source_link: &str,
    ) -> AppResult<()> {
        if admin_email.is_empty() || authorized_users_csv.is_empty() || data_source_link.is_empty() {
            return Err(AppError::validation("missing_fields", "All fields are required"));
        }
        if !EMAIL_RE.is_match(admin_email) {
            return Err(AppError::validation("bad_admin_email", "Invalid admin email format"));
        }
        if let Err(e) = self.probe.check(data_source_link) {
            warn!(target: "anteroom::setup", "data source probe failed for '{}': {}", data_source_link, e);
            return Err(AppError::validation(
                "data_source_unreachable",
                "Invalid data source reference or insufficient permissions",
            ));
        }

        let setup_date = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut props = PropertyMap::new();
        props.insert(KEY_ADMIN_EMAIL.into(), admin_email.to_string());
        props.insert(KEY_AUTHORIZED_USERS.into(), authorized_users_csv.to_string());
        props.insert(KEY_DATA_SOURCE_LINK.into(), data_source_link.to_string());
        props.insert(KEY_SETUP_DATE.into(), setup_date.clone());
        self.store.put_all(&props).map_err(|e| AppError::Io {
            code: "store_write_failed".into(),
            message: format!("Setup failed: {}", e),
        })?;
        info!(target: "anteroom::setup", "setup committed admin='{}' at {}", admin_email, setup_date);
        Ok(())
    }
}
