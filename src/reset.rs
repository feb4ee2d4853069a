//! Admin-only reset: clears all persisted configuration and returns the
//! system to the pre-setup phase. Destructive and immediate; there is no
//! confirmation, soft-delete, or backup.

use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::identity::AuthStatus;
use crate::storage::ConfigStore;

pub struct ResetController {
    store: Arc<dyn ConfigStore>,
}

impl ResetController {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self { Self { store } }

    /// Delete every configuration key. Requires an authenticated admin.
    pub fn reset(&self, auth: &AuthStatus) -> AppResult<()> {
        if !auth.is_authenticated || !auth.is_admin {
            return Err(AppError::auth("not_admin", "Unauthorized access"));
        }
        self.store.delete_all().map_err(|e| AppError::Io {
            code: "store_clear_failed".into(),
            message: format!("Failed to reset application: {}", e),
        })?;
        info!(
            target: "anteroom::reset",
            "configuration cleared by '{}'",
            auth.user_email.as_deref().unwrap_or("")
        );
        Ok(())
    }
}
