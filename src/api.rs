//! Procedure-call surface for the presentation layer.
//! Every method is infallible at the boundary: failures surface as structured
//! `{success, message}` values the page can render, never as propagated
//! errors. Each call works from one coherent configuration snapshot so a
//! request can never observe a torn write.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::{self, AdminContent, UserContent};
use crate::error::OpResult;
use crate::identity::{self, AuthStatus, ContentVisibility, IdentityProvider, UserInfo};
use crate::probe::DataSourceProbe;
use crate::reset::ResetController;
use crate::setup::SetupController;
use crate::storage::{ConfigStore, SetupConfig};

/// Visibility report in the shape the page consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityReport {
    pub visibility: ContentVisibility,
    pub user_info: UserInfo,
}

/// Boundary shape for the content accessors: payload on success, message on
/// denial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentResult<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ContentResult<T> {
    pub fn ok(content: T) -> Self { Self { success: true, content: Some(content), message: None } }
    pub fn denied<S: Into<String>>(message: S) -> Self {
        Self { success: false, content: None, message: Some(message.into()) }
    }
}

/// The application core: owns the injected collaborators and exposes the
/// operation surface. Cloneable and cheap to share; all state lives behind
/// the store.
#[derive(Clone)]
pub struct App {
    store: Arc<dyn ConfigStore>,
    identity: Arc<dyn IdentityProvider>,
    setup: Arc<SetupController>,
    reset: Arc<ResetController>,
}

impl App {
    pub fn new(
        store: Arc<dyn ConfigStore>,
        identity: Arc<dyn IdentityProvider>,
        probe: Arc<dyn DataSourceProbe>,
    ) -> Self {
        let setup = Arc::new(SetupController::new(store.clone(), probe));
        let reset = Arc::new(ResetController::new(store.clone()));
        Self { store, identity, setup, reset }
    }

    /// One coherent snapshot plus the status derived from it. Config and
    /// status always come from the same read.
    fn current(&self) -> (Option<SetupConfig>, AuthStatus) {
        let config = crate::storage::load_config(self.store.as_ref()).ok().flatten();
        let email = self.identity.current_email();
        let auth = identity::resolve_auth(config.as_ref(), email.as_deref());
        (config, auth)
    }

    /// Presence of the setup timestamp is the sole phase signal.
    pub fn is_setup_complete(&self) -> bool {
        self.current().0.is_some()
    }

    pub fn perform_initial_setup(
        &self,
        admin_email: &str,
        authorized_users_csv: &str,
        data_source_link: &str,
    ) -> OpResult {
        match self.setup.perform_setup(admin_email, authorized_users_csv, data_source_link) {
            Ok(()) => OpResult::ok("Setup completed successfully"),
            Err(e) => e.into(),
        }
    }

    /// Status for the current caller, recomputed from a fresh snapshot on
    /// every call.
    pub fn auth_status(&self) -> AuthStatus {
        self.current().1
    }

    pub fn visibility(&self) -> VisibilityReport {
        let (_, auth) = self.current();
        let decision = identity::decide(&auth);
        debug!(
            target: "anteroom::api",
            "visibility {:?} for '{}'",
            decision.region,
            auth.user_email.as_deref().unwrap_or("")
        );
        VisibilityReport { visibility: decision.into(), user_info: (&auth).into() }
    }

    pub fn admin_content(&self) -> ContentResult<AdminContent> {
        let (config, auth) = self.current();
        // Pre-setup there is no admin; same denial as any other non-admin
        let Some(config) = config else {
            return ContentResult::denied("Unauthorized access");
        };
        match content::admin_content(&auth, &config) {
            Ok(c) => ContentResult::ok(c),
            Err(e) => ContentResult::denied(e.message()),
        }
    }

    pub fn user_content(&self) -> ContentResult<UserContent> {
        let (_, auth) = self.current();
        match content::user_content(&auth) {
            Ok(c) => ContentResult::ok(c),
            Err(e) => ContentResult::denied(e.message()),
        }
    }

    pub fn reset_application(&self) -> OpResult {
        let (_, auth) = self.current();
        match self.reset.reset(&auth) {
            Ok(()) => OpResult::ok("Application reset successfully"),
            Err(e) => e.into(),
        }
    }
}
