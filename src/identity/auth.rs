use serde::{Deserialize, Serialize};

use crate::storage::SetupConfig;

/// Authentication/authorization status derived per request.
///
/// Never persisted or cached, so it can never go stale relative to the stored
/// configuration. `is_authenticated` is only meaningful once
/// `is_setup_complete` is true, and `is_admin` only once `is_authenticated`
/// is true.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_setup_complete: bool,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// Compute the caller's status from one configuration snapshot.
///
/// Deny by default: an unrecognized identity yields `is_authenticated = false`
/// as a normal outcome, never an error. The admin comparison is an exact,
/// case-sensitive string match with no normalization; the authorized-user
/// check matches against the list after the read-time trim applied by
/// `SetupConfig::authorized_users`.
pub fn resolve_auth(config: Option<&SetupConfig>, identity: Option<&str>) -> AuthStatus {
    // Setup gate first: before setup there is nothing to compare against.
    let Some(cfg) = config else {
        return AuthStatus { is_setup_complete: false, ..Default::default() };
    };
    let is_admin = identity.map(|e| e == cfg.admin_email).unwrap_or(false);
    let is_authorized_user = identity.map(|e| cfg.is_authorized_user(e)).unwrap_or(false);
    AuthStatus {
        is_setup_complete: true,
        is_authenticated: is_admin || is_authorized_user,
        is_admin,
        user_email: identity.map(|s| s.to_string()),
    }
}
