//! Role-scoped content payloads consumed by the page containers. These sit
//! outside the decision core: they only consume `AuthStatus` and echo
//! configuration the caller is entitled to.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::identity::AuthStatus;
use crate::storage::SetupConfig;

/// Stored properties echoed back to the admin settings view. The admin
/// already owns everything here; no derived secrets are added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminProperties {
    pub admin_email: String,
    pub authorized_users: String,
    pub data_source_link: String,
    pub setup_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: usize,
    /// Human-formatted date for the dashboard, distinct from the raw
    /// ISO-8601 value in the properties block.
    pub setup_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminContent {
    pub properties: AdminProperties,
    pub stats: AdminStats,
}

/// Caller-scoped payload for the user container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserContent {
    pub user_email: String,
}

/// Admin-only summary: stored properties plus derived stats.
pub fn admin_content(auth: &AuthStatus, config: &SetupConfig) -> AppResult<AdminContent> {
    if !auth.is_authenticated || !auth.is_admin {
        return Err(AppError::auth("not_admin", "Unauthorized access"));
    }
    Ok(AdminContent {
        properties: AdminProperties {
            admin_email: config.admin_email.clone(),
            authorized_users: config.authorized_users_raw.clone(),
            data_source_link: config.data_source_link.clone(),
            setup_date: config.setup_date.clone(),
        },
        stats: AdminStats {
            total_users: config.authorized_users().len(),
            setup_date: format_setup_date(&config.setup_date),
        },
    })
}

/// Payload for any authenticated caller: only the caller's own email. Never
/// leaks the admin email or the authorized-user list to ordinary users.
pub fn user_content(auth: &AuthStatus) -> AppResult<UserContent> {
    if !auth.is_authenticated {
        return Err(AppError::auth("not_authenticated", "Unauthorized access"));
    }
    Ok(UserContent { user_email: auth.user_email.clone().unwrap_or_default() })
}

/// Falls back to the raw string when the stored value does not parse.
fn format_setup_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
