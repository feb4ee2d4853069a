use serde::{Deserialize, Serialize};

use super::AuthStatus;

/// The four mutually exclusive content regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    SetupRequired,
    Unauthorized,
    AdminView,
    UserView,
}

/// Outcome of the visibility decision for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityDecision {
    pub region: Region,
    /// True for any authenticated caller, admin or user.
    pub analytics_visible: bool,
}

/// Map an auth status to exactly one region.
///
/// Rule order encodes priority: the setup gate wins over everything, then the
/// authentication gate, then role. An admin identity seen before setup has
/// completed still lands in `SetupRequired`, never `AdminView`.
pub fn decide(auth: &AuthStatus) -> VisibilityDecision {
    let region = if !auth.is_setup_complete {
        Region::SetupRequired
    } else if !auth.is_authenticated {
        Region::Unauthorized
    } else if auth.is_admin {
        Region::AdminView
    } else {
        Region::UserView
    };
    let analytics_visible = matches!(region, Region::AdminView | Region::UserView);
    VisibilityDecision { region, analytics_visible }
}

/// Per-container booleans in the shape the page consumes. Exactly one of the
/// four region flags is true; analytics rides along for either authenticated
/// role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentVisibility {
    pub setup_container: bool,
    pub admin_content: bool,
    pub user_content: bool,
    pub unauthorized_content: bool,
    pub analytics_content: bool,
}

impl From<VisibilityDecision> for ContentVisibility {
    fn from(d: VisibilityDecision) -> Self {
        let mut v = Self { analytics_content: d.analytics_visible, ..Self::default() };
        match d.region {
            Region::SetupRequired => v.setup_container = true,
            Region::Unauthorized => v.unauthorized_content = true,
            Region::AdminView => v.admin_content = true,
            Region::UserView => v.user_content = true,
        }
        v
    }
}

impl ContentVisibility {
    /// Case-insensitive container lookup by name ('admin', 'user', 'setup',
    /// 'unauthorized', 'analytics'). Unknown names are never visible.
    pub fn container_visible(&self, container: &str) -> bool {
        match container.to_ascii_lowercase().as_str() {
            "admin" => self.admin_content,
            "user" => self.user_content,
            "setup" => self.setup_container,
            "unauthorized" => self.unauthorized_content,
            "analytics" => self.analytics_content,
            _ => false,
        }
    }

    /// Number of region flags set; analytics is auxiliary and not counted.
    pub fn visible_region_count(&self) -> usize {
        [self.setup_container, self.admin_content, self.user_content, self.unauthorized_content]
            .iter()
            .filter(|b| **b)
            .count()
    }
}

/// Caller block attached to the visibility report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Empty string for an anonymous caller, matching the wire shape.
    pub email: String,
    pub is_admin: bool,
    pub is_authenticated: bool,
}

impl From<&AuthStatus> for UserInfo {
    fn from(a: &AuthStatus) -> Self {
        Self {
            email: a.user_email.clone().unwrap_or_default(),
            is_admin: a.is_admin,
            is_authenticated: a.is_authenticated,
        }
    }
}
