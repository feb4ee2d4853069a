//! Caller identity and the authorization/visibility decision core.
//! Keep the public surface thin and split implementation across sub-modules.

mod auth;
mod provider;
mod visibility;

pub use auth::{resolve_auth, AuthStatus};
pub use provider::{EnvIdentity, IdentityProvider, StaticIdentity};
pub use visibility::{decide, ContentVisibility, Region, UserInfo, VisibilityDecision};
