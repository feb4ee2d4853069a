/// Supplies the caller's verified identity (an email address) for the current
/// invocation. The core treats the value as a trusted oracle: it never
/// validates or forges it, it only compares it against stored configuration.
pub trait IdentityProvider: Send + Sync {
    /// The caller's email, or None for an anonymous caller.
    fn current_email(&self) -> Option<String>;
}

/// Fixed identity. Used by tests and by hosts that resolve the caller before
/// constructing the app.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    email: Option<String>,
}

impl StaticIdentity {
    pub fn new(email: impl Into<String>) -> Self { Self { email: Some(email.into()) } }
    pub fn anonymous() -> Self { Self { email: None } }
}

impl IdentityProvider for StaticIdentity {
    fn current_email(&self) -> Option<String> { self.email.clone() }
}

/// Reads the identity from an environment variable. Unset or blank means
/// anonymous.
#[derive(Debug, Clone)]
pub struct EnvIdentity {
    var: String,
}

impl EnvIdentity {
    pub fn new(var: impl Into<String>) -> Self { Self { var: var.into() } }
}

impl IdentityProvider for EnvIdentity {
    fn current_email(&self) -> Option<String> {
        match std::env::var(&self.var) {
            Ok(v) if !v.trim().is_empty() => Some(v),
            _ => None,
        }
    }
}
