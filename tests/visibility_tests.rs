//! Visibility integration tests: the full region matrix through the
//! procedure-call surface, mutual exclusion of the region flags, and the
//! role-scoped content accessors.

use std::sync::Arc;

use anteroom::api::App;
use anteroom::identity::{IdentityProvider, StaticIdentity};
use anteroom::probe::AcceptAllProbe;
use anteroom::storage::{ConfigStore, MemStore};

fn app_as(store: Arc<dyn ConfigStore>, identity: Option<&str>) -> App {
    let ident: Arc<dyn IdentityProvider> = match identity {
        Some(email) => Arc::new(StaticIdentity::new(email)),
        None => Arc::new(StaticIdentity::anonymous()),
    };
    App::new(store, ident, Arc::new(AcceptAllProbe))
}

/// Store with setup already committed: admin plus two authorized users with
/// messy whitespace around the separators.
fn configured_store() -> Arc<MemStore> {
    let store = Arc::new(MemStore::new());
    let app = app_as(store.clone(), Some("admin@example.com"));
    let r = app.perform_initial_setup("admin@example.com", " a@x.com , b@y.com", "https://example.com/sheet");
    assert!(r.success, "fixture setup failed: {}", r.message);
    store
}

#[test]
fn pre_setup_every_identity_sees_only_the_setup_container() {
    let store = Arc::new(MemStore::new());
    for identity in [Some("admin@example.com"), Some("b@y.com"), Some("stranger@other.com"), None] {
        let report = app_as(store.clone(), identity).visibility();
        assert!(report.visibility.setup_container);
        assert!(!report.visibility.analytics_content);
        assert_eq!(report.visibility.visible_region_count(), 1);
        assert!(!report.user_info.is_authenticated);
    }
}

#[test]
fn admin_sees_admin_view_with_analytics() {
    let report = app_as(configured_store(), Some("admin@example.com")).visibility();
    assert!(report.visibility.admin_content);
    assert!(report.visibility.analytics_content);
    assert!(!report.visibility.user_content);
    assert!(report.user_info.is_admin && report.user_info.is_authenticated);
    assert_eq!(report.user_info.email, "admin@example.com");
}

#[test]
fn authorized_user_sees_user_view_with_analytics_after_trim() {
    // "a@x.com" was stored with surrounding whitespace; trim applies at read time
    let report = app_as(configured_store(), Some("a@x.com")).visibility();
    assert!(report.visibility.user_content);
    assert!(report.visibility.analytics_content);
    assert!(!report.visibility.admin_content);
    assert!(!report.user_info.is_admin);
    assert!(report.user_info.is_authenticated);
}

#[test]
fn unknown_identity_sees_unauthorized_without_analytics() {
    let report = app_as(configured_store(), Some("stranger@other.com")).visibility();
    assert!(report.visibility.unauthorized_content);
    assert!(!report.visibility.analytics_content);
    assert_eq!(report.visibility.visible_region_count(), 1);
}

#[test]
fn anonymous_caller_sees_unauthorized_with_empty_email() {
    let report = app_as(configured_store(), None).visibility();
    assert!(report.visibility.unauthorized_content);
    assert_eq!(report.user_info.email, "");
    assert!(!report.user_info.is_authenticated);
}

#[test]
fn exactly_one_region_for_every_identity() {
    let store = configured_store();
    for identity in [Some("admin@example.com"), Some("a@x.com"), Some("nobody@other.com"), None] {
        let v = app_as(store.clone(), identity).visibility().visibility;
        assert_eq!(v.visible_region_count(), 1, "identity {:?}", identity);
    }
}

#[test]
fn admin_content_carries_stats_and_is_denied_to_others() {
    let store = configured_store();

    let r = app_as(store.clone(), Some("admin@example.com")).admin_content();
    assert!(r.success);
    let content = r.content.expect("admin content payload");
    assert_eq!(content.stats.total_users, 2);
    assert_eq!(content.properties.admin_email, "admin@example.com");

    for identity in [Some("a@x.com"), Some("stranger@other.com"), None] {
        let r = app_as(store.clone(), identity).admin_content();
        assert!(!r.success);
        assert_eq!(r.message.as_deref(), Some("Unauthorized access"));
        assert!(r.content.is_none());
    }
}

#[test]
fn admin_content_denied_before_setup() {
    let store = Arc::new(MemStore::new());
    let r = app_as(store, Some("admin@example.com")).admin_content();
    assert!(!r.success);
    assert_eq!(r.message.as_deref(), Some("Unauthorized access"));
}

#[test]
fn user_content_scoped_to_caller_and_gated_on_authentication() {
    let store = configured_store();

    let r = app_as(store.clone(), Some("b@y.com")).user_content();
    assert!(r.success);
    assert_eq!(r.content.expect("user payload").user_email, "b@y.com");

    // Admin may also load the user payload; it is gated on authentication only
    let r = app_as(store.clone(), Some("admin@example.com")).user_content();
    assert!(r.success);

    let r = app_as(store.clone(), Some("stranger@other.com")).user_content();
    assert!(!r.success);
    assert_eq!(r.message.as_deref(), Some("Unauthorized access"));
}

#[test]
fn user_content_never_leaks_configuration_fields() {
    let store = configured_store();
    let r = app_as(store, Some("b@y.com")).user_content();
    let json = serde_json::to_string(&r).unwrap();
    assert!(!json.contains("admin@example.com"), "admin email must not leak");
    assert!(!json.contains("a@x.com"), "authorized-user list must not leak");
    assert!(!json.contains("https://example.com/sheet"), "data source link must not leak");
}

#[test]
fn visibility_report_serializes_in_the_page_wire_shape() {
    let report = app_as(configured_store(), Some("admin@example.com")).visibility();
    let v = serde_json::to_value(&report).unwrap();
    let vis = v.get("visibility").expect("visibility block");
    for key in ["setupContainer", "adminContent", "userContent", "unauthorizedContent", "analyticsContent"] {
        assert!(vis.get(key).is_some(), "missing key {}", key);
    }
    let ui = v.get("userInfo").expect("userInfo block");
    assert_eq!(ui.get("isAdmin").and_then(|b| b.as_bool()), Some(true));
    assert_eq!(ui.get("email").and_then(|e| e.as_str()), Some("admin@example.com"));
}
