use devayu_types::{
    access_redirect, hide_chrome, resolve, validate, Page, PortalConfig, SessionStore, ROUTES,
    WILDCARD,
};
use pretty_assertions::assert_eq;

fn guard_from(toml: &str) -> bool {
    PortalConfig::from_toml(toml)
        .unwrap()
        .routing
        .guard_protected_routes
}

#[test]
fn route_table_is_well_formed() {
    validate(ROUTES).unwrap();
    assert_eq!(ROUTES.last().map(|e| e.path), Some(WILDCARD));
}

#[test]
fn every_protected_route_redirects_when_signed_out() {
    let session = SessionStore::in_memory();
    let guard = guard_from("");
    for entry in ROUTES.iter().filter(|e| e.protected) {
        assert_eq!(
            access_redirect(entry.path, &session, guard),
            Some("/login"),
            "{}",
            entry.path
        );
    }
}

#[test]
fn public_routes_never_redirect() {
    let session = SessionStore::in_memory();
    for entry in ROUTES.iter().filter(|e| !e.protected) {
        assert_eq!(access_redirect(entry.path, &session, true), None, "{}", entry.path);
    }
}

#[test]
fn guard_can_be_switched_off_in_config() {
    let session = SessionStore::in_memory();
    let guard = guard_from("[routing]\nguard_protected_routes = false\n");
    assert!(!guard);
    for entry in ROUTES.iter().filter(|e| e.protected) {
        assert_eq!(access_redirect(entry.path, &session, guard), None);
    }
}

#[test]
fn query_strings_do_not_bypass_the_guard() {
    let session = SessionStore::in_memory();
    assert_eq!(access_redirect("/profile?tab=security", &session, true), Some("/login"));
}

#[test]
fn unknown_path_renders_not_found_with_chrome() {
    let page = resolve("/settings");
    assert_eq!(page.page, Page::NotFound);
    assert!(!page.protected);
    assert!(!hide_chrome("/settings"));
}

#[test]
fn entry_screens_hide_chrome() {
    let chromeless: Vec<_> = ROUTES
        .iter()
        .filter(|e| e.path != WILDCARD && hide_chrome(e.path))
        .map(|e| e.path)
        .collect();
    assert_eq!(chromeless, vec!["/", "/login", "/register", "/role-selection"]);
}
