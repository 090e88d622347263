//! Layout shell decisions: navigation chrome and access to protected routes.

use crate::route_table::is_protected;
use crate::session::SessionStore;

/// Paths rendered without the bottom navigation.
pub const CHROMELESS_PATHS: &[&str] = &["/", "/splash", "/login", "/register", "/role-selection"];

/// Path to send signed-out visitors of protected routes to.
pub const LOGIN_PATH: &str = "/login";

/// Whether `path` suppresses the navigation chrome. Plain string equality:
/// no pattern matching, no role check.
pub fn hide_chrome(path: &str) -> bool {
    CHROMELESS_PATHS.contains(&path)
}

/// Where a visitor of `path` must be redirected, if anywhere.
///
/// With `guard_enabled` off every route is reachable regardless of the
/// session, which is how the portal behaved before the guard existed.
pub fn access_redirect(
    path: &str,
    session: &SessionStore,
    guard_enabled: bool,
) -> Option<&'static str> {
    if guard_enabled && is_protected(path) && !session.is_logged_in() {
        Some(LOGIN_PATH)
    } else {
        None
    }
}
