//! Static route table: URL path → page, partitioned into public and
//! protected routes.

use crate::error::AppError;
use crate::role::Role;
use std::collections::HashSet;

/// Catch-all pattern. Matches only when no earlier entry did.
pub const WILDCARD: &str = "*";

/// Page rendered for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Splash,
    Login,
    Register,
    RoleSelection,
    Dashboard(Role),
    Appointments(Role),
    Records(Role),
    Pharmacy,
    Profile,
    Consultations,
    Inventory,
    NotFound,
}

impl Page {
    /// Heading used by generic page chrome and placeholders.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Splash => "Devayu",
            Page::Login => "Sign In",
            Page::Register => "Create Account",
            Page::RoleSelection => "Select Your Role",
            Page::Dashboard(_) => "Home",
            Page::Appointments(_) => "Appointments",
            Page::Records(Role::Patient) => "Health Records",
            Page::Records(_) => "Records",
            Page::Pharmacy => "Pharmacy",
            Page::Profile => "Profile",
            Page::Consultations => "Consultations",
            Page::Inventory => "Inventory",
            Page::NotFound => "Not Found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
    pub protected: bool,
}

const fn public(path: &'static str, page: Page) -> RouteEntry {
    RouteEntry {
        path,
        page,
        protected: false,
    }
}

const fn protected(path: &'static str, page: Page) -> RouteEntry {
    RouteEntry {
        path,
        page,
        protected: true,
    }
}

/// Declared routes, in resolution order.
pub static ROUTES: &[RouteEntry] = &[
    public("/", Page::Splash),
    public("/login", Page::Login),
    public("/register", Page::Register),
    public("/role-selection", Page::RoleSelection),
    protected("/dashboard-patient", Page::Dashboard(Role::Patient)),
    protected("/dashboard-doctor", Page::Dashboard(Role::Doctor)),
    protected("/dashboard-pharma", Page::Dashboard(Role::Pharma)),
    protected("/appointments-patient", Page::Appointments(Role::Patient)),
    protected("/appointments-doctor", Page::Appointments(Role::Doctor)),
    protected("/appointments-pharma", Page::Appointments(Role::Pharma)),
    protected("/records-patient", Page::Records(Role::Patient)),
    protected("/records-doctor", Page::Records(Role::Doctor)),
    protected("/records-pharma", Page::Records(Role::Pharma)),
    protected("/pharmacy", Page::Pharmacy),
    protected("/profile", Page::Profile),
    protected("/consultations", Page::Consultations),
    protected("/inventory", Page::Inventory),
    public(WILDCARD, Page::NotFound),
];

pub fn dashboard_path(role: Role) -> String {
    format!("/dashboard-{}", role.as_str())
}

pub fn appointments_path(role: Role) -> String {
    format!("/appointments-{}", role.as_str())
}

pub fn records_path(role: Role) -> String {
    format!("/records-{}", role.as_str())
}

/// Drop any query string or fragment.
pub fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// First entry in `table` matching `path`.
pub fn resolve_in<'a>(table: &'a [RouteEntry], path: &str) -> Option<&'a RouteEntry> {
    let path = strip_query(path);
    table
        .iter()
        .find(|entry| entry.path != WILDCARD && entry.path == path)
        .or_else(|| table.iter().find(|entry| entry.path == WILDCARD))
}

/// Resolve against [`ROUTES`]. Always succeeds thanks to the catch-all.
pub fn resolve(path: &str) -> &'static RouteEntry {
    match resolve_in(ROUTES, path) {
        Some(entry) => entry,
        None => &ROUTES[ROUTES.len() - 1],
    }
}

pub fn is_protected(path: &str) -> bool {
    resolve(path).protected
}

/// Check the structural rules of a route table: paths are unique, the
/// wildcard appears exactly once and is declared last.
pub fn validate(table: &[RouteEntry]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for entry in table {
        if !seen.insert(entry.path) {
            return Err(AppError::config(format!(
                "route '{}' is declared twice",
                entry.path
            )));
        }
    }
    match table.iter().position(|e| e.path == WILDCARD) {
        Some(idx) if idx == table.len() - 1 => Ok(()),
        Some(_) => Err(AppError::config("wildcard route must be declared last")),
        None => Err(AppError::config("route table has no wildcard route")),
    }
}
