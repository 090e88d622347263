//! Role-scoped bottom navigation.

use crate::role::Role;
use crate::route_table::{appointments_path, dashboard_path, records_path, strip_query};

/// Icon reference; the UI maps each variant to a concrete icon component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Calendar,
    File,
    Pill,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: String,
    pub label: &'static str,
    pub icon: NavIcon,
    pub active: bool,
}

/// Items appended after the base items, per role.
struct RoleExtra {
    path: &'static str,
    label: &'static str,
    icon: NavIcon,
}

const PATIENT_EXTRAS: &[RoleExtra] = &[
    RoleExtra {
        path: "/pharmacy",
        label: "Pharmacy",
        icon: NavIcon::Pill,
    },
    RoleExtra {
        path: "/profile",
        label: "Profile",
        icon: NavIcon::User,
    },
];

const DOCTOR_EXTRAS: &[RoleExtra] = &[
    RoleExtra {
        path: "/consultations",
        label: "Consultations",
        icon: NavIcon::File,
    },
    RoleExtra {
        path: "/profile",
        label: "Profile",
        icon: NavIcon::User,
    },
];

const PHARMA_EXTRAS: &[RoleExtra] = &[
    RoleExtra {
        path: "/inventory",
        label: "Inventory",
        icon: NavIcon::Pill,
    },
    RoleExtra {
        path: "/profile",
        label: "Profile",
        icon: NavIcon::User,
    },
];

fn extras(role: Role) -> &'static [RoleExtra] {
    match role {
        Role::Patient => PATIENT_EXTRAS,
        Role::Doctor => DOCTOR_EXTRAS,
        Role::Pharma => PHARMA_EXTRAS,
    }
}

/// Exact match between an item's target and the current path.
///
/// Query string and fragment are ignored; a trailing slash is not, so
/// `/profile` is not active at `/profile/`.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    item_path == strip_query(current_path)
}

/// Navigation items for `role`, left to right, with `active` set against
/// `current_path`.
///
/// Without a recognised role only the three base items are returned, built
/// with the Patient paths.
pub fn compute_items(role: Option<Role>, current_path: &str) -> Vec<NavItem> {
    let base_role = role.unwrap_or_default();
    let mut items = vec![
        (dashboard_path(base_role), "Home", NavIcon::Home),
        (appointments_path(base_role), "Appointments", NavIcon::Calendar),
        (records_path(base_role), "Records", NavIcon::File),
    ];
    if let Some(role) = role {
        items.extend(
            extras(role)
                .iter()
                .map(|extra| (extra.path.to_string(), extra.label, extra.icon)),
        );
    }

    items
        .into_iter()
        .map(|(path, label, icon)| {
            let active = is_active(&path, current_path);
            NavItem {
                path,
                label,
                icon,
                active,
            }
        })
        .collect()
}
