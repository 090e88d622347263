pub mod appointments;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod pharmacy;
pub mod placeholder;
pub mod profile;
pub mod records;
pub mod register;
pub mod role_selection;
pub mod splash;

use crate::session::use_session;
use chrono::NaiveDate;
use devayu_types::{compute_items, hide_chrome, NavIcon, PortalConfig};
use devayu_ui::{BottomNav, BottomNavItem};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdFileText, LdLayoutDashboard, LdPill, LdUser,
};
use dioxus_free_icons::Icon;

use appointments::{AppointmentsDoctor, AppointmentsPatient, AppointmentsPharma};
use dashboard::{DashboardDoctor, DashboardPatient, DashboardPharma};
use login::Login;
use not_found::NotFound;
use pharmacy::Pharmacy;
use placeholder::{Consultations, Inventory};
use profile::Profile;
use records::{RecordsDoctor, RecordsPatient, RecordsPharma};
use register::Register;
use role_selection::RoleSelection;
use splash::Splash;

/// Application routes. Paths mirror `devayu_types::ROUTES`.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(LayoutShell)]
        #[route("/")]
        Splash {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/role-selection")]
        RoleSelection {},
        #[layout(AuthGuard)]
            #[route("/dashboard-patient")]
            DashboardPatient {},
            #[route("/dashboard-doctor")]
            DashboardDoctor {},
            #[route("/dashboard-pharma")]
            DashboardPharma {},
            #[route("/appointments-patient")]
            AppointmentsPatient {},
            #[route("/appointments-doctor")]
            AppointmentsDoctor {},
            #[route("/appointments-pharma")]
            AppointmentsPharma {},
            #[route("/records-patient")]
            RecordsPatient {},
            #[route("/records-doctor")]
            RecordsDoctor {},
            #[route("/records-pharma")]
            RecordsPharma {},
            #[route("/pharmacy")]
            Pharmacy {},
            #[route("/profile")]
            Profile {},
            #[route("/consultations")]
            Consultations {},
            #[route("/inventory")]
            Inventory {},
        #[end_layout]
        #[route("/:..route")]
        NotFound { route: Vec<String> },
    #[end_layout]
}

/// Current calendar date, used to date new records and default date inputs.
pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Router target for a path produced by the shared route table.
pub fn route_for(path: &str) -> Route {
    path.parse().unwrap_or_else(|_| Route::NotFound {
        route: path
            .trim_start_matches('/')
            .split('/')
            .map(str::to_string)
            .collect(),
    })
}

/// Wraps every route. Renders the bottom navigation unless the current path
/// is one of the chromeless entry screens.
#[component]
fn LayoutShell() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let path = route.to_string();

    // Storage may have been written elsewhere (another tab, a page that
    // held its own store) since the last navigation.
    use_effect(use_reactive!(|(path,)| {
        tracing::trace!(%path, "route changed, re-reading session");
        session.refresh();
    }));

    if hide_chrome(&path) {
        return rsx! { Outlet::<Route> {} };
    }

    let items = compute_items(session.stored_role(), &path);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            main { class: "app-content",
                Outlet::<Route> {}
            }
            BottomNav {
                for item in items {
                    Link { key: "{item.path}", to: route_for(&item.path),
                        BottomNavItem { label: item.label.to_string(), active: item.active,
                            {nav_icon(item.icon)}
                        }
                    }
                }
            }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon { icon: LdLayoutDashboard, width: 20, height: 20 } },
        NavIcon::Calendar => rsx! { Icon { icon: LdCalendar, width: 20, height: 20 } },
        NavIcon::File => rsx! { Icon { icon: LdFileText, width: 20, height: 20 } },
        NavIcon::Pill => rsx! { Icon { icon: LdPill, width: 20, height: 20 } },
        NavIcon::User => rsx! { Icon { icon: LdUser, width: 20, height: 20 } },
    }
}

/// Sends signed-out visitors of protected routes to `/login` when the guard
/// is enabled in `portal.toml`.
#[component]
fn AuthGuard() -> Element {
    let route: Route = use_route();
    let session = use_session();
    let config: PortalConfig = use_context();
    let path = route.to_string();

    match session.access_redirect(&path, config.routing.guard_protected_routes) {
        Some(target) => {
            tracing::debug!(%path, %target, "protected route while signed out");
            navigator().replace(route_for(target));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => rsx! { Outlet::<Route> {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devayu_types::{resolve, Page, ROUTES, WILDCARD};
    use pretty_assertions::assert_eq;

    #[test]
    fn every_declared_path_has_a_router_variant() {
        for entry in ROUTES.iter().filter(|e| e.path != WILDCARD) {
            let route = route_for(entry.path);
            assert!(
                !matches!(route, Route::NotFound { .. }),
                "{} fell through to NotFound",
                entry.path
            );
            assert_eq!(route.to_string(), entry.path);
        }
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        for path in ["/nope", "/dashboard", "/dashboard-admin", "/profile/edit"] {
            assert!(matches!(route_for(path), Route::NotFound { .. }), "{path}");
            assert_eq!(resolve(path).page, Page::NotFound);
        }
    }

    #[test]
    fn protected_variants_match_the_table() {
        let guarded = [
            Route::DashboardDoctor {},
            Route::AppointmentsPharma {},
            Route::RecordsPatient {},
            Route::Pharmacy {},
            Route::Profile {},
            Route::Consultations {},
            Route::Inventory {},
        ];
        for route in guarded {
            assert!(resolve(&route.to_string()).protected, "{route}");
        }
        for route in [Route::Splash {}, Route::Login {}, Route::Register {}, Route::RoleSelection {}] {
            assert!(!resolve(&route.to_string()).protected, "{route}");
        }
    }

    #[test]
    fn nav_targets_are_routable() {
        for role in devayu_types::ALL_ROLES {
            for item in compute_items(Some(*role), "/") {
                assert!(!matches!(route_for(&item.path), Route::NotFound { .. }), "{}", item.path);
            }
        }
    }
}
