use crate::routes::appointments::status_badge;
use crate::routes::{route_for, Route};
use crate::session::use_session;
use devayu_types::bookings::{count_with_status, demo_bookings, BookingKind};
use devayu_types::{appointments_path, records_path, Role};
use devayu_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle};
use dioxus::prelude::*;

/// Number of bookings previewed under the summary.
const PREVIEW_COUNT: usize = 3;

fn greeting(role: Role, name: &str) -> String {
    match role {
        Role::Patient => format!("Hello {name}!"),
        Role::Doctor => format!("Welcome, Dr. {name}!"),
        Role::Pharma => format!("Welcome, {name}!"),
    }
}

fn subtitle(role: Role) -> &'static str {
    match role {
        Role::Patient => "Here is an overview of your health today.",
        Role::Doctor => "Here is your schedule for today.",
        Role::Pharma => "Here is how your pharmacy is doing.",
    }
}

#[component]
pub fn DashboardPatient() -> Element {
    rsx! { RoleDashboard { role: Role::Patient } }
}

#[component]
pub fn DashboardDoctor() -> Element {
    rsx! { RoleDashboard { role: Role::Doctor } }
}

#[component]
pub fn DashboardPharma() -> Element {
    rsx! { RoleDashboard { role: Role::Pharma } }
}

/// Greeting, per-status booking counts and the next few bookings.
#[component]
fn RoleDashboard(role: Role) -> Element {
    let session = use_session();
    let name = session.current.read().user_name.clone();
    let bookings = demo_bookings(role);
    let kind = BookingKind::for_role(role);
    let section = match kind {
        BookingKind::PharmacyOrder => "Recent Orders",
        _ => "Appointments",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page",
            PageHeader {
                div {
                    PageTitle { "{greeting(role, &name)}" }
                    PageSubtitle { "{subtitle(role)}" }
                }
            }

            div { class: "stat-grid",
                for status in kind.filters().iter().copied() {
                    Card { key: "{status}", class: "stat-card",
                        CardContent {
                            div { class: "stat-value", "{count_with_status(&bookings, status)}" }
                            div { class: "stat-label", "{status}" }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "{section}" }
                    CardDescription {
                        Link { to: route_for(&appointments_path(role)), "View all" }
                    }
                }
                CardContent {
                    ul { class: "item-list",
                        for booking in bookings.iter().take(PREVIEW_COUNT) {
                            li { key: "{booking.id}", class: "item-row",
                                div {
                                    div { class: "item-title", "{booking.counterpart}" }
                                    div { class: "item-meta",
                                        "{booking.detail} · {booking.date_label()} · {booking.time}"
                                    }
                                }
                                {status_badge(booking.status)}
                            }
                        }
                    }
                }
            }

            div { class: "quick-links",
                Link { to: route_for(&records_path(role)), class: "quick-link", "Records" }
                Link { to: Route::Profile {}, class: "quick-link", "Profile" }
            }
        }
    }
}
