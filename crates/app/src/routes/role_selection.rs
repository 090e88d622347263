use crate::routes::{route_for, Route};
use crate::session::use_session;
use devayu_types::{dashboard_path, Role, ALL_ROLES};
use devayu_ui::{Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use dioxus::prelude::*;

/// Pick the role to use for this session, then land on its dashboard.
#[component]
pub fn RoleSelection() -> Element {
    let mut session = use_session();
    let mut selected = use_signal(|| Option::<Role>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_continue = move |_: MouseEvent| {
        let Some(role) = selected() else {
            return;
        };
        match session.select_role(role) {
            Ok(()) => {
                navigator().push(route_for(&dashboard_path(role)));
            }
            Err(e) => error_msg.set(Some(e.message)),
        }
    };

    let handle_back = move |_: MouseEvent| {
        if let Err(e) = session.abandon_login() {
            error_msg.set(Some(e.message));
            return;
        }
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Select Your Role" }
                    CardDescription { "Choose how you want to use the portal" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    div { class: "role-grid",
                        for role in ALL_ROLES.iter().copied() {
                            div {
                                key: "{role}",
                                class: "role-option",
                                "data-selected": if selected() == Some(role) { "true" } else { "false" },
                                onclick: move |_| selected.set(Some(role)),
                                h3 { "{role.title()}" }
                                p { "{role.description()}" }
                            }
                        }
                    }
                }

                CardFooter {
                    Button { variant: devayu_ui::ButtonVariant::Ghost, onclick: handle_back,
                        "Back to Login"
                    }
                    Button { disabled: selected().is_none(), onclick: handle_continue,
                        "Continue"
                    }
                }
            }
        }
    }
}
