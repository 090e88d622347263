use crate::routes::Route;
use crate::session::use_session;
use crate::timer::sleep;
use devayu_types::{LoginForm, PortalConfig};
use devayu_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};
use dioxus::prelude::*;
use std::collections::HashMap;

/// Sign-in with email and password. Any non-empty credentials are accepted
/// after a short simulated delay; the visitor then picks a role.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let config: PortalConfig = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let auth_delay = config.timing.auth_delay();
    let incomplete = email().trim().is_empty() || password().trim().is_empty();

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        if let Err(e) = form.validate() {
            field_errors.set(e.field_errors);
            return;
        }
        field_errors.set(HashMap::new());

        loading.set(true);
        sleep(auth_delay).await;
        match session.login(form.email.trim()) {
            Ok(()) => {
                navigator().push(Route::RoleSelection {});
            }
            Err(e) => error_msg.set(Some(e.message)),
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Welcome Back" }
                    CardDescription { "Sign in to continue to {config.branding.app_name}" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                                error: field_errors().get("email").cloned(),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                                error: field_errors().get("password").cloned(),
                            }
                        }
                        Button {
                            button_type: "submit",
                            full_width: true,
                            disabled: loading() || incomplete,
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Sign up" }
                    }
                }
            }
        }
    }
}
