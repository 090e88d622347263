use crate::routes::Route;
use crate::session::use_session;
use crate::timer::sleep;
use devayu_types::{PortalConfig, RegisterForm};
use devayu_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};
use dioxus::prelude::*;
use std::collections::HashMap;

/// Account creation. Stores the name and email in the session and signs the
/// visitor in as a patient; the phone number is collected but not kept.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let config: PortalConfig = use_context();
    let mut form = use_signal(RegisterForm::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let auth_delay = config.timing.auth_delay();
    let incomplete = {
        let f = form.read();
        [&f.full_name, &f.email, &f.password, &f.confirm_password]
            .iter()
            .any(|v| v.trim().is_empty())
    };

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        let submitted = form();
        if let Err(e) = submitted.validate() {
            field_errors.set(e.field_errors);
            return;
        }
        field_errors.set(HashMap::new());

        loading.set(true);
        sleep(auth_delay).await;
        match session.register(submitted.full_name.trim(), submitted.email.trim()) {
            Ok(()) => {
                navigator().push(Route::RoleSelection {});
            }
            Err(e) => error_msg.set(Some(e.message)),
        }
        loading.set(false);
    };

    let error_for = move |name: &str| field_errors.read().get(name).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Join {config.branding.app_name} today" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_register,
                        div { class: "auth-field",
                            Label { html_for: "full_name", "Full Name" }
                            Input {
                                id: "full_name",
                                placeholder: "John Doe",
                                value: form.read().full_name.clone(),
                                on_input: move |e: FormEvent| form.write().full_name = e.value(),
                                error: error_for("full_name"),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                value: form.read().email.clone(),
                                on_input: move |e: FormEvent| form.write().email = e.value(),
                                error: error_for("email"),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "phone", "Phone (optional)" }
                            Input {
                                input_type: "tel",
                                id: "phone",
                                placeholder: "+1 555 000 0000",
                                value: form.read().phone.clone(),
                                on_input: move |e: FormEvent| form.write().phone = e.value(),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Create a password",
                                value: form.read().password.clone(),
                                on_input: move |e: FormEvent| form.write().password = e.value(),
                                error: error_for("password"),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "confirm_password", "Confirm Password" }
                            Input {
                                input_type: "password",
                                id: "confirm_password",
                                placeholder: "Repeat your password",
                                value: form.read().confirm_password.clone(),
                                on_input: move |e: FormEvent| form.write().confirm_password = e.value(),
                                error: error_for("confirm_password"),
                            }
                        }
                        Button {
                            button_type: "submit",
                            full_width: true,
                            disabled: loading() || incomplete,
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
