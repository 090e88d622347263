use crate::routes::Route;
use crate::session::use_session;
use devayu_types::{PasswordChange, ProfileEdit, DEFAULT_USER_EMAIL};
use devayu_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, CardHeader, CardTitle, DialogContent, DialogDescription,
    DialogRoot, DialogTitle, Input, Label, PageActions, PageHeader, PageTitle,
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLock, LdLogOut, LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use std::collections::HashMap;

/// Account details with edit, password change, sign-out and deletion.
#[component]
pub fn Profile() -> Element {
    let mut session = use_session();
    let current = session.current.read().clone();
    let display_email = current
        .user_email
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_EMAIL.to_string());

    let mut editing = use_signal(|| false);
    let mut edit = use_signal(ProfileEdit::default);
    let mut edit_errors = use_signal(HashMap::<String, String>::new);

    let mut show_password = use_signal(|| false);
    let mut password = use_signal(PasswordChange::default);
    let mut password_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<String>::None);

    let mut show_delete = use_signal(|| false);

    let start_edit = {
        let name = current.user_name.clone();
        let email = display_email.clone();
        move |_: MouseEvent| {
            edit.set(ProfileEdit {
                full_name: name.clone(),
                email: email.clone(),
            });
            edit_errors.set(HashMap::new());
            editing.set(true);
        }
    };

    let save_profile = move |_: MouseEvent| {
        let form = edit();
        if let Err(e) = form.validate() {
            edit_errors.set(e.field_errors);
            return;
        }
        match session.update_profile(form.full_name.trim(), form.email.trim()) {
            Ok(()) => {
                editing.set(false);
                notice.set(Some("Profile updated".to_string()));
            }
            Err(e) => notice.set(Some(e.message)),
        }
    };

    let change_password = move |_: MouseEvent| {
        if let Err(e) = password().validate() {
            password_errors.set(e.field_errors);
            return;
        }
        tracing::info!("password changed");
        password.set(PasswordChange::default());
        password_errors.set(HashMap::new());
        show_password.set(false);
        notice.set(Some("Password changed successfully!".to_string()));
    };

    let logout = move |_: MouseEvent| {
        if let Err(e) = session.logout() {
            notice.set(Some(e.message));
            return;
        }
        navigator().push(Route::Login {});
    };

    let delete_account = move |_: MouseEvent| {
        if let Err(e) = session.delete_account() {
            notice.set(Some(e.message));
            return;
        }
        navigator().push(Route::Register {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page",
            PageHeader {
                PageTitle { "Profile" }
                if !editing() {
                    PageActions {
                        Button { variant: ButtonVariant::Outline, onclick: start_edit,
                            Icon { icon: LdPencil, width: 18, height: 18 }
                            "Edit Profile"
                        }
                    }
                }
            }

            if let Some(msg) = notice() {
                div { class: "page-notice", "{msg}" }
            }

            Card {
                CardContent {
                    if editing() {
                        div { class: "profile-form",
                            div { class: "form-field",
                                Label { html_for: "profile_name", "Full Name" }
                                Input {
                                    id: "profile_name",
                                    value: edit.read().full_name.clone(),
                                    on_input: move |e: FormEvent| edit.write().full_name = e.value(),
                                    error: edit_errors.read().get("full_name").cloned(),
                                }
                            }
                            div { class: "form-field",
                                Label { html_for: "profile_email", "Email" }
                                Input {
                                    input_type: "email",
                                    id: "profile_email",
                                    value: edit.read().email.clone(),
                                    on_input: move |e: FormEvent| edit.write().email = e.value(),
                                    error: edit_errors.read().get("email").cloned(),
                                }
                            }
                            div { class: "item-actions",
                                Button { variant: ButtonVariant::Ghost, onclick: move |_| editing.set(false),
                                    "Cancel"
                                }
                                Button { onclick: save_profile, "Save Changes" }
                            }
                        }
                    } else {
                        div { class: "profile-summary",
                            div { class: "profile-avatar", "{initial(&current.user_name)}" }
                            div {
                                h2 { class: "item-title", "{current.user_name}" }
                                div { class: "item-meta", "{display_email}" }
                                Badge { variant: BadgeVariant::Secondary, "{current.role.title()}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Security" } }
                CardContent {
                    Button {
                        variant: ButtonVariant::Outline,
                        full_width: true,
                        onclick: move |_| show_password.set(true),
                        Icon { icon: LdLock, width: 18, height: 18 }
                        "Change Password"
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Account" } }
                CardContent {
                    div { class: "profile-account-actions",
                        Button { variant: ButtonVariant::Outline, full_width: true, onclick: logout,
                            Icon { icon: LdLogOut, width: 18, height: 18 }
                            "Logout"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            full_width: true,
                            onclick: move |_| show_delete.set(true),
                            Icon { icon: LdTrash2, width: 18, height: 18 }
                            "Delete Account"
                        }
                    }
                }
            }

            DialogRoot {
                open: show_password(),
                on_open_change: move |open: bool| show_password.set(open),
                DialogContent {
                    DialogTitle { "Change Password" }
                    DialogDescription { "Enter a new password of at least 6 characters." }
                    div { class: "form-field",
                        Label { html_for: "new_password", "New Password" }
                        Input {
                            input_type: "password",
                            id: "new_password",
                            value: password.read().new_password.clone(),
                            on_input: move |e: FormEvent| password.write().new_password = e.value(),
                            error: password_errors.read().get("new_password").cloned(),
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "confirm_new_password", "Confirm Password" }
                        Input {
                            input_type: "password",
                            id: "confirm_new_password",
                            value: password.read().confirm_password.clone(),
                            on_input: move |e: FormEvent| password.write().confirm_password = e.value(),
                            error: password_errors.read().get("confirm_password").cloned(),
                        }
                    }
                    div { class: "item-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                password.set(PasswordChange::default());
                                password_errors.set(HashMap::new());
                                show_password.set(false);
                            },
                            "Cancel"
                        }
                        Button { onclick: change_password, "Update Password" }
                    }
                }
            }

            AlertDialogRoot {
                open: show_delete(),
                on_open_change: move |open: bool| show_delete.set(open),
                AlertDialogContent {
                    AlertDialogTitle { "Delete Account" }
                    AlertDialogDescription {
                        "This removes everything stored for this portal on this device. This action cannot be undone."
                    }
                    AlertDialogActions {
                        AlertDialogCancel { "Cancel" }
                        AlertDialogAction { on_click: delete_account, "Delete" }
                    }
                }
            }
        }
    }
}

/// First letter of the name, uppercased, for the avatar.
fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::initial;

    #[test]
    fn avatar_initial() {
        assert_eq!(initial("asha"), "A");
        assert_eq!(initial("éloise"), "É");
        assert_eq!(initial(""), "");
    }
}
