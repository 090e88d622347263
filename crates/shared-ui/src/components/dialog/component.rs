//! Modal dialogs: a free-form [`DialogRoot`] for short forms and an
//! [`AlertDialogRoot`] for confirming destructive actions.

use dioxus::prelude::*;
use dioxus_primitives::{alert_dialog, dialog};

fn class(name: &'static str) -> Attribute {
    Attribute::new("class", name, None, false)
}

#[component]
pub fn DialogRoot(mut props: dialog::DialogRootProps) -> Element {
    props.attributes.push(class("dialog-overlay"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dialog::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: dialog::DialogContentProps) -> Element {
    props.class.get_or_insert_with(|| "dialog-content".to_string());

    rsx! {
        dialog::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: dialog::DialogTitleProps) -> Element {
    props.attributes.push(class("dialog-title"));

    rsx! {
        dialog::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: dialog::DialogDescriptionProps) -> Element {
    props.attributes.push(class("dialog-description"));

    rsx! {
        dialog::DialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogRoot(mut props: alert_dialog::AlertDialogRootProps) -> Element {
    props.attributes.push(class("dialog-overlay"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        alert_dialog::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: alert_dialog::AlertDialogContentProps) -> Element {
    props.class.get_or_insert_with(|| "dialog-content".to_string());

    rsx! {
        alert_dialog::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: alert_dialog::AlertDialogTitleProps) -> Element {
    props.attributes.push(class("dialog-title"));

    rsx! {
        alert_dialog::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: alert_dialog::AlertDialogDescriptionProps) -> Element {
    props.attributes.push(class("dialog-description"));

    rsx! {
        alert_dialog::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: alert_dialog::AlertDialogActionsProps) -> Element {
    props.attributes.push(class("dialog-actions"));

    rsx! {
        alert_dialog::AlertDialogActions { ..props }
    }
}

/// Confirming button; styled as destructive.
#[component]
pub fn AlertDialogAction(mut props: alert_dialog::AlertDialogActionProps) -> Element {
    props.attributes.push(class("button"));
    props
        .attributes
        .push(Attribute::new("data-style", "destructive", None, false));

    rsx! {
        alert_dialog::AlertDialogAction { ..props }
    }
}

#[component]
pub fn AlertDialogCancel(mut props: alert_dialog::AlertDialogCancelProps) -> Element {
    props.attributes.push(class("button"));
    props
        .attributes
        .push(Attribute::new("data-style", "outline", None, false));

    rsx! {
        alert_dialog::AlertDialogCancel { ..props }
    }
}
