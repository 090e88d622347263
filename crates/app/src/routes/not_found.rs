use crate::routes::Route;
use devayu_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

/// Shown for any path outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    use_effect(use_reactive!(|path| {
        tracing::error!(%path, "404: no route for attempted path");
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "placeholder-page",
            div { class: "not-found-code", "404" }
            p { class: "placeholder-message", "Oops! Page not found" }
            div { class: "item-actions",
                Button {
                    onclick: move |_| {
                        navigator().push(Route::Splash {});
                    },
                    "Go to Home"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| navigator().go_back(),
                    "Go Back"
                }
            }
        }
    }
}
