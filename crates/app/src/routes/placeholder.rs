use devayu_types::Page;
use devayu_ui::{Button, ButtonVariant};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronLeft;
use dioxus_free_icons::Icon;

#[component]
pub fn Consultations() -> Element {
    rsx! { Placeholder { title: Page::Consultations.title() } }
}

#[component]
pub fn Inventory() -> Element {
    rsx! { Placeholder { title: Page::Inventory.title() } }
}

/// Stand-in for sections that have no content yet.
#[component]
fn Placeholder(title: &'static str) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "placeholder-page",
            div { class: "placeholder-icon", "📋" }
            h1 { class: "placeholder-title", "{title}" }
            p { class: "placeholder-message", "This section is coming soon." }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| navigator().go_back(),
                Icon { icon: LdChevronLeft, width: 20, height: 20 }
                "Go Back"
            }
        }
    }
}
