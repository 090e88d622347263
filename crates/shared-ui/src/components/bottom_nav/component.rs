use dioxus::prelude::*;

/// Fixed bar along the bottom of the viewport holding [`BottomNavItem`]s.
#[component]
pub fn BottomNav(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "bottom-nav", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav {
            ..merged,
            div { class: "bottom-nav-items", {children} }
        }
    }
}

/// One navigation entry: an icon stacked over a short label.
///
/// The entry does not navigate by itself; wrap it in a router link.
#[component]
pub fn BottomNavItem(
    label: String,
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "bottom-nav-item", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            ..merged,
            span { class: "bottom-nav-icon", {children} }
            span { class: "bottom-nav-label", "{label}" }
        }
    }
}
