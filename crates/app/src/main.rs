use devayu_types::PortalConfig;
use dioxus::prelude::*;

mod config;
mod routes;
mod session;
mod storage;
mod timer;

use routes::Route;
use session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    let config = config::load();
    tracing::info!(app = %config.branding.app_name, "starting portal");
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| config::load().clone());
    use_context_provider(|| {
        tracing::debug!(platform = client_platform(), "opening session storage");
        SessionState::new(storage::default_store())
    });
    let config: PortalConfig = use_context();

    rsx! {
        document::Title { "{config.branding.app_name}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
