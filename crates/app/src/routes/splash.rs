use crate::routes::route_for;
use crate::session::use_session;
use crate::timer::use_scoped_delay;
use devayu_types::{PortalConfig, SplashState};
use dioxus::prelude::*;

/// Brand screen shown at `/`. After the configured delay it replaces
/// itself with the dashboard for a signed-in visitor, or `/login`.
#[component]
pub fn Splash() -> Element {
    let session = use_session();
    let config: PortalConfig = use_context();
    let nav = navigator();

    use_scoped_delay(config.timing.splash_delay(), move || {
        let state = SplashState::after_delay(&session.store());
        if let Some(target) = state.target_path() {
            tracing::debug!(%target, "splash finished");
            nav.replace(route_for(&target));
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "splash-page",
            div { class: "splash-logo", "+" }
            h1 { class: "splash-title", "{config.branding.app_name}" }
            p { class: "splash-tagline", "{config.branding.tagline}" }
            div { class: "splash-spinner" }
        }
    }
}
