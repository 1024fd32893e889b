use dioxus::prelude::*;

use api::{ApiConfig, ConfigError, HttpUserStore, API_URL_VAR};
use ui::UserManager;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Read the backend location once at startup
    let config = use_hook(ApiConfig::from_env);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match config {
            Ok(config) => rsx! {
                UserManager { store: HttpUserStore::new(&config) }
            },
            Err(err) => rsx! {
                ConfigErrorView { error: err }
            },
        }
    }
}

/// Shown instead of the manager when the backend URL is unusable.
#[component]
fn ConfigErrorView(error: ConfigError) -> Element {
    use_hook(|| tracing::error!("Invalid configuration: {}", error));

    rsx! {
        div {
            class: "config-error",
            h1 { "Configuration error" }
            p { "{error}" }
            p { "Set {API_URL_VAR} to the users endpoint, e.g. http://localhost:3000/users." }
        }
    }
}
