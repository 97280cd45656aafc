use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{config::Config, query::QueryClient, router::Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error, falling back to defaults: {}", e);
            Config::default()
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = load_config();
        tracing::info!(
            "Using character API at {} (fresh for {}s)",
            config.api_base_url,
            config.stale_time.num_seconds()
        );

        QueryClient::new(&config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/daisyui@5" }
        document::Script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }
        document::Stylesheet { href: MAIN_CSS }
        div { "data-theme": "dark",
            Router::<Route> {}
        }
    }
}
