use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowLeft;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{MessageCard, Page},
    router::Route,
};

/// Rebuilds the requested path from the catch-all route segments.
///
/// The router hands over percent-decoded segments; formatting them back through the route
/// re-encodes them, so the path matches what was typed in the address bar.
pub fn attempted_path(segments: &[String]) -> String {
    Route::NotFound {
        segments: segments.to_vec(),
    }
    .to_string()
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = attempted_path(&segments);

    use_effect(use_reactive((&path,), |(path,)| {
        tracing::error!(
            "404 Error: User attempted to access non-existent route: {}",
            path
        );
    }));

    rsx!(
        Title { "Not Found | Rickdex" }
        Page { class: "flex items-center justify-center",
            MessageCard {
                title: "Portal Malfunction!",
                message: "The page you're looking for doesn't exist in this reality.",
                code { class: "text-success text-xs break-all", "{path}" }
                button {
                    class: "btn btn-success w-full flex gap-2",
                    onclick: move |_| {
                        navigator.push(Route::CharacterList {});
                    },
                    Icon { width: 16, height: 16, icon: FaArrowLeft }
                    "Return to Character List"
                }
            }
        }
    )
}
