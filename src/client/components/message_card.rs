use dioxus::prelude::*;

/// Centered card for loading, error and not-found states
#[component]
pub fn MessageCard(title: String, message: Option<String>, children: Element) -> Element {
    rsx!(
        div { class: "flex items-center justify-center py-12",
            div { class: "card bg-base-200 shadow-sm w-full max-w-md text-center",
                div { class: "card-body items-center gap-4",
                    h2 { class: "card-title text-2xl", "{title}" }
                    if let Some(message) = message {
                        p { class: "text-base-content/70", "{message}" }
                    }
                    {children}
                }
            }
        }
    )
}
