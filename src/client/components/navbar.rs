use dioxus::prelude::*;

use crate::client::router::Route;

/// Layout shared by every route
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link {
                    to: Route::CharacterList {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl font-bold text-portal",
                            "Rickdex"
                        }
                        p { class: "text-xs",
                            "v0.1.0"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
