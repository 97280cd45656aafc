use dioxus::prelude::*;

use crate::{client::components::status_badge::dot_class, model::character::Character};

#[component]
pub fn CharacterCard(character: Character, on_select: EventHandler<i64>) -> Element {
    let id = character.id;
    let dot = dot_class(character.life_status());

    rsx!(
        div {
            class: "card bg-base-200 shadow-sm cursor-pointer transition-transform hover:scale-105 hover:shadow-portal",
            onclick: move |_| on_select.call(id),
            div { class: "card-body p-4",
                div { class: "flex items-center gap-4",
                    div { class: "relative shrink-0",
                        img {
                            class: "w-16 h-16 rounded-lg object-cover",
                            src: "{character.image}",
                            alt: "{character.name}",
                        }
                        div { class: "absolute -bottom-1 -right-1 w-5 h-5 rounded-full border-2 border-base-200 {dot}" }
                    }
                    div { class: "flex-1 min-w-0",
                        h3 { class: "font-semibold truncate", "{character.name}" }
                        p { class: "text-sm text-base-content/70",
                            "{character.species} • {character.status}"
                        }
                        p { class: "text-xs text-base-content/60 truncate",
                            "{character.origin.name}"
                        }
                    }
                }
            }
        }
    )
}
