use dioxus::prelude::*;

use crate::{client::components::StatusBadge, model::character::Character};

#[component]
pub fn CharacterTable(characters: Vec<Character>, on_select: EventHandler<i64>) -> Element {
    rsx!(
        div {
            class: "card bg-base-200 shadow-sm overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Character" }
                        th { "Status" }
                        th { "Origin" }
                        th { "Location" }
                    }
                }
                tbody {
                    {characters.iter().map(|c| {
                        let id = c.id;
                        rsx! {
                            tr {
                                key: "{c.id}",
                                class: "hover:bg-base-300 cursor-pointer",
                                onclick: move |_| on_select.call(id),
                                td {
                                    div {
                                        class: "flex gap-3 items-center",
                                        img {
                                            class: "w-10 h-10 rounded-lg object-cover",
                                            src: "{c.image}",
                                            alt: "{c.name}",
                                        }
                                        div {
                                            p { class: "font-medium", "{c.name}" }
                                            p { class: "text-sm text-base-content/60", "{c.species}" }
                                        }
                                    }
                                }
                                td {
                                    StatusBadge { status: c.status.clone() }
                                }
                                td { class: "max-w-xs truncate text-base-content/70",
                                    "{c.origin.name}"
                                }
                                td { class: "max-w-xs truncate text-base-content/70",
                                    "{c.location.name}"
                                }
                            }
                        }
                    })}
                }
            }
        }
    )
}
