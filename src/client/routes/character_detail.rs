use std::rc::Rc;

use chrono::Utc;
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowLeft, FaCalendar, FaFilm, FaGlobe, FaLocationDot, FaUser, FaVenusMars,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{LoadingSpinner, MessageCard, Page, SpinnerSize, StatusBadge},
        error::ApiError,
        query::{QueryClient, QueryState},
        router::Route,
        util::time::{format_created_date, format_relative_time},
    },
    model::character::Character,
};

/// Parse the `:id` route parameter into a character ID
pub fn parse_character_id(param: &str) -> Result<i64, ApiError> {
    let param = param.trim();
    if param.is_empty() {
        return Err(ApiError::MissingParameter("id"));
    }

    match param.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidParameter {
            name: "id",
            value: param.to_string(),
        }),
    }
}

/// What the detail page renders for a given parameter and query snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading,
    Failed(ApiError),
    NotFound,
    Loaded(Rc<Character>),
}

/// Picks the view for a route parameter and the current query snapshot.
///
/// A bad parameter always fails. Otherwise cached data wins over any later error, so a failed
/// refetch keeps the profile on screen. A 404 gets the dedicated "Character Not Found" view
/// rather than the generic "Portal Malfunction!" error shown for every other failure.
pub fn detail_view(id: &Result<i64, ApiError>, state: &QueryState<Character>) -> DetailView {
    if let Err(err) = id {
        return DetailView::Failed(err.clone());
    }

    if let Some(data) = &state.data {
        return DetailView::Loaded(Rc::clone(data));
    }

    match &state.error {
        Some(err) if err.is_not_found() => DetailView::NotFound,
        Some(err) => DetailView::Failed(err.clone()),
        None => DetailView::Loading,
    }
}

pub fn episode_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };

    format!("This character appears in {count} episode{plural} throughout the multiverse.")
}

/// Starts loading `requested` and publishes its snapshot once settled, unless the page has
/// since moved to another character.
fn load_character(
    client: QueryClient,
    requested: i64,
    current: Signal<Option<i64>>,
    mut query: Signal<QueryState<Character>>,
) {
    let pending = client.character(requested);
    query.set(client.character_state(requested));

    spawn(async move {
        if let Err(err) = pending.await {
            tracing::warn!("Failed to load character {}: {}", requested, err);
        }

        if *current.peek() == Some(requested) {
            query.set(client.character_state(requested));
        }
    });
}

#[component]
pub fn CharacterDetail(id: String) -> Element {
    let client = use_context::<QueryClient>();
    let navigator = use_navigator();

    let mut current = use_signal(|| None::<i64>);
    let mut query = use_signal(QueryState::<Character>::default);

    use_effect(use_reactive((&id,), move |(id,)| match parse_character_id(&id) {
        Ok(character_id) => {
            current.set(Some(character_id));
            load_character(client.clone(), character_id, current, query);
        }
        Err(err) => {
            tracing::warn!("Invalid character route parameter: {}", err);
            current.set(None);
            query.set(QueryState::default());
        }
    }));

    let parsed = parse_character_id(&id);
    let view = detail_view(&parsed, &query.read());

    let back = move |_: MouseEvent| {
        navigator.push(Route::CharacterList {});
    };

    match view {
        DetailView::Loading => rsx!(
            Title { "Loading | Rickdex" }
            Page { class: "flex items-center justify-center",
                MessageCard {
                    title: "Loading character",
                    message: "Loading character from the multiverse...",
                    LoadingSpinner { size: SpinnerSize::Medium }
                }
            }
        ),
        DetailView::Failed(err) => {
            let message = format!("Error: {}", err);
            let hint = err.user_message();

            rsx!(
                Title { "Error | Rickdex" }
                Page { class: "flex items-center justify-center",
                    MessageCard {
                        title: "Portal Malfunction!",
                        message: message,
                        p { class: "text-sm text-base-content/60", "{hint}" }
                        BackButton { label: "Return to Character List", onclick: back }
                    }
                }
            )
        }
        DetailView::NotFound => rsx!(
            Title { "Not Found | Rickdex" }
            Page { class: "flex items-center justify-center",
                MessageCard {
                    title: "Character Not Found",
                    message: "This character doesn't exist in any known dimension.",
                    BackButton { label: "Return to Character List", onclick: back }
                }
            }
        ),
        DetailView::Loaded(character) => rsx!(
            Title { "{character.name} | Rickdex" }
            Meta {
                name: "description",
                content: "{character.name}: {character.species}, {character.status}"
            }
            Page { class: "flex flex-col items-center",
                div { class: "w-full max-w-[1440px] flex flex-col gap-6",
                    div {
                        BackButton { label: "Back to Characters", onclick: back }
                    }
                    CharacterProfile { character: (*character).clone() }
                }
            }
        ),
    }
}

#[component]
fn BackButton(label: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx!(
        button {
            class: "btn btn-success flex gap-2",
            onclick: move |evt| onclick.call(evt),
            Icon { width: 16, height: 16, icon: FaArrowLeft }
            "{label}"
        }
    )
}

#[component]
fn CharacterProfile(character: Character) -> Element {
    let created = format_created_date(&character.created);
    let created_ago = format_relative_time(&character.created, Utc::now());
    let episode_count = character.episode_count();
    let episodes = episode_summary(episode_count);

    rsx!(
        div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
            div { class: "lg:col-span-1",
                div { class: "card bg-base-200 shadow-sm overflow-hidden",
                    figure { class: "relative",
                        img {
                            class: "w-full h-auto object-cover",
                            src: "{character.image}",
                            alt: "{character.name}",
                        }
                        div { class: "absolute top-4 right-4",
                            StatusBadge { status: character.status.clone() }
                        }
                    }
                    div { class: "card-body",
                        h1 { class: "text-3xl font-bold text-portal", "{character.name}" }
                        div { class: "flex items-center gap-2 text-base-content/70",
                            Icon { width: 16, height: 16, icon: FaUser }
                            span { "{character.species} • {character.gender}" }
                        }
                    }
                }
            }

            div { class: "lg:col-span-2 flex flex-col gap-6",
                div { class: "card bg-base-200 shadow-sm",
                    div { class: "card-body gap-4",
                        h2 { class: "card-title", "Character Information" }
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                            InfoTile { label: "Species", value: character.species.clone(),
                                Icon { width: 20, height: 20, icon: FaUser }
                            }
                            InfoTile { label: "Gender", value: character.gender.clone(),
                                Icon { width: 20, height: 20, icon: FaVenusMars }
                            }
                            if !character.kind.is_empty() {
                                InfoTile { label: "Type", value: character.kind.clone(),
                                    Icon { width: 20, height: 20, icon: FaUser }
                                }
                            }
                            InfoTile { label: "Created", value: "{created} ({created_ago})",
                                Icon { width: 20, height: 20, icon: FaCalendar }
                            }
                        }
                    }
                }

                div { class: "card bg-base-200 shadow-sm",
                    div { class: "card-body gap-4",
                        h2 { class: "card-title", "Locations" }
                        InfoTile { label: "Origin", value: character.origin.name.clone(),
                            Icon { width: 20, height: 20, icon: FaGlobe }
                        }
                        InfoTile { label: "Last Known Location", value: character.location.name.clone(),
                            Icon { width: 20, height: 20, icon: FaLocationDot }
                        }
                    }
                }

                div { class: "card bg-base-200 shadow-sm",
                    div { class: "card-body gap-4",
                        h2 { class: "card-title flex gap-2",
                            Icon { width: 20, height: 20, icon: FaFilm }
                            "Episodes ({episode_count})"
                        }
                        p { class: "text-base-content/70", "{episodes}" }
                    }
                }
            }
        }
    )
}

#[component]
fn InfoTile(label: String, value: String, children: Element) -> Element {
    rsx!(
        div { class: "flex items-center gap-3 p-4 rounded-lg bg-base-300",
            div { class: "text-success", {children} }
            div {
                p { class: "text-sm text-base-content/60", "{label}" }
                p { class: "font-medium", "{value}" }
            }
        }
    )
}
