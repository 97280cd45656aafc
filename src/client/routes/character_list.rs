use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowsRotate, FaChevronLeft, FaChevronRight, FaList, FaTableCells,
};
use dioxus_free_icons::Icon;

use crate::client::{
    components::{CharacterCard, CharacterTable, LoadingSpinner, MessageCard, Page, SpinnerSize},
    controller::{CharacterListController, PageRequest},
    query::QueryClient,
    router::Route,
    util::ViewMode,
};

/// Awaits `request` in the component's scope and applies it to the listing once settled.
///
/// The task is dropped with the component, which cancels the request if nobody else awaits it.
fn track(mut list: Signal<CharacterListController>, request: PageRequest) {
    spawn(async move {
        let page = request.settle().await;
        list.write().apply(page);
    });
}

#[component]
pub fn CharacterList() -> Element {
    let client = use_context::<QueryClient>();
    let navigator = use_navigator();

    let mut list = use_signal(|| CharacterListController::new(client));

    // Writes do not subscribe, so this only runs on mount
    use_effect(move || {
        let request = list.write().mount();
        track(list, request);
    });

    let (state, current_page, mode, label, can_go_next, can_go_previous) = {
        let list = list.read();
        (
            list.state().clone(),
            list.page(),
            list.view_mode(),
            list.page_label(),
            list.can_go_next(),
            list.can_go_previous(),
        )
    };
    let is_fetching = state.is_fetching;

    let refresh = move |_: MouseEvent| {
        let request = list.write().refresh();
        track(list, request);
    };
    let retry = move |_: MouseEvent| {
        let request = list.write().refresh();
        track(list, request);
    };
    let next = move |_: MouseEvent| {
        let request = list.write().next();
        if let Some(request) = request {
            track(list, request);
        }
    };
    let previous = move |_: MouseEvent| {
        let request = list.write().previous();
        if let Some(request) = request {
            track(list, request);
        }
    };
    let first = move |_: MouseEvent| {
        let request = list.write().first();
        if let Some(request) = request {
            track(list, request);
        }
    };

    let on_select = EventHandler::new(move |id: i64| {
        navigator.push(Route::CharacterDetail { id: id.to_string() });
    });

    let toggle_class = |target: ViewMode| {
        if mode == target {
            "btn btn-sm join-item btn-active btn-success"
        } else {
            "btn btn-sm join-item btn-ghost"
        }
    };
    let error_message = state
        .error
        .as_ref()
        .filter(|_| !is_fetching)
        .map(|err| format!("{} ({})", err.user_message(), err));

    rsx!(
        Title { "Characters | Rickdex" }
        Meta {
            name: "description",
            content: "Browse every character in the Rick and Morty multiverse."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-6",
                div { class: "card bg-base-200 shadow-sm",
                    div { class: "card-body flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4",
                        div {
                            h1 { class: "text-3xl font-bold text-portal", "Rick & Morty Characters" }
                            p { class: "text-base-content/70 mt-2",
                                "Explore the multiverse • {label}"
                            }
                        }
                        div { class: "flex items-center gap-2",
                            button {
                                class: "btn btn-sm btn-outline btn-success flex gap-2",
                                disabled: is_fetching,
                                onclick: refresh,
                                if is_fetching {
                                    LoadingSpinner { size: SpinnerSize::Small }
                                } else {
                                    Icon { width: 16, height: 16, icon: FaArrowsRotate }
                                }
                                if is_fetching { "Loading..." } else { "Refresh" }
                            }
                            div { class: "join",
                                button {
                                    class: toggle_class(ViewMode::Grid),
                                    title: ViewMode::Grid.label(),
                                    onclick: move |_| list.write().set_view_mode(ViewMode::Grid),
                                    Icon { width: 16, height: 16, icon: FaTableCells }
                                }
                                button {
                                    class: toggle_class(ViewMode::Table),
                                    title: ViewMode::Table.label(),
                                    onclick: move |_| list.write().set_view_mode(ViewMode::Table),
                                    Icon { width: 16, height: 16, icon: FaList }
                                }
                            }
                        }
                    }
                }

                if state.is_loading() {
                    div { class: "card bg-base-200 shadow-sm",
                        div { class: "card-body py-12 items-center",
                            LoadingSpinner { size: SpinnerSize::Large }
                            p { class: "mt-4 text-base-content/70",
                                "Loading characters from the multiverse..."
                            }
                        }
                    }
                }

                if let Some(message) = error_message {
                    MessageCard {
                        title: "Portal Malfunction!",
                        message: message,
                        div { class: "flex flex-wrap justify-center gap-2",
                            button {
                                class: "btn btn-success",
                                onclick: retry,
                                "Try Again"
                            }
                            if can_go_previous {
                                button {
                                    class: "btn btn-outline",
                                    onclick: first,
                                    "Return to First Page"
                                }
                            }
                        }
                    }
                }

                if let Some(data) = state.data.as_ref() {
                    {match mode {
                        ViewMode::Grid => rsx! {
                            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4",
                                for character in data.results.iter() {
                                    CharacterCard {
                                        key: "{character.id}",
                                        character: character.clone(),
                                        on_select,
                                    }
                                }
                            }
                        },
                        ViewMode::Table => rsx! {
                            CharacterTable {
                                characters: data.results.clone(),
                                on_select,
                            }
                        },
                    }}

                    div { class: "card bg-base-200 shadow-sm",
                        div { class: "card-body py-6 flex flex-row items-center justify-between",
                            button {
                                class: "btn btn-outline flex gap-2",
                                disabled: !can_go_previous || is_fetching,
                                onclick: previous,
                                Icon { width: 16, height: 16, icon: FaChevronLeft }
                                "Previous"
                            }
                            span { class: "text-sm text-base-content/70",
                                "Page {current_page} of {data.info.pages}"
                            }
                            button {
                                class: "btn btn-outline flex gap-2",
                                disabled: !can_go_next || is_fetching,
                                onclick: next,
                                "Next"
                                Icon { width: 16, height: 16, icon: FaChevronRight }
                            }
                        }
                    }
                }
            }
        }
    )
}
