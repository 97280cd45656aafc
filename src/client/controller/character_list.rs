use dioxus_logger::tracing;

use crate::{
    client::{
        query::{QueryClient, QueryFuture, QueryState},
        util::{
            pagination::{self, FIRST_PAGE},
            ViewMode,
        },
    },
    model::character::{CharacterPage, PageInfo},
};

/// A page load started by the controller; await [`settle`](Self::settle) and hand the result
/// to [`CharacterListController::apply`].
pub struct PageRequest {
    page: u32,
    pending: QueryFuture<CharacterPage>,
}

impl PageRequest {
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Waits for the request and returns the page it was for
    pub async fn settle(self) -> u32 {
        if let Err(err) = self.pending.await {
            tracing::warn!("Failed to load character page {}: {}", self.page, err);
        }

        self.page
    }
}

/// State of the character listing: current page, layout and the last applied snapshot.
///
/// Every transition that needs data returns a [`PageRequest`]. Transitions that only change
/// presentation return nothing, so they cannot reach the network.
pub struct CharacterListController {
    client: QueryClient,
    page: u32,
    view_mode: ViewMode,
    state: QueryState<CharacterPage>,
}

impl CharacterListController {
    /// Fresh listing on the first page in grid layout
    pub fn new(client: QueryClient) -> Self {
        Self {
            client,
            page: FIRST_PAGE,
            view_mode: ViewMode::default(),
            state: QueryState::default(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn state(&self) -> &QueryState<CharacterPage> {
        &self.state
    }

    pub fn page_info(&self) -> Option<&PageInfo> {
        self.state.data.as_ref().map(|data| &data.info)
    }

    pub fn can_go_next(&self) -> bool {
        self.page_info().is_some_and(pagination::can_go_next)
    }

    pub fn can_go_previous(&self) -> bool {
        pagination::can_go_previous(self.page)
    }

    pub fn page_label(&self) -> String {
        pagination::page_label(self.page, self.page_info())
    }

    /// Loads the current page, from the cache while fresh
    pub fn mount(&mut self) -> PageRequest {
        self.request(false)
    }

    /// Reloads the current page from the API regardless of freshness
    pub fn refresh(&mut self) -> PageRequest {
        self.request(true)
    }

    pub fn next(&mut self) -> Option<PageRequest> {
        let next = pagination::next_page(self.page, self.page_info()?)?;

        Some(self.go_to(next))
    }

    pub fn previous(&mut self) -> Option<PageRequest> {
        let previous = pagination::previous_page(self.page)?;

        Some(self.go_to(previous))
    }

    pub fn first(&mut self) -> Option<PageRequest> {
        if self.page == FIRST_PAGE {
            return None;
        }

        Some(self.go_to(FIRST_PAGE))
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Publishes the cache entry for `page` once its request settled.
    ///
    /// Returns `false` and leaves the snapshot untouched when the listing has since moved to
    /// another page.
    pub fn apply(&mut self, page: u32) -> bool {
        if page != self.page {
            tracing::debug!("Dropping superseded character page {}", page);
            return false;
        }

        self.state = self.client.character_page_state(page);
        true
    }

    fn go_to(&mut self, page: u32) -> PageRequest {
        self.page = page;
        self.request(false)
    }

    fn request(&mut self, refetch: bool) -> PageRequest {
        let pending = if refetch {
            self.client.refetch_character_page(self.page)
        } else {
            self.client.character_page(self.page)
        };
        self.state = self.client.character_page_state(self.page);

        PageRequest {
            page: self.page,
            pending,
        }
    }
}
