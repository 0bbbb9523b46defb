use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::client::SearchBackend;
use crate::error::{Result, SearchError};
use crate::format::format_ai_response;
use crate::models::SearchResponse;
use crate::page::SearchPage;
use crate::render::{NO_RESULTS_MARKUP, result_block};

pub const ENTER_KEY: &str = "Enter";

/// Input events the widget listens to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on the search button.
    ButtonClick,
    /// Key released inside the search input.
    KeyUp { key: String },
}

impl UiEvent {
    pub fn key_up(key: impl Into<String>) -> Self {
        UiEvent::KeyUp { key: key.into() }
    }

    pub fn triggers_search(&self) -> bool {
        match self {
            UiEvent::ButtonClick => true,
            UiEvent::KeyUp { key } => key == ENTER_KEY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query or an event that doesn't trigger a search; nothing happened.
    Skipped,
    /// Results panel (and maybe the enhanced panel) shown.
    Rendered,
    /// Error panel shown.
    Failed,
    /// A newer search started before this one completed; its response was dropped.
    Stale,
}

/// Drives a `SearchPage` from user input and backend responses.
///
/// Every search takes a ticket from a monotonically increasing counter. Only the
/// completion holding the latest ticket may touch the page, so a slow response
/// to an older query never overwrites a newer one.
pub struct SearchController<B> {
    backend: B,
    page: Mutex<SearchPage>,
    latest: AtomicU64,
}

impl<B: SearchBackend> SearchController<B> {
    pub fn new(backend: B, page: SearchPage) -> Self {
        Self {
            backend,
            page: Mutex::new(page),
            latest: AtomicU64::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshot of the page as it currently stands.
    pub async fn page(&self) -> SearchPage {
        self.page.lock().await.clone()
    }

    /// Types `value` into the search input.
    pub async fn set_query(&self, value: impl Into<String>) {
        self.page.lock().await.set_query(value);
    }

    pub async fn handle_event(&self, event: UiEvent) -> SearchOutcome {
        if !event.triggers_search() {
            return SearchOutcome::Skipped;
        }
        let query = self.page.lock().await.query().to_string();
        self.perform_search(&query).await
    }

    pub async fn perform_search(&self, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            return SearchOutcome::Skipped;
        }

        let ticket = self.begin().await;
        let result = self
            .backend
            .search(query)
            .await
            .and_then(SearchResponse::into_result);
        self.complete(ticket, result).await
    }

    async fn begin(&self) -> u64 {
        let mut page = self.page.lock().await;
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        page.loading.show();
        page.results.hide();
        page.enhanced_section.hide();
        page.errors.hide();
        page.errors.set_text("");
        ticket
    }

    async fn complete(&self, ticket: u64, result: Result<SearchResponse>) -> SearchOutcome {
        let mut page = self.page.lock().await;
        let latest = self.latest.load(Ordering::SeqCst);
        if ticket != latest {
            log::debug!("dropping response for search #{ticket}, latest is #{latest}");
            return SearchOutcome::Stale;
        }

        page.loading.hide();
        match result {
            Ok(data) => {
                render(&mut page, &data);
                SearchOutcome::Rendered
            }
            Err(e) => {
                if !matches!(e, SearchError::Server(_)) {
                    log::error!("Search error: {:#}", e);
                }
                page.errors.set_text(e.user_message());
                page.errors.show();
                SearchOutcome::Failed
            }
        }
    }
}

/// Fills the results and enhanced panels from a successful payload.
pub fn render(page: &mut SearchPage, data: &SearchResponse) {
    page.results.clear();

    if let Some(enhanced) = data.enhanced() {
        page.enhanced_content.set_markup(format_ai_response(enhanced));
        page.enhanced_section.show();
    }

    let results = data.results();
    if results.is_empty() {
        page.results.set_markup(NO_RESULTS_MARKUP);
    } else {
        for item in results {
            page.results.append_markup(&result_block(item));
        }
    }
    page.results.show();
}
