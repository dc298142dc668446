use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, error};
use url::form_urlencoded;

use crate::models::{ApprovalStatus, Vendor};
use crate::services::api::VendorApi;
use crate::store::VendorStore;
use crate::utils::{Debouncer, RequestSeq};

pub const PAGE_SIZE: usize = 10;

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Status filter of the list view. `all`, an absent parameter, and any
/// unrecognised token all mean "no filter".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApprovalStatus),
}

impl StatusFilter {
    pub fn parse(token: &str) -> Self {
        match ApprovalStatus::parse(token) {
            Some(status) => Self::Only(status),
            None => Self::All,
        }
    }

    pub fn as_status(&self) -> Option<ApprovalStatus> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(*status),
        }
    }
}

/// Query state of the list view. Round-trips through a URL query string so
/// back/forward navigation and shared links reproduce the same view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
    pub status: StatusFilter,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, search: String::new(), status: StatusFilter::All }
    }
}

impl ListQuery {
    pub fn parse(query_string: &str) -> Self {
        let mut query = Self::default();

        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            match key.as_ref() {
                "page" => {
                    query.page = value.parse().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                "search" => query.search = value.into_owned(),
                "status" => query.status = StatusFilter::parse(&value),
                _ => {}
            }
        }

        query
    }

    /// Query string for link sharing and back navigation. Defaults are
    /// omitted, so a pristine first page serializes to an empty string.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if self.page > 1 {
            serializer.append_pair("page", &self.page.to_string());
        }
        if !self.search.is_empty() {
            serializer.append_pair("search", &self.search);
        }
        if let StatusFilter::Only(status) = self.status {
            serializer.append_pair("status", status.as_str());
        }

        serializer.finish()
    }

    /// A new search term always lands on page 1.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self { page: 1, search: search.into(), status: self.status }
    }

    /// A new status filter always lands on page 1.
    pub fn with_status(&self, status: StatusFilter) -> Self {
        Self { page: 1, search: self.search.clone(), status }
    }

    /// Page moves preserve search and filter.
    pub fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), search: self.search.clone(), status: self.status }
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * PAGE_SIZE as i64
    }

    /// One extra row beyond the page size cheaply decides `has_next_page`
    /// without a count query.
    pub fn request_limit(&self) -> i64 {
        PAGE_SIZE as i64 + 1
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListPage {
    pub vendors: Vec<Vendor>,
    pub current_page: u32,
    pub has_next_page: bool,
}

struct ListState {
    query: ListQuery,
    page: ListPage,
}

/// Drives the paginated vendor list: translates query state into backend
/// list calls, publishes each fetched page to the shared store, and keeps
/// the rendered page consistent under out-of-order completions.
pub struct ListController {
    api: Arc<dyn VendorApi>,
    store: Arc<VendorStore>,
    seq: RequestSeq,
    debouncer: Debouncer,
    state: Mutex<ListState>,
}

impl ListController {
    pub fn new(api: Arc<dyn VendorApi>, store: Arc<VendorStore>) -> Self {
        Self {
            api,
            store,
            seq: RequestSeq::new(),
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            state: Mutex::new(ListState {
                query: ListQuery::default(),
                page: ListPage::default(),
            }),
        }
    }

    pub fn query(&self) -> ListQuery {
        self.state.lock().unwrap().query.clone()
    }

    pub fn page(&self) -> ListPage {
        self.state.lock().unwrap().page.clone()
    }

    /// Fetches the page described by `query`. A backend failure degrades to
    /// an empty result set rather than failing the view; a response arriving
    /// after a newer load was issued is discarded and returns `None`.
    pub async fn load_query(&self, query: ListQuery) -> Option<ListPage> {
        let ticket = self.seq.issue();

        let result = self
            .api
            .list_vendors(
                query.request_limit(),
                query.offset(),
                &query.search,
                query.status.as_status(),
            )
            .await;

        let rows = match result {
            Ok(rows) => rows,
            Err(e) => {
                error!(error = %e, page = query.page, "Error fetching vendors");
                Vec::new()
            }
        };

        if !self.seq.is_current(ticket) {
            debug!(page = query.page, "Discarding superseded vendor list response");
            return None;
        }

        let has_next_page = rows.len() > PAGE_SIZE;
        let mut vendors = rows;
        vendors.truncate(PAGE_SIZE);

        self.store.set_vendors(vendors.clone());

        let page = ListPage { vendors, current_page: query.page, has_next_page };

        let mut state = self.state.lock().unwrap();
        state.query = query;
        state.page = page.clone();

        Some(page)
    }

    pub async fn load(&self) -> Option<ListPage> {
        self.load_query(self.query()).await
    }

    pub async fn goto_page(&self, page: u32) -> Option<ListPage> {
        self.load_query(self.query().with_page(page)).await
    }

    pub async fn set_status(&self, status: StatusFilter) -> Option<ListPage> {
        self.load_query(self.query().with_status(status)).await
    }

    /// Debounced search entry point: waits out the 500 ms quiet period and
    /// only the most recent keystroke of a burst reaches the backend.
    pub async fn search_input(&self, term: &str) -> Option<ListPage> {
        if !self.debouncer.settle().await {
            return None;
        }
        self.load_query(self.query().with_search(term)).await
    }
}
