use crate::api::{ApiError, Direction, Page, PageMetadata, PageRequest, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY};

use super::debounce::{DebounceTicket, Debouncer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub search_term: String,
    pub status: String,
}

/// How a list reloads after a create, update, delete or status change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Re-issue the request behind the page currently shown.
    #[default]
    CurrentPage,
    FirstPage,
}

/// A fetch the caller must run and report back through [`ListController::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub seq: u64,
    pub request: PageRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    Stale,
}

/// Token-paginated, filtered view of one backend collection.
///
/// Every issued load carries a sequence number. Only the response to the most
/// recent load is applied; older responses are reported as [`LoadOutcome::Stale`].
/// A failed load keeps the previous items and metadata and records the error.
#[derive(Debug, Clone, PartialEq)]
pub struct ListController<T> {
    items: Vec<T>,
    metadata: PageMetadata,
    filters: ListFilters,
    error: Option<ApiError>,
    loading: bool,
    latest_seq: u64,
    issued: Option<PageRequest>,
    shown: Option<PageRequest>,
    debounce: Debouncer,
    policy: RefreshPolicy,
    sort_by: String,
    page_size: u32,
}

impl<T> Default for ListController<T> {
    fn default() -> Self {
        Self::new(RefreshPolicy::default())
    }
}

impl<T> ListController<T> {
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            items: Vec::new(),
            metadata: PageMetadata::default(),
            filters: ListFilters::default(),
            error: None,
            loading: false,
            latest_seq: 0,
            issued: None,
            shown: None,
            debounce: Debouncer::default(),
            policy,
            sort_by: DEFAULT_SORT_BY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn filters(&self) -> &ListFilters {
        &self.filters
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_next(&self) -> bool {
        self.metadata.has_next()
    }

    pub fn can_prev(&self) -> bool {
        self.metadata.has_prev()
    }

    pub fn has_pending_search(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Request behind the page currently displayed.
    pub fn shown_request(&self) -> Option<&PageRequest> {
        self.shown.as_ref()
    }

    pub fn load(&mut self, direction: Direction, token: Option<String>) -> PendingLoad {
        let request = PageRequest {
            direction,
            token,
            search_term: self.filters.search_term.clone(),
            status_filter: self.filters.status.clone(),
            sort_by: self.sort_by.clone(),
            page_size: self.page_size,
        };
        self.issue(request)
    }

    pub fn initial_load(&mut self) -> PendingLoad {
        self.load(Direction::Next, None)
    }

    pub fn next_page(&mut self) -> Option<PendingLoad> {
        let token = self.metadata.next_pagination_token.clone()?;
        Some(self.load(Direction::Next, Some(token)))
    }

    pub fn prev_page(&mut self) -> Option<PendingLoad> {
        let token = self.metadata.prev_pagination_token.clone()?;
        Some(self.load(Direction::Prev, Some(token)))
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) -> DebounceTicket {
        self.filters.search_term = text.into();
        self.debounce.schedule()
    }

    pub fn set_status_filter(&mut self, status: impl Into<String>) -> DebounceTicket {
        self.filters.status = status.into();
        self.debounce.schedule()
    }

    /// Starts the first-page reload for `ticket` unless a newer filter change replaced it.
    pub fn fire_debounced(&mut self, ticket: DebounceTicket) -> Option<PendingLoad> {
        if self.debounce.take(ticket) {
            Some(self.initial_load())
        } else {
            None
        }
    }

    pub fn cancel_debounce(&mut self) {
        self.debounce.cancel();
    }

    pub fn refresh_after_mutation(&mut self) -> PendingLoad {
        match (self.policy, self.shown.clone()) {
            (RefreshPolicy::CurrentPage, Some(request)) => self.issue(request),
            _ => self.initial_load(),
        }
    }

    pub fn apply(&mut self, seq: u64, result: Result<Page<T>, ApiError>) -> LoadOutcome {
        if seq != self.latest_seq {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.metadata = page.metadata;
                self.error = None;
                self.shown = self.issued.take();
                LoadOutcome::Applied
            }
            Err(error) => {
                self.error = Some(error);
                self.issued = None;
                LoadOutcome::Failed
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn issue(&mut self, request: PageRequest) -> PendingLoad {
        self.latest_seq = self.latest_seq.wrapping_add(1);
        self.loading = true;
        self.issued = Some(request.clone());
        PendingLoad {
            seq: self.latest_seq,
            request,
        }
    }
}
