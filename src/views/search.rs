//! Search View State
//!
//! Query, accumulated results and paging for the search page.
//!
//! Requests are issued through [`SearchState::begin`] and their results
//! handed back through [`SearchState::complete`]. Each reset starts a new
//! generation; responses belonging to an older generation are dropped, so a
//! slow reset can never land on top of newer results or skew the offset used
//! by the next "load more".

use crate::models::{Note, NoteQuery};

/// Results per request
pub const PAGE_SIZE: usize = 12;

/// A search request handed out by [`SearchState::begin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: NoteQuery,
    reset: bool,
    generation: u64,
}

impl SearchRequest {
    pub fn is_reset(&self) -> bool {
        self.reset
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    query: String,
    results: Vec<Note>,
    offset: usize,
    has_more: bool,
    page_size: usize,
    generation: u64,
    in_flight: Option<SearchRequest>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl SearchState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            offset: 0,
            has_more: false,
            page_size: page_size.max(1),
            generation: 0,
            in_flight: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn results(&self) -> &[Note] {
        &self.results
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a search.
    ///
    /// A reset always starts at offset 0 and supersedes whatever is in
    /// flight. A load-more returns `None` while another request is pending.
    pub fn begin(&mut self, reset: bool) -> Option<SearchRequest> {
        if !reset && self.in_flight.is_some() {
            tracing::debug!("Load more ignored while a search is in flight");
            return None;
        }
        if reset {
            self.generation += 1;
        }

        let request = SearchRequest {
            query: NoteQuery {
                limit: self.page_size,
                skip: if reset { 0 } else { self.offset },
                q: Some(self.query.trim().to_string()).filter(|q| !q.is_empty()),
            },
            reset,
            generation: self.generation,
        };
        self.in_flight = Some(request.clone());
        Some(request)
    }

    /// Apply the items returned for `request`. Returns `false` if the
    /// response was stale and ignored.
    pub fn complete(&mut self, request: &SearchRequest, items: Vec<Note>) -> bool {
        if self.in_flight.as_ref() != Some(request) {
            tracing::debug!(
                generation = request.generation,
                current = self.generation,
                "Dropping stale search response"
            );
            return false;
        }
        self.in_flight = None;

        let received = items.len();
        if request.reset {
            self.results = items;
            self.offset = received;
        } else {
            self.results.extend(items);
            self.offset += received;
        }
        self.has_more = received > 0;
        true
    }

    /// Record a failed request; results stay as they were
    pub fn fail(&mut self, request: &SearchRequest) {
        if self.in_flight.as_ref() == Some(request) {
            self.in_flight = None;
        }
    }
}
