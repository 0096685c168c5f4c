//! A single user's catalog view: the fetched books plus the current
//! [`ViewState`], recomputed on demand.

use crate::{error::AppResult, models::book::Book};

use super::{available_years, client::BookSource, compute, PageView, SortKey, ViewMode, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    Loading,
    /// Fetch finished, successfully or not
    Loaded,
}

#[derive(Debug)]
pub struct CatalogSession {
    books: Vec<Book>,
    view: ViewState,
    state: LoadState,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSession {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            view: ViewState::default(),
            state: LoadState::Idle,
        }
    }

    /// Mark the fetch as outstanding. Until [`finish_load`](Self::finish_load)
    /// runs, [`current`](Self::current) yields nothing to render.
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Record the outcome of a fetch. A failure leaves the session with no
    /// books; it is logged, not returned.
    pub fn finish_load(&mut self, result: AppResult<Vec<Book>>) {
        self.books = match result {
            Ok(books) => {
                tracing::debug!("Fetched {} books", books.len());
                books
            }
            Err(e) => {
                tracing::warn!("Error fetching books: {}", e);
                Vec::new()
            }
        };
        self.state = LoadState::Loaded;
    }

    /// Fetch the full list in one step, for callers that do not render
    /// while the request is in flight
    pub async fn load<S: BookSource + ?Sized>(&mut self, source: &S) {
        self.begin_load();
        let result = source.fetch_books().await;
        self.finish_load(result);
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Current page, or `None` while the fetch is outstanding
    pub fn current(&self) -> Option<PageView> {
        match self.state {
            LoadState::Loading => None,
            _ => Some(compute(&self.books, &self.view)),
        }
    }

    /// Whether the "no books found" panel should be shown
    pub fn is_empty_state(&self) -> bool {
        self.current().is_some_and(|page| page.is_empty_state())
    }

    pub fn year_options(&self) -> Vec<i32> {
        available_years(&self.books)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view = self.view.clone().with_search(search);
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.view = self.view.clone().with_year(year);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.view = self.view.clone().with_sort(sort);
    }

    pub fn set_page(&mut self, page: usize) {
        self.view = self.view.clone().with_page(page);
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.view = self.view.clone().with_mode(mode);
    }
}
