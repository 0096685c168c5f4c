//! Client-side catalog pipeline.
//!
//! The full book list is fetched once; every view the user asks for is then
//! derived locally by [`compute`], a pure function of the fetched books and
//! the current [`ViewState`]:
//!
//! 1. keep books whose title or author contains the search text (ignoring case)
//! 2. keep books published in the selected year, if any
//! 3. stable sort by title (ascending) or publish year (descending)
//! 4. cut out the requested 1-based page of [`PAGE_SIZE`] books

pub mod client;
pub mod collation;
pub mod session;

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::models::book::Book;

pub use client::{BookClient, BookSource};
pub use session::{CatalogSession, LoadState};

/// Books shown per page
pub const PAGE_SIZE: usize = 8;

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Title, ascending
    #[default]
    Title,
    /// Publish year, newest first
    Year,
}

/// Grid or list rendering; does not affect the computed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Everything the user controls about the current view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search: String,
    pub year: Option<i32>,
    pub sort: SortKey,
    /// 1-based
    pub page: usize,
    pub mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            year: None,
            sort: SortKey::default(),
            page: 1,
            mode: ViewMode::default(),
        }
    }
}

impl ViewState {
    /// New search text; goes back to page 1
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            ..self
        }
    }

    /// New year filter; goes back to page 1
    pub fn with_year(self, year: Option<i32>) -> Self {
        Self { year, page: 1, ..self }
    }

    /// New sort order; goes back to page 1
    pub fn with_sort(self, sort: SortKey) -> Self {
        Self { sort, page: 1, ..self }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    pub fn with_mode(self, mode: ViewMode) -> Self {
        Self { mode, ..self }
    }
}

/// One computed page plus what pagination controls need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub books: Vec<Book>,
    /// Page that was requested, may lie past `page_count`
    pub page: usize,
    pub page_count: usize,
    /// Books left after filtering, across all pages
    pub total_matches: usize,
}

impl PageView {
    /// Nothing matched the current filters
    pub fn is_empty_state(&self) -> bool {
        self.total_matches == 0
    }

    /// Page buttons to render, empty when there are no pages
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.page_count
    }

    pub fn is_current(&self, page: usize) -> bool {
        self.page == page
    }
}

/// Case-insensitive match on title or author; empty search matches all
pub fn matches_search(book: &Book, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    book.title.to_lowercase().contains(&needle) || book.author.to_lowercase().contains(&needle)
}

pub fn matches_year(book: &Book, year: Option<i32>) -> bool {
    year.map_or(true, |year| book.publish_year == year)
}

/// Steps 1 to 3: filtered and sorted, not yet paginated
pub fn filter_and_sort(books: &[Book], view: &ViewState) -> Vec<Book> {
    let mut selected: Vec<Book> = books
        .iter()
        .filter(|book| matches_search(book, &view.search))
        .filter(|book| matches_year(book, view.year))
        .cloned()
        .collect();

    match view.sort {
        SortKey::Title => {
            let mut collator = collation::TitleCollator::default();
            selected.sort_by(|a, b| collator.compare(&a.title, &b.title));
        }
        SortKey::Year => selected.sort_by(|a, b| b.publish_year.cmp(&a.publish_year)),
    }

    selected
}

/// Number of pages for `total` items; zero when `page_size` is zero
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// The 1-based `page` of `items`; empty when the page does not exist
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = match page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Run the whole pipeline for one view
pub fn compute(books: &[Book], view: &ViewState) -> PageView {
    let selected = filter_and_sort(books, view);
    PageView {
        books: paginate(&selected, view.page, PAGE_SIZE).to_vec(),
        page: view.page,
        page_count: page_count(selected.len(), PAGE_SIZE),
        total_matches: selected.len(),
    }
}

/// Distinct publish years, ascending, for the year selector
pub fn available_years(books: &[Book]) -> Vec<i32> {
    books
        .iter()
        .map(|book| book.publish_year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn book(title: &str, author: &str, year: i32) -> Book {
        let now = Utc::now();
        Book {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: author.to_string(),
            publish_year: year,
            created_at: now,
            updated_at: now,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("The Hobbit", "J.R.R. Tolkien", 1937),
            book("Dune", "Frank Herbert", 1965),
            book("Neuromancer", "William Gibson", 1984),
            book("Foundation", "Isaac Asimov", 1951),
            book("Hyperion", "Dan Simmons", 1989),
            book("The Silmarillion", "J.R.R. Tolkien", 1977),
            book("Solaris", "Stanisław Lem", 1961),
            book("Count Zero", "William Gibson", 1986),
            book("Children of Dune", "Frank Herbert", 1976),
            book("I, Robot", "Isaac Asimov", 1950),
            book("Dune Messiah", "Frank Herbert", 1969),
            book("Ubik", "Philip K. Dick", 1969),
        ]
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_search_matches_title_or_author_ignoring_case() {
        let books = shelf();
        let view = ViewState::default().with_search("DUNE");
        let result = filter_and_sort(&books, &view);
        assert_eq!(titles(&result), vec!["Children of Dune", "Dune", "Dune Messiah"]);

        let view = ViewState::default().with_search("gibson");
        let result = filter_and_sort(&books, &view);
        assert_eq!(titles(&result), vec!["Count Zero", "Neuromancer"]);
    }

    #[test]
    fn test_search_is_sound_and_complete() {
        let books = shelf();
        for search in ["", "an", "TOLKIEN", "o", "zzz"] {
            let view = ViewState::default().with_search(search);
            let result = filter_and_sort(&books, &view);
            let needle = search.to_lowercase();
            assert!(result.iter().all(|b| b.title.to_lowercase().contains(&needle)
                || b.author.to_lowercase().contains(&needle)));
            let expected = books.iter().filter(|b| matches_search(b, search)).count();
            assert_eq!(result.len(), expected);
        }
        assert!(filter_and_sort(&books, &ViewState::default().with_search("zzz")).is_empty());
    }

    #[test]
    fn test_year_filter() {
        let books = shelf();
        let view = ViewState::default().with_year(Some(1969));
        let result = filter_and_sort(&books, &view);
        assert_eq!(titles(&result), vec!["Dune Messiah", "Ubik"]);
        assert!(result.iter().all(|b| b.publish_year == 1969));

        let all = filter_and_sort(&books, &ViewState::default().with_year(None));
        assert_eq!(all.len(), books.len());
    }

    #[test]
    fn test_search_and_year_combine() {
        let books = shelf();
        let view = ViewState::default().with_search("herbert").with_year(Some(1965));
        assert_eq!(titles(&filter_and_sort(&books, &view)), vec!["Dune"]);
    }

    #[test]
    fn test_title_sort_non_decreasing() {
        let books = shelf();
        let result = filter_and_sort(&books, &ViewState::default());
        assert!(result
            .windows(2)
            .all(|w| collation::locale_cmp(&w[0].title, &w[1].title).is_le()));
        assert_eq!(result[0].title, "Children of Dune");
    }

    #[test]
    fn test_year_sort_newest_first_and_stable() {
        let books = shelf();
        let view = ViewState::default().with_sort(SortKey::Year);
        let result = filter_and_sort(&books, &view);
        assert!(result.windows(2).all(|w| w[0].publish_year >= w[1].publish_year));
        assert_eq!(result[0].title, "Hyperion");
        // both 1969, input order kept
        let tied: Vec<&str> = result
            .iter()
            .filter(|b| b.publish_year == 1969)
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(tied, vec!["Dune Messiah", "Ubik"]);
    }

    #[test]
    fn test_title_sort_stable_on_identical_titles() {
        let books = vec![
            book("Collected Stories", "Ray Bradbury", 1980),
            book("Annals", "Tacitus", 109),
            book("Collected Stories", "Isaac Babel", 1955),
        ];
        let result = filter_and_sort(&books, &ViewState::default());
        let authors: Vec<&str> = result.iter().map(|b| b.author.as_str()).collect();
        assert_eq!(authors, vec!["Tacitus", "Ray Bradbury", "Isaac Babel"]);
    }

    #[test]
    fn test_pages_reassemble_filtered_sequence() {
        let books = shelf();
        let view = ViewState::default().with_sort(SortKey::Year);
        let full = filter_and_sort(&books, &view);

        let first = compute(&books, &view);
        assert_eq!(first.page_count, 2);
        assert_eq!(first.books.len(), PAGE_SIZE);

        let mut joined = Vec::new();
        for page in first.page_numbers() {
            joined.extend(compute(&books, &view.clone().with_page(page)).books);
        }
        assert_eq!(joined, full);

        let past_end = compute(&books, &view.with_page(3));
        assert!(past_end.books.is_empty());
        assert_eq!(past_end.total_matches, books.len());
    }

    #[test]
    fn test_page_zero_is_empty() {
        let books = shelf();
        let view = ViewState::default().with_page(0);
        assert!(compute(&books, &view).books.is_empty());
        assert!(paginate(&books, usize::MAX, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let view = compute(&[], &ViewState::default());
        assert_eq!(view.page_count, 0);
        assert!(view.books.is_empty());
        assert!(view.is_empty_state());
        assert_eq!(view.page_numbers().count(), 0);
    }

    #[test]
    fn test_no_match_triggers_empty_state() {
        let view = compute(&shelf(), &ViewState::default().with_search("zzz"));
        assert!(view.is_empty_state());
        assert!(!compute(&shelf(), &ViewState::default()).is_empty_state());
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let view = ViewState::default().with_page(2);
        assert_eq!(view.clone().with_search("dune").page, 1);
        assert_eq!(view.clone().with_year(Some(1965)).page, 1);
        assert_eq!(view.clone().with_sort(SortKey::Year).page, 1);
        assert_eq!(view.with_mode(ViewMode::List).page, 2);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(8, PAGE_SIZE), 1);
        assert_eq!(page_count(9, PAGE_SIZE), 2);
    }

    #[test]
    fn test_zero_page_size_yields_nothing() {
        assert_eq!(page_count(12, 0), 0);
        assert!(paginate(&shelf(), 1, 0).is_empty());
    }

    #[test]
    fn test_title_sort_places_non_decomposing_letters() {
        let books = vec![
            book("Mars", "Kim Stanley Robinson", 1992),
            book("Łódź Stories", "Anonymous", 1990),
            book("Lamb", "Christopher Moore", 2002),
        ];
        let result = filter_and_sort(&books, &ViewState::default());
        assert_eq!(titles(&result), vec!["Lamb", "Łódź Stories", "Mars"]);
    }

    #[test]
    fn test_available_years_sorted_and_distinct() {
        let years = available_years(&shelf());
        assert_eq!(years.first(), Some(&1937));
        assert_eq!(years.last(), Some(&1989));
        assert_eq!(years.iter().filter(|y| **y == 1969).count(), 1);
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sort_key_wire_names() {
        assert_eq!(serde_json::to_string(&SortKey::Year).unwrap(), "\"year\"");
        assert_eq!(serde_json::from_str::<SortKey>("\"title\"").unwrap(), SortKey::Title);
    }
}
