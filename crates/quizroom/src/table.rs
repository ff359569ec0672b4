//! Client-side table state.
//!
//! The backend's list endpoints return full result sets; paging, sorting,
//! and keyword filtering are applied locally, the same way the admin
//! screens do it. [`TableState`] owns the fetched rows and a view
//! configuration, and produces the currently visible page.

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Pagination, sorting, and filtering state over a locally held row set.
///
/// The page index is zero-based and always clamped: shrinking the row set
/// or tightening the filter never leaves the view on a page past the end.
///
/// # Example
///
/// ```
/// use quizroom::table::{SortDirection, TableState};
///
/// let mut table = TableState::new(vec!["cedar", "alder", "birch"], 2);
/// table.sort_by_key(|row| row.to_string(), SortDirection::Ascending);
///
/// let page = table.page_rows(|_, _| true);
/// assert_eq!(page, vec![&"alder", &"birch"]);
/// ```
#[derive(Debug)]
pub struct TableState<T> {
    rows: Vec<T>,
    page: usize,
    page_size: usize,
    keyword: Option<String>,
}

impl<T> TableState<T> {
    /// Create table state over `rows`, `page_size` rows per page.
    ///
    /// A zero `page_size` is bumped to one.
    pub fn new(rows: Vec<T>, page_size: usize) -> Self {
        Self {
            rows,
            page: 0,
            page_size: page_size.max(1),
            keyword: None,
        }
    }

    /// Replace the rows, keeping the view configuration.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }

    /// Returns all rows, unfiltered.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Set or clear the keyword filter. Resets to the first page.
    pub fn set_keyword(&mut self, keyword: Option<String>) {
        self.keyword = keyword.filter(|k| !k.is_empty());
        self.page = 0;
    }

    /// Returns the active keyword filter.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Returns the current (clamped) zero-based page index, given how many
    /// rows currently match.
    fn clamped_page(&self, matching: usize) -> usize {
        let pages = page_count(matching, self.page_size);
        self.page.min(pages.saturating_sub(1))
    }

    /// Jump to a page. Out-of-range values clamp when the view is built.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Advance one page.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Go back one page.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Sort the rows by a key.
    pub fn sort_by_key<K: Ord>(&mut self, mut key: impl FnMut(&T) -> K, direction: SortDirection) {
        self.rows.sort_by_key(&mut key);
        if direction == SortDirection::Descending {
            self.rows.reverse();
        }
    }

    /// Returns the rows on the current page.
    ///
    /// `matches` decides whether a row matches the active keyword; it is
    /// only consulted when a keyword is set.
    pub fn page_rows(&self, matches: impl Fn(&T, &str) -> bool) -> Vec<&T> {
        let filtered: Vec<&T> = self
            .rows
            .iter()
            .filter(|row| match self.keyword.as_deref() {
                Some(keyword) => matches(row, keyword),
                None => true,
            })
            .collect();

        let page = self.clamped_page(filtered.len());
        filtered
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Returns the number of pages for the current filter.
    pub fn page_count(&self, matches: impl Fn(&T, &str) -> bool) -> usize {
        let matching = self
            .rows
            .iter()
            .filter(|row| match self.keyword.as_deref() {
                Some(keyword) => matches(row, keyword),
                None => true,
            })
            .count();
        page_count(matching, self.page_size)
    }
}

fn page_count(rows: usize, page_size: usize) -> usize {
    rows.div_ceil(page_size)
}
