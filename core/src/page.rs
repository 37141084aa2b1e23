//! Pagination over a shaped result.
//!
//! This is plain index slicing over the full, already ordered word list; it
//! never reorders anything.

use serde::Serialize;

/// One page of query results, shaped for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub words: Vec<String>,
    /// Size of the full result.
    pub total: usize,
    /// 1-based page number.
    pub page: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

impl Page {
    /// The response for a blank prefix.
    pub fn empty() -> Self {
        Self {
            words: Vec::new(),
            total: 0,
            page: 1,
            total_pages: 0,
            has_more: false,
        }
    }

    /// Cut page `page` (1-based) of size `per_page` out of `words`.
    ///
    /// Both arguments are clamped to at least 1. A page past the end has no
    /// words but still reports the totals.
    ///
    /// # Example
    /// ```
    /// use prefix_finder_core::Page;
    ///
    /// let words: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
    /// let page = Page::from_words(&words, 2, 2);
    /// assert_eq!(page.words, vec!["c", "d"]);
    /// assert_eq!(page.total_pages, 3);
    /// assert!(page.has_more);
    /// ```
    pub fn from_words(words: &[String], page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total = words.len();
        let total_pages = total.div_ceil(per_page);

        let start = (page - 1).saturating_mul(per_page).min(total);
        let end = start.saturating_add(per_page).min(total);

        Self {
            words: words[start..end].to_vec(),
            total,
            page,
            total_pages,
            has_more: page < total_pages,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
