//! Result shaping: suffix grouping and per-group ordering of prefix matches.
//!
//! A query runs in three steps:
//! 1. fetch all matches for the prefix from the [`PrefixIndex`] (alphabetical),
//! 2. split them into one bucket per preferred suffix plus an "other" bucket,
//!    assigning each word to the first listed suffix it ends with,
//! 3. order each bucket on its own and concatenate them in suffix order.
//!
//! Nothing here fails: unknown sort names fall back to [`SortOrder::None`] and
//! blank suffix entries are dropped. Result size is unbounded; callers that
//! serve requests are expected to paginate (see [`crate::Page`]).

use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::trie::PrefixIndex;
use crate::utils::{is_blank, normalize};

/// Ordering applied inside each result bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Index order, which is alphabetical.
    #[default]
    None,
    /// Longest first, ties alphabetical.
    Longest,
    /// Shortest first, ties alphabetical.
    Shortest,
    /// Arbitrary permutation, different on each call.
    Random,
}

impl SortOrder {
    /// Parse a request parameter. Only the exact lowercase names are
    /// recognized; anything else means [`SortOrder::None`].
    pub fn from_param(s: &str) -> Self {
        match s {
            "longest" => SortOrder::Longest,
            "shortest" => SortOrder::Shortest,
            "random" => SortOrder::Random,
            _ => SortOrder::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::Longest => "longest",
            SortOrder::Shortest => "shortest",
            SortOrder::Random => "random",
        }
    }

    /// Reorder one bucket in place.
    fn apply(&self, bucket: &mut [String]) {
        match self {
            SortOrder::None => {}
            SortOrder::Longest => {
                bucket.sort_by(|a, b| char_len(b).cmp(&char_len(a)).then_with(|| a.cmp(b)))
            }
            SortOrder::Shortest => {
                bucket.sort_by(|a, b| char_len(a).cmp(&char_len(b)).then_with(|| a.cmp(b)))
            }
            SortOrder::Random => bucket.shuffle(&mut rand::thread_rng()),
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split a comma-separated suffix parameter (`"saurus, odon,,"`) into entries.
pub fn parse_suffix_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize preferred suffixes, keeping caller order and dropping blanks.
fn normalize_suffixes<S: AsRef<str>>(suffixes: &[S]) -> Vec<String> {
    suffixes
        .iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Partition `words` into one bucket per suffix plus a trailing "other" bucket.
///
/// Each word lands in the bucket of the first suffix it ends with, so the
/// returned buckets are disjoint and their union is `words`.
fn partition_by_suffix(words: Vec<String>, suffixes: &[String]) -> Vec<Vec<String>> {
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); suffixes.len() + 1];
    let other = suffixes.len();
    for word in words {
        let slot = suffixes
            .iter()
            .position(|suffix| word.ends_with(suffix.as_str()))
            .unwrap_or(other);
        buckets[slot].push(word);
    }
    buckets
}

/// Group and order an alphabetical match list.
///
/// `suffixes` must already be normalized. With no suffixes everything falls in
/// the single "other" bucket.
pub(crate) fn shape(matches: Vec<String>, sort: SortOrder, suffixes: &[String]) -> Vec<String> {
    let mut buckets = if suffixes.is_empty() {
        vec![matches]
    } else {
        partition_by_suffix(matches, suffixes)
    };
    for bucket in buckets.iter_mut() {
        sort.apply(bucket);
    }
    buckets.concat()
}

/// Query front-end over a shared, read-only [`PrefixIndex`].
///
/// Cloning is cheap; every clone reads the same index.
#[derive(Debug, Clone)]
pub struct ResultShaper {
    index: Arc<PrefixIndex>,
}

impl ResultShaper {
    pub fn new(index: Arc<PrefixIndex>) -> Self {
        Self { index }
    }

    /// All words starting with `prefix`, grouped by `preferred_suffixes` and
    /// ordered by `sort` within each group.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use prefix_finder_core::{PrefixIndex, ResultShaper, SortOrder};
    ///
    /// let mut index = PrefixIndex::new();
    /// for w in ["dilophosaurus", "deinonychus", "dimetrodon", "diplodocus"] {
    ///     index.insert(w);
    /// }
    /// let shaper = ResultShaper::new(Arc::new(index));
    ///
    /// let words = shaper.query("di", SortOrder::Longest, &["odon"]);
    /// assert_eq!(words, vec!["dimetrodon", "dilophosaurus", "diplodocus"]);
    /// ```
    pub fn query<S: AsRef<str>>(
        &self,
        prefix: &str,
        sort: SortOrder,
        preferred_suffixes: &[S],
    ) -> Vec<String> {
        if is_blank(prefix) {
            return Vec::new();
        }
        let matches = self.index.find_with_prefix(prefix);
        let suffixes = normalize_suffixes(preferred_suffixes);
        shape(matches, sort, &suffixes)
    }

    /// Same as [`ResultShaper::query`] with the sort order given as a raw parameter.
    pub fn query_with_param<S: AsRef<str>>(
        &self,
        prefix: &str,
        sort: &str,
        preferred_suffixes: &[S],
    ) -> Vec<String> {
        self.query(prefix, SortOrder::from_param(sort), preferred_suffixes)
    }

    /// Words starting with the last character of `word` (word-chain helper),
    /// shaped like any other query.
    pub fn last_letter_words<S: AsRef<str>>(
        &self,
        word: &str,
        sort: SortOrder,
        preferred_suffixes: &[S],
    ) -> Vec<String> {
        match normalize(word).chars().last() {
            Some(last) => self.query(&last.to_string(), sort, preferred_suffixes),
            None => Vec::new(),
        }
    }
}
