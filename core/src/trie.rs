//! Prefix trie holding the word index.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::utils::normalize;

/// A single node of the prefix tree.
///
/// Children are kept in a `BTreeMap` so enumeration follows character order,
/// which makes every subtree walk come out alphabetical without a sort step.
#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, Box<TrieNode>>,
    is_end: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_end: false,
        }
    }

    fn is_end(&self) -> bool {
        self.is_end
    }

    fn branch_count(&self) -> usize {
        self.children.len()
    }

    /// Follow `path` from this node, returning `None` as soon as a character is absent.
    fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = self;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Collect every word in this subtree, each prefixed with `prefix`.
    ///
    /// Depth-first with an explicit stack over one shared path buffer: a
    /// character is pushed on descent and popped on backtrack. Children are
    /// stacked in reverse so they pop in ascending order and the output is
    /// lexicographic.
    fn collect_words(&self, prefix: &str, out: &mut Vec<String>) {
        let mut path = prefix.to_string();
        if self.is_end {
            out.push(path.clone());
        }
        let mut stack: Vec<Step<'_>> = self
            .children
            .iter()
            .rev()
            .map(|(ch, child)| Step::Enter(*ch, child))
            .collect();
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(ch, node) => {
                    path.push(ch);
                    if node.is_end {
                        out.push(path.clone());
                    }
                    stack.push(Step::Leave);
                    stack.extend(
                        node.children
                            .iter()
                            .rev()
                            .map(|(ch, child)| Step::Enter(*ch, child)),
                    );
                }
                Step::Leave => {
                    path.pop();
                }
            }
        }
    }
}

enum Step<'a> {
    Enter(char, &'a TrieNode),
    Leave,
}

impl Drop for TrieNode {
    // Unlinks descendants onto a heap stack so deep chains don't recurse.
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> = std::mem::take(&mut self.children)
            .into_values()
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// Reporting counters for a loaded index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Insertions performed, duplicates included.
    pub total_insertions: u64,
    /// Distinct first characters under the root.
    pub top_level_branches: usize,
}

/// In-memory prefix index over a word list.
///
/// Words are normalized (NFC, trimmed, lowercased) on the way in, so lookups
/// are case-insensitive and results come back in canonical lowercase form.
/// NFC composition means decomposed input such as `"cafe\u{301}"` is stored
/// and returned precomposed (`"caf\u{e9}"`); a decomposed query still matches it.
/// The index is built once and then only read; it is `Send + Sync` and can be
/// shared behind an `Arc` without locking.
///
/// # Example
/// ```
/// use prefix_finder_core::PrefixIndex;
///
/// let mut index = PrefixIndex::new();
/// index.insert("Tyrannosaurus");
/// index.insert("triceratops");
/// index.insert("tyrant");
///
/// assert_eq!(index.find_with_prefix("TYR"), vec!["tyrannosaurus", "tyrant"]);
/// assert!(index.find_with_prefix("x").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    insertions: u64,
}

impl PrefixIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            insertions: 0,
        }
    }

    /// Insert a word.
    ///
    /// Blank input is ignored. Re-inserting a present word leaves the tree
    /// unchanged but still counts as an insertion.
    ///
    /// # Example
    /// ```
    /// use prefix_finder_core::PrefixIndex;
    ///
    /// let mut index = PrefixIndex::new();
    /// index.insert("Rex");
    /// index.insert("rex");
    /// assert_eq!(index.find_with_prefix("r"), vec!["rex"]);
    /// assert_eq!(index.stats().total_insertions, 2);
    /// ```
    pub fn insert(&mut self, word: &str) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.is_end = true;
        self.insertions += 1;
    }

    /// Check whether exactly `word` was inserted (not merely a prefix of one).
    ///
    /// # Example
    /// ```
    /// use prefix_finder_core::PrefixIndex;
    ///
    /// let mut index = PrefixIndex::new();
    /// index.insert("raptor");
    /// assert!(index.contains_word("Raptor"));
    /// assert!(!index.contains_word("rap"));
    /// ```
    pub fn contains_word(&self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        self.root.descend(&word).is_some_and(TrieNode::is_end)
    }

    /// All words starting with `prefix`, in ascending lexicographic order.
    ///
    /// An absent prefix yields an empty vector. A blank prefix walks the whole
    /// tree; callers serving requests should short-circuit that case first
    /// (see [`crate::utils::is_blank`]).
    pub fn find_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = normalize(prefix);
        let mut words = Vec::new();
        if let Some(node) = self.root.descend(&prefix) {
            node.collect_words(&prefix, &mut words);
        }
        words
    }

    /// Reporting counters. No side effects.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_insertions: self.insertions,
            top_level_branches: self.root.branch_count(),
        }
    }

    /// True when nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.branch_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(words: &[&str]) -> PrefixIndex {
        let mut index = PrefixIndex::new();
        for w in words {
            index.insert(w);
        }
        index
    }

    #[test]
    fn test_basic_insert_and_contains() {
        let index = index_of(&["raptor", "rap", "rex"]);

        assert!(index.contains_word("raptor"));
        assert!(index.contains_word("rap"));
        assert!(index.contains_word("rex"));
        assert!(!index.contains_word("r"));
        assert!(!index.contains_word("rapt"));
        assert!(!index.contains_word(""));
    }

    #[test]
    fn test_find_with_prefix_alphabetical() {
        let index = index_of(&["stegosaurus", "saurolophus", "sauropod", "s", "spinosaurus"]);

        let words = index.find_with_prefix("s");
        assert_eq!(
            words,
            vec!["s", "saurolophus", "sauropod", "spinosaurus", "stegosaurus"]
        );
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted);
    }

    #[test]
    fn test_prefix_is_itself_a_word() {
        let index = index_of(&["rap", "raptor"]);
        assert_eq!(index.find_with_prefix("rap"), vec!["rap", "raptor"]);
        assert_eq!(index.find_with_prefix("rapt"), vec!["raptor"]);
    }

    #[test]
    fn test_missing_prefix_is_empty() {
        let index = index_of(&["raptor"]);
        assert!(index.find_with_prefix("rex").is_empty());
        assert!(index.find_with_prefix("raptors").is_empty());
    }

    #[test]
    fn test_case_and_whitespace_normalized() {
        let index = index_of(&["  Rex\t"]);
        assert_eq!(index.find_with_prefix("rex"), vec!["rex"]);
        assert_eq!(index.find_with_prefix("REX"), vec!["rex"]);
        assert_eq!(index.find_with_prefix(" Re "), vec!["rex"]);
    }

    #[test]
    fn test_duplicates_counted_not_stored() {
        let index = index_of(&["rex", "Rex", "REX "]);
        assert_eq!(index.find_with_prefix("r"), vec!["rex"]);
        assert_eq!(index.stats().total_insertions, 3);
    }

    #[test]
    fn test_blank_insert_ignored() {
        let index = index_of(&["", "   ", "\n"]);
        assert!(index.is_empty());
        assert_eq!(index.stats().total_insertions, 0);
    }

    #[test]
    fn test_stats_top_level_branches() {
        let index = index_of(&["apple", "avocado", "banana", "cherry"]);
        let stats = index.stats();
        assert_eq!(stats.total_insertions, 4);
        assert_eq!(stats.top_level_branches, 3);
    }

    #[test]
    fn test_very_long_word_does_not_overflow_stack() {
        let long: String = std::iter::repeat('a').take(200_000).collect();
        let index = index_of(&[long.as_str()]);
        let words = index.find_with_prefix("a");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].len(), 200_000);
    }

    #[test]
    fn test_backtracking_restores_path() {
        let index = index_of(&["ab", "abcd", "abce", "abd", "ac", "b"]);
        assert_eq!(
            index.find_with_prefix("a"),
            vec!["ab", "abcd", "abce", "abd", "ac"]
        );
        assert_eq!(index.find_with_prefix("abc"), vec!["abcd", "abce"]);
    }

    #[test]
    fn test_decomposed_input_is_stored_composed() {
        let index = index_of(&["Cafe\u{301}"]);
        assert_eq!(index.find_with_prefix("caf"), vec!["caf\u{e9}"]);
        assert!(index.contains_word("caf\u{e9}"));
        assert!(index.contains_word("cafe\u{301}"));
    }

    #[test]
    fn test_unicode_words() {
        let index = index_of(&["Éclair", "écru", "eagle"]);
        assert_eq!(index.find_with_prefix("é"), vec!["éclair", "écru"]);
        assert_eq!(index.find_with_prefix("e"), vec!["eagle"]);
    }
}
