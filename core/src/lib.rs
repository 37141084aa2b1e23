//! prefix-finder-core
//!
//! In-memory prefix index over large word lists, plus the result shaping used
//! to answer "all words beginning with P" queries.
//!
//! The index is built once from one or more plain-text word lists and is
//! read-only afterwards, so it can be shared across threads behind an `Arc`.
//!
//! Public API:
//! - `PrefixIndex` - Character trie with case-insensitive prefix lookup
//! - `build_index` - Sequential multi-source loader with per-source report
//! - `ResultShaper` - Suffix grouping and per-group ordering of matches
//! - `SortOrder` - `none` / `longest` / `shortest` / `random`
//! - `Page` - Index-slicing pagination of a shaped result
//! - `Config` - TOML-backed configuration
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod trie;
pub use trie::{IndexStats, PrefixIndex};

pub mod source;
pub use source::{build_index, LoadReport, SourceReport, SourceStatus};

pub mod shaper;
pub use shaper::{parse_suffix_list, ResultShaper, SortOrder};

pub mod page;
pub use page::Page;

/// Runtime configuration for loading and serving word queries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Word-list files, loaded in order. Missing files are skipped.
    pub sources: Vec<PathBuf>,

    /// Sort order used when a request does not name one.
    /// Kept as text so an unknown value degrades to `none` instead of failing.
    pub default_sort: String,

    /// Page size used when a request does not name one.
    pub per_page: usize,
    /// Upper bound on a requested page size.
    pub max_per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: vec![PathBuf::from("words.txt")],
            default_sort: "none".to_string(),
            per_page: 100,
            max_per_page: 1000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The configured default sort; unrecognized names mean `none`.
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_param(&self.default_sort)
    }

    /// Resolve a requested page size: `None` means `per_page`, and the result
    /// always lies in `1..=max_per_page`.
    pub fn clamp_per_page(&self, requested: Option<usize>) -> usize {
        let max = self.max_per_page.max(1);
        requested.unwrap_or(self.per_page).clamp(1, max)
    }
}

/// Utility helpers.
pub mod utils {
    /// Canonical form of a word, prefix or suffix: NFC, trimmed, lowercased.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.trim().nfc().collect::<String>().to_lowercase()
    }

    /// True when `s` normalizes to nothing. Lets callers skip a whole-tree
    /// query for an empty prefix without allocating.
    pub fn is_blank(s: &str) -> bool {
        s.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(utils::normalize("  Tyrannosaurus\n"), "tyrannosaurus");
        assert_eq!(utils::normalize("REX"), "rex");
        assert_eq!(utils::normalize(""), "");
    }

    #[test]
    fn normalize_composes_accents() {
        // "e" + combining acute -> precomposed "é"
        assert_eq!(utils::normalize("Caf\u{0065}\u{0301}"), "caf\u{00e9}");
    }

    #[test]
    fn is_blank_matches_normalize() {
        for s in ["", " ", "\t\n", "a", " b "] {
            assert_eq!(utils::is_blank(s), utils::normalize(s).is_empty());
        }
    }

    #[test]
    fn config_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.sort_order(), SortOrder::None);
        assert_eq!(cfg.per_page, 100);
        assert_eq!(cfg.clamp_per_page(None), 100);
        assert_eq!(cfg.clamp_per_page(Some(0)), 1);
        assert_eq!(cfg.clamp_per_page(Some(50_000)), 1000);
    }

    #[test]
    fn config_from_partial_toml() {
        let cfg = Config::from_toml_str(
            r#"
            sources = ["dinos.txt", "words_alpha.txt"]
            default_sort = "longest"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.sources.len(), 2);
        assert_eq!(cfg.sort_order(), SortOrder::Longest);
        assert_eq!(cfg.per_page, 100);
    }

    #[test]
    fn config_unknown_sort_degrades() {
        let cfg = Config::from_toml_str(r#"default_sort = "alphabetical-ish""#).unwrap();
        assert_eq!(cfg.sort_order(), SortOrder::None);
        let cfg = Config::from_toml_str(r#"default_sort = "Longest""#).unwrap();
        assert_eq!(cfg.sort_order(), SortOrder::None);
    }

    #[test]
    fn config_toml_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("finder.toml");
        let mut cfg = Config::default();
        cfg.per_page = 25;
        cfg.save_toml(&path).unwrap();
        assert_eq!(Config::load_toml(&path).unwrap(), cfg);
    }
}
