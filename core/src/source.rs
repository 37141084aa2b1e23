//! Word-list loading.
//!
//! Sources are plain text files, one word per line. Loading never aborts:
//! a missing or unreadable file is logged, recorded in the [`LoadReport`] and
//! skipped, and the remaining sources are still loaded into the same index.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::trie::PrefixIndex;

/// What happened when a single source was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SourceStatus {
    Loaded,
    Missing,
    /// Read stopped part-way; words before the error were kept.
    Failed(String),
}

/// Outcome of loading one word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub path: PathBuf,
    /// Words inserted from this source, duplicates included.
    pub words: usize,
    pub status: SourceStatus,
}

impl SourceReport {
    pub fn is_loaded(&self) -> bool {
        self.status == SourceStatus::Loaded
    }
}

/// Per-source outcomes of a multi-source load, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub sources: Vec<SourceReport>,
}

impl LoadReport {
    /// Words inserted across all sources.
    pub fn total_words(&self) -> usize {
        self.sources.iter().map(|s| s.words).sum()
    }

    /// Sources that were missing or failed.
    pub fn failures(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources.iter().filter(|s| !s.is_loaded())
    }

    /// True when sources were given and none loaded cleanly.
    pub fn all_failed(&self) -> bool {
        !self.sources.is_empty() && self.sources.iter().all(|s| !s.is_loaded())
    }
}

impl PrefixIndex {
    /// Insert every non-blank line from `reader`, returning how many were inserted.
    ///
    /// On a read error the words already inserted stay in the index.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut count = 0;
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            self.insert(word);
            count += 1;
        }
        Ok(count)
    }

    /// Load one word-list file. Never fails; see [`SourceReport`].
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> SourceReport {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "word list not found, skipping");
                return SourceReport {
                    path: path.to_path_buf(),
                    words: 0,
                    status: SourceStatus::Missing,
                };
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot open word list, skipping");
                return SourceReport {
                    path: path.to_path_buf(),
                    words: 0,
                    status: SourceStatus::Failed(e.to_string()),
                };
            }
        };

        // Count progress outside the reader loop so a mid-file error still
        // reports the words that made it in.
        let before = self.stats().total_insertions;
        let status = match self.load_from_reader(BufReader::new(file)) {
            Ok(words) => {
                debug!(path = %path.display(), words, "loaded word list");
                SourceStatus::Loaded
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "error reading word list");
                SourceStatus::Failed(e.to_string())
            }
        };
        let words = (self.stats().total_insertions - before) as usize;

        SourceReport {
            path: path.to_path_buf(),
            words,
            status,
        }
    }

    /// Load several word lists in order into this index.
    pub fn load_from_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> LoadReport {
        let sources = paths.iter().map(|p| self.load_from_path(p)).collect();
        LoadReport { sources }
    }
}

/// Build a fresh index from word-list files, loaded sequentially.
///
/// Missing sources contribute nothing; whether an empty result is fatal is
/// up to the caller (see [`LoadReport::all_failed`]).
pub fn build_index<P: AsRef<Path>>(paths: &[P]) -> (PrefixIndex, LoadReport) {
    let mut index = PrefixIndex::new();
    let report = index.load_from_paths(paths);
    let stats = index.stats();
    info!(
        sources = report.sources.len(),
        failed = report.failures().count(),
        total_insertions = stats.total_insertions,
        top_level_branches = stats.top_level_branches,
        "word index built"
    );
    (index, report)
}
