//! gettext catalogs (`.po`/`.pot`).
//!
//! Catalogs are loaded file by file and compared once, after every catalog
//! of the run has been loaded.
//!
//! ## Module Structure
//!
//! - `parser`: splits catalog text into `CatalogEntry` values
//! - `checker`: placeholder, accelerator and source-string consistency checks

pub mod checker;
pub mod parser;

use std::sync::Arc;

pub use checker::{CheckOptions, check_entries};
pub use parser::parse_catalog;

use super::data::{CatalogEntry, IssueKind};
use super::heuristics::Heuristics;

/// Loads catalogs and reviews their entries.
pub struct CatalogScanner {
    heuristics: Arc<Heuristics>,
    options: CheckOptions,
    entries: Vec<CatalogEntry>,
}

impl CatalogScanner {
    pub fn new(heuristics: Arc<Heuristics>, options: CheckOptions) -> Self {
        Self {
            heuristics,
            options,
            entries: Vec::new(),
        }
    }

    pub fn scan(&mut self, text: &str, file_path: &str) {
        self.entries.extend(parse_catalog(text, file_path));
    }

    /// Add entries parsed elsewhere (e.g. on another thread).
    pub fn extend(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) {
        self.entries.extend(entries);
    }

    /// Run the consistency checks over everything loaded so far.
    pub fn review(&mut self) {
        check_entries(&mut self.entries, &self.heuristics, self.options);
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entries carrying at least one issue of `kind`.
    pub fn entries_with(&self, kind: IssueKind) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.has_issue(kind))
    }

    pub fn take_entries(&mut self) -> Vec<CatalogEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn clear_results(&mut self) {
        self.entries.clear();
    }
}
