use std::{
    cell::OnceCell,
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        catalog::{CatalogScanner, CheckOptions, parse_catalog},
        data::CatalogEntry,
        file_scanner::{FileKind, scan_files},
        heuristics::Heuristics,
        resource::ResourceScanner,
        review_style::ReviewStyle,
        scanner::{CSharpScanner, CppScanner, ScanOptions, ScanResults},
        text_file::TextFile,
    },
};

/// Everything one review run produced.
#[derive(Debug, Default)]
pub struct ReviewData {
    /// Merged results of every source file and resource script, reviewed.
    pub sources: ScanResults,
    /// Catalog entries of every catalog, with their consistency issues.
    pub catalog: Vec<CatalogEntry>,
    /// Files that could not be read, with the reason.
    pub unreadable: Vec<(String, String)>,
}

/// Counts shown in the summary line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewStats {
    pub files_by_kind: BTreeMap<FileKind, usize>,
    pub unreadable_files: usize,
    pub localizable: usize,
    pub not_available: usize,
    pub internal: usize,
    pub catalog_entries: usize,
}

impl ReviewStats {
    /// Files that were read and reviewed.
    pub fn reviewed_files(&self) -> usize {
        self.files_by_kind.values().sum()
    }

    pub fn strings(&self) -> usize {
        self.localizable + self.not_available + self.internal
    }
}

/// What one file contributed.
enum FileOutcome {
    Scanned(ScanResults),
    Catalog(Vec<CatalogEntry>),
    Unreadable(String),
}

/// Drives a review run: configuration, file discovery and the parallel scan.
///
/// The scan itself is lazy and runs on first access to [`Self::review_data`].
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--min-words 3`)
/// 2. `.i18nreviewrc.json` config file
/// 3. Built-in defaults
pub struct ReviewContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    pub root_dir: PathBuf,
    /// Files to review, with what they are reviewed as.
    pub files: BTreeMap<String, FileKind>,
    pub verbose: bool,
    style: ReviewStyle,
    heuristics: Arc<Heuristics>,
    review_data: OnceCell<ReviewData>,
}

impl ReviewContext {
    /// Load configuration, apply CLI overrides and collect the files to review.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or an override is.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .i18nreviewrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        apply_overrides(&mut config, common_args);
        config
            .validate()
            .context("Invalid command line arguments")?;

        let scan_result = scan_files(path, &config.includes, &config.ignores, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let style = config.review_style();
        let heuristics = Arc::new(config.to_heuristics());
        tracing::debug!(
            files = scan_result.files.len(),
            checks = ?style,
            diagnostics = heuristics.diagnostics().len(),
            "review context ready"
        );

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            style,
            heuristics,
            review_data: OnceCell::new(),
        })
    }

    pub fn style(&self) -> ReviewStyle {
        self.style
    }

    pub fn heuristics(&self) -> &Arc<Heuristics> {
        &self.heuristics
    }

    /// Scan every file (lazy initialization).
    ///
    /// Files are read and scanned in parallel, one scanner per file sharing
    /// the heuristic tables. The finalize pass and the catalog comparison run
    /// once, over the merged results.
    pub fn review_data(&self) -> &ReviewData {
        self.review_data.get_or_init(|| {
            let heuristics = &self.heuristics;
            let options = ScanOptions {
                style: self.style,
                max_line_length: self.config.max_line_length,
            };
            let files: Vec<(&String, &FileKind)> = self.files.iter().collect();
            let outcomes: Vec<(String, FileOutcome)> = files
                .par_iter()
                .map(|&(file_path, &kind)| {
                    (
                        file_path.clone(),
                        review_file(file_path, kind, heuristics, options),
                    )
                })
                .collect();

            let mut data = ReviewData::default();
            let mut catalogs = CatalogScanner::new(
                Arc::clone(&self.heuristics),
                CheckOptions {
                    style: self.style,
                    review_fuzzy: self.config.review_fuzzy_translations,
                },
            );

            for (file_path, outcome) in outcomes {
                match outcome {
                    FileOutcome::Scanned(results) => data.sources.merge(results),
                    FileOutcome::Catalog(entries) => catalogs.extend(entries),
                    FileOutcome::Unreadable(reason) => {
                        if self.verbose {
                            eprintln!("Warning: {} - {}", file_path, reason);
                        }
                        data.unreadable.push((file_path, reason));
                    }
                }
            }

            data.sources.review(&self.heuristics, self.style);
            catalogs.review();
            data.catalog = catalogs.take_entries();
            data
        })
    }

    pub fn stats(&self) -> ReviewStats {
        let data = self.review_data();
        let mut files_by_kind = BTreeMap::new();
        for (file_path, kind) in &self.files {
            if !data.unreadable.iter().any(|(path, _)| path == file_path) {
                *files_by_kind.entry(*kind).or_insert(0) += 1;
            }
        }
        ReviewStats {
            files_by_kind,
            unreadable_files: data.unreadable.len(),
            localizable: data.sources.localizable.len(),
            not_available: data.sources.not_available.len(),
            internal: data.sources.internal.len(),
            catalog_entries: data.catalog.len(),
        }
    }
}

/// Read and scan one file with its own scanner.
fn review_file(
    file_path: &str,
    kind: FileKind,
    heuristics: &Arc<Heuristics>,
    options: ScanOptions,
) -> FileOutcome {
    let file = match TextFile::read(Path::new(file_path)) {
        Ok(file) => file,
        Err(e) => return FileOutcome::Unreadable(format!("{:#}", e)),
    };
    if file.needed_fallback {
        tracing::debug!(file = file_path, "not UTF-8, decoded as Windows-1252");
    }

    match kind {
        FileKind::CFamily => {
            let mut scanner = CppScanner::new(Arc::clone(heuristics), options);
            scanner.scan(&file.text, file_path);
            FileOutcome::Scanned(scanner.take_results())
        }
        FileKind::CSharp => {
            let mut scanner = CSharpScanner::new(Arc::clone(heuristics), options);
            scanner.scan(&file.text, file_path);
            FileOutcome::Scanned(scanner.take_results())
        }
        FileKind::Resource => {
            let mut scanner = ResourceScanner::new(Arc::clone(heuristics), options.style);
            scanner.scan(&file.text, file_path);
            FileOutcome::Scanned(scanner.take_results())
        }
        FileKind::Catalog => FileOutcome::Catalog(parse_catalog(&file.text, file_path)),
    }
}

fn apply_overrides(config: &mut Config, args: &CommonArgs) {
    if !args.checks.is_empty() {
        config.checks = args.checks.clone();
    }
    if let Some(min_words) = args.min_words {
        config.min_words_for_classification = min_words;
    }
    if let Some(max_line_length) = args.max_line_length {
        config.max_line_length = max_line_length;
    }
    if let Some(cpp_version) = args.cpp_version {
        config.min_cpp_version = cpp_version;
    }
    if args.fuzzy {
        config.review_fuzzy_translations = true;
    }
    if args.punctuation_translatable {
        config.allow_translating_punctuation_only = true;
    }
}
