//! Core review engine.
//!
//! Source files are scanned one buffer at a time by a scanner matching their
//! kind; per-file results are merged and reviewed once at the end.
//!
//! ## Module Structure
//!
//! - `data`: records, findings, catalog entries and diagnostics
//! - `review_style`: toggleable checks (`ReviewStyle`)
//! - `heuristics`: shared heuristic tables and their builder
//! - `classifier`: "does this string look internal?"
//! - `printf`: placeholder and accelerator tokenizers
//! - `resolver`: backward context resolution for string literals
//! - `scanner`: C-family and C# source scanners
//! - `resource`: resource-script string tables and dialog fonts
//! - `catalog`: gettext catalog parser and consistency checker
//! - `text_file`: byte-order-mark aware file decoding
//! - `file_scanner`: file discovery and kind detection
//! - `context`: the run driver (`ReviewContext`)

pub mod catalog;
pub mod classifier;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod heuristics;
pub mod printf;
pub mod resolver;
pub mod resource;
pub mod review_style;
pub mod scanner;
pub mod text_file;

pub use context::{ReviewContext, ReviewData, ReviewStats};
pub use heuristics::{ClassifierOptions, Heuristics, HeuristicsBuilder, HeuristicsError};
pub use review_style::{ReviewStyle, ReviewStyleError};
