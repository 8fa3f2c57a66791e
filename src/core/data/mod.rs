//! Core data types produced by the scanners and consumed by the rules.
//!
//! ## Module Structure
//!
//! - `record`: string literals found in source (`StringRecord`, `UsageInfo`)
//! - `diagnostic`: non-fatal parser warnings (`DiagnosticMessage`)
//! - `catalog`: translation catalog entries (`CatalogEntry`, `IssueKind`)
//! - `finding`: position-only findings (formatting, fonts, deprecated macros)

pub mod catalog;
pub mod diagnostic;
pub mod finding;
pub mod record;

pub use catalog::{CatalogEntry, FormatKind, IssueKind};
pub use diagnostic::DiagnosticMessage;
pub use finding::{Finding, FindingKind};
pub use record::{SourceLocation, StringRecord, UsageInfo};
