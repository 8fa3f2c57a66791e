//! Rule implementations.
//!
//! Each rule has a `check_*_issues(&ReviewContext)` entry point and a pure
//! function over the engine's result sets that it delegates to.
//!
//! ## Module Structure
//!
//! - `helpers`: rule to check mapping
//! - `not_available`: user-facing strings never exposed for translation
//! - `suspect`: internal-looking translatable strings and suspect usages
//! - `string_content`: URLs, lone placeholders, spacing and markup
//! - `findings`: deprecated macros, encoding, fonts and formatting
//! - `catalog`: catalog consistency

pub mod catalog;
pub mod findings;
pub mod helpers;
pub mod not_available;
pub mod string_content;
pub mod suspect;

pub use helpers::{finding_rule, is_enabled, rule_style};
