//! i18n-review - internationalization and localization review for C/C++ and
//! C# code bases
//!
//! Finds user-facing strings that were never exposed for translation,
//! translatable strings that look internal, translation calls inside debug
//! output, and inconsistencies between gettext catalog sources and their
//! translations. Windows resource scripts and a handful of formatting checks
//! are covered as well.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanners, classifier, catalog checker and the run driver
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Conversion of engine results into issues
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
