use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{ClassifierOptions, Heuristics, HeuristicsBuilder, ReviewStyle};

pub const CONFIG_FILE_NAME: &str = ".i18nreviewrc.json";

pub const DEFAULT_IGNORES: &[&str] = &["**/.git/**", "**/build/**", "**/third_party/**"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    /// Check names; empty means the default set.
    #[serde(default)]
    pub checks: Vec<String>,
    #[serde(default = "default_min_words")]
    pub min_words_for_classification: usize,
    #[serde(default)]
    pub allow_translating_punctuation_only: bool,
    #[serde(default = "default_true")]
    pub log_messages_can_be_translatable: bool,
    #[serde(default = "default_true")]
    pub exceptions_should_be_translatable: bool,
    #[serde(default = "default_cpp_version")]
    pub min_cpp_version: u8,
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    #[serde(default)]
    pub review_fuzzy_translations: bool,

    #[serde(default)]
    pub translation_functions: Vec<String>,
    #[serde(default)]
    pub non_translatable_functions: Vec<String>,
    #[serde(default)]
    pub internal_functions: Vec<String>,
    #[serde(default)]
    pub ignored_variable_patterns: Vec<String>,
    #[serde(default)]
    pub ignored_variable_types: Vec<String>,
    #[serde(default)]
    pub untranslatable_patterns: Vec<String>,
    #[serde(default)]
    pub font_names: Vec<String>,
    #[serde(default)]
    pub file_extensions: Vec<String>,
    #[serde(default)]
    pub internal_strings: Vec<String>,
}

fn default_ignores() -> Vec<String> {
    DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect()
}

fn default_min_words() -> usize {
    ClassifierOptions::default().min_words
}

fn default_true() -> bool {
    true
}

fn default_cpp_version() -> u8 {
    ClassifierOptions::default().min_cpp_version
}

fn default_max_line_length() -> usize {
    crate::core::scanner::DEFAULT_MAX_LINE_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: Vec::new(),
            checks: Vec::new(),
            min_words_for_classification: default_min_words(),
            allow_translating_punctuation_only: false,
            log_messages_can_be_translatable: true,
            exceptions_should_be_translatable: true,
            min_cpp_version: default_cpp_version(),
            max_line_length: default_max_line_length(),
            review_fuzzy_translations: false,
            translation_functions: Vec::new(),
            non_translatable_functions: Vec::new(),
            internal_functions: Vec::new(),
            ignored_variable_patterns: Vec::new(),
            ignored_variable_types: Vec::new(),
            untranslatable_patterns: Vec::new(),
            font_names: Vec::new(),
            file_extensions: Vec::new(),
            internal_strings: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error naming the field of the first invalid glob, regex or
    /// check name.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal paths, brackets included.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for (field, patterns) in [
            ("ignoredVariablePatterns", &self.ignored_variable_patterns),
            ("untranslatablePatterns", &self.untranslatable_patterns),
        ] {
            for pattern in patterns {
                Regex::new(pattern).with_context(|| {
                    format!("Invalid regex pattern in '{}': \"{}\"", field, pattern)
                })?;
            }
        }

        ReviewStyle::from_names(&self.checks).context("Invalid value in 'checks'")?;
        if self.min_words_for_classification == 0 {
            bail!("'minWordsForClassification' must be at least 1");
        }

        Ok(())
    }

    /// The active checks. Falls back to the default set for unknown names,
    /// which `validate` has already rejected for loaded files.
    pub fn review_style(&self) -> ReviewStyle {
        ReviewStyle::from_names(&self.checks).unwrap_or_default()
    }

    pub fn classifier_options(&self) -> ClassifierOptions {
        ClassifierOptions {
            min_words: self.min_words_for_classification,
            allow_punctuation_only: self.allow_translating_punctuation_only,
            log_messages_translatable: self.log_messages_can_be_translatable,
            exceptions_translatable: self.exceptions_should_be_translatable,
            min_cpp_version: self.min_cpp_version,
        }
    }

    /// Build the shared heuristic tables: defaults plus this config's extras.
    ///
    /// A pattern that fails to compile is skipped and recorded as a
    /// diagnostic on the returned tables.
    pub fn to_heuristics(&self) -> Heuristics {
        HeuristicsBuilder::new()
            .options(self.classifier_options())
            .add_i18n_functions(&self.translation_functions)
            .add_non_translatable_functions(&self.non_translatable_functions)
            .add_internal_functions(&self.internal_functions)
            .add_variable_types_to_ignore(&self.ignored_variable_types)
            .add_font_names(&self.font_names)
            .add_file_extensions(&self.file_extensions)
            .add_internal_strings(&self.internal_strings)
            .add_ignored_variable_patterns(&self.ignored_variable_patterns)
            .add_untranslatable_patterns(&self.untranslatable_patterns)
            .build()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config file");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.includes.is_empty());
        assert!(!config.ignores.is_empty());
        assert_eq!(config.min_words_for_classification, 2);
        assert_eq!(config.max_line_length, 120);
        assert_eq!(config.review_style(), ReviewStyle::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "ignores": ["**/vendor/**"],
              "includes": ["src"],
              "checks": ["not-l10n-available", "printf-mismatch"],
              "minWordsForClassification": 3,
              "translationFunctions": ["tr"],
              "reviewFuzzyTranslations": true
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.ignores, vec!["**/vendor/**"]);
        assert_eq!(config.includes, vec!["src"]);
        assert_eq!(
            config.review_style(),
            ReviewStyle::NOT_L10N_AVAILABLE | ReviewStyle::PRINTF_MISMATCH
        );
        assert_eq!(config.classifier_options().min_words, 3);
        assert!(config.review_fuzzy_translations);
        assert!(config.to_heuristics().is_i18n_function("tr"));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "ignores": ["**/dist/**"] }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.ignores, vec!["**/dist/**"]);
        assert!(config.log_messages_can_be_translatable);
        assert!(config.exceptions_should_be_translatable);
        assert_eq!(config.min_cpp_version, 14);
    }

    #[test]
    fn test_validate_rejects_bad_patterns() {
        let config = Config {
            untranslatable_patterns: vec!["(unclosed".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("untranslatablePatterns"));

        let config = Config {
            ignores: vec!["[".to_string()],
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("ignores"));

        let config = Config {
            checks: vec!["no-such-check".to_string()],
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("checks"));
    }

    #[test]
    fn test_bad_pattern_becomes_a_diagnostic() {
        let config = Config {
            ignored_variable_patterns: vec!["(bad".to_string(), "^tmp".to_string()],
            ..Default::default()
        };
        let heuristics = config.to_heuristics();
        assert_eq!(heuristics.diagnostics().len(), 1);
        assert!(heuristics.is_ignored_variable_name("tmpBuffer"));
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("gui");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "maxLineLength": 100 }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.max_line_length, 100);
    }

    #[test]
    fn test_load_config_rejects_invalid_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignoredVariablePatterns": ["[z-a]"] }"#,
        )
        .unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        assert!(json.contains("\"minWordsForClassification\": 2"));
        let config: Config = serde_json::from_str(&json).unwrap();
        assert!(config.validate().is_ok());
    }
}
