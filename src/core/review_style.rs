use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// Independently toggleable checks.
    ///
    /// A check that is not enabled never populates its result bucket.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReviewStyle: u32 {
        /// Strings exposed for translation that look internal.
        const SUSPECT_L10N_STRING = 1 << 0;
        /// Translatable strings passed to internal (debug/log) functions.
        const SUSPECT_L10N_USAGE = 1 << 1;
        /// User-facing strings that were never exposed for translation.
        const NOT_L10N_AVAILABLE = 1 << 2;
        const DEPRECATED_MACRO = 1 << 3;
        const L10N_CONTAINS_URL = 1 << 4;
        const UNENCODED_EXT_ASCII = 1 << 5;
        const PRINTF_SINGLE_NUMBER = 1 << 6;
        const L10N_HAS_SURROUNDING_SPACES = 1 << 7;
        const MALFORMED_STRINGS = 1 << 8;
        const PRINTF_MISMATCH = 1 << 9;
        const ACCELERATOR_MISMATCH = 1 << 10;
        const FONTS = 1 << 11;
        const SPACE_AFTER_COMMENT = 1 << 12;
        const TRAILING_SPACES = 1 << 13;
        const TABS = 1 << 14;
        const WIDE_LINE = 1 << 15;
        const STRAY_SEMICOLON_BRACE = 1 << 16;

        const ALL_I18N = Self::SUSPECT_L10N_STRING.bits()
            | Self::SUSPECT_L10N_USAGE.bits()
            | Self::NOT_L10N_AVAILABLE.bits()
            | Self::DEPRECATED_MACRO.bits()
            | Self::UNENCODED_EXT_ASCII.bits()
            | Self::PRINTF_SINGLE_NUMBER.bits();
        const ALL_L10N = Self::L10N_CONTAINS_URL.bits()
            | Self::L10N_HAS_SURROUNDING_SPACES.bits()
            | Self::MALFORMED_STRINGS.bits()
            | Self::PRINTF_MISMATCH.bits()
            | Self::ACCELERATOR_MISMATCH.bits()
            | Self::FONTS.bits();
        const ALL_FORMATTING = Self::SPACE_AFTER_COMMENT.bits()
            | Self::TRAILING_SPACES.bits()
            | Self::TABS.bits()
            | Self::WIDE_LINE.bits()
            | Self::STRAY_SEMICOLON_BRACE.bits();
    }
}

/// Names accepted in config files and on the command line.
const STYLE_NAMES: &[(&str, ReviewStyle)] = &[
    ("suspect-l10n-string", ReviewStyle::SUSPECT_L10N_STRING),
    ("suspect-l10n-usage", ReviewStyle::SUSPECT_L10N_USAGE),
    ("not-l10n-available", ReviewStyle::NOT_L10N_AVAILABLE),
    ("deprecated-macro", ReviewStyle::DEPRECATED_MACRO),
    ("l10n-contains-url", ReviewStyle::L10N_CONTAINS_URL),
    ("unencoded-ext-ascii", ReviewStyle::UNENCODED_EXT_ASCII),
    ("printf-single-number", ReviewStyle::PRINTF_SINGLE_NUMBER),
    (
        "l10n-has-surrounding-spaces",
        ReviewStyle::L10N_HAS_SURROUNDING_SPACES,
    ),
    ("malformed-strings", ReviewStyle::MALFORMED_STRINGS),
    ("printf-mismatch", ReviewStyle::PRINTF_MISMATCH),
    ("accelerator-mismatch", ReviewStyle::ACCELERATOR_MISMATCH),
    ("fonts", ReviewStyle::FONTS),
    ("space-after-comment", ReviewStyle::SPACE_AFTER_COMMENT),
    ("trailing-spaces", ReviewStyle::TRAILING_SPACES),
    ("tabs", ReviewStyle::TABS),
    ("wide-line", ReviewStyle::WIDE_LINE),
    ("stray-semicolon-brace", ReviewStyle::STRAY_SEMICOLON_BRACE),
    ("all-i18n", ReviewStyle::ALL_I18N),
    ("all-l10n", ReviewStyle::ALL_L10N),
    ("all-formatting", ReviewStyle::ALL_FORMATTING),
    ("all", ReviewStyle::all()),
];

/// Errors from parsing check names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewStyleError {
    #[error("unknown check '{0}'")]
    UnknownCheck(String),
}

impl ReviewStyle {
    /// Parse a single check name (case insensitive, `_` and `-` interchangeable).
    pub fn from_check_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        STYLE_NAMES
            .iter()
            .find(|(n, _)| *n == normalized)
            .map(|(_, style)| *style)
    }

    /// Parse a list of check names; an empty list means the default set.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ReviewStyleError> {
        if names.is_empty() {
            return Ok(Self::default());
        }
        names.iter().try_fold(Self::empty(), |acc, name| {
            Self::from_check_name(name.as_ref())
                .map(|style| acc | style)
                .ok_or_else(|| ReviewStyleError::UnknownCheck(name.as_ref().to_string()))
        })
    }

    /// All known single-check names, for help output and `init`.
    pub fn names() -> impl Iterator<Item = &'static str> {
        STYLE_NAMES
            .iter()
            .filter(|(_, style)| style.bits().count_ones() == 1)
            .map(|(name, _)| *name)
    }
}

impl Default for ReviewStyle {
    /// Everything except the noisier formatting checks.
    fn default() -> Self {
        Self::ALL_I18N | Self::ALL_L10N | Self::STRAY_SEMICOLON_BRACE
    }
}
