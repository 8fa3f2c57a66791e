//! Helper functions shared by the rules.

use crate::{
    core::{ReviewStyle, data::FindingKind},
    issues::Rule,
};

/// The check that enables a rule.
pub fn rule_style(rule: Rule) -> ReviewStyle {
    match rule {
        Rule::NotL10nAvailable => ReviewStyle::NOT_L10N_AVAILABLE,
        Rule::SuspectL10nString => ReviewStyle::SUSPECT_L10N_STRING,
        Rule::SuspectL10nUsage => ReviewStyle::SUSPECT_L10N_USAGE,
        Rule::DeprecatedMacro => ReviewStyle::DEPRECATED_MACRO,
        Rule::L10nContainsUrl => ReviewStyle::L10N_CONTAINS_URL,
        Rule::UnencodedExtAscii => ReviewStyle::UNENCODED_EXT_ASCII,
        Rule::PrintfSingleNumber => ReviewStyle::PRINTF_SINGLE_NUMBER,
        Rule::L10nHasSurroundingSpaces => ReviewStyle::L10N_HAS_SURROUNDING_SPACES,
        Rule::MalformedStrings => ReviewStyle::MALFORMED_STRINGS,
        Rule::PrintfMismatch => ReviewStyle::PRINTF_MISMATCH,
        Rule::AcceleratorMismatch => ReviewStyle::ACCELERATOR_MISMATCH,
        Rule::Fonts => ReviewStyle::FONTS,
        Rule::SpaceAfterComment => ReviewStyle::SPACE_AFTER_COMMENT,
        Rule::TrailingSpaces => ReviewStyle::TRAILING_SPACES,
        Rule::Tabs => ReviewStyle::TABS,
        Rule::WideLine => ReviewStyle::WIDE_LINE,
        Rule::StraySemicolonBrace => ReviewStyle::STRAY_SEMICOLON_BRACE,
    }
}

/// Whether `style` enables `rule`.
pub fn is_enabled(style: ReviewStyle, rule: Rule) -> bool {
    style.contains(rule_style(rule))
}

pub fn finding_rule(kind: &FindingKind) -> Rule {
    match kind {
        FindingKind::DeprecatedMacro { .. } => Rule::DeprecatedMacro,
        FindingKind::SpaceAfterComment => Rule::SpaceAfterComment,
        FindingKind::TrailingSpaces => Rule::TrailingSpaces,
        FindingKind::Tab => Rule::Tabs,
        FindingKind::WideLine { .. } => Rule::WideLine,
        FindingKind::StraySemicolonBrace => Rule::StraySemicolonBrace,
        FindingKind::UnencodedExtAscii { .. } => Rule::UnencodedExtAscii,
        FindingKind::FontSize { .. } | FindingKind::FontName => Rule::Fonts,
    }
}
