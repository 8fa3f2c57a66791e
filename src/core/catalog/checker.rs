use crate::core::data::{CatalogEntry, FormatKind, IssueKind};
use crate::core::heuristics::Heuristics;
use crate::core::printf::{accelerators, printf_commands};
use crate::core::review_style::ReviewStyle;

/// Settings of one consistency check run.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    pub style: ReviewStyle,
    /// Compare fuzzy entries as well.
    pub review_fuzzy: bool,
}

/// Compare every entry's source with its translation and record the
/// problems on the entry. Previous issues are replaced, so the check can be
/// re-run.
pub fn check_entries(entries: &mut [CatalogEntry], heuristics: &Heuristics, options: CheckOptions) {
    for entry in entries.iter_mut() {
        entry.issues.clear();
        if entry.fuzzy && !options.review_fuzzy {
            continue;
        }
        check_entry(entry, heuristics, options.style);
    }
}

fn check_entry(entry: &mut CatalogEntry, heuristics: &Heuristics, style: ReviewStyle) {
    let mut issues = Vec::new();

    if style.contains(ReviewStyle::SUSPECT_L10N_STRING)
        && heuristics.is_untranslatable_string(&entry.source, false)
    {
        issues.push((
            IssueKind::SuspectSource,
            "String available for translation that is probably not meant to be translated"
                .to_string(),
        ));
    }
    if style.contains(ReviewStyle::L10N_CONTAINS_URL) && heuristics.contains_url(&entry.source) {
        issues.push((
            IssueKind::ContainsUrl,
            "Source string contains a URL or email address".to_string(),
        ));
    }

    let mut pairs = vec![(entry.source.as_str(), entry.translation.as_str())];
    if let (Some(source), Some(translation)) = (&entry.source_plural, &entry.translation_plural) {
        pairs.push((source.as_str(), translation.as_str()));
    }

    for (source, translation) in pairs {
        if translation.is_empty() {
            continue;
        }
        if style.contains(ReviewStyle::PRINTF_MISMATCH) && entry.format_kind == FormatKind::CLike {
            let expected = printf_commands(source);
            let actual = printf_commands(translation);
            if expected != actual {
                issues.push((
                    IssueKind::PrintfMismatch,
                    format!(
                        "Placeholders differ: source has [{}], translation has [{}]",
                        expected.join(", "),
                        actual.join(", ")
                    ),
                ));
            }
        }
        if style.contains(ReviewStyle::ACCELERATOR_MISMATCH) {
            let source_keys = accelerators(source);
            let translation_keys = accelerators(translation);
            if source_keys.is_empty() != translation_keys.is_empty() {
                let message = if source_keys.is_empty() {
                    "Translation has a keyboard accelerator the source does not have"
                } else {
                    "Source has a keyboard accelerator the translation does not have"
                };
                issues.push((IssueKind::AcceleratorMismatch, message.to_string()));
            }
        }
    }

    if !issues.is_empty() {
        tracing::debug!(
            file = %entry.file_path,
            line = entry.line,
            count = issues.len(),
            "catalog entry issues"
        );
    }
    entry.issues = issues;
}
