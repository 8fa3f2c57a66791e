use crate::core::data::{DiagnosticMessage, Finding, StringRecord};
use crate::core::heuristics::Heuristics;
use crate::core::printf::is_single_number_command;
use crate::core::review_style::ReviewStyle;

/// Everything a scanner accumulated, bucketed by finding kind.
///
/// The first three buckets partition the literals: every literal that is not
/// explicitly marked non-translatable lands in exactly one of `localizable`,
/// `not_available` or `internal` (`not_available` only while the check is
/// enabled). The remaining string buckets are views filled by
/// [`ScanResults::review`].
#[derive(Debug, Clone, Default)]
pub struct ScanResults {
    /// Strings passed to a translation function.
    pub localizable: Vec<StringRecord>,
    /// User-facing strings never exposed for translation.
    pub not_available: Vec<StringRecord>,
    /// Strings that are internal by content or by context.
    pub internal: Vec<StringRecord>,
    /// Translatable strings whose translation call sits inside an internal call.
    pub localizable_in_internal_call: Vec<StringRecord>,

    /// Localizable strings that look internal.
    pub unsafe_localizable: Vec<StringRecord>,
    pub localizable_with_urls: Vec<StringRecord>,
    pub printf_single_number: Vec<StringRecord>,
    pub surrounding_spaces: Vec<StringRecord>,
    pub malformed: Vec<StringRecord>,

    /// Formatting, font, encoding and deprecated-macro findings.
    pub findings: Vec<Finding>,
    pub diagnostics: Vec<DiagnosticMessage>,
}

impl ScanResults {
    pub fn merge(&mut self, other: ScanResults) {
        self.localizable.extend(other.localizable);
        self.not_available.extend(other.not_available);
        self.internal.extend(other.internal);
        self.localizable_in_internal_call
            .extend(other.localizable_in_internal_call);
        self.unsafe_localizable.extend(other.unsafe_localizable);
        self.localizable_with_urls.extend(other.localizable_with_urls);
        self.printf_single_number.extend(other.printf_single_number);
        self.surrounding_spaces.extend(other.surrounding_spaces);
        self.malformed.extend(other.malformed);
        self.findings.extend(other.findings);
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Finalize pass: re-check every localizable string across the whole
    /// set. Safe to call repeatedly; derived buckets are rebuilt each time.
    pub fn review(&mut self, heuristics: &Heuristics, style: ReviewStyle) {
        self.unsafe_localizable.clear();
        self.localizable_with_urls.clear();
        self.printf_single_number.clear();
        self.surrounding_spaces.clear();
        self.malformed.clear();

        for record in &self.localizable {
            let text = record.text.as_str();
            if style.contains(ReviewStyle::SUSPECT_L10N_STRING)
                && heuristics.is_untranslatable_string(text, false)
            {
                self.unsafe_localizable.push(record.clone());
            }
            if style.contains(ReviewStyle::L10N_CONTAINS_URL) && heuristics.contains_url(text) {
                self.localizable_with_urls.push(record.clone());
            }
            if style.contains(ReviewStyle::PRINTF_SINGLE_NUMBER) && is_single_number_command(text)
            {
                self.printf_single_number.push(record.clone());
            }
            if style.contains(ReviewStyle::L10N_HAS_SURROUNDING_SPACES)
                && !text.trim().is_empty()
                && (text.starts_with([' ', '\t']) || text.ends_with([' ', '\t']))
            {
                self.surrounding_spaces.push(record.clone());
            }
            if style.contains(ReviewStyle::MALFORMED_STRINGS)
                && heuristics.has_malformed_markup(text)
            {
                self.malformed.push(record.clone());
            }
        }

        self.sort();
    }

    /// Order every bucket by file and position.
    pub fn sort(&mut self) {
        for bucket in [
            &mut self.localizable,
            &mut self.not_available,
            &mut self.internal,
            &mut self.localizable_in_internal_call,
            &mut self.unsafe_localizable,
            &mut self.localizable_with_urls,
            &mut self.printf_single_number,
            &mut self.surrounding_spaces,
            &mut self.malformed,
        ] {
            bucket.sort_by(|a, b| a.location.cmp(&b.location));
        }
        self.findings.sort_by(|a, b| a.location.cmp(&b.location));
    }

    /// Number of literals seen (one per literal, see the type docs).
    pub fn string_count(&self) -> usize {
        self.localizable.len() + self.not_available.len() + self.internal.len()
    }
}
