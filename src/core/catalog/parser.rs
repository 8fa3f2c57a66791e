use crate::core::data::{CatalogEntry, FormatKind};

/// Field the next `"..."` continuation line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Context,
    Source,
    SourcePlural,
    Translation,
    TranslationPlural,
    /// `msgstr[2]` and up; read but not kept.
    OtherForm,
}

#[derive(Default)]
struct PendingEntry {
    line: usize,
    context: Option<String>,
    source: Option<String>,
    source_plural: Option<String>,
    translation: Option<String>,
    translation_plural: Option<String>,
    format_kind: FormatKind,
    fuzzy: bool,
    obsolete: bool,
    current: Option<Field>,
}

impl PendingEntry {
    fn has_translation(&self) -> bool {
        self.translation.is_some() || self.translation_plural.is_some()
    }

    /// Any message line seen; comments after it belong to the next entry.
    fn has_message(&self) -> bool {
        self.context.is_some() || self.source.is_some() || self.has_translation()
    }

    fn field(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Context => self.context.as_mut(),
            Field::Source => self.source.as_mut(),
            Field::SourcePlural => self.source_plural.as_mut(),
            Field::Translation => self.translation.as_mut(),
            Field::TranslationPlural => self.translation_plural.as_mut(),
            Field::OtherForm => None,
        }
    }

    fn start(&mut self, field: Field, value: String) {
        match field {
            Field::Context => self.context = Some(value),
            Field::Source => self.source = Some(value),
            Field::SourcePlural => self.source_plural = Some(value),
            Field::Translation => self.translation = Some(value),
            Field::TranslationPlural => self.translation_plural = Some(value),
            Field::OtherForm => {}
        }
        self.current = Some(field);
    }

    /// The finished entry; `None` for the header, obsolete entries and
    /// entries without a `msgid`.
    fn finish(self, file_path: &str) -> Option<CatalogEntry> {
        if self.obsolete {
            return None;
        }
        let source = self.source?;
        if source.is_empty() && self.context.is_none() {
            return None;
        }
        Some(CatalogEntry {
            file_path: file_path.to_string(),
            line: self.line,
            context: self.context,
            source,
            source_plural: self.source_plural,
            translation: self.translation.unwrap_or_default(),
            translation_plural: self.translation_plural,
            format_kind: self.format_kind,
            fuzzy: self.fuzzy,
            issues: Vec::new(),
        })
    }
}

/// Split gettext catalog text into entries.
///
/// Entries end at a blank line, or where a new `msgctxt`/`msgid` follows a
/// translation. Previous-message (`#|`) lines and obsolete (`#~`) entries
/// are ignored, as is the header entry.
pub fn parse_catalog(text: &str, file_path: &str) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    let mut pending = PendingEntry::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() {
            entries.extend(std::mem::take(&mut pending).finish(file_path));
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            // comments open the next entry
            if pending.has_message() {
                entries.extend(std::mem::take(&mut pending).finish(file_path));
            }
            if let Some(flags) = comment.strip_prefix(',') {
                for flag in flags.split(',').map(str::trim) {
                    match flag {
                        "fuzzy" => pending.fuzzy = true,
                        "c-format" => pending.format_kind = FormatKind::CLike,
                        "no-c-format" => pending.format_kind = FormatKind::None,
                        _ => {}
                    }
                }
            } else if comment.starts_with('~') {
                pending.obsolete = true;
            }
            pending.current = None;
            continue;
        }

        if line.starts_with('"') {
            if let Some(field) = pending.current
                && let Some(value) = pending.field(field)
            {
                value.push_str(&unquote(line));
            }
            continue;
        }

        let (keyword, rest) = line
            .split_once(|c: char| c.is_whitespace())
            .unwrap_or((line, ""));
        let field = match keyword {
            "msgctxt" => Field::Context,
            "msgid" => Field::Source,
            "msgid_plural" => Field::SourcePlural,
            "msgstr" | "msgstr[0]" => Field::Translation,
            "msgstr[1]" => Field::TranslationPlural,
            k if k.starts_with("msgstr[") => Field::OtherForm,
            _ => {
                tracing::debug!(file = file_path, line = index + 1, "unrecognised catalog line");
                pending.current = None;
                continue;
            }
        };

        // entries separated without a blank line
        let starts_entry = matches!(field, Field::Context | Field::Source);
        if starts_entry
            && (pending.has_translation()
                || (field == Field::Source && pending.source.is_some()))
        {
            entries.extend(std::mem::take(&mut pending).finish(file_path));
        }
        if field == Field::Source {
            pending.line = index + 1;
        }
        pending.start(field, unquote(rest.trim()));
    }
    entries.extend(pending.finish(file_path));

    tracing::debug!(file = file_path, entries = entries.len(), "catalog parsed");
    entries
}

/// Contents of one quoted catalog segment with C escapes resolved.
fn unquote(segment: &str) -> String {
    let inner = segment
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(segment);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
