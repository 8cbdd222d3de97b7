//! Accept-Language prioritization.
//!
//! Turns a raw `Accept-Language` header into the single best supported
//! [`Language`]. Parsing never fails: entries that cannot be understood are
//! skipped and weights that cannot be read count as `1.0`.

use crate::i18n::Language;

/// Weight used when an entry carries no readable `q=` parameter.
pub const DEFAULT_QUALITY: f32 = 1.0;

/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageTag {
    /// Lower-cased tag, e.g. `es-mx`
    pub tag: String,
    /// Quality weight in `[0, 1]`
    pub quality: f32,
}

impl LanguageTag {
    /// Primary subtag (`es` for `es-mx`).
    pub fn primary(&self) -> &str {
        self.tag.split('-').next().unwrap_or_default()
    }

    /// Supported language this tag selects, if any.
    ///
    /// Matches the bare code or the code followed by a region (`es`, `es-mx`),
    /// but not lookalikes such as `est`.
    pub fn supported_language(&self) -> Option<Language> {
        let primary = self.primary();
        Language::ALL
            .into_iter()
            .find(|language| language.code() == primary)
    }
}

/// Parse the header into entries ranked by descending quality.
///
/// Entries with equal quality keep their header order.
pub fn parse_language_tags(header: &str) -> Vec<LanguageTag> {
    let mut entries: Vec<LanguageTag> = header
        .split(',')
        .map(|entry| {
            let mut segments = entry.trim().split(';');
            let tag = segments
                .next()
                .unwrap_or_default()
                .trim()
                .to_lowercase();
            let quality = segments
                .find_map(|param| param.trim().strip_prefix("q="))
                .map_or(DEFAULT_QUALITY, parse_quality);
            LanguageTag { tag, quality }
        })
        .filter(|entry| !entry.tag.is_empty())
        .collect();

    // sort_by is stable, so ties preserve header order
    entries.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    entries
}

/// Return the best supported language for an `Accept-Language` header.
///
/// Falls back to English when the header is empty or names no supported
/// language.
pub fn parse_accept_language(header: &str) -> Language {
    parse_language_tags(header)
        .iter()
        .find_map(LanguageTag::supported_language)
        .unwrap_or(Language::En)
}

/// Read the leading run of digits and dots after `q=`.
///
/// Trailing garbage is ignored (`0.5x` is 0.5) and a second dot ends the
/// number (`0.5.1` is 0.5). No leading number at all (`-1`, `abc`) means the
/// default weight.
fn parse_quality(raw: &str) -> f32 {
    let end = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(raw.len());
    let mut numeric = &raw[..end];
    if let Some((second_dot, _)) = numeric.match_indices('.').nth(1) {
        numeric = &numeric[..second_dot];
    }
    numeric
        .parse::<f32>()
        .map_or(DEFAULT_QUALITY, |q| q.clamp(0.0, 1.0))
}
