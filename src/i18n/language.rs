//! Language type: the closed set of languages the site is published in.
//!
//! Free-form language strings (cookie values, URL segments, form fields) are
//! turned into a `Language` at the boundary. Past that point nothing compares
//! raw codes.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "es")]
    Es,
}

impl Language {
    /// Every supported language, canonical first.
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// Create a Language from a language code string.
    ///
    /// The match is exact: `"ES"` or `" es"` are rejected.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported
    /// * `Err` if the code is not found
    pub fn from_code(code: &str) -> Result<Language> {
        match Self::parse_exact(code) {
            Some(language) => Ok(language),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Exact-match parse used for stored preferences.
    pub fn parse_exact(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// Extract the language from the first segment of a URL path.
    ///
    /// Falls back to the canonical language when the segment is missing or is
    /// not exactly a supported code (`/essential/` is English, not Spanish).
    pub fn from_path(path: &str) -> Language {
        path.split('/')
            .nth(1)
            .and_then(Self::parse_exact)
            .unwrap_or_else(Language::canonical)
    }

    /// Get the canonical (source) language.
    ///
    /// Untranslated routes and the `x-default` alternate resolve to it.
    pub fn canonical() -> Language {
        LanguageRegistry::get().canonical().language
    }

    /// Get the ISO 639-1 language code (e.g., "en", "es").
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config_for(*self)
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Variant Tests ====================

    #[test]
    fn test_english_variant() {
        let english = Language::En;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_spanish_variant() {
        let spanish = Language::Es;
        assert_eq!(spanish.code(), "es");
        assert_eq!(spanish.name(), "Spanish");
        assert!(!spanish.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::En);
    }

    #[test]
    fn test_from_code_spanish() {
        let language = Language::from_code("es").expect("Should succeed");
        assert_eq!(language, Language::Es);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_parse_exact_rejects_padding_and_case() {
        assert_eq!(Language::parse_exact(" es "), None);
        assert_eq!(Language::parse_exact("ES"), None);
        assert_eq!(Language::parse_exact("es-MX"), None);
    }

    // ==================== from_path Tests ====================

    #[test]
    fn test_from_path_spanish_prefix() {
        assert_eq!(Language::from_path("/es/about/"), Language::Es);
    }

    #[test]
    fn test_from_path_english_prefix() {
        assert_eq!(Language::from_path("/en/contact/"), Language::En);
    }

    #[test]
    fn test_from_path_root_defaults_to_english() {
        assert_eq!(Language::from_path("/"), Language::En);
        assert_eq!(Language::from_path(""), Language::En);
    }

    #[test]
    fn test_from_path_lookalike_segment_is_not_a_language() {
        assert_eq!(Language::from_path("/essential/"), Language::En);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(Language::canonical(), Language::En);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Es.to_string(), "es");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Es).unwrap();
        assert_eq!(json, "\"es\"");

        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);

        assert!(serde_json::from_str::<Language>("\"fr\"").is_err());
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::En.native_name(), "English");
        assert_eq!(Language::Es.native_name(), "Español");
    }
}
