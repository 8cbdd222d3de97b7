//! Language registry: Single source of truth for language metadata.
//!
//! The set of languages is closed (see [`Language`]); the registry only holds
//! what each language looks like to visitors and crawlers. It uses a
//! singleton pattern with `OnceLock` for thread-safe initialization.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Regional locale used in sitemaps and `og:locale` (e.g., "es-US")
    pub locale: &'static str,

    /// Whether this is the canonical language (only one should be true)
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get the configuration of a language.
    ///
    /// # Panics
    /// Panics if a `Language` variant has no registry entry, which is a
    /// programming error caught by the tests below.
    pub fn config_for(&self, language: Language) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|config| config.language == language)
            .expect("every Language variant has a registry entry")
    }

    /// Get all languages, canonical first.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|config| config.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// Default language configurations: English (canonical) and Spanish.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::En,
            name: "English",
            native_name: "English",
            locale: "en-US",
            is_canonical: true,
        },
        LanguageConfig {
            language: Language::Es,
            name: "Spanish",
            native_name: "Español",
            locale: "es-US",
            is_canonical: false,
        },
    ]
}
