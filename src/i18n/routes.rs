//! Bilingual URL slug translation.
//!
//! English paths are canonical. Pages with a Spanish slug are listed in a
//! [`RouteMap`]; every other path (blog posts, assets) keeps the same slug in
//! both languages and only swaps its language prefix.

use crate::i18n::Language;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// English to Spanish slug pairs served by the site.
///
/// Add new routes here as pages are created.
pub const DEFAULT_ROUTES: &[(&str, &str)] = &[
    ("/about", "/sobre-ciara"),
    ("/contact", "/contacto"),
    ("/properties", "/propiedades"),
    ("/guides", "/guias"),
    ("/neighborhoods", "/vecindarios"),
    ("/calculators", "/calculadoras"),
    ("/blog", "/blog"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteMapError {
    #[error("duplicate English route '{0}'")]
    DuplicateEnglish(String),

    #[error("Spanish route '{spanish}' is mapped from both '{first}' and '{second}'")]
    DuplicateSpanish {
        spanish: String,
        first: String,
        second: String,
    },

    #[error("route '{0}' must start with '/' and must not end with '/'")]
    MalformedPath(String),
}

/// Validated bidirectional English/Spanish slug dictionary.
#[derive(Debug, Clone)]
pub struct RouteMap {
    to_spanish: HashMap<String, String>,
    to_english: HashMap<String, String>,
}

/// Built-in route map (initialized lazily)
static ROUTES: OnceLock<RouteMap> = OnceLock::new();

impl RouteMap {
    /// Build a route map, rejecting ambiguous or malformed entries.
    pub fn new<'a, I>(pairs: I) -> Result<Self, RouteMapError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut to_spanish: HashMap<String, String> = HashMap::new();
        let mut to_english: HashMap<String, String> = HashMap::new();

        for (english, spanish) in pairs {
            for path in [english, spanish] {
                if !path.starts_with('/') || path.len() < 2 || path.ends_with('/') {
                    return Err(RouteMapError::MalformedPath(path.to_string()));
                }
            }

            if to_spanish.contains_key(english) {
                return Err(RouteMapError::DuplicateEnglish(english.to_string()));
            }
            if let Some(first) = to_english.get(spanish) {
                return Err(RouteMapError::DuplicateSpanish {
                    spanish: spanish.to_string(),
                    first: first.clone(),
                    second: english.to_string(),
                });
            }

            to_spanish.insert(english.to_string(), spanish.to_string());
            to_english.insert(spanish.to_string(), english.to_string());
        }

        Ok(Self {
            to_spanish,
            to_english,
        })
    }

    /// Get the site's route map.
    ///
    /// # Panics
    /// Panics if [`DEFAULT_ROUTES`] is ill-formed; the tests below keep it
    /// well-formed.
    pub fn get() -> &'static RouteMap {
        ROUTES.get_or_init(|| {
            RouteMap::new(DEFAULT_ROUTES.iter().copied())
                .unwrap_or_else(|e| panic!("Invalid built-in route map: {}", e))
        })
    }

    /// Spanish slug for an English path, if mapped.
    pub fn spanish_for(&self, english: &str) -> Option<&str> {
        self.to_spanish.get(english).map(String::as_str)
    }

    /// English path for a Spanish slug, if mapped.
    pub fn english_for(&self, spanish: &str) -> Option<&str> {
        self.to_english.get(spanish).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.to_spanish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_spanish.is_empty()
    }

    /// Translate a language-neutral remainder between languages.
    ///
    /// Unmapped remainders pass through unchanged.
    fn translate<'p>(&'p self, remainder: &'p str, from: Language, to: Language) -> &'p str {
        let english = match from {
            Language::En => remainder,
            Language::Es => self.english_for(remainder).unwrap_or(remainder),
        };
        match to {
            Language::En => english,
            Language::Es => self.spanish_for(english).unwrap_or(english),
        }
    }

    /// Alternate-language URL for a path on this map.
    ///
    /// See [`alternate_url`].
    pub fn alternate_url(&self, path: &str, from: Language, to: Language) -> String {
        let remainder = strip_language(path);
        if remainder.is_empty() {
            return format!("/{}/", to.code());
        }
        format!("/{}{}/", to.code(), self.translate(remainder, from, to))
    }

    /// Canonical English URL for a path on this map.
    ///
    /// See [`english_url`].
    pub fn english_url(&self, path: &str) -> String {
        let remainder = strip_language(path);
        if remainder.is_empty() {
            return "/en/".to_string();
        }
        if self.to_spanish.contains_key(remainder) {
            return format!("/en{}/", remainder);
        }
        let english = self.english_for(remainder).unwrap_or(remainder);
        format!("/en{}/", english)
    }
}

/// Remove a leading `/en` or `/es` segment and one trailing slash.
///
/// The prefix is only removed when it is a whole segment, so `/english/`
/// keeps its slug.
pub fn strip_language(path: &str) -> &str {
    let without_lang = Language::ALL
        .iter()
        .find_map(|language| {
            let rest = path.strip_prefix('/')?.strip_prefix(language.code())?;
            (rest.is_empty() || rest.starts_with('/')).then_some(rest)
        })
        .unwrap_or(path);

    let trimmed = without_lang.strip_suffix('/').unwrap_or(without_lang);
    if trimmed == "/" {
        ""
    } else {
        trimmed
    }
}

/// Get the alternate language URL for a path on the site's route map.
///
/// # Arguments
/// * `path` - current URL path, with or without a language prefix
/// * `from` - language the path is written in
/// * `to` - target language
///
/// # Example
/// ```
/// use realtor_site_edge::i18n::{alternate_url, Language};
///
/// assert_eq!(alternate_url("/en/about/", Language::En, Language::Es), "/es/sobre-ciara/");
/// assert_eq!(alternate_url("/es/propiedades/", Language::Es, Language::En), "/en/properties/");
/// ```
pub fn alternate_url(path: &str, from: Language, to: Language) -> String {
    RouteMap::get().alternate_url(path, from, to)
}

/// Get the English equivalent URL for any path, used as the `x-default`
/// hreflang target.
pub fn english_url(path: &str) -> String {
    RouteMap::get().english_url(path)
}
