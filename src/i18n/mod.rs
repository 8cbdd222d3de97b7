//! Internationalization (i18n) module for the bilingual site.
//!
//! All language-related logic lives here: which language a visitor is sent
//! to, how URLs are translated between English and Spanish, and the UI labels
//! of both languages. Everything in this module is pure and synchronous; the
//! server layer owns cookies and redirects.
//!
//! # Architecture
//!
//! - `language`: the closed `Language` enum (`en`, `es`)
//! - `registry`: language metadata (names, locales, canonical flag)
//! - `accept_language`: ranks an `Accept-Language` header
//! - `detection`: root-path resolution (cookie > header > English)
//! - `routes`: bilingual slug dictionary and URL translation
//! - `strings`: localized UI labels
//! - `navigation`: localized header links and hreflang alternates
//! - `welcome`: Spanish welcome popup heuristic
//!
//! # Example
//!
//! ```
//! use realtor_site_edge::i18n::{detect_language, alternate_url, Language};
//!
//! let detection = detect_language("/", None, "es-MX,en;q=0.5").unwrap();
//! assert_eq!(detection.lang, Language::Es);
//! assert!(detection.should_set_cookie);
//!
//! assert_eq!(alternate_url("/es/contacto/", Language::Es, Language::En), "/en/contact/");
//! ```

mod accept_language;
mod detection;
mod language;
mod navigation;
mod registry;
mod routes;
mod strings;
mod welcome;

pub use accept_language::{parse_accept_language, parse_language_tags, LanguageTag, DEFAULT_QUALITY};
pub use detection::{
    detect_language, preference_cookie, read_cookie, LanguageDetection,
    PREFERENCE_MAX_AGE_SECS, PREFERRED_LANGUAGE_COOKIE, ROOT_PATH,
};
pub use language::Language;
pub use navigation::{alternate_links, navigation_links, AlternateLinks, NavLink};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use routes::{
    alternate_url, english_url, strip_language, RouteMap, RouteMapError, DEFAULT_ROUTES,
};
pub use strings::{translate, SiteStrings, ENGLISH_STRINGS, SPANISH_STRINGS, TRANSLATION_KEYS};
pub use welcome::{should_show_welcome, WelcomeContext, WELCOME_DELAY, WELCOME_SEEN_KEY};
