//! Root-path language resolution.
//!
//! Decides which language a visitor landing on `/` should be sent to and
//! whether their preference still needs to be remembered. Everything here is
//! pure: the caller reads the cookie, performs the redirect and writes the
//! `Set-Cookie` header.
//!
//! Priority: stored preference > `Accept-Language` > English.

use crate::i18n::{parse_accept_language, Language};

/// Name of the cookie holding the visitor's language preference.
pub const PREFERRED_LANGUAGE_COOKIE: &str = "preferredLanguage";

/// One year, in seconds.
pub const PREFERENCE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// The only path that triggers language detection.
pub const ROOT_PATH: &str = "/";

/// Outcome of resolving the language for a root-path request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDetection {
    pub lang: Language,
    /// True when no valid preference was stored and one should be written
    pub should_set_cookie: bool,
}

impl LanguageDetection {
    /// Redirect target for this resolution (`/en/` or `/es/`).
    pub fn redirect_path(&self) -> String {
        format!("/{}/", self.lang.code())
    }
}

/// Resolve the language for a request.
///
/// # Arguments
/// * `path` - request path
/// * `stored_preference` - raw `preferredLanguage` cookie value, if any
/// * `accept_language` - raw `Accept-Language` header (empty when absent)
///
/// # Returns
/// `None` for every path other than `/`, meaning the request passes through
/// unmodified. The stored preference is honored only when it is exactly `en`
/// or `es`.
pub fn detect_language(
    path: &str,
    stored_preference: Option<&str>,
    accept_language: &str,
) -> Option<LanguageDetection> {
    if path != ROOT_PATH {
        return None;
    }

    if let Some(lang) = stored_preference.and_then(Language::parse_exact) {
        return Some(LanguageDetection {
            lang,
            should_set_cookie: false,
        });
    }

    Some(LanguageDetection {
        lang: parse_accept_language(accept_language),
        should_set_cookie: true,
    })
}

/// Build the `Set-Cookie` value persisting a language preference.
pub fn preference_cookie(lang: Language) -> String {
    format!(
        "{PREFERRED_LANGUAGE_COOKIE}={}; Path=/; Max-Age={PREFERENCE_MAX_AGE_SECS}; SameSite=Lax",
        lang.code()
    )
}

/// Extract a cookie's raw value from a `Cookie` header.
///
/// The value is returned untouched so that padded or malformed preferences
/// are rejected by [`detect_language`] rather than repaired here.
pub fn read_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then_some(value)
    })
}
