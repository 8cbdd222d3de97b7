//! Spanish welcome popup heuristic.
//!
//! Visitors sent to `/es/` by automatic detection get a one-time welcome.
//! Visitors who picked Spanish with the language toggle already know where
//! they are, so the popup stays hidden for them.

use crate::i18n::Language;
use std::time::Duration;

/// Browser storage key marking the popup as dismissed.
pub const WELCOME_SEEN_KEY: &str = "spanishWelcomeSeen";

/// Delay between page load and showing the popup.
pub const WELCOME_DELAY: Duration = Duration::from_secs(2);

/// Browser-side state the heuristic depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WelcomeContext {
    /// Raw value of the `spanishWelcomeSeen` storage entry
    pub seen_flag: Option<String>,
    /// Whether a stored language preference existed before this page load,
    /// which only the manual toggle writes
    pub had_preferred_lang: bool,
}

impl WelcomeContext {
    fn already_seen(&self) -> bool {
        self.seen_flag.as_deref() == Some("true")
    }
}

/// Whether the Spanish welcome popup should be shown on a page.
pub fn should_show_welcome(lang: Language, context: &WelcomeContext) -> bool {
    lang == Language::Es && !context.already_seen() && !context.had_preferred_lang
}
