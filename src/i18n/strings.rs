use crate::i18n::Language;

/// All localized UI labels for a language
#[derive(Debug, Clone)]
pub struct SiteStrings {
    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_properties: &'static str,
    pub nav_about: &'static str,
    pub nav_guides: &'static str,
    pub nav_blog: &'static str,
    pub nav_contact: &'static str,

    // ==================== Call-to-Actions ====================
    pub cta_search: &'static str,
    pub cta_value: &'static str,
    pub cta_schedule: &'static str,
    pub cta_download: &'static str,

    // ==================== Common UI ====================
    pub common_read_more: &'static str,
    pub common_learn_more: &'static str,
    pub common_view_all: &'static str,
    pub common_submit: &'static str,

    // ==================== Errors ====================
    pub error_not_found: &'static str,
    pub error_generic: &'static str,

    // ==================== Welcome Popup ====================
    pub welcome_title: &'static str,
    pub welcome_body: &'static str,
    pub welcome_dismiss: &'static str,
}

/// Every translation key, in the dotted form used by page templates.
pub const TRANSLATION_KEYS: &[&str] = &[
    "nav.home",
    "nav.properties",
    "nav.about",
    "nav.guides",
    "nav.blog",
    "nav.contact",
    "cta.search",
    "cta.value",
    "cta.schedule",
    "cta.download",
    "common.readMore",
    "common.learnMore",
    "common.viewAll",
    "common.submit",
    "error.notFound",
    "error.generic",
    "welcome.title",
    "welcome.body",
    "welcome.dismiss",
];

impl SiteStrings {
    /// Get the strings for a language
    pub fn for_language(lang: Language) -> &'static SiteStrings {
        match lang {
            Language::En => &ENGLISH_STRINGS,
            Language::Es => &SPANISH_STRINGS,
        }
    }

    /// Look up a label by its dotted key
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        let value = match key {
            "nav.home" => self.nav_home,
            "nav.properties" => self.nav_properties,
            "nav.about" => self.nav_about,
            "nav.guides" => self.nav_guides,
            "nav.blog" => self.nav_blog,
            "nav.contact" => self.nav_contact,
            "cta.search" => self.cta_search,
            "cta.value" => self.cta_value,
            "cta.schedule" => self.cta_schedule,
            "cta.download" => self.cta_download,
            "common.readMore" => self.common_read_more,
            "common.learnMore" => self.common_learn_more,
            "common.viewAll" => self.common_view_all,
            "common.submit" => self.common_submit,
            "error.notFound" => self.error_not_found,
            "error.generic" => self.error_generic,
            "welcome.title" => self.welcome_title,
            "welcome.body" => self.welcome_body,
            "welcome.dismiss" => self.welcome_dismiss,
            _ => return None,
        };
        Some(value)
    }
}

/// Translate a dotted key, falling back to English and then to the key itself
pub fn translate<'k>(key: &'k str, lang: Language) -> &'k str {
    SiteStrings::for_language(lang)
        .lookup(key)
        .filter(|value| !value.is_empty())
        .or_else(|| ENGLISH_STRINGS.lookup(key))
        .unwrap_or(key)
}

// ==================== English Strings ====================

/// English UI strings (canonical)
pub static ENGLISH_STRINGS: SiteStrings = SiteStrings {
    nav_home: "Home",
    nav_properties: "Properties",
    nav_about: "About Ciara",
    nav_guides: "Guides",
    nav_blog: "Blog",
    nav_contact: "Contact",

    cta_search: "Search Properties",
    cta_value: "Get Home Value",
    cta_schedule: "Schedule a Call",
    cta_download: "Download Guide",

    common_read_more: "Read More",
    common_learn_more: "Learn More",
    common_view_all: "View All",
    common_submit: "Submit",

    error_not_found: "Page Not Found",
    error_generic: "Something went wrong",

    welcome_title: "Welcome!",
    welcome_body: "Hi, I'm Ciara. I help families buy and sell homes in English and Spanish.",
    welcome_dismiss: "Continue",
};

// ==================== Spanish Strings ====================

/// Spanish UI strings
pub static SPANISH_STRINGS: SiteStrings = SiteStrings {
    nav_home: "Inicio",
    nav_properties: "Propiedades",
    nav_about: "Sobre Ciara",
    nav_guides: "Guías",
    nav_blog: "Blog",
    nav_contact: "Contacto",

    cta_search: "Buscar Propiedades",
    cta_value: "Valor de Tu Casa",
    cta_schedule: "Programar Llamada",
    cta_download: "Descargar Guía",

    common_read_more: "Leer Más",
    common_learn_more: "Saber Más",
    common_view_all: "Ver Todo",
    common_submit: "Enviar",

    error_not_found: "Página No Encontrada",
    error_generic: "Algo salió mal",

    welcome_title: "¡Bienvenido!",
    welcome_body: "Hola, soy Ciara. Ayudo a familias a comprar y vender casas en español e inglés.",
    welcome_dismiss: "Continuar",
};
