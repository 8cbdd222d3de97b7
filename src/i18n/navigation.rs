//! Localized links built on top of the slug translator: the header
//! navigation and the hreflang alternates every page advertises.

use crate::i18n::{alternate_url, english_url, translate, Language, LanguageRegistry};
use serde::Serialize;

/// Canonical English path and label key of each header entry, in display order.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "nav.home"),
    ("/properties", "nav.properties"),
    ("/about", "nav.about"),
    ("/guides", "nav.guides"),
    ("/blog", "nav.blog"),
    ("/contact", "nav.contact"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

/// Header navigation for a language, with localized labels and slugs.
pub fn navigation_links(lang: Language) -> Vec<NavLink> {
    NAV_ITEMS
        .iter()
        .map(|&(path, key)| NavLink {
            label: translate(key, lang),
            href: alternate_url(path, Language::En, lang),
        })
        .collect()
}

/// Per-language URLs of one page, for `<link rel="alternate">` tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLinks {
    /// Language of the page the links were computed for
    #[serde(skip)]
    pub current: Language,
    pub en: String,
    pub es: String,
    pub x_default: String,
}

impl AlternateLinks {
    /// Compute the alternates of a language-prefixed page path.
    ///
    /// The page language is read from the path prefix.
    pub fn for_path(path: &str) -> Self {
        let current = Language::from_path(path);
        Self {
            current,
            en: alternate_url(path, current, Language::En),
            es: alternate_url(path, current, Language::Es),
            x_default: english_url(path),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }

    /// Render hreflang tags with absolute URLs under `site_url`, followed by
    /// the Open Graph locale of the page and of its alternates.
    pub fn to_html(&self, site_url: &str) -> String {
        let base = site_url.trim_end_matches('/');
        let mut tags: Vec<String> = Language::ALL
            .iter()
            .map(|lang| {
                format!(
                    r#"<link rel="alternate" hreflang="{}" href="{}{}" />"#,
                    lang.code(),
                    base,
                    self.get(*lang)
                )
            })
            .collect();
        tags.push(format!(
            r#"<link rel="alternate" hreflang="x-default" href="{}{}" />"#,
            base, self.x_default
        ));
        for config in LanguageRegistry::get().list_all() {
            let property = if config.language == self.current {
                "og:locale"
            } else {
                "og:locale:alternate"
            };
            tags.push(format!(
                r#"<meta property="{}" content="{}" />"#,
                property,
                config.locale.replace('-', "_")
            ));
        }
        tags.join("\n")
    }
}

/// Alternate-language links for a page, see [`AlternateLinks::for_path`].
pub fn alternate_links(path: &str) -> AlternateLinks {
    AlternateLinks::for_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_navigation_uses_spanish_slugs() {
        let links = navigation_links(Language::Es);
        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "/es/",
                "/es/propiedades/",
                "/es/sobre-ciara/",
                "/es/guias/",
                "/es/blog/",
                "/es/contacto/"
            ]
        );
        assert_eq!(links[0].label, "Inicio");
    }

    #[test]
    fn test_english_navigation() {
        let links = navigation_links(Language::En);
        assert_eq!(links[2].href, "/en/about/");
        assert_eq!(links[2].label, "About Ciara");
    }

    #[test]
    fn test_alternates_from_spanish_page() {
        let links = AlternateLinks::for_path("/es/sobre-ciara/");
        assert_eq!(links.en, "/en/about/");
        assert_eq!(links.es, "/es/sobre-ciara/");
        assert_eq!(links.x_default, "/en/about/");
    }

    #[test]
    fn test_alternates_for_unmapped_blog_post() {
        let links = alternate_links("/en/blog/first-home/");
        assert_eq!(links.es, "/es/blog/first-home/");
        assert_eq!(links.x_default, "/en/blog/first-home/");
    }

    #[test]
    fn test_alternates_html() {
        let html = AlternateLinks::for_path("/en/contact/").to_html("https://ciararuiz.com/");
        assert!(html.contains(
            r#"<link rel="alternate" hreflang="es" href="https://ciararuiz.com/es/contacto/" />"#
        ));
        assert!(html.contains(
            r#"<link rel="alternate" hreflang="x-default" href="https://ciararuiz.com/en/contact/" />"#
        ));
        assert_eq!(html.lines().count(), 5);
    }

    #[test]
    fn test_alternates_html_open_graph_locales() {
        let html = alternate_links("/es/guias/").to_html("https://ciararuiz.com");
        assert!(html.contains(r#"<meta property="og:locale" content="es_US" />"#));
        assert!(html.contains(r#"<meta property="og:locale:alternate" content="en_US" />"#));
    }
}
