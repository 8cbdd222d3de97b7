use crate::i18n::{
    detect_language, preference_cookie, read_cookie, LanguageDetection,
    PREFERRED_LANGUAGE_COOKIE, ROOT_PATH,
};
use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

/// Send visitors landing on `/` to their language's home page.
///
/// Every other path passes through untouched, so prerendered pages never pay
/// for header parsing and localized paths cannot loop.
pub async fn language_redirect(request: Request, next: Next) -> Response {
    if request.uri().path() != ROOT_PATH {
        return next.run(request).await;
    }

    let headers = request.headers();
    let stored = stored_preference(headers);
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let Some(detection) = detect_language(ROOT_PATH, stored, accept_language) else {
        return next.run(request).await;
    };

    debug!(
        lang = %detection.lang,
        should_set_cookie = detection.should_set_cookie,
        "Resolved root language"
    );
    redirect_response(detection)
}

fn stored_preference(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|cookies| read_cookie(cookies, PREFERRED_LANGUAGE_COOKIE))
}

/// 302 to `/{lang}/`, persisting the preference when it was just detected.
pub fn redirect_response(detection: LanguageDetection) -> Response {
    let mut response = (
        StatusCode::FOUND,
        [
            (header::LOCATION, detection.redirect_path()),
            (header::VARY, "Accept-Language, Cookie".to_string()),
        ],
    )
        .into_response();

    if detection.should_set_cookie {
        match HeaderValue::from_str(&preference_cookie(detection.lang)) {
            Ok(cookie) => {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
            Err(e) => warn!("Could not encode preference cookie: {}", e),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_redirect_with_cookie() {
        let response = redirect_response(LanguageDetection {
            lang: Language::Es,
            should_set_cookie: true,
        });

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/es/");
        assert_eq!(
            response.headers()[header::SET_COOKIE],
            "preferredLanguage=es; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn test_redirect_without_cookie() {
        let response = redirect_response(LanguageDetection {
            lang: Language::En,
            should_set_cookie: false,
        });

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/en/");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[test]
    fn test_stored_preference_across_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(
            header::COOKIE,
            HeaderValue::from_static("preferredLanguage=es"),
        );
        assert_eq!(stored_preference(&headers), Some("es"));
    }
}
