//! URL helpers for frontend-backend communication.

/// Join an optional origin with an endpoint path.
///
/// Without a base the path stays relative, so the browser resolves it
/// against the page that hosts the panel.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// assert_eq!(api_url(None, "/account/crest/"), "/account/crest/");
/// assert_eq!(
///     api_url(Some("https://example.com/"), "/account/crest/"),
///     "https://example.com/account/crest/"
/// );
/// ```
pub fn api_url(base: Option<&str>, path: &str) -> String {
    match base {
        Some(base) if !base.is_empty() => {
            format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
        }
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url(None, "/account/crest/"), "/account/crest/");
        assert_eq!(api_url(Some(""), "/account/crest/"), "/account/crest/");
        assert_eq!(
            api_url(Some("http://localhost:8000"), "account/crest/"),
            "http://localhost:8000/account/crest/"
        );
    }
}
