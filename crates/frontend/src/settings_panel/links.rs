//! Which clicks inside the panel become FollowLink requests.

/// Primary-button click without modifiers. Anything else (new tab, new
/// window, download) is left to the browser.
pub fn is_plain_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(ctrl || meta || shift || alt)
}

/// Whether an anchor target stays in the current browsing context.
pub fn targets_self(target: &str) -> bool {
    target.is_empty() || target.eq_ignore_ascii_case("_self")
}

/// Whether a resolved `href` points into the settings endpoint.
///
/// A relative `endpoint_url` is resolved against `page_origin`. Query and
/// fragment of `href` are ignored, so `/account/crest/?page=2` matches
/// `/account/crest/`.
pub fn is_endpoint_href(href: &str, page_origin: &str, endpoint_url: &str) -> bool {
    let endpoint = if endpoint_url.contains("://") {
        endpoint_url.to_string()
    } else {
        format!(
            "{}/{}",
            page_origin.trim_end_matches('/'),
            endpoint_url.trim_start_matches('/')
        )
    };
    let path = href.split(['?', '#']).next().unwrap_or(href);
    path.starts_with(&endpoint) || path == endpoint.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://map.example.org";

    #[test]
    fn test_plain_click() {
        assert!(is_plain_click(0, false, false, false, false));
        assert!(!is_plain_click(1, false, false, false, false));
        assert!(!is_plain_click(0, true, false, false, false));
        assert!(!is_plain_click(0, false, true, false, false));
        assert!(!is_plain_click(0, false, false, true, false));
        assert!(!is_plain_click(0, false, false, false, true));
    }

    #[test]
    fn test_targets_self() {
        assert!(targets_self(""));
        assert!(targets_self("_self"));
        assert!(!targets_self("_blank"));
    }

    #[test]
    fn test_endpoint_links_match() {
        let endpoint = "/account/crest/";
        assert!(is_endpoint_href("https://map.example.org/account/crest/", ORIGIN, endpoint));
        assert!(is_endpoint_href("https://map.example.org/account/crest", ORIGIN, endpoint));
        assert!(is_endpoint_href(
            "https://map.example.org/account/crest/?action=delete&id=3",
            ORIGIN,
            endpoint
        ));
        assert!(is_endpoint_href(
            "https://map.example.org/account/crest/add/#top",
            ORIGIN,
            endpoint
        ));
    }

    #[test]
    fn test_foreign_links_ignored() {
        let endpoint = "/account/crest/";
        assert!(!is_endpoint_href("https://map.example.org/account/profile/", ORIGIN, endpoint));
        assert!(!is_endpoint_href("https://map.example.org/account/crestfall/", ORIGIN, endpoint));
        assert!(!is_endpoint_href("https://login.eveonline.com/account/crest/", ORIGIN, endpoint));
    }

    #[test]
    fn test_absolute_endpoint() {
        let endpoint = "https://api.example.org/account/crest/";
        assert!(is_endpoint_href("https://api.example.org/account/crest/?p=1", ORIGIN, endpoint));
        assert!(!is_endpoint_href("https://map.example.org/account/crest/", ORIGIN, endpoint));
    }
}
