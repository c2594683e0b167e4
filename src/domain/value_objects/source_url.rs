//! Source locator rules.

use url::Url;

/// URL schemes accepted as description sources.
pub const SUPPORTED_SCHEMES: &[&str] = &["http", "https", "file"];

/// Whether `locator` is a syntactically well-formed, absolute source URL.
pub fn is_valid_source_url(locator: &str) -> bool {
    if locator.trim() != locator || locator.is_empty() {
        return false;
    }
    match Url::parse(locator) {
        Ok(url) => {
            SUPPORTED_SCHEMES.contains(&url.scheme())
                && (url.scheme() == "file" || url.host_str().is_some())
        }
        Err(_) => false,
    }
}

/// Case-insensitive locator comparison used for duplicate-source detection.
pub fn same_source(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_https_and_file_urls() {
        assert!(is_valid_source_url("http://example.com/service.wsdl"));
        assert!(is_valid_source_url("https://example.com:8443/a?wsdl"));
        assert!(is_valid_source_url("file:///tmp/service.wsdl"));
    }

    #[test]
    fn rejects_malformed_urls() {
        assert!(!is_valid_source_url(""));
        assert!(!is_valid_source_url("not a url"));
        assert!(!is_valid_source_url("example.com/service.wsdl"));
        assert!(!is_valid_source_url("ftp://example.com/service.wsdl"));
        assert!(!is_valid_source_url(" http://example.com/a.wsdl"));
    }

    #[test]
    fn same_source_ignores_case() {
        assert!(same_source("http://x/a.wsdl", "HTTP://X/A.WSDL"));
        assert!(!same_source("http://x/a.wsdl", "http://x/b.wsdl"));
    }
}
