// src/utils/url.rs

//! URL manipulation utilities.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::error::Result;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query component the way calendar services expect.
///
/// # Examples
/// ```
/// use campcal::utils::url::encode_component;
///
/// assert_eq!(encode_component("Book it (now)"), "Book%20it%20(now)");
/// ```
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build `{base}/campsite/{id}`, keeping any path prefix on the base.
///
/// # Examples
/// ```
/// use campcal::utils::url::campsite_endpoint;
///
/// let url = campsite_endpoint("http://localhost:8000/api", "17").unwrap();
/// assert_eq!(url.as_str(), "http://localhost:8000/api/campsite/17");
/// ```
pub fn campsite_endpoint(base: &str, id: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(["campsite", id]);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(
            encode_component("Book Rainier Base Camp (reservations open)"),
            "Book%20Rainier%20Base%20Camp%20(reservations%20open)"
        );
        assert_eq!(encode_component("a,b&c=d/e"), "a%2Cb%26c%3Dd%2Fe");
        assert_eq!(encode_component("line1\nline2"), "line1%0Aline2");
    }

    #[test]
    fn test_encode_component_utf8() {
        assert_eq!(encode_component("May 1 – Oct 31"), "May%201%20%E2%80%93%20Oct%2031");
    }

    #[test]
    fn test_campsite_endpoint() {
        let url = campsite_endpoint("http://localhost:8000", "17").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/campsite/17");

        let url = campsite_endpoint("http://localhost:8000/api/", "17").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/campsite/17");
    }

    #[test]
    fn test_campsite_endpoint_escapes_id() {
        let url = campsite_endpoint("https://example.com", "lake cushman/2").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/campsite/lake%20cushman%2F2"
        );
    }

    #[test]
    fn test_campsite_endpoint_rejects_bad_base() {
        assert!(campsite_endpoint("mailto:someone@example.com", "1").is_err());
        assert!(campsite_endpoint("not a url", "1").is_err());
    }
}
