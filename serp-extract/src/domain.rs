//! Display-domain derivation for result links.

use url::Url;

/// Return the display domain of `url`: lowercase host with one leading
/// `www.` removed.
///
/// Never fails. When `url` cannot be parsed as an absolute URL with a host,
/// it is returned verbatim, so callers must not assume a valid host.
///
/// # Examples
///
/// ```
/// use serp_extract::domain::domain_of;
///
/// assert_eq!(domain_of("https://www.example.com/x"), "example.com");
/// assert_eq!(domain_of("not a url"), "not a url");
/// ```
pub fn domain_of(url: &str) -> String {
    host_of(url).unwrap_or_else(|| url.to_owned())
}

/// Like [`domain_of`] but `None` on malformed input.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    if host.is_empty() {
        return None;
    }
    let host = host.to_ascii_lowercase();
    Some(match host.strip_prefix("www.") {
        Some(bare) => bare.to_owned(),
        None => host,
    })
}

/// Returns `true` if `host` is `domain` or one of its subdomains.
pub fn host_matches(host: &str, domain: &str) -> bool {
    let host = host.trim_end_matches('.');
    let domain = domain.trim_start_matches('.');
    if host.eq_ignore_ascii_case(domain) {
        return true;
    }
    match host.len().checked_sub(domain.len()) {
        Some(split) if split > 0 => {
            host.as_bytes()[split - 1] == b'.'
                && host
                    .get(split..)
                    .is_some_and(|tail| tail.eq_ignore_ascii_case(domain))
        }
        _ => false,
    }
}
