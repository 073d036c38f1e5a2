const MAX_URL_LEN: usize = 2048;

/// Accepts an absolute http(s) URL and returns it trimmed.
///
/// The URL ends up inside a single container argument, so whitespace and
/// control characters are rejected outright.
pub fn validate_url(raw: &str) -> Result<&str, String> {
    let url = raw.trim();
    if url.is_empty() {
        return Err("url is required".to_string());
    }
    if url.len() > MAX_URL_LEN {
        return Err(format!("url exceeds {MAX_URL_LEN} characters"));
    }
    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("url must not contain whitespace or control characters".to_string());
    }

    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| "url must start with http:// or https://".to_string())?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err("url has no host".to_string());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(validate_url("https://shop.example.test/cart"), Ok("https://shop.example.test/cart"));
        assert_eq!(validate_url("  http://localhost:8080 "), Ok("http://localhost:8080"));
    }

    #[test]
    fn rejects_bad_input() {
        for bad in ["", "   ", "ftp://x", "shop.example.test", "http://", "https:///path", "http://a b", "http://x\n"] {
            assert!(validate_url(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rejects_overlong_url() {
        let url = format!("https://x/{}", "a".repeat(MAX_URL_LEN));
        assert!(validate_url(&url).is_err());
    }
}
