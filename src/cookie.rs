//! Cookie Access
//!
//! Reads the anti-forgery token (and any other cookie) from `document.cookie`.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Cookie holding the anti-forgery token
pub const CSRF_COOKIE: &str = "csrftoken";

/// Read a cookie by name from the current document
pub fn cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let raw = document.cookie().ok()?;
    parse_cookie(&raw, name)
}

/// Anti-forgery token for mutating requests
pub fn csrf_token() -> Option<String> {
    cookie(CSRF_COOKIE)
}

/// Find `name=` in a raw cookie header string and percent-decode its value
fn parse_cookie(raw: &str, name: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    for part in raw.split(';') {
        let part = part.trim();
        let value = part
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='));
        if let Some(value) = value {
            return Some(percent_decode_str(value).decode_utf8_lossy().into_owned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::parse_cookie;

    #[test]
    fn finds_cookie_among_many() {
        let raw = "sessionid=abc123; csrftoken=tok456; theme=dark";
        assert_eq!(parse_cookie(raw, "csrftoken").as_deref(), Some("tok456"));
        assert_eq!(parse_cookie(raw, "sessionid").as_deref(), Some("abc123"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(parse_cookie("sessionid=abc", "csrftoken"), None);
        assert_eq!(parse_cookie("", "csrftoken"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        // Neither a prefix nor a suffix of the requested name may match
        let raw = "xcsrftoken=wrong; csrftokenx=wrong2; csrftoken=right";
        assert_eq!(parse_cookie(raw, "csrftoken").as_deref(), Some("right"));
    }

    #[test]
    fn value_is_percent_decoded() {
        let raw = "csrftoken=a%2Bb%3Dc";
        assert_eq!(parse_cookie(raw, "csrftoken").as_deref(), Some("a+b=c"));
    }

    #[test]
    fn first_match_wins() {
        let raw = "csrftoken=first; csrftoken=second";
        assert_eq!(parse_cookie(raw, "csrftoken").as_deref(), Some("first"));
    }

    #[test]
    fn whitespace_around_pairs_is_trimmed() {
        let raw = "  sessionid=abc ;  csrftoken=tok  ";
        assert_eq!(parse_cookie(raw, "csrftoken").as_deref(), Some("tok"));
    }

    #[test]
    fn empty_value_is_kept() {
        assert_eq!(parse_cookie("csrftoken=", "csrftoken").as_deref(), Some(""));
    }
}
