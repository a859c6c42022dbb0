//! Server API Wrappers
//!
//! HTTP bindings to the editor backend, organized by domain. Mutating
//! requests carry the anti-forgery token read from the `csrftoken` cookie.

mod posts;
mod state;
mod tag_groups;
mod tags;

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cookie::csrf_token;

// Re-export all public items
pub use posts::*;
pub use state::*;
pub use tag_groups::*;
pub use tags::*;

/// JSON read endpoint for the whole editor state
pub const EDITOR_STATE_URL: &str = "/posts/api/editor_state";

/// Reorder endpoint for a post's tag list
pub fn post_reorder_url(post_id: u32) -> String {
    format!("/posts/api/{post_id}/reorder_tags")
}

/// Reorder endpoint for a tag group's tag list
pub fn tg_reorder_url(tg_id: u32) -> String {
    format!("/posts/api/tg/{tg_id}/reorder_tags")
}

/// Editor page path for the current selection; legacy form actions post here
pub fn editor_path(post_id: Option<u32>, tg_id: Option<u32>) -> String {
    match (post_id, tg_id) {
        (Some(post), Some(tg)) => format!("/posts/{post}/tgs/{tg}/"),
        (Some(post), None) => format!("/posts/{post}/"),
        (None, Some(tg)) => format!("/tgs/{tg}/"),
        (None, None) => "/".to_string(),
    }
}

async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    response.json::<R>().await.map_err(|e| e.to_string())
}

async fn post_json<B: Serialize, R: DeserializeOwned>(url: &str, body: &B) -> Result<R, String> {
    let token = csrf_token().unwrap_or_default();
    let response = Request::post(url)
        .header("X-CSRFToken", &token)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<R>().await.map_err(|e| e.to_string())
}

/// Submit a legacy editor form action. The response body (a redirect back to
/// the editor page) is ignored; callers refetch state afterwards.
async fn post_form(path: &str, action: &str, fields: &[(&str, &str)]) -> Result<(), String> {
    let token = csrf_token().unwrap_or_default();
    let mut pairs = vec![("action", action)];
    pairs.extend_from_slice(fields);

    let response = Request::post(path)
        .header("X-CSRFToken", &token)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_encode(&pairs))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("Server returned {}", response.status()))
    }
}

const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, FORM_ENCODE_SET),
                utf8_percent_encode(value, FORM_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_urls_embed_the_object_id() {
        assert_eq!(post_reorder_url(42), "/posts/api/42/reorder_tags");
        assert_eq!(tg_reorder_url(7), "/posts/api/tg/7/reorder_tags");
    }

    #[test]
    fn editor_path_covers_every_selection() {
        assert_eq!(editor_path(None, None), "/");
        assert_eq!(editor_path(Some(3), None), "/posts/3/");
        assert_eq!(editor_path(None, Some(9)), "/tgs/9/");
        assert_eq!(editor_path(Some(3), Some(9)), "/posts/3/tgs/9/");
    }

    #[test]
    fn form_encoding_escapes_reserved_characters() {
        let body = form_encode(&[("action", "update_post_desc"), ("post_desc", "a b&c=d")]);
        assert_eq!(body, "action=update_post_desc&post_desc=a%20b%26c%3Dd");
    }

    #[test]
    fn form_encoding_keeps_safe_characters() {
        assert_eq!(form_encode(&[("tag_to_detach", "12")]), "tag_to_detach=12");
        assert_eq!(form_encode(&[("k", "a-b_c.d~e")]), "k=a-b_c.d~e");
    }
}
