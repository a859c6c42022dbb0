//! Frontend Models
//!
//! Data structures matching the server's JSON payloads.

use serde::{Deserialize, Serialize};

/// Tag data structure (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

/// Post data structure (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Tag group data structure (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroup {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Everything the editor page needs, in one payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditorState {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub tag_groups: Vec<TagGroup>,
    pub opened_post: Option<u32>,
    pub opened_tg: Option<u32>,
}

/// Body of a reorder commit, built fresh on every drag end
#[derive(Debug, Serialize)]
pub struct ReorderRequest<'a> {
    pub tag_order: &'a [String],
}

/// Server verdict on a reorder commit
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReorderResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Server-rendered tag line for the preview region (posts only)
    #[serde(default)]
    pub tag_text: Option<String>,
}

/// Render a tag list the way the server renders `tag_text`
pub fn format_tag_line(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| format!("#{}", tag.name))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_response_success_with_tag_text() {
        let resp: ReorderResponse =
            serde_json::from_str(r##"{"success": true, "tag_text": "#sunset #beach"}"##).unwrap();
        assert!(resp.success);
        assert_eq!(resp.error, None);
        assert_eq!(resp.tag_text.as_deref(), Some("#sunset #beach"));
    }

    #[test]
    fn reorder_response_failure_with_error() {
        let resp: ReorderResponse =
            serde_json::from_str(r#"{"success": false, "error": "Item not found"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("Item not found"));
        assert_eq!(resp.tag_text, None);
    }

    #[test]
    fn reorder_response_bare_success() {
        // Tag group commits come back without tag_text
        let resp: ReorderResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.tag_text, None);
    }

    #[test]
    fn reorder_request_serializes_tag_order() {
        let order = vec!["3".to_string(), "1".to_string(), "2".to_string()];
        let body = serde_json::to_string(&ReorderRequest { tag_order: &order }).unwrap();
        assert_eq!(body, r#"{"tag_order":["3","1","2"]}"#);
    }

    #[test]
    fn editor_state_defaults_missing_fields() {
        let state: EditorState = serde_json::from_str(r#"{"posts": []}"#).unwrap();
        assert!(state.posts.is_empty());
        assert!(state.tag_groups.is_empty());
        assert_eq!(state.opened_post, None);
    }

    #[test]
    fn post_without_tags_deserializes() {
        let post: Post =
            serde_json::from_str(r#"{"id": 1, "title": "t", "description": "d"}"#).unwrap();
        assert!(post.tags.is_empty());
    }

    #[test]
    fn tag_line_matches_server_rendering() {
        let tags = vec![
            Tag { id: 1, name: "sunset".into() },
            Tag { id: 2, name: "beach".into() },
        ];
        assert_eq!(format_tag_line(&tags), "#sunset #beach");
        assert_eq!(format_tag_line(&[]), "");
    }
}
