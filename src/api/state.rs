//! Editor State
//!
//! One read endpoint returning everything the editor page needs.

use crate::models::EditorState;

use super::{get_json, EDITOR_STATE_URL};

pub async fn fetch_editor_state() -> Result<EditorState, String> {
    get_json(EDITOR_STATE_URL).await
}
