//! Input Auto-Sizing
//!
//! Grow-to-content textareas and shrink-to-fit text inputs.

/// Resize a textarea to its content height.
/// Collapses to a minimum first so shrinking works too.
pub fn auto_grow(textarea: &web_sys::HtmlTextAreaElement) {
    let style = textarea.style();
    let _ = style.set_property("height", "5px");
    let _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
}

/// CSS width for a shrink-to-fit input holding `len` characters
pub fn input_width_ch(len: usize) -> String {
    format!("{}ch", len.max(1) + 1)
}

#[cfg(test)]
mod tests {
    use super::input_width_ch;

    #[test]
    fn width_tracks_value_length() {
        assert_eq!(input_width_ch(8), "9ch");
        assert_eq!(input_width_ch(1), "2ch");
    }

    #[test]
    fn empty_value_keeps_minimum_width() {
        assert_eq!(input_width_ch(0), "2ch");
    }
}
