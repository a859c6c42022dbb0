//! Theme Switching
//!
//! Light/dark theme applied as a body class, persisted to local storage,
//! seeded from the system color scheme on first visit.

use crate::storage::{local_get, local_set};

/// Local storage key for the persisted theme
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Storage value
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Body class carrying the theme
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Toggle button label
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌞",
            Theme::Dark => "🌚",
        }
    }
}

/// Detect theme: from storage or from system, persisting the detected value
pub fn load() -> Theme {
    if let Some(theme) = local_get(THEME_KEY).and_then(|raw| Theme::from_str(&raw)) {
        return theme;
    }
    let theme = if prefers_dark() { Theme::Dark } else { Theme::Light };
    local_set(THEME_KEY, theme.as_str());
    theme
}

pub fn save(theme: Theme) {
    local_set(THEME_KEY, theme.as_str());
}

/// Swap the theme class on `<body>`
pub fn apply(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.remove_2(Theme::Light.class(), Theme::Dark.class());
    let _ = classes.add_1(theme.class());
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn storage_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("solarized"), None);
    }

    #[test]
    fn classes_and_icons_differ_per_theme() {
        assert_eq!(Theme::Light.class(), "theme-light");
        assert_eq!(Theme::Dark.class(), "theme-dark");
        assert_ne!(Theme::Light.icon(), Theme::Dark.icon());
    }
}
