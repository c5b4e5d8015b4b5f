use leptos::*;

pub const THEME_COOKIE: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_cookie_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_cookie_value(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn data_attribute(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// None: keep the default light look and write no cookie.
pub fn resolve_startup(saved: Option<&str>, prefers_dark: bool) -> Option<Theme> {
    saved
        .and_then(Theme::from_cookie_value)
        .or(prefers_dark.then_some(Theme::Dark))
}

pub fn resolve_initial(saved: Option<&str>, prefers_dark: bool) -> Theme {
    resolve_startup(saved, prefers_dark).unwrap_or(Theme::Light)
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: create_rw_signal(initial),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme.get_untracked().toggled();
        self.set_theme(next);
        next
    }

    pub fn current(&self) -> Theme {
        self.theme.get_untracked()
    }
}
