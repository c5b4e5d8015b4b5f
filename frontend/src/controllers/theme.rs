use web_sys::Element;

use crate::config::RuntimeConfig;
use crate::error::SiteError;
use crate::state::theme::{resolve_initial, resolve_startup, Theme, ThemeState, THEME_COOKIE};
use crate::utils::{cookie, dom};

pub const TOGGLE_ID: &str = "darkModeToggle";
const THEME_ATTR: &str = "data-theme";
const ACTIVE_CLASS: &str = "active";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn system_prefers_dark() -> bool {
    dom::window()
        .ok()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn apply_theme(root: &Element, toggle: Option<&Element>, theme: Theme, cookie_days: i64) {
    let _ = match theme.data_attribute() {
        Some(value) => root.set_attribute(THEME_ATTR, value),
        None => root.remove_attribute(THEME_ATTR),
    };
    if let Some(toggle) = toggle {
        dom::set_class(toggle, ACTIVE_CLASS, theme == Theme::Dark);
    }
    if let Err(err) = cookie::set_cookie(THEME_COOKIE, theme.as_cookie_value(), cookie_days) {
        log::warn!("could not persist theme: {err}");
    }
}

pub fn init(root: &Element, cfg: &RuntimeConfig) -> Result<ThemeState, SiteError> {
    let toggle = dom::by_id(TOGGLE_ID)?;
    let saved = cookie::get_cookie(THEME_COOKIE).unwrap_or_else(|err| {
        log::warn!("could not read theme cookie: {err}");
        None
    });
    let prefers_dark = system_prefers_dark();

    let state = ThemeState::new(resolve_initial(saved.as_deref(), prefers_dark));
    if let Some(theme) = resolve_startup(saved.as_deref(), prefers_dark) {
        apply_theme(root, toggle.as_ref(), theme, cfg.theme_cookie_days);
    }

    if let Some(toggle) = toggle {
        let root = root.clone();
        let days = cfg.theme_cookie_days;
        let target = toggle.clone();
        dom::listen(&toggle, "click", move |_| {
            let next = state.toggle();
            apply_theme(&root, Some(&target), next, days);
        })?;
    }

    Ok(state)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn applied_theme_matches_cookie() {
        let doc = dom::document().unwrap();
        let root = doc.create_element("html").unwrap();
        let toggle = doc.create_element("button").unwrap();

        apply_theme(&root, Some(&toggle), Theme::Dark, 1);
        assert_eq!(root.get_attribute(THEME_ATTR).as_deref(), Some("dark"));
        assert!(dom::has_class(&toggle, ACTIVE_CLASS));
        assert_eq!(cookie::get_cookie(THEME_COOKIE).unwrap().as_deref(), Some("dark"));

        apply_theme(&root, Some(&toggle), Theme::Light, 1);
        assert_eq!(root.get_attribute(THEME_ATTR), None);
        assert!(!dom::has_class(&toggle, ACTIVE_CLASS));
        assert_eq!(cookie::get_cookie(THEME_COOKIE).unwrap().as_deref(), Some("light"));
    }

    #[wasm_bindgen_test]
    fn saved_cookie_is_restored_on_init() {
        cookie::set_cookie(THEME_COOKIE, "dark", 1).unwrap();
        let doc = dom::document().unwrap();
        let root = doc.create_element("html").unwrap();

        let state = init(&root, &RuntimeConfig::default()).unwrap();
        assert_eq!(state.current(), Theme::Dark);
        assert_eq!(root.get_attribute(THEME_ATTR).as_deref(), Some("dark"));
    }
}
