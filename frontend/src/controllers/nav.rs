use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::SiteError;
use crate::state::nav::{anchor_target, MenuState};
use crate::utils::dom;

const MENU_TOGGLE: &str = ".menu-toggle";
const NAV: &str = ".nav";
const IN_PAGE_LINKS: &str = r##"a[href^="#"]"##;
const ACTIVE_CLASS: &str = "active";

fn smooth_scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn init(scope: &Element) -> Result<MenuState, SiteError> {
    let nav = dom::query_in(scope, NAV)?;
    let menu = MenuState::new(
        nav.as_ref()
            .map(|nav| dom::has_class(nav, ACTIVE_CLASS))
            .unwrap_or(false),
    );

    if let (Some(toggle), Some(nav)) = (dom::query_in(scope, MENU_TOGGLE)?, nav.clone()) {
        dom::listen(&toggle, "click", move |_| {
            let open = menu.toggle();
            dom::set_class(&nav, ACTIVE_CLASS, open);
            log::debug!("menu toggled: open={open}");
        })?;
    }

    for anchor in dom::query_all_in(scope, IN_PAGE_LINKS)? {
        let link = anchor.clone();
        let nav = nav.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Ok(Some(target)) = dom::by_id(id) else {
                return;
            };
            if menu.close() {
                if let Some(nav) = &nav {
                    dom::set_class(nav, ACTIVE_CLASS, false);
                }
            }
            smooth_scroll_to(&target);
        })?;
    }

    Ok(menu)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(html: &str) -> Element {
        let doc = dom::document().unwrap();
        let host = doc.create_element("div").unwrap();
        host.set_inner_html(html);
        doc.body().unwrap().append_child(&host).unwrap();
        host
    }

    fn click(scope: &Element, selector: &str) {
        dom::query_in(scope, selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    #[wasm_bindgen_test]
    fn menu_toggle_flips_nav_class() {
        let host = fixture(r#"<button class="menu-toggle"></button><nav class="nav"></nav>"#);
        let menu = init(&host).unwrap();
        let nav = dom::query_in(&host, ".nav").unwrap().unwrap();

        click(&host, ".menu-toggle");
        assert!(menu.is_open());
        assert!(dom::has_class(&nav, "active"));
        click(&host, ".menu-toggle");
        assert!(!dom::has_class(&nav, "active"));
        host.remove();
    }

    #[wasm_bindgen_test]
    fn anchor_to_existing_target_closes_menu() {
        let host = fixture(
            r##"<nav class="nav active"><a id="go" href="#nav-target">go</a></nav>
                <section id="nav-target"></section>"##,
        );
        let menu = init(&host).unwrap();
        let before = dom::window().unwrap().location().hash().unwrap();

        click(&host, "#go");
        assert!(!menu.is_open());
        let nav = dom::query_in(&host, ".nav").unwrap().unwrap();
        assert!(!dom::has_class(&nav, "active"));
        assert_eq!(dom::window().unwrap().location().hash().unwrap(), before);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn bare_hash_and_missing_target_leave_menu_open() {
        let host = fixture(
            r##"<nav class="nav active"><a id="bare" href="#">top</a><a id="gone" href="#nowhere">x</a></nav>"##,
        );
        let menu = init(&host).unwrap();

        click(&host, "#bare");
        click(&host, "#gone");
        assert!(menu.is_open());
        host.remove();
    }
}
