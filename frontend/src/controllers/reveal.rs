use leptos::leptos_dom::helpers::window_event_listener_untyped;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

use crate::config::RuntimeConfig;
use crate::error::SiteError;
use crate::state::reveal::RevealTracker;
use crate::utils::dom;

pub const REVEAL_TARGETS: &str = ".feature-card, .step, .source-container, .cta-content";
pub const REVEALED_CLASS: &str = "animated";

struct Reveal {
    elements: Vec<Element>,
    tracker: RefCell<RevealTracker>,
}

impl Reveal {
    fn check(&self) {
        let mut tracker = self.tracker.borrow_mut();
        if tracker.all_revealed() {
            return;
        }
        let Ok(viewport_height) = dom::viewport_height() else {
            return;
        };
        for (index, element) in self.elements.iter().enumerate() {
            if tracker.is_revealed(index) {
                continue;
            }
            let top = element.get_bounding_client_rect().top();
            if tracker.observe(index, top, viewport_height) {
                dom::set_class(element, REVEALED_CLASS, true);
            }
        }
    }
}

pub fn init(scope: &Element, cfg: &RuntimeConfig) -> Result<(), SiteError> {
    let elements = dom::query_all_in(scope, REVEAL_TARGETS)?;
    if elements.is_empty() {
        return Ok(());
    }

    let reveal = Rc::new(Reveal {
        tracker: RefCell::new(RevealTracker::new(elements.len(), cfg.reveal_viewport_divisor)),
        elements,
    });
    reveal.check();

    let on_scroll = reveal.clone();
    let _ = window_event_listener_untyped("scroll", move |_| on_scroll.check());
    Ok(())
}
