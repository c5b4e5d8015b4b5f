use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

use crate::config::RuntimeConfig;
use crate::error::SiteError;
use crate::state::instructions::{
    ClickOutcome, InstructionGroup, InstructionTarget, InstructionsModel,
};
use crate::utils::dom;
use crate::utils::timer::PendingTimer;

const SELECTOR_BUTTON: &str = ".os-btn";
const BUTTON_CLUSTER: &str = ".os-buttons";
const PANEL: &str = ".os-instruction";
const TOKEN_ATTR: &str = "data-os";
const ACTIVE_CLASS: &str = "active";

#[derive(Default)]
struct GroupTimers {
    git: PendingTimer,
    python: PendingTimer,
}

impl GroupTimers {
    fn get(&mut self, group: InstructionGroup) -> &mut PendingTimer {
        match group {
            InstructionGroup::Git => &mut self.git,
            InstructionGroup::Python => &mut self.python,
        }
    }
}

#[derive(Clone)]
pub struct InstructionsSwitcher {
    pub model: RwSignal<InstructionsModel>,
    timers: Rc<RefCell<GroupTimers>>,
    delay_ms: u32,
}

fn seed_from_markup(scope: &Element) -> Result<InstructionsModel, SiteError> {
    let mut model = InstructionsModel::new();
    let active_buttons: Vec<String> = dom::query_all_in(scope, SELECTOR_BUTTON)?
        .iter()
        .filter(|b| dom::has_class(b, ACTIVE_CLASS))
        .filter_map(|b| b.get_attribute(TOKEN_ATTR))
        .collect();

    for group in InstructionGroup::ALL {
        let Some(container) = dom::by_id(group.container_id())? else {
            continue;
        };
        let open = dom::display(&container).as_deref() == Some("block");
        let active_panel = dom::query_in(&container, &format!("{PANEL}.{ACTIVE_CLASS}"))?
            .map(|panel| panel.id())
            .filter(|id| !id.is_empty());
        let active_button = active_buttons
            .iter()
            .find(|token| InstructionTarget::from_token(token).group == group)
            .cloned();
        model.seed(group, open, active_panel, active_button);
    }
    Ok(model)
}

fn deactivate_all(elements: &[Element]) {
    for element in elements {
        dom::set_class(element, ACTIVE_CLASS, false);
    }
}

impl InstructionsSwitcher {
    fn on_click(&self, button: &Element) -> Result<(), SiteError> {
        let Some(token) = button.get_attribute(TOKEN_ATTR) else {
            return Ok(());
        };
        let group = InstructionTarget::from_token(&token).group;

        if let Some(cluster) = button.closest(BUTTON_CLUSTER)? {
            deactivate_all(&dom::query_all_in(&cluster, SELECTOR_BUTTON)?);
        }
        dom::set_class(button, ACTIVE_CLASS, true);

        let Some(container) = dom::by_id(group.container_id())? else {
            return Ok(());
        };
        let Some(outcome) = self.model.try_update(|model| model.click(&token)) else {
            return Ok(());
        };

        match outcome {
            ClickOutcome::Closed { group } => {
                self.timers.borrow_mut().get(group).cancel();
                dom::set_display(&container, "none")?;
                dom::set_class(button, ACTIVE_CLASS, false);
            }
            ClickOutcome::Opened {
                group,
                panel_id,
                generation,
            } => {
                dom::set_display(&container, "block")?;
                deactivate_all(&dom::query_all_in(&container, PANEL)?);
                self.schedule_activation(group, &panel_id, generation)?;
            }
        }
        Ok(())
    }

    fn schedule_activation(
        &self,
        group: InstructionGroup,
        panel_id: &str,
        generation: u64,
    ) -> Result<(), SiteError> {
        let mut timers = self.timers.borrow_mut();
        let Some(panel) = dom::by_id(panel_id)? else {
            timers.get(group).cancel();
            self.model.update(|model| model.abandon(group, generation));
            return Ok(());
        };

        let model = self.model;
        timers.get(group).schedule(self.delay_ms, move || {
            let due = model
                .try_update(|model| model.complete_activation(group, generation))
                .flatten();
            match due {
                Some(_) => dom::set_class(&panel, ACTIVE_CLASS, true),
                None => log::debug!("dropped stale activation {generation} for {group:?}"),
            }
        })
    }
}

pub fn init(
    scope: &Element,
    cfg: &RuntimeConfig,
) -> Result<Option<InstructionsSwitcher>, SiteError> {
    let buttons = dom::query_all_in(scope, SELECTOR_BUTTON)?;
    if buttons.is_empty() {
        return Ok(None);
    }

    let switcher = InstructionsSwitcher {
        model: create_rw_signal(seed_from_markup(scope)?),
        timers: Rc::new(RefCell::new(GroupTimers::default())),
        delay_ms: cfg.panel_activation_delay_ms,
    };

    for button in buttons {
        let handler = switcher.clone();
        let target = button.clone();
        dom::listen(&button, "click", move |_| {
            if let Err(err) = handler.on_click(&target) {
                log::warn!("instruction switch failed: {err}");
            }
        })?;
    }

    Ok(Some(switcher))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    const MARKUP: &str = r#"
        <div class="os-buttons">
            <button class="os-btn" data-os="windows">Windows</button>
            <button class="os-btn" data-os="linux">Linux</button>
        </div>
        <div id="git-instructions" style="display: none">
            <div class="os-instruction" id="git-windows"></div>
            <div class="os-instruction" id="git-linux"></div>
        </div>
    "#;

    fn fixture() -> Element {
        let doc = dom::document().unwrap();
        let host = doc.create_element("div").unwrap();
        host.set_inner_html(MARKUP);
        doc.body().unwrap().append_child(&host).unwrap();
        host
    }

    fn button(host: &Element, token: &str) -> HtmlElement {
        dom::query_in(host, &format!(r#".os-btn[data-os="{token}"]"#))
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    fn element(id: &str) -> Element {
        dom::by_id(id).unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    async fn click_opens_then_second_click_closes() {
        let host = fixture();
        init(&host, &RuntimeConfig::default()).unwrap().unwrap();
        let container = element("git-instructions");

        button(&host, "windows").click();
        assert_eq!(dom::display(&container).as_deref(), Some("block"));
        assert!(dom::has_class(&button(&host, "windows"), "active"));
        TimeoutFuture::new(80).await;
        assert!(dom::has_class(&element("git-windows"), "active"));

        button(&host, "windows").click();
        assert_eq!(dom::display(&container).as_deref(), Some("none"));
        assert!(!dom::has_class(&button(&host, "windows"), "active"));

        button(&host, "windows").click();
        TimeoutFuture::new(80).await;
        assert_eq!(dom::display(&container).as_deref(), Some("block"));
        assert!(dom::has_class(&element("git-windows"), "active"));
        assert!(dom::has_class(&button(&host, "windows"), "active"));
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn rapid_switch_only_activates_latest_panel() {
        let host = fixture();
        init(&host, &RuntimeConfig::default()).unwrap().unwrap();

        button(&host, "windows").click();
        button(&host, "linux").click();
        TimeoutFuture::new(80).await;

        assert!(!dom::has_class(&element("git-windows"), "active"));
        assert!(dom::has_class(&element("git-linux"), "active"));
        assert!(!dom::has_class(&button(&host, "windows"), "active"));
        assert!(dom::has_class(&button(&host, "linux"), "active"));
        host.remove();
    }
}
