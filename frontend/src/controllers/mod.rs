pub mod clipboard;
pub mod code;
pub mod instructions;
pub mod nav;
pub mod reveal;
pub mod styles;
pub mod theme;

use crate::config::RuntimeConfig;
use crate::error::SiteError;
use crate::utils::dom;

fn run<T>(name: &str, result: Result<T, SiteError>) {
    if let Err(err) = result {
        log::warn!("{name} controller disabled: {err}");
    }
}

pub fn init_all(cfg: &RuntimeConfig) {
    let root = match dom::root_element() {
        Ok(root) => root,
        Err(err) => {
            log::error!("page controllers not started: {err}");
            return;
        }
    };

    run("theme", theme::init(&root, cfg));
    run("navigation", nav::init(&root));
    run("instructions", instructions::init(&root, cfg));
    run("clipboard", clipboard::init(&root, cfg));
    run("styles", styles::init());
    run("highlight", code::init());
    run("reveal", reveal::init(&root, cfg));
    log::debug!("page controllers started");
}
