use wasm_bindgen::prelude::wasm_bindgen;

pub mod config;
pub mod controllers;
pub mod error;
pub mod highlight;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use error::SiteError;
use utils::dom;

fn start_when_ready(cfg: &'static config::RuntimeConfig) -> Result<(), SiteError> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", move |_| {
            controllers::init_all(cfg);
        })?;
    } else {
        controllers::init_all(cfg);
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = config::load_from_window();
    let cfg = config::install(loaded.clone().unwrap_or_default());
    if console_log::init_with_level(cfg.log_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    if let Err(err) = loaded {
        log::warn!("{err}; using default site config");
    }

    if let Err(err) = start_when_ready(cfg) {
        log::error!("site script not started: {err}");
    }
}
