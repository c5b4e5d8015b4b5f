use anyhow::{ensure, Context};
use serde::Deserialize;
use std::sync::OnceLock;

use crate::error::SiteError;

const GLOBAL_CONFIG_KEY: &str = "__SITE_CONFIG";
const MAX_COOKIE_DAYS: i64 = 3650;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub theme_cookie_days: i64,
    pub reveal_viewport_divisor: f64,
    pub panel_activation_delay_ms: u32,
    pub copy_feedback_ms: u32,
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            theme_cookie_days: 365,
            reveal_viewport_divisor: 1.3,
            panel_activation_delay_ms: 50,
            copy_feedback_ms: 2000,
            log_level: "info".into(),
        }
    }
}

impl RuntimeConfig {
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> Result<RuntimeConfig, SiteError> {
    parse_checked(raw).map_err(|err| SiteError::Config(format!("{err:#}")))
}

fn parse_checked(raw: &str) -> anyhow::Result<RuntimeConfig> {
    let cfg: RuntimeConfig =
        serde_json::from_str(raw).context("window.__SITE_CONFIG is not valid JSON")?;
    ensure!(
        cfg.reveal_viewport_divisor > 0.0,
        "reveal_viewport_divisor must be positive"
    );
    ensure!(
        (1..=MAX_COOKIE_DAYS).contains(&cfg.theme_cookie_days),
        "theme_cookie_days must be between 1 and {MAX_COOKIE_DAYS}"
    );
    Ok(cfg)
}

pub fn load_from_window() -> Result<RuntimeConfig, SiteError> {
    let Some(w) = web_sys::window() else {
        return Ok(RuntimeConfig::default());
    };
    let any = js_sys::Reflect::get(&w, &GLOBAL_CONFIG_KEY.into())?;
    if any.is_undefined() || any.is_null() {
        return Ok(RuntimeConfig::default());
    }
    let raw = js_sys::JSON::stringify(&any)?
        .as_string()
        .ok_or_else(|| SiteError::Config("window.__SITE_CONFIG is not serializable".into()))?;
    parse_runtime_config(&raw)
}

pub fn install(cfg: RuntimeConfig) -> &'static RuntimeConfig {
    CONFIG.get_or_init(|| cfg)
}
