use chrono::{DateTime, TimeDelta, Utc};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use super::dom;
use crate::error::SiteError;

pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        pair.trim_start_matches(' ')
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

pub fn format_cookie(
    name: &str,
    value: &str,
    days: i64,
    now: DateTime<Utc>,
) -> Result<String, SiteError> {
    let expires = TimeDelta::try_days(days)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| {
            SiteError::Config(format!("cookie lifetime of {days} days is out of range"))
        })?;
    Ok(format!(
        "{name}={value}; expires={}; path=/",
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    ))
}

fn html_document() -> Result<HtmlDocument, SiteError> {
    dom::document()?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| SiteError::NoDocument)
}

pub fn get_cookie(name: &str) -> Result<Option<String>, SiteError> {
    let cookies = html_document()?.cookie()?;
    Ok(find_cookie(&cookies, name).map(str::to_string))
}

pub fn set_cookie(name: &str, value: &str, days: i64) -> Result<(), SiteError> {
    html_document()?.set_cookie(&format_cookie(name, value, days, Utc::now())?)?;
    Ok(())
}
