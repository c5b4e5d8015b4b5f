use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn root_element() -> Result<Element, SiteError> {
    document()?.document_element().ok_or(SiteError::NoRootElement)
}

pub fn by_id(id: &str) -> Result<Option<Element>, SiteError> {
    Ok(document()?.get_element_by_id(id))
}

pub fn query_in(scope: &Element, selector: &str) -> Result<Option<Element>, SiteError> {
    Ok(scope.query_selector(selector)?)
}

pub fn query_all_in(scope: &Element, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = scope.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SiteError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn display(element: &Element) -> Option<String> {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|el| el.style().get_property_value("display").ok())
}

pub fn set_display(element: &Element, value: &str) -> Result<(), SiteError> {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        el.style().set_property("display", value)?;
    }
    Ok(())
}

pub fn viewport_height() -> Result<f64, SiteError> {
    window()?
        .inner_height()?
        .as_f64()
        .ok_or_else(|| SiteError::Js("innerHeight is not a number".into()))
}
