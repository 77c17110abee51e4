use gloo::console;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Document, HtmlElement, HtmlInputElement, Window};

/// Gets the equivalent of `window()` in javascript
pub fn window() -> Window {
    web_sys::window().expect_throw("Unable to retrieve window")
}

/// Gets the equivalent of `window().document()` in javascript
pub fn document() -> Document {
    window()
        .document()
        .expect_throw("Unable to retrieve document")
}

pub fn get_element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn get_inputelement_by_id(id: &str) -> Option<HtmlInputElement> {
    let element = document().get_element_by_id(id)?;
    match element.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(input),
        Err(_) => {
            console::warn!(format!("element with id '{}' is not an input", id));
            None
        }
    }
}

pub fn get_value_from_element_id(id: &str) -> Option<String> {
    get_inputelement_by_id(id).map(|element| element.value())
}
