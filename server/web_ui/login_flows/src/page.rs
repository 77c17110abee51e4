use fido2_web_ui_shared::constants::ID_MESSAGE;
use fido2_web_ui_shared::error::CeremonyError;
use fido2_web_ui_shared::utils;
use gloo::console;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::binder::LoginPage;

/// The login page as served, found through `document`.
pub struct DomPage {
    message: HtmlElement,
}

impl DomPage {
    pub fn new() -> Result<Self, JsValue> {
        let message = utils::get_element_by_id(ID_MESSAGE)
            .ok_or_else(|| JsValue::from_str(&format!("missing element with id '{}'", ID_MESSAGE)))?;
        Ok(DomPage { message })
    }
}

impl LoginPage for DomPage {
    fn field_value(&self, id: &str) -> String {
        // Looked up on every click, the form isn't ours to cache.
        utils::get_value_from_element_id(id).unwrap_or_default()
    }

    fn display_message(&self, message: &str) {
        self.message.set_inner_html(message);
    }

    fn log_error(&self, err: &CeremonyError) {
        console::error!(err.to_string());
    }
}
