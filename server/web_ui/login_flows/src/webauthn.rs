//! Bindings to the `WebAuthn` client helper the server ships alongside this
//! page. It owns the whole ceremony: fetching challenges, prompting the
//! authenticator and posting the response back to the callback path.

use fido2_proto::v1::{LoginRequest, RegistrationRequest, WebAuthnOptions};
use fido2_web_ui_shared::error::CeremonyError;
use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::binder::CeremonyClient;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = WebAuthn)]
    type JsWebAuthn;

    #[wasm_bindgen(catch, constructor, js_class = "WebAuthn")]
    fn new(options: &JsValue) -> Result<JsWebAuthn, JsValue>;

    #[wasm_bindgen(catch, method, js_class = "WebAuthn")]
    fn register(this: &JsWebAuthn, request: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, method, js_class = "WebAuthn")]
    fn login(this: &JsWebAuthn, request: &JsValue) -> Result<Promise, JsValue>;
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    // plain objects, the helper JSON.stringify's these on the way out
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// A [CeremonyClient] backed by the browser's `WebAuthn` helper.
pub struct BrowserWebAuthn {
    helper: JsWebAuthn,
}

impl BrowserWebAuthn {
    /// Fails if the helper script isn't loaded, or its constructor throws.
    pub fn new(options: &WebAuthnOptions) -> Result<Self, JsValue> {
        let options = to_js(options)?;
        let helper = JsWebAuthn::new(&options)?;
        Ok(BrowserWebAuthn { helper })
    }
}

impl CeremonyClient for BrowserWebAuthn {
    async fn register(&self, request: &RegistrationRequest) -> Result<(), CeremonyError> {
        let request = to_js(request)?;
        let promise = self.helper.register(&request)?;
        JsFuture::from(promise).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<(), CeremonyError> {
        let request = to_js(request)?;
        let promise = self.helper.login(&request)?;
        JsFuture::from(promise).await?;
        Ok(())
    }
}
