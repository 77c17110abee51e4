use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// A WebAuthn ceremony didn't complete.
///
/// Network failures, authenticator errors and the user dismissing the
/// browser prompt all look the same from here, the detail is only ever
/// logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CeremonyError {
    #[error("ceremony failed: {0}")]
    Failed(String),
}

impl CeremonyError {
    pub fn detail(&self) -> &str {
        match self {
            CeremonyError::Failed(detail) => detail.as_str(),
        }
    }
}

impl From<JsValue> for CeremonyError {
    fn from(value: JsValue) -> Self {
        let detail = if let Some(s) = value.as_string() {
            s
        } else if let Some(e) = value.dyn_ref::<js_sys::Error>() {
            // DOMException (NotAllowedError and friends) lands here too
            format!("{}: {}", String::from(e.name()), String::from(e.message()))
        } else {
            format!("{:?}", value)
        };
        CeremonyError::Failed(detail)
    }
}

impl From<serde_wasm_bindgen::Error> for CeremonyError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        CeremonyError::Failed(format!("failed to serialise request -> {}", value))
    }
}
