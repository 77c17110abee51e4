//! This wires the register and login buttons of the FIDO2 demo page to the
//! server's `WebAuthn` client helper, and tells the user how it went.
//!
//! Page elements, by id:
//! - `username`, `displayName`: the form
//! - `register`, `login`: the buttons
//! - `message`: where the result goes

#![deny(warnings)]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

pub mod binder;
pub mod page;
pub mod webauthn;

use std::rc::Rc;

use fido2_proto::v1::WebAuthnOptions;
use fido2_web_ui_shared::constants::{ID_LOGIN, ID_REGISTER};
use fido2_web_ui_shared::utils;
use gloo::console;
use gloo::events::EventListener;
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::binder::LoginBinder;
use crate::page::DomPage;
use crate::webauthn::BrowserWebAuthn;

type PageBinder = LoginBinder<BrowserWebAuthn, DomPage>;

fn find_button(id: &str) -> Result<HtmlElement, JsValue> {
    utils::get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing button with id '{}'", id)))
}

fn bind_page(options: &WebAuthnOptions) -> Result<(), JsValue> {
    let client = BrowserWebAuthn::new(options)?;
    let page = DomPage::new()?;
    let binder: Rc<PageBinder> = Rc::new(LoginBinder::new(client, page));

    let register_button = find_button(ID_REGISTER)?;
    let login_button = find_button(ID_LOGIN)?;

    let binderc = binder.clone();
    EventListener::new(&register_button, "click", move |_| {
        #[cfg(debug_assertions)]
        console::debug!("register clicked, starting registration ceremony");
        let binder = binderc.clone();
        spawn_local(async move {
            binder.on_register_click().await;
        });
    })
    .forget();

    EventListener::new(&login_button, "click", move |_| {
        #[cfg(debug_assertions)]
        console::debug!("login clicked, starting authentication ceremony");
        let binder = binder.clone();
        spawn_local(async move {
            binder.on_login_click().await;
        });
    })
    .forget();

    Ok(())
}

/// This is the entry point of the web front end.
///
/// The listeners live as long as the page does.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_app() -> Result<(), JsValue> {
    bind_page(&WebAuthnOptions::default()).map_err(|e| {
        console::error!(format!("failed to set up login page -> {:?}", e));
        e
    })
}
