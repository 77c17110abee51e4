use serde::{Deserialize, Serialize};

use crate::constants::uri::{WEBAUTHN_CALLBACK, WEBAUTHN_LOGIN, WEBAUTHN_REGISTER};

/// Construction options for the `WebAuthn` client helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAuthnOptions {
    pub callback_path: String,
    pub register_path: String,
    pub login_path: String,
}

impl Default for WebAuthnOptions {
    fn default() -> Self {
        WebAuthnOptions {
            callback_path: WEBAUTHN_CALLBACK.to_string(),
            register_path: WEBAUTHN_REGISTER.to_string(),
            login_path: WEBAUTHN_LOGIN.to_string(),
        }
    }
}

impl WebAuthnOptions {
    pub fn with_callback_path(mut self, path: impl Into<String>) -> Self {
        self.callback_path = path.into();
        self
    }

    pub fn with_register_path(mut self, path: impl Into<String>) -> Self {
        self.register_path = path.into();
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }
}

/// Starts a registration ceremony for `name`.
///
/// Neither field is validated, an empty name is sent as-is and the server
/// decides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub display_name: String,
}

/// Starts an authentication ceremony for `name`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
}
