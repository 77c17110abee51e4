mod webauthn;

pub use self::webauthn::{LoginRequest, RegistrationRequest, WebAuthnOptions};
