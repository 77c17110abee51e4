//! Server side webauthn endpoints
//!
//! These are routed by the server's webauthn handler, the UI never calls them
//! directly. They must match the server configuration.

/// Receives the authenticator's response for both ceremonies.
pub const WEBAUTHN_CALLBACK: &str = "/webauthn/callback";
/// Issues the credential creation challenge.
pub const WEBAUTHN_REGISTER: &str = "/webauthn/register";
/// Issues the credential request challenge.
pub const WEBAUTHN_LOGIN: &str = "/webauthn/login";
