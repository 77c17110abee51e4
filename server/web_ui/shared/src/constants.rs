//! Constants

// the HTML element IDs the login page is built from
pub const ID_REGISTER: &str = "register";
pub const ID_LOGIN: &str = "login";
pub const ID_USERNAME: &str = "username";
pub const ID_DISPLAY_NAME: &str = "displayName";
pub const ID_MESSAGE: &str = "message";

// what ends up in the message area
pub const MSG_REGISTRATION_SUCCESSFUL: &str = "registration successful";
pub const MSG_REGISTRATION_FAILED: &str = "registration failed";
pub const MSG_LOGGED_IN: &str = "You are logged in";
pub const MSG_INVALID_CREDENTIAL: &str = "Invalid credential";
