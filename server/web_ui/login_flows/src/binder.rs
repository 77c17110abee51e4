//! Register and login button handling
//!
//! The binder doesn't know it's in a browser. It reads the form through a
//! [LoginPage], hands the request to a [CeremonyClient] and writes one of four
//! fixed messages back. Nothing is retried, and concurrent clicks are not
//! serialised: whichever ceremony finishes last owns the message area.

use std::fmt;

use fido2_proto::v1::{LoginRequest, RegistrationRequest};
use fido2_web_ui_shared::constants::{
    ID_DISPLAY_NAME, ID_USERNAME, MSG_INVALID_CREDENTIAL, MSG_LOGGED_IN,
    MSG_REGISTRATION_FAILED, MSG_REGISTRATION_SUCCESSFUL,
};
use fido2_web_ui_shared::error::CeremonyError;

/// Something that can run the WebAuthn ceremonies on our behalf.
#[allow(async_fn_in_trait)]
pub trait CeremonyClient {
    async fn register(&self, request: &RegistrationRequest) -> Result<(), CeremonyError>;

    async fn login(&self, request: &LoginRequest) -> Result<(), CeremonyError>;
}

/// The page the buttons live on.
pub trait LoginPage {
    /// Current value of the input field `id`, empty if there isn't one.
    fn field_value(&self, id: &str) -> String;

    /// Replace the contents of the message area.
    fn display_message(&self, message: &str);

    /// Record why a ceremony failed. Never shown to the user.
    fn log_error(&self, err: &CeremonyError);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeremonyOutcome {
    Registered,
    RegistrationFailed,
    LoggedIn,
    LoginRejected,
}

impl CeremonyOutcome {
    pub fn message(self) -> &'static str {
        match self {
            CeremonyOutcome::Registered => MSG_REGISTRATION_SUCCESSFUL,
            CeremonyOutcome::RegistrationFailed => MSG_REGISTRATION_FAILED,
            CeremonyOutcome::LoggedIn => MSG_LOGGED_IN,
            CeremonyOutcome::LoginRejected => MSG_INVALID_CREDENTIAL,
        }
    }
}

impl fmt::Display for CeremonyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub struct LoginBinder<C, P> {
    client: C,
    page: P,
}

impl<C, P> LoginBinder<C, P>
where
    C: CeremonyClient,
    P: LoginPage,
{
    pub fn new(client: C, page: P) -> Self {
        LoginBinder { client, page }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub async fn on_register_click(&self) -> CeremonyOutcome {
        let request = RegistrationRequest {
            name: self.page.field_value(ID_USERNAME),
            display_name: self.page.field_value(ID_DISPLAY_NAME),
        };

        let result = self.client.register(&request).await;
        self.finish(
            result,
            CeremonyOutcome::Registered,
            CeremonyOutcome::RegistrationFailed,
        )
    }

    pub async fn on_login_click(&self) -> CeremonyOutcome {
        let request = LoginRequest {
            name: self.page.field_value(ID_USERNAME),
        };

        let result = self.client.login(&request).await;
        self.finish(
            result,
            CeremonyOutcome::LoggedIn,
            CeremonyOutcome::LoginRejected,
        )
    }

    fn finish(
        &self,
        result: Result<(), CeremonyError>,
        success: CeremonyOutcome,
        failure: CeremonyOutcome,
    ) -> CeremonyOutcome {
        match result {
            Ok(()) => {
                self.page.display_message(success.message());
                success
            }
            Err(err) => {
                self.page.display_message(failure.message());
                self.page.log_error(&err);
                failure
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    use fido2_proto::v1::{LoginRequest, RegistrationRequest};
    use fido2_web_ui_shared::error::CeremonyError;
    use tokio::sync::oneshot;

    use super::{CeremonyClient, CeremonyOutcome, LoginBinder, LoginPage};

    #[derive(Default)]
    struct RecordingPage {
        fields: HashMap<&'static str, String>,
        message: RefCell<Option<String>>,
        errors: RefCell<Vec<CeremonyError>>,
    }

    impl RecordingPage {
        fn with_field(mut self, id: &'static str, value: &str) -> Self {
            self.fields.insert(id, value.to_string());
            self
        }

        fn message(&self) -> Option<String> {
            self.message.borrow().clone()
        }
    }

    impl LoginPage for RecordingPage {
        fn field_value(&self, id: &str) -> String {
            self.fields.get(id).cloned().unwrap_or_default()
        }

        fn display_message(&self, message: &str) {
            *self.message.borrow_mut() = Some(message.to_string());
        }

        fn log_error(&self, err: &CeremonyError) {
            self.errors.borrow_mut().push(err.clone());
        }
    }

    /// Resolves every ceremony immediately, failing with `fail_with` if set.
    #[derive(Default)]
    struct ScriptedClient {
        fail_with: Option<String>,
        registrations: RefCell<Vec<RegistrationRequest>>,
        logins: RefCell<Vec<LoginRequest>>,
    }

    impl ScriptedClient {
        fn failing(detail: &str) -> Self {
            ScriptedClient {
                fail_with: Some(detail.to_string()),
                ..Default::default()
            }
        }

        fn result(&self) -> Result<(), CeremonyError> {
            match &self.fail_with {
                Some(detail) => Err(CeremonyError::Failed(detail.clone())),
                None => Ok(()),
            }
        }
    }

    impl CeremonyClient for ScriptedClient {
        async fn register(&self, request: &RegistrationRequest) -> Result<(), CeremonyError> {
            self.registrations.borrow_mut().push(request.clone());
            self.result()
        }

        async fn login(&self, request: &LoginRequest) -> Result<(), CeremonyError> {
            self.logins.borrow_mut().push(request.clone());
            self.result()
        }
    }

    /// Each login waits on the next queued channel, so the test picks the
    /// completion order.
    struct GatedClient {
        gates: RefCell<VecDeque<oneshot::Receiver<Result<(), CeremonyError>>>>,
    }

    impl CeremonyClient for GatedClient {
        async fn register(&self, _request: &RegistrationRequest) -> Result<(), CeremonyError> {
            Ok(())
        }

        async fn login(&self, _request: &LoginRequest) -> Result<(), CeremonyError> {
            let gate = self.gates.borrow_mut().pop_front();
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(CeremonyError::Failed("gate dropped".to_string()))),
                None => Err(CeremonyError::Failed("no gate queued".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let page = RecordingPage::default()
            .with_field("username", "alice")
            .with_field("displayName", "Alice Example");
        let binder = LoginBinder::new(ScriptedClient::default(), page);

        let outcome = binder.on_register_click().await;

        assert_eq!(outcome, CeremonyOutcome::Registered);
        assert_eq!(
            binder.page().message().as_deref(),
            Some("registration successful")
        );
        assert!(binder.page().errors.borrow().is_empty());
        assert_eq!(
            *binder.client.registrations.borrow(),
            vec![RegistrationRequest {
                name: "alice".to_string(),
                display_name: "Alice Example".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_register_failure_logs_detail() {
        let page = RecordingPage::default().with_field("username", "alice");
        let binder = LoginBinder::new(ScriptedClient::failing("NotAllowedError: cancelled"), page);

        let outcome = binder.on_register_click().await;

        assert_eq!(outcome, CeremonyOutcome::RegistrationFailed);
        assert_eq!(binder.page().message().as_deref(), Some("registration failed"));
        assert_eq!(
            *binder.page().errors.borrow(),
            vec![CeremonyError::Failed("NotAllowedError: cancelled".to_string())]
        );
    }

    #[tokio::test]
    async fn test_login_success() {
        let page = RecordingPage::default()
            .with_field("username", "alice")
            .with_field("displayName", "ignored");
        let binder = LoginBinder::new(ScriptedClient::default(), page);

        assert_eq!(binder.on_login_click().await, CeremonyOutcome::LoggedIn);
        assert_eq!(binder.page().message().as_deref(), Some("You are logged in"));
        assert!(binder.page().errors.borrow().is_empty());
        assert_eq!(
            *binder.client.logins.borrow(),
            vec![LoginRequest {
                name: "alice".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let page = RecordingPage::default().with_field("username", "mallory");
        let binder = LoginBinder::new(ScriptedClient::failing("unknown credential"), page);

        assert_eq!(binder.on_login_click().await, CeremonyOutcome::LoginRejected);
        assert_eq!(binder.page().message().as_deref(), Some("Invalid credential"));
        assert_eq!(binder.page().errors.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_fields_still_call_out() {
        let binder = LoginBinder::new(ScriptedClient::default(), RecordingPage::default());

        binder.on_register_click().await;
        binder.on_login_click().await;

        assert_eq!(
            *binder.client.registrations.borrow(),
            vec![RegistrationRequest::default()]
        );
        assert_eq!(*binder.client.logins.borrow(), vec![LoginRequest::default()]);
    }

    #[tokio::test]
    async fn test_message_is_last_write_wins() {
        let binder = LoginBinder::new(ScriptedClient::default(), RecordingPage::default());

        binder.on_register_click().await;
        binder.on_login_click().await;

        assert_eq!(binder.page().message().as_deref(), Some("You are logged in"));
    }

    #[tokio::test]
    async fn test_slowest_ceremony_owns_message() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let client = GatedClient {
            gates: RefCell::new(VecDeque::from([first_rx, second_rx])),
        };
        let binder = LoginBinder::new(client, RecordingPage::default());

        let driver = async {
            // Let the second click finish first
            second_tx.send(Ok(())).expect("second click waiting");
            while binder.page().message().is_none() {
                tokio::task::yield_now().await;
            }
            assert_eq!(binder.page().message().as_deref(), Some("You are logged in"));

            first_tx
                .send(Err(CeremonyError::Failed("timed out".to_string())))
                .expect("first click waiting");
        };

        let (first, second, ()) =
            tokio::join!(binder.on_login_click(), binder.on_login_click(), driver);

        assert_eq!(first, CeremonyOutcome::LoginRejected);
        assert_eq!(second, CeremonyOutcome::LoggedIn);
        assert_eq!(binder.page().message().as_deref(), Some("Invalid credential"));
    }
}
