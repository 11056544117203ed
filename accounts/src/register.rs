//! Registration form flow: draft, validation, submission, redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form surfaces own a [`RegistrationDraft`] and hand it to
//! [`RegistrationFlow`]. The flow validates locally, performs exactly one call
//! through [`RegisterApi`] when validation passes, and maps the result to the
//! single [`FormMessage`] the form shows. On success it schedules a redirect to
//! the login surface through [`Timer`] and [`Navigator`].
//!
//! ERROR HANDLING
//! ==============
//! Three outcomes surface to the user: validation errors (no network call),
//! server-reported errors (verbatim message or fallback), and transport errors
//! (generic message). A response whose body is not JSON counts as a transport
//! error whatever its status. None of them is fatal; the user retries by submitting
//! again. There is no retry policy and no in-flight guard at this layer.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::session::Session;

/// Path of the remote registration endpoint, relative to the API origin.
pub const REGISTER_PATH: &str = "/user/register";
/// Where the user lands after registering.
pub const LOGIN_PATH: &str = "/login";
/// Pause between showing the success message and redirecting.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

pub const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting...";
pub const FAILURE_FALLBACK_MESSAGE: &str = "Registration failed";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Try again later.";

// =============================================================================
// DRAFT + VALIDATION
// =============================================================================

/// One input of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Username,
    FullName,
    Phone,
    Email,
    Password,
    ConfirmPassword,
}

impl RegistrationField {
    /// Form order.
    pub const ALL: [Self; 6] = [
        Self::Username,
        Self::FullName,
        Self::Phone,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::FullName => "Full Name",
            Self::Phone => "Phone Number",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Value of the `name` attribute on the rendered input.
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::FullName => "full_name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Username | Self::FullName => "text",
            Self::Phone => "tel",
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
        }
    }

    #[must_use]
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// Transient form state. Never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub username: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for RegistrationDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationDraft")
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

/// Local validation failure. `Display` is the text shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Wire body of `POST /user/register`. Only produced by validation.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl RegistrationDraft {
    #[must_use]
    pub fn field(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Username => &self.username,
            RegistrationField::FullName => &self.full_name,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::Username => &mut self.username,
            RegistrationField::FullName => &mut self.full_name,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Check the draft and build the request body.
    ///
    /// Whitespace-only values count as empty. Emptiness is checked before the
    /// password confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if any field is blank, or
    /// [`ValidationError::PasswordMismatch`] if the confirmation differs.
    pub fn validate(&self) -> Result<RegistrationRequest, ValidationError> {
        if RegistrationField::ALL
            .iter()
            .any(|f| self.field(*f).trim().is_empty())
        {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(RegistrationRequest {
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The one message a form displays after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

/// Deferred navigation requested by a successful submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub after: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: FormMessage,
    pub redirect: Option<Redirect>,
    /// User record, when the server echoes one back on success.
    pub user: Option<Session>,
}

impl SubmitOutcome {
    fn failed(text: impl Into<String>) -> Self {
        Self { message: FormMessage::error(text), redirect: None, user: None }
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// Raw HTTP result of a registration call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterResponse {
    pub status: u16,
    pub body: String,
}

impl RegisterResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("http client build failed: {0}")]
    ClientBuild(String),
}

/// Remote registration endpoint. Mocked in tests.
///
/// Futures are not required to be `Send` so browser transports qualify.
#[async_trait::async_trait(?Send)]
pub trait RegisterApi {
    /// Send one registration request.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] only when no HTTP response was received.
    /// Non-2xx statuses are successful calls with a failing [`RegisterResponse`].
    async fn register(&self, request: &RegistrationRequest) -> Result<RegisterResponse, TransportError>;
}

#[async_trait::async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Moves the user to another surface (page URL, CLI hint).
pub trait Navigator {
    fn redirect(&self, path: &str);
}

// =============================================================================
// FLOW
// =============================================================================

/// Validate `draft` and, when valid, submit it once through `api`.
pub async fn submit<A: RegisterApi + ?Sized>(api: &A, draft: &RegistrationDraft) -> SubmitOutcome {
    let request = match draft.validate() {
        Ok(request) => request,
        Err(e) => return SubmitOutcome::failed(e.to_string()),
    };

    let response = match api.register(&request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "registration request failed");
            return SubmitOutcome::failed(SERVER_ERROR_MESSAGE);
        }
    };
    let body: serde_json::Value = match serde_json::from_str(&response.body) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(status = response.status, error = %e, "registration response is not JSON");
            return SubmitOutcome::failed(SERVER_ERROR_MESSAGE);
        }
    };

    if response.is_success() {
        tracing::info!(username = %request.username, "registration accepted");
        SubmitOutcome {
            message: FormMessage::success(SUCCESS_MESSAGE),
            redirect: Some(Redirect { to: LOGIN_PATH, after: REDIRECT_DELAY }),
            user: registered_user(body),
        }
    } else {
        tracing::warn!(status = response.status, "registration rejected");
        SubmitOutcome::failed(failure_message(&body))
    }
}

/// Pick the user-visible text out of a failing JSON response body.
///
/// Prefers a non-empty string `message`, then a string `detail`, then
/// [`FAILURE_FALLBACK_MESSAGE`].
#[must_use]
pub fn failure_message(body: &serde_json::Value) -> String {
    ["message", "detail"]
        .into_iter()
        .filter_map(|key| body.get(key))
        .find_map(|v| v.as_str().filter(|s| !s.is_empty()).map(str::to_owned))
        .unwrap_or_else(|| FAILURE_FALLBACK_MESSAGE.to_owned())
}

/// A user record in a success body, either top-level or under `user`.
/// A body with none of the session fields carries no user.
fn registered_user(mut body: serde_json::Value) -> Option<Session> {
    let candidate = body.get_mut("user").map(serde_json::Value::take).unwrap_or(body);
    serde_json::from_value::<Session>(candidate)
        .ok()
        .filter(|user| *user != Session::default())
}

/// Registration flow with its transport, timer, and navigator injected.
pub struct RegistrationFlow<A, T, N> {
    api: A,
    timer: T,
    navigator: N,
}

impl<A, T, N> RegistrationFlow<A, T, N>
where
    A: RegisterApi,
    T: Timer,
    N: Navigator,
{
    pub fn new(api: A, timer: T, navigator: N) -> Self {
        Self { api, timer, navigator }
    }

    pub async fn submit(&self, draft: &RegistrationDraft) -> SubmitOutcome {
        submit(&self.api, draft).await
    }

    /// Wait out `redirect.after`, then navigate.
    pub async fn follow(&self, redirect: Redirect) {
        self.timer.sleep(redirect.after).await;
        tracing::debug!(to = redirect.to, "redirecting");
        self.navigator.redirect(redirect.to);
    }

    /// Submit, hand the message to `show` immediately, then follow any
    /// redirect.
    pub async fn submit_and_redirect<F>(&self, draft: &RegistrationDraft, show: F) -> SubmitOutcome
    where
        F: FnOnce(&SubmitOutcome),
    {
        let outcome = self.submit(draft).await;
        show(&outcome);
        if let Some(redirect) = outcome.redirect {
            self.follow(redirect).await;
        }
        outcome
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }
}
