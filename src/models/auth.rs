use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status marker the backend sends on successful login or registration.
pub const AUTHENTICATED: &str = "Authenticated";
/// Error marker for a registration with a taken username.
pub const ALREADY_REGISTERED: &str = "Already Registered";

pub const LOGIN_FAILED: &str = "Invalid username or password. Please try again.";
pub const USERNAME_TAKEN: &str = "This username is already taken. Please choose a different one.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
pub const CONNECTION_ERROR: &str = "Connection error. Please try again.";

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Shared shape of the `login` and `register` answers.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated { user_name: String, first_name: String },
    AlreadyRegistered,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Register,
}

impl AuthResponse {
    /// `submitted_user` stands in when the backend omits `userName`.
    pub fn outcome(self, submitted_user: &str) -> AuthOutcome {
        if self.error.as_deref() == Some(ALREADY_REGISTERED) {
            return AuthOutcome::AlreadyRegistered;
        }
        match self.status.as_ref().and_then(Value::as_str) {
            Some(AUTHENTICATED) => AuthOutcome::Authenticated {
                user_name: self
                    .user_name
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| submitted_user.to_string()),
                first_name: self.first_name.unwrap_or_default(),
            },
            _ => AuthOutcome::Rejected,
        }
    }
}

impl AuthOutcome {
    /// Fixed message for a failed attempt, `None` when authenticated.
    pub fn error_message(&self, form: AuthForm) -> Option<&'static str> {
        match (self, form) {
            (AuthOutcome::Authenticated { .. }, _) => None,
            (AuthOutcome::AlreadyRegistered, AuthForm::Register) => Some(USERNAME_TAKEN),
            (_, AuthForm::Register) => Some(REGISTRATION_FAILED),
            (_, AuthForm::Login) => Some(LOGIN_FAILED),
        }
    }
}
