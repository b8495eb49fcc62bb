//! Auth-session slice: bearer token plus login request status.
//!
//! DESIGN
//! ======
//! The reducer is pure: `reduce(state, action) -> state`. Async work lives in
//! `ops`; this module only describes how a finished step changes the slice.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Lifecycle of the most recent request owned by a slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestStatus {
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

/// Authentication state for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub status: RequestStatus,
    pub error: Option<String>,
    /// Number of logouts so far; in-flight work started under an older
    /// epoch must not write its result.
    pub epoch: u64,
}

impl SessionState {
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Intents that mutate the session slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    LoginPending,
    LoginFulfilled { token: String },
    LoginRejected { message: String },
    /// Clear the token. Status is left as is.
    Logout,
    /// Unconditional overwrite used by the refresh path.
    SetToken(String),
}

impl SessionState {
    /// Apply one action and return the next state.
    #[must_use]
    pub fn reduce(mut self, action: &SessionAction) -> Self {
        match action {
            SessionAction::LoginPending => {
                self.status = RequestStatus::Loading;
            }
            SessionAction::LoginFulfilled { token } => {
                self.status = RequestStatus::Succeeded;
                self.token = Some(token.clone());
                self.error = None;
            }
            SessionAction::LoginRejected { message } => {
                self.status = RequestStatus::Failed;
                self.error = Some(message.clone());
            }
            SessionAction::Logout => {
                self.token = None;
                self.epoch += 1;
            }
            SessionAction::SetToken(token) => {
                self.token = Some(token.clone());
            }
        }
        self
    }
}
