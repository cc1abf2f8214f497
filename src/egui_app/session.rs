//! Session Store
//!
//! The client's session state and the pure function that advances it.
//!
//! `reduce(state, event)` takes the current state by value and returns the
//! next one. It performs no I/O; side effects (HTTP calls, token storage)
//! live in `commands`, which turns their outcomes into `Event`s.
//!
//! # Transitions
//!
//! | Event | Effect |
//! |---|---|
//! | `LoginRequested` | loading, error cleared |
//! | `LoginSucceeded` | token and user set, authenticated |
//! | `Logout` | back to `SessionState::default()` |
//! | `RestoreRequested` | stored token held, not yet trusted |
//! | `ProfileLoaded` | user set, authenticated if a token is held |
//! | `UsersLoaded` / `UserCreated` / `UserUpdated` / `UserDeleted` | user list edited |
//! | any `*Requested` | loading |
//! | any `*Failed` | loading cleared, error set |

use crate::shared::PublicUser;

/// Client session state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The signed-in user
    pub user: Option<PublicUser>,
    /// Accounts shown on the dashboard
    pub users: Vec<PublicUser>,
    /// Bearer token for API calls
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

/// Everything that can happen to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoginRequested,
    LoginSucceeded { token: String, user: PublicUser },
    LoginFailed(String),
    Logout,

    /// A token was found in storage and is being checked
    RestoreRequested { token: String },
    ProfileRequested,
    ProfileLoaded(PublicUser),
    ProfileFailed(String),

    UsersRequested,
    UsersLoaded(Vec<PublicUser>),
    UsersFailed(String),

    CreateRequested,
    UserCreated(PublicUser),
    CreateFailed(String),

    UpdateRequested,
    UserUpdated(PublicUser),
    UpdateFailed(String),

    DeleteRequested,
    UserDeleted(i64),
    DeleteFailed(String),

    /// The user dismissed the error banner
    ErrorDismissed,
}

/// Advance the session by one event
pub fn reduce(state: SessionState, event: Event) -> SessionState {
    match event {
        Event::LoginRequested => SessionState {
            loading: true,
            error: None,
            ..state
        },
        Event::LoginSucceeded { token, user } => SessionState {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
            loading: false,
            error: None,
            ..state
        },
        Event::Logout => SessionState::default(),

        Event::RestoreRequested { token } => SessionState {
            token: Some(token),
            is_authenticated: false,
            loading: true,
            ..state
        },
        Event::ProfileLoaded(user) => SessionState {
            user: Some(user),
            is_authenticated: state.token.is_some(),
            loading: false,
            ..state
        },

        Event::ProfileRequested
        | Event::UsersRequested
        | Event::CreateRequested
        | Event::UpdateRequested
        | Event::DeleteRequested => SessionState {
            loading: true,
            ..state
        },

        Event::UsersLoaded(users) => SessionState {
            users,
            loading: false,
            ..state
        },
        Event::UserCreated(user) => {
            let mut users = state.users;
            users.push(user);
            SessionState {
                users,
                loading: false,
                ..state
            }
        }
        Event::UserUpdated(user) => {
            let users = state
                .users
                .into_iter()
                .map(|existing| if existing.id == user.id { user.clone() } else { existing })
                .collect();
            SessionState {
                users,
                loading: false,
                ..state
            }
        }
        Event::UserDeleted(id) => {
            let users = state.users.into_iter().filter(|u| u.id != id).collect();
            SessionState {
                users,
                loading: false,
                ..state
            }
        }

        Event::LoginFailed(message)
        | Event::ProfileFailed(message)
        | Event::UsersFailed(message)
        | Event::CreateFailed(message)
        | Event::UpdateFailed(message)
        | Event::DeleteFailed(message) => SessionState {
            loading: false,
            error: Some(message),
            ..state
        },

        Event::ErrorDismissed => SessionState {
            error: None,
            ..state
        },
    }
}

// Selectors

pub fn is_authenticated(state: &SessionState) -> bool {
    state.is_authenticated
}

pub fn current_user(state: &SessionState) -> Option<&PublicUser> {
    state.user.as_ref()
}

/// True when the signed-in user has the admin role
pub fn is_admin(state: &SessionState) -> bool {
    state.user.as_ref().is_some_and(PublicUser::is_admin)
}

pub fn is_loading(state: &SessionState) -> bool {
    state.loading
}

pub fn error(state: &SessionState) -> Option<&str> {
    state.error.as_deref()
}

pub fn users(state: &SessionState) -> &[PublicUser] {
    &state.users
}
