/**
 * Commands and Dispatcher
 *
 * The UI never calls the API directly. It hands a `Command` to the
 * `Dispatcher`, which:
 *
 * 1. applies the command's "requested" event to the session right away
 * 2. runs the command's handler on a background tokio runtime
 * 3. sends the handler's resulting `Event` back over a channel
 *
 * The UI loop calls `drain` every frame to apply arrived events in order.
 * Handlers are the only place with side effects: HTTP calls and token
 * storage (saved on login, removed on logout, on a failed restore and when
 * a protected call answers 401).
 *
 * A 401 on any protected call means the session token is dead, so the
 * handler logs the session out instead of reporting a failure.
 */

use std::io;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};

use crate::egui_app::api::{ApiClient, ClientError};
use crate::egui_app::session::{reduce, Event, SessionState};
use crate::egui_app::token_store::TokenStore;
use crate::shared::{
    validate_create_user, validate_login, validate_update_user, CreateUserRequest, FieldError,
    LoginRequest, UpdateUserRequest,
};

const NOT_SIGNED_IN: &str = "Not signed in";

/// Something the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { email: String, password: String },
    Logout,
    /// Re-validate a token found in storage at startup
    Restore { token: String },
    LoadProfile,
    LoadUsers,
    CreateUser(CreateUserRequest),
    UpdateUser { id: i64, changes: UpdateUserRequest },
    DeleteUser(i64),
}

impl Command {
    /// Event applied as soon as the command is dispatched
    pub fn requested(&self) -> Event {
        match self {
            Self::Login { .. } => Event::LoginRequested,
            Self::Logout => Event::Logout,
            Self::Restore { token } => Event::RestoreRequested {
                token: token.clone(),
            },
            Self::LoadProfile => Event::ProfileRequested,
            Self::LoadUsers => Event::UsersRequested,
            Self::CreateUser(_) => Event::CreateRequested,
            Self::UpdateUser { .. } => Event::UpdateRequested,
            Self::DeleteUser(_) => Event::DeleteRequested,
        }
    }
}

fn first_message(errors: Vec<FieldError>) -> String {
    errors
        .into_iter()
        .next()
        .map(|e| e.message)
        .unwrap_or_else(|| "Invalid input".to_string())
}

/// What handlers may touch
#[derive(Clone)]
struct Effects {
    api: ApiClient,
    tokens: Option<TokenStore>,
}

impl Effects {
    fn save_token(&self, token: &str) {
        if let Some(store) = &self.tokens {
            if let Err(e) = store.save(token) {
                tracing::warn!("Failed to save token to {}: {}", store.path().display(), e);
            }
        }
    }

    fn clear_token(&self) {
        if let Some(store) = &self.tokens {
            if let Err(e) = store.clear() {
                tracing::warn!("Failed to remove token at {}: {}", store.path().display(), e);
            }
        }
    }

    /// Outcome of a failed protected call
    ///
    /// 401 ends the session; any other error becomes `failed(message)`.
    fn rejected(&self, error: ClientError, failed: fn(String) -> Event) -> Event {
        if error.status() == Some(401) {
            tracing::info!("Session rejected by server: {}", error);
            self.clear_token();
            Event::Logout
        } else {
            failed(error.to_string())
        }
    }

    /// Run a command's side effects and report the outcome
    ///
    /// `token` is the session token at dispatch time.
    async fn run(self, command: Command, token: Option<String>) -> Option<Event> {
        match command {
            Command::Login { email, password } => {
                let request = LoginRequest { email, password };
                if let Err(errors) = validate_login(&request) {
                    return Some(Event::LoginFailed(first_message(errors)));
                }
                match self.api.login(&request).await {
                    Ok(response) => {
                        self.save_token(&response.access_token);
                        tracing::info!("Signed in as {}", response.user.email);
                        Some(Event::LoginSucceeded {
                            token: response.access_token,
                            user: response.user,
                        })
                    }
                    Err(e) => Some(Event::LoginFailed(e.to_string())),
                }
            }

            Command::Logout => {
                self.clear_token();
                None
            }

            Command::Restore { token } => match self.api.profile(&token).await {
                Ok(user) => Some(Event::ProfileLoaded(user)),
                Err(e) => {
                    tracing::info!("Stored session rejected: {}", e);
                    self.clear_token();
                    Some(Event::Logout)
                }
            },

            Command::LoadProfile => {
                let Some(token) = token else {
                    return Some(Event::ProfileFailed(NOT_SIGNED_IN.to_string()));
                };
                Some(match self.api.profile(&token).await {
                    Ok(user) => Event::ProfileLoaded(user),
                    Err(e) => self.rejected(e, Event::ProfileFailed),
                })
            }

            Command::LoadUsers => {
                let Some(token) = token else {
                    return Some(Event::UsersFailed(NOT_SIGNED_IN.to_string()));
                };
                Some(match self.api.list_users(&token).await {
                    Ok(users) => Event::UsersLoaded(users),
                    Err(e) => self.rejected(e, Event::UsersFailed),
                })
            }

            Command::CreateUser(request) => {
                let Some(token) = token else {
                    return Some(Event::CreateFailed(NOT_SIGNED_IN.to_string()));
                };
                if let Err(errors) = validate_create_user(&request) {
                    return Some(Event::CreateFailed(first_message(errors)));
                }
                Some(match self.api.create_user(&token, &request).await {
                    Ok(user) => Event::UserCreated(user),
                    Err(e) => self.rejected(e, Event::CreateFailed),
                })
            }

            Command::UpdateUser { id, changes } => {
                let Some(token) = token else {
                    return Some(Event::UpdateFailed(NOT_SIGNED_IN.to_string()));
                };
                if let Err(errors) = validate_update_user(&changes) {
                    return Some(Event::UpdateFailed(first_message(errors)));
                }
                Some(match self.api.update_user(&token, id, &changes).await {
                    Ok(user) => Event::UserUpdated(user),
                    Err(e) => self.rejected(e, Event::UpdateFailed),
                })
            }

            Command::DeleteUser(id) => {
                let Some(token) = token else {
                    return Some(Event::DeleteFailed(NOT_SIGNED_IN.to_string()));
                };
                Some(match self.api.delete_user(&token, id).await {
                    Ok(()) => Event::UserDeleted(id),
                    Err(e) => self.rejected(e, Event::DeleteFailed),
                })
            }
        }
    }
}

/// Owns the session state and runs command handlers in the background
pub struct Dispatcher {
    runtime: Runtime,
    effects: Effects,
    state: SessionState,
    tx: Sender<Event>,
    rx: Receiver<Event>,
    notify: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Dispatcher {
    /// Create a dispatcher with its own background runtime
    pub fn new(api: ApiClient, tokens: Option<TokenStore>) -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("authdesk-commands")
            .enable_all()
            .build()?;
        let (tx, rx) = channel();

        Ok(Self {
            runtime,
            effects: Effects { api, tokens },
            state: SessionState::default(),
            tx,
            rx,
            notify: None,
        })
    }

    /// Call `notify` whenever a handler has produced an event
    ///
    /// The UI uses this to request a repaint.
    pub fn set_notifier(&mut self, notify: impl Fn() + Send + Sync + 'static) {
        self.notify = Some(Arc::new(notify));
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply one event to the session
    pub fn apply(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    /// Start a command
    pub fn dispatch(&mut self, command: Command) {
        self.apply(command.requested());

        let effects = self.effects.clone();
        let token = self.state.token.clone();
        let tx = self.tx.clone();
        let notify = self.notify.clone();

        self.runtime.spawn(async move {
            if let Some(event) = effects.run(command, token).await {
                // The receiver only disappears when the dispatcher is dropped
                let _ = tx.send(event);
                if let Some(notify) = notify {
                    notify();
                }
            }
        });
    }

    /// Dispatch `Restore` if a token is in storage
    ///
    /// Returns whether a restore was started.
    pub fn restore_session(&mut self) -> bool {
        let stored = self.effects.tokens.as_ref().and_then(TokenStore::load);
        match stored {
            Some(token) => {
                self.dispatch(Command::Restore { token });
                true
            }
            None => false,
        }
    }

    /// Apply every event that has arrived, in arrival order
    ///
    /// Returns the number of events applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Block until the next event arrives and apply it
    ///
    /// Returns `false` on timeout.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => {
                self.apply(event);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_dispatcher() -> Dispatcher {
        // Nothing listens on port 9; requests fail fast with a network error
        Dispatcher::new(ApiClient::new("http://127.0.0.1:9"), None).unwrap()
    }

    #[test]
    fn test_requested_events() {
        assert_eq!(
            Command::Login {
                email: "a@b.co".to_string(),
                password: "x".to_string()
            }
            .requested(),
            Event::LoginRequested
        );
        assert_eq!(Command::DeleteUser(3).requested(), Event::DeleteRequested);
        assert_eq!(
            Command::Restore {
                token: "t".to_string()
            }
            .requested(),
            Event::RestoreRequested {
                token: "t".to_string()
            }
        );
    }

    #[test]
    fn test_create_commands_compare_by_content() {
        let request = CreateUserRequest {
            email: "jane@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password: "secret1".to_string(),
            role: None,
            is_active: None,
        };
        assert_eq!(
            Command::CreateUser(request.clone()),
            Command::CreateUser(request.clone())
        );
        assert_ne!(
            Command::CreateUser(request.clone()),
            Command::CreateUser(CreateUserRequest {
                password: "secret2".to_string(),
                ..request
            })
        );
    }

    #[test]
    fn test_dispatch_applies_requested_event_immediately() {
        let mut dispatcher = offline_dispatcher();
        dispatcher.dispatch(Command::LoadUsers);
        assert!(dispatcher.state().loading);
    }

    #[test]
    fn test_protected_command_without_token_fails() {
        let mut dispatcher = offline_dispatcher();
        dispatcher.dispatch(Command::LoadUsers);
        assert!(dispatcher.wait(Duration::from_secs(5)));
        assert_eq!(dispatcher.state().error.as_deref(), Some(NOT_SIGNED_IN));
        assert!(!dispatcher.state().loading);
    }

    #[test]
    fn test_invalid_login_fails_without_request() {
        let mut dispatcher = offline_dispatcher();
        dispatcher.dispatch(Command::Login {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        });
        assert!(dispatcher.wait(Duration::from_secs(5)));
        assert_eq!(
            dispatcher.state().error.as_deref(),
            Some("Email must be a valid address")
        );
    }

    #[test]
    fn test_logout_resets_without_follow_up_event() {
        let mut dispatcher = offline_dispatcher();
        dispatcher.apply(Event::LoginFailed("x".to_string()));
        dispatcher.dispatch(Command::Logout);
        assert_eq!(dispatcher.state(), &SessionState::default());
        assert!(!dispatcher.wait(Duration::from_millis(200)));
    }

    #[test]
    fn test_restore_without_storage_does_nothing() {
        let mut dispatcher = offline_dispatcher();
        assert!(!dispatcher.restore_session());
        assert_eq!(dispatcher.drain(), 0);
    }
}
