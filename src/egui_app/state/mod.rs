use std::io;

use crate::egui_app::commands::{Command, Dispatcher};
use crate::egui_app::guard::authorize;
use crate::egui_app::session::{is_authenticated, Event, SessionState};
use crate::egui_app::{ApiClient, Config, TokenStore, View};
use crate::shared::{CreateUserRequest, PublicUser, UpdateUserRequest, UserRole};

/// Contents of the create/edit user dialog
#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    /// The account being edited; `None` when creating
    pub original: Option<PublicUser>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Required on create, optional on edit
    pub password: String,
    pub role: UserRole,
    pub is_active: bool,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            original: None,
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            password: String::new(),
            role: UserRole::User,
            is_active: true,
        }
    }

    pub fn edit(user: &PublicUser) -> Self {
        Self {
            original: Some(user.clone()),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password: String::new(),
            role: user.role,
            is_active: user.is_active,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.original.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit user"
        } else {
            "New user"
        }
    }

    pub fn to_create_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password: self.password.clone(),
            role: Some(self.role),
            is_active: Some(self.is_active),
        }
    }

    /// Only the fields that differ from the original account
    pub fn to_update_request(&self) -> UpdateUserRequest {
        let Some(original) = &self.original else {
            return UpdateUserRequest::default();
        };

        let changed = |edited: &str, current: &str| {
            let edited = edited.trim();
            (edited != current).then(|| edited.to_string())
        };

        UpdateUserRequest {
            email: changed(&self.email, &original.email),
            first_name: changed(&self.first_name, &original.first_name),
            last_name: changed(&self.last_name, &original.last_name),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            role: (self.role != original.role).then_some(self.role),
            is_active: (self.is_active != original.is_active).then_some(self.is_active),
        }
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub dispatcher: Dispatcher,
    pub current_view: View,
    pub email_input: String,
    pub password_input: String,
    /// Open create/edit dialog
    pub user_form: Option<UserForm>,
    /// Account awaiting delete confirmation
    pub pending_delete: Option<i64>,
    was_authenticated: bool,
}

impl AppState {
    /// State with token persistence in the platform config directory
    pub fn new(config: Config) -> io::Result<Self> {
        let api = ApiClient::from_config(&config);
        let tokens = TokenStore::default_location();
        if tokens.is_none() {
            tracing::warn!("No config directory available. Sessions will not be remembered.");
        }
        let dispatcher = Dispatcher::new(api, tokens)?;
        Ok(Self::with_dispatcher(config, dispatcher))
    }

    pub fn with_dispatcher(config: Config, dispatcher: Dispatcher) -> Self {
        Self {
            config,
            dispatcher,
            current_view: View::Login,
            email_input: String::new(),
            password_input: String::new(),
            user_form: None,
            pending_delete: None,
            was_authenticated: false,
        }
    }

    /// Pick up a remembered session, if any
    pub fn start(&mut self) {
        if self.dispatcher.restore_session() {
            tracing::info!("Restoring stored session");
        }
    }

    pub fn session(&self) -> &SessionState {
        self.dispatcher.state()
    }

    /// Apply arrived events and keep the view consistent with the session
    pub fn poll(&mut self) {
        self.dispatcher.drain();
        self.sync_view();
    }

    fn sync_view(&mut self) {
        let authenticated = is_authenticated(self.session());

        if authenticated && !self.was_authenticated {
            self.password_input.clear();
            self.current_view = View::Dashboard;
            self.dispatcher.dispatch(Command::LoadUsers);
        }

        if !authenticated {
            self.user_form = None;
            self.pending_delete = None;
        }

        self.current_view = authorize(self.session(), self.current_view).view();
        self.was_authenticated = authenticated;
    }

    /// Navigate through the guard
    pub fn navigate(&mut self, view: View) {
        self.current_view = authorize(self.session(), view).view();
    }

    pub fn handle_login(&mut self) {
        self.dispatcher.dispatch(Command::Login {
            email: self.email_input.trim().to_string(),
            password: self.password_input.clone(),
        });
    }

    pub fn logout(&mut self) {
        self.dispatcher.dispatch(Command::Logout);
        self.password_input.clear();
        self.sync_view();
    }

    pub fn refresh_users(&mut self) {
        self.dispatcher.dispatch(Command::LoadUsers);
    }

    pub fn dismiss_error(&mut self) {
        self.dispatcher.apply(Event::ErrorDismissed);
    }

    pub fn open_create_form(&mut self) {
        self.user_form = Some(UserForm::create());
    }

    pub fn open_edit_form(&mut self, user: &PublicUser) {
        self.user_form = Some(UserForm::edit(user));
    }

    /// Send the dialog's contents and close it
    pub fn submit_user_form(&mut self) {
        let Some(form) = self.user_form.take() else {
            return;
        };

        match &form.original {
            Some(original) => {
                let changes = form.to_update_request();
                if changes.is_empty() {
                    return;
                }
                self.dispatcher.dispatch(Command::UpdateUser {
                    id: original.id,
                    changes,
                });
            }
            None => self
                .dispatcher
                .dispatch(Command::CreateUser(form.to_create_request())),
        }
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            self.dispatcher.dispatch(Command::DeleteUser(id));
        }
    }
}
