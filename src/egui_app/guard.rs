//! Client Route Guard
//!
//! Decides whether a view may be shown for the current session. Protected
//! views require an authenticated session; otherwise the user is sent to the
//! login screen.

use crate::egui_app::session::{is_authenticated, SessionState};
use crate::egui_app::types::{Navigation, View};

/// Check a navigation request against the session
pub fn authorize(state: &SessionState, requested: View) -> Navigation {
    if requested.requires_auth() && !is_authenticated(state) {
        tracing::debug!("Redirecting {:?} to login", requested);
        Navigation::Redirect(View::Login)
    } else {
        Navigation::Allow(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_requires_authentication() {
        let state = SessionState::default();
        assert_eq!(authorize(&state, View::Dashboard), Navigation::Redirect(View::Login));
    }

    #[test]
    fn test_dashboard_allowed_when_authenticated() {
        let state = SessionState {
            token: Some("tok".to_string()),
            is_authenticated: true,
            ..SessionState::default()
        };
        assert_eq!(authorize(&state, View::Dashboard), Navigation::Allow(View::Dashboard));
    }

    #[test]
    fn test_untrusted_restored_token_is_not_enough() {
        let state = SessionState {
            token: Some("stored".to_string()),
            loading: true,
            ..SessionState::default()
        };
        assert_eq!(authorize(&state, View::Dashboard), Navigation::Redirect(View::Login));
    }

    #[test]
    fn test_login_always_allowed() {
        assert_eq!(
            authorize(&SessionState::default(), View::Login),
            Navigation::Allow(View::Login)
        );
    }
}
