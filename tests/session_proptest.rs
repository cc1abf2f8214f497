//! Property-based tests for the client session reducer

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use authdesk::egui_app::{reduce, Event, SessionState};
use authdesk::shared::{PublicUser, UserRole};

fn user(id: i64) -> PublicUser {
    let at = Utc.with_ymd_and_hms(2024, 7, 8, 0, 0, 0).unwrap();
    PublicUser {
        id,
        email: format!("user{}@example.com", id),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role: if id == 1 { UserRole::Admin } else { UserRole::User },
        is_active: true,
        created_at: at,
        updated_at: at,
    }
}

fn session_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::LoginRequested),
        ("[a-z]{4,12}", 1i64..6)
            .prop_map(|(token, id)| Event::LoginSucceeded { token, user: user(id) }),
        "[a-z]{1,8}".prop_map(Event::LoginFailed),
        Just(Event::Logout),
        "[a-z]{4,12}".prop_map(|token| Event::RestoreRequested { token }),
        Just(Event::ProfileRequested),
        (1i64..6).prop_map(|id| Event::ProfileLoaded(user(id))),
        "[a-z]{1,8}".prop_map(Event::ProfileFailed),
    ]
}

fn users_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::UsersRequested),
        prop::collection::vec(1i64..6, 0..5)
            .prop_map(|ids| Event::UsersLoaded(ids.into_iter().map(user).collect())),
        "[a-z]{1,8}".prop_map(Event::UsersFailed),
        (1i64..6).prop_map(|id| Event::UserCreated(user(id))),
        (1i64..6).prop_map(|id| Event::UserUpdated(user(id))),
        (1i64..6).prop_map(Event::UserDeleted),
        "[a-z]{1,8}".prop_map(Event::DeleteFailed),
        Just(Event::ErrorDismissed),
    ]
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![session_event(), users_event()]
}

fn run(events: Vec<Event>) -> SessionState {
    events.into_iter().fold(SessionState::default(), reduce)
}

proptest! {
    #[test]
    fn test_logout_always_resets(events in prop::collection::vec(event_strategy(), 0..20)) {
        let state = reduce(run(events), Event::Logout);
        prop_assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_authenticated_implies_token(events in prop::collection::vec(event_strategy(), 0..30)) {
        let state = run(events);
        if state.is_authenticated {
            prop_assert!(state.token.is_some());
            prop_assert!(state.user.is_some());
        }
    }

    #[test]
    fn test_login_success_sets_session(
        events in prop::collection::vec(event_strategy(), 0..20),
        token in "[a-z]{4,12}",
        id in 1i64..6,
    ) {
        let state = reduce(
            run(events),
            Event::LoginSucceeded { token: token.clone(), user: user(id) },
        );
        prop_assert!(state.is_authenticated);
        prop_assert!(!state.loading);
        prop_assert_eq!(state.error, None);
        prop_assert_eq!(state.token, Some(token));
        prop_assert_eq!(state.user.map(|u| u.id), Some(id));
    }

    #[test]
    fn test_failure_stops_loading(
        events in prop::collection::vec(event_strategy(), 0..20),
        message in "[a-z]{1,8}",
    ) {
        let state = reduce(run(events), Event::UsersFailed(message.clone()));
        prop_assert!(!state.loading);
        prop_assert_eq!(state.error, Some(message));
    }

    #[test]
    fn test_deleted_user_leaves_list(
        events in prop::collection::vec(event_strategy(), 0..20),
        id in 1i64..6,
    ) {
        let state = reduce(run(events), Event::UserDeleted(id));
        prop_assert!(state.users.iter().all(|u| u.id != id));
    }
}
