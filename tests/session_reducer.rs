use nirakshak::portal::session::{
    AuthPage, Page, SessionIntent, SessionReducer, SessionState, User,
};
use nirakshak::ui::mvi::Reducer;

fn signed_in_state() -> SessionState {
    SessionState::LoggedIn {
        user: User::new("Asha", "asha@example.com"),
    }
}

#[test]
fn default_is_login_page() {
    assert_eq!(
        SessionState::default(),
        SessionState::LoggedOut {
            page: AuthPage::Login
        }
    );
}

#[test]
fn signed_in_moves_to_dashboard() {
    let state = SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::SignedIn {
            user: User::from_email("asha@example.com"),
        },
    );
    assert!(state.is_logged_in());
    assert_eq!(state.current_page(), Page::Dashboard);
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("asha"));
}

#[test]
fn switch_page_while_logged_out() {
    let state = SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::SwitchPage {
            target: AuthPage::Register,
        },
    );
    assert_eq!(state.current_page(), Page::Register);

    let state = SessionReducer::reduce(
        state,
        SessionIntent::SwitchPage {
            target: AuthPage::Login,
        },
    );
    assert_eq!(state.current_page(), Page::Login);
}

#[test]
fn switch_page_while_logged_in_is_ignored() {
    let state = SessionReducer::reduce(
        signed_in_state(),
        SessionIntent::SwitchPage {
            target: AuthPage::Register,
        },
    );
    assert_eq!(state, signed_in_state());
}

#[test]
fn signed_out_always_lands_on_login() {
    for start in [
        signed_in_state(),
        SessionState::LoggedOut {
            page: AuthPage::Register,
        },
        SessionState::default(),
    ] {
        let state = SessionReducer::reduce(start, SessionIntent::SignedOut);
        assert!(!state.is_logged_in());
        assert!(state.user().is_none());
        assert_eq!(state.current_page(), Page::Login);
    }
}

#[test]
fn dashboard_implies_user() {
    let intents = [
        SessionIntent::SwitchPage {
            target: AuthPage::Register,
        },
        SessionIntent::SignedIn {
            user: User::new("B", "b@example.com"),
        },
        SessionIntent::SwitchPage {
            target: AuthPage::Login,
        },
        SessionIntent::SignedOut,
    ];
    let mut state = SessionState::default();
    for intent in intents {
        state = SessionReducer::reduce(state, intent);
        assert_eq!(
            state.current_page() == Page::Dashboard,
            state.user().is_some()
        );
        assert_eq!(state.is_logged_in(), state.user().is_some());
    }
}
