use crate::portal::session::intent::SessionIntent;
use crate::portal::session::state::{AuthPage, SessionState};
use crate::ui::mvi::Reducer;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SignedIn { user } => SessionState::LoggedIn { user },
            SessionIntent::SwitchPage { target } => match state {
                SessionState::LoggedOut { .. } => SessionState::LoggedOut { page: target },
                // The dashboard has no way back to the forms except logout.
                logged_in @ SessionState::LoggedIn { .. } => logged_in,
            },
            SessionIntent::SignedOut => SessionState::LoggedOut {
                page: AuthPage::Login,
            },
        }
    }
}
