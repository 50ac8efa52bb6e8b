use crate::portal::session::state::{AuthPage, User};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Credentials already validated by the controller.
    SignedIn { user: User },
    /// Flip between the login and registration forms. Ignored while signed in.
    SwitchPage { target: AuthPage },
    SignedOut,
}

impl Intent for SessionIntent {}
