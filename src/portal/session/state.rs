use crate::ui::mvi::UiState;

/// The signed-in citizen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// User built from a sign-in, named after the mailbox part of the address.
    pub fn from_email(email: &str) -> Self {
        Self::new(local_part(email), email)
    }
}

/// Everything before the first `@`, or the whole string when there is none.
pub fn local_part(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

/// Pages reachable while signed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPage {
    #[default]
    Login,
    Register,
}

impl AuthPage {
    pub fn other(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// Page the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
}

impl From<AuthPage> for Page {
    fn from(page: AuthPage) -> Self {
        match page {
            AuthPage::Login => Page::Login,
            AuthPage::Register => Page::Register,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut { page: AuthPage },
    LoggedIn { user: User },
}

impl Default for SessionState {
    fn default() -> Self {
        Self::LoggedOut {
            page: AuthPage::Login,
        }
    }
}

impl UiState for SessionState {}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedIn { user } => Some(user),
            Self::LoggedOut { .. } => None,
        }
    }

    pub fn current_page(&self) -> Page {
        match self {
            Self::LoggedOut { page } => (*page).into(),
            Self::LoggedIn { .. } => Page::Dashboard,
        }
    }
}
