use super::Credentials;

/// Authentication state of the console.
///
/// Being logged in and holding credentials are the same fact, so the two
/// cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(Credentials),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::LoggedIn(credentials) => Some(credentials),
            Self::LoggedOut => None,
        }
    }
}

impl From<Option<Credentials>> for SessionState {
    fn from(credentials: Option<Credentials>) -> Self {
        match credentials {
            Some(credentials) => Self::LoggedIn(credentials),
            None => Self::LoggedOut,
        }
    }
}
