use crate::model::auth::AuthStatusDto;

/// Client view of the session, shared through context as `Signal<AuthState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// False until the first `/api/auth-status` response arrives.
    pub fetched: bool,
    pub authenticated: bool,
    pub bot_ready: bool,
}

impl AuthState {
    pub fn logged_in(bot_ready: bool) -> Self {
        Self {
            fetched: true,
            authenticated: true,
            bot_ready,
        }
    }

    pub fn logged_out() -> Self {
        Self {
            fetched: true,
            authenticated: false,
            bot_ready: false,
        }
    }
}

impl From<AuthStatusDto> for AuthState {
    fn from(dto: AuthStatusDto) -> Self {
        Self {
            fetched: true,
            authenticated: dto.authenticated,
            bot_ready: dto.bot_ready,
        }
    }
}
