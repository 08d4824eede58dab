use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// A stored session is still being validated.
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user_info.as_ref().is_some_and(UserInfo::is_admin)
    }
}

/// Validate the stored access token, refreshing it once if needed.
async fn restore_session(access_token: String) -> Option<(String, UserInfo)> {
    if let Ok(user) = api::get_current_user(&access_token).await {
        return Some((access_token, user));
    }

    let refresh_token = storage::get_refresh_token()?;
    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            match api::get_current_user(&response.access_token).await {
                Ok(user) => Some((response.access_token, user)),
                Err(e) => {
                    log::warn!("User lookup after refresh failed: {}", e);
                    None
                }
            }
        }
        Err(e) => {
            log::info!("Session refresh failed: {}", e);
            None
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let stored_token = storage::get_access_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: stored_token.is_some(),
        ..Default::default()
    });

    // Restore the session from localStorage once
    if let Some(access_token) = stored_token {
        spawn_local(async move {
            match restore_session(access_token).await {
                Some((access_token, user_info)) => set_auth_state.set(AuthState {
                    access_token: Some(access_token),
                    user_info: Some(user_info),
                    restoring: false,
                }),
                None => {
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store the tokens of a successful login and publish the user.
pub fn complete_login(
    set_auth_state: WriteSignal<AuthState>,
    response: contracts::system::auth::LoginResponse,
) {
    storage::save_tokens(&response.access_token, &response.refresh_token);
    log::info!("Logged in as {}", response.user.username);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restoring: false,
    });
}

/// Revoke the session on the server and forget it locally.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        api::logout(refresh_token).await;
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> UserInfo {
        UserInfo {
            username: "u".to_string(),
            full_name: None,
            role: role.to_string(),
        }
    }

    #[test]
    fn test_admin_requires_token() {
        let state = AuthState {
            access_token: None,
            user_info: Some(user("ADMIN")),
            restoring: false,
        };
        assert!(!state.is_admin());

        let state = AuthState {
            access_token: Some("t".to_string()),
            ..state
        };
        assert!(state.is_admin());
    }

    #[test]
    fn test_standard_user_is_not_admin() {
        let state = AuthState {
            access_token: Some("t".to_string()),
            user_info: Some(user("STANDARD")),
            restoring: false,
        };
        assert!(state.is_authenticated());
        assert!(!state.is_admin());
    }
}
