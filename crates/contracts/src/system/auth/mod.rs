use serde::{Deserialize, Serialize};

/// Role granting access to the admin-only screens.
pub const ROLE_ADMIN: &str = "ADMIN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(ROLE_ADMIN)
    }

    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role() {
        let user: UserInfo =
            serde_json::from_str(r#"{"username":"admin","role":"ADMIN"}"#).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.display_name(), "admin");

        let user: UserInfo = serde_json::from_str(
            r#"{"username":"clerk","full_name":"A. Clerk","role":"STANDARD"}"#,
        )
        .unwrap();
        assert!(!user.is_admin());
        assert_eq!(user.display_name(), "A. Clerk");
    }
}
