//! Mock authentication: any non-blank e-mail/password pair signs in as the
//! demo user. Nothing here is a security boundary.

pub mod session_store;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use session_store::SessionStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl UserInfo {
    /// The single mock account, carrying the e-mail used to sign in
    pub fn demo(email: &str) -> Self {
        Self {
            id: "1".to_string(),
            name: "Usuario Demo".to_string(),
            email: email.trim().to_string(),
            role: "admin".to_string(),
            permissions: vec!["all".to_string()],
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p == "all" || p == permission)
    }

    /// Two-letter avatar text
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("email and password are required")]
    MissingCredentials,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    user: Option<UserInfo>,
}

impl AuthSession {
    pub fn restored(user: Option<UserInfo>) -> Self {
        Self { user }
    }

    pub fn login(&mut self, request: &LoginRequest) -> Result<&UserInfo, AuthError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        log::info!("signed in as {}", request.email.trim());
        Ok(&*self.user.insert(UserInfo::demo(&request.email)))
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.user
            .as_ref()
            .map(|u| u.has_permission(permission))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_any_credentials_sign_in() {
        let mut session = AuthSession::default();
        let user = session.login(&request(" ana@htl.com ", "x")).unwrap().clone();
        assert_eq!(user.email, "ana@htl.com");
        assert_eq!(user.name, "Usuario Demo");
        assert_eq!(user.initials(), "UD");
        assert!(session.is_authenticated());
        assert!(session.has_permission("sop1"));

        session.logout();
        assert!(!session.is_authenticated());
        assert!(!session.has_permission("sop1"));
    }

    #[test]
    fn test_blank_credentials_rejected() {
        let mut session = AuthSession::default();
        assert_eq!(
            session.login(&request("   ", "x")).unwrap_err(),
            AuthError::MissingCredentials
        );
        assert_eq!(
            session.login(&request("a@b.c", "")).unwrap_err(),
            AuthError::MissingCredentials
        );
        assert!(!session.is_authenticated());
    }
}
