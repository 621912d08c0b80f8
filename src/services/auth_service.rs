//! Auth service
//!
//! Username/password authentication against the user store, issuing a JWT
//! on success. The truck endpoints never call this directly; it is consumed
//! by the login route and, indirectly, by the auth middleware.

use bcrypt::verify;
use tracing::warn;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::repositories::user_repository::UserStore;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthService<S: UserStore> {
    store: S,
    jwt_config: JwtConfig,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(store: S, jwt_config: JwtConfig) -> Self {
        Self { store, jwt_config }
    }

    /// Authenticate a username/password pair and issue a session token.
    /// Unknown usernames and wrong passwords produce the same error so the
    /// endpoint does not leak which usernames exist.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = self
            .store
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        let password_ok = verify(&request.password, &user.user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !password_ok {
            warn!("Failed login attempt for user '{}'", request.username);
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        let (token, expires_at) =
            generate_token(&user.user.username, user.roles.clone(), &self.jwt_config)?;

        Ok(LoginResponse {
            token,
            expires_at,
            username: user.user.username,
            roles: user.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{User, UserWithRoles, ROLE_ADMIN};
    use crate::utils::jwt::verify_token;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct InMemoryUserStore {
        users: HashMap<String, UserWithRoles>,
    }

    #[async_trait]
    impl UserStore for InMemoryUserStore {
        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<UserWithRoles>, AppError> {
            Ok(self.users.get(username).cloned())
        }
    }

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiration: 3600,
        }
    }

    fn service_with_admin() -> AuthService<InMemoryUserStore> {
        // Minimum bcrypt cost keeps the tests fast.
        let password_hash = bcrypt::hash("admin123", 4).unwrap();
        let mut users = HashMap::new();
        users.insert(
            "admin".to_string(),
            UserWithRoles {
                user: User {
                    id: 1,
                    username: "admin".to_string(),
                    password_hash,
                },
                roles: vec![ROLE_ADMIN.to_string()],
            },
        );

        AuthService::new(InMemoryUserStore { users }, jwt_config())
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_a_verifiable_token_with_roles() {
        let service = service_with_admin();

        let response = service.login(login_request("admin", "admin123")).await.unwrap();

        assert_eq!(response.username, "admin");
        assert_eq!(response.roles, vec![ROLE_ADMIN.to_string()]);

        let claims = verify_token(&response.token, &jwt_config()).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.roles, vec![ROLE_ADMIN.to_string()]);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_fail_identically() {
        let service = service_with_admin();

        let wrong_password = service
            .login(login_request("admin", "nope"))
            .await
            .unwrap_err();
        let unknown_user = service
            .login(login_request("ghost", "admin123"))
            .await
            .unwrap_err();

        let (msg_a, msg_b) = match (wrong_password, unknown_user) {
            (AppError::Unauthorized(a), AppError::Unauthorized(b)) => (a, b),
            other => panic!("expected Unauthorized for both, got {:?}", other),
        };
        assert_eq!(msg_a, msg_b);
    }
}
