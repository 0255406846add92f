//! Registration and login.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::User;
use crate::error::{DomainError, RepoError};
use crate::ports::{BaseRepository, PasswordService, TokenService, UserRepository};
use crate::validation::{LoginInput, RegisterInput, validate_login, validate_register};

/// A user that just registered or logged in, with a fresh session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Orchestrates the user store, the password hasher and the token issuer.
///
/// Holds no state between calls. The duplicate e-mail check and the insert
/// are two separate store calls; a concurrent registration that wins the race
/// surfaces as [`DomainError::DuplicateEmail`] when the store enforces a
/// unique e-mail.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    pub fn tokens(&self) -> &Arc<dyn TokenService> {
        &self.tokens
    }

    pub async fn register(&self, input: RegisterInput) -> Result<AuthenticatedUser, DomainError> {
        if !input.email.is_empty() && self.users.find_by_email(&input.email).await?.is_some() {
            return Err(DomainError::DuplicateEmail);
        }

        validate_register(&input).into_result()?;

        let password_hash = self.passwords.hash(&input.password)?;
        let user = User::new(input.email, input.name, password_hash);
        let user = self.users.insert(user).await.map_err(|e| match e {
            RepoError::Constraint(_) => DomainError::DuplicateEmail,
            other => DomainError::Repository(other),
        })?;

        self.authenticated(user)
    }

    pub async fn login(&self, input: LoginInput) -> Result<AuthenticatedUser, DomainError> {
        let mut errors = validate_login(&input);

        let user = if errors.has_field("email") {
            None
        } else {
            let user = self.users.find_by_email(&input.email).await?;
            if user.is_none() {
                errors.push("email", "You didn't register before");
            }
            user
        };

        let Some(user) = user else {
            return Err(DomainError::Validation(errors));
        };
        errors.into_result()?;

        if !self.passwords.verify(&input.password, &user.password_hash)? {
            return Err(DomainError::Authentication);
        }

        self.authenticated(user)
    }

    fn authenticated(&self, user: User) -> Result<AuthenticatedUser, DomainError> {
        let token = self.tokens.issue(user.id)?;
        Ok(AuthenticatedUser {
            user_id: user.id,
            name: user.name,
            email: user.email,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{FakeUsers, PlainPasswords, StaticTokens};

    fn service(users: Arc<FakeUsers>) -> AuthService {
        AuthService::new(users, Arc::new(PlainPasswords), Arc::new(StaticTokens))
    }

    fn register_input(email: &str) -> RegisterInput {
        RegisterInput {
            email: email.to_string(),
            name: "Jane".to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_creates_one_user_with_hashed_password() {
        let users = Arc::new(FakeUsers::default());
        let auth = service(users.clone());

        let registered = auth.register(register_input("jane@example.com")).await.unwrap();

        assert_eq!(registered.email, "jane@example.com");
        assert_eq!(registered.name, "Jane");
        assert_eq!(registered.token, format!("token-{}", registered.user_id));

        let stored = users.all();
        assert_eq!(stored.len(), 1);
        assert_ne!(stored[0].password_hash, "hunter22");
        assert!(PlainPasswords.verify("hunter22", &stored[0].password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let users = Arc::new(FakeUsers::default());
        let auth = service(users.clone());
        auth.register(register_input("jane@example.com")).await.unwrap();

        let err = auth
            .register(register_input("jane@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::DuplicateEmail));
        assert_eq!(users.all().len(), 1);
    }

    #[tokio::test]
    async fn test_register_lost_race_is_duplicate() {
        let users = Arc::new(FakeUsers::default());
        users.hide_from_lookup();
        let auth = service(users.clone());
        auth.register(register_input("jane@example.com")).await.unwrap();

        let err = auth
            .register(register_input("jane@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_register_collects_every_empty_field() {
        let users = Arc::new(FakeUsers::default());
        let auth = service(users.clone());

        let err = auth.register(RegisterInput::default()).await.unwrap_err();

        match err {
            DomainError::Validation(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(users.all().is_empty());
    }

    #[tokio::test]
    async fn test_login_paths() {
        let users = Arc::new(FakeUsers::default());
        let auth = service(users);
        let registered = auth.register(register_input("jane@example.com")).await.unwrap();

        let ok = auth
            .login(LoginInput {
                email: "jane@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(ok.user_id, registered.user_id);
        assert!(!ok.token.is_empty());

        let wrong = auth
            .login(LoginInput {
                email: "jane@example.com".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(wrong, DomainError::Authentication));

        let unknown = auth
            .login(LoginInput {
                email: "ghost@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap_err();
        match unknown {
            DomainError::Validation(errors) => assert!(errors.has_field("email")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_empty_password_with_unknown_email_reports_both() {
        let auth = service(Arc::new(FakeUsers::default()));

        let err = auth
            .login(LoginInput {
                email: "ghost@example.com".to_string(),
                password: String::new(),
            })
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(errors) => {
                assert!(errors.has_field("email"));
                assert!(errors.has_field("password"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_with_corrupt_hash_is_crypto_error() {
        let users = Arc::new(FakeUsers::default());
        users
            .insert(User::new(
                "jane@example.com".to_string(),
                "Jane".to_string(),
                "garbage".to_string(),
            ))
            .await
            .unwrap();
        let auth = service(users);

        let err = auth
            .login(LoginInput {
                email: "jane@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Crypto(_)));
    }
}
