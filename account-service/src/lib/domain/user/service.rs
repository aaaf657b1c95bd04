use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for registration, login, and lookups.
///
/// Password hashing and verification are CPU-bound and run on tokio's
/// blocking pool so they never stall other requests.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;

        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| UserError::HashingError(e.to_string()))?
                .map_err(|e| UserError::HashingError(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            role: command.role,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            role = %created_user.role,
            "User registered"
        );

        Ok(created_user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, UserError> {
        let user = self.repository.find_by_email(email).await?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();

        let outcome = tokio::task::spawn_blocking(move || match user {
            Some(user) => authenticator
                .authenticate(
                    &password,
                    &user.password_hash,
                    &user.id.to_string(),
                    &user.role,
                )
                .map(|result| LoginOutcome {
                    token: result.access_token,
                    user,
                }),
            None => Err(authenticator.reject_unknown_account(&password)),
        })
        .await
        .map_err(|e| UserError::HashingError(e.to_string()))?;

        match outcome {
            Ok(outcome) => {
                tracing::info!(user_id = %outcome.user.id, "User logged in");
                Ok(outcome)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::info!("Login rejected");
                Err(UserError::InvalidCredentials)
            }
            Err(AuthenticationError::JwtError(e)) => Err(UserError::TokenError(e.to_string())),
        }
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use auth::Role;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::DisplayName;
    use crate::domain::user::models::EmailAddress;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    // Define mocks in the test module using mockall
    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(SECRET))
    }

    fn command(role: Option<Role>) -> RegisterUserCommand {
        RegisterUserCommand::new(
            DisplayName::new("Ann".to_string()).unwrap(),
            EmailAddress::new("ann@x.com".to_string()).unwrap(),
            "secret123".to_string(),
            role,
        )
        .unwrap()
    }

    fn stored_user(password: &str, role: Role) -> User {
        User {
            id: UserId::new(),
            name: DisplayName::new("Ann".to_string()).unwrap(),
            email: EmailAddress::new("ann@x.com".to_string()).unwrap(),
            password_hash: authenticator().hash_password(password).unwrap(),
            role,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.name.as_str() == "Ann"
                    && user.email.as_str() == "ann@x.com"
                    && user.role == Role::user()
                    && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "secret123"
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository), authenticator());

        let user = service.register(command(None)).await.unwrap();
        assert_eq!(user.email.as_str(), "ann@x.com");
        assert_eq!(user.role, Role::user());
    }

    #[tokio::test]
    async fn test_register_keeps_requested_role() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| user.role == Role::admin())
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository), authenticator());

        let user = service.register(command(Some(Role::admin()))).await.unwrap();
        assert_eq!(user.role, Role::admin());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.register(command(None)).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("secret123", Role::user());
        let user_id = user.id;

        repository
            .expect_find_by_email()
            .withf(|email| email == "ann@x.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let authenticator = authenticator();
        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));

        let outcome = service.login("ann@x.com", "secret123").await.unwrap();
        assert_eq!(outcome.user.id, user_id);

        let claims = authenticator.validate_token(&outcome.token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, Role::user());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("secret123", Role::user());

        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.login("ann@x.com", "wrong").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.login("nobody@x.com", "secret123").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_database_error() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("connection refused".to_string())));

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.login("ann@x.com", "secret123").await;
        assert!(matches!(result.unwrap_err(), UserError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.get_user(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("secret123", Role::admin());
        let user_id = user.id;

        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository), authenticator());

        let user = service.get_user(&user_id).await.unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.role, Role::admin());
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut repository = MockTestUserRepository::new();
        let users = vec![
            stored_user("a", Role::admin()),
            stored_user("b", Role::user()),
        ];

        repository
            .expect_list_all()
            .times(1)
            .returning(move || Ok(users.clone()));

        let service = UserService::new(Arc::new(repository), authenticator());

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
    }
}
