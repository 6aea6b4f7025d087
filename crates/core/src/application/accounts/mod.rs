// Account Service - User lookup and registration

use crate::domain::{NewUser, User, UserId};
use crate::error::Result;
use crate::port::UserRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct AccountService {
    users: Arc<dyn UserRepository>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Look up a user by email. `Ok(None)` when no account matches.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.trim();
        let user = self
            .users
            .find_by_email(email)
            .await
            .inspect_err(|e| warn!(error = %e, "User lookup by email failed"))?;
        debug!(email = %email, found = user.is_some(), "User lookup by email");
        Ok(user)
    }

    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let user = self
            .users
            .find_by_id(id)
            .await
            .inspect_err(|e| warn!(error = %e, user_id = id, "User lookup by id failed"))?;
        debug!(user_id = id, found = user.is_some(), "User lookup by id");
        Ok(user)
    }

    /// Validate and store a new user account
    pub async fn register(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;

        let new_user = NewUser {
            email: new_user.email.trim().to_string(),
            ..new_user
        };
        let user = self
            .users
            .insert(&new_user)
            .await
            .inspect_err(|e| warn!(error = %e, "User registration failed"))?;

        info!(user_id = user.id, "User saved");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::log_capture::CapturedLogs;
    use crate::error::AppError;
    use crate::port::MockUserRepository;

    fn stored(id: UserId, email: &str) -> User {
        User {
            id,
            name: "Eva Stanley".into(),
            email: email.into(),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_trims_input() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "sebastianguerra@ymail.com")
            .times(1)
            .returning(|email| Ok(Some(stored(2, email))));

        let service = AccountService::new(Arc::new(repo));
        let user = service
            .find_by_email("  sebastianguerra@ymail.com ")
            .await
            .unwrap();
        assert_eq!(user.map(|u| u.id), Some(2));
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repo));
        assert!(service.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_user_before_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().never();

        let service = AccountService::new(Arc::new(repo));
        let err = service
            .register(NewUser::new("Ann", "nope", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
    }

    #[tokio::test]
    async fn test_register_propagates_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .returning(|_| Err(AppError::Conflict("email already registered".into())));

        let service = AccountService::new(Arc::new(repo));
        let err = service
            .register(NewUser::new("Ann", "ann@example.com", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_failure_is_logged() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .returning(|_| Err(AppError::Conflict("users_email_key".into())));

        let service = AccountService::new(Arc::new(repo));
        assert!(service
            .register(NewUser::new("Ann", "ann@example.com", "pw"))
            .await
            .is_err());

        let output = logs.contents();
        assert!(output.contains("WARN"), "{}", output);
        assert!(output.contains("User registration failed"), "{}", output);
        assert!(output.contains("users_email_key"), "{}", output);
    }
}
