use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        self.repository.save(input.into()).await
    }

    /// List all users
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find().await
    }

    /// Get a user by ID, `None` when no user matches
    pub async fn find_user(&self, id: i64) -> UserResult<Option<User>> {
        self.repository.find_one(id).await
    }

    /// Update a user, merging present fields over the stored row.
    ///
    /// Last write wins; concurrent updates are not detected.
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<User> {
        let mut user = self
            .repository
            .find_one(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        user.apply_update(input);
        self.repository.save(user.into()).await
    }

    /// Delete a user, returning the number of rows removed
    pub async fn remove_user(&self, id: i64) -> UserResult<u64> {
        // Existence check first so a missing user surfaces as NotFound
        self.repository
            .find_one(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        self.repository.delete(id).await
    }
}
