use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::{User, UserRecord};

/// Repository trait for User persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a record. An absent id inserts a new row and assigns an
    /// identifier; a populated id overwrites the matching row.
    async fn save(&self, record: UserRecord) -> UserResult<User>;

    /// List all users
    async fn find(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID, `None` when no row matches
    async fn find_one(&self, id: i64) -> UserResult<Option<User>>;

    /// Delete a user by ID, returning the number of rows removed
    async fn delete(&self, id: i64) -> UserResult<u64>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, record: UserRecord) -> UserResult<User> {
        let mut users = self.users.write().await;

        let id = match record.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };

        let user = User {
            id,
            firstname: record.firstname,
            lastname: record.lastname,
            email: record.email,
        };
        users.insert(id, user.clone());

        tracing::info!(user_id = id, "Saved user");
        Ok(user)
    }

    async fn find(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_one(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> UserResult<u64> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(1)
        } else {
            Ok(0)
        }
    }
}
