use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{User, UserRecord},
    repository::UserRepository,
};

/// Postgres-backed implementation of UserRepository
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, record: UserRecord) -> UserResult<User> {
        let has_id = record.id.is_some();
        let active_model: entity::ActiveModel = record.into();

        let model = if has_id {
            active_model
                .update(&self.db)
                .await
                .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?
        } else {
            active_model
                .insert(&self.db)
                .await
                .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?
        };

        tracing::info!(user_id = model.id, "Saved user");
        Ok(model.into())
    }

    async fn find(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn find_one(&self, id: i64) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn delete(&self, id: i64) -> UserResult<u64> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        if result.rows_affected > 0 {
            tracing::info!(user_id = id, "Deleted user");
        }

        Ok(result.rows_affected)
    }
}
