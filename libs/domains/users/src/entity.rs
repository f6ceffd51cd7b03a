use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain User
impl From<Model> for crate::models::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            firstname: model.firstname,
            lastname: model.lastname,
            email: model.email,
        }
    }
}

// Conversion from UserRecord to Sea-ORM ActiveModel.
// An absent id stays NotSet so the database assigns one on insert.
impl From<crate::models::UserRecord> for ActiveModel {
    fn from(record: crate::models::UserRecord) -> Self {
        ActiveModel {
            id: match record.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            firstname: Set(record.firstname),
            lastname: Set(record.lastname),
            email: Set(record.email),
        }
    }
}
