use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User entity - a persisted user with its assigned identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned by the persistence layer
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

/// DTO for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

/// DTO for updating an existing user
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

/// A user row handed to the repository for persistence.
///
/// `id` is `None` for inserts; the repository assigns the identifier.
/// A populated `id` overwrites the matching row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserRecord {
    pub id: Option<i64>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl From<CreateUser> for UserRecord {
    fn from(input: CreateUser) -> Self {
        Self {
            id: None,
            firstname: input.firstname,
            lastname: input.lastname,
            email: input.email,
        }
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
        }
    }
}

impl User {
    /// Apply updates from UpdateUser DTO
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(firstname) = update.firstname {
            self.firstname = firstname;
        }
        if let Some(lastname) = update.lastname {
            self.lastname = lastname;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}
