//! User factory for creating test portal users.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Password given to every factory-created user unless overridden.
pub const DEFAULT_PASSWORD: &str = "geheim123";

/// Factory for creating users with a real argon2 password hash.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password: String,
    admin: bool,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password: DEFAULT_PASSWORD.to_string(),
            admin: false,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_string();

        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("Benutzer".to_string()),
            password_hash: ActiveValue::Set(password_hash),
            admin: ActiveValue::Set(self.admin),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-admin user with `DEFAULT_PASSWORD`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
