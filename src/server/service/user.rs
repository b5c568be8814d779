//! Portal users: login, profile and password changes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{
        auth::AuthError, internal::InternalError, validation::ValidationError, AppError,
    },
    model::user::{ChangePasswordParams, CreateUserParams, UpdateProfileParams, User},
    util::validate,
};

const USERNAME_MAX: usize = 150;
const EMAIL_MAX: usize = 64;
const NAME_MAX: usize = 150;
const PASSWORD_MAX: usize = 256;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn any_exists(&self) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).any_exists().await?)
    }

    /// Creates a user, hashing the given plain password.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let username = params.username.trim().to_string();
        validate::required(&username, "Benutzername", USERNAME_MAX)?;
        validate::required(&params.password, "Passwort", PASSWORD_MAX)?;

        let repo = UserRepository::new(self.db);
        if repo.find_by_username(&username).await?.is_some() {
            return Err(ValidationError::Taken("Dieser Benutzername").into());
        }

        let password_hash = hash_password(&params.password)?;
        let user = repo
            .create(
                username,
                params.email,
                params.first_name,
                params.last_name,
                password_hash,
                params.admin,
            )
            .await?;

        tracing::info!("Created user {} '{}'", user.id, user.username);

        Ok(User::from_entity(user))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(id).await?;

        Ok(user.map(User::from_entity))
    }

    /// Checks the credentials of a login attempt.
    ///
    /// Unknown usernames and wrong passwords yield the same error.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let username = username.trim();

        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        Ok(User::from_entity(user))
    }

    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        validate::required(&params.username, "Benutzername", USERNAME_MAX)?;
        validate::email(&params.email, "E-Mail-Adresse", EMAIL_MAX)?;
        validate::required(&params.first_name, "Vorname", NAME_MAX)?;
        validate::required(&params.last_name, "Nachname", NAME_MAX)?;

        let repo = UserRepository::new(self.db);
        if repo.username_taken(&params.username, id).await? {
            return Err(ValidationError::Taken("Dieser Benutzername").into());
        }

        let user = repo
            .update_profile(id, params)
            .await?
            .ok_or(AuthError::UserNotInDatabase(id))?;

        Ok(User::from_entity(user))
    }

    pub async fn change_password(
        &self,
        id: i32,
        params: ChangePasswordParams,
    ) -> Result<(), AppError> {
        if params.old_password.is_empty() {
            return Err(ValidationError::Required("das alte Passwort").into());
        }
        if params.new_password1.is_empty() {
            return Err(ValidationError::Required("ein neues Passwort").into());
        }
        if params.new_password2.is_empty() {
            return Err(ValidationError::Required("die Passwortbestätigung").into());
        }
        if params.new_password1.chars().count() > PASSWORD_MAX {
            return Err(ValidationError::PasswordTooLong.into());
        }
        if params.new_password1 != params.new_password2 {
            return Err(ValidationError::PasswordMismatch.into());
        }

        let repo = UserRepository::new(self.db);
        let user = repo
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(id))?;

        if !verify_password(&params.old_password, &user.password_hash)? {
            return Err(ValidationError::WrongPassword.into());
        }

        repo.set_password_hash(id, hash_password(&params.new_password1)?)
            .await?;

        tracing::info!("User {} changed their password", id);

        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_own_hash() {
        let hash = hash_password("geheim123").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("geheim123", &hash).unwrap());
        assert!(!verify_password("geheim124", &hash).unwrap());
    }

    #[test]
    fn rejects_malformed_hash() {
        assert!(verify_password("geheim123", "kein-hash").is_err());
    }
}
