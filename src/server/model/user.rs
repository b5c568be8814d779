//! Portal user models.

use crate::model::user::{ChangePasswordDto, UpdateProfileDto, UserDto};

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub admin: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
        }
    }
}

/// Password change request. Passwords are never trimmed.
#[derive(Debug, Clone)]
pub struct ChangePasswordParams {
    pub old_password: String,
    pub new_password1: String,
    pub new_password2: String,
}

impl ChangePasswordParams {
    pub fn from_dto(dto: ChangePasswordDto) -> Self {
        Self {
            old_password: dto.old_password,
            new_password1: dto.new_password1,
            new_password2: dto.new_password2,
        }
    }
}

/// User without the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            admin: entity.admin,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            admin: self.admin,
        }
    }
}
