use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::UpdateProfileParams;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user with an already hashed password.
    pub async fn create(
        &self,
        username: String,
        email: String,
        first_name: String,
        last_name: String,
        password_hash: String,
        admin: bool,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            password_hash: ActiveValue::Set(password_hash),
            admin: ActiveValue::Set(admin),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether any user exists.
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        Ok(entity::prelude::User::find().count(self.db).await? > 0)
    }

    /// Checks whether another user already uses `username`.
    pub async fn username_taken(&self, username: &str, exclude_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .filter(entity::user::Column::Id.ne(exclude_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.username = ActiveValue::Set(params.username);
        active.email = ActiveValue::Set(params.email);
        active.first_name = ActiveValue::Set(params.first_name);
        active.last_name = ActiveValue::Set(params.last_name);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn set_password_hash(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::PasswordHash, Expr::value(password_hash))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
