use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token::new_id;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup. Duplicate checks are two separate lookups, so the colliding
    /// field can be named in the conflict message.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::Conflict("email already in use".to_string()));
        }
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::Conflict("username already in use".to_string()));
        }
        let uid = new_id();
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        User::insert(UserActive {
            id: Set(uid),
            email: Set(payload.email),
            username: Set(payload.username),
            password_hash: Set(payload.password_hash),
            avatar: Set(payload.avatar),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        self.get_user_by_id(&uid).await
    }

    /// Overwrites email and password; avatar only when one is supplied.
    pub async fn update_user(
        &self,
        user_id: Uuid,
        email: String,
        password_hash: String,
        avatar: Option<String>,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(&user_id).await?.into();
        am.email = Set(email);
        am.password_hash = Set(password_hash);
        if let Some(avatar) = avatar {
            am.avatar = Set(Some(avatar));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }
}
