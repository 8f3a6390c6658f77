use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserView};
use crate::utils::password::hash_password;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub user: UserView,
}

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<Response> {
    let new_user = body.validate()?;

    let password_hash = hash_password(&new_user.password)
        .map_err(|_| AppError::Internal("failed to hash password".to_string()))?;

    let user = db
        .create_user(DBUserCreate {
            email: new_user.email,
            username: new_user.username,
            password_hash,
            avatar: new_user.avatar,
        })
        .await?;

    Ok(ApiResponse::Created(Response { user: user.into() }))
}
