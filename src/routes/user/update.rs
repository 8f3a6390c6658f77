use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpdate, UserView};
use crate::utils::password::hash_password;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub user: UserView,
}

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<Response> {
    let changes = body.validate()?;
    let user_id = path.into_inner();

    let password_hash = hash_password(&changes.password)
        .map_err(|_| AppError::Internal("failed to hash password".to_string()))?;

    let user = db
        .update_user(user_id, changes.email, password_hash, changes.avatar)
        .await?;

    Ok(ApiResponse::Ok(Response { user: user.into() }))
}
