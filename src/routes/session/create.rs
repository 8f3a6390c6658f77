use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::{RSessionCreate, TokenView};
use crate::types::user::UserView;
use crate::utils::password::verify_password;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub user: UserView,
    pub token: TokenView,
}

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RSessionCreate>,
) -> ApiResult<Response> {
    let credentials = body.validate()?;

    // Unknown email and wrong password must be indistinguishable
    let user = match db.get_user_by_email(&credentials.email).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::Unauthorized),
        Err(err) => return Err(err),
    };

    if !verify_password(&credentials.password, &user.password_hash).unwrap_or(false) {
        return Err(AppError::Unauthorized);
    }

    let token = db.create_session(user.id).await?;

    Ok(ApiResponse::Created(Response {
        user: user.into(),
        token: TokenView::bearer(token),
    }))
}
