use std::sync::Arc;

use actix_web::{dev::ServiceRequest, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;

/// Bearer guard wrapped around the routes that need a logged-in caller.
/// A token passes only if it decodes and its session row still exists.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let db = match req.app_data::<web::Data<Arc<PostgresService>>>().cloned() {
        Some(db) => db,
        None => {
            return Err((
                AppError::Internal("database handle missing".to_string()).into(),
                req,
            ))
        }
    };

    match db.session_from_token(credentials.token()).await {
        Ok(_) => Ok(req),
        Err(_) => Err((AppError::Unauthorized.into(), req)),
    }
}
