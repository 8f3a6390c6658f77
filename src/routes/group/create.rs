use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::group::{GroupView, RGroupCreate};
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub group: GroupView,
}

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RGroupCreate>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let new_group = body.validate()?;

    // The caller masters the group unless the payload names someone else
    let session = db.session_from_token(auth.token()).await?;
    let master = new_group.master.unwrap_or(session.user_id);

    let group = db.create_group(master, new_group).await?;
    let players = db.list_group_players(group.id).await?;

    Ok(ApiResponse::Ok(Response {
        group: GroupView::new(group, players),
    }))
}
