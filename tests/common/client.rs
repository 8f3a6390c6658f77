use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;

use entity::user::Model as UserModel;
use roleplay_api::{
    db::postgres_service::PostgresService,
    types::{error::AppError, user::DBUserCreate},
    utils::password::hash_password,
};

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(roleplay_api::routes::configure_routes)
    }

    /// Seeds a user (password "test") straight through the repository and
    /// logs them in, returning the row plus a usable bearer token.
    #[allow(dead_code)]
    pub async fn create_test_user(
        &self,
        email: Option<String>,
    ) -> Result<(UserModel, String), AppError> {
        let suffix = Uuid::new_v4().simple().to_string();
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", suffix));
        let username = format!("user_{}", &suffix[..8]);

        let password_hash = hash_password("test").expect("Failed to hash password");

        let user = self
            .db
            .create_user(DBUserCreate {
                email,
                username,
                password_hash,
                avatar: None,
            })
            .await?;

        let token = self.db.create_session(user.id).await?;

        Ok((user, token))
    }
}
