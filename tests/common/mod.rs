use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

use roleplay_api::config::{EnvConfig, MailConfig, CONFIG};
use roleplay_api::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        CONFIG.set(test_config()).ok();

        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "unused-in-tests".to_string(),
        mail: MailConfig {
            api_key: "test".to_string(),
            // unroutable on purpose, reset mail must stay best-effort
            endpoint: "http://127.0.0.1:9/emails".to_string(),
            from: "no-reply@roleplay.test".to_string(),
        },
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use roleplay_api::types::group::RGroupCreate;
    use roleplay_api::types::user::RUserCreate;
    use uuid::Uuid;

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            email: Some("alice@example.com".to_string()),
            username: Some("alice".to_string()),
            password: Some("secret123".to_string()),
            avatar: None,
        }
    }

    pub fn sample_user_with(email: &str, username: &str) -> RUserCreate {
        RUserCreate {
            email: Some(email.to_string()),
            username: Some(username.to_string()),
            password: Some("secret123".to_string()),
            avatar: None,
        }
    }

    pub fn sample_group(master: Option<Uuid>) -> RGroupCreate {
        RGroupCreate {
            name: Some("Curse of Strahd".to_string()),
            description: Some("Weekly gothic horror campaign".to_string()),
            schedule: Some("Fridays 19:00".to_string()),
            location: Some("Dragon's Den, table 3".to_string()),
            chronic: Some("The party just reached Vallaki".to_string()),
            master,
        }
    }
}
