use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod group;
pub mod health;
pub mod session;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let auth = HttpAuthentication::bearer(validate_token);

    // Malformed JSON gets the same envelope as a failed field check
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(err.to_string()).into()
    }));

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/users")
            .service(user::create::create)
            .service(user::forgot_password::forgot_password)
            .service(
                web::scope("")
                    .wrap(auth.clone())
                    .service(user::update::update),
            ),
    );
    cfg.service(
        web::scope("/sessions")
            .service(session::create::create)
            .service(
                web::scope("")
                    .wrap(auth.clone())
                    .service(session::delete::delete),
            ),
    );
    cfg.service(web::scope("/groups").wrap(auth).service(group::create::create));
}
