use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod profile;
pub mod registration;
pub mod training;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Profile routes (require authentication)
    cfg.service(
        web::scope("/profiles")
            .wrap(AuthMiddleware)
            .service(profile::create)
            .service(profile::list)
            .service(profile::generate)
            .service(profile::plan)
            .service(profile::export_pdf)
            .service(profile::detail)
            .service(profile::update)
            .service(profile::remove)
    );
    // Custom training routes (require authentication)
    cfg.service(
        web::scope("/trainings")
            .wrap(AuthMiddleware)
            .service(training::create)
            .service(training::list)
            .service(training::export_sheet)
            .service(training::detail)
            .service(training::update)
            .service(training::remove)
    );
}
