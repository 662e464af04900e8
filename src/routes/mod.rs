// Route exports
pub mod docs;
pub mod error;
pub mod workers;

pub use docs::ApiDoc;
pub use error::ApiError;
pub use workers::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Registered ahead of the scope, which would otherwise claim every /matcher-api path
    cfg.service(docs::swagger_ui()).service(
        web::scope("/matcher-api")
            .configure(workers::configure),
    );
}
