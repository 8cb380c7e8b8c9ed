use actix_cors::Cors;
use actix_web::{http::header, web};
use crate::errors::AppError;

pub mod activity;

/// Registers the activity routes. The store must already be in app data as `Data<dyn ActivityStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::resource("/")
            .route(web::get().to(activity::get_activities)),
    )
    .service(
        web::resource("/activities")
            .route(web::post().to(activity::create_activity)),
    )
    .service(
        web::resource("/{id}")
            .route(web::put().to(activity::update_activity_status))
            .route(web::delete().to(activity::delete_activity)),
    );
}

/// Cross-origin policy allowing a single front-end origin. Requests from any
/// other origin are answered by the middleware without reaching a handler.
pub fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}
