pub mod api;
pub mod image_handlers;
pub mod layout_handlers;

use actix_web::{HttpResponse, web};

/// Mount every route. Shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Uploaded images
        .route("/api/local-image/", web::get().to(image_handlers::not_found))
        .route("/api/local-image/{filename}", web::get().to(image_handlers::local_image))
        // Group catalog for the layout selector
        .route("/api/template", web::get().to(layout_handlers::template_group))
        .configure(api::configure)
        // HTML pages
        .route("/", web::get().to(layout_handlers::catalog_page))
        .route("/layouts/{id}/preview", web::get().to(layout_handlers::preview));
}

/// Fallback for unmatched routes.
pub async fn default_not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
