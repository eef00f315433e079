pub mod layouts;

use actix_web::{
    web, Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

/// Rejects POST requests whose body is not declared as JSON.
/// GET requests pass through untouched.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if *req.method() == actix_web::http::Method::POST {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = serde_json::json!({
                "error": "Content-Type must be application/json"
            });
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Configure the layout API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/layouts")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(layouts::list))
            .route("/{id}/schema", web::get().to(layouts::schema))
            .route("/{id}/resolve", web::post().to(layouts::resolve))
            .route("/{id}/render", web::post().to(layouts::render)),
    );
}
