use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::errors::AppError;
use crate::layouts::{LayoutRegistry, LayoutSummary};

/// GET /api/layouts - every layout, grouped order preserved
pub async fn list(registry: web::Data<LayoutRegistry>) -> HttpResponse {
    let items: Vec<LayoutSummary> = registry.layouts().map(|l| l.summary()).collect();
    HttpResponse::Ok().json(items)
}

/// GET /api/layouts/{id}/schema - exported JSON Schema
pub async fn schema(
    registry: web::Data<LayoutRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let layout = registry.find(&path)?;
    Ok(HttpResponse::Ok().json(layout.schema()))
}

/// POST /api/layouts/{id}/resolve - apply defaults and validate
pub async fn resolve(
    registry: web::Data<LayoutRegistry>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let layout = registry.find(&path)?;
    let data = parse_body(&body)?;
    let resolved = layout.resolve(data.as_ref())?;
    Ok(HttpResponse::Ok().json(resolved))
}

/// POST /api/layouts/{id}/render - resolve, then render the HTML fragment
pub async fn render(
    registry: web::Data<LayoutRegistry>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let layout = registry.find(&path)?;
    let data = parse_body(&body)?;
    let html = layout.render(data.as_ref())?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}

/// An empty body means "no data"; anything else must be valid JSON.
fn parse_body(body: &[u8]) -> Result<Option<Value>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_means_no_data() {
        assert_eq!(parse_body(b"").unwrap(), None);
        assert_eq!(parse_body(b"  \n").unwrap(), None);
        assert_eq!(parse_body(b"null").unwrap(), Some(Value::Null));
        assert!(matches!(parse_body(b"{oops"), Err(AppError::BadRequest(_))));
    }
}
