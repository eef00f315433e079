use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{self, AppError};
use crate::layouts::LayoutRegistry;
use crate::templates_structs::{CatalogGroup, CatalogTemplate, PreviewTemplate};

pub const APP_NAME: &str = "Presentation Layouts";

#[derive(Debug, Deserialize)]
pub struct GroupQuery {
    pub group: Option<String>,
}

/// GET /api/template?group=NAME - one group's slides with their JSON Schemas
pub async fn template_group(
    registry: web::Data<LayoutRegistry>,
    query: web::Query<GroupQuery>,
) -> Result<HttpResponse, AppError> {
    let name = query
        .group
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing group name".to_string()))?;

    let Some(group) = registry.group(name) else {
        log::debug!("Template group {name} not found");
        return Ok(HttpResponse::NotFound()
            .json(serde_json::json!({ "error": format!("Template group not found: {name}") })));
    };

    Ok(HttpResponse::Ok().json(group.catalog()))
}

/// GET / - catalog page
pub async fn catalog_page(registry: web::Data<LayoutRegistry>) -> Result<HttpResponse, AppError> {
    let groups = registry
        .groups()
        .iter()
        .map(|g| CatalogGroup { name: g.name, ordered: g.ordered, layouts: &g.layouts })
        .collect();
    errors::render(CatalogTemplate { app_name: APP_NAME, groups })
}

/// GET /layouts/{id}/preview - the layout rendered with its defaults
pub async fn preview(
    registry: web::Data<LayoutRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let layout = registry.get(&path).ok_or(AppError::NotFound)?;
    let slide_html = layout.render(None)?;
    errors::render(PreviewTemplate { app_name: APP_NAME, layout, slide_html })
}
