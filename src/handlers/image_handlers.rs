use actix_files::NamedFile;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::uploaded_image::{self, CACHE_CONTROL};

/// GET /api/local-image/{filename} - stream a previously uploaded image.
///
/// Invalid names, missing files and directories all produce the same 404.
/// ETag / Last-Modified / Range handling comes from `NamedFile`.
pub async fn local_image(
    config: web::Data<AppConfig>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let filename = path.into_inner();

    let file_path = uploaded_image::locate(&config.image_roots(), &filename)
        .await
        .ok_or(AppError::NotFound)?;

    let file = NamedFile::open_async(&file_path)
        .await
        .map_err(|e| {
            log::warn!("Failed to open {}: {e}", file_path.display());
            AppError::NotFound
        })?
        .disable_content_disposition()
        .use_etag(true)
        .use_last_modified(true);

    let mut res = file.into_response(&req);
    let headers = res.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(uploaded_image::content_type_for(&filename)),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
    Ok(res)
}

/// GET /api/local-image/ - empty filename.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
