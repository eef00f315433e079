//! Shared test infrastructure for the HTTP integration tests.
//!
//! - `setup_dirs()` - temp data/work directories wired into an `AppConfig`
//! - `write_upload()` - drop a file into the primary image directory
//! - `init_app!` - build the full actix service around a config

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use presentation_layouts::config::AppConfig;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";

// ============================================================================
// DIRECTORY SETUP
// ============================================================================

/// Temp directory holding `data/` and `work/`, plus a config pointing at them.
///
/// The `TempDir` must be kept alive for the directories to exist.
pub fn setup_dirs() -> (TempDir, AppConfig) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let data_dir = dir.path().join("data");
    let work_dir = dir.path().join("work");
    std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
    std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
    let config = AppConfig::with_dirs(&data_dir, &work_dir);
    (dir, config)
}

pub fn write_upload(config: &AppConfig, filename: &str, bytes: &[u8]) -> PathBuf {
    write_into(&config.data_dir.join("uploads").join("images"), filename, bytes)
}

pub fn write_into(dir: &Path, filename: &str, bytes: &[u8]) -> PathBuf {
    std::fs::create_dir_all(dir).expect("Failed to create upload dir");
    let path = dir.join(filename);
    std::fs::write(&path, bytes).expect("Failed to write upload");
    path
}

// ============================================================================
// APP SETUP
// ============================================================================

/// Requires `#[macro_use] mod common;` in the test file.
macro_rules! init_app {
    ($config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($config))
                .app_data(actix_web::web::Data::new(
                    presentation_layouts::layouts::LayoutRegistry::builtin(),
                ))
                .configure(presentation_layouts::handlers::configure)
                .default_service(actix_web::web::to(
                    presentation_layouts::handlers::default_not_found,
                )),
        )
        .await
    };
}
