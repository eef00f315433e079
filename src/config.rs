use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "/app/user_data";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bind_addr: String,
    /// Working directory used for the relative fallback image roots.
    pub work_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env loaded: {e}");
        }

        let data_dir = std::env::var("APP_DATA_DIRECTORY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let bind_addr = std::env::var("BIND_ADDR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self { data_dir, bind_addr, work_dir }
    }

    /// Config rooted at explicit directories, used by tests and embedders.
    pub fn with_dirs(data_dir: impl AsRef<Path>, work_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    /// Candidate image directories, primary first.
    pub fn image_roots(&self) -> Vec<PathBuf> {
        vec![
            self.data_dir.join("uploads").join("images"),
            self.data_dir.join("images"),
            self.work_dir.join("app_data").join("uploads").join("images"),
            self.work_dir.join("uploads").join("images"),
        ]
    }
}
