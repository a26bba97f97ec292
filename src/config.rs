use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOOKUP_BASE_URL: &str = "";
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the on-disk login store, inside the data directory.
pub const USERS_FILE: &str = "users.json";

/// Cookie carrying the current user's numeric id, read by the admin guard.
pub const USER_ID_COOKIE: &str = "userId";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_lookup_base_url() -> String {
    sanitize_base_url(&env::var("LOOKUP_BASE_URL").unwrap_or_else(|_| DEFAULT_LOOKUP_BASE_URL.to_string()))
}

pub fn get_data_dir() -> String {
    let raw = env::var("DATA_DIR").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_DATA_DIR.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "http://localhost:5000".to_string()
    } else {
        trimmed.to_string()
    }
}
