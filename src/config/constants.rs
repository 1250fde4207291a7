use std::time::Duration;

pub const UPLOAD_ENDPOINT: &str = "/api/upload";
pub const BLOBS_PREFIX: &str = "/blobs";

// 5 MiB, enforced by the server and used as the client compression threshold
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
pub const MAX_FILES: usize = 5;

pub const ANONYMOUS: &str = "ANONYMOUS";
pub const DEFAULT_EXTENSION: &str = "jpg";

pub const MAX_DIMENSION: u32 = 2048;
pub const JPEG_QUALITY: u8 = 85;

pub const RESET_DELAY: Duration = Duration::from_secs(3);

pub const CONFIG_ENV: &str = "METRO_UPLOADS_CONFIG";
pub const DATA_PATH_ENV: &str = "METRO_UPLOADS_DATA_PATH";
pub const BLOB_TOKEN_ENV: &str = "BLOB_READ_WRITE_TOKEN";
