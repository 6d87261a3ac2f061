/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("bassa-client/", env!("CARGO_PKG_VERSION"));
/// Base URL used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
/// Per-request timeout in milliseconds when none is configured
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
/// Number of retries after the first attempt
pub const DEFAULT_MAX_RETRY_COUNT: u32 = 1;
/// Constant part of the wait between two attempts, in milliseconds
pub const DEFAULT_BACKOFF_INTERVAL_MS: u64 = 10;
/// Upper bound of the random jitter added to each wait, in milliseconds
pub const DEFAULT_MAX_JITTER_MS: u64 = 50;
/// Server key sent on download start/kill when the caller passes an empty one
pub const DEFAULT_SERVER_KEY: &str = "123456789";
/// Page used for the per-user download listing when the caller gives none
pub const DEFAULT_USER_DOWNLOADS_LIMIT: u32 = 1;
/// HTTP statuses answered by a retry
pub const RETRYABLE_STATUS_CODES: [u16; 5] = [429, 500, 502, 503, 504];

/// Header carrying the session token
pub const TOKEN_HEADER: &str = "token";
/// Header carrying the download server key
pub const SERVER_KEY_HEADER: &str = "key";

pub const LOGIN_PATH: &str = "/api/login";
pub const REGULAR_USER_PATH: &str = "/api/regularuser";
pub const USER_PATH: &str = "/api/user";
pub const USER_REQUESTS_PATH: &str = "/api/user/requests";
pub const USER_APPROVE_PATH: &str = "/api/user/approve";
pub const USER_BLOCKED_PATH: &str = "/api/user/blocked";
pub const USER_DOWNLOADS_PATH: &str = "/api/user/downloads";
pub const USER_HEAVY_PATH: &str = "/api/user/heavy";
pub const DOWNLOAD_PATH: &str = "/api/download";
pub const DOWNLOAD_START_PATH: &str = "/api/download/start";
pub const DOWNLOAD_KILL_PATH: &str = "/api/download/kill";
pub const DOWNLOADS_PATH: &str = "/api/downloads";
pub const COMPRESS_PATH: &str = "/api/compress";
pub const COMPRESSION_PROGRESS_PATH: &str = "/api/compression-progress";
pub const FILE_PATH: &str = "/api/file";
