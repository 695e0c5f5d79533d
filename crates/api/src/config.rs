use std::path::PathBuf;
use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Timeout for read-only requests in seconds (default: `120`).
    /// Submissions are bounded per store call and per upload instead.
    pub request_timeout_secs: u64,
    /// Bound on each document-store call in seconds (default: `10`).
    pub store_timeout_secs: u64,
    /// Largest accepted request body in bytes (default: 256 MiB).
    pub max_upload_bytes: usize,
    /// Remove a project's blobs after deleting its record (default: `false`).
    pub purge_media_on_delete: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `120`                      |
    /// | `STORE_TIMEOUT_SECS`    | `10`                       |
    /// | `MAX_UPLOAD_BYTES`      | `268435456`                |
    /// | `PURGE_MEDIA_ON_DELETE` | `false`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let store_timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("STORE_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "268435456".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let purge_media_on_delete = std::env::var("PURGE_MEDIA_ON_DELETE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_timeout_secs,
            max_upload_bytes,
            purge_media_on_delete,
        }
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }
}

/// Where project media is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaBackend {
    /// Local directory, served by this server under `/media`.
    Local { root: PathBuf },
    /// S3 bucket, optionally on an S3-compatible endpoint.
    S3 {
        bucket: String,
        endpoint: Option<String>,
    },
}

/// Media storage configuration.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub backend: MediaBackend,
    /// Prefix of every public media URL; the blob key is appended to it.
    pub public_url: String,
    /// Bound on a single upload in seconds (default: `60`).
    pub upload_timeout_secs: u64,
}

impl MediaConfig {
    /// Load media configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                         |
    /// |-----------------------|---------------------------------|
    /// | `MEDIA_BACKEND`       | `local` (`local` or `s3`)       |
    /// | `MEDIA_ROOT`          | `storage/media`                 |
    /// | `MEDIA_PUBLIC_URL`    | `http://localhost:3000/media`   |
    /// | `S3_BUCKET`           | required when backend is `s3`   |
    /// | `S3_ENDPOINT`         | unset (AWS)                     |
    /// | `UPLOAD_TIMEOUT_SECS` | `60`                            |
    pub fn from_env() -> Self {
        let backend = match std::env::var("MEDIA_BACKEND")
            .unwrap_or_else(|_| "local".into())
            .as_str()
        {
            "local" => MediaBackend::Local {
                root: std::env::var("MEDIA_ROOT")
                    .unwrap_or_else(|_| "storage/media".into())
                    .into(),
            },
            "s3" => MediaBackend::S3 {
                bucket: std::env::var("S3_BUCKET")
                    .expect("S3_BUCKET must be set when MEDIA_BACKEND=s3"),
                endpoint: std::env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            },
            other => panic!("MEDIA_BACKEND must be 'local' or 's3', got '{other}'"),
        };

        let public_url = std::env::var("MEDIA_PUBLIC_URL")
            .unwrap_or_else(|_| "http://localhost:3000/media".into());

        let upload_timeout_secs: u64 = std::env::var("UPLOAD_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("UPLOAD_TIMEOUT_SECS must be a valid u64");

        Self {
            backend,
            public_url,
            upload_timeout_secs,
        }
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }

    /// Directory to serve under `/media`, if media is stored locally.
    pub fn local_root(&self) -> Option<&PathBuf> {
        match &self.backend {
            MediaBackend::Local { root } => Some(root),
            MediaBackend::S3 { .. } => None,
        }
    }
}

/// `true`, `on` and `1` (any case) are set; everything else is unset.
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "on" | "1")
}
