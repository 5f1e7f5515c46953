//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Media service credentials; None leaves image uploads disabled
    pub media: Option<MediaSettings>,
}

/// Image hosting service credentials
#[derive(Debug, Clone)]
pub struct MediaSettings {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Remote folder uploads land in
    pub folder: String,
}

impl MediaSettings {
    /// All three credentials or none: a partially configured media service
    /// is a boot error, not a runtime surprise.
    fn from_env() -> Result<Option<Self>, BoxError> {
        let cloud_name = std::env::var("MEDIA_CLOUD_NAME").ok().filter(|s| !s.is_empty());
        let api_key = std::env::var("MEDIA_API_KEY").ok().filter(|s| !s.is_empty());
        let api_secret = std::env::var("MEDIA_API_SECRET").ok().filter(|s| !s.is_empty());

        match (cloud_name, api_key, api_secret) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Ok(Some(Self {
                cloud_name,
                api_key,
                api_secret,
                folder: std::env::var("MEDIA_UPLOAD_FOLDER").unwrap_or_else(|_| "atelier".into()),
            })),
            (None, None, None) => Ok(None),
            _ => Err(
                "Media service partially configured: set all of MEDIA_CLOUD_NAME, \
                 MEDIA_API_KEY, MEDIA_API_SECRET (or none)"
                    .into(),
            ),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            media: MediaSettings::from_env()?,
        })
    }
}
