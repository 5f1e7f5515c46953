//! Application state

use sqlx::PgPool;

use crate::config::Config;
use crate::media::MediaClient;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Media relay client; None when the service is not configured
    pub media: Option<MediaClient>,
}

impl AppState {
    /// Create a new AppState: connect the pool, run migrations, build the
    /// media client.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let media = config
            .media
            .as_ref()
            .map(|m| MediaClient::new(&m.cloud_name, &m.api_key, &m.api_secret, &m.folder));
        if media.is_none() {
            tracing::warn!(
                "Media service not configured; image uploads will fail. \
                 Set MEDIA_CLOUD_NAME, MEDIA_API_KEY, MEDIA_API_SECRET to enable."
            );
        }

        Ok(Self { pool, media })
    }
}
