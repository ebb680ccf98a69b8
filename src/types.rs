use crate::{
    modules::{
        auth::repository::session::{self, SessionRepository},
        product::repository::{self as product, ProductRepository},
        user::repository::{self as user, UserRepository},
    },
    utils::database,
};
use async_trait::async_trait;
use std::{env, path::PathBuf, sync::Arc};

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid PORT number: {0}")]
    InvalidPort(String),
    #[error("DATABASE_URL must be set in production")]
    MissingDatabaseUrl,
    #[error("failed to connect to the database: {0}")]
    DatabaseConnection(#[source] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageContext {
    pub upload_dir: PathBuf,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub storage: StorageContext,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub sessions: Arc<dyn SessionRepository>,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port.parse::<u32>().map_err(|_| Error::InvalidPort(port))?;
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

        Ok(Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from(upload_dir),
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, Error> {
        let (users, products, sessions): (
            Arc<dyn UserRepository>,
            Arc<dyn ProductRepository>,
            Arc<dyn SessionRepository>,
        ) = match self.database.url {
            Some(url) => {
                let db_conn = database::connect(url.as_str()).await?;
                database::migrate(&db_conn).await?;

                (
                    Arc::new(user::PgRepository::new(db_conn.pool.clone())),
                    Arc::new(product::PgRepository::new(db_conn.pool.clone())),
                    Arc::new(session::PgRepository::new(db_conn.pool)),
                )
            }
            None if self.app.environment == AppEnvironment::Production => {
                return Err(Error::MissingDatabaseUrl)
            }
            None => {
                tracing::warn!("DATABASE_URL not set, records will be kept in memory");
                (
                    Arc::new(user::MemoryRepository::default()),
                    Arc::new(product::MemoryRepository::default()),
                    Arc::new(session::MemoryRepository::default()),
                )
            }
        };

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            storage: StorageContext {
                upload_dir: self.storage.upload_dir,
            },
            users,
            products,
            sessions,
        })
    }
}
