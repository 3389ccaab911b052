use crate::config::DatabaseConfig;
use crate::errors::AppError;
use log::info;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tokio::sync::OnceCell;

/// MongoDB 连接管理器
///
/// 由 `main` 显式创建并注入，`connect` 可重复调用，只有第一次真正建立连接。
pub struct Db {
    config: DatabaseConfig,
    instance: OnceCell<Database>,
}

impl Db {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config, instance: OnceCell::new() }
    }

    /// 建立（或复用）数据库连接
    pub async fn connect(&self) -> Result<Database, AppError> {
        let db = self.instance.get_or_try_init(|| self.open()).await?;
        Ok(db.clone())
    }

    async fn open(&self) -> Result<Database, AppError> {
        let url = self
            .config
            .url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AppError::Config("database.url is not set (MONGODB_URI)".to_string()))?;

        let options = ClientOptions::parse(url).await?;
        let client = Client::with_options(options)?;

        let db = match self.config.db_name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .ok_or_else(|| AppError::Config("no database name in database.db_name or connection string".to_string()))?,
        };

        // 立即探活，连不上时启动失败而不是等到第一个请求
        db.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB database {}", db.name());
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_url_is_config_error() {
        let db = Db::new(DatabaseConfig::default());
        let err = db.connect().await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "{err:?}");
        // 失败不会被缓存
        assert!(matches!(db.connect().await, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_blank_url_is_config_error() {
        let db = Db::new(DatabaseConfig { url: Some("  ".into()), db_name: None });
        assert!(matches!(db.connect().await, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_malformed_url_is_reported() {
        let db = Db::new(DatabaseConfig { url: Some("not-a-mongo-uri".into()), db_name: None });
        assert!(matches!(db.connect().await, Err(AppError::Mongo(_))));
    }
}
