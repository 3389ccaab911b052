use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use app_api::handlers;
use biz_service::biz_service::item_request_service::ItemRequestService;
use biz_service::repository::MongoItemRequestRepository;
use common::config::AppConfig;
use common::db::Db;
use common::errors::AppError;
use log::{LevelFilter, error, warn};
use std::str::FromStr;
use std::sync::Arc;

const CONFIG_FILE: &str = "api-config.toml";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 读取配置文件
    let app_cfg = match AppConfig::load(CONFIG_FILE) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    //初始化日志
    if let Err(e) = init_log(&app_cfg) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // 连接失败直接退出进程
    let db = Db::new(app_cfg.get_database());
    let database = match db.connect().await {
        Ok(database) => database,
        Err(e) => {
            error!("Failed to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    let repository = MongoItemRequestRepository::new(&database);
    if let Err(e) = repository.ensure_indexes().await {
        warn!("Failed to create request indexes: {}", e);
    }
    let service = web::Data::new(ItemRequestService::new(Arc::new(repository)));

    let address_and_port = format!("{}:{}", &app_cfg.get_server().host, &app_cfg.get_server().port);
    warn!("Starting server on {}", address_and_port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            // 配置 控制器
            .configure(|cfg| {
                handlers::configure(cfg);
            })
    })
    .keep_alive(actix_web::http::KeepAlive::Timeout(std::time::Duration::from_secs(600))) // 允许 10 分钟超时
    .bind(address_and_port)?
    .run()
    .await
}

pub fn init_log(config: &AppConfig) -> Result<(), AppError> {
    let log_level = &config.get_sys().log_level;
    let level = LevelFilter::from_str(log_level)
        .map_err(|_| AppError::Config(format!("invalid sys.log_level: {}", log_level)))?;
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
    Ok(())
}
