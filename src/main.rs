use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use bike_rental_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().context("Failed to load configuration")?;
    let profile = config.database.profile()?;

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .context("Failed to create database connection pool")?;

    // 运行数据库迁移；约束配置在建库时确定
    run_migrations(&pool, profile)
        .await
        .context("Failed to run database migrations")?;

    // 创建服务
    let user_service = UserService::new(pool.clone(), config.security.bcrypt_cost);
    let bike_service = BikeService::new(pool.clone());
    let rental_service = RentalService::new(pool.clone());
    let payment_service = PaymentService::new(pool.clone());
    let inquiry_service = InquiryService::new(pool.clone());
    let notice_service = NoticeService::new(pool.clone());
    let schema_service = SchemaService::new(pool.clone(), profile);

    log::info!(
        "Starting HTTP server at {}:{} (schema profile: {})",
        config.server.host,
        config.server.port,
        profile
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(bike_service.clone()))
            .app_data(web::Data::new(rental_service.clone()))
            .app_data(web::Data::new(payment_service.clone()))
            .app_data(web::Data::new(inquiry_service.clone()))
            .app_data(web::Data::new(notice_service.clone()))
            .app_data(web::Data::new(schema_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::system_config)
                    .configure(handlers::user_config)
                    .configure(handlers::bike_config)
                    .configure(handlers::notice_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))
    .with_context(|| format!("Failed to bind {}:{}", config.server.host, config.server.port))?
    .run()
    .await?;

    Ok(())
}
