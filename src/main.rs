use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use verification_worker::{
    config::Config,
    database::{create_pool, run_migrations},
    external::MailgunService,
    handlers,
    services::VerificationService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
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

    let config = Config::from_toml().expect("Failed to load configuration file");

    // Lazy pool; a down store must not keep the worker from starting
    let pool = create_pool(&config.database).expect("Failed to create database connection pool");

    if let Err(e) = run_migrations(&pool).await {
        log::error!("Failed to run database migrations: {e}");
    }

    let mailgun_service = MailgunService::new(config.mailgun.clone());
    let verification_service =
        VerificationService::new(pool.clone(), mailgun_service, config.verification.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(verification_service.clone()))
            .configure(handlers::push_config)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
