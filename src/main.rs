use actix_web::{App, HttpServer, middleware, web};

use task_categories::config::{AppConfig, session_middleware};
use task_categories::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    let stores = db::open_stores(&config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    db::seed_admin(stores.users.as_ref(), &config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let secret_key = config.cookie_key();
    let cookie_secure = config.cookie_secure;

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(secret_key.clone(), cookie_secure))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::from(stores.categories.clone()))
            .app_data(web::Data::from(stores.users.clone()))
            .configure(routes::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(routes::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
