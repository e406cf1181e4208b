use crate::configuration::Settings;
use crate::db;
use crate::middleware;
use crate::routes;
use actix_web::cookie::Key;
use actix_web::{dev::Server, web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let repository: Arc<dyn db::ReviewRepository> = Arc::new(db::PgRepository::new(pg_pool));
    run_with_repository(listener, repository, settings).await
}

pub async fn run_with_repository(
    listener: TcpListener,
    repository: Arc<dyn db::ReviewRepository>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let templates = tera::Tera::new("templates/**/*.html")
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let templates = web::Data::new(templates);

    let auth_http_client = reqwest::Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let auth_http_client = web::Data::new(auth_http_client);

    let token_cache = web::Data::new(middleware::authentication::TokenCache::new(
        Duration::from_secs(60),
    ));

    let message_store =
        CookieMessageStore::builder(Key::from(settings.hmac_secret.as_bytes())).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let repository = web::Data::new(repository);
    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(message_framework.clone())
            .route("/health_check", web::get().to(routes::health_check))
            .service(
                web::scope("/reviews")
                    .wrap(middleware::authentication::Manager::new())
                    .service(routes::review::index_handler),
            )
            .service(
                web::scope("/review")
                    .wrap(middleware::authentication::Manager::new())
                    .service(routes::review::list_handler)
                    .service(routes::review::new_handler)
                    .service(routes::review::create_handler)
                    .service(routes::review::edit_handler)
                    .service(routes::review::update_handler)
                    .service(routes::review::delete_handler)
                    // keep `{id}` last so the literal paths above win
                    .service(routes::review::get_handler),
            )
            .app_data(repository.clone())
            .app_data(templates.clone())
            .app_data(auth_http_client.clone())
            .app_data(token_cache.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
