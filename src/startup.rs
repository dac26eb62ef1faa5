use crate::configuration::Settings;
use crate::connectors;
use crate::helpers::JsonResponse;
use crate::middleware::authentication;
use crate::routes;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{dev::Server, middleware::Compress, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::path::Path;
use tracing_actix_web::TracingLogger;

/// Registers every API scope. Scopes that need a user are wrapped by the
/// authentication manager.
pub fn configure_routes(cfg: &mut web::ServiceConfig, settings: &Settings) {
    cfg.service(web::scope("/health_check").service(routes::health_check))
        .service(
            web::scope("/diary")
                .wrap(authentication::Manager::new(settings.auth.clone()))
                .service(routes::diary::list)
                .service(routes::diary::add),
        )
        .service(
            web::scope("/chat")
                .wrap(authentication::Manager::new(settings.auth.clone()))
                .service(routes::chat::send),
        )
        .service(
            web::scope("/voice")
                .wrap(authentication::Manager::new(settings.auth.clone()))
                .app_data(web::PayloadConfig::new(settings.ai.max_audio_bytes))
                .service(routes::voice::send),
        );
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("rejected json body: {}", err);
        JsonResponse::build().bad_request(err.to_string())
    })
}

pub fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let (chat_connector, speech_connector) = connectors::init_openai(&settings.ai);

    let static_dir = settings
        .static_dir
        .clone()
        .filter(|dir| Path::new(dir).is_dir());
    match &static_dir {
        Some(dir) => tracing::info!("Serving front-end from {}", dir),
        None => tracing::info!("No front-end directory, serving the API only"),
    }

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let server = HttpServer::new(move || {
        let mut app = App::new()
            .wrap(TracingLogger::default())
            .wrap(Compress::default())
            .wrap(Cors::permissive())
            .app_data(json_config())
            .app_data(pg_pool.clone())
            .app_data(chat_connector.clone())
            .app_data(speech_connector.clone())
            .app_data(settings.clone())
            .configure(|cfg| configure_routes(cfg, &settings));

        if let Some(dir) = &static_dir {
            app = app.service(Files::new("/", dir).index_file("index.html"));
        }

        app
    })
    .listen(listener)?
    .run();

    Ok(server)
}
