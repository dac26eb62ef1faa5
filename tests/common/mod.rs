#![allow(dead_code)]

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use mindhelper::configuration::{get_configuration, DatabaseSettings, Settings};

pub const BOT_TOKEN: &str = "testtoken";

/// Signed for BOT_TOKEN, user id 42.
pub const SIGNED_PAYLOAD: &str = "auth_date=1700000000&user=%7B%22id%22%3A42%7D&hash=bd9fb0c84fe0e7b52b881318072a1ad463c5b1cb3034d5d676620d5e1197c2a4";

/// Signed for BOT_TOKEN, user id 7.
pub const OTHER_USER_PAYLOAD: &str = "auth_date=1700000000&query_id=AAH&user=%7B%22id%22%3A7%2C%22first_name%22%3A%22Ann+Lee%22%2C%22username%22%3A%22ann%22%7D&hash=0fc190c296fd94f50f3550efc13e527a5c00c6a204d922027cc5dc2f238f08a5";

pub const INIT_DATA_HEADER: &str = "X-Telegram-InitData";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub fn test_configuration() -> Settings {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.auth.bot_token = Some(BOT_TOKEN.to_string());
    configuration.auth.max_age_secs = 0;
    configuration.static_dir = None;
    configuration
}

fn start(configuration: Settings, db_pool: PgPool) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = mindhelper::startup::run(listener, db_pool.clone(), configuration)
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp { address, db_pool }
}

/// Starts the app on a fresh database; `None` when PostgreSQL is unreachable.
pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    Some(start(configuration, connection_pool))
}

pub async fn spawn_app() -> Option<TestApp> {
    spawn_app_with_configuration(test_configuration()).await
}

/// Starts the app with a pool that never connects, for routes that do not touch the database.
pub fn spawn_app_without_database(configuration: Settings) -> TestApp {
    let pool = PgPoolOptions::new()
        .connect_lazy(&configuration.database.connection_string())
        .expect("Failed to create lazy pool");

    start(configuration, pool)
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await?;

    Ok(connection_pool)
}
