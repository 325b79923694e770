use actix_web::{web, App, HttpServer};
use backend::config::db::{db_url, DbOwner, DbProfile};
use backend::domain::Ruleset;
use backend::infra::db::connect_db;
use backend::routes;
use backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("Starting Foosball Backend on http://{}:{}", host, port);

    let url = match db_url(DbProfile::Prod, DbOwner::App) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Invalid database configuration: {e}");
            std::process::exit(1);
        }
    };

    let db = match connect_db(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    println!("Database connected");

    let app_state = AppState::new(db, Ruleset::standard_table());
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
