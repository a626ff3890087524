use actix_web::{web, App, HttpServer};
use parlor_backend::config::StoreConfig;
use parlor_backend::routes;
use parlor_backend::state::app_state::AppState;

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
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Parlor Backend on http://{}:{}", host, port);

    let store = match StoreConfig::from_env().connect().await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Failed to connect session store: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Session store ready");

    let data = web::Data::new(AppState::new(store));

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
