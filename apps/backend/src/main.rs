use actix_web::{web, App, HttpServer};
use backend::config::Config;
use backend::infra::state::build_state;
use backend::middleware::{cors_middleware, RequestTrace, StructuredLogger};
use backend::routes;
use backend::services::games::spawn_session_sweeper;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;
    let cors_origins = config.cors_allowed_origins.clone();
    let sweep_every = config.session_sweep_interval;

    info!(
        host = %host,
        port,
        environment = %config.environment,
        "Starting 2048 backend"
    );

    let app_state = match build_state().with_config(config).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    let sweeper = spawn_session_sweeper(app_state.games.sessions().clone(), sweep_every);

    let data = web::Data::new(app_state);

    let result = HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .shutdown_timeout(30)
    .bind((host.as_str(), port))?
    .run()
    .await;

    sweeper.abort();
    info!("Server stopped");
    result
}
