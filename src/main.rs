mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod server;

use config::Config;
use utoipa::OpenApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("do-saas-k8s starting");

    let config = Config::from_env()?;
    config.log_startup();

    let openapi = api_doc::ApiDoc::openapi();
    tracing::info!("Registered routes:");
    for path in openapi.paths.paths.keys() {
        tracing::info!("  GET {}", path);
    }

    let app = routes::create_router();

    let listener = server::bind(config.port).await?;
    tracing::info!("listening on http://0.0.0.0:{}", config.port);

    server::serve(listener, app).await?;

    tracing::info!("do-saas-k8s stopped");
    Ok(())
}
