use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use image_vault::{
    config::LogFormat, create_router, ApplicationBuilder, Config,
};

fn init_tracing(format: &LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet; use the default text output
            init_tracing(&LogFormat::Text);
            error!("{}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_format);
    info!("Starting ImageVault service");
    info!("Configuration loaded and validated");

    let listen_addr = config.listen_addr();

    let state = ApplicationBuilder::new(config)
        .with_database()
        .await?
        .with_infrastructure()
        .await?
        .build()?;

    // Create router
    let app = create_router(state);

    // Start server
    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
