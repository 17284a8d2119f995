use clap::Parser;
use std::{env::current_dir, path::PathBuf, sync::Arc};
use tracing::{error, info};
use zoo_common::{Logger, LogMailer, ZooAppContext};
use zoo_error::{ZooError, ZooResult};
use zoo_models::{constants::DEFAULT_CONFIG_FILE_NAME, settings::Settings};
use zoo_storage::ZooDbManager;
use zoo_web::ZooWebServer;

/// Virtual Zoo - a small content-management service for a zoo catalog
///
/// Serves the animal catalog with categories and zones, visitor accounts
/// with role-gated management, blogs, quizzes, feedback and a contact form.
#[derive(Parser)]
#[command(name = "zoo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Virtual Zoo", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the service will look for 'zoo.toml' in the
    /// current working directory.
    #[arg(short, long, env = "ZOO_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ZooResult<()> {
    let cli = Cli::parse();

    let mut logger = Logger::new(None);
    logger.initialize()?;

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| ZooError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let settings = Settings::new(config_path.to_string_lossy().to_string())?;

    let db_manager = ZooDbManager::init(&settings).await?;
    let db = db_manager.get_connection()?;

    ZooAppContext::init(settings.clone(), db, Arc::new(LogMailer))?;

    let web_server = ZooWebServer::init(&settings).await?;
    info!(
        host = %settings.web.host,
        port = settings.web.port,
        "Virtual Zoo is up"
    );

    // Run until a shutdown signal arrives
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }

    info!("Shutdown signal received, stopping...");
    web_server.stop().await?;
    db_manager.close().await?;
    info!("Bye");

    Ok(())
}
