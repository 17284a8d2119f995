//! Web server module for the virtual zoo service.
mod api;
mod middleware;
mod rbac;
mod validation;

use actix_web::{
    dev::{Server, ServerHandle},
    middleware::{Compress, Logger, NormalizePath},
    web::Data,
    App, HttpServer,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};
use validation::{manager::ValidationManager, prelude::create_default_manager};
use zoo_error::{init::InitContextError, rbac::RbacError, ZooError, ZooResult};
use zoo_models::settings::Settings;

pub use api::configure_routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) validator: Arc<ValidationManager>,
}

/// Builds the state handed to every worker: the default validation manager
/// plus any module-contributed validators.
pub fn create_app_state() -> AppState {
    let mut validation_manager = create_default_manager();
    for validator in api::collect_additional_validators() {
        validation_manager.register(validator);
    }
    AppState {
        validator: Arc::new(validation_manager),
    }
}

/// Registers the role rules for every protected route. Called once at
/// startup, before the server accepts requests.
pub async fn init_rbac_rules() -> ZooResult<(), RbacError> {
    api::init_rbac_rules(&rbac::perm_checker()).await
}

/// ZooWebServer handles the web server initialization and management
#[derive(Clone)]
pub struct ZooWebServer {
    /// Server handle for graceful shutdown
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl ZooWebServer {
    /// Create and configure the HTTP server
    async fn create_server(settings: &Settings) -> ZooResult<Server> {
        init_rbac_rules()
            .await
            .map_err(|e| ZooError::from(format!("Failed to initialize RBAC rules: {e}")))?;

        let state = create_app_state();

        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let worker_count = settings.web.get_worker_count();
        let cors_config = settings.web.cors.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(Data::new(Arc::new(state.clone())))
                .wrap(middleware::cors::middleware(&cors_config))
                .wrap(Logger::default())
                .wrap(Compress::default())
                .wrap(NormalizePath::trim())
                .configure(api::configure_routes)
        })
        .workers(worker_count)
        .bind(&addr)
        .map_err(|e| ZooError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        Ok(server.run())
    }

    /// Initialize and start the web server
    #[instrument(name = "init-web-server", skip_all)]
    pub async fn init(settings: &Settings) -> ZooResult<Arc<Self>, InitContextError> {
        let server = Self::create_server(settings).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to create web server: {e}"))
        })?;
        let server_handle = server.handle();

        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error=%e, "Web server failed to start");
            }
        });

        Ok(Arc::new(ZooWebServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        }))
    }

    /// Gracefully stop the web server
    #[instrument(name = "web-server-stop", skip_all)]
    pub async fn stop(&self) -> ZooResult<()> {
        info!("Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("Web server stopped");

        Ok(())
    }
}
