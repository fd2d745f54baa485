//! Application state and factory
//!
//! `create_app` assembles the routes, the JSON extractor configuration and
//! the middleware stack. Middleware order, outermost first: access log,
//! request id, error normalization.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use ge_infra::database::DatabasePool;
use ge_shared::config::AppConfig;

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::{ErrorNormalizer, RequestIdentity};
use crate::routes;

/// Access log line: client, request line, status, size, duration, request id
const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %Dms %{x-request-id}o"#;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub database: Option<DatabasePool>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            database: None,
        }
    }

    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }
}

/// Create the application with all routes and middleware
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(state.config.server.json_limit)
        .error_handler(json_error_handler);

    App::new()
        .app_data(state)
        .app_data(json_config)
        .wrap(ErrorNormalizer)
        .wrap(RequestIdentity)
        .wrap(Logger::new(ACCESS_LOG_FORMAT))
        .configure(routes::configure)
        .default_service(web::route().to(not_found))
}
