//! Test service builder.
//! Given an AppState, build an initialized Actix **test service** wired with
//! the production routes and the tracing middleware. CORS is left out so the
//! response body stays `BoxBody`.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::web::{self, ServiceConfig};
use actix_web::{App, Error as ActixError};

use crate::error::AppError;
use crate::infra::state::build_state;
use crate::middleware::{RequestTrace, StructuredLogger};
use crate::state::app_state::AppState;

/// Seed used by [`test_state`] so tile placement is reproducible.
pub const TEST_SEED: u64 = 2048;

/// Function pointer for custom route configuration.
type RoutesFn = Box<dyn FnOnce(&mut ServiceConfig) + Send>;

/// In-memory state with a fixed RNG seed.
pub async fn test_state() -> Result<AppState, AppError> {
    build_state().with_seed(TEST_SEED).build().await
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder {
        state,
        routes: None,
    }
}

pub struct TestAppBuilder {
    state: AppState,
    routes: Option<RoutesFn>,
}

impl TestAppBuilder {
    /// Replace the production routes, keeping the middleware stack.
    pub fn with_routes<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ServiceConfig) + Send + 'static,
    {
        self.routes = Some(Box::new(f));
        self
    }

    /// Build and initialize the Actix test service.
    pub async fn build(
        self,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>
    {
        let app = App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(web::Data::new(self.state));

        let app = match self.routes {
            Some(f) => app.configure(f),
            None => app.configure(crate::routes::configure),
        };

        actix_web::test::init_service(app).await
    }
}
