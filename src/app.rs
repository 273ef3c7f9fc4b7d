use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::handlers;
use crate::middleware::jwt_auth_middleware;
use crate::services::PortalService;

/// Shared per-process handles, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub service: PortalService,
    pub database: DatabaseManager,
}

impl AppState {
    pub fn new(service: PortalService, database: DatabaseManager) -> Self {
        Self { service, database }
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::public::health))
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .with_state(state);

    if let Some(secs) = config.api.request_timeout_secs {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(secs)));
    }
    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}

fn public_routes() -> Router<AppState> {
    use handlers::public;

    with_and_without_slash(Router::new(), "/login/", post(public::login))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::{districts, states};

    let router = Router::new();
    let router = with_and_without_slash(router, "/states/", get(states::list_states));
    let router = with_and_without_slash(router, "/states/:stateId/", get(states::get_state));
    let router = with_and_without_slash(router, "/states/:stateId/stats/", get(states::state_stats));
    let router = with_and_without_slash(router, "/districts/", post(districts::create_district));
    let router = with_and_without_slash(
        router,
        "/districts/:districtId/",
        get(districts::get_district)
            .put(districts::update_district)
            .delete(districts::delete_district),
    );

    // route_layer: unmatched paths still 404 instead of 401
    router.route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

/// Register `path` (which ends in `/`) and its slash-less twin.
fn with_and_without_slash(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, method_router.clone())
        .route(path.trim_end_matches('/'), method_router)
}
