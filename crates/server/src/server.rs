use axum::{
    Json, Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
    typed_header::TypedHeaderRejection,
};

use std::{collections::HashMap, sync::Arc};

use crate::{ServerError, simulator};
use api_types::health::Health;

#[derive(Clone, Debug, Default)]
pub struct ServerState {
    /// Bearer token -> caller name.
    pub tokens: Arc<HashMap<String, String>>,
}

impl ServerState {
    pub fn new(tokens: HashMap<String, String>) -> Self {
        Self {
            tokens: Arc::new(tokens),
        }
    }
}

/// Verified identity of the caller, available to handlers as an extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caller {
    pub name: String,
}

async fn auth(
    auth_header: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Ok(TypedHeader(auth_header)) = auth_header else {
        return Err(ServerError::Unauthorized);
    };

    let Some(name) = state.tokens.get(auth_header.token()) else {
        tracing::debug!("rejected unknown bearer token");
        return Err(ServerError::Unauthorized);
    };

    request.extensions_mut().insert(Caller { name: name.clone() });
    Ok(next.run(request).await)
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/simulator", post(simulator::simulate))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}
