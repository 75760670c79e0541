use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::api::state::AppState;
use crate::domain::id::Id;

/// Identity of the verified caller, inserted into request extensions by
/// [`require_auth`]
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Id);

/// JWT gate for protected route groups
///
/// Verifies the `Authorization: Bearer <token>` header through the injected
/// verifier. On success the downstream handler runs with the caller's
/// identity available as an extension; on any failure the request is
/// short-circuited with 401 and the handler is never invoked.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let user_id = match token.map(|t| state.verifier.verify(t)) {
        Some(Ok(user_id)) => user_id,
        Some(Err(e)) => {
            tracing::debug!("rejected bearer token: {}", e);
            return invalid_jwt();
        }
        None => return invalid_jwt(),
    };

    req.extensions_mut().insert(AuthenticatedUser(user_id));
    next.run(req).await
}

fn invalid_jwt() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Invalid JWT" })),
    )
        .into_response()
}
