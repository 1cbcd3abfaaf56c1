// src/presentation/http/middleware/usage.rs
use crate::application::dto::Principal;
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Request, middleware::Next, response::Response};
use tracing::warn;

/// Counts a successful car detail read against the car and its owner.
///
/// Runs after the handler; the counters are updated on a detached task so the
/// response is never delayed or altered by a failure here.
pub async fn track_car_usage(
    Extension(state): Extension<HttpState>,
    req: Request,
    next: Next,
) -> Response {
    let owner = req.extensions().get::<Principal>().map(Principal::id);
    let car_id = req
        .uri()
        .path()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<i64>().ok());

    let response = next.run(req).await;

    if let (true, Some(owner), Some(car_id)) = (response.status().is_success(), owner, car_id) {
        let car_commands = std::sync::Arc::clone(&state.services.car_commands);
        let user_commands = std::sync::Arc::clone(&state.services.user_commands);

        tokio::spawn(async move {
            if let Err(err) = car_commands.increment_usage_counter(owner, car_id).await {
                warn!(error = %err, car_id, "failed to increment car usage");
                return;
            }
            if let Err(err) = user_commands.refresh_usage_total(owner).await {
                warn!(error = %err, user_id = %owner, "failed to refresh usage total");
            }
        });
    }

    response
}
