//! Score simulator API endpoint

use api_types::simulator::{SimulationRequest, SimulationResponse};
use axum::{Extension, Json, extract::rejection::JsonRejection};
use engine::{Action, Simulation};

use crate::{ServerError, server::Caller};

/// Handle requests for a score simulation.
///
/// Any well-formed JSON object is accepted; fields that are missing or of the
/// wrong type fall back to the simulator defaults. A body sent without a JSON
/// content type is ignored, as if it were `{}`.
pub async fn simulate(
    Extension(caller): Extension<Caller>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<Json<SimulationResponse>, ServerError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(JsonRejection::MissingJsonContentType(_)) => SimulationRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    tracing::debug!(caller = %caller.name, action = ?payload.action, "simulation requested");

    Ok(Json(respond(payload)))
}

fn respond(payload: SimulationRequest) -> SimulationResponse {
    let simulation = Simulation {
        current_score: payload.current_score.as_ref().and_then(|n| n.as_f64()),
        action: payload
            .action
            .as_deref()
            .map(Action::from)
            .unwrap_or_default(),
        amount: payload.amount.as_ref().and_then(|n| n.as_f64()),
    };
    let outcome = engine::simulate(&simulation);

    SimulationResponse {
        original_score: payload.current_score,
        simulated_score: outcome.simulated_score,
        change: outcome.change,
        message: outcome.message,
    }
}
