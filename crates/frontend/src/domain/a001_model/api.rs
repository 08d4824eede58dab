//! Model master service calls

use crate::shared::api::{client, Endpoint};
use contracts::domain::a001_model::{
    CreateModel, ModelCostDetails, ModelRequest, RewindingChargeRequest, RewindingChargeResponse,
};
use contracts::shared::api_error::{ApiError, ErrorFallback, ServerMessage};

const CREATE_FAILED: ErrorFallback = ErrorFallback::new("Failed to create model.", "");
const LIST_FAILED: ErrorFallback =
    ErrorFallback::new("Failed to fetch models", "Try again or contact support");
const COST_FAILED: ErrorFallback = ErrorFallback::new("Failed to fetch model cost details", "");
const RATE_FAILED: ErrorFallback = ErrorFallback::new("Failed to fetch rewinding charge.", "");

pub async fn create_model(payload: &CreateModel) -> Result<ServerMessage, ApiError> {
    client::post_json(&client::url(Endpoint::ModelCreate), payload, CREATE_FAILED).await
}

/// Model names of a division.
pub async fn fetch_models(request: &ModelRequest) -> Result<Vec<String>, ApiError> {
    client::post_json(&client::url(Endpoint::ModelList), request, LIST_FAILED).await
}

pub async fn fetch_cost_details(request: &ModelRequest) -> Result<ModelCostDetails, ApiError> {
    client::post_json(&client::url(Endpoint::ModelCostDetails), request, COST_FAILED).await
}

pub async fn fetch_rewinding_charge(
    request: &RewindingChargeRequest,
) -> Result<RewindingChargeResponse, ApiError> {
    client::post_json(&client::url(Endpoint::RewindingRateForModel), request, RATE_FAILED).await
}
