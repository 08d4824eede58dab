//! Warranty SRF service calls

use crate::shared::api::{client, Endpoint};
use contracts::domain::a002_warranty::{
    UpdateSrfFinalSettlement, UpdateSrfUnsettled, WarrantyPending, WarrantyRecord,
    WarrantySettleRecord, WarrantySrfNumber, WarrantyUpdate,
};
use contracts::shared::api_error::{ApiError, ErrorFallback, ServerMessage};

const PENDING_FAILED: ErrorFallback = ErrorFallback::new("Failed to fetch pending records", "");
const FETCH_FAILED: ErrorFallback = ErrorFallback::new("Failed to fetch warranty record", "");
const UPDATE_FAILED: ErrorFallback = ErrorFallback::new("Failed to update warranty record", "");
const LIST_FAILED: ErrorFallback = ErrorFallback::new("Failed to fetch records", "");
const SETTLE_FAILED: ErrorFallback = ErrorFallback::new("Failed to update record", "");

/// SRFs that are not delivered yet.
pub async fn fetch_pending() -> Result<Vec<WarrantyPending>, ApiError> {
    client::get_json(&client::url(Endpoint::WarrantyListPending), PENDING_FAILED).await
}

pub async fn fetch_by_srf_number(srf_number: &str) -> Result<WarrantyRecord, ApiError> {
    let body = WarrantySrfNumber {
        srf_number: srf_number.to_string(),
    };
    client::post_json(&client::url(Endpoint::WarrantyBySrfNumber), &body, FETCH_FAILED).await
}

pub async fn update_warranty(
    srf_number: &str,
    payload: &WarrantyUpdate,
) -> Result<ServerMessage, ApiError> {
    let url = client::url_with(Endpoint::WarrantyUpdate, srf_number);
    client::patch_json(&url, payload, UPDATE_FAILED).await
}

/// Delivered SRFs not yet proposed for settlement.
pub async fn fetch_not_settled() -> Result<Vec<WarrantySettleRecord>, ApiError> {
    client::get_json(&client::url(Endpoint::WarrantySrfNotSettled), LIST_FAILED).await
}

pub async fn propose_settlement(items: &[UpdateSrfUnsettled]) -> Result<ServerMessage, ApiError> {
    client::patch_json(
        &client::url(Endpoint::WarrantyUpdateSrfUnsettled),
        &items,
        SETTLE_FAILED,
    )
    .await
}

pub async fn fetch_final_settlement() -> Result<Vec<WarrantySettleRecord>, ApiError> {
    client::get_json(&client::url(Endpoint::WarrantyListFinalSrfSettlement), LIST_FAILED).await
}

pub async fn update_final_settlement(
    items: &[UpdateSrfFinalSettlement],
) -> Result<ServerMessage, ApiError> {
    client::patch_json(
        &client::url(Endpoint::WarrantyUpdateFinalSrfSettlement),
        &items,
        SETTLE_FAILED,
    )
    .await
}
