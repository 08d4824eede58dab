//! Vendor challan and settlement service calls

use crate::shared::api::{client, Endpoint};
use contracts::domain::a003_vendor::{
    UpdateComplaintNumber, UpdateVendorFinalSettlement, UpdateVendorUnsettled, VendorChallanCode,
    VendorChallanCreate, VendorChallanDetails, VendorFinalSettlementRecord, VendorNotSettledRecord,
};
use contracts::shared::api_error::{ApiError, ErrorFallback, ServerMessage};

const CODE_FAILED: ErrorFallback = ErrorFallback::new("Failed to fetch challan code", "");
const CHALLAN_LIST_FAILED: ErrorFallback =
    ErrorFallback::new("Failed to fetch vendor challan details", "");
const CREATE_FAILED: ErrorFallback = ErrorFallback::new("Failed to create vendor challan", "");
const NAMES_FAILED: ErrorFallback = ErrorFallback::new("Failed to fetch receiver names", "");
const LIST_FAILED: ErrorFallback = ErrorFallback::new("Failed to fetch data", "");
const SETTLE_FAILED: ErrorFallback =
    ErrorFallback::new("Settlement failed", "Please try again later.");
const COMPLAINT_FAILED: ErrorFallback = ErrorFallback::new("Update failed", "");

pub async fn next_challan_code() -> Result<VendorChallanCode, ApiError> {
    client::get_json(&client::url(Endpoint::VendorNextChallanCode), CODE_FAILED).await
}

pub async fn last_challan_code() -> Result<VendorChallanCode, ApiError> {
    client::get_json(&client::url(Endpoint::VendorLastChallanCode), CODE_FAILED).await
}

/// SRFs waiting to be sent to a vendor.
pub async fn list_challan() -> Result<Vec<VendorChallanDetails>, ApiError> {
    client::get_json(&client::url(Endpoint::VendorListChallan), CHALLAN_LIST_FAILED).await
}

pub async fn create_vendor_challan(
    items: &[VendorChallanCreate],
) -> Result<ServerMessage, ApiError> {
    client::patch_json(&client::url(Endpoint::VendorCreate), &items, CREATE_FAILED).await
}

pub async fn fetch_received_by() -> Result<Vec<String>, ApiError> {
    client::get_json(&client::url(Endpoint::VendorListReceivedBy), NAMES_FAILED).await
}

pub async fn fetch_not_settled() -> Result<Vec<VendorNotSettledRecord>, ApiError> {
    client::get_json(&client::url(Endpoint::VendorNotSettled), LIST_FAILED).await
}

pub async fn update_unsettled(items: &[UpdateVendorUnsettled]) -> Result<ServerMessage, ApiError> {
    client::patch_json(&client::url(Endpoint::VendorUpdateUnsettled), &items, SETTLE_FAILED).await
}

/// Records waiting for the administrator to close the vendor account.
pub async fn fetch_final_settlement() -> Result<Vec<VendorFinalSettlementRecord>, ApiError> {
    client::get_json(&client::url(Endpoint::VendorFinalSettled), LIST_FAILED).await
}

pub async fn update_final_settlement(
    items: &[UpdateVendorFinalSettlement],
) -> Result<ServerMessage, ApiError> {
    client::patch_json(
        &client::url(Endpoint::VendorUpdateFinalSettled),
        &items,
        SETTLE_FAILED,
    )
    .await
}

pub async fn update_complaint_number(
    body: &UpdateComplaintNumber,
) -> Result<ServerMessage, ApiError> {
    client::patch_json(
        &client::url(Endpoint::VendorUpdateComplaintNumber),
        body,
        COMPLAINT_FAILED,
    )
    .await
}
