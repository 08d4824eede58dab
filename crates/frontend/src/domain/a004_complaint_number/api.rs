//! Complaint number service calls

use crate::shared::api::{client, Endpoint};
use contracts::domain::a004_complaint_number::ComplaintNumber;
use contracts::domain::a005_cg_srf_number::UploadOutcome;
use contracts::shared::api_error::{ApiError, ErrorFallback};

const LIST_FAILED: ErrorFallback = ErrorFallback::new("Failed to fetch complaint numbers", "");
const UPLOAD_FAILED: ErrorFallback =
    ErrorFallback::new("Upload failed", "Try again or contact support");

/// Every complaint number known to the manufacturer, with its status.
pub async fn fetch_complaint_numbers() -> Result<Vec<ComplaintNumber>, ApiError> {
    client::get_json(&client::url(Endpoint::ComplaintNumberList), LIST_FAILED).await
}

pub async fn upload_complaint_numbers(
    file: Option<web_sys::File>,
) -> Result<UploadOutcome, ApiError> {
    client::post_file(&client::url(Endpoint::ComplaintNumberUpload), file, UPLOAD_FAILED).await
}
