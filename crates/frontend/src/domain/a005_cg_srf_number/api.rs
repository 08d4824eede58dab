//! CG SRF number upload

use crate::shared::api::{client, Endpoint};
use contracts::domain::a005_cg_srf_number::UploadOutcome;
use contracts::shared::api_error::{ApiError, ErrorFallback};

const UPLOAD_FAILED: ErrorFallback =
    ErrorFallback::new("Upload failed", "Try again or contact support");

/// Sends the CSV as multipart field `file`. Without a file no request is made.
pub async fn upload_cg_srf_numbers(file: Option<web_sys::File>) -> Result<UploadOutcome, ApiError> {
    client::post_file(&client::url(Endpoint::CgSrfNumberUpload), file, UPLOAD_FAILED).await
}
