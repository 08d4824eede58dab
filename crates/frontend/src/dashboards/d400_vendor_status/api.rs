use crate::shared::api::{client, Endpoint};
use contracts::dashboards::d400_vendor_status::DashboardData;
use contracts::shared::api_error::{ApiError, ErrorFallback};

const DASHBOARD_FAILED: ErrorFallback = ErrorFallback::new("Failed to load dashboard", "");

/// Aggregates shown on the menu dashboard.
pub async fn fetch_dashboard() -> Result<DashboardData, ApiError> {
    client::get_json(&client::url(Endpoint::MenuDashboard), DASHBOARD_FAILED).await
}
