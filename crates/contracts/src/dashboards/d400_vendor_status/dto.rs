use serde::{Deserialize, Serialize};

/// Source value of warranty rows; everything else is out of warranty.
pub const SOURCE_WARRANTY: &str = "WARRANTY";

/// One aggregated row of the vendor status chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRow {
    pub division: String,
    pub source: String,
    /// `"Y"` settled with the vendor, `"N"` pending.
    pub vendor_settled: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorDashboard {
    pub total_vendors: Option<u64>,
    pub status_per_division_stacked_bar_chart: Vec<StatusRow>,
}

/// Response of `GET menu/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub vendor: Option<VendorDashboard>,
}

impl DashboardData {
    pub fn status_rows(&self) -> &[StatusRow] {
        self.vendor
            .as_ref()
            .map(|v| v.status_per_division_stacked_bar_chart.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_vendors(&self) -> Option<u64> {
        self.vendor.as_ref().and_then(|v| v.total_vendors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_payload() {
        let data: DashboardData = serde_json::from_str(
            r#"{"vendor":{"total_vendors":120,"status_per_division_stacked_bar_chart":[
                {"division":"FANS","source":"WARRANTY","vendor_settled":"Y","count":3}
            ]},"retail":{"pending":4}}"#,
        )
        .unwrap();
        assert_eq!(data.total_vendors(), Some(120));
        assert_eq!(data.status_rows().len(), 1);
        assert_eq!(data.status_rows()[0].division, "FANS");
    }

    #[test]
    fn test_missing_vendor_section() {
        let data: DashboardData = serde_json::from_str("{}").unwrap();
        assert_eq!(data.total_vendors(), None);
        assert!(data.status_rows().is_empty());
    }
}
