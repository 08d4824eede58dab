use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row of `GET vendor/list_vendor_challan_details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorChallanDetails {
    pub srf_number: String,
    pub division: String,
    pub model: String,
    pub serial_number: String,
    pub challan: String,
}

/// Item of `PATCH vendor/create_vendor_challan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorChallanCreate {
    pub srf_number: String,
    pub challan_number: String,
    pub challan_date: NaiveDate,
    pub challan: String,
    pub received_by: String,
}

/// Response of the next/last vendor challan code endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorChallanCode {
    pub challan_number: String,
}

/// Row of `GET vendor/vendor_not_settled`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorNotSettledRecord {
    pub srf_number: String,
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub complaint_number: Option<String>,
    #[serde(default)]
    pub vendor_cost1: Option<f64>,
    #[serde(default)]
    pub vendor_cost2: Option<f64>,
    #[serde(default)]
    pub vendor_paint_cost: Option<f64>,
    #[serde(default)]
    pub vendor_stator_cost: Option<f64>,
    #[serde(default)]
    pub vendor_leg_cost: Option<f64>,
    pub vendor_cost: f64,
    #[serde(default)]
    pub vendor_bill_number: Option<String>,
}

/// Item of `PATCH vendor/update_vendor_unsettled`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateVendorUnsettled {
    pub srf_number: String,
    pub vendor_bill_number: String,
    pub vendor_settlement_date: NaiveDate,
}

/// Row of `GET vendor/list_of_final_vendor_settlement`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorFinalSettlementRecord {
    pub srf_number: String,
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub complaint_number: Option<String>,
    #[serde(default)]
    pub vendor_cost1: Option<f64>,
    #[serde(default)]
    pub vendor_cost2: Option<f64>,
    #[serde(default)]
    pub vendor_paint_cost: Option<f64>,
    #[serde(default)]
    pub vendor_stator_cost: Option<f64>,
    #[serde(default)]
    pub vendor_leg_cost: Option<f64>,
    #[serde(default)]
    pub vendor_cost: f64,
}

/// Item of `PATCH vendor/update_final_vendor_settlement`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateVendorFinalSettlement {
    pub srf_number: String,
    pub vendor_settled: crate::domain::common::YesNo,
}

/// Body of `PATCH vendor/update_complaint_number`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateComplaintNumber {
    pub srf_number: String,
    pub complaint_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::YesNo;

    #[test]
    fn test_final_settlement_record_defaults() {
        let row: VendorFinalSettlementRecord = serde_json::from_str(
            r#"{"srf_number":"W0001","name":"R. Das","model":"M1","vendor_cost":850.5}"#,
        )
        .unwrap();
        assert_eq!(row.complaint_number, None);
        assert_eq!(row.vendor_cost, 850.5);
    }

    #[test]
    fn test_final_settlement_update_wire_format() {
        let item = UpdateVendorFinalSettlement {
            srf_number: "W0001".to_string(),
            vendor_settled: YesNo::Yes,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"srf_number":"W0001","vendor_settled":"Y"}"#);
    }
}
