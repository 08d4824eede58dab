use crate::domain::common::YesNo;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row of `GET warranty/list_pending`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarrantyPending {
    pub srf_number: String,
    pub name: String,
}

/// Body of `POST warranty/by_srf_number`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarrantySrfNumber {
    pub srf_number: String,
}

/// Warranty SRF as returned for editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarrantyRecord {
    pub srf_number: String,
    pub name: String,
    pub division: String,
    pub model: String,
    pub srf_date: String,
    pub serial_number: String,
    pub cg_srf_number: Option<i64>,
    pub challan_number: Option<String>,
    pub challan_date: Option<String>,
    pub received_by: Option<String>,
    pub vendor_date2: Option<String>,
    pub vendor_cost1: Option<f64>,
    pub vendor_cost2: Option<f64>,
    pub rewinding_done: YesNo,
    pub rewinding_cost: Option<f64>,
    pub repair_date: Option<String>,
    pub other_cost: Option<f64>,
    pub vendor_paint: YesNo,
    pub vendor_stator: YesNo,
    pub vendor_leg: YesNo,
    pub vendor_paint_cost: Option<f64>,
    pub vendor_stator_cost: Option<f64>,
    pub vendor_leg_cost: Option<f64>,
    pub vendor_cost: Option<f64>,
    pub work_done: Option<String>,
    pub spare1: Option<String>,
    pub cost1: Option<f64>,
    pub spare2: Option<String>,
    pub cost2: Option<f64>,
    pub spare3: Option<String>,
    pub cost3: Option<f64>,
    pub spare4: Option<String>,
    pub cost4: Option<f64>,
    pub spare5: Option<String>,
    pub cost5: Option<f64>,
    pub spare6: Option<String>,
    pub cost6: Option<f64>,
    pub spare_cost: Option<f64>,
    pub godown_cost: Option<f64>,
    pub discount: Option<f64>,
    pub total: Option<f64>,
    pub gst: YesNo,
    pub gst_amount: Option<f64>,
    pub round_off: Option<f64>,
    pub final_amount: Option<f64>,
    pub receive_amount: Option<f64>,
    pub delivery_date: Option<String>,
    pub complaint_number: Option<String>,
    pub pc_number: Option<i64>,
    pub invoice_number: Option<i64>,
    pub chargeable: YesNo,
    pub final_status: YesNo,
}

/// Body of `PATCH warranty/update/{srf_number}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarrantyUpdate {
    pub vendor_date2: Option<String>,
    pub vendor_cost1: Option<f64>,
    pub vendor_cost2: Option<f64>,
    pub repair_date: Option<String>,
    pub rewinding_done: YesNo,
    pub rewinding_cost: Option<f64>,
    pub other_cost: Option<f64>,
    pub work_done: Option<String>,
    pub vendor_paint: YesNo,
    pub vendor_stator: YesNo,
    pub vendor_leg: YesNo,
    pub vendor_paint_cost: Option<i64>,
    pub vendor_stator_cost: Option<i64>,
    pub vendor_leg_cost: Option<i64>,
    pub vendor_cost: Option<f64>,
    pub spare1: Option<String>,
    pub cost1: Option<f64>,
    pub spare2: Option<String>,
    pub cost2: Option<f64>,
    pub spare3: Option<String>,
    pub cost3: Option<f64>,
    pub spare4: Option<String>,
    pub cost4: Option<f64>,
    pub spare5: Option<String>,
    pub cost5: Option<f64>,
    pub spare6: Option<String>,
    pub cost6: Option<f64>,
    pub spare_cost: Option<f64>,
    pub godown_cost: Option<f64>,
    pub discount: Option<f64>,
    pub total: Option<f64>,
    pub gst: YesNo,
    pub gst_amount: Option<f64>,
    pub round_off: Option<f64>,
    pub final_amount: Option<f64>,
    pub receive_amount: Option<f64>,
    pub delivery_date: Option<String>,
    pub pc_number: Option<i64>,
    pub invoice_number: Option<i64>,
    pub complaint_number: Option<String>,
    pub cg_srf_number: Option<i64>,
    pub final_status: YesNo,
    pub chargeable: YesNo,
}

/// Row of `GET warranty/srf_not_settled` and the final settlement list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarrantySettleRecord {
    pub srf_number: String,
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub final_amount: Option<f64>,
    #[serde(default)]
    pub received_by: Option<String>,
    #[serde(default)]
    pub pc_number: Option<i64>,
    #[serde(default)]
    pub invoice_number: Option<i64>,
}

/// Item of `PATCH warranty/update_srf_unsettled`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSrfUnsettled {
    pub srf_number: String,
    pub settlement_date: NaiveDate,
}

/// Item of `PATCH warranty/update_final_srf_settlement`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSrfFinalSettlement {
    pub srf_number: String,
    pub final_settled: YesNo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tolerates_missing_fields() {
        let record: WarrantyRecord = serde_json::from_str(
            r#"{"srf_number":"W0001","name":"R. Das","division":"FANS","model":"M1",
                "rewinding_done":"Y","gst":"N","chargeable":"Y","final_status":"N",
                "challan_date":"2024-01-10","cost1":null}"#,
        )
        .unwrap();
        assert_eq!(record.srf_number, "W0001");
        assert_eq!(record.rewinding_done, YesNo::Yes);
        assert_eq!(record.challan_date.as_deref(), Some("2024-01-10"));
        assert_eq!(record.vendor_cost1, None);
    }

    #[test]
    fn test_settlement_date_wire_format() {
        let item = UpdateSrfUnsettled {
            srf_number: "W0001".to_string(),
            settlement_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["settlement_date"], "2024-02-01");
    }
}
