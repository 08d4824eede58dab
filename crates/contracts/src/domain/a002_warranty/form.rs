use super::aggregate::{WarrantyRecord, WarrantyUpdate};
use crate::domain::common::YesNo;
use crate::shared::form_value::{amount, blank_to_none};

/// Number of spare-part lines on an SRF.
pub const SPARE_LINES: usize = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpareLine {
    pub description: String,
    pub cost: Option<f64>,
}

/// Editable state of the warranty SRF update screen.
///
/// Dates are kept as entered (`""` = unset); amounts as `Option<f64>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarrantyUpdateForm {
    pub srf_number: String,
    pub name: String,
    pub division: String,
    pub model: String,

    pub challan_number: String,
    pub challan_date: String,
    pub vendor_date2: String,
    pub vendor_cost1: Option<f64>,
    pub vendor_cost2: Option<f64>,
    pub vendor_paint: YesNo,
    pub vendor_stator: YesNo,
    pub vendor_leg: YesNo,
    pub vendor_paint_cost: Option<f64>,
    pub vendor_stator_cost: Option<f64>,
    pub vendor_leg_cost: Option<f64>,

    pub repair_date: String,
    pub spares: [SpareLine; SPARE_LINES],

    pub rewinding_done: YesNo,
    pub rewinding_cost: Option<f64>,
    pub rewinding_base_cost: Option<f64>,
    pub other_cost: Option<f64>,
    pub godown_cost: Option<f64>,
    pub discount: Option<f64>,
    pub total: Option<f64>,
    pub gst_amount: Option<f64>,
    pub round_off: Option<f64>,

    pub delivery_date: String,
    pub work_done: String,
    pub receive_amount: Option<f64>,
    pub final_amount: Option<f64>,
    pub final_status: YesNo,
    pub chargeable: YesNo,
    pub gst: YesNo,
    pub pc_number: String,
    pub invoice_number: String,
    pub complaint_number: String,
    pub cg_srf_number: String,
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn number_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

impl WarrantyUpdateForm {
    pub fn from_record(record: WarrantyRecord) -> Self {
        let spares = [
            SpareLine { description: text(record.spare1), cost: record.cost1 },
            SpareLine { description: text(record.spare2), cost: record.cost2 },
            SpareLine { description: text(record.spare3), cost: record.cost3 },
            SpareLine { description: text(record.spare4), cost: record.cost4 },
            SpareLine { description: text(record.spare5), cost: record.cost5 },
            SpareLine { description: text(record.spare6), cost: record.cost6 },
        ];

        Self {
            srf_number: record.srf_number,
            name: record.name,
            division: record.division,
            model: record.model,
            challan_number: text(record.challan_number),
            challan_date: text(record.challan_date),
            vendor_date2: text(record.vendor_date2),
            vendor_cost1: record.vendor_cost1,
            vendor_cost2: record.vendor_cost2,
            vendor_paint: record.vendor_paint,
            vendor_stator: record.vendor_stator,
            vendor_leg: record.vendor_leg,
            vendor_paint_cost: record.vendor_paint_cost,
            vendor_stator_cost: record.vendor_stator_cost,
            vendor_leg_cost: record.vendor_leg_cost,
            repair_date: text(record.repair_date),
            spares,
            rewinding_done: record.rewinding_done,
            rewinding_cost: record.rewinding_cost,
            rewinding_base_cost: None,
            other_cost: record.other_cost,
            godown_cost: record.godown_cost,
            discount: record.discount,
            total: record.total,
            gst_amount: record.gst_amount,
            round_off: record.round_off,
            delivery_date: text(record.delivery_date),
            work_done: text(record.work_done),
            receive_amount: record.receive_amount,
            final_amount: record.final_amount,
            final_status: record.final_status,
            chargeable: record.chargeable,
            gst: record.gst,
            pc_number: number_text(record.pc_number),
            invoice_number: number_text(record.invoice_number),
            complaint_number: text(record.complaint_number),
            cg_srf_number: number_text(record.cg_srf_number),
        }
    }

    pub fn spare_cost(&self) -> f64 {
        self.spares.iter().map(|s| amount(s.cost)).sum()
    }

    /// Total owed to the vendor across every vendor cost line.
    pub fn vendor_cost(&self) -> f64 {
        [
            self.vendor_cost1,
            self.vendor_cost2,
            self.vendor_paint_cost,
            self.vendor_stator_cost,
            self.vendor_leg_cost,
        ]
        .into_iter()
        .map(amount)
        .sum()
    }

    pub fn has_vendor_challan(&self) -> bool {
        !self.challan_date.trim().is_empty()
    }

    pub fn to_payload(&self) -> WarrantyUpdate {
        let spare = |i: usize| blank_to_none(&self.spares[i].description);
        let cost = |i: usize| self.spares[i].cost;
        let int_cost = |v: Option<f64>| v.map(|c| c.round() as i64);
        let derived = |v: f64| if v == 0.0 { None } else { Some(v) };

        WarrantyUpdate {
            vendor_date2: blank_to_none(&self.vendor_date2),
            vendor_cost1: self.vendor_cost1,
            vendor_cost2: self.vendor_cost2,
            repair_date: blank_to_none(&self.repair_date),
            rewinding_done: self.rewinding_done,
            rewinding_cost: self.rewinding_cost,
            other_cost: self.other_cost,
            work_done: blank_to_none(&self.work_done),
            vendor_paint: self.vendor_paint,
            vendor_stator: self.vendor_stator,
            vendor_leg: self.vendor_leg,
            vendor_paint_cost: int_cost(self.vendor_paint_cost),
            vendor_stator_cost: int_cost(self.vendor_stator_cost),
            vendor_leg_cost: int_cost(self.vendor_leg_cost),
            vendor_cost: derived(self.vendor_cost()),
            spare1: spare(0),
            cost1: cost(0),
            spare2: spare(1),
            cost2: cost(1),
            spare3: spare(2),
            cost3: cost(2),
            spare4: spare(3),
            cost4: cost(3),
            spare5: spare(4),
            cost5: cost(4),
            spare6: spare(5),
            cost6: cost(5),
            spare_cost: derived(self.spare_cost()),
            godown_cost: self.godown_cost,
            discount: self.discount,
            total: self.total,
            gst: self.gst,
            gst_amount: self.gst_amount,
            round_off: self.round_off,
            final_amount: self.final_amount,
            receive_amount: self.receive_amount,
            delivery_date: blank_to_none(&self.delivery_date),
            pc_number: parse_int(&self.pc_number),
            invoice_number: parse_int(&self.invoice_number),
            complaint_number: blank_to_none(&self.complaint_number),
            cg_srf_number: parse_int(&self.cg_srf_number),
            final_status: self.final_status,
            chargeable: self.chargeable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_maps_spares_and_numbers() {
        let record = WarrantyRecord {
            srf_number: "W0007".to_string(),
            spare2: Some("Capacitor".to_string()),
            cost2: Some(120.0),
            pc_number: Some(4521),
            challan_date: Some("2024-01-10".to_string()),
            ..Default::default()
        };
        let form = WarrantyUpdateForm::from_record(record);
        assert_eq!(form.spares[1].description, "Capacitor");
        assert_eq!(form.spares[1].cost, Some(120.0));
        assert_eq!(form.pc_number, "4521");
        assert_eq!(form.invoice_number, "");
        assert!(form.has_vendor_challan());
    }

    #[test]
    fn test_derived_costs() {
        let mut form = WarrantyUpdateForm::default();
        form.spares[0].cost = Some(100.0);
        form.spares[3].cost = Some(50.5);
        form.vendor_cost1 = Some(800.0);
        form.vendor_leg_cost = Some(200.0);
        assert_eq!(form.spare_cost(), 150.5);
        assert_eq!(form.vendor_cost(), 1000.0);

        let payload = form.to_payload();
        assert_eq!(payload.spare_cost, Some(150.5));
        assert_eq!(payload.vendor_cost, Some(1000.0));
        assert_eq!(payload.vendor_leg_cost, Some(200));
    }

    #[test]
    fn test_payload_blanks_become_null() {
        let form = WarrantyUpdateForm {
            pc_number: "abc".to_string(),
            work_done: "  ".to_string(),
            ..Default::default()
        };
        let payload = form.to_payload();
        assert_eq!(payload.pc_number, None);
        assert_eq!(payload.work_done, None);
        assert_eq!(payload.delivery_date, None);
        assert_eq!(payload.spare_cost, None);
    }
}
