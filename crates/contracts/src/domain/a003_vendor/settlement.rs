//! Selection rules of the vendor final settlement table.
//!
//! A warranty SRF may only be settled with the vendor once its complaint
//! number has been confirmed by the manufacturer. Rows whose complaint is
//! unconfirmed stay visible but cannot be selected until the complaint
//! number is corrected.

use super::aggregate::{
    UpdateComplaintNumber, UpdateVendorFinalSettlement, VendorFinalSettlementRecord,
};
use crate::domain::a004_complaint_number::ComplaintStatusMap;
use crate::domain::common::YesNo;
use crate::shared::settings::ValidationThresholds;
use std::collections::BTreeSet;

/// SRF numbers starting with this prefix carry no manufacturer complaint.
pub const NON_WARRANTY_PREFIX: char = 'S';

/// `true` when the row has a complaint number that is not confirmed.
pub fn is_invalid_complaint_row(
    row: &VendorFinalSettlementRecord,
    statuses: &ComplaintStatusMap,
) -> bool {
    if row.srf_number.starts_with(NON_WARRANTY_PREFIX) {
        return false;
    }
    match row.complaint_number.as_deref() {
        None | Some("") => false,
        Some(number) => !statuses.is_ok(number),
    }
}

/// How the complaint number cell renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplaintCell {
    /// No complaint to show (`-`).
    Empty,
    Valid { number: String, tooltip: String },
    /// Shown highlighted and clickable to open the correction dialog.
    Invalid { number: String, tooltip: String },
}

pub fn complaint_cell(
    row: &VendorFinalSettlementRecord,
    statuses: &ComplaintStatusMap,
) -> ComplaintCell {
    let number = match row.complaint_number.as_deref() {
        Some(n) if !n.is_empty() && !row.srf_number.starts_with(NON_WARRANTY_PREFIX) => n,
        _ => return ComplaintCell::Empty,
    };
    let tooltip = statuses.tooltip(number);
    if statuses.is_ok(number) {
        ComplaintCell::Valid {
            number: number.to_string(),
            tooltip,
        }
    } else {
        ComplaintCell::Invalid {
            number: number.to_string(),
            tooltip,
        }
    }
}

/// Indexes of the rows select-all may pick.
pub fn selectable_indexes(
    rows: &[VendorFinalSettlementRecord],
    statuses: &ComplaintStatusMap,
) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| !is_invalid_complaint_row(row, statuses))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn total_amount(rows: &[VendorFinalSettlementRecord]) -> f64 {
    rows.iter().map(|r| r.vendor_cost).sum()
}

/// Selected row indexes of the settlement table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettlementSelection {
    selected: BTreeSet<usize>,
}

impl SettlementSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, index: usize, checked: bool) {
        if checked {
            self.selected.insert(index);
        } else {
            self.selected.remove(&index);
        }
    }

    /// Header checkbox: checking selects every selectable row, unchecking clears.
    pub fn set_all(
        &mut self,
        checked: bool,
        rows: &[VendorFinalSettlementRecord],
        statuses: &ComplaintStatusMap,
    ) {
        self.selected.clear();
        if checked {
            self.selected.extend(selectable_indexes(rows, statuses));
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_all_checked(&self, total: usize) -> bool {
        total > 0 && self.selected.len() == total
    }

    pub fn is_indeterminate(&self, total: usize) -> bool {
        !self.selected.is_empty() && self.selected.len() < total
    }

    pub fn selected_amount(&self, rows: &[VendorFinalSettlementRecord]) -> f64 {
        self.selected
            .iter()
            .filter_map(|&idx| rows.get(idx))
            .map(|r| r.vendor_cost)
            .sum()
    }

    /// Settlement items for the selected rows, in table order.
    pub fn payload(
        &self,
        rows: &[VendorFinalSettlementRecord],
    ) -> Vec<UpdateVendorFinalSettlement> {
        self.selected
            .iter()
            .filter_map(|&idx| rows.get(idx))
            .map(|r| UpdateVendorFinalSettlement {
                srf_number: r.srf_number.clone(),
                vendor_settled: YesNo::Yes,
            })
            .collect()
    }
}

/// State of the complaint number correction dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintEdit {
    pub srf_number: String,
    value: String,
    max_len: usize,
    min_len: usize,
}

impl ComplaintEdit {
    pub fn new(srf_number: impl Into<String>, thresholds: &ValidationThresholds) -> Self {
        Self {
            srf_number: srf_number.into(),
            value: String::new(),
            max_len: thresholds.complaint_number_max_len,
            min_len: thresholds.complaint_number_min_len,
        }
    }

    /// Input beyond the maximum length is cut off.
    pub fn set_value(&mut self, input: &str) {
        self.value = input.chars().take(self.max_len).collect();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_length_valid(&self) -> bool {
        let len = self.value.chars().count();
        len >= self.min_len && len <= self.max_len
    }

    pub fn to_payload(&self) -> Option<UpdateComplaintNumber> {
        self.is_length_valid().then(|| UpdateComplaintNumber {
            srf_number: self.srf_number.clone(),
            complaint_number: self.value.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_complaint_number::ComplaintNumber;

    fn row(srf: &str, complaint: Option<&str>, cost: f64) -> VendorFinalSettlementRecord {
        VendorFinalSettlementRecord {
            srf_number: srf.to_string(),
            name: "R. Das".to_string(),
            model: "M1".to_string(),
            complaint_number: complaint.map(str::to_string),
            vendor_cost1: Some(cost),
            vendor_cost2: None,
            vendor_paint_cost: None,
            vendor_stator_cost: None,
            vendor_leg_cost: None,
            vendor_cost: cost,
        }
    }

    fn statuses() -> ComplaintStatusMap {
        ComplaintStatusMap::from_list(vec![
            ComplaintNumber {
                complaint_number: "CMP0000000001".to_string(),
                status: Some("OK".to_string()),
                remark: None,
            },
            ComplaintNumber {
                complaint_number: "CMP0000000002".to_string(),
                status: Some("PENDING".to_string()),
                remark: Some("Awaiting approval".to_string()),
            },
        ])
    }

    fn rows() -> Vec<VendorFinalSettlementRecord> {
        vec![
            row("W0001", Some("CMP0000000001"), 500.0),
            row("W0002", Some("CMP0000000002"), 300.0),
            row("S0003", Some("CMP0000000009"), 200.0),
            row("W0004", None, 100.5),
            row("W0005", Some("CMP0000000404"), 50.0),
        ]
    }

    #[test]
    fn test_invalid_complaint_rows() {
        let statuses = statuses();
        let flags: Vec<bool> = rows()
            .iter()
            .map(|r| is_invalid_complaint_row(r, &statuses))
            .collect();
        assert_eq!(flags, vec![false, true, false, false, true]);
    }

    #[test]
    fn test_select_all_skips_blocked_rows() {
        let rows = rows();
        let mut selection = SettlementSelection::new();
        selection.set_all(true, &rows, &statuses());
        assert_eq!(selection.len(), 3);
        assert!(selection.is_selected(0));
        assert!(!selection.is_selected(1));
        assert!(selection.is_selected(2));
        assert!(selection.is_indeterminate(rows.len()));
        assert!(!selection.is_all_checked(rows.len()));

        selection.set_all(false, &rows, &statuses());
        assert!(selection.is_empty());
        assert!(!selection.is_indeterminate(rows.len()));
    }

    #[test]
    fn test_amounts_and_payload() {
        let rows = rows();
        assert_eq!(total_amount(&rows), 1150.5);

        let mut selection = SettlementSelection::new();
        selection.toggle(3, true);
        selection.toggle(0, true);
        selection.toggle(2, true);
        selection.toggle(2, false);
        assert_eq!(selection.selected_amount(&rows), 600.5);

        let payload = selection.payload(&rows);
        let srfs: Vec<&str> = payload.iter().map(|p| p.srf_number.as_str()).collect();
        assert_eq!(srfs, vec!["W0001", "W0004"]);
        assert!(payload.iter().all(|p| p.vendor_settled == YesNo::Yes));
    }

    #[test]
    fn test_empty_selection_has_empty_payload() {
        let selection = SettlementSelection::new();
        assert!(selection.payload(&rows()).is_empty());
        assert!(!selection.is_all_checked(0));
    }

    #[test]
    fn test_complaint_cells() {
        let rows = rows();
        let statuses = statuses();
        assert_eq!(
            complaint_cell(&rows[0], &statuses),
            ComplaintCell::Valid {
                number: "CMP0000000001".to_string(),
                tooltip: "Complaint number is valid".to_string(),
            }
        );
        assert_eq!(
            complaint_cell(&rows[1], &statuses),
            ComplaintCell::Invalid {
                number: "CMP0000000002".to_string(),
                tooltip: "Awaiting approval".to_string(),
            }
        );
        assert_eq!(complaint_cell(&rows[2], &statuses), ComplaintCell::Empty);
        assert_eq!(complaint_cell(&rows[3], &statuses), ComplaintCell::Empty);
    }

    #[test]
    fn test_complaint_edit_length() {
        let thresholds = ValidationThresholds::default();
        let mut edit = ComplaintEdit::new("W0002", &thresholds);
        edit.set_value("CMP00000001");
        assert!(!edit.is_length_valid());
        assert!(edit.to_payload().is_none());

        edit.set_value("CMP0000000001");
        assert!(edit.is_length_valid());

        edit.set_value("CMP00000000012345");
        assert_eq!(edit.value(), "CMP000000000123");
        let payload = edit.to_payload().unwrap();
        assert_eq!(payload.srf_number, "W0002");
        assert_eq!(payload.complaint_number, "CMP000000000123");
    }
}
