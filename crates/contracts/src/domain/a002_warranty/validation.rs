//! Validation of the warranty SRF update screen.
//!
//! Rules follow the repair lifecycle: vendor challan → vendor return →
//! repair → delivery → final settlement. Each stage needs the previous
//! stage's date, and dates must not go backwards. A date that does not
//! parse skips the ordering check rather than failing it.

use super::form::{WarrantyUpdateForm, SPARE_LINES};
use crate::shared::form_value::{amount, is_blank, is_set, parse_form_date};
use crate::shared::settings::ValidationThresholds;
use crate::shared::validation::{Rule, RuleSet, ValidationReport};

/// `true` when both dates parse and `earlier` is after `later`.
fn is_out_of_order(earlier: &str, later: &str) -> bool {
    match (parse_form_date(earlier), parse_form_date(later)) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

fn is_set_date(value: &str) -> bool {
    !is_blank(value)
}

pub struct WarrantyUpdateValidator {
    rules: RuleSet<WarrantyUpdateForm>,
}

impl Default for WarrantyUpdateValidator {
    fn default() -> Self {
        Self::new(ValidationThresholds::default())
    }
}

impl WarrantyUpdateValidator {
    pub fn new(thresholds: ValidationThresholds) -> Self {
        let mut rules = RuleSet::new();

        for i in 0..SPARE_LINES {
            rules.push(Rule::new(
                format!("Cost for Spare {} is required", i + 1),
                format!("cost{}", i + 1),
                move |f: &WarrantyUpdateForm| {
                    let line = &f.spares[i];
                    !is_blank(&line.description) && !is_set(line.cost)
                },
            ));
        }

        let ratio = thresholds.vendor_other_cost_ratio;
        let default_floor = thresholds.default_rewinding_base_cost;

        let rules = rules
            .rule("Create Challan First", "challan_date", |f: &WarrantyUpdateForm| {
                !is_set_date(&f.challan_date) && is_set_date(&f.vendor_date2)
            })
            .rule("Return Date Required", "repair_date", |f: &WarrantyUpdateForm| {
                is_set_date(&f.challan_date)
                    && !is_set_date(&f.vendor_date2)
                    && is_set_date(&f.repair_date)
            })
            .rule("Return Date Required", "vendor_date2", |f: &WarrantyUpdateForm| {
                is_set_date(&f.challan_date) && !is_set_date(&f.vendor_date2)
            })
            .rule("Repair Date Required", "repair_date", |f: &WarrantyUpdateForm| {
                !is_set_date(&f.repair_date) && is_set_date(&f.delivery_date)
            })
            .rule("Vendor Dates Required", "vendor_date2", |f: &WarrantyUpdateForm| {
                amount(f.vendor_cost1) > 0.0 && !is_set_date(&f.challan_date)
            })
            .rule("Invalid Return Date", "vendor_date2", |f: &WarrantyUpdateForm| {
                is_out_of_order(&f.challan_date, &f.vendor_date2)
            })
            .rule("Invalid Repair Date", "repair_date", |f: &WarrantyUpdateForm| {
                is_out_of_order(&f.vendor_date2, &f.repair_date)
            })
            .rule("Invalid Delivery Date", "delivery_date", |f: &WarrantyUpdateForm| {
                is_out_of_order(&f.repair_date, &f.delivery_date)
            })
            .rule(
                "Vendor Other Cost Too High",
                "other_cost",
                move |f: &WarrantyUpdateForm| {
                    is_set(f.other_cost) && amount(f.vendor_cost2) > amount(f.other_cost) * ratio
                },
            )
            .rule(
                "Rewinding Cost too Low",
                "rewinding_cost",
                move |f: &WarrantyUpdateForm| {
                    let floor = if is_set(f.rewinding_base_cost) {
                        amount(f.rewinding_base_cost)
                    } else {
                        default_floor
                    };
                    f.rewinding_done.is_yes()
                        && is_set(f.rewinding_cost)
                        && amount(f.rewinding_cost) < floor
                },
            )
            .rule("Work Done is required", "work_done", |f: &WarrantyUpdateForm| {
                is_set_date(&f.delivery_date) && is_blank(&f.work_done)
            })
            .rule(
                "Full Payment Not Received",
                "receive_amount",
                |f: &WarrantyUpdateForm| {
                    is_set_date(&f.delivery_date)
                        && amount(f.receive_amount) < amount(f.final_amount)
                },
            )
            .rule(
                "Excess Payment Received",
                "receive_amount",
                |f: &WarrantyUpdateForm| {
                    is_set_date(&f.delivery_date)
                        && amount(f.receive_amount) > amount(f.final_amount)
                },
            )
            // Final settlement
            .rule("Delivery Date is required", "delivery_date", |f: &WarrantyUpdateForm| {
                f.final_status.is_yes() && !is_set_date(&f.delivery_date)
            })
            .rule("PC Number is required", "pc_number", |f: &WarrantyUpdateForm| {
                f.final_status.is_yes() && !f.gst.is_yes() && is_blank(&f.pc_number)
            })
            .rule(
                "Invoice Number is required",
                "invoice_number",
                |f: &WarrantyUpdateForm| {
                    f.final_status.is_yes() && f.gst.is_yes() && is_blank(&f.invoice_number)
                },
            )
            .rule(
                "Rewinding Cost is required",
                "rewinding_cost",
                |f: &WarrantyUpdateForm| {
                    f.final_status.is_yes() && is_set(f.vendor_cost1) && !is_set(f.rewinding_cost)
                },
            )
            .rule("Other Cost is required", "other_cost", |f: &WarrantyUpdateForm| {
                f.final_status.is_yes() && is_set(f.vendor_cost2) && !is_set(f.other_cost)
            })
            .rule(
                "Make the record chargeable",
                "final_amount",
                |f: &WarrantyUpdateForm| !f.chargeable.is_yes() && amount(f.final_amount) > 0.0,
            );

        Self { rules }
    }

    pub fn validate(&self, form: &WarrantyUpdateForm) -> ValidationReport {
        self.rules.validate(form)
    }
}

/// Validate with the default thresholds.
pub fn validate_warranty_update(form: &WarrantyUpdateForm) -> ValidationReport {
    WarrantyUpdateValidator::default().validate(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::YesNo;

    /// A record that passes every rule: delivered, settled, fully paid.
    fn settled() -> WarrantyUpdateForm {
        WarrantyUpdateForm {
            srf_number: "W0001".to_string(),
            challan_date: "2024-01-10".to_string(),
            vendor_date2: "2024-01-15".to_string(),
            repair_date: "2024-01-16".to_string(),
            delivery_date: "2024-01-20".to_string(),
            work_done: "Rewound stator".to_string(),
            vendor_cost1: Some(800.0),
            rewinding_done: YesNo::Yes,
            rewinding_cost: Some(1200.0),
            rewinding_base_cost: Some(1000.0),
            final_amount: Some(1500.0),
            receive_amount: Some(1500.0),
            final_status: YesNo::Yes,
            chargeable: YesNo::Yes,
            gst: YesNo::No,
            pc_number: "4521".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_record_is_valid() {
        let report = validate_warranty_update(&settled());
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn test_missing_return_date() {
        let form = WarrantyUpdateForm {
            challan_date: "2024-01-10".to_string(),
            ..Default::default()
        };
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Return Date Required"));
        assert!(report.is_flagged("vendor_date2"));
        assert!(!report.is_flagged("repair_date"));
    }

    #[test]
    fn test_missing_return_date_with_repair_flags_both() {
        let mut form = settled();
        form.vendor_date2.clear();
        let report = validate_warranty_update(&form);
        assert_eq!(
            report.errors.iter().filter(|e| *e == "Return Date Required").count(),
            2
        );
        assert!(report.is_flagged("vendor_date2"));
        assert!(report.is_flagged("repair_date"));
    }

    #[test]
    fn test_return_before_challan() {
        let mut form = settled();
        form.vendor_date2 = "2024-01-05".to_string();
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Invalid Return Date"));
        assert!(report.is_flagged("vendor_date2"));
    }

    #[test]
    fn test_dates_in_backend_format_are_compared() {
        let mut form = settled();
        form.challan_date = "10-01-2024".to_string();
        form.vendor_date2 = "2024-01-05".to_string();
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Invalid Return Date"));
    }

    #[test]
    fn test_unparseable_date_skips_ordering() {
        let mut form = settled();
        form.vendor_date2 = "not a date".to_string();
        let report = validate_warranty_update(&form);
        assert!(!report.has_error("Invalid Return Date"));
        assert!(!report.has_error("Invalid Repair Date"));
    }

    #[test]
    fn test_repair_and_delivery_ordering() {
        let mut form = settled();
        form.repair_date = "2024-01-14".to_string();
        form.delivery_date = "2024-01-13".to_string();
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Invalid Repair Date"));
        assert!(report.has_error("Invalid Delivery Date"));
        assert!(report.is_flagged("repair_date"));
        assert!(report.is_flagged("delivery_date"));
    }

    #[test]
    fn test_same_day_is_in_order() {
        let mut form = settled();
        form.vendor_date2 = form.challan_date.clone();
        form.repair_date = form.challan_date.clone();
        let report = validate_warranty_update(&form);
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn test_return_without_challan() {
        let form = WarrantyUpdateForm {
            vendor_date2: "2024-01-15".to_string(),
            ..Default::default()
        };
        let report = validate_warranty_update(&form);
        assert_eq!(report.first_error(), Some("Create Challan First"));
        assert!(report.is_flagged("challan_date"));
    }

    #[test]
    fn test_delivery_without_repair() {
        let mut form = settled();
        form.repair_date.clear();
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Repair Date Required"));
    }

    #[test]
    fn test_vendor_cost_needs_challan() {
        let form = WarrantyUpdateForm {
            vendor_cost1: Some(500.0),
            ..Default::default()
        };
        let report = validate_warranty_update(&form);
        assert_eq!(report.errors, vec!["Vendor Dates Required"]);
        assert!(report.is_flagged("vendor_date2"));
    }

    #[test]
    fn test_spare_without_cost() {
        let mut form = settled();
        form.spares[0].description = "Bearing".to_string();
        form.spares[0].cost = Some(0.0);
        form.spares[4].description = "Capacitor".to_string();
        let report = validate_warranty_update(&form);
        assert_eq!(report.errors[0], "Cost for Spare 1 is required");
        assert_eq!(report.errors[1], "Cost for Spare 5 is required");
        assert!(report.is_flagged("cost1"));
        assert!(report.is_flagged("cost5"));
        assert!(!report.is_flagged("cost2"));
    }

    #[test]
    fn test_vendor_other_cost_ratio() {
        let mut form = settled();
        form.other_cost = Some(1000.0);
        form.vendor_cost2 = Some(800.0);
        assert!(!validate_warranty_update(&form).has_error("Vendor Other Cost Too High"));

        form.vendor_cost2 = Some(801.0);
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Vendor Other Cost Too High"));
        assert!(report.is_flagged("other_cost"));

        let lenient = WarrantyUpdateValidator::new(ValidationThresholds {
            vendor_other_cost_ratio: 0.9,
            ..Default::default()
        });
        assert!(!lenient.validate(&form).has_error("Vendor Other Cost Too High"));
    }

    #[test]
    fn test_rewinding_cost_floor() {
        let mut form = settled();
        form.rewinding_cost = Some(900.0);
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Rewinding Cost too Low"));
        assert!(report.is_flagged("rewinding_cost"));

        form.rewinding_done = YesNo::No;
        assert!(!validate_warranty_update(&form).has_error("Rewinding Cost too Low"));
    }

    #[test]
    fn test_rewinding_floor_defaults_from_thresholds() {
        let mut form = settled();
        form.rewinding_base_cost = None;
        form.rewinding_cost = Some(300.0);
        assert!(!validate_warranty_update(&form).has_error("Rewinding Cost too Low"));

        let strict = WarrantyUpdateValidator::new(ValidationThresholds {
            default_rewinding_base_cost: 500.0,
            ..Default::default()
        });
        assert!(strict.validate(&form).has_error("Rewinding Cost too Low"));
    }

    #[test]
    fn test_work_done_required_on_delivery() {
        let mut form = settled();
        form.work_done = " ".to_string();
        let report = validate_warranty_update(&form);
        assert_eq!(report.errors, vec!["Work Done is required"]);
    }

    #[test]
    fn test_payment_must_match() {
        let mut form = settled();
        form.receive_amount = Some(1000.0);
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Full Payment Not Received"));
        assert!(report.is_flagged("receive_amount"));

        form.receive_amount = Some(2000.0);
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Excess Payment Received"));
        assert!(!report.has_error("Full Payment Not Received"));
    }

    #[test]
    fn test_payment_not_checked_before_delivery() {
        let form = WarrantyUpdateForm {
            final_amount: Some(500.0),
            chargeable: YesNo::Yes,
            ..Default::default()
        };
        assert!(validate_warranty_update(&form).is_valid());
    }

    #[test]
    fn test_final_settlement_requires_delivery() {
        let form = WarrantyUpdateForm {
            final_status: YesNo::Yes,
            pc_number: "1".to_string(),
            ..Default::default()
        };
        let report = validate_warranty_update(&form);
        assert_eq!(report.errors, vec!["Delivery Date is required"]);
        assert!(report.is_flagged("delivery_date"));
    }

    #[test]
    fn test_pc_number_or_invoice_number() {
        let mut form = settled();
        form.pc_number.clear();
        let report = validate_warranty_update(&form);
        assert!(report.has_error("PC Number is required"));
        assert!(report.is_flagged("pc_number"));

        form.gst = YesNo::Yes;
        form.invoice_number.clear();
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Invoice Number is required"));
        assert!(!report.has_error("PC Number is required"));
        assert!(report.is_flagged("invoice_number"));
    }

    #[test]
    fn test_settlement_requires_customer_costs_for_vendor_costs() {
        let mut form = settled();
        form.rewinding_cost = None;
        form.vendor_cost2 = Some(100.0);
        let report = validate_warranty_update(&form);
        assert!(report.has_error("Rewinding Cost is required"));
        assert!(report.has_error("Other Cost is required"));
        assert!(report.is_flagged("rewinding_cost"));
        assert!(report.is_flagged("other_cost"));
    }

    #[test]
    fn test_non_chargeable_with_amount() {
        let form = WarrantyUpdateForm {
            chargeable: YesNo::No,
            final_amount: Some(100.0),
            ..Default::default()
        };
        let report = validate_warranty_update(&form);
        assert_eq!(report.errors, vec!["Make the record chargeable"]);
        assert!(report.is_flagged("final_amount"));
    }

    #[test]
    fn test_rule_order_is_stable() {
        let form = WarrantyUpdateForm {
            challan_date: "2024-01-10".to_string(),
            delivery_date: "2024-01-20".to_string(),
            chargeable: YesNo::No,
            final_amount: Some(100.0),
            ..Default::default()
        };
        let report = validate_warranty_update(&form);
        assert_eq!(
            report.errors,
            vec![
                "Return Date Required",
                "Repair Date Required",
                "Work Done is required",
                "Full Payment Not Received",
                "Make the record chargeable",
            ]
        );
    }
}
