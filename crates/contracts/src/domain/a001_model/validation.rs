use super::aggregate::{FHP_MOTOR, LT_MOTOR};
use super::form::ModelCreateForm;
use crate::shared::form_value::is_blank;
use crate::shared::validation::{RuleSet, ValidationReport};

/// Rules for the model create form, in reporting order.
pub fn model_rules() -> RuleSet<ModelCreateForm> {
    RuleSet::new()
        .rule("Division is required", "division", |f: &ModelCreateForm| {
            is_blank(&f.division)
        })
        .rule("Model is required", "model", |f: &ModelCreateForm| {
            is_blank(&f.model)
        })
        .rule(
            "Rewinding Rate is required",
            "rewinding_charge",
            |f: &ModelCreateForm| is_blank(&f.rewinding_charge),
        )
        .rule("Frame is required", "frame", |f: &ModelCreateForm| {
            f.division == LT_MOTOR && is_blank(&f.frame)
        })
        .rule("HP Rating is required", "hp_rating", |f: &ModelCreateForm| {
            f.division == FHP_MOTOR && is_blank(&f.hp_rating)
        })
        .rule(
            "Rewinding type is required",
            "rewinding_type",
            |f: &ModelCreateForm| f.division == FHP_MOTOR && is_blank(&f.rewinding_type),
        )
}

pub fn validate_model(form: &ModelCreateForm) -> ValidationReport {
    model_rules().validate(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(division: &str) -> ModelCreateForm {
        ModelCreateForm {
            division: division.to_string(),
            model: "M1".to_string(),
            rewinding_charge: "10".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_form_reports_always_required_fields() {
        let report = validate_model(&ModelCreateForm::default());
        assert_eq!(
            report.errors,
            vec![
                "Division is required",
                "Model is required",
                "Rewinding Rate is required"
            ]
        );
        assert!(report.is_flagged("division"));
        assert!(report.is_flagged("model"));
        assert!(report.is_flagged("rewinding_charge"));
        assert!(!report.is_flagged("frame"));
    }

    #[test]
    fn test_lt_motor_requires_frame() {
        let report = validate_model(&form(LT_MOTOR));
        assert!(report.has_error("Frame is required"));
        assert!(report.is_flagged("frame"));

        let mut with_frame = form(LT_MOTOR);
        with_frame.frame = "F1".to_string();
        let report = validate_model(&with_frame);
        assert!(!report.has_error("Frame is required"));
        assert!(report.is_valid());
    }

    #[test]
    fn test_fhp_motor_requires_hp_and_type() {
        let report = validate_model(&form(FHP_MOTOR));
        assert!(report.has_error("HP Rating is required"));
        assert!(report.has_error("Rewinding type is required"));
        assert!(report.is_flagged("hp_rating"));
        assert!(report.is_flagged("rewinding_type"));
        assert!(!report.has_error("Frame is required"));
    }

    #[test]
    fn test_other_divisions_need_only_base_fields() {
        let report = validate_model(&form("FANS"));
        assert!(report.is_valid());
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut f = form("FANS");
        f.model = "   ".to_string();
        let report = validate_model(&f);
        assert_eq!(report.first_error(), Some("Model is required"));
    }
}
