use super::aggregate::{
    has_rate_table, CreateModel, RewindingChargeRequest, FHP_MOTOR, LT_DEFAULT_REWINDING_TYPE,
    LT_MOTOR,
};
use crate::shared::form_value::{blank_to_none, parse_amount};
use serde::{Deserialize, Serialize};

/// Editable fields of the model create form (division has its own setter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelField {
    Model,
    Frame,
    HpRating,
    RewindingType,
    RewindingCharge,
}

/// State of the "Create Model Record" form. Every value is the raw input text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelCreateForm {
    pub division: String,
    pub model: String,
    pub frame: String,
    pub hp_rating: String,
    #[serde(rename = "winding_type")]
    pub rewinding_type: String,
    pub rewinding_charge: String,
}

impl ModelCreateForm {
    pub fn is_lt_motor(&self) -> bool {
        self.division == LT_MOTOR
    }

    pub fn is_fhp_motor(&self) -> bool {
        self.division == FHP_MOTOR
    }

    /// The charge is read-only and fetched from the rate table.
    pub fn is_rewinding_locked(&self) -> bool {
        has_rate_table(&self.division)
    }

    /// Switching division resets every dependent field.
    pub fn set_division(&mut self, division: &str) {
        self.division = division.to_string();
        self.frame.clear();
        self.hp_rating.clear();
        self.rewinding_type = if division == LT_MOTOR {
            LT_DEFAULT_REWINDING_TYPE.to_string()
        } else {
            String::new()
        };
        self.rewinding_charge.clear();
    }

    /// Any change except to the charge itself invalidates a fetched charge.
    pub fn set_field(&mut self, field: ModelField, value: String) {
        match field {
            ModelField::RewindingCharge => {
                self.rewinding_charge = value;
                return;
            }
            ModelField::Model => self.model = value,
            ModelField::Frame => self.frame = value,
            ModelField::HpRating => self.hp_rating = value,
            ModelField::RewindingType => self.rewinding_type = value,
        }
        self.rewinding_charge.clear();
    }

    /// Request for the rate table, only for divisions that have one.
    pub fn charge_request(&self) -> Option<RewindingChargeRequest> {
        if !self.is_rewinding_locked() {
            return None;
        }
        Some(RewindingChargeRequest {
            division: self.division.clone(),
            frame: blank_to_none(&self.frame),
            hp_rating: parse_amount(&self.hp_rating),
            winding_type: blank_to_none(&self.rewinding_type),
        })
    }

    /// Store the charge returned by the rate table (missing → cleared).
    pub fn apply_charge(&mut self, rewinding_cost: Option<f64>) {
        self.rewinding_charge = match rewinding_cost {
            Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
            Some(v) => v.to_string(),
            None => String::new(),
        };
    }

    pub fn to_payload(&self) -> CreateModel {
        CreateModel {
            division: self.division.trim().to_string(),
            model: self.model.trim().to_string(),
            frame: blank_to_none(&self.frame),
            hp_rating: parse_amount(&self.hp_rating),
            winding_type: blank_to_none(&self.rewinding_type),
            rewinding_charge: parse_amount(&self.rewinding_charge).map(|v| v.round() as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ModelCreateForm {
        ModelCreateForm {
            division: FHP_MOTOR.to_string(),
            model: "M1".to_string(),
            frame: String::new(),
            hp_rating: "0.5".to_string(),
            rewinding_type: "Aluminium".to_string(),
            rewinding_charge: "450".to_string(),
        }
    }

    #[test]
    fn test_division_change_resets_dependents() {
        let mut form = filled();
        form.set_division(LT_MOTOR);
        assert_eq!(form.division, LT_MOTOR);
        assert_eq!(form.hp_rating, "");
        assert_eq!(form.rewinding_charge, "");
        assert_eq!(form.rewinding_type, "Copper");
        assert_eq!(form.model, "M1");

        form.set_division("FANS");
        assert_eq!(form.rewinding_type, "");
    }

    #[test]
    fn test_field_change_clears_charge() {
        let mut form = filled();
        form.set_field(ModelField::HpRating, "1".to_string());
        assert_eq!(form.rewinding_charge, "");

        form.set_field(ModelField::RewindingCharge, "300".to_string());
        assert_eq!(form.rewinding_charge, "300");
    }

    #[test]
    fn test_charge_request_only_for_rate_table_divisions() {
        let form = filled();
        let request = form.charge_request().unwrap();
        assert_eq!(request.hp_rating, Some(0.5));
        assert_eq!(request.frame, None);
        assert_eq!(request.winding_type.as_deref(), Some("Aluminium"));

        let mut fans = filled();
        fans.set_division("FANS");
        assert!(fans.charge_request().is_none());
    }

    #[test]
    fn test_payload_blanks_become_null() {
        let mut form = filled();
        form.hp_rating = "abc".to_string();
        let payload = form.to_payload();
        assert_eq!(payload.frame, None);
        assert_eq!(payload.hp_rating, None);
        assert_eq!(payload.rewinding_charge, Some(450));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["winding_type"], "Aluminium");
        assert!(json["frame"].is_null());
    }

    #[test]
    fn test_apply_charge() {
        let mut form = filled();
        form.apply_charge(Some(1200.0));
        assert_eq!(form.rewinding_charge, "1200");
        form.apply_charge(None);
        assert_eq!(form.rewinding_charge, "");
    }
}
