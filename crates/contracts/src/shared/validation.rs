//! Declarative form validation.
//!
//! A form validator is an ordered [`RuleSet`]: each [`Rule`] names the
//! message it reports, the fields it highlights and the predicate that
//! detects the violation. Evaluation order matters only for
//! [`ValidationReport::first_error`], which is the one message shown to the
//! user; every flagged field is highlighted at once.

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of running a [`RuleSet`] against a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Messages in rule order.
    pub errors: Vec<String>,
    /// Field name → `true` for every highlighted field.
    pub errors_label: BTreeMap<String, bool>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn is_flagged(&self, field: &str) -> bool {
        self.errors_label.get(field).copied().unwrap_or(false)
    }

    pub fn has_error(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e == message)
    }

    pub fn push<I, S>(&mut self, message: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors.push(message.into());
        for field in fields {
            self.errors_label.insert(field.into(), true);
        }
    }
}

type Predicate<F> = Box<dyn Fn(&F) -> bool>;

/// One check: when `predicate` returns `true` the rule is violated.
pub struct Rule<F> {
    message: String,
    fields: Vec<String>,
    predicate: Predicate<F>,
}

impl<F> Rule<F> {
    pub fn new(
        message: impl Into<String>,
        field: impl Into<String>,
        predicate: impl Fn(&F) -> bool + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            fields: vec![field.into()],
            predicate: Box::new(predicate),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn is_violated_by(&self, form: &F) -> bool {
        (self.predicate)(form)
    }
}

impl<F> std::fmt::Debug for Rule<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Ordered list of rules for one form type.
#[derive(Debug)]
pub struct RuleSet<F> {
    rules: Vec<Rule<F>>,
}

impl<F> Default for RuleSet<F> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<F> RuleSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(
        mut self,
        message: impl Into<String>,
        field: impl Into<String>,
        predicate: impl Fn(&F) -> bool + 'static,
    ) -> Self {
        self.rules.push(Rule::new(message, field, predicate));
        self
    }

    pub fn push(&mut self, rule: Rule<F>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule<F>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn validate(&self, form: &F) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            if rule.is_violated_by(form) {
                report.push(rule.message.clone(), rule.fields.iter().cloned());
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        a: i32,
        b: i32,
    }

    fn rules() -> RuleSet<Pair> {
        RuleSet::new()
            .rule("A must be positive", "a", |p: &Pair| p.a <= 0)
            .rule("B must be positive", "b", |p: &Pair| p.b <= 0)
            .rule("A must not exceed B", "a", |p: &Pair| p.a > p.b)
    }

    #[test]
    fn test_valid_form_has_empty_report() {
        let report = rules().validate(&Pair { a: 1, b: 2 });
        assert!(report.is_valid());
        assert_eq!(report.first_error(), None);
        assert!(report.errors_label.is_empty());
    }

    #[test]
    fn test_messages_keep_rule_order() {
        let report = rules().validate(&Pair { a: 5, b: -1 });
        assert_eq!(report.errors, vec!["B must be positive", "A must not exceed B"]);
        assert_eq!(report.first_error(), Some("B must be positive"));
        assert!(report.is_flagged("a"));
        assert!(report.is_flagged("b"));
    }

    #[test]
    fn test_same_field_flagged_once() {
        let report = rules().validate(&Pair { a: 0, b: -5 });
        assert_eq!(report.errors.len(), 3);
        assert_eq!(report.errors_label.len(), 2);
    }
}
