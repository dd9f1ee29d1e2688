//! Per-field validation rules.
//!
//! A rule is a pure function of the whole value map, the field being checked and an
//! optional argument. It answers with an empty string when the value is acceptable
//! and a human-readable message otherwise.

mod rules;

use std::fmt;

use serde_json::Value;

use crate::domain::FieldValues;

pub use rules::{is_email, max_length, required};

pub type RuleFn = fn(&FieldValues, &str, Option<&Value>) -> String;

/// A named validation function.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    check: RuleFn,
}

impl Rule {
    pub const REQUIRED: Rule = Rule::new("required", required);
    pub const IS_EMAIL: Rule = Rule::new("isEmail", is_email);
    pub const MAX_LENGTH: Rule = Rule::new("maxLength", max_length);

    const BUILTIN: [Rule; 3] = [Rule::REQUIRED, Rule::IS_EMAIL, Rule::MAX_LENGTH];

    pub const fn new(name: &'static str, check: RuleFn) -> Self {
        Self { name, check }
    }

    /// Looks up one of the built-in rules by its configuration name.
    pub fn builtin(name: &str) -> Option<Rule> {
        Self::BUILTIN.into_iter().find(|rule| rule.name == name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn check(&self, values: &FieldValues, field: &str, args: Option<&Value>) -> String {
        (self.check)(values, field, args)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

/// A rule attached to a field, plus the argument it is evaluated with.
#[derive(Debug, Clone)]
pub struct ValidationBinding {
    pub rule: Rule,
    pub args: Option<Value>,
}

impl ValidationBinding {
    pub fn new(rule: Rule) -> Self {
        Self { rule, args: None }
    }

    pub fn with_args(rule: Rule, args: impl Into<Value>) -> Self {
        Self {
            rule,
            args: Some(args.into()),
        }
    }

    pub fn evaluate(&self, values: &FieldValues, field: &str) -> String {
        self.rule.check(values, field, self.args.as_ref())
    }
}
