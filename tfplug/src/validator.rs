use crate::error::{Result, TfplugError};
use crate::types::{AttributePath, Diagnostic, Dynamic};

/// Checks a configured attribute value
///
/// Validators only see known values. Null and unknown values are skipped by
/// the caller.
pub trait Validator: Send + Sync {
    fn description(&self) -> String;

    fn validate(&self, value: &Dynamic, path: &AttributePath, diagnostics: &mut Vec<Diagnostic>);
}

fn invalid(path: &AttributePath, summary: String, detail: String) -> Diagnostic {
    Diagnostic::error(summary, detail).with_attribute(path.clone())
}

pub struct StringLengthValidator {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl StringLengthValidator {
    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_most(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }
}

impl Validator for StringLengthValidator {
    fn description(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("length between {} and {}", min, max),
            (Some(min), None) => format!("length at least {}", min),
            (None, Some(max)) => format!("length at most {}", max),
            (None, None) => "any length".to_string(),
        }
    }

    fn validate(&self, value: &Dynamic, path: &AttributePath, diagnostics: &mut Vec<Diagnostic>) {
        let Some(s) = value.as_str() else { return };
        let len = s.chars().count();
        if let Some(min) = self.min.filter(|min| len < *min) {
            diagnostics.push(invalid(
                path,
                format!("{} must have minimum length of {}", path, min),
                format!("Got length {}", len),
            ));
        }
        if let Some(max) = self.max.filter(|max| len > *max) {
            diagnostics.push(invalid(
                path,
                format!("{} must have maximum length of {}", path, max),
                format!("Got length {}", len),
            ));
        }
    }
}

pub struct StringPatternValidator {
    pattern: regex::Regex,
    description: String,
}

impl StringPatternValidator {
    pub fn new(pattern: &str, description: impl Into<String>) -> Result<Self> {
        let pattern = regex::Regex::new(pattern)
            .map_err(|e| TfplugError::SchemaError(format!("invalid pattern {}: {}", pattern, e)))?;
        Ok(Self {
            pattern,
            description: description.into(),
        })
    }
}

impl Validator for StringPatternValidator {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn validate(&self, value: &Dynamic, path: &AttributePath, diagnostics: &mut Vec<Diagnostic>) {
        if let Some(s) = value.as_str() {
            if !self.pattern.is_match(s) {
                diagnostics.push(invalid(
                    path,
                    format!("{} must be {}", path, self.description),
                    format!("Value '{}' does not match {}", s, self.pattern.as_str()),
                ));
            }
        }
    }
}

pub struct NumberRangeValidator {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Reject values with a fractional part
    pub whole: bool,
}

impl NumberRangeValidator {
    pub fn integer_between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min as f64),
            max: Some(max as f64),
            whole: true,
        }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            whole: false,
        }
    }
}

impl Validator for NumberRangeValidator {
    fn description(&self) -> String {
        format!("number in [{:?}, {:?}]", self.min, self.max)
    }

    fn validate(&self, value: &Dynamic, path: &AttributePath, diagnostics: &mut Vec<Diagnostic>) {
        let Some(n) = value.as_f64() else { return };
        if self.whole && n.fract() != 0.0 {
            diagnostics.push(invalid(
                path,
                format!("{} must be a whole number", path),
                format!("Got {}", n),
            ));
        }
        if let Some(min) = self.min.filter(|min| n < *min) {
            diagnostics.push(invalid(
                path,
                format!("{} must be at least {}", path, min),
                format!("Got {}", n),
            ));
        }
        if let Some(max) = self.max.filter(|max| n > *max) {
            diagnostics.push(invalid(
                path,
                format!("{} must be at most {}", path, max),
                format!("Got {}", n),
            ));
        }
    }
}

/// Restricts a string to a fixed set of choices
pub struct OneOfValidator {
    pub choices: Vec<String>,
}

impl OneOfValidator {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for OneOfValidator {
    fn description(&self) -> String {
        format!("one of: {}", self.choices.join(", "))
    }

    fn validate(&self, value: &Dynamic, path: &AttributePath, diagnostics: &mut Vec<Diagnostic>) {
        if let Some(s) = value.as_str() {
            if !self.choices.iter().any(|c| c == s) {
                diagnostics.push(invalid(
                    path,
                    format!("{} has an unsupported value", path),
                    format!("'{}' is not {}", s, self.description()),
                ));
            }
        }
    }
}

/// Calendar date in `YYYY-MM-DD` form
pub struct DateValidator;

impl Validator for DateValidator {
    fn description(&self) -> String {
        "a date in YYYY-MM-DD format".to_string()
    }

    fn validate(&self, value: &Dynamic, path: &AttributePath, diagnostics: &mut Vec<Diagnostic>) {
        if let Some(s) = value.as_str() {
            if let Err(e) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                diagnostics.push(invalid(
                    path,
                    format!("{} must be {}", path, self.description()),
                    format!("'{}': {}", s, e),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(validator: &dyn Validator, value: Dynamic) -> Vec<Diagnostic> {
        let mut diags = Vec::new();
        validator.validate(&value, &AttributePath::new("field"), &mut diags);
        diags
    }

    #[test]
    fn string_length_validator_bounds() {
        let validator = StringLengthValidator::between(3, 5);
        assert!(run(&validator, Dynamic::from("four")).is_empty());

        let diags = run(&validator, Dynamic::from("hi"));
        assert_eq!(diags.len(), 1);
        assert!(diags[0].summary.contains("minimum length"));

        let diags = run(&validator, Dynamic::from("too long"));
        assert!(diags[0].summary.contains("maximum length"));
        assert_eq!(diags[0].attribute, Some(AttributePath::new("field")));
    }

    #[test]
    fn string_pattern_validator_checks_slugs() {
        let validator = StringPatternValidator::new(r"^[-a-zA-Z0-9_]+$", "a valid slug").unwrap();
        assert!(run(&validator, Dynamic::from("dc-east_1")).is_empty());

        let diags = run(&validator, Dynamic::from("not a slug"));
        assert_eq!(diags.len(), 1);
        assert!(diags[0].summary.contains("a valid slug"));
    }

    #[test]
    fn string_pattern_validator_rejects_bad_pattern() {
        assert!(StringPatternValidator::new("(", "broken").is_err());
    }

    #[test]
    fn number_range_validator_checks_vlan_ids() {
        let validator = NumberRangeValidator::integer_between(1, 4094);
        assert!(run(&validator, Dynamic::Number(100.0)).is_empty());
        assert!(run(&validator, Dynamic::Number(0.0))[0]
            .summary
            .contains("at least"));
        assert!(run(&validator, Dynamic::Number(4095.0))[0]
            .summary
            .contains("at most"));
        assert!(run(&validator, Dynamic::Number(10.5))[0]
            .summary
            .contains("whole number"));
    }

    #[test]
    fn one_of_validator() {
        let validator = OneOfValidator::new(["active", "planned"]);
        assert!(run(&validator, Dynamic::from("active")).is_empty());
        assert_eq!(run(&validator, Dynamic::from("bogus")).len(), 1);
    }

    #[test]
    fn date_validator() {
        assert!(run(&DateValidator, Dynamic::from("2024-02-29")).is_empty());
        assert_eq!(run(&DateValidator, Dynamic::from("2023-02-29")).len(), 1);
        assert_eq!(run(&DateValidator, Dynamic::from("29/02/2024")).len(), 1);
    }

    #[test]
    fn non_matching_types_are_ignored() {
        assert!(run(&StringLengthValidator::at_most(1), Dynamic::Number(12.0)).is_empty());
        assert!(run(&NumberRangeValidator::between(0.0, 1.0), Dynamic::from("x")).is_empty());
    }
}
