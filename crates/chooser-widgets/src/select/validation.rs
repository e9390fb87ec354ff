//! Field validation for the select control.

/// Message used when a required select has no value.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "Please select an option";

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(msg) => Some(msg),
        }
    }
}

/// A check on the selected value. `None` means nothing is selected.
pub type Validator<T> = Box<dyn Fn(Option<&T>) -> ValidationResult + Send>;

/// Required flag, custom validators and the current invalid state.
pub struct FieldValidation<T> {
    required: bool,
    required_message: String,
    validators: Vec<Validator<T>>,
    error: Option<String>,
}

impl<T> Default for FieldValidation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FieldValidation<T> {
    pub fn new() -> Self {
        Self {
            required: false,
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
            validators: Vec::new(),
            error: None,
        }
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_required_message(&mut self, message: impl Into<String>) {
        self.required_message = message.into();
    }

    pub fn add_validator(&mut self, validator: Validator<T>) {
        self.validators.push(validator);
    }

    /// Run the required check then every validator, stopping at the first
    /// failure. The result becomes the current invalid state.
    pub fn validate(&mut self, value: Option<&T>) -> ValidationResult {
        let result = if self.required && value.is_none() {
            ValidationResult::Invalid(self.required_message.clone())
        } else {
            self.validators
                .iter()
                .map(|check| check(value))
                .find(|r| !r.is_valid())
                .unwrap_or(ValidationResult::Valid)
        };
        self.error = result.message().map(str::to_string);
        result
    }

    pub fn invalidate(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_invalid(&mut self) {
        self.error = None;
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_needs_a_value() {
        let mut v: FieldValidation<u8> = FieldValidation::new();
        assert!(v.validate(None).is_valid());
        v.set_required(true);
        assert_eq!(
            v.validate(None),
            ValidationResult::Invalid(DEFAULT_REQUIRED_MESSAGE.to_string())
        );
        assert!(!v.is_valid());
        assert!(v.validate(Some(&1)).is_valid());
        assert!(v.is_valid());
    }

    #[test]
    fn first_failing_validator_wins() {
        let mut v: FieldValidation<u8> = FieldValidation::new();
        v.add_validator(Box::new(|x| match x {
            Some(n) if *n > 10 => ValidationResult::Invalid("too big".into()),
            _ => ValidationResult::Valid,
        }));
        v.add_validator(Box::new(|_| ValidationResult::Invalid("never".into())));
        assert_eq!(v.validate(Some(&11)).message(), Some("too big"));
        assert_eq!(v.validate(Some(&1)).message(), Some("never"));
    }

    #[test]
    fn manual_invalidate_and_clear() {
        let mut v: FieldValidation<u8> = FieldValidation::new();
        v.invalidate("server rejected");
        assert_eq!(v.error(), Some("server rejected"));
        v.clear_invalid();
        assert!(v.is_valid());
    }

    #[test]
    fn custom_required_message() {
        let mut v: FieldValidation<u8> = FieldValidation::new();
        v.set_required(true);
        v.set_required_message("Pick one");
        assert_eq!(v.validate(None).message(), Some("Pick one"));
    }
}
