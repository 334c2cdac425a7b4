//! Field-scoped validation errors shared by every form in the client.

use std::fmt;

/// A single problem with one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    InPast,
    InvalidCep,
    UnknownSpecialty,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            FieldError::Required => "Required",
            FieldError::InvalidFormat => "Invalid format",
            FieldError::InPast => "Cannot be in the past",
            FieldError::InvalidCep => "CEP must contain 8 digits",
            FieldError::UnknownSpecialty => "Unknown specialty",
        };
        f.write_str(message)
    }
}

/// Every field error found by one validation pass, in check order.
///
/// Fields are keyed by their wire name (`idPaciente`, `cep`, ...) so the
/// caller can highlight each offending input at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, FieldError)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field`, replacing any earlier one.
    pub fn add(&mut self, field: &'static str, error: FieldError) {
        match self.errors.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = error,
            None => self.errors.push((field, error)),
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.errors.retain(|(name, _)| *name != field);
    }

    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, error)| *error)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FieldError)> + '_ {
        self.errors.iter().copied()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, error)) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Records `Required` for `field` when `value` is blank.
pub fn require(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, FieldError::Required);
    }
}
