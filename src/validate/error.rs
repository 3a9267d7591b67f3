//! Validation error types.

use std::fmt;

use thiserror::Error;

use super::Rule;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Key: '{path}' Error:Field validation for '{field}' failed on the '{}' tag", .rule.tag())]
pub struct FieldError {
    path: String,
    field: &'static str,
    rule: Rule,
}

impl FieldError {
    #[must_use]
    pub const fn new(path: String, field: &'static str, rule: Rule) -> Self {
        Self { path, field, rule }
    }

    /// Dotted path from the root structure, e.g. `PayloadRequest.Data.High`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The field name without its parents.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// The violated rule.
    #[must_use]
    pub const fn rule(&self) -> Rule {
        self.rule
    }
}

/// Every violation found in one request, in contract order.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(super) const fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false; kept for symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the violation recorded for `path`, if any.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.path == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
