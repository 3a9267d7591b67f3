//! Field contracts: the data the walker evaluates.

use chrono::{DateTime, Utc};

/// A single constraint on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value must not be its zero value.
    Required,
    /// A present value must be one of the listed strings.
    OneOf(&'static [&'static str]),
    /// Validate the nested value against its own contract.
    Dive,
}

impl Rule {
    /// The rule name used in error messages.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::OneOf(_) => "oneof",
            Self::Dive => "dive",
        }
    }
}

/// A borrowed view of a field's value, as far as validation cares.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Timestamp(Option<&'a DateTime<Utc>>),
    Nested(Option<&'a dyn Validate>),
}

impl<'a> FieldValue<'a> {
    /// Views an optional string; `None` reads as empty text.
    #[must_use]
    pub fn optional_text(value: Option<&'a String>) -> Self {
        Self::Text(value.map_or("", String::as_str))
    }

    /// Returns true if the value counts as absent for [`Rule::Required`].
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Integer(n) => *n == 0,
            Self::Float(f) => *f == 0.0,
            Self::Bool(b) => !b,
            Self::Timestamp(t) => t.is_none(),
            Self::Nested(v) => v.is_none_or(|inner| inner.is_empty_value()),
        }
    }

    /// Returns true if the value is in `allowed`.
    ///
    /// Integers compare against the decimal form of the allowed entries.
    /// Other kinds never match.
    #[must_use]
    pub fn is_one_of(&self, allowed: &[&str]) -> bool {
        match self {
            Self::Text(s) => allowed.contains(s),
            Self::Integer(n) => allowed.iter().any(|a| a.parse::<i64>() == Ok(*n)),
            _ => false,
        }
    }
}

impl std::fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Timestamp(t) => f.debug_tuple("Timestamp").field(t).finish(),
            Self::Nested(v) => f
                .debug_tuple("Nested")
                .field(&v.map(|inner| inner.struct_name()))
                .finish(),
        }
    }
}

/// One row of a contract table.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    /// Field name as it appears in error paths.
    pub name: &'static str,
    /// The value under test.
    pub value: FieldValue<'a>,
    /// Rules in evaluation order.
    pub rules: &'static [Rule],
}

impl<'a> Field<'a> {
    #[must_use]
    pub const fn new(name: &'static str, value: FieldValue<'a>, rules: &'static [Rule]) -> Self {
        Self { name, value, rules }
    }
}

/// A value with a structural contract.
///
/// Implementors list every field that carries a rule. Fields with no rules
/// may be left out of the table.
///
/// # Example
///
/// ```
/// use opslevel_notify::validate::{Field, FieldValue, Rule, Validate, validate};
///
/// struct Findings {
///     high: i64,
/// }
///
/// impl Validate for Findings {
///     fn struct_name(&self) -> &'static str {
///         "Findings"
///     }
///
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![Field::new("High", FieldValue::Integer(self.high), &[Rule::Required])]
///     }
/// }
///
/// let err = validate(&Findings { high: 0 }).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Key: 'Findings.High' Error:Field validation for 'High' failed on the 'required' tag"
/// );
/// ```
pub trait Validate {
    /// Name of the structure, used as the root of error paths.
    fn struct_name(&self) -> &'static str;

    /// The contract table for this value.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Whether this value, seen as a nested field, counts as absent.
    fn is_empty_value(&self) -> bool {
        false
    }
}

/// Arbitrary JSON is opaque: its only contract is not being `null`.
impl Validate for serde_json::Value {
    fn struct_name(&self) -> &'static str {
        "Value"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }

    fn is_empty_value(&self) -> bool {
        self.is_null()
    }
}
