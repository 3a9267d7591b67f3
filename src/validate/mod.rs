//! Structural validation of outgoing requests.
//!
//! Every request type describes itself as a table of [`Field`]s, each with a
//! view of its value and the [`Rule`]s that apply to it. A single walker,
//! [`validate`], evaluates those tables, descending into nested values, and
//! collects every violation into [`ValidationErrors`].
//!
//! # Rules
//!
//! - [`Rule::Required`] rejects zero values: empty text, `0`, `false`, a
//!   missing timestamp, a missing nested value.
//! - [`Rule::OneOf`] restricts a present value to a fixed set. Absent values
//!   are left to `Required`.
//! - [`Rule::Dive`] validates a nested value with the field name appended to
//!   the error path.
//!
//! A field stops at its first failing rule.
//!
//! # Error format
//!
//! Violations render as
//! `Key: 'CheckRequest.Status' Error:Field validation for 'Status' failed on the 'oneof' tag`.
//! Callers match on this text, so it must stay stable.

mod contract;
mod error;
mod walker;


pub use contract::{Field, FieldValue, Rule, Validate};
pub use error::{FieldError, ValidationErrors};
pub use walker::validate;
