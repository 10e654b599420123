use crate::utils::error::{DemoError, Result};
use std::fmt;

/// A string-typed slot that is permitted to hold no value at all.
///
/// Statically a string, but "absent" is a distinguished state of its
/// own. Member operations on an absent slot fail with
/// [`DemoError::NullDereference`] rather than returning a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullableString(Option<String>);

impl NullableString {
    /// Binds the slot to no value.
    pub fn absent() -> Self {
        Self(None)
    }

    pub fn of(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Equality comparison against `other`, as a member operation.
    ///
    /// There is no default answer for a comparison on a value that is
    /// not there, so the absent arm is an error, not `NotSame`.
    pub fn equals(&self, other: &str) -> Result<Comparison> {
        match &self.0 {
            Some(value) if value == other => Ok(Comparison::Same),
            Some(_) => Ok(Comparison::NotSame),
            None => Err(DemoError::NullDereference),
        }
    }
}

/// Outcome of an equality comparison that was able to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Same,
    NotSame,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Same => write!(f, "Same"),
            Comparison::NotSame => write!(f, "Not Same"),
        }
    }
}
