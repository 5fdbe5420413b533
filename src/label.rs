use serde::{Deserialize, Serialize};
use std::fmt;

/// A column label as it arrives from upstream data: either a single value or
/// the ordered parts of a multi-level header.
///
/// The untagged serde representation mirrors how dynamically-shaped labels
/// travel over a serialized boundary: a JSON string becomes a [`Scalar`] and a
/// JSON array of strings becomes a [`Composite`]. Anything else surfaces
/// serde's own deserialization error.
///
/// [`Scalar`]: ColumnLabel::Scalar
/// [`Composite`]: ColumnLabel::Composite
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnLabel {
    Scalar(String),
    Composite(Vec<String>),
}

impl ColumnLabel {
    /// Builds a scalar label from any displayable value. Non-text labels
    /// (e.g. a bare year used as a column name) are stringified with their
    /// standard representation.
    pub fn scalar(value: impl ToString) -> Self {
        Self::Scalar(value.to_string())
    }

    /// Builds a composite label from the ordered parts of a multi-level
    /// header, preserving order and arity.
    pub fn composite<I, T>(parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self::Composite(parts.into_iter().map(|part| part.to_string()).collect())
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    /// Number of parts: 1 for a scalar, the arity for a composite.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Composite(parts) => parts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape-preserving normalization; see [`crate::normalize_label`].
    pub fn normalize(&self) -> Self {
        crate::normalizer::normalize_label(self)
    }
}

impl From<&str> for ColumnLabel {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for ColumnLabel {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for ColumnLabel {
    fn from(parts: Vec<String>) -> Self {
        Self::Composite(parts)
    }
}

impl From<&[&str]> for ColumnLabel {
    fn from(parts: &[&str]) -> Self {
        Self::composite(parts.iter().copied())
    }
}

impl<A: ToString, B: ToString> From<(A, B)> for ColumnLabel {
    fn from((first, second): (A, B)) -> Self {
        Self::Composite(vec![first.to_string(), second.to_string()])
    }
}

impl<A: ToString, B: ToString, C: ToString> From<(A, B, C)> for ColumnLabel {
    fn from((first, second, third): (A, B, C)) -> Self {
        Self::Composite(vec![
            first.to_string(),
            second.to_string(),
            third.to_string(),
        ])
    }
}

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => f.write_str(value),
            Self::Composite(parts) => f.write_str(&parts.join(" / ")),
        }
    }
}
