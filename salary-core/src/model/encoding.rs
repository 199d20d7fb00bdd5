//! Turns a [`FeatureRow`] into the numeric vector a model artifact consumes.
//!
//! Artifacts declare an ordered list of column encoders. Numeric columns pass
//! through as one value; categorical columns expand to one slot per known
//! category (one-hot). The encoded vector is the concatenation of every
//! encoder's output in declaration order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{FeatureColumn, FeatureRow, FeatureValue, ModelError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnEncoder {
    Numeric {
        column: FeatureColumn,
    },
    OneHot {
        column: FeatureColumn,
        categories: Vec<String>,
    },
}

impl ColumnEncoder {
    pub fn column(&self) -> FeatureColumn {
        match self {
            Self::Numeric { column } | Self::OneHot { column, .. } => *column,
        }
    }

    /// Number of slots this encoder contributes to the feature vector.
    pub fn width(&self) -> usize {
        match self {
            Self::Numeric { .. } => 1,
            Self::OneHot { categories, .. } => categories.len(),
        }
    }
}

/// A validated, ordered set of column encoders covering every input column.
#[derive(Debug, Clone, PartialEq)]
pub struct RowEncoder {
    encoders: Vec<ColumnEncoder>,
    width: usize,
}

impl RowEncoder {
    /// Validates the encoder list.
    ///
    /// # Errors
    ///
    /// [`ModelError::Schema`] when a column is missing or repeated, when a
    /// numeric column is one-hot encoded (or the reverse), or when a one-hot
    /// category list is empty or has duplicates.
    pub fn new(encoders: Vec<ColumnEncoder>) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();

        for encoder in &encoders {
            let column = encoder.column();
            if !seen.insert(column) {
                return Err(ModelError::Schema(format!(
                    "column '{column}' is encoded more than once"
                )));
            }

            match encoder {
                ColumnEncoder::Numeric { .. } if column.is_categorical() => {
                    return Err(ModelError::Schema(format!(
                        "categorical column '{column}' cannot be numeric"
                    )));
                }
                ColumnEncoder::OneHot { categories, .. } => {
                    if !column.is_categorical() {
                        return Err(ModelError::Schema(format!(
                            "numeric column '{column}' cannot be one-hot encoded"
                        )));
                    }
                    if categories.is_empty() {
                        return Err(ModelError::Schema(format!(
                            "column '{column}' has no categories"
                        )));
                    }
                    let mut unique = HashSet::new();
                    if let Some(dup) = categories.iter().find(|c| !unique.insert(c.as_str())) {
                        return Err(ModelError::Schema(format!(
                            "column '{column}' lists category '{dup}' twice"
                        )));
                    }
                }
                ColumnEncoder::Numeric { .. } => {}
            }
        }

        if let Some(missing) = FeatureColumn::ALL.iter().find(|c| !seen.contains(*c)) {
            return Err(ModelError::Schema(format!(
                "column '{missing}' is not encoded"
            )));
        }

        let width = encoders.iter().map(ColumnEncoder::width).sum();
        Ok(Self { encoders, width })
    }

    /// Length of every vector produced by [`RowEncoder::encode`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Encodes one row.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownCategory`] when a categorical value is not among
    /// the categories the artifact was trained with.
    pub fn encode(
        &self,
        row: &FeatureRow,
    ) -> Result<Vec<f64>, ModelError> {
        let mut features = Vec::with_capacity(self.width);

        for encoder in &self.encoders {
            match (encoder, row.value(encoder.column())) {
                (ColumnEncoder::Numeric { .. }, FeatureValue::Numeric(value)) => {
                    features.push(value);
                }
                (ColumnEncoder::OneHot { column, categories }, FeatureValue::Category(value)) => {
                    let hot = categories
                        .iter()
                        .position(|c| c == value)
                        .ok_or_else(|| ModelError::UnknownCategory {
                            column: *column,
                            value: value.to_string(),
                        })?;
                    features.extend((0..categories.len()).map(|i| if i == hot { 1.0 } else { 0.0 }));
                }
                // RowEncoder::new rejects mismatched kinds.
                (encoder, value) => {
                    return Err(ModelError::Schema(format!(
                        "encoder for '{}' cannot encode {value:?}",
                        encoder.column()
                    )));
                }
            }
        }

        Ok(features)
    }
}
