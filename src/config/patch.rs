//! Partial config documents
//!
//! config.json may hold any subset of the model's fields. The document is
//! parsed into a [`ConfigPatch`] where every field is optional, then applied
//! onto an existing [`ConfigModel`] so that absent fields keep their current
//! value instead of falling back to type defaults.
//!
//! Parsing is all-or-nothing: a syntax error, invalid UTF-8 or a wrong JSON
//! type anywhere fails the whole patch. Values of the right JSON type that
//! are out of range (a grid dimension of `0`, `2.5` or `1e30`, an unknown
//! category name) are rejected one field at a time during
//! [`ConfigPatch::apply`].

use serde::Deserialize;
use serde::de::Error as _;
use tracing::debug;

use crate::config::model::{CategoryType, ConfigModel};
use crate::constants::{defaults, keys};

/// Partial `gridSize` object
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GridSizePatch {
    /// Any JSON number; range-checked when applied
    pub rows: Option<serde_json::Number>,
    pub cols: Option<serde_json::Number>,
}

/// Partial config document. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigPatch {
    #[serde(rename = "gridSize")]
    pub grid_size: Option<GridSizePatch>,
    #[serde(rename = "show2D")]
    pub show_2d: Option<bool>,
    #[serde(rename = "showOnlyCustom")]
    pub show_only_custom: Option<bool>,
    /// Kept as a string so an unknown value rejects only this field
    #[serde(rename = "categoryType")]
    pub category_type: Option<String>,
}

/// A field whose value was well-typed but not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedField {
    pub field: &'static str,
    pub reason: String,
}

impl ConfigPatch {
    /// Parse a config document. The top-level value must be an object.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        Self::from_slice(text.as_bytes())
    }

    /// Parse raw file contents. Invalid UTF-8 is a parse error.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom(
                "config document must be a JSON object",
            ));
        }
        // Second pass over the bytes so type errors keep their line and column
        serde_json::from_slice(bytes)
    }

    /// Overwrite the fields present in this patch onto `model`.
    ///
    /// Returns the fields that were skipped; those keep their prior value.
    pub fn apply(self, model: &mut ConfigModel) -> Vec<RejectedField> {
        let mut rejected = Vec::new();

        if let Some(grid) = self.grid_size {
            if let Some(rows) = grid.rows {
                match grid_dimension(&rows) {
                    Ok(rows) => model.grid_size.rows = rows,
                    Err(reason) => rejected.push(RejectedField {
                        field: keys::GRID_ROWS,
                        reason,
                    }),
                }
            }
            if let Some(cols) = grid.cols {
                match grid_dimension(&cols) {
                    Ok(cols) => model.grid_size.cols = cols,
                    Err(reason) => rejected.push(RejectedField {
                        field: keys::GRID_COLS,
                        reason,
                    }),
                }
            }
        }

        if let Some(show_2d) = self.show_2d {
            model.show_2d = show_2d;
        }

        if let Some(show_only_custom) = self.show_only_custom {
            model.show_only_custom = show_only_custom;
        }

        if let Some(category) = self.category_type {
            match category.parse::<CategoryType>() {
                Ok(category) => model.category_type = category,
                Err(e) => rejected.push(RejectedField {
                    field: keys::CATEGORY_TYPE,
                    reason: e.to_string(),
                }),
            }
        }

        debug!(rejected = rejected.len(), "Applied config patch");
        rejected
    }
}

fn grid_dimension(value: &serde_json::Number) -> Result<u32, String> {
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v >= defaults::grid::MIN_DIMENSION)
        .ok_or_else(|| {
            format!(
                "{} is not a valid grid dimension (must be an integer between {} and {})",
                value,
                defaults::grid::MIN_DIMENSION,
                u32::MAX
            )
        })
}
