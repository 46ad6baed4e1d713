//! Launcher preferences record
//!
//! Grid dimensions, app filters and the categorization mode, serialized to
//! config.json with the launcher's camelCase keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::defaults;

/// How installed apps are split into tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    /// No categories - all apps are listed in a single pane
    None,
    /// Quest, Go/GearVR and 2D tabs
    #[default]
    Auto,
    /// Tabs taken from the custom app names file
    Custom,
}

impl CategoryType {
    pub const ALL: [CategoryType; 3] = [Self::None, Self::Auto, Self::Custom];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Auto => "auto",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `none`, `auto` or `custom`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category type {0:?} (expected none, auto or custom)")]
pub struct UnknownCategoryType(pub String);

impl FromStr for CategoryType {
    type Err = UnknownCategoryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategoryType(s.to_string()))
    }
}

/// App grid dimensions, rows x cols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            rows: defaults::grid::ROWS,
            cols: defaults::grid::COLS,
        }
    }
}

/// Root config object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigModel {
    #[serde(rename = "gridSize")]
    pub grid_size: GridSize,

    /// Whether to show 2D apps
    #[serde(rename = "show2D")]
    pub show_2d: bool,

    /// Whether to only show apps listed in the custom app names file.
    /// Installed apps missing from that file are hidden.
    #[serde(rename = "showOnlyCustom")]
    pub show_only_custom: bool,

    #[serde(rename = "categoryType")]
    pub category_type: CategoryType,
}

impl Default for ConfigModel {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            show_2d: defaults::filter::SHOW_2D,
            show_only_custom: defaults::filter::SHOW_ONLY_CUSTOM,
            category_type: CategoryType::default(),
        }
    }
}

impl ConfigModel {
    /// Pretty JSON in the on-disk layout
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
