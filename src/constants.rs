//! Application-wide constants
//!
//! File locations and default preference values, kept in one place so the
//! model, the store and the CLI agree on them.

/// Configuration file location
pub mod config {
    /// Directory created under the platform data dir
    pub const APP_DIR: &str = "quest-app-launcher";

    /// Config file name
    pub const FILENAME: &str = "config.json";

    /// Environment variable that overrides the config directory
    pub const DIR_ENV_VAR: &str = "QUEST_LAUNCHER_CONFIG_DIR";
}

/// Field names reported when a config value is rejected
pub mod keys {
    pub const GRID_ROWS: &str = "gridSize.rows";
    pub const GRID_COLS: &str = "gridSize.cols";
    pub const CATEGORY_TYPE: &str = "categoryType";
}

/// Default configuration values
/// Used for a fresh model and for any field missing from the file
pub mod defaults {
    /// Launcher grid settings
    pub mod grid {
        /// Default number of rows in the app grid
        pub const ROWS: u32 = 3;

        /// Default number of columns in the app grid
        pub const COLS: u32 = 3;

        /// Smallest accepted value for either dimension
        pub const MIN_DIMENSION: u32 = 1;
    }

    /// App filtering settings
    pub mod filter {
        /// Include non-VR (2D) apps
        pub const SHOW_2D: bool = false;

        /// Show only apps named in the custom app list
        pub const SHOW_ONLY_CUSTOM: bool = false;
    }
}
